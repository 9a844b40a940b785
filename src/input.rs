//! This module contains all functions related to taking input from the player. They all use the
//! `dialoguer` crate to process the input, and they all check for input validation.
//!
//! Specifically, one function takes the guess for the current round as a coordinate, and the other
//! asks whether to play another game once one is over.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use regex::Regex;

use crate::coords::{Coordinate, ValidationError};

/// This struct reads coordinates typed as `lat, lng` or `lat lng`, with optional signs and
/// decimals on both values. Only ASCII digits are accepted, and a decimal point needs digits on
/// both of its sides.
#[derive(Clone, Debug)]
pub struct GuessParser {
    /// The expression capturing the latitude and the longitude, in that order.
    re: Regex,
}

impl GuessParser {
    /// Compiles the expression behind the parser.
    ///
    /// # Errors
    ///
    /// Fails with a `regex::Error` if the expression does not compile.
    pub fn new() -> Result<Self, regex::Error> {
        let re = Regex::new(
            r"\A\s*([+-]?[0-9]+(?:\.[0-9]+)?)\s*(?:,\s*|\s+)([+-]?[0-9]+(?:\.[0-9]+)?)\s*\z",
        )?;
        Ok(Self { re })
    }

    /// Reads a coordinate out of `input`.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::Format`] if the text is not a pair of numbers, and with a
    /// range error if either number falls outside of the globe.
    pub fn parse(&self, input: &str) -> Result<Coordinate, ValidationError> {
        let format = || ValidationError::Format(input.trim().to_owned());
        let captures = self.re.captures(input).ok_or_else(format)?;
        let degrees = |group: usize| -> Result<f64, ValidationError> {
            captures
                .get(group)
                .and_then(|value| value.as_str().parse().ok())
                .ok_or_else(format)
        };

        Coordinate::new(degrees(1)?, degrees(2)?)
    }
}

/// This function asks the player whether they want to play another game after the final round.
pub(crate) fn ask_new_game(term: &Term) -> Result<bool> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Start a new game?").bold()))
        .default(true)
        .interact_on(term)?;

    Ok(answer)
}

/// This function is in charge of taking the guess for the current round. The prompt keeps asking
/// until the input is a valid coordinate, so nothing malformed reaches the game.
pub(crate) fn take_guess(term: &Term, parser: &GuessParser) -> Result<Coordinate> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style("Where is it? Input a coordinate in the format lat, lng").bold()
        ))
        .validate_with(|input: &String| -> Result<(), ValidationError> {
            parser.parse(input).map(|_| ())
        })
        .interact_text_on(term)?;

    Ok(parser.parse(&input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the parser used by every test.
    fn parser() -> GuessParser {
        GuessParser::new().expect("expression compiles")
    }

    #[test]
    fn parses_comma_and_space_separated_pairs() {
        let expected = Coordinate::new(48.8584, -2.2945).expect("valid coordinate");

        assert_eq!(parser().parse("48.8584, -2.2945"), Ok(expected), "comma");
        assert_eq!(parser().parse("48.8584 -2.2945"), Ok(expected), "space");
        assert_eq!(parser().parse("  +48.8584,-2.2945 "), Ok(expected), "padding and sign");
    }

    #[test]
    fn parses_integers() {
        assert_eq!(
            parser().parse("-90, 180"),
            Coordinate::new(-90.0, 180.0),
            "integer degrees"
        );
    }

    #[test]
    fn rejects_malformed_text() {
        for input in ["", "paris", "10", "10,", ",10", "1.2.3, 4", "10; 20", "1e3, 2"] {
            assert!(
                matches!(parser().parse(input), Err(ValidationError::Format(_))),
                "`{input}` should not parse"
            );
        }
    }

    #[test]
    fn rejects_bare_decimal_points() {
        for input in [".5, 10", "5., 10", "10, .5", "10, 5."] {
            assert!(
                matches!(parser().parse(input), Err(ValidationError::Format(_))),
                "`{input}` needs digits around its decimal point"
            );
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        for input in ["\u{663}, \u{664}", "\u{ff11}\u{ff12}, 3"] {
            assert!(
                !parser().re.is_match(input),
                "`{input}` should not match the expression"
            );
            assert!(
                matches!(parser().parse(input), Err(ValidationError::Format(_))),
                "`{input}` should not parse"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            parser().parse("95, 10"),
            Err(ValidationError::Latitude(95.0)),
            "latitude"
        );
        assert_eq!(
            parser().parse("10, -200"),
            Err(ValidationError::Longitude(-200.0)),
            "longitude"
        );
    }
}
