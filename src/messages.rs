//! This module contains everything the terminal shows besides the prompts: the banner, the round
//! header with the panorama link, the score of each guess and the final score.

use anyhow::Result;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::coords::Coordinate;
use crate::scoring::MAX_ROUND_SCORE;
use crate::state::{GuessOutcome, Snapshot};

/// The address of a Street View panorama, completed with a `lat,lng` viewpoint.
const PANORAMA_URL: &str = "https://www.google.com/maps/@?api=1&map_action=pano&viewpoint=";

/// This function initializes the message to be used at the start of the program. The screen is
/// cleared and the title of the console window is set to the name of the game.
pub(crate) fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to terraguess";

    term.clear_screen()?;
    term.set_title("terraguess");

    term.write_line(&format!("{}", style(MSG).bold()))?;
    term.write_line("Open the panorama of each round and guess where on Earth it was taken.")?;
    Ok(())
}

/// Returns the link opening the panorama closest to `target`.
pub(crate) fn panorama_url(target: &Coordinate) -> String {
    format!(
        "{PANORAMA_URL}{},{}",
        target.latitude(),
        target.longitude()
    )
}

/// This function shows the final score once the last round has been played.
pub(crate) fn show_game_over(term: &Term, snapshot: &Snapshot) -> Result<()> {
    term.write_line("")?;
    term.write_line(&format!(
        "{} Your total score is: {}",
        style("Game Over!").bold().red(),
        style(snapshot.score).bold().cyan()
    ))?;
    Ok(())
}

/// This function reports on the guess just made: how far it was, where the target really was, and
/// the points it earned, drawn as a bar out of the maximum score of a round.
pub(crate) fn show_outcome(term: &Term, outcome: &GuessOutcome) -> Result<()> {
    term.write_line(&format!(
        "Your guess was {} away from {}.",
        style(format!("{:.1} km", outcome.distance_km)).bold(),
        style(outcome.target).bold()
    ))?;

    let bar = ProgressBar::with_draw_target(
        Some(u64::from(MAX_ROUND_SCORE)),
        ProgressDrawTarget::term(term.clone(), 20),
    );
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    bar.set_message(format!("Round {}", outcome.round));
    bar.set_position(u64::from(outcome.round_score));
    bar.finish();

    term.write_line(&format!(
        "Total score: {}",
        style(outcome.total_score).bold().cyan()
    ))?;
    Ok(())
}

/// This function draws the header of a round: the round counter, the score so far and the
/// panorama to look at.
pub(crate) fn show_round(term: &Term, snapshot: &Snapshot) -> Result<()> {
    term.write_line("")?;
    term.write_line(&format!(
        "{}    {}",
        style(format!("Round: {}/{}", snapshot.round, snapshot.max_rounds)).bold(),
        style(format!("Score: {}", snapshot.score)).bold()
    ))?;
    term.write_line(&format!(
        "Panorama: {}",
        style(panorama_url(&snapshot.target)).underlined()
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panorama_url_points_at_the_target() {
        let target = Coordinate::new(-12.5, 130.25).expect("valid coordinate");

        assert_eq!(
            panorama_url(&target),
            "https://www.google.com/maps/@?api=1&map_action=pano&viewpoint=-12.5,130.25",
            "viewpoint uses the full precision of the target"
        );
    }
}
