//! Screen-then-model orchestration over pluggable collaborators.
//!
//! The language-model calls live behind [`Screener`] and [`Modeler`]; this
//! module only sequences them. Closures implement both traits, which keeps
//! test doubles short.

use super::document::{GameTheoryAnalysis, ScreenerOutput};
use crate::error::AnalysisError;

/// Characters of input the screening step sees.
pub const SCREEN_CHAR_LIMIT: usize = 4000;

/// Decides whether a text describes a strategic situation.
pub trait Screener {
    fn screen(&self, text: &str) -> Result<ScreenerOutput, AnalysisError>;
}

/// Turns a strategic text into a game model.
pub trait Modeler {
    fn model(&self, text: &str) -> Result<GameTheoryAnalysis, AnalysisError>;
}

impl<F> Screener for F
where
    F: Fn(&str) -> Result<ScreenerOutput, AnalysisError>,
{
    fn screen(&self, text: &str) -> Result<ScreenerOutput, AnalysisError> {
        self(text)
    }
}

impl<F> Modeler for F
where
    F: Fn(&str) -> Result<GameTheoryAnalysis, AnalysisError>,
{
    fn model(&self, text: &str) -> Result<GameTheoryAnalysis, AnalysisError> {
        self(text)
    }
}

/// Result of [`analyze_text`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    /// The screener found no strategic interdependence.
    NotAGame { reasoning: String },
    /// The text was modeled.
    Game {
        analysis: Box<GameTheoryAnalysis>,
        /// The screener's reasoning.
        reasoning: String,
    },
}

/// The first `limit` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Screen `text`, and model it when the screener accepts it.
///
/// The screener sees at most [`SCREEN_CHAR_LIMIT`] characters; the modeler
/// always sees the full text.
pub fn analyze_text<S, M>(text: &str, screener: &S, modeler: &M) -> Result<AnalysisOutcome, AnalysisError>
where
    S: Screener + ?Sized,
    M: Modeler + ?Sized,
{
    let excerpt = truncate_chars(text, SCREEN_CHAR_LIMIT);
    log::info!("screening {} of {} characters", excerpt.chars().count(), text.chars().count());

    let verdict = screener.screen(excerpt)?;
    if !verdict.is_strategic_game {
        log::info!("no strategic game detected");
        log::debug!("screener reasoning: {}", verdict.reasoning);
        return Ok(AnalysisOutcome::NotAGame {
            reasoning: verdict.reasoning,
        });
    }

    log::info!("modeling text as a game");
    let analysis = modeler.model(text)?;
    analysis.check()?;
    log::info!(
        "modeled '{}' with {} players (confidence {})",
        analysis.title,
        analysis.players.len(),
        analysis.confidence_score
    );
    if analysis.game_tree.is_none() {
        log::warn!("model produced no game tree");
    }

    Ok(AnalysisOutcome::Game {
        analysis: Box::new(analysis),
        reasoning: verdict.reasoning,
    })
}
