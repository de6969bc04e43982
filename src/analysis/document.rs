//! The analysis document produced by the modeling step.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, TreeError};
use crate::model::{GameTree, NestedNode, Player, Roster};

/// Highest allowed confidence score.
pub const MAX_CONFIDENCE: u32 = 100;

/// Form of the modeled game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "Extensive_Form")]
    ExtensiveForm,
    #[serde(rename = "Normal_Form")]
    NormalForm,
}

/// Verdict of the screening step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenerOutput {
    /// Does the text describe strategic interdependence between players?
    pub is_strategic_game: bool,
    /// Why it is or isn't a game.
    pub reasoning: String,
}

/// A narrative modeled as a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameTheoryAnalysis {
    pub title: String,

    /// Why the situation is a game (interdependence of outcomes).
    pub strategic_summary: String,

    pub players: Vec<Player>,

    pub game_type: GameType,

    /// Root of the extensive form, if one was produced.
    #[serde(default)]
    pub game_tree: Option<NestedNode>,

    /// How well the text fits a game model, 0..=100.
    pub confidence_score: u32,

    /// Free-text solution supplied by the modeling step. Never derived here.
    pub nash_equilibrium_explanation: String,

    /// The model's prediction compared with what actually happened.
    pub actual_events_comparison: String,
}

impl GameTheoryAnalysis {
    /// Parse and range-check a JSON document.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let analysis: Self = serde_json::from_str(json)?;
        analysis.check()?;
        Ok(analysis)
    }

    pub fn to_json(&self) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Field-level checks the schema alone cannot express.
    pub fn check(&self) -> Result<(), AnalysisError> {
        if self.confidence_score > MAX_CONFIDENCE {
            return Err(AnalysisError::ConfidenceOutOfRange(self.confidence_score));
        }
        Ok(())
    }

    #[must_use]
    pub fn roster(&self) -> Roster {
        self.players.iter().cloned().collect()
    }

    /// Canonicalize the game tree into its arena form.
    pub fn tree(&self) -> Result<GameTree, TreeError> {
        self.game_tree
            .as_ref()
            .map(GameTree::from_nested)
            .ok_or(TreeError::MissingRoot)
    }
}
