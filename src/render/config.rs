//! Render parameters.

use serde::{Deserialize, Serialize};

use super::graph::NodeStyle;

/// Render parameters: wrap widths, fallback text and per-role styles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Wrap width for player names (default: 20).
    pub player_width: usize,

    /// Wrap width for outcome summaries (default: 30).
    pub outcome_width: usize,

    /// Wrap width for edge labels (default: 15).
    pub edge_width: usize,

    /// Shown when a node has no player (default: "Unknown").
    pub fallback_player: String,

    /// Line under the player name of an internal node (default: "(Moves)").
    pub moves_marker: String,

    pub decision_style: NodeStyle,
    pub chance_style: NodeStyle,
    pub terminal_style: NodeStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            player_width: 20,
            outcome_width: 30,
            edge_width: 15,
            fallback_player: "Unknown".to_string(),
            moves_marker: "(Moves)".to_string(),
            decision_style: NodeStyle::new("white", 11),
            chance_style: NodeStyle::new("lightgrey", 11),
            terminal_style: NodeStyle::new("#f0f2f6", 10),
        }
    }
}

impl RenderConfig {
    /// Create a new config with custom wrap widths.
    pub fn with_widths(mut self, player: usize, outcome: usize, edge: usize) -> Self {
        self.player_width = player;
        self.outcome_width = outcome;
        self.edge_width = edge;
        self
    }

    /// Create a new config with custom fallback player text.
    pub fn with_fallback_player(mut self, text: impl Into<String>) -> Self {
        self.fallback_player = text.into();
        self
    }

    /// Create a new config with a custom font for every role.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        let font = font.into();
        for style in [&mut self.decision_style, &mut self.chance_style, &mut self.terminal_style] {
            style.font_name = font.clone();
        }
        self
    }
}
