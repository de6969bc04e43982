//! Players and the roster used to resolve who moves at a node.
//!
//! ## Role resolution
//!
//! A node only names its player. Whether that player is a rational decision
//! maker or Nature is decided by [`Roster::role_of`]: a roster entry with
//! role `Nature` wins, and so does the literal name `nature` in any case.

use serde::{Deserialize, Serialize};

/// Literal player name that always denotes chance.
pub const NATURE: &str = "nature";

/// Who a player is in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRole {
    /// Rational actor choosing among actions.
    DecisionMaker,
    /// Chance; branches carry probabilities.
    Nature,
}

impl PlayerRole {
    #[must_use]
    pub const fn is_nature(self) -> bool {
        matches!(self, PlayerRole::Nature)
    }
}

/// A participant of one analysis. Identity is by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: PlayerRole,
    #[serde(default)]
    pub description: String,
}

impl Player {
    /// Create a decision maker.
    pub fn decision_maker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: PlayerRole::DecisionMaker,
            description: String::new(),
        }
    }

    /// Create the chance player.
    pub fn nature() -> Self {
        Self {
            name: "Nature".into(),
            role: PlayerRole::Nature,
            description: String::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Returns true if `name` is the literal chance player name.
#[must_use]
pub fn is_nature_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(NATURE)
}

/// The players of one analysis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Roster with no entries. Role resolution falls back to the name alone.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look a player up by name: exact match first, then case-insensitive.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .or_else(|| self.players.iter().find(|p| p.name.eq_ignore_ascii_case(name)))
    }

    /// Resolve the role of the player moving at a node.
    ///
    /// An absent player is treated as a decision maker.
    #[must_use]
    pub fn role_of(&self, name: Option<&str>) -> PlayerRole {
        match name {
            Some(name) if is_nature_name(name) => PlayerRole::Nature,
            Some(name) => self.get(name).map_or(PlayerRole::DecisionMaker, |p| p.role),
            None => PlayerRole::DecisionMaker,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
