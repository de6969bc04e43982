//! Boundary to the external analysis pipeline.
//!
//! ## Overview
//!
//! The text-to-game inference is done by language-model collaborators that
//! this crate does not ship. This module defines what crosses the boundary:
//!
//! - [`GameTheoryAnalysis`]: the document the modeling step produces
//! - [`Screener`] / [`Modeler`]: the collaborator seams
//! - [`analyze_text`]: screen a text, then model it if it is a game
//! - [`AnalysisReport`]: both core passes applied to one document
//!
//! Unlike the core modules, this layer logs through the `log` facade.

pub mod document;
pub mod pipeline;
pub mod report;

pub use document::{GameTheoryAnalysis, GameType, ScreenerOutput, MAX_CONFIDENCE};
pub use pipeline::{analyze_text, truncate_chars, AnalysisOutcome, Modeler, Screener, SCREEN_CHAR_LIMIT};
pub use report::AnalysisReport;
