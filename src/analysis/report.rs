//! Validation and rendering of one analysis, side by side.

use serde::Serialize;

use super::document::GameTheoryAnalysis;
use crate::error::TreeError;
use crate::model::{GameTree, Roster};
use crate::render::{GraphDescription, RenderConfig, Renderer};
use crate::validation::{ValidationConfig, Validator, Violation};

/// Best-effort graph plus the violations found in the same tree.
///
/// The two passes run independently: a tree with violations is still drawn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub violations: Vec<Violation>,
    pub graph: GraphDescription,
}

impl AnalysisReport {
    /// Validate and render the analysis' tree with default configs.
    pub fn build(analysis: &GameTheoryAnalysis) -> Result<Self, TreeError> {
        Self::build_with(analysis, ValidationConfig::default(), &RenderConfig::default())
    }

    pub fn build_with(
        analysis: &GameTheoryAnalysis,
        validation: ValidationConfig,
        render: &RenderConfig,
    ) -> Result<Self, TreeError> {
        let tree = analysis.tree()?;
        Self::from_tree(&tree, &analysis.roster(), validation, render)
    }

    /// Run both passes over an arena tree.
    pub fn from_tree(
        tree: &GameTree,
        roster: &Roster,
        validation: ValidationConfig,
        render: &RenderConfig,
    ) -> Result<Self, TreeError> {
        let violations = Validator::with_config(roster, validation).validate(tree)?;
        let graph = Renderer::new(render).render(tree)?;

        if violations.is_empty() {
            log::debug!("tree of {} nodes is well-formed", graph.nodes.len());
        } else {
            log::warn!("rendering tree with {} structural violation(s)", violations.len());
            for violation in &violations {
                log::debug!("{}", violation);
            }
        }

        Ok(Self { violations, graph })
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.violations.is_empty()
    }
}
