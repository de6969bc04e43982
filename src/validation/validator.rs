//! Single-pass structural validator.

use super::config::ValidationConfig;
use super::rule::{RuleId, Violation};
use crate::error::TreeError;
use crate::model::walk::{Step, Walk};
use crate::model::{GameNode, GameTree, PlayerRole, Roster};

/// Checks a tree against the structural rules and collects every breach.
///
/// Violations never stop the walk. Only a missing root or a malformed
/// reference aborts, since there is then no finite tree to report on.
#[derive(Clone, Debug)]
pub struct Validator<'r> {
    config: ValidationConfig,
    roster: &'r Roster,
}

impl<'r> Validator<'r> {
    pub fn new(roster: &'r Roster) -> Self {
        Self::with_config(roster, ValidationConfig::default())
    }

    pub fn with_config(roster: &'r Roster, config: ValidationConfig) -> Self {
        Self { config, roster }
    }

    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate `tree`. An empty list means the tree is well-formed.
    pub fn validate(&self, tree: &GameTree) -> Result<Vec<Violation>, TreeError> {
        let mut violations = Vec::new();

        for step in Walk::new(tree)? {
            match step? {
                Step::Enter { node, depth, .. } => {
                    if depth == 0 {
                        self.check_root(node, &mut violations);
                    }
                    self.check(node, &mut violations);
                }
                Step::Edge {
                    parent,
                    action,
                    target,
                    shared: true,
                    ..
                } => violations.push(Violation::new(
                    &target.id,
                    RuleId::SharedReference,
                    format!("node is also reached from '{}' via '{}'", parent.id, action.name),
                )),
                Step::Edge { .. } => {}
            }
        }
        Ok(violations)
    }

    fn check_root(&self, node: &GameNode, out: &mut Vec<Violation>) {
        let message = match node.player() {
            Some(name) if self.config.is_placeholder(name) => {
                format!("root player '{}' is a placeholder", name.trim())
            }
            Some(_) => return,
            None => "root node has no player assigned".to_string(),
        };
        out.push(Violation::new(&node.id, RuleId::RootPlayer, message));
    }

    fn check(&self, node: &GameNode, out: &mut Vec<Violation>) {
        if node.is_terminal {
            if node.payoff.is_none() {
                out.push(Violation::new(&node.id, RuleId::TerminalPayoff, "terminal node has no payoff"));
            }
            if node.has_actions() {
                out.push(Violation::new(
                    &node.id,
                    RuleId::TerminalActions,
                    format!("terminal node lists {} unreachable action(s)", node.actions.len()),
                ));
            }
            return;
        }

        if node.payoff.is_some() {
            out.push(Violation::new(
                &node.id,
                RuleId::TerminalPayoff,
                "payoff on a node not marked terminal",
            ));
        }
        if !node.has_actions() {
            out.push(Violation::new(&node.id, RuleId::DanglingNode, "internal node has no actions"));
            return;
        }

        match self.roster.role_of(node.player()) {
            PlayerRole::DecisionMaker => self.check_choices(node, out),
            PlayerRole::Nature => self.check_probabilities(node, out),
        }
    }

    fn check_choices(&self, node: &GameNode, out: &mut Vec<Violation>) {
        if node.actions.len() < self.config.min_choices {
            out.push(Violation::new(
                &node.id,
                RuleId::ChoiceCardinality,
                format!(
                    "{} has {} action(s), a decision needs at least {}",
                    node.player().unwrap_or("decision maker"),
                    node.actions.len(),
                    self.config.min_choices,
                ),
            ));
        }
    }

    fn check_probabilities(&self, node: &GameNode, out: &mut Vec<Violation>) {
        for action in &node.actions {
            if let Some(p) = action.probability {
                if !(0.0..=1.0).contains(&p) {
                    out.push(Violation::new(
                        &node.id,
                        RuleId::NatureProbability,
                        format!("branch '{}' has probability {} outside [0, 1]", action.name, p),
                    ));
                }
            }
        }

        let sum: f64 = node.actions.iter().map(|a| a.probability.unwrap_or(0.0)).sum();
        if !((sum - 1.0).abs() <= self.config.probability_tolerance) {
            out.push(Violation::new(
                &node.id,
                RuleId::NatureProbability,
                format!("chance probabilities sum to {}, expected 1.0", sum),
            ));
        }
    }
}
