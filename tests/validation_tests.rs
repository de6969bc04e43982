//! Validation integration tests.
//!
//! Trees are built either from the nested form (always tree-shaped) or by
//! hand with TreeBuilder for references the nested form cannot express.

use gametree::error::{ReferenceKind, TreeError};
use gametree::model::{GameNode, GameTree, NestedNode, Payoff, Player, PlayerRole, Roster, TreeBuilder};
use gametree::validation::{validate, RuleId, ValidationConfig, Validator, Violation};

fn outcome(id: &str, a: f64, b: f64) -> NestedNode {
    NestedNode::terminal(id, Payoff::new(id).with_utility("A", a).with_utility("B", b))
}

fn rules(violations: &[Violation]) -> Vec<RuleId> {
    violations.iter().map(|v| v.rule).collect()
}

/// Decision by A, then Nature, then a decision by B on one branch.
fn sequential_game() -> NestedNode {
    NestedNode::internal("root", "A")
        .with_action(
            "Enter",
            NestedNode::internal("chance", "Nature")
                .with_chance("Boom", 0.7, NestedNode::internal("b", "B")
                    .with_action("Fight", outcome("fight", -2.0, -1.0))
                    .with_action("Accommodate", outcome("share", 3.0, 2.0)))
                .with_chance("Bust", 0.3, outcome("bust", -1.0, 0.0)),
        )
        .with_action("Stay out", outcome("out", 0.0, 5.0))
}

// =============================================================================
// Well-formed Trees
// =============================================================================

#[test]
fn test_well_formed_tree_has_no_violations() {
    let tree = GameTree::from_nested(&sequential_game());
    let roster = Roster::new(vec![
        Player::decision_maker("A"),
        Player::decision_maker("B"),
        Player::nature(),
    ]);

    assert_eq!(validate(&tree, &roster).unwrap(), vec![]);
}

#[test]
fn test_probabilities_within_tolerance() {
    let nested = NestedNode::internal("root", "Nature")
        .with_chance("a", 0.3333, outcome("x", 0.0, 0.0))
        .with_chance("b", 0.3333, outcome("y", 0.0, 0.0))
        .with_chance("c", 0.3333, outcome("z", 0.0, 0.0));
    let tree = GameTree::from_nested(&nested);

    // Sum 0.9999 is inside the default 1e-3 tolerance
    assert!(validate(&tree, &Roster::empty()).unwrap().is_empty());

    let strict = ValidationConfig::default().with_tolerance(1e-6);
    let violations = Validator::with_config(&Roster::empty(), strict).validate(&tree).unwrap();
    assert_eq!(rules(&violations), vec![RuleId::NatureProbability]);
}

// =============================================================================
// Individual Rules
// =============================================================================

#[test]
fn test_single_action_decision_is_isolated() {
    let nested = NestedNode::internal("root", "A")
        .with_action("Only", NestedNode::internal("b", "B")
            .with_action("Go", outcome("t", 1.0, 1.0)))
        .with_action("Other", outcome("o", 0.0, 0.0));
    let tree = GameTree::from_nested(&nested);

    let violations = validate(&tree, &Roster::empty()).unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, RuleId::ChoiceCardinality);
    assert_eq!(violations[0].node_id, "b");
}

#[test]
fn test_nature_probability_sum() {
    let chance = |p: f64, q: f64| {
        NestedNode::internal("court", "Nature")
            .with_chance("Win", p, outcome("win", 1.0, -1.0))
            .with_chance("Lose", q, outcome("lose", -1.0, 1.0))
    };

    let bad = validate(&GameTree::from_nested(&chance(0.3, 0.6)), &Roster::empty()).unwrap();
    assert_eq!(rules(&bad), vec![RuleId::NatureProbability]);
    assert_eq!(bad[0].node_id, "court");

    let good = validate(&GameTree::from_nested(&chance(0.4, 0.6)), &Roster::empty()).unwrap();
    assert!(good.is_empty());
}

#[test]
fn test_nature_resolved_through_roster() {
    let nested = NestedNode::internal("root", "A")
        .with_action("Sue", NestedNode::internal("court", "Supreme Court")
            .with_chance("Upheld", 0.5, outcome("up", 1.0, 0.0))
            .with_chance("Struck", 0.2, outcome("down", 0.0, 1.0)))
        .with_action("Settle", outcome("settle", 0.5, 0.5));
    let tree = GameTree::from_nested(&nested);

    // Without the roster the court is a decision maker with two actions
    assert!(validate(&tree, &Roster::empty()).unwrap().is_empty());

    let roster = Roster::new(vec![
        Player::decision_maker("A"),
        Player {
            role: PlayerRole::Nature,
            ..Player::decision_maker("Supreme Court")
        },
    ]);
    let violations = validate(&tree, &roster).unwrap();
    assert_eq!(rules(&violations), vec![RuleId::NatureProbability]);
}

#[test]
fn test_single_nature_branch_is_not_a_choice_violation() {
    let nested = NestedNode::internal("root", "A")
        .with_action("Wait", NestedNode::internal("c", "Nature")
            .with_chance("Certain", 1.0, outcome("t", 0.0, 0.0)))
        .with_action("Act", outcome("a", 1.0, 0.0));

    assert!(validate(&GameTree::from_nested(&nested), &Roster::empty()).unwrap().is_empty());
}

#[test]
fn test_root_player_rules() {
    for name in ["Unknown", "unknown", "", "   "] {
        let nested = NestedNode::internal("root", name)
            .with_action("x", outcome("x", 0.0, 0.0))
            .with_action("y", outcome("y", 0.0, 0.0));
        let violations = validate(&GameTree::from_nested(&nested), &Roster::empty()).unwrap();
        assert_eq!(rules(&violations), vec![RuleId::RootPlayer], "root player {:?}", name);
    }

    let mut anonymous = NestedNode::internal("root", "A")
        .with_action("x", outcome("x", 0.0, 0.0))
        .with_action("y", outcome("y", 0.0, 0.0));
    anonymous.current_player_name = None;
    let violations = validate(&GameTree::from_nested(&anonymous), &Roster::empty()).unwrap();
    assert_eq!(rules(&violations), vec![RuleId::RootPlayer]);
}

#[test]
fn test_unknown_below_root_is_not_a_root_violation() {
    let nested = NestedNode::internal("root", "A")
        .with_action("x", NestedNode::internal("mid", "Unknown")
            .with_action("l", outcome("l", 0.0, 0.0))
            .with_action("r", outcome("r", 0.0, 0.0)))
        .with_action("y", outcome("y", 0.0, 0.0));

    assert!(validate(&GameTree::from_nested(&nested), &Roster::empty()).unwrap().is_empty());
}

#[test]
fn test_terminal_payoff_pairing() {
    let mut no_payoff = outcome("empty", 0.0, 0.0);
    no_payoff.payoff = None;

    let mut internal_with_payoff = NestedNode::internal("mid", "B")
        .with_action("l", outcome("l", 0.0, 0.0))
        .with_action("r", outcome("r", 0.0, 0.0));
    internal_with_payoff.payoff = Some(Payoff::new("premature"));

    let nested = NestedNode::internal("root", "A")
        .with_action("x", no_payoff)
        .with_action("y", internal_with_payoff);
    let violations = validate(&GameTree::from_nested(&nested), &Roster::empty()).unwrap();

    assert_eq!(rules(&violations), vec![RuleId::TerminalPayoff, RuleId::TerminalPayoff]);
    assert_eq!(violations[0].node_id, "empty");
    assert_eq!(violations[1].node_id, "mid");
}

#[test]
fn test_dangling_internal_node() {
    let nested = NestedNode::internal("root", "A")
        .with_action("x", NestedNode::internal("stub", "B"))
        .with_action("y", outcome("y", 0.0, 0.0));
    let violations = validate(&GameTree::from_nested(&nested), &Roster::empty()).unwrap();

    assert_eq!(rules(&violations), vec![RuleId::DanglingNode]);
    assert_eq!(violations[0].node_id, "stub");
}

#[test]
fn test_violations_accumulate_across_tree() {
    let mut no_payoff = outcome("t", 0.0, 0.0);
    no_payoff.payoff = None;

    let nested = NestedNode::internal("root", "Unknown")
        .with_action("x", NestedNode::internal("forced", "B").with_action("only", no_payoff))
        .with_action("y", NestedNode::internal("stub", "C"));
    let violations = validate(&GameTree::from_nested(&nested), &Roster::empty()).unwrap();

    assert_eq!(
        rules(&violations),
        vec![
            RuleId::RootPlayer,
            RuleId::ChoiceCardinality,
            RuleId::TerminalPayoff,
            RuleId::DanglingNode,
        ]
    );
}

// =============================================================================
// Malformed References
// =============================================================================

#[test]
fn test_self_reference_is_malformed() {
    let mut builder = TreeBuilder::new();
    let root = builder.decision("root", "A");
    builder.action(root, "again", root);
    let tree = builder.build(root);

    let err = validate(&tree, &Roster::empty()).unwrap_err();
    assert_eq!(
        err,
        TreeError::MalformedReference {
            parent: Some("root".into()),
            target: root,
            kind: ReferenceKind::Cycle,
        }
    );
}

#[test]
fn test_ancestor_reference_is_malformed() {
    let mut builder = TreeBuilder::new();
    let leaf = builder.terminal("leaf", Payoff::new("end"));
    let root = builder.decision("root", "A");
    let mid = builder.decision("mid", "B");
    builder.action(root, "down", mid).action(root, "stop", leaf);
    builder.action(mid, "up", root).action(mid, "stop", leaf);
    let tree = builder.build(root);

    let err = validate(&tree, &Roster::empty()).unwrap_err();
    assert!(matches!(
        err,
        TreeError::MalformedReference { kind: ReferenceKind::Cycle, .. }
    ));
}

#[test]
fn test_dangling_handle_is_malformed() {
    let mut builder = TreeBuilder::new();
    let leaf = builder.terminal("leaf", Payoff::new("end"));
    let root = builder.decision("root", "A");
    builder.action(root, "ok", leaf).action(root, "lost", gametree::NodeId::new(40));
    let tree = builder.build(root);

    let err = validate(&tree, &Roster::empty()).unwrap_err();
    assert!(matches!(
        err,
        TreeError::MalformedReference { kind: ReferenceKind::Dangling, .. }
    ));
}

#[test]
fn test_shared_child_reported_once() {
    let mut builder = TreeBuilder::new();
    let leaf = builder.terminal("shared", Payoff::new("same end"));
    let root = builder.decision("root", "A");
    builder.action(root, "left", leaf).action(root, "right", leaf);
    let tree = builder.build(root);

    let violations = validate(&tree, &Roster::empty()).unwrap();
    assert_eq!(rules(&violations), vec![RuleId::SharedReference]);
    assert_eq!(violations[0].node_id, "shared");
}

#[test]
fn test_shared_subtree_not_revalidated() {
    let mut builder = TreeBuilder::new();
    let stub = builder.node(GameNode::internal("stub", "B"));
    let root = builder.decision("root", "A");
    builder.action(root, "left", stub).action(root, "right", stub);
    let tree = builder.build(root);

    let violations = validate(&tree, &Roster::empty()).unwrap();
    assert_eq!(rules(&violations), vec![RuleId::DanglingNode, RuleId::SharedReference]);
}

#[test]
fn test_missing_root() {
    let tree = TreeBuilder::new().build_rootless();
    assert_eq!(validate(&tree, &Roster::empty()).unwrap_err(), TreeError::MissingRoot);
    assert_eq!(validate(&GameTree::default(), &Roster::empty()).unwrap_err(), TreeError::MissingRoot);
}
