//! Constraint-propagation rules.
//!
//! Each rule is a local inference that narrows candidate sets. Rules never
//! fail: a contradiction surfaces as an empty candidate set, left on the
//! board for the caller to detect. The solver applies the standard rules in
//! a fixed order until a full pass stops making progress.

use std::fmt::Debug;

use xdoku_core::{Board, Topology};

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};

mod eliminate;
mod naked_twins;
mod only_choice;

/// Returns the standard rules in their fixed application order:
/// elimination, only-choice, naked-twins.
#[must_use]
pub fn standard_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A local inference rule that narrows candidate sets.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule once across the whole board.
    ///
    /// Returns `true` when at least one candidate set changed. The rule
    /// never reports a contradiction; an emptied candidate set stays on the
    /// board for the caller to detect.
    fn apply(&self, topology: &Topology, board: &mut Board) -> bool;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
