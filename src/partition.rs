//! Tree partitioner
//!
//! Turns one group with N cases into N views of the same tree. A view is a [`BodyEdit`]: the list
//! of group-body statements to keep. The tree itself is shared and never modified, so producing a
//! view costs one id list instead of a copy of the file.

use specsplit_syntax::ast::{BodyId, StmtId, SyntaxTree};

use crate::locate;

/// Statements of `body` that survive in one output; every other child of `body` is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyEdit {
    pub body: BodyId,
    pub retained: Vec<StmtId>,
}

impl BodyEdit {
    /// Return `true` if the statement is kept.
    pub fn retains(&self, id: StmtId) -> bool {
        self.retained.contains(&id)
    }
}

/// The view of a file that keeps exactly one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Index of the kept case within the group body.
    pub case_index: usize,
    pub edit: BodyEdit,
}

/// Build the view that keeps case `selected` and drops the other `cases` of group `group`.
///
/// Non-case statements are kept in their original order. Returns `None` if the group has no body.
pub fn partition_one(tree: &SyntaxTree, group: usize, cases: &[usize], selected: usize) -> Option<BodyEdit> {
    let body = locate::group_body(tree, group)?;
    let retained = tree
        .children(body)
        .filter(|(index, _, _)| *index == selected || !cases.contains(index))
        .map(|(_, id, _)| id)
        .collect();
    Some(BodyEdit { body, retained })
}

/// Build one view per case, in case order.
///
/// An empty `cases` slice yields no views.
pub fn partition(tree: &SyntaxTree, group: usize, cases: &[usize]) -> Vec<Partition> {
    cases
        .iter()
        .filter_map(|&case_index| {
            partition_one(tree, group, cases, case_index).map(|edit| Partition { case_index, edit })
        })
        .collect()
}
