//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all expressions
//! - Child references use `ExprId` indices
//! - Statement lists and bind declarations are flattened into side tables
//! - Bulk deallocation when the `Program` is dropped

use crate::ast::{Binding, ExprKind};
use crate::{BindingRange, ExprId, ExprRange};

/// Contiguous storage for all expressions of one program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<ExprKind>,

    /// Flattened statement lists (`Block` bodies, the program body).
    expr_lists: Vec<ExprId>,

    /// Flattened `Bind` declarations.
    bindings: Vec<Binding>,
}

#[inline]
fn to_u32(len: usize, table: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena {table} table exceeded u32::MAX entries"))
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expression allocation =====

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expression"));
        self.exprs.push(kind);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` was not minted by this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()]
    }

    /// Get number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Statement list allocation =====

    /// Allocate a statement list, return its range.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "statement list");
        self.expr_lists.extend(exprs);
        let len = to_u32(self.expr_lists.len(), "statement list") - start;
        ExprRange::new(start, len)
    }

    /// Get a statement list by range.
    #[inline]
    #[track_caller]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    // ===== Binding allocation =====

    /// Allocate the declarations of one `Bind`, return their range.
    pub fn alloc_bindings(&mut self, bindings: impl IntoIterator<Item = Binding>) -> BindingRange {
        let start = to_u32(self.bindings.len(), "binding");
        self.bindings.extend(bindings);
        let len = to_u32(self.bindings.len(), "binding") - start;
        BindingRange::new(start, len)
    }

    /// Get the declarations of a `Bind` by range.
    #[inline]
    #[track_caller]
    pub fn get_bindings(&self, range: BindingRange) -> &[Binding] {
        let start = range.start as usize;
        &self.bindings[start..start + range.len()]
    }
}

/// A lowered program: the arena plus its ordered top-level statements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    arena: ExprArena,
    body: ExprRange,
}

impl Program {
    /// Wrap an arena and the range of its top-level statements.
    pub fn new(arena: ExprArena, body: ExprRange) -> Self {
        Program { arena, body }
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    pub fn body(&self) -> ExprRange {
        self.body
    }

    /// Top-level statements in evaluation order.
    pub fn statements(&self) -> &[ExprId] {
        self.arena.get_expr_list(self.body)
    }
}
