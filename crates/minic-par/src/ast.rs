//! AST node definitions for the minic parsing core.
//!
//! spec.md §3 models the expression tree and the statement tree as two
//! tag-plus-union C structs (`Node` / `StatementUnion`) with hand-written
//! "take" accessors. §9's own redesign note says this is naturally a sum
//! type in a safer language, with the accessors disappearing once the
//! match is exhaustive — that is what `Expr` and `Stmt` are below.

use minic_util::Span;

/// An expression node. Binary variants always carry both operands
/// (spec.md §3's non-null invariant is enforced here by construction,
/// since `Box<Expr>` cannot be null).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal.
    Num { val: i64, span: Span },
    /// Reference to a local variable, by its assigned stack-frame offset.
    LVar { offset: u32, span: Span },
    /// Function call.
    Call(FunctionCall),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Num { span, .. } => *span,
            Expr::LVar { span, .. } => *span,
            Expr::Call(call) => call.span,
            Expr::Binary { span, .. } => *span,
        }
    }

    pub(crate) fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        let span = lhs.span().merge(rhs.span());
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
        }
    }
}

/// Binary operator kinds. Only `Lt`/`Le` ever reach the tree — `a > b` and
/// `a >= b` are lowered to `Lt(b, a)` / `Le(b, a)` at parse time per
/// spec.md §4.3, so there is no `Gt`/`Ge` variant to keep exhaustive
/// matches honest about what a code generator actually has to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Assign,
    Eq,
    Ne,
    Lt,
    Le,
    Add,
    Sub,
    Mul,
    Div,
}

/// A function call: callee name plus an ordered, possibly-empty argument
/// list.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: Box<str>,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// A statement. Rust's sum type replaces spec.md §3's `StatementUnion`
/// tag-plus-union and its `statement_union_take_*` accessors; matching on
/// `Stmt` is exhaustive, so there is no way to read an inactive variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Expr),
    Return(Expr),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    For {
        init: Expr,
        cond: Expr,
        step: Expr,
        body: Box<Stmt>,
    },
    Compound(Vec<Stmt>),
}

/// A parsed program: an ordered sequence of top-level statements. An empty
/// `Vec` is the idiomatic-Rust analogue of spec.md §6's nullable
/// `ListNode*` head for an empty program.
pub type Program = Vec<Stmt>;
