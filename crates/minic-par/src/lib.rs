//! minic-par - recursive-descent parser and local-variable layout for the
//! minic C-like subset language.
//!
//! ============================================================================
//! GRAMMAR
//! ============================================================================
//!
//! ```text
//! program              = statement*
//! statement            = return_statement
//!                      | if_statement
//!                      | while_statement
//!                      | for_statement
//!                      | compound_statement
//!                      | expression_statement
//! expression_statement = expression ";"
//! return_statement     = "return" expression ";"
//! if_statement         = "if" "(" expression ")" statement ("else" statement)?
//! while_statement      = "while" "(" expression ")" statement
//! for_statement         = "for" "(" expression ";" expression ";" expression ")" statement
//! compound_statement   = "{" statement* "}"
//!
//! expression           = assign
//! assign               = equality ("=" assign)?       -- right-associative
//! equality             = relational (("==" | "!=") relational)*
//! relational           = add (("<" | "<=" | ">" | ">=") add)*
//! add                  = multiply (("+" | "-") multiply)*
//! multiply             = unary (("*" | "/") unary)*
//! unary                = ("+" | "-")? primary
//! primary              = number
//!                      | identifier ( "(" argument? ")" )?
//!                      | "(" expression ")"
//! argument             = expression ("," expression)*
//! ```
//!
//! Statements are tried in the fixed order listed above: each
//! non-expression variant peeks its leading reserved token and returns
//! `None` without consuming anything if it doesn't match; `expression` is
//! the default and either succeeds or raises a fatal, unrecoverable error
//! (this parser never recovers from a syntax error — see
//! [`minic_util::Handler::fatal`]).
//!
//! Local variables are not declared; a bare identifier becomes a variable
//! the first time it is referenced anywhere in the program, and keeps the
//! stack-frame offset it was first assigned (in units of 8) for the rest
//! of the parse. There is no block scoping.

mod ast;
mod locals;

pub use ast::{BinOp, Expr, FunctionCall, Program, Stmt};
pub use locals::LocalVariable;

use locals::LocalTable;
use minic_lex::{Token, TokenKind};
use minic_util::{Handler, Symbol};

/// Recursive-descent parser over a token stream produced by `minic-lex`.
///
/// Packaged as a context value rather than process-wide globals (spec.md
/// §9's own recommendation): the token cursor, the local-variable table,
/// and the error handler all live here and are reset by [`Parser::parse`],
/// so the same `Parser` can be reused across unrelated programs.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
    locals: LocalTable,
    handler: &'a Handler,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>, handler: &'a Handler) -> Self {
        Self {
            tokens,
            position: 0,
            locals: LocalTable::new(),
            handler,
        }
    }

    /// Parse a complete program, returning its top-level statements.
    ///
    /// Resets the local-variable table and offset counter before parsing,
    /// so successive calls on a fresh `Parser` never leak identifiers
    /// between programs (spec.md §4.4, §5). After this returns, the
    /// cursor is always at the EOF sentinel (spec.md P1) — `expression`
    /// either consumes through to it or this call never returns normally.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(&mut self) -> Program {
        self.position = 0;
        self.locals = LocalTable::new();

        let mut statements = Vec::new();
        while !self.at_eof() {
            statements.push(self.parse_statement());
        }
        statements
    }

    // ------------------------------------------------------------------
    // Token cursor (spec.md §4.1)
    // ------------------------------------------------------------------

    fn at_eof(&self) -> bool {
        self.current().is_eof()
    }

    fn current(&self) -> Token<'a> {
        self.tokens[self.position]
    }

    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    /// If the current token is a reserved token whose lexeme byte-equals
    /// `op`, advance and return `true`; otherwise leave the cursor
    /// untouched and return `false`.
    fn consume(&mut self, op: &str) -> bool {
        match self.current().kind {
            TokenKind::Reserved(lexeme) if lexeme == op => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn consume_identifier(&mut self) -> Option<&'a str> {
        match self.current().kind {
            TokenKind::Ident(name) => {
                self.advance();
                Some(name)
            }
            _ => None,
        }
    }

    /// Like `consume`, but a mismatch is a fatal, unrecoverable error.
    fn expect(&mut self, op: &str) {
        if !self.consume(op) {
            let span = self.current().span;
            self.handler.fatal(span, format!("expected '{op}'"));
        }
    }

    fn expect_number(&mut self) -> i64 {
        match self.current().kind {
            TokenKind::Number(value) => {
                self.advance();
                value
            }
            _ => {
                let span = self.current().span;
                self.handler.fatal(span, "expected a number");
            }
        }
    }

    // ------------------------------------------------------------------
    // Statements (spec.md §4.3)
    // ------------------------------------------------------------------

    fn parse_statement(&mut self) -> Stmt {
        if let Some(stmt) = self.parse_return_statement() {
            return stmt;
        }
        if let Some(stmt) = self.parse_if_statement() {
            return stmt;
        }
        if let Some(stmt) = self.parse_while_statement() {
            return stmt;
        }
        if let Some(stmt) = self.parse_for_statement() {
            return stmt;
        }
        if let Some(stmt) = self.parse_compound_statement() {
            return stmt;
        }
        self.parse_expression_statement()
    }

    fn parse_expression_statement(&mut self) -> Stmt {
        let expr = self.parse_expression();
        self.expect(";");
        Stmt::Expr(expr)
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        if !self.consume("return") {
            return None;
        }
        let expr = self.parse_expression();
        self.expect(";");
        Some(Stmt::Return(expr))
    }

    fn parse_if_statement(&mut self) -> Option<Stmt> {
        if !self.consume("if") || !self.consume("(") {
            return None;
        }
        let cond = self.parse_expression();
        self.expect(")");
        let then_branch = Box::new(self.parse_statement());
        let else_branch = if self.consume("else") {
            Some(Box::new(self.parse_statement()))
        } else {
            None
        };
        Some(Stmt::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn parse_while_statement(&mut self) -> Option<Stmt> {
        if !self.consume("while") || !self.consume("(") {
            return None;
        }
        let cond = self.parse_expression();
        self.expect(")");
        let body = Box::new(self.parse_statement());
        Some(Stmt::While { cond, body })
    }

    fn parse_for_statement(&mut self) -> Option<Stmt> {
        if !self.consume("for") || !self.consume("(") {
            return None;
        }
        let init = self.parse_expression();
        self.expect(";");
        let cond = self.parse_expression();
        self.expect(";");
        let step = self.parse_expression();
        self.expect(")");
        let body = Box::new(self.parse_statement());
        Some(Stmt::For {
            init,
            cond,
            step,
            body,
        })
    }

    fn parse_compound_statement(&mut self) -> Option<Stmt> {
        if !self.consume("{") {
            return None;
        }
        let mut statements = Vec::new();
        while !self.consume("}") {
            statements.push(self.parse_statement());
        }
        Some(Stmt::Compound(statements))
    }

    // ------------------------------------------------------------------
    // Expressions (spec.md §4.3)
    // ------------------------------------------------------------------

    fn parse_expression(&mut self) -> Expr {
        self.parse_assign()
    }

    /// `assign = equality ("=" assign)?`, encoded as a single optional
    /// recursive call so `a = b = c` builds `ASSIGN(a, ASSIGN(b, c))`
    /// (spec.md P5). See `DESIGN.md` for why this is right-recursive
    /// rather than the left-folding loop the reference C source's
    /// `assign()` actually contains.
    fn parse_assign(&mut self) -> Expr {
        let lhs = self.parse_equality();
        if self.consume("=") {
            let rhs = self.parse_assign();
            Expr::binary(BinOp::Assign, lhs, rhs)
        } else {
            lhs
        }
    }

    fn parse_equality(&mut self) -> Expr {
        let mut node = self.parse_relational();
        loop {
            if self.consume("==") {
                node = Expr::binary(BinOp::Eq, node, self.parse_relational());
            } else if self.consume("!=") {
                node = Expr::binary(BinOp::Ne, node, self.parse_relational());
            } else {
                return node;
            }
        }
    }

    /// `a > b` lowers to `Lt(b, a)`; `a >= b` lowers to `Le(b, a)` — only
    /// `Lt`/`Le` ever reach the tree (spec.md §4.3, P7).
    fn parse_relational(&mut self) -> Expr {
        let mut node = self.parse_add();
        loop {
            if self.consume("<") {
                node = Expr::binary(BinOp::Lt, node, self.parse_add());
            } else if self.consume("<=") {
                node = Expr::binary(BinOp::Le, node, self.parse_add());
            } else if self.consume(">") {
                node = Expr::binary(BinOp::Lt, self.parse_add(), node);
            } else if self.consume(">=") {
                node = Expr::binary(BinOp::Le, self.parse_add(), node);
            } else {
                return node;
            }
        }
    }

    fn parse_add(&mut self) -> Expr {
        let mut node = self.parse_multiply();
        loop {
            if self.consume("+") {
                node = Expr::binary(BinOp::Add, node, self.parse_multiply());
            } else if self.consume("-") {
                node = Expr::binary(BinOp::Sub, node, self.parse_multiply());
            } else {
                return node;
            }
        }
    }

    fn parse_multiply(&mut self) -> Expr {
        let mut node = self.parse_unary();
        loop {
            if self.consume("*") {
                node = Expr::binary(BinOp::Mul, node, self.parse_unary());
            } else if self.consume("/") {
                node = Expr::binary(BinOp::Div, node, self.parse_unary());
            } else {
                return node;
            }
        }
    }

    /// Unary `+x` lowers to the bare `x` (no wrapper node); unary `-x`
    /// lowers to `Sub(Num 0, x)` — there is no dedicated negation kind
    /// (spec.md §4.3, P8).
    fn parse_unary(&mut self) -> Expr {
        if self.consume("+") {
            self.parse_primary()
        } else if self.consume("-") {
            let span = self.current().span;
            let zero = Expr::Num { val: 0, span };
            Expr::binary(BinOp::Sub, zero, self.parse_primary())
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Expr {
        if self.consume("(") {
            let expr = self.parse_expression();
            self.expect(")");
            return expr;
        }

        let ident_span = self.current().span;
        if let Some(name) = self.consume_identifier() {
            if self.consume("(") {
                let mut args = Vec::new();
                if !self.consume(")") {
                    args = self.parse_argument_list();
                    self.expect(")");
                }
                return Expr::Call(FunctionCall {
                    name: name.into(),
                    args,
                    span: ident_span,
                });
            }
            let offset = self.locals.offset_for(Symbol::intern(name));
            return Expr::LVar {
                offset,
                span: ident_span,
            };
        }

        let span = self.current().span;
        let val = self.expect_number();
        Expr::Num { val, span }
    }

    /// `argument = expression ("," expression)*` — one expression,
    /// followed by zero or more comma-prefixed expressions, no trailing
    /// comma.
    fn parse_argument_list(&mut self) -> Vec<Expr> {
        let mut args = vec![self.parse_expression()];
        while self.consume(",") {
            args.push(self.parse_expression());
        }
        args
    }
}
