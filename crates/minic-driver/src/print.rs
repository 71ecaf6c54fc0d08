//! Human-readable dumps of tokens and the AST, used by `minicc
//! --emit-tokens` / `--emit-ast`. Not part of the parsing core itself —
//! this is driver-only plumbing for inspecting its output.

use minic_lex::{Token, TokenKind};
use minic_par::{BinOp, Expr, Program, Stmt};
use std::fmt::Write as _;

pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.kind {
            TokenKind::Reserved(lexeme) => {
                let _ = writeln!(out, "Reserved({lexeme:?})");
            }
            TokenKind::Ident(name) => {
                let _ = writeln!(out, "Ident({name:?})");
            }
            TokenKind::Number(value) => {
                let _ = writeln!(out, "Number({value})");
            }
            TokenKind::Eof => {
                let _ = writeln!(out, "Eof");
            }
        }
    }
    out
}

pub fn format_program(program: &Program) -> String {
    let mut out = String::new();
    for stmt in program {
        write_stmt(&mut out, stmt, 0);
    }
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    indent(out, depth);
    match stmt {
        Stmt::Expr(e) => {
            let _ = writeln!(out, "Expr({})", format_expr(e));
        }
        Stmt::Return(e) => {
            let _ = writeln!(out, "Return({})", format_expr(e));
        }
        Stmt::If {
            cond,
            then_branch,
            else_branch,
        } => {
            let _ = writeln!(out, "If({})", format_expr(cond));
            write_stmt(out, then_branch, depth + 1);
            if let Some(else_branch) = else_branch {
                indent(out, depth);
                let _ = writeln!(out, "Else");
                write_stmt(out, else_branch, depth + 1);
            }
        }
        Stmt::While { cond, body } => {
            let _ = writeln!(out, "While({})", format_expr(cond));
            write_stmt(out, body, depth + 1);
        }
        Stmt::For {
            init,
            cond,
            step,
            body,
        } => {
            let _ = writeln!(
                out,
                "For({}; {}; {})",
                format_expr(init),
                format_expr(cond),
                format_expr(step)
            );
            write_stmt(out, body, depth + 1);
        }
        Stmt::Compound(statements) => {
            let _ = writeln!(out, "Compound");
            for inner in statements {
                write_stmt(out, inner, depth + 1);
            }
        }
    }
}

fn format_expr(expr: &Expr) -> String {
    match expr {
        Expr::Num { val, .. } => format!("{val}"),
        Expr::LVar { offset, .. } => format!("lvar[{offset}]"),
        Expr::Call(call) => {
            let args: Vec<String> = call.args.iter().map(format_expr).collect();
            format!("{}({})", call.name, args.join(", "))
        }
        Expr::Binary { op, lhs, rhs, .. } => {
            format!("({} {} {})", format_expr(lhs), op_symbol(*op), format_expr(rhs))
        }
    }
}

fn op_symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Assign => "=",
        BinOp::Eq => "==",
        BinOp::Ne => "!=",
        BinOp::Lt => "<",
        BinOp::Le => "<=",
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
    }
}
