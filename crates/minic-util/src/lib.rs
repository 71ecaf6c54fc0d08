//! minic-util - shared foundation types for the minic compiler crates.
//!
//! Provides source spans, identifier interning, and the diagnostic /
//! fail-fast error reporting facility used by `minic-lex` and `minic-par`.

mod diagnostic;
mod span;
mod symbol;

pub use diagnostic::{Diagnostic, FatalError, Handler, Level};
pub use span::Span;
pub use symbol::Symbol;

pub use rustc_hash::FxHashMap;
