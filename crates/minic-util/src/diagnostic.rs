//! Diagnostic reporting.
//!
//! spec.md models error reporting as a single abstract "report-and-abort at
//! source offset" facility: every parse failure is fatal, there is no
//! recovery, and no partial result escapes. [`Handler::fatal`] realizes
//! that contract — it records a [`Diagnostic`] and then unwinds the stack
//! with the private [`FatalError`] marker rather than returning, so callers
//! can never observe a "continue after error" path. The unwind is caught
//! at the crate boundary: `minic-driver`'s `main` turns it into a clean
//! process exit, and parser tests catch it with
//! `std::panic::catch_unwind` to assert that a given input is rejected.

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity. Only `Error` is ever produced by this crate today,
/// but the type exists so a future semantic-analysis phase can emit
/// warnings/notes through the same `Handler` without a breaking change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A single diagnostic message tied to a source location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (at {}:{})",
            self.level, self.message, self.span.line, self.span.column
        )
    }
}

/// Marker type unwound through by [`Handler::fatal`]. It carries no data of
/// its own — the diagnostic itself was already recorded in the `Handler`
/// before unwinding — so callers recover it purely to know a fatal error
/// happened, then read `Handler::diagnostics()` for the message.
#[derive(Debug)]
pub struct FatalError;

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal error during parse")
    }
}

impl std::error::Error for FatalError {}

/// Collects diagnostics for one parse and provides the fail-fast abort
/// path spec.md requires.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic without aborting. Used internally by `fatal`;
    /// exposed for callers that want to inspect recorded diagnostics
    /// without the unwind (e.g. after catching one).
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Record an error at `span` and abort the current parse. Never
    /// returns: the panic is expected to be caught by `main` (which exits
    /// the process with a non-zero status) or by a test's
    /// `catch_unwind`.
    #[track_caller]
    pub fn fatal(&self, span: Span, message: impl Into<String>) -> ! {
        self.emit(Diagnostic::error(message, span));
        std::panic::panic_any(FatalError)
    }
}
