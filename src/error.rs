//! Shared error utilities used across the compilation pipeline.
//!
//! The taxonomy is closed on purpose – each phase can fail in exactly one
//! way, every failure is fatal, and every variant records the 1-based
//! line/column of the token that triggered it.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

/// One variant per failure class; the pipeline stops at the first error.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CompileError {
  #[snafu(display("Lexical error at {line}:{column} -> Unexpected character '{character}'"))]
  Lexical {
    character: char,
    line: usize,
    column: usize,
  },

  #[snafu(display("Syntax error at {line}:{column} near '{found}': {message}"))]
  Syntax {
    message: String,
    found: String,
    line: usize,
    column: usize,
  },

  #[snafu(display("Semantic error at {line}:{column} near '{name}': Duplicate declaration of '{name}'."))]
  DuplicateDeclaration {
    name: String,
    line: usize,
    column: usize,
  },

  #[snafu(display("Semantic error at {line}:{column} near '{name}': Variable '{name}' used before declaration."))]
  UndeclaredVariable {
    name: String,
    line: usize,
    column: usize,
  },
}
