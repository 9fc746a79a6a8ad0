//! Errors shared by every stage of the pipeline.
//!
//! All of them are fatal: the first one aborts the compilation and is handed
//! back to the caller unchanged.

use snafu::Snafu;

use crate::variable::ScopeError;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CompileError {
    /// Malformed lexeme: stray character, broken operator, unclosed string or comment.
    #[snafu(display("Lexical error at line {line}: {message}"))]
    Lexical { line: usize, message: String },

    /// The token sequence does not match the grammar.
    #[snafu(display("Syntax error at line {line}: {message}"))]
    Syntax { line: usize, message: String },

    /// Use of an undeclared name or redeclaration of an existing one.
    #[snafu(display("Semantic error at line {line}: {source}"))]
    Semantic { line: usize, source: ScopeError },
}
