//! Parser error taxonomy.
//!
//! Every production collapses to a boolean success/failure at its own
//! boundary: the cursor is restored to its entry position on `Err`, and the
//! caller either tries the next alternative or propagates the failure. The
//! variants below exist only to give the *outermost* failure a shape worth
//! printing; they carry no source location (tracking one is an explicit
//! Non-goal) and are never inspected to decide recovery.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    Eof,
    #[error("expected {0}")]
    Expected(&'static str),
    #[error("invalid combination of declaration specifiers")]
    InvalidSpecifier,
    #[error("declarator in this position must be {0}")]
    WrongDeclaratorShape(&'static str),
    #[error("`for` initializer cannot be both a declaration and an expression")]
    ForInitConflict,
    #[error("integer literal overflowed the machine integer range")]
    Overflow,
    #[error("trailing input after a complete parse")]
    TrailingInput,
}

pub type PResult<T> = Result<T, ParseError>;
