use thiserror::Error;

/// Errors raised when an edit script does not fit the sequence it is applied to.
///
/// The distance and path functions themselves are total; only replaying an
/// externally supplied operation list can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("source symbol at position {position} does not match the operation")]
    SymbolMismatch { position: usize },

    #[error("operation at source position {position} needs a symbol past the end of the source")]
    SourceExhausted { position: usize },

    #[error("edit script ended with {remaining} source symbol(s) left unconsumed")]
    UnconsumedSource { remaining: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
