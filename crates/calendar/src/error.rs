#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unknown format token '{0}'")]
    UnknownToken(char),

    #[error("unterminated literal in pattern")]
    UnterminatedLiteral,
}

pub type Result<T> = std::result::Result<T, Error>;
