/// The two ways an evaluation can fail.
///
/// Neither kind carries a payload: a caller only needs to know which of the
/// two fixed messages to show.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalError {
    /// A configured cap would have been exceeded.
    #[error("limit exceeded")]
    Limit,
    /// The input does not follow the roll grammar.
    #[error("syntax error")]
    Syntax,
}

impl EvalError {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Limit => "Too many dice. Roll fewer dice and try again.",
            Self::Syntax => "Unable to understand that roll. Be more precise.",
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
