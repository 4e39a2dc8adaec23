//! Filter parse errors. Only the strict entry points produce these.

pub type ExprResult<T> = Result<T, ExprError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A `(` that is never closed. `offset` is the byte offset inside `token`.
    #[error("Unclosed '(' at offset {offset} in {token:?}")]
    UnclosedParen { token: String, offset: usize },

    /// A `)` with no matching `(` before it.
    #[error("Unexpected ')' at offset {offset} in {token:?}")]
    UnexpectedCloseParen { token: String, offset: usize },
}

impl ExprError {
    pub fn token(&self) -> &str {
        match self {
            ExprError::UnclosedParen { token, .. } => token,
            ExprError::UnexpectedCloseParen { token, .. } => token,
        }
    }
}
