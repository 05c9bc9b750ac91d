use thiserror::Error;

/// 曲線建構失敗的原因。
///
/// 所有檢查都在建構時完成；已建構的曲線 `evaluate` 不會失敗。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecayError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("degenerate interval: more than one anchor at x = {0}")]
    NumericDegenerate(f64)
}

impl DecayError {
    pub fn invalid_argument(message: impl Into<String>) -> DecayError {
        DecayError::InvalidArgument(message.into())
    }
}
