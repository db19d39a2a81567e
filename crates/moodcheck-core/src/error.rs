//! Error types for `moodcheck-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Incoming navigation state could not be decoded. Callers recover by
  /// falling back to an empty selection.
  #[error("malformed navigation state: {0}")]
  MalformedState(String),

  #[error("notes exceed {max} characters (got {len})")]
  NotesTooLong { len: usize, max: usize },

  #[error("invalid reminder time: {0:?}")]
  InvalidTime(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
