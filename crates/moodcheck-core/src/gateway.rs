//! The `SubmissionGateway` trait: where check-ins leave the process.
//!
//! Implemented by the HTTP client in `moodcheck-cli`; tests substitute an
//! in-memory fake. Each call makes at most one outbound request. Retrying is
//! always a user decision.

use std::future::Future;

use thiserror::Error;

use crate::checkin::{CheckInReceipt, CheckInRecord};

/// Why a submission did not produce a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
  /// No response was received (connection refused, timeout, DNS, …).
  #[error("network error: {0}")]
  Transport(String),

  /// The endpoint answered with a non-success status.
  #[error("HTTP error! status: {0}")]
  HttpStatus(u16),

  /// The endpoint answered successfully but the body had no usable id.
  #[error("unexpected response: {0}")]
  Response(String),
}

/// Delivers check-in records to an external endpoint.
pub trait SubmissionGateway: Send + Sync {
  /// Send `record` and return the receipt carrying the endpoint-assigned id.
  fn submit(
    &self,
    record: CheckInRecord,
  ) -> impl Future<Output = Result<CheckInReceipt, SubmissionError>> + Send + '_;
}
