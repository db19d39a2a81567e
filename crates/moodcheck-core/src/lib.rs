//! Core types and pure logic for the moodcheck wizard.
//!
//! This crate is deliberately free of HTTP and terminal dependencies. The
//! endpoint server and the terminal wizard both depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod activity;
pub mod carrier;
pub mod checkin;
pub mod error;
pub mod gateway;
pub mod mood;
pub mod reminder;
pub mod route;
pub mod selection;

pub use error::{Error, Result};
pub use gateway::{SubmissionError, SubmissionGateway};
