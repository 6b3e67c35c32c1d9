//! The three user-facing operations: each validates nothing itself (that
//! happened in `api::parsing`), makes exactly one downstream call, and
//! maps any failure to a generic user-facing message.

pub mod chat;
pub mod notify;
pub mod summarize;
