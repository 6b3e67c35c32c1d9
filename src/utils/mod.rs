//! Small shared utilities

pub mod links;
