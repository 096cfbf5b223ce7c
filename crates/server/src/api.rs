//! HTTP endpoint handlers.

pub mod documents;
pub mod health;
