#![forbid(unsafe_code)]

//! Durable trip → day → entry store backed by SQLite.

mod store;

pub use store::*;
