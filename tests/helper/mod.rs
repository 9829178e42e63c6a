//! Shared helpers for integration tests

#![allow(dead_code)]

mod ranges;

pub use ranges::*;
