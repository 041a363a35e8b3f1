//! Shared helpers.

pub mod converter;
