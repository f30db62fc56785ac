//! CLI command implementations.

pub mod circuit;
pub mod common;
pub mod gates;
pub mod operator;
pub mod trim;
pub mod version;
