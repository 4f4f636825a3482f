//! Logweave benchmarking suite
//!
//! Benchmarks for folding configuration trees and for parsing and rendering
//! configuration documents.

pub mod common;

pub use common::*;
