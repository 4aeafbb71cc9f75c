//!
//! The benchmark chart data model.
//!

pub mod benchmark;
