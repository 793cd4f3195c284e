//! Greedy nearest-timestamp matching.

pub mod greedy;
