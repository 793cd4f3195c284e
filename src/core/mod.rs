//! Foundational types: records, candidate files, assignments.

pub mod assignment;
pub mod candidate;
pub mod record;
