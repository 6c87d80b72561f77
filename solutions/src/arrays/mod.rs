//! Array and hashing problems.

pub mod has_duplicate;
