//! Solved problems, one module per problem.
//!
//! Each problem lives in its own file under a topic directory. `testgen` reads this tree and
//! writes a matching `tests/<topic>/test_<problem>.rs` for every problem listed in
//! `specs/test_specs.json`.

pub mod arrays;
