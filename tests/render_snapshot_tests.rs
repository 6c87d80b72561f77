//! Snapshot tests for rendered test files
//!
//! Review changes: `cargo insta review`

use std::fs;
use std::path::Path;

use testgen::codegen::render_test_file;
use testgen::discovery::{discover_solutions, discover_tests};
use testgen::validate::inspect;
use testgen::{SolutionId, SpecTable};

/// Render the shipped `has_duplicate` solution with the built-in spec table
fn render_has_duplicate() -> String {
    let solutions = discover_solutions(Path::new("solutions/src"), "rs");
    let unit = &solutions[&SolutionId::new("arrays/has_duplicate")];
    let specs = SpecTable::builtin().expect("builtin specs");
    let spec = specs.get("arrays/has_duplicate").expect("has_duplicate spec");
    let entry = inspect(unit, &spec.function_name).expect("entry point");
    render_test_file(unit, &entry, &spec.test_cases, "solutions").expect("render")
}

#[test]
fn test_has_duplicate_snapshot() {
    insta::assert_snapshot!(render_has_duplicate(), @r"
    use solutions::arrays::has_duplicate::has_duplicate;

    #[test]
    fn test_case_0() {
        let nums: Vec<i32> = vec![1, 2, 3, 1];
        assert_eq!(has_duplicate(nums), true);
    }

    #[test]
    fn test_case_1() {
        let nums: Vec<i32> = vec![1, 2, 3];
        assert_eq!(has_duplicate(nums), false);
    }
    ");
}

/// The checked-in generated test must match what the generator produces today
#[test]
fn test_checked_in_test_file_is_current() {
    let checked_in =
        fs::read_to_string("solutions/tests/arrays/test_has_duplicate.rs").expect("generated test file");
    assert_eq!(checked_in, render_has_duplicate());
}

/// Every generated test under `solutions/tests` is a registered test target
#[test]
fn test_generated_tests_are_registered_targets() {
    let manifest = fs::read_to_string("solutions/Cargo.toml").expect("solutions manifest");
    let tests = discover_tests(Path::new("solutions/tests"), "test_", "rs");
    assert!(!tests.is_empty());
    for path in tests.values() {
        let relative = path.strip_prefix("solutions").unwrap();
        let entry = format!("path = \"{}\"", relative.display());
        assert!(manifest.contains(&entry), "{} is not a [[test]] target", relative.display());
    }
}
