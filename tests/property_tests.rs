//! Property-based tests for test-file rendering
//!
//! These tests use proptest to verify invariants across many randomly
//! generated spec values, catching literal-rendering edge cases that
//! hand-written tests might miss.

use std::collections::BTreeMap;
use std::path::PathBuf;

use proptest::prelude::*;
use serde_json::Value;
use syn::parse_quote;

use testgen::codegen::literal::render_value;
use testgen::codegen::render_test_file;
use testgen::validate::{EntryPoint, Param};
use testgen::{SolutionId, SolutionUnit, TestCase};

/// JSON values without objects: the set spec values may use.
fn spec_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e12f64..1.0e12).prop_map(Value::from),
        any::<String>().prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| prop::collection::vec(inner, 0..6).prop_map(Value::Array))
}

fn int_list() -> impl Strategy<Value = Value> {
    prop::collection::vec(any::<i32>(), 0..8).prop_map(Value::from)
}

fn unit() -> SolutionUnit {
    SolutionUnit::new(SolutionId::new("arrays/sum_all"), PathBuf::from("src/arrays/sum_all.rs"))
}

fn sum_all() -> EntryPoint {
    EntryPoint {
        name: "sum_all".to_string(),
        params: vec![Param {
            name: "nums".to_string(),
            ty: parse_quote!(Vec<i32>),
        }],
        output: Some(parse_quote!(i64)),
        generics: Vec::new(),
    }
}

fn case(nums: Value, output: i64) -> TestCase {
    TestCase {
        input: BTreeMap::from([("nums".to_string(), nums)]),
        output: Value::from(output),
    }
}

// =============================================================================
// Literal Properties
// =============================================================================

proptest! {
    /// Property: every closed-set value renders to a valid Rust expression
    #[test]
    fn untyped_values_render_as_expressions(value in spec_value()) {
        let tokens = render_value(&value, None).expect("closed-set value must render");
        prop_assert!(syn::parse2::<syn::Expr>(tokens).is_ok());
    }

    /// Property: integers rendered for a float target are float literals
    #[test]
    fn integers_widen_for_float_targets(n in any::<i32>()) {
        let ty: syn::Type = parse_quote!(f64);
        let tokens = render_value(&Value::from(n), Some(&ty)).unwrap();
        let expr: syn::Expr = syn::parse2(tokens).unwrap();
        let lit = match expr {
            syn::Expr::Lit(lit) => lit.lit,
            syn::Expr::Unary(unary) => match *unary.expr {
                syn::Expr::Lit(lit) => lit.lit,
                other => panic!("unexpected operand: {other:?}"),
            },
            other => panic!("unexpected expression: {other:?}"),
        };
        prop_assert!(matches!(lit, syn::Lit::Float(_)));
    }

    /// Property: strings for `String` parameters survive escaping
    #[test]
    fn owned_strings_round_trip_through_literals(s in any::<String>()) {
        let ty: syn::Type = parse_quote!(String);
        let tokens = render_value(&Value::String(s.clone()), Some(&ty)).unwrap();
        let call: syn::ExprCall = syn::parse2(tokens).unwrap();
        let arg = call.args.first().unwrap();
        match arg {
            syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(lit), .. }) => prop_assert_eq!(lit.value(), s),
            other => panic!("unexpected argument: {other:?}"),
        }
    }
}

// =============================================================================
// Test File Properties
// =============================================================================

proptest! {
    /// Property: rendering is deterministic for identical inputs
    #[test]
    fn rendering_is_deterministic(lists in prop::collection::vec((int_list(), any::<i64>()), 0..5)) {
        let cases: Vec<_> = lists.into_iter().map(|(nums, out)| case(nums, out)).collect();
        let first = render_test_file(&unit(), &sum_all(), &cases, "solutions").unwrap();
        let second = render_test_file(&unit(), &sum_all(), &cases, "solutions").unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: a rendered file parses and holds one test per case, in order
    #[test]
    fn rendered_file_has_one_test_per_case(lists in prop::collection::vec((int_list(), any::<i64>()), 0..5)) {
        let cases: Vec<_> = lists.into_iter().map(|(nums, out)| case(nums, out)).collect();
        let rendered = render_test_file(&unit(), &sum_all(), &cases, "solutions").unwrap();
        let file = syn::parse_file(&rendered).unwrap();

        let names: Vec<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Fn(f) => Some(f.sig.ident.to_string()),
                _ => None,
            })
            .collect();
        let expected: Vec<String> = (0..cases.len()).map(|i| format!("test_case_{i}")).collect();
        prop_assert_eq!(names, expected);
        prop_assert!(matches!(file.items.first(), Some(syn::Item::Use(_))));
    }
}
