//! Behavioral tests for the null-safe proxy
//!
//! Exercises the full chaining surface: wrapping, attribute navigation,
//! method invocation, array access, and the absence rules that hold the
//! whole thing together. Every chain here either produces a present value,
//! collapses to absent, or fails with a typed error - nothing panics.

use nullsafe::{wrap, wrap_path, FunctionBuilder, Key, Proxy, RuntimeError, Value, ValueMap};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

// ============================================================================
// Fixtures and helpers
// ============================================================================

/// Object with one data attribute and one method, the canonical test target.
fn person() -> Value {
    let mut obj = ValueMap::new();
    obj.insert("id", 1);
    obj.insert("getName", Value::function("getName", |_args| Ok(Value::string("Jon"))));
    Value::object(obj)
}

/// One step of a proxy chain, so absence tests can enumerate step orders.
#[derive(Debug, Clone, Copy)]
enum Step {
    Get(&'static str),
    Call(&'static str),
    Apply(&'static str),
}

fn run_chain(root: Value, steps: &[Step]) -> Proxy {
    let mut proxy = wrap(root);
    for step in steps {
        proxy = match *step {
            Step::Get(key) => proxy.get(key),
            Step::Call(name) => proxy.call(Some(name), &[]).expect("chain call errored"),
            Step::Apply(name) => proxy.apply(Some(name), vec![]).expect("chain apply errored"),
        };
    }
    proxy
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn test_wrap_object_is_present() {
    let proxy = wrap(person());
    assert!(!proxy.is_null());
}

#[test]
fn test_wrap_null_is_absent() {
    let proxy = wrap(Value::Null);
    assert!(proxy.is_null());
    assert_eq!(proxy.value(), &Value::Null);
}

#[test]
fn test_wrap_scalars_are_present() {
    assert!(!wrap(json!(0)).is_null());
    assert!(!wrap(json!("")).is_null());
    assert!(!wrap(json!(false)).is_null());
    assert!(!wrap(json!([])).is_null());
    assert!(!wrap(json!({})).is_null());
}

// ============================================================================
// Attribute access
// ============================================================================

#[test]
fn test_get_value() {
    let proxy = wrap(json!({"id": 50}));
    assert_eq!(proxy.get("id").value(), &Value::Number(50.0));
}

#[test]
fn test_get_null_attribute() {
    let proxy = wrap(json!({"id": 1}));
    let name = proxy.get("name");
    assert!(name.is_null());
    assert_eq!(name.value(), &Value::Null);
}

#[test]
fn test_get_explicit_null_attribute() {
    let proxy = wrap(json!({"owner": null}));
    assert!(proxy.get("owner").is_null());
}

#[test]
fn test_get_falsy_attributes_are_present() {
    let proxy = wrap(json!({"count": 0, "label": "", "done": false}));
    assert_eq!(proxy.get("count").value(), &Value::Number(0.0));
    assert_eq!(proxy.get("label").value(), &Value::string(""));
    assert_eq!(proxy.get("done").value(), &Value::Bool(false));
}

#[test]
fn test_get_element_of_wrapped_list() {
    let proxy = wrap(json!([100, 200]));
    assert_eq!(proxy.get(1).value(), &Value::Number(200.0));
    assert!(proxy.get(2).is_null());
}

#[test]
fn test_get_with_key_values() {
    let proxy = wrap(json!({"items": ["a", "b"]}));
    assert_eq!(
        proxy.get(Key::from("items")).get(Key::Index(0)).value(),
        &Value::string("a"),
    );
}

// ============================================================================
// Chained absence
// ============================================================================

#[rstest]
#[case(&[Step::Get("subobject"), Step::Get("name")])]
#[case(&[Step::Get("a"), Step::Get("b"), Step::Get("c"), Step::Get("d")])]
#[case(&[Step::Apply("calculate"), Step::Get("junk")])]
#[case(&[Step::Call("calculate"), Step::Get("junk")])]
#[case(&[Step::Call("name"), Step::Call("junk")])]
#[case(&[Step::Apply("name"), Step::Apply("junk")])]
#[case(&[Step::Apply("name"), Step::Call("junk"), Step::Get("stuff")])]
#[case(&[Step::Call("name"), Step::Apply("junk"), Step::Get("stuff")])]
fn test_chains_collapse_to_absent(#[case] steps: &[Step]) {
    let ended = run_chain(json!({"id": 1}).into(), steps);
    assert!(ended.is_null());
    assert_eq!(ended.value(), &Value::Null);
}

#[test]
fn test_chain_through_present_scalar() {
    // "id" resolves to a number; everything after it misses quietly
    let proxy = wrap(json!({"id": 1}));
    let ended = proxy.get("id").call(Some("junk"), &[]).unwrap().get("stuff");
    assert!(ended.is_null());
}

#[test]
fn test_chain_through_function_value() {
    // Navigating to the method without calling it wraps the function itself
    let proxy = wrap(person());
    let func = proxy.get("getName");
    assert!(!func.is_null());
    assert!(func.value().is_function());

    // Attribute lookups on a function miss quietly
    let ended = func.call(Some("junk"), &[]).unwrap().get("stuff");
    assert!(ended.is_null());
}

// ============================================================================
// Invocation
// ============================================================================

#[test]
fn test_call_function() {
    let result = wrap(person()).call(Some("getName"), &[]).unwrap();
    assert_eq!(result.value(), &Value::string("Jon"));
}

#[test]
fn test_apply_missing_function() {
    let result = wrap(person()).apply(Some("calculate"), vec![]).unwrap();
    assert!(result.is_null());
}

#[test]
fn test_call_missing_function_with_args() {
    let result = wrap(person())
        .call(Some("calculate"), &[Value::Number(1.0), Value::Number(2.0)])
        .unwrap();
    assert!(result.is_null());
}

#[test]
fn test_call_wrapped_callable_directly() {
    let proxy = wrap(Value::function("greeting", |_args| Ok(Value::string("Hi"))));
    let result = proxy.call(None, &[]).unwrap();
    assert_eq!(result.value(), &Value::string("Hi"));
}

#[test]
fn test_call_absent_target_directly() {
    let proxy = wrap(Value::Null);
    assert!(proxy.call(None, &[]).unwrap().is_null());
    assert!(proxy.apply(None, vec![]).unwrap().is_null());
}

#[test]
fn test_arguments_reach_the_function() {
    let mut obj = ValueMap::new();
    obj.insert(
        "concat",
        Value::function("concat", |args| {
            let joined: Vec<String> = args.iter().map(|v| v.to_string()).collect();
            Ok(Value::string(joined.join("+")))
        }),
    );
    let result = wrap(Value::object(obj))
        .call(Some("concat"), &[Value::Number(1.0), Value::string("x")])
        .unwrap();
    assert_eq!(result.value(), &Value::string("1+\"x\""));
}

#[test]
fn test_call_and_apply_agree() {
    let args = [Value::Number(2.0), Value::Number(3.0)];
    let by_call = wrap(person()).call(Some("getName"), &args).unwrap();
    let by_apply = wrap(person()).apply(Some("getName"), args.to_vec()).unwrap();
    assert_eq!(by_call, by_apply);
}

#[test]
fn test_method_returning_null_is_absent() {
    let mut obj = ValueMap::new();
    obj.insert("lookup", Value::function("lookup", |_args| Ok(Value::Null)));
    let result = wrap(Value::object(obj)).call(Some("lookup"), &[]).unwrap();
    assert!(result.is_null());
    assert!(result.get("anything").is_null());
}

// ============================================================================
// Invocation errors
// ============================================================================

#[test]
fn test_calling_a_data_attribute_fails() {
    let err = wrap(person()).call(Some("id"), &[]).unwrap_err();
    assert_eq!(err, RuntimeError::NotCallable { type_name: "number" });
}

#[test]
fn test_calling_a_non_function_target_fails() {
    let err = wrap(json!("just a string")).call(None, &[]).unwrap_err();
    assert_eq!(err, RuntimeError::NotCallable { type_name: "string" });
}

#[test]
fn test_function_errors_propagate_through_call() {
    let mut obj = ValueMap::new();
    obj.insert(
        "explode",
        Value::function("explode", |_args| {
            Err(RuntimeError::TypeError {
                msg: "boom".to_string(),
            })
        }),
    );
    let err = wrap(Value::object(obj)).call(Some("explode"), &[]).unwrap_err();
    assert_eq!(err, RuntimeError::TypeError { msg: "boom".to_string() });
}

#[test]
fn test_arity_mismatch_propagates_through_call() {
    let add = FunctionBuilder::new("add")
        .with_arity(2)
        .with_implementation(|args| {
            match (args[0].as_number(), args[1].as_number()) {
                (Some(a), Some(b)) => Ok(Value::Number(a + b)),
                _ => Err(RuntimeError::TypeError {
                    msg: "Expected number".to_string(),
                }),
            }
        })
        .build()
        .unwrap();

    let mut obj = ValueMap::new();
    obj.insert("add", add);
    let proxy = wrap(Value::object(obj));

    let ok = proxy
        .call(Some("add"), &[Value::Number(2.0), Value::Number(3.0)])
        .unwrap();
    assert_eq!(ok.value(), &Value::Number(5.0));

    let err = proxy.call(Some("add"), &[Value::Number(2.0)]).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::ArityMismatch {
            name: "add".to_string(),
            expected: 2,
            got: 1,
        }
    );
}

// ============================================================================
// Array navigation
// ============================================================================

#[test]
fn test_get_at_array_element() {
    let proxy = wrap(json!({"ids": [1, 2, 3]}));
    assert_eq!(proxy.get_at("ids", 1).value(), &Value::Number(2.0));
}

#[rstest]
#[case(&json!({"ids": [1, 2, 3]}), "ids", 9)] // out of range
#[case(&json!({"ids": null}), "ids", 0)] // null attribute
#[case(&json!({"id": 1}), "ids", 0)] // missing attribute
#[case(&json!({"ids": {"a": 1}}), "ids", 0)] // not an array
fn test_get_at_misses_are_absent(#[case] doc: &serde_json::Value, #[case] key: &str, #[case] position: usize) {
    let proxy = wrap(doc.clone());
    assert!(proxy.get_at(key, position).is_null());
}

#[test]
fn test_get_at_then_chain() {
    let proxy = wrap(json!({"ids": [1, 2, 3]}));
    assert!(proxy.get_at("ids", 1).get("junk").is_null());
    assert!(proxy.get_at("ids", 1).call(Some("junk"), &[]).unwrap().is_null());
    assert!(proxy
        .get_at("ids", 1)
        .apply(Some("junk"), vec![])
        .unwrap()
        .get("stuff")
        .is_null());
}

#[test]
fn test_get_at_nested_documents() {
    let proxy = wrap(json!({"rows": [{"cells": ["a", "b"]}, {"cells": []}]}));
    assert_eq!(
        proxy.get_at("rows", 0).get_at("cells", 1).value(),
        &Value::string("b"),
    );
    assert!(proxy.get_at("rows", 1).get_at("cells", 0).is_null());
}

// ============================================================================
// Path traversal
// ============================================================================

#[test]
fn test_wrap_path_resolves_deep_value() {
    let doc = json!({"services": {"db": {"port": 5432}}});
    let proxy = wrap_path(doc, ["services", "db", "port"]);
    assert_eq!(proxy.value(), &Value::Number(5432.0));
}

#[test]
fn test_wrap_path_mixed_keys() {
    let doc = json!({"rows": [{"id": "r0"}, {"id": "r1"}]});
    let proxy = wrap_path(doc, [Key::from("rows"), Key::from(1usize), Key::from("id")]);
    assert_eq!(proxy.value(), &Value::string("r1"));
}

#[rstest]
#[case(&json!(null), &["a"])] // absent root
#[case(&json!({"a": null}), &["a", "b"])] // null mid-path
#[case(&json!({"a": {"c": 1}}), &["a", "b", "c"])] // miss mid-path
#[case(&json!({"a": 5}), &["a", "b"])] // scalar mid-path
fn test_wrap_path_short_circuits(#[case] doc: &serde_json::Value, #[case] path: &[&str]) {
    let proxy = wrap_path(doc.clone(), path.iter().copied());
    assert!(proxy.is_null());
}

// ============================================================================
// Unwrapping
// ============================================================================

#[test]
fn test_unwrap_forms() {
    let present = wrap(json!({"id": 7})).get("id");
    assert_eq!(present.value(), &Value::Number(7.0));
    assert_eq!(present.as_option(), Some(&Value::Number(7.0)));
    assert_eq!(present.clone().into_value(), Value::Number(7.0));

    let absent = wrap(json!({"id": 7})).get("name");
    assert_eq!(absent.value(), &Value::Null);
    assert_eq!(absent.as_option(), None);
    assert_eq!(absent.into_value(), Value::Null);
}
