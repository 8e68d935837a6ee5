use quill::interpreter::parse_and_eval;
use quill::Value;
use std::rc::Rc;

fn run(source: &str) -> Value {
    parse_and_eval(source).unwrap_or_else(|e| panic!("eval failed for {:?}: {}", source, e))
}

#[test]
fn test_array_literal() {
    assert_eq!(
        run("[1, 2 * 2, 3 + 3]"),
        Value::Array(Rc::new(vec![
            Value::Int(1),
            Value::Int(4),
            Value::Int(6),
        ]))
    );
    assert_eq!(run("[]"), Value::Array(Rc::new(Vec::new())));
}

#[test]
fn test_array_indexing() {
    let cases = [
        ("[1, 2, 3][0]", Value::Int(1)),
        ("[1, 2, 3][1]", Value::Int(2)),
        ("[1, 2, 3][2]", Value::Int(3)),
        ("let i = 0; [1][i]", Value::Int(1)),
        ("[1, 2, 3][1 + 1]", Value::Int(3)),
        ("let a = [1, 2, 3]; a[2]", Value::Int(3)),
        ("let a = [1, 2, 3]; a[0] + a[1] + a[2]", Value::Int(6)),
        ("let a = [1, 2, 3]; let i = a[0]; a[i]", Value::Int(2)),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "source: {}", source);
    }
}

#[test]
fn test_out_of_bounds_indexing_is_null() {
    assert_eq!(run("let a = [1, 2, 3]; a[1 + 1]"), Value::Int(3));
    assert_eq!(run("let a = [1, 2, 3]; a[5]"), Value::Null);
    assert_eq!(run("let a = [1, 2, 3]; a[-1]"), Value::Null);
    assert_eq!(run("[][0]"), Value::Null);
}

#[test]
fn test_hash_literal_and_lookup() {
    assert_eq!(
        run(r#"let h = {"one": 1, "two": 2}; h["one"] + h["two"]"#),
        Value::Int(3)
    );
    assert_eq!(run(r#"let h = {"one": 1}; h["three"]"#), Value::Null);
}

#[test]
fn test_hash_keys_evaluated_at_runtime() {
    assert_eq!(
        run(r#"let key = "o" + "ne"; {"one": 1}[key]"#),
        Value::Int(1)
    );
    assert_eq!(run("{1 + 1: 10}[2]"), Value::Int(10));
}

#[test]
fn test_hash_key_kinds() {
    assert_eq!(run("{1: 10}[1]"), Value::Int(10));
    assert_eq!(run("{true: 10}[true]"), Value::Int(10));
    assert_eq!(run("{false: 10}[false]"), Value::Int(10));
    assert_eq!(run(r#"{"k": 10}["k"]"#), Value::Int(10));
}

#[test]
fn test_hash_display_preserves_insertion_order() {
    assert_eq!(
        run(r#"{"z": 1, "a": 2, "m": 3}"#).to_string(),
        "{z: 1, a: 2, m: 3}"
    );
}

#[test]
fn test_later_duplicate_key_wins() {
    assert_eq!(run(r#"{"k": 1, "k": 2}["k"]"#), Value::Int(2));
}

#[test]
fn test_empty_hash() {
    assert_eq!(run(r#"{}["k"]"#), Value::Null);
}

#[test]
fn test_nested_structures() {
    assert_eq!(
        run(r#"let h = {"xs": [1, 2, 3]}; h["xs"][1]"#),
        Value::Int(2)
    );
    assert_eq!(
        run(r#"[{"a": 1}, {"a": 2}][1]["a"]"#),
        Value::Int(2)
    );
}

#[test]
fn test_len() {
    assert_eq!(run(r#"len("")"#), Value::Int(0));
    assert_eq!(run(r#"len("four")"#), Value::Int(4));
    assert_eq!(run(r#"len("hello world")"#), Value::Int(11));
    assert_eq!(run("len([1, 2, 3])"), Value::Int(3));
    assert_eq!(run("len([])"), Value::Int(0));
}

#[test]
fn test_first_last_rest() {
    assert_eq!(run("first([1, 2, 3])"), Value::Int(1));
    assert_eq!(run("first([])"), Value::Null);
    assert_eq!(run("last([1, 2, 3])"), Value::Int(3));
    assert_eq!(run("last([])"), Value::Null);
    assert_eq!(
        run("rest([1, 2, 3])"),
        Value::Array(Rc::new(vec![Value::Int(2), Value::Int(3)]))
    );
    assert_eq!(run("rest([])"), Value::Null);
}

#[test]
fn test_push_is_non_destructive() {
    let source = "
        let a = [1];
        let b = push(a, 2);
        len(a) + len(b)
    ";
    assert_eq!(run(source), Value::Int(3));
}

#[test]
fn test_builtins_compose() {
    // the classic rest/push reduction: sum a list recursively
    let source = "
        let sum = fn(xs, acc) {
            if (len(xs) == 0) { return acc }
            sum(rest(xs), acc + first(xs))
        };
        sum([1, 2, 3, 4], 0)
    ";
    assert_eq!(run(source), Value::Int(10));
}

#[test]
fn test_puts_returns_null() {
    assert_eq!(run(r#"puts("hello")"#), Value::Null);
}

#[test]
fn test_array_display() {
    assert_eq!(run("[1, true, \"x\", [2]]").to_string(), "[1, true, x, [2]]");
}
