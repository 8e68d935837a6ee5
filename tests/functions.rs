use quill::interpreter::parse_and_eval;
use quill::Value;
use std::rc::Rc;

fn run(source: &str) -> Value {
    parse_and_eval(source).unwrap_or_else(|e| panic!("eval failed for {:?}: {}", source, e))
}

#[test]
fn test_function_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Value::Int(expected), "source: {}", source);
    }
}

#[test]
fn test_nested_call_arguments() {
    assert_eq!(
        run("let add = fn(x, y) { x + y }; add(5, add(5, 5))"),
        Value::Int(15)
    );
}

#[test]
fn test_closure_captures_definition_environment() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        addTwo(3)
    ";
    assert_eq!(run(source), Value::Int(5));
}

#[test]
fn test_closure_over_local_binding() {
    assert_eq!(
        run("let c = fn() { let x = 10; fn() { x } }; c()()"),
        Value::Int(10)
    );
}

#[test]
fn test_closures_do_not_alias() {
    let source = "
        let make = fn(x) { fn(y) { x + y } };
        let f = make(100);
        let g = make(200);
        f(1) + g(1)
    ";
    assert_eq!(run(source), Value::Int(302));
}

#[test]
fn test_closure_captures_frame_not_values() {
    // the closure holds the environment itself, so a later rebinding in
    // that frame is visible through it
    let source = "
        let x = 1;
        let f = fn() { x };
        let x = 2;
        f()
    ";
    assert_eq!(run(source), Value::Int(2));
}

#[test]
fn test_assignment_inside_call_shadows_instead_of_mutating() {
    // `=` writes the innermost frame only, so the outer binding survives
    let source = "
        let n = 0;
        let bump = fn() { n = n + 1; n };
        bump() + n
    ";
    assert_eq!(run(source), Value::Int(1));
}

#[test]
fn test_function_as_argument() {
    let source = "
        let apply = fn(f, x) { f(x) };
        apply(fn(n) { n * 3 }, 7)
    ";
    assert_eq!(run(source), Value::Int(21));
}

#[test]
fn test_recursion() {
    let source = "
        let fib = fn(n) {
            if (n < 2) { return n }
            fib(n - 1) + fib(n - 2)
        };
        fib(10)
    ";
    assert_eq!(run(source), Value::Int(55));
}

#[test]
fn test_call_uses_closure_env_not_caller_env() {
    let source = "
        let x = 5;
        let f = fn() { x };
        let shadow = fn() { let x = 99; f() };
        shadow()
    ";
    assert_eq!(run(source), Value::Int(5));
}

#[test]
fn test_function_display_form() {
    assert_eq!(
        run("fn(x) { x + 2; }").to_string(),
        "fn(x) { (x + 2); }"
    );
}

#[test]
fn test_map_with_function_literal() {
    assert_eq!(
        run("map(fn(x) { x * 2 }, [1, 2, 1 + 2])"),
        Value::Array(Rc::new(vec![
            Value::Int(2),
            Value::Int(4),
            Value::Int(6),
        ]))
    );
}

#[test]
fn test_map_with_named_function() {
    assert_eq!(
        run("let doubler = fn(x) { x * 2 }; map(doubler, [1, 2, 3])"),
        Value::Array(Rc::new(vec![
            Value::Int(2),
            Value::Int(4),
            Value::Int(6),
        ]))
    );
}

#[test]
fn test_map_over_strings() {
    assert_eq!(
        run(r#"map(fn(s) { "hi " + s }, ["ann", "bob"])"#),
        Value::Array(Rc::new(vec![
            Value::Str(Rc::from("hi ann")),
            Value::Str(Rc::from("hi bob")),
        ]))
    );
}

#[test]
fn test_map_empty_list() {
    assert_eq!(
        run("map(fn(x) { x }, [])"),
        Value::Array(Rc::new(Vec::new()))
    );
}

#[test]
fn test_map_length_matches_input() {
    let source = "
        let xs = map(fn(x) { x + 1 }, [1, 2, 3, 4, 5]);
        len(xs)
    ";
    assert_eq!(run(source), Value::Int(5));
}

#[test]
fn test_map_with_builtin() {
    assert_eq!(
        run("map(len, [\"a\", \"ab\", \"abc\"])"),
        Value::Array(Rc::new(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
        ]))
    );
}
