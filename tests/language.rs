use std::fs;

use pretty_assertions::assert_eq;
use quill::{
    get_result,
    interpreter::{
        evaluator::function::builtin::{BUILTIN_FUNCTIONS, lookup_builtin},
        value::{core::Object, environment::Environment},
    },
};
use walkdir::WalkDir;

#[test]
fn demo_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "ql"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read \
                                                                      {expected_path:?}: {e}")
                                                          });

        count += 1;
        match get_result(&source, &Environment::new()) {
            Ok(result) => assert_eq!(result.inspect(), expected.trim_end(), "demo {path:?}"),
            Err(e) => panic!("Demo {path:?} failed to parse:\n{e}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn eval(src: &str) -> Object {
    get_result(src, &Environment::new()).unwrap_or_else(|e| panic!("Script failed to parse: {e}"))
}

fn assert_eval(src: &str, expected: &str) {
    assert_eq!(eval(src).inspect(), expected, "source: {src}");
}

fn assert_error(src: &str, message: &str) {
    match eval(src) {
        Object::Error(e) => assert_eq!(e.to_string(), message, "source: {src}"),
        other => panic!("Script succeeded with {other} but was expected to fail: {src}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_eval("5", "5");
    assert_eval("-10", "-10");
    assert_eval("5 + 5 + 5 + 5 - 10", "10");
    assert_eval("2 * 2 * 2 * 2 * 2", "32");
    assert_eval("-50 + 100 + -50", "0");
    assert_eval("5 * 2 + 10", "20");
    assert_eval("50 / 2 * 2 + 10", "60");
    assert_eval("2 * (5 + 10)", "30");
    assert_eval("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50");
}

#[test]
fn division_truncates_toward_zero() {
    assert_eval("7 / 2", "3");
    assert_eval("-7 / 2", "-3");
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_eval("9223372036854775807 + 1", "-9223372036854775808");
    assert_eval("-9223372036854775807 - 2", "9223372036854775807");
}

#[test]
fn boolean_expressions() {
    assert_eval("true", "true");
    assert_eval("1 < 2", "true");
    assert_eval("1 > 2", "false");
    assert_eval("1 == 1", "true");
    assert_eval("1 != 1", "false");
    assert_eval("true == false", "false");
    assert_eval("true != false", "true");
    assert_eval("(1 < 2) == true", "true");
    assert_eval("(1 > 2) == true", "false");
}

#[test]
fn bang_operator() {
    assert_eval("!true", "false");
    assert_eval("!false", "true");
    assert_eval("!5", "false");
    assert_eval("!0", "false");
    assert_eval("!!5", "true");
    assert_eval(r#"!"""#, "false");
    assert_eval("!if (false) { 1 }", "true");
}

#[test]
fn if_else_expressions() {
    assert_eval("if (true) { 10 }", "10");
    assert_eval("if (false) { 10 }", "null");
    assert_eval("if (1) { 10 }", "10");
    assert_eval("if (1 < 2) { 10 }", "10");
    assert_eval("if (1 > 2) { 10 } else { 20 }", "20");
    assert_eval("if 1 < 2 { 10 } else { 20 }", "10");
    assert_eval("if (true) { }", "null");
}

#[test]
fn return_statements() {
    assert_eval("return 10;", "10");
    assert_eval("return 10; 9;", "10");
    assert_eval("return 2 * 5; 9;", "10");
    assert_eval("9; return 2 * 5; 9;", "10");
    assert_eval("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
    assert_eval("const f = fn(x) { return x; x + 10; }; f(10);", "10");
    assert_eval("const f = fn(x) { const result = x + 10; return result; return 10; }; f(10);",
                "20");
}

#[test]
fn return_only_leaves_the_innermost_function() {
    assert_eval("const inner = fn() { return 1; 2 };
                 const outer = fn() { const x = inner(); x + 10 };
                 outer()",
                "11");
}

#[test]
fn error_handling() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error(r#"-"a""#, "unknown operator: -STRING");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "identifier not found: foobar");
    assert_error(r#""Hello" - "World""#, "unknown operator: STRING - STRING");
    assert_error(r#"{"name": "Monkey"}[fn(x) { x }];"#, "unusable as map key: FUNCTION");
}

#[test]
fn mismatched_equality_is_an_unknown_operator() {
    assert_error("1 == true", "unknown operator: INTEGER == BOOLEAN");
    assert_error(r#""1" != 1"#, "unknown operator: STRING != INTEGER");
    assert_error("[1] < 2", "type mismatch: ARRAY < INTEGER");
}

#[test]
fn errors_stop_evaluation_at_once() {
    let env = Environment::new();

    let result = get_result("const a = 1; a + true; const b = 2;", &env).unwrap();
    assert!(result.is_error());
    assert_eq!(env.get("a"), Some(Object::Integer(1)));
    assert_eq!(env.get("b"), None);
}

#[test]
fn division_by_zero() {
    assert_error("10 / 0", "division by zero");
    assert_error("const f = fn(x) { 1 / x }; f(0)", "division by zero");
}

#[test]
fn const_statements() {
    assert_eval("const a = 5; a;", "5");
    assert_eval("const a = 5 * 5; a;", "25");
    assert_eval("const a = 5; const b = a; b;", "5");
    assert_eval("const a = 5; const b = a; const c = a + b + 5; c;", "15");
    assert_eval("const a = 5", "null");
}

#[test]
fn const_bindings_are_write_once() {
    assert_error("const a = 1; const a = 2;", "identifier already declared: a");
    assert_eval("const a = 1; const f = fn() { const a = 2; a }; [f(), a]", "[2, 1]");
    assert_eval("const a = 1; if (true) { a }", "1");
    assert_error("const a = 1; if (true) { const a = 2; }", "identifier already declared: a");
}

#[test]
fn function_objects() {
    assert_eval("fn(x) { x + 2; };", "fn(x) { (x + 2) }");
    assert_eval("fn() { }", "fn() { }");
}

#[test]
fn function_application() {
    assert_eval("const identity = fn(x) { x; }; identity(5);", "5");
    assert_eval("const identity = fn(x) { return x; }; identity(5);", "5");
    assert_eval("const double = fn(x) { x * 2; }; double(5);", "10");
    assert_eval("const add = fn(x, y) { x + y; }; add(5, 5);", "10");
    assert_eval("const add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", "20");
    assert_eval("fn(x) { x; }(5)", "5");
    assert_eval("const noop = fn() { }; noop()", "null");
}

#[test]
fn arity_is_checked() {
    assert_error("fn(x) { x }(1, 2)", "wrong number of arguments. got=2, want=1");
    assert_error("const add = fn(a, b) { a + b }; add(1)",
                 "wrong number of arguments. got=1, want=2");
}

#[test]
fn duplicate_parameters_fail_when_called() {
    assert_error("fn(x, x) { x }(1, 2)", "identifier already declared: x");
    assert_eval("const f = fn(x, x) { x }; 1", "1");
}

#[test]
fn calling_a_non_function() {
    assert_error("5(1)", "not a function: INTEGER");
    assert_error(r#"const s = "x"; s()"#, "not a function: STRING");
}

#[test]
fn closures() {
    assert_eval("const newAdder = fn(x) { fn(y) { x + y }; };
                 const addTwo = newAdder(2);
                 addTwo(2);",
                "4");
}

#[test]
fn closures_see_later_definitions_in_their_scope() {
    assert_eval("const f = fn() { later }; const later = 7; f()", "7");
}

#[test]
fn recursion() {
    assert_eval("const fact = fn(n) { if (n < 2) { 1 } else { n * fact(n - 1) } }; fact(10)",
                "3628800");
}

#[test]
fn string_literals_and_concatenation() {
    assert_eval(r#""Hello World!""#, "Hello World!");
    assert_eval(r#""Hello" + " " + "World!""#, "Hello World!");
    assert_eval(r#""a" == "a""#, "true");
    assert_eval(r#""a" != "b""#, "true");
    assert_eval(r#""a" == "b""#, "false");
}

#[test]
fn builtin_length() {
    assert_eval(r#"length("")"#, "0");
    assert_eval(r#"length("four")"#, "4");
    assert_eval(r#"length("hello world")"#, "11");
    assert_eval("length([1, 2, 3])", "3");
    assert_eval("length([])", "0");
    assert_error("length(1)", "argument to 'length' is not supported, got INTEGER");
    assert_error(r#"length("one", "two")"#, "wrong number of arguments. got=2, want=1");
}

#[test]
fn builtin_last_index_and_tail() {
    assert_eval("lastIndex([1, 2, 3])", "2");
    assert_eval("lastIndex([])", "null");
    assert_error("lastIndex(1)", "argument to 'lastIndex' must be of type ARRAY, got INTEGER");
    assert_eval("tail([1, 2, 3])", "[2, 3]");
    assert_eval("tail([1])", "[]");
    assert_eval("tail([])", "[]");
    assert_error(r#"tail("abc")"#, "argument to 'tail' must be of type ARRAY, got STRING");
}

#[test]
fn builtin_push() {
    assert_eval("push([], 1)", "[1]");
    assert_eval("const a = [1]; const b = push(a, 2); [a, b]", "[[1], [1, 2]]");
    assert_error("push(1, 1)", "first argument to 'push' must be of type ARRAY, got INTEGER");
    assert_error("push([1])", "wrong number of arguments. got=1, want=2");
}

#[test]
fn builtin_print_returns_null() {
    assert_eval(r#"print("hello", 1, [2])"#, "null");
    assert_eval("print()", "null");
}

#[test]
fn builtins_are_values() {
    assert_eval("length", "builtin function");
    assert_eval("const len = length; len([1, 2])", "2");
    assert_eval("const apply = fn(f, x) { f(x) }; apply(tail, [1, 2])", "[2]");
}

#[test]
fn every_registered_builtin_resolves() {
    for name in BUILTIN_FUNCTIONS {
        assert_eq!(lookup_builtin(name).map(|b| b.name), Some(*name));
        assert_eval(name, "builtin function");
        assert_eval(&format!("{name} == {name}"), "true");
    }
    assert_eq!(BUILTIN_FUNCTIONS.len(), 5);
    assert_eval("lastIndex", "builtin function");
}

#[test]
fn bindings_shadow_builtins() {
    assert_eval("const length = fn(x) { 42 }; length([1])", "42");
}

#[test]
fn array_literals_and_indexing() {
    assert_eval("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_eval("[1, 2, 3][0]", "1");
    assert_eval("[1, 2, 3][1]", "2");
    assert_eval("[1, 2, 3][2]", "3");
    assert_eval("const i = 0; [1][i];", "1");
    assert_eval("[1, 2, 3][1 + 1];", "3");
    assert_eval("const myArray = [1, 2, 3]; myArray[2];", "3");
    assert_eval("const myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", "6");
    assert_eval("const myArray = [1, 2, 3]; const i = myArray[0]; myArray[i]", "2");
    assert_eval("[1, 2, 3][3]", "null");
    assert_eval("[1, 2, 3][-1]", "null");
    assert_eval("[][0]", "null");
}

#[test]
fn unsupported_index_operations() {
    assert_error("1[0]", "index operator not supported: INTEGER[INTEGER]");
    assert_error(r#"[1, 2]["a"]"#, "index operator not supported: ARRAY[STRING]");
    assert_error(r#""abc"[0]"#, "index operator not supported: STRING[INTEGER]");
}

#[test]
fn map_literals_and_indexing() {
    assert_eval(r#"{"foo": 5}["foo"]"#, "5");
    assert_eval(r#"{"foo": 5}["bar"]"#, "null");
    assert_eval(r#"const key = "foo"; {"foo": 5}[key]"#, "5");
    assert_eval(r#"{}["foo"]"#, "null");
    assert_eval("{5: 5}[5]", "5");
    assert_eval("{true: 5}[true]", "5");
    assert_eval("{false: 5}[false]", "5");
    assert_eval(r#"{"a": 1}"#, "{a: 1}");
    assert_eval("{}", "{}");
}

#[test]
fn map_keys_are_evaluated() {
    assert_eval(r#"const two = "two";
                   const m = {"one": 10 - 9, two: 1 + 1, "thr" + "ee": 6 / 2, 4: 4, true: 5};
                   [m["one"], m["two"], m["three"], m[4], m[true]]"#,
                "[1, 2, 3, 4, 5]");
}

#[test]
fn duplicate_map_keys_keep_the_last_value() {
    assert_eval(r#"const m = {"a": 1, "a": 2}; m["a"]"#, "2");
    assert_eval(r#"{"a": 1, "a": 2}"#, "{a: 2}");
}

#[test]
fn map_keys_of_different_types_are_distinct() {
    assert_eval(r#"const m = {1: "int", true: "bool", "1": "str"}; [m[1], m[true], m["1"]]"#,
                "[int, bool, str]");
}

#[test]
fn unusable_map_keys() {
    assert_error("{[1]: 2}", "unusable as map key: ARRAY");
    assert_error(r#"{"a": 1}[{}]"#, "unusable as map key: MAP");
}

#[test]
fn equality_of_compound_values_is_identity() {
    assert_eval("const a = [1]; a == a", "true");
    assert_eval("[1] == [1]", "false");
    assert_eval("[1] != [1]", "true");
    assert_eval("const f = fn(x) { x }; f == f", "true");
    assert_eval("fn(x) { x } == fn(x) { x }", "false");
    assert_eval("length == length", "true");
    assert_eval("length == tail", "false");
    assert_eval("if (false) { 1 } == if (false) { 2 }", "true");
}

#[test]
fn environment_persists_across_runs() {
    let env = Environment::new();

    get_result("const counter = fn(x) { x + 1 };", &env).unwrap();
    get_result("const start = 41;", &env).unwrap();
    let result = get_result("counter(start)", &env).unwrap();

    assert_eq!(result, Object::Integer(42));
}

#[test]
fn empty_program_is_null() {
    assert_eq!(eval(""), Object::Null);
    assert_eq!(eval("  \n\t "), Object::Null);
}

#[test]
fn syntax_errors_prevent_evaluation() {
    let env = Environment::new();

    let errors = get_result("const a = 1; const x 5;", &env).unwrap_err();
    assert_eq!(errors.errors().len(), 1);
    assert_eq!(errors.to_string(),
               "found 1 syntax error:\n\texpected next token to be =, got INT instead");
    assert_eq!(env.get("a"), None);
}
