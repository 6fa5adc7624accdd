use std::{
    cell::RefCell,
    fs::{self},
    rc::Rc,
};

use sprout::{
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::function::builtin::BuiltinFunction, scope::Scope, value::core::Value,
    },
    run,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "sp"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read \
                                                                     {expected_path:?}: {e}")
                                                         });

        count += 1;
        match run(&source, &Scope::with_builtins()) {
            Ok(Some(value)) => assert_eq!(value.to_string(),
                                          expected.trim_end(),
                                          "demo {path:?} returned the wrong value"),
            Ok(None) => panic!("Demo {path:?} did not return a value"),
            Err(e) => panic!("Demo {path:?} failed:\n{source}\nError: {e:?}"),
        }
    }

    assert!(count > 0, "No demo scripts found in demos");
}

fn eval(src: &str) -> Result<Option<Value>, Error> {
    run(src, &Scope::with_builtins())
}

fn assert_returns(src: &str, expected: impl Into<Value>) {
    match eval(src) {
        Ok(Some(value)) => assert_eq!(value, expected.into(), "script: {src}"),
        Ok(None) => panic!("Script returned nothing: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = eval(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_runtime_error(src: &str) -> RuntimeError {
    match eval(src) {
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("Expected a runtime error, got: {e}"),
        Ok(_) => panic!("Script succeeded but was expected to fail"),
    }
}

fn assert_failure(src: &str) {
    if eval(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn declaration_and_basic_arithmetic() {
    assert_returns("let x = 1 + 2; return x;", 3.0);
    assert_returns("let x = 7 * 9; return x;", 63.0);
    assert_returns("let x = 8 - 5; return x;", 3.0);
    assert_returns("let x = 10 / 4; return x;", 2.5);
    assert_returns("return 1 + 2 * 3;", 7.0);
    assert_returns("return (1 + 2) * 3;", 9.0);
}

#[test]
fn long_expression_is_left_associative() {
    let expected = 1.0 + 2.0 * 3.0 - 4.0 / 5.0 + 6.0 * 7.0 - 8.0 + 9.0 / 10.0 * 11.0 - 12.0;
    assert_returns("return 1 + 2 * 3 - 4 / 5 + 6 * 7 - 8 + 9 / 10 * 11 - 12;", expected);
    assert_returns("return 10 - 4 - 3;", 3.0);
    assert_returns("return 64 / 4 / 2;", 8.0);

    let expected = 1.0 + 2.0 / 3.0 * 4.0 / 5.0 * 6.0 + 7.0 * 8.0 - 9.0 - 10.0 / 2.0;
    assert_returns("return 1+2/3*4/5*6+7*8-9-10/2;", expected);
}

#[test]
fn string_concatenation() {
    assert_returns(r#"return "test" + "123";"#, "test123");
    assert_returns(r#"return "n=" + 4;"#, "n=4");
    assert_returns(r#"return 1.5 + "x";"#, "1.5x");
    assert_returns(r#"return "flag: " + true;"#, "flag: true");
    assert_returns("return 'single' + \"double\";", "singledouble");
    assert_returns("return true + 1;", "true1");
    assert_returns("return 1 < 2 + 3;", "true3");
    assert_returns("return '' + 0.0000001;", "1e-7");
}

#[test]
fn redefinition_rules() {
    let err = assert_runtime_error("let a = 1; let a = 2;");
    assert_eq!(err, RuntimeError::Redefinition { name: "a".to_string() });

    assert_returns("function f() { return 1; } function f() { return 2; } return f();",
                   1.0);
    assert_returns("let f = 5; function f() { return 2; } return f;", 5.0);
    assert_runtime_error("function g() { return 1; } let g = 2;");
}

#[test]
fn user_defined_function_and_calls() {
    assert_returns("function add(a, b) { return a + b; } return add(1, 2);", 3.0);
    assert_returns("function square(x) { return x * x; } return square(square(3));", 81.0);
    assert_returns("function nothing() { let z = 1; } return nothing();", Value::Undefined);
    assert_returns("function early(x) { if (x) { return 'yes'; } return 'no'; } \
                    return early(0) + early(1);",
                   "noyes");
}

#[test]
fn call_errors() {
    let err = assert_runtime_error("function add(a, b) { return a + b; } add(1);");
    assert_eq!(err,
               RuntimeError::ArityMismatch { name:     "add".to_string(),
                                             expected: 2,
                                             found:    1, });

    let err = assert_runtime_error("missing(1);");
    assert_eq!(err, RuntimeError::UndefinedIdentifier { name: "missing".to_string() });

    let err = assert_runtime_error("let n = 3; n(1);");
    assert_eq!(err,
               RuntimeError::NotCallable { name: "n".to_string(),
                                           kind: "number", });

    assert_runtime_error("print(1, 2);");
}

#[test]
fn functions_cannot_be_returned() {
    let err = assert_runtime_error("function f() { return 1; } return f;");
    assert_eq!(err, RuntimeError::IllegalReturnValue { kind: "function" });

    let err = assert_runtime_error("return print;");
    assert_eq!(err, RuntimeError::IllegalReturnValue { kind: "builtin function" });
}

#[test]
fn let_inside_if_is_visible_afterwards() {
    assert_returns("if (true) { let a = 5; } return a;", 5.0);
    assert_returns("{ let b = 'x'; } return b;", "x");
}

#[test]
fn call_scope_sees_caller_bindings() {
    assert_returns("function show() { return secret; } \
                    function outer() { let secret = 42; return show(); } \
                    return outer();",
                   42.0);
    assert_runtime_error("function inner() { let local = 1; } inner(); return local;");
}

#[test]
fn assignment_rebinds_nearest_binding() {
    assert_returns("let x = 1; x = x + 1; return x;", 2.0);
    assert_returns("let x = 1; function set() { x = 10; } set(); return x;", 10.0);
    assert_returns("let x = 1; function shadow(x) { x = 10; return x; } return shadow(0) + x;",
                   11.0);

    let err = assert_runtime_error("y = 3;");
    assert_eq!(err, RuntimeError::UndefinedIdentifier { name: "y".to_string() });
}

#[test]
fn conditional_chains() {
    let src = |n: i32| {
        format!("let n = {n}; let out = ''; \
                 if (n < 0) {{ out = 'negative'; }} \
                 elif (n == 0) {{ out = 'zero'; }} \
                 elif (n < 10) {{ out = 'small'; }} \
                 else {{ out = 'large'; }} \
                 return out;")
    };

    assert_returns(&src(-3), "negative");
    assert_returns(&src(0), "zero");
    assert_returns(&src(7), "small");
    assert_returns(&src(12), "large");
}

#[test]
fn only_first_true_branch_runs() {
    assert_returns("let hits = 0; \
                    if (true) { hits = hits + 1; } elif (true) { hits = hits + 10; } \
                    else { hits = hits + 100; } \
                    return hits;",
                   1.0);
}

#[test]
fn consecutive_ifs_are_separate_chains() {
    assert_returns("let out = ''; \
                    if (true) { out = out + 'a'; } \
                    if (false) { out = out + 'b'; } else { out = out + 'c'; } \
                    return out;",
                   "ac");
}

#[test]
fn logical_and_comparisons() {
    assert_returns("return 2 < 3;", true);
    assert_returns("return 3 > 2;", true);
    assert_returns("return 2 <= 2;", true);
    assert_returns("return 3 >= 4;", false);
    assert_returns("return 2 != 3;", true);
    assert_returns("return 2 == 2;", true);
    assert_returns("return 0 || 'fallback';", "fallback");
    assert_returns("return 'first' || 'second';", "first");
    assert_returns("return 0 && 'never';", 0.0);
    assert_returns("return 1 && 'then';", "then");
    assert_returns("return true && false || true;", true);
}

#[test]
fn equality_is_loose_but_inequality_is_strict() {
    assert_returns("return 1 == '1';", true);
    assert_returns("return 1 != '1';", true);
    assert_returns("return true == 1;", true);
    assert_returns("return 'a' != 'a';", false);
}

#[test]
fn prefix_operators() {
    assert_returns("return -5 + 2;", -3.0);
    assert_returns("return -4 * 2;", -8.0);
    assert_returns("return +7;", 7.0);
    assert_returns("return !0;", true);
    assert_returns("return !3;", false);
}

#[test]
fn prefix_operators_need_a_number_literal() {
    assert!(matches!(assert_runtime_error("let a = 5; return -a;"),
                     RuntimeError::TypeMismatch { .. }));
    assert_runtime_error("return -(1 + 2);");
    assert_runtime_error("return --5;");
    assert_runtime_error("return -'text';");
    assert_runtime_error("return !true;");
}

#[test]
fn operator_type_errors() {
    assert_runtime_error("return 'a' - 1;");
    assert_runtime_error("return 'a' * 'b';");
    assert_runtime_error("return true < 1;");
    assert_runtime_error("function f() {} return f() + 1;");
    assert_runtime_error("function f() {} return 'x' + f();");
    assert_runtime_error("function f() { return 1; } return f || 1;");
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_returns("return 1 / 0;", f64::INFINITY);
    assert_returns("return 0 / 0;", f64::NAN);
    assert_returns("return '' + -1 / 0;", "-Infinity");
}

#[test]
fn program_without_return_yields_nothing() {
    assert!(matches!(eval("let a = 1;"), Ok(None)));
    assert!(matches!(eval(""), Ok(None)));
}

#[test]
fn top_level_return_stops_the_program() {
    assert_returns("return 1; missing();", 1.0);
}

#[test]
fn syntax_errors_prevent_evaluation() {
    let scope = Scope::with_builtins();
    assert!(matches!(run("let a = 1; let b = ;", &scope), Err(Error::Parse(_))));
    assert!(!scope.is_defined("a"));

    assert_failure("let a = 'open");
    assert_failure("let a = 1");
    assert_failure("a b;");
    assert_failure("else { }");
    assert_failure("function f(1) { }");
    assert_failure("if true { }");
}

#[test]
fn scope_is_shared_across_runs() {
    let scope = Scope::with_builtins();

    run("let count = 1; function next() { count = count + 1; return count; }", &scope).unwrap();
    run("next();", &scope).unwrap();

    assert_eq!(run("return next();", &scope).unwrap(), Some(Value::Number(3.0)));
}

#[test]
fn host_builtins_receive_evaluated_arguments() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let scope = Scope::with_builtins();
    scope.define_builtin(BuiltinFunction::new("record", 1, move |args| {
                             sink.borrow_mut().push(args[0].to_string());
                             Ok(Value::Undefined)
                         }));

    run("let x = 2; record(x * 3); record('x=' + x); record(x < 1);", &scope).unwrap();

    assert_eq!(*seen.borrow(), vec!["6", "x=2", "false"]);
}

#[test]
fn print_is_available() {
    assert_success("print('hello from sprout');");
    assert_returns("return print(1);", Value::Undefined);
}
