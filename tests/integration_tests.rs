//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenization and parsing together and
//! check the resulting tree, its printed form, and the rendered diagnostics.

use std::rc::Rc;

use frontend::{
    ast::ast::{Expr, ExprType, Program},
    errors::errors::Error,
    format_error,
    lexer::{lexer::tokenize, stream::Tokens},
    parser::parser::{parse, parse_stream},
};

const PROGRAM: &str = r#"
// Declarations
ext print(int);
def add(int a, int b) { a + b };

x = add(1, 2) * 3;
y = if x > 3 "big\n" else 'c';
apply = cls(f, v) { f(v) };
a = b = c;
print(x)(y)
"#;

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("main.src".to_string()))?;
    parse(tokens, Rc::new("main.src".to_string()))
}

#[test]
fn test_parse_program() {
    let program = parse_source(PROGRAM).unwrap();

    let types: Vec<ExprType> = program.body.iter().map(Expr::get_expr_type).collect();
    assert_eq!(
        types,
        vec![
            ExprType::Function,
            ExprType::Function,
            ExprType::Assignment,
            ExprType::Assignment,
            ExprType::Assignment,
            ExprType::Assignment,
            ExprType::Call,
        ]
    );

    match &program.body[0] {
        Expr::Function(function) => assert!(function.is_external()),
        other => panic!("expected an external declaration, got {:?}", other),
    }
    match &program.body[1] {
        Expr::Function(function) => {
            assert!(!function.is_external());
            assert_eq!(function.params.len(), 2);
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_printed_tree() {
    let program = parse_source(PROGRAM).unwrap();

    assert_eq!(
        program.to_string(),
        [
            "ext print(int)",
            "def add(int a, int b) { (a + b) }",
            "(x = (add(1, 2) * 3))",
            "(y = (if (x > 3) \"big\\n\" else 'c'))",
            "(apply = cls(f, v) { f(v) })",
            "((a = b) = c)",
            "print(x)(y)",
        ]
        .join(";\n")
    );
}

#[test]
fn test_printed_tree_parses_back() {
    let program = parse_source(PROGRAM).unwrap();
    let reparsed = parse_source(&program.to_string()).unwrap();

    assert_eq!(program, reparsed);
}

#[test]
fn test_parse_is_repeatable() {
    let tokens = tokenize(PROGRAM.to_string(), None).unwrap();

    let mut first = Tokens::from(tokens.clone());
    let mut second = Tokens::from(tokens);

    assert_eq!(
        parse_stream(&mut first).unwrap(),
        parse_stream(&mut second).unwrap()
    );
}

#[test]
fn test_empty_blocks_disappear() {
    let program = parse_source("{}; cls(x) {}; { {}; 1 }; def f() {}").unwrap();

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "{ 1 };\next f()");
}

#[test]
fn test_syntax_error_rendering() {
    let source = "x = 1;\ny = );";
    let error = parse_source(source).unwrap_err();

    let rendered = format_error(&error, source, "main.src");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: UnexpectedToken (Unexpected token: `)`, did you miss a semicolon?)"
    );
    assert_eq!(lines[1], "-> main.src");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | y = );");
    assert_eq!(lines[4], "  | ----^");
}

#[test]
fn test_lexer_error_rendering() {
    let source = "a = 1;\n  b = #;";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");

    let rendered = format_error(&error, source, "main.src");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Error: UnrecognisedToken");
    assert_eq!(lines[3], "2 | b = #;");
    assert_eq!(lines[4], "  | ----^");
}

#[test]
fn test_error_at_end_of_input() {
    let source = "f(1,\n2";
    let error = parse_source(source).unwrap_err();

    assert_eq!(
        error.to_string(),
        "SyntaxError: token ')' expected, found \"EOF\""
    );

    let rendered = format_error(&error, source, "main.src");
    assert!(rendered.contains("2 | 2"));
}
