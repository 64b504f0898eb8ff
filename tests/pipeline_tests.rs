use minitac::{CompileError, compile};
use minitac::tokenizer::TokenKind;

#[test]
fn the_reference_program_produces_the_expected_artifacts() {
  let source = "int a;\nint b;\na = 3 + 4 * 2;\nprint a - b;\n";
  let result = compile(source).expect("compile should succeed");

  let rows: Vec<(&str, &str)> = result
    .symbols
    .in_declaration_order()
    .map(|symbol| (symbol.name.as_str(), symbol.ty.as_str()))
    .collect();
  assert_eq!(rows, [("a", "int"), ("b", "int")]);

  let code: Vec<String> = result
    .code
    .iter()
    .map(|instruction| instruction.to_string())
    .collect();
  assert_eq!(
    code,
    ["t1 = 4 * 2", "t2 = 3 + t1", "a = t2", "t3 = a - b", "print t3"]
  );

  assert_eq!(result.tokens.len(), 20);
  assert_eq!(
    result.tokens.last().map(|token| token.kind),
    Some(TokenKind::EndOfInput)
  );
}

#[test]
fn a_lexical_failure_renders_with_its_position() {
  let err = compile("int a @").expect_err("compile should fail");
  assert_eq!(
    err.to_string(),
    "Lexical error at 1:7 -> Unexpected character '@'"
  );
}

#[test]
fn a_syntax_failure_renders_the_expected_construct() {
  let err = compile("print (1 + 2;").expect_err("compile should fail");
  assert_eq!(
    err.to_string(),
    "Syntax error at 1:13 near ';': Expected ')' to close '('."
  );
}

#[test]
fn a_duplicate_declaration_renders_with_its_position() {
  let err = compile("int a;\nint a;").expect_err("compile should fail");
  assert_eq!(
    err.to_string(),
    "Semantic error at 2:5 near 'a': Duplicate declaration of 'a'."
  );
}

#[test]
fn an_undeclared_reference_renders_with_its_position() {
  let err = compile("print x;").expect_err("compile should fail");
  assert_eq!(
    err.to_string(),
    "Semantic error at 1:7 near 'x': Variable 'x' used before declaration."
  );
}

#[test]
fn a_later_phase_failure_surfaces_that_phase_error() {
  // Lexically and syntactically fine; only the analyzer can object.
  let err = compile("print x;").expect_err("compile should fail");
  assert!(matches!(err, CompileError::UndeclaredVariable { .. }));
}

#[test]
fn comment_only_input_compiles_to_empty_artifacts() {
  let result = compile("// just a comment\n").expect("compile should succeed");
  assert_eq!(result.tokens.len(), 1);
  assert!(result.symbols.is_empty());
  assert!(result.code.is_empty());
}
