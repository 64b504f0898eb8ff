use minitac::CompileError;
use minitac::analyzer::{SymbolTable, analyze};
use minitac::error::CompileResult;
use minitac::parser::parse;
use minitac::tokenizer::tokenize;

fn analyze_source(source: &str) -> CompileResult<SymbolTable> {
  let program = parse(tokenize(source).expect("lex should succeed")).expect("parse should succeed");
  analyze(&program)
}

#[test]
fn records_declarations_in_source_order() {
  let table = analyze_source("int b;\nint a;\nint m;").expect("analysis should succeed");

  let names: Vec<&str> = table
    .in_declaration_order()
    .map(|symbol| symbol.name.as_str())
    .collect();
  assert_eq!(names, ["b", "a", "m"]);
  assert!(table.in_declaration_order().all(|symbol| symbol.ty == "int"));
  assert_eq!(table.len(), 3);
}

#[test]
fn lookup_answers_for_declared_and_unknown_names() {
  let table = analyze_source("int a;").expect("analysis should succeed");
  assert!(table.contains("a"));
  assert_eq!(table.get("a").map(|symbol| symbol.ty.as_str()), Some("int"));
  assert!(!table.contains("z"));
  assert!(table.get("z").is_none());
}

#[test]
fn an_empty_program_yields_an_empty_table() {
  let table = analyze_source("").expect("analysis should succeed");
  assert!(table.is_empty());
}

#[test]
fn duplicate_declaration_fails_regardless_of_intervening_statements() {
  let err =
    analyze_source("int a;\na = 1;\nprint a;\nint a;").expect_err("analysis should fail");
  match err {
    CompileError::DuplicateDeclaration { name, line, column } => {
      assert_eq!(name, "a");
      assert_eq!((line, column), (4, 5));
    }
    other => panic!("expected a duplicate declaration error, got {other:?}"),
  }
}

#[test]
fn assignment_to_an_undeclared_name_fails() {
  let err = analyze_source("int a;\nb = 1;").expect_err("analysis should fail");
  match err {
    CompileError::UndeclaredVariable { name, line, column } => {
      assert_eq!(name, "b");
      assert_eq!((line, column), (2, 1));
    }
    other => panic!("expected an undeclared variable error, got {other:?}"),
  }
}

#[test]
fn undeclared_read_in_an_assignment_rhs_fails() {
  let err = analyze_source("int a;\na = b + 1;").expect_err("analysis should fail");
  match err {
    CompileError::UndeclaredVariable { name, line, column } => {
      assert_eq!(name, "b");
      assert_eq!((line, column), (2, 5));
    }
    other => panic!("expected an undeclared variable error, got {other:?}"),
  }
}

#[test]
fn undeclared_read_in_a_print_expression_fails() {
  let err = analyze_source("print x;").expect_err("analysis should fail");
  assert!(matches!(
    err,
    CompileError::UndeclaredVariable { ref name, .. } if name == "x"
  ));
}

#[test]
fn undeclared_read_deep_inside_an_expression_fails() {
  let err = analyze_source("int a;\na = 1 + (2 * -missing);").expect_err("analysis should fail");
  assert!(matches!(
    err,
    CompileError::UndeclaredVariable { ref name, .. } if name == "missing"
  ));
}

#[test]
fn use_before_declaration_fails_even_if_declared_later() {
  let err = analyze_source("a = 1;\nint a;").expect_err("analysis should fail");
  assert!(matches!(
    err,
    CompileError::UndeclaredVariable { ref name, line, .. } if name == "a" && line == 1
  ));
}

#[test]
fn a_declaration_is_visible_to_every_later_statement() {
  let result = analyze_source("int a;\na = 1;\nint b;\nb = a;\nprint a + b;");
  assert!(result.is_ok());
}
