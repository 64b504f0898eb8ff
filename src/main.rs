use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use minitac::CompileResult;
use minitac::analyzer::{self, SymbolTable};
use minitac::parser;
use minitac::tacgen::{self, TacInstruction};
use minitac::tokenizer::{self, Token, TokenKind};

fn main() {
  let args: Vec<String> = env::args().collect();
  if args.len() > 2 {
    let program = args.first().map(String::as_str).unwrap_or("minitac");
    eprintln!("usage: {program} [source-file]");
    process::exit(1);
  }

  let source = match args.get(1) {
    Some(path) => match fs::read_to_string(path) {
      Ok(source) => source,
      Err(err) => {
        eprintln!("cannot read {path}: {err}");
        process::exit(1);
      }
    },
    None => {
      let mut source = String::new();
      if let Err(err) = io::stdin().read_to_string(&mut source) {
        eprintln!("cannot read stdin: {err}");
        process::exit(1);
      }
      source
    }
  };

  if let Err(err) = run(&source) {
    eprintln!("{err}");
    process::exit(1);
  }
}

/// Drive the phases in order, printing each report as soon as its phase
/// completes. A failure leaves already-printed reports in place and stops
/// before the failed phase's report.
fn run(source: &str) -> CompileResult<()> {
  let tokens = tokenizer::tokenize(source)?;
  print_tokens(&tokens);

  let program = parser::parse(tokens)?;

  let symbols = analyzer::analyze(&program)?;
  print_symbol_table(&symbols);

  let code = tacgen::generate(&program);
  print_tac(&code);

  Ok(())
}

fn print_tokens(tokens: &[Token]) {
  println!("TOKENS:");
  for token in tokens {
    // The terminal marker is never part of the report.
    if token.kind == TokenKind::EndOfInput {
      break;
    }
    println!("{:<10} {}", token.text, token.kind.category());
  }
  println!();
}

fn print_symbol_table(symbols: &SymbolTable) {
  println!("SYMBOL TABLE:");
  println!("{:<10}Type", "Name");
  for symbol in symbols.in_declaration_order() {
    println!("{:<10}{}", symbol.name, symbol.ty);
  }
  println!();
}

fn print_tac(code: &[TacInstruction]) {
  println!("INTERMEDIATE CODE (TAC):");
  for instruction in code {
    println!("{instruction}");
  }
  println!();
}
