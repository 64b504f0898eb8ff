//! Recursive-descent parser producing a statement list and expression AST.
//!
//! The parser performs no semantic validation: it owns all syntactic
//! knowledge and nothing else. One token of lookahead decides every
//! production, and the two binary precedence levels fold into a growing
//! left operand so chains associate to the left.

use crate::error::{CompileError, CompileResult};
use crate::tokenizer::{Token, TokenKind};

/// Expression tree produced by the parser. Each node keeps the token(s) it
/// was built from so later phases can report positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  Number {
    token: Token,
  },
  Var {
    token: Token,
  },
  Unary {
    op: Token,
    operand: Box<Expr>,
  },
  Binary {
    lhs: Box<Expr>,
    op: Token,
    rhs: Box<Expr>,
  },
}

impl Expr {
  pub fn number(token: Token) -> Self {
    Self::Number { token }
  }

  pub fn var(token: Token) -> Self {
    Self::Var { token }
  }

  pub fn unary(op: Token, operand: Expr) -> Self {
    Self::Unary {
      op,
      operand: Box::new(operand),
    }
  }

  pub fn binary(lhs: Expr, op: Token, rhs: Expr) -> Self {
    Self::Binary {
      lhs: Box::new(lhs),
      op,
      rhs: Box::new(rhs),
    }
  }
}

/// Statement variants; declarations and executable statements interleave
/// freely in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
  Decl {
    name: Token,
  },
  Assign {
    name: Token,
    value: Expr,
  },
  Print {
    keyword: Token,
    value: Expr,
  },
}

/// The whole program: an ordered sequence of statements owning the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
  pub stmts: Vec<Stmt>,
}

/// Parse a token stream into a program.
///
/// The stream must be the output of `tokenize`, i.e. terminated by an
/// `EndOfInput` marker. The first expectation that fails aborts the parse.
pub fn parse(tokens: Vec<Token>) -> CompileResult<Program> {
  let mut stream = TokenStream::new(tokens);
  let mut stmts = Vec::new();

  while !stream.at(TokenKind::EndOfInput) {
    let stmt = match stream.peek_kind() {
      Some(TokenKind::KwInt) => parse_decl(&mut stream)?,
      Some(TokenKind::Identifier) => parse_assign(&mut stream)?,
      Some(TokenKind::KwPrint) => parse_print(&mut stream)?,
      _ => {
        return Err(
          stream.error_here("Expected 'int' declaration or a statement (assignment/print)."),
        );
      }
    };
    stmts.push(stmt);
  }

  Ok(Program { stmts })
}

// Decl -> "int" IDENT ";"
fn parse_decl(stream: &mut TokenStream) -> CompileResult<Stmt> {
  stream.expect(TokenKind::KwInt, "Expected 'int'.")?;
  let name = stream.expect(TokenKind::Identifier, "Expected identifier after 'int'.")?;
  stream.expect(TokenKind::Semicolon, "Expected ';' after declaration.")?;
  Ok(Stmt::Decl { name })
}

// Assign -> IDENT "=" Expr ";"
fn parse_assign(stream: &mut TokenStream) -> CompileResult<Stmt> {
  let name = stream.expect(TokenKind::Identifier, "Expected identifier.")?;
  stream.expect(TokenKind::Assign, "Expected '=' in assignment.")?;
  let value = parse_expr(stream)?;
  stream.expect(TokenKind::Semicolon, "Expected ';' after assignment.")?;
  Ok(Stmt::Assign { name, value })
}

// Print -> "print" Expr ";"
fn parse_print(stream: &mut TokenStream) -> CompileResult<Stmt> {
  let keyword = stream.expect(TokenKind::KwPrint, "Expected 'print'.")?;
  let value = parse_expr(stream)?;
  stream.expect(TokenKind::Semicolon, "Expected ';' after print.")?;
  Ok(Stmt::Print { keyword, value })
}

// Expr -> Term {(+|-) Term}
fn parse_expr(stream: &mut TokenStream) -> CompileResult<Expr> {
  let mut node = parse_term(stream)?;

  while let Some(op) = stream.eat_any(&[TokenKind::Plus, TokenKind::Minus]) {
    let rhs = parse_term(stream)?;
    node = Expr::binary(node, op, rhs);
  }

  Ok(node)
}

// Term -> Unary {(*|/) Unary}
fn parse_term(stream: &mut TokenStream) -> CompileResult<Expr> {
  let mut node = parse_unary(stream)?;

  while let Some(op) = stream.eat_any(&[TokenKind::Star, TokenKind::Slash]) {
    let rhs = parse_unary(stream)?;
    node = Expr::binary(node, op, rhs);
  }

  Ok(node)
}

// Unary -> (+|-) Unary | Primary
fn parse_unary(stream: &mut TokenStream) -> CompileResult<Expr> {
  if let Some(op) = stream.eat_any(&[TokenKind::Plus, TokenKind::Minus]) {
    let operand = parse_unary(stream)?;
    return Ok(Expr::unary(op, operand));
  }

  parse_primary(stream)
}

// Primary -> NUMBER | IDENT | "(" Expr ")"
fn parse_primary(stream: &mut TokenStream) -> CompileResult<Expr> {
  if let Some(token) = stream.eat(TokenKind::Number) {
    return Ok(Expr::number(token));
  }

  if let Some(token) = stream.eat(TokenKind::Identifier) {
    return Ok(Expr::var(token));
  }

  if stream.eat(TokenKind::LParen).is_some() {
    let node = parse_expr(stream)?;
    stream.expect(TokenKind::RParen, "Expected ')' to close '('.")?;
    return Ok(node);
  }

  Err(stream.error_here("Expected NUMBER, IDENTIFIER, or '(' expression ')'."))
}

/// Lightweight cursor over the token vector.
struct TokenStream {
  tokens: Vec<Token>,
  pos: usize,
}

impl TokenStream {
  fn new(tokens: Vec<Token>) -> Self {
    Self { tokens, pos: 0 }
  }

  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  fn peek_kind(&self) -> Option<TokenKind> {
    self.peek().map(|token| token.kind)
  }

  fn at(&self, kind: TokenKind) -> bool {
    self.peek_kind() == Some(kind)
  }

  /// Consume and return the current token if it has the given kind.
  fn eat(&mut self, kind: TokenKind) -> Option<Token> {
    let token = self.peek()?;
    if token.kind != kind {
      return None;
    }
    let token = token.clone();
    self.pos += 1;
    Some(token)
  }

  /// `eat` against a set of kinds; used by the binary operator loops.
  fn eat_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
    kinds.iter().find_map(|&kind| self.eat(kind))
  }

  fn expect(&mut self, kind: TokenKind, message: &str) -> CompileResult<Token> {
    match self.eat(kind) {
      Some(token) => Ok(token),
      None => Err(self.error_here(message)),
    }
  }

  /// Build a syntax error anchored at the current token.
  fn error_here(&self, message: &str) -> CompileError {
    match self.peek() {
      Some(token) => CompileError::Syntax {
        message: message.to_string(),
        found: token.text.clone(),
        line: token.line,
        column: token.column,
      },
      // A stream missing its terminal marker; report at the last position
      // we know about.
      None => {
        let (line, column) = self
          .tokens
          .last()
          .map(|token| (token.line, token.column))
          .unwrap_or((1, 1));
        CompileError::Syntax {
          message: message.to_string(),
          found: "EOF".to_string(),
          line,
          column,
        }
      }
    }
  }
}
