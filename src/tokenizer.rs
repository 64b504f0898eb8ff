//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! The tokenizer is intentionally tiny – it knows nothing about semantics
//! beyond recognising keywords, identifiers, numeric literals and the
//! single-character operators. It makes one forward pass and never backs up.

use crate::error::{CompileError, CompileResult};

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  KwInt,
  KwPrint,
  Identifier,
  Number,
  Plus,
  Minus,
  Star,
  Slash,
  Assign,
  Semicolon,
  LParen,
  RParen,
  EndOfInput,
}

impl TokenKind {
  /// Category name used by the token report.
  pub fn category(self) -> &'static str {
    match self {
      TokenKind::KwInt | TokenKind::KwPrint => "KEYWORD",
      TokenKind::Identifier => "IDENTIFIER",
      TokenKind::Number => "NUMBER",
      TokenKind::Plus
      | TokenKind::Minus
      | TokenKind::Star
      | TokenKind::Slash
      | TokenKind::Assign => "OPERATOR",
      TokenKind::Semicolon | TokenKind::LParen | TokenKind::RParen => "SYMBOL",
      TokenKind::EndOfInput => "EOF",
    }
  }
}

/// A classified lexeme plus the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub text: String,
  pub line: usize,
  pub column: usize,
}

impl Token {
  /// Convenience constructor to keep the `tokenize` loop readable.
  pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
    Self {
      kind,
      text: text.into(),
      line,
      column,
    }
  }
}

/// Character cursor that keeps the running line/column counters honest.
struct Cursor {
  chars: Vec<char>,
  pos: usize,
  line: usize,
  column: usize,
}

impl Cursor {
  fn new(input: &str) -> Self {
    Self {
      chars: input.chars().collect(),
      pos: 0,
      line: 1,
      column: 1,
    }
  }

  fn peek(&self) -> Option<char> {
    self.chars.get(self.pos).copied()
  }

  fn peek_next(&self) -> Option<char> {
    self.chars.get(self.pos + 1).copied()
  }

  /// Consume one character, advancing the position counters.
  fn bump(&mut self) -> Option<char> {
    let c = self.peek()?;
    self.pos += 1;
    if c == '\n' {
      self.line += 1;
      self.column = 1;
    } else {
      self.column += 1;
    }
    Some(c)
  }

  /// Skip whitespace and `//`-to-end-of-line comments in any interleaving.
  fn skip_trivia(&mut self) {
    loop {
      while self.peek().is_some_and(|c| c.is_whitespace()) {
        self.bump();
      }

      if self.peek() == Some('/') && self.peek_next() == Some('/') {
        while self.peek().is_some_and(|c| c != '\n') {
          self.bump();
        }
        continue;
      }

      break;
    }
  }

  /// Consume a maximal run of characters matching `keep`, starting with the
  /// current one.
  fn take_while(&mut self, keep: fn(char) -> bool) -> String {
    let mut text = String::new();
    while let Some(c) = self.peek()
      && keep(c)
    {
      text.push(c);
      self.bump();
    }
    text
  }
}

fn is_word_start(c: char) -> bool {
  c.is_ascii_alphabetic() || c == '_'
}

fn is_word_continue(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}

/// Lex the input into a flat vector of tokens terminated by exactly one
/// `EndOfInput` marker.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
  let mut cursor = Cursor::new(input);
  let mut tokens = Vec::new();

  loop {
    cursor.skip_trivia();
    let line = cursor.line;
    let column = cursor.column;

    let Some(c) = cursor.peek() else {
      tokens.push(Token::new(TokenKind::EndOfInput, "EOF", line, column));
      break;
    };

    if is_word_start(c) {
      let text = cursor.take_while(is_word_continue);
      let kind = match text.as_str() {
        "int" => TokenKind::KwInt,
        "print" => TokenKind::KwPrint,
        _ => TokenKind::Identifier,
      };
      tokens.push(Token::new(kind, text, line, column));
      continue;
    }

    if c.is_ascii_digit() {
      // Literal text is kept verbatim; nothing downstream parses it.
      let text = cursor.take_while(|c| c.is_ascii_digit());
      tokens.push(Token::new(TokenKind::Number, text, line, column));
      continue;
    }

    let kind = match c {
      '+' => TokenKind::Plus,
      '-' => TokenKind::Minus,
      '*' => TokenKind::Star,
      '/' => TokenKind::Slash,
      '=' => TokenKind::Assign,
      ';' => TokenKind::Semicolon,
      '(' => TokenKind::LParen,
      ')' => TokenKind::RParen,
      _ => {
        return Err(CompileError::Lexical {
          character: c,
          line,
          column,
        });
      }
    };
    cursor.bump();
    tokens.push(Token::new(kind, c.to_string(), line, column));
  }

  Ok(tokens)
}
