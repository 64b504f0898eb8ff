//! Intermediate-code generation: lower the validated program into
//! three-address code.
//!
//! The emitter walks statements in order and expressions depth-first,
//! appending instructions as it recurses; every expression evaluates to an
//! operand string (a literal, a variable name, or a freshly minted
//! temporary). TAC is the final artifact of the pipeline.

use std::fmt;

use crate::parser::{Expr, Program, Stmt};
use crate::tokenizer::TokenKind;

/// One three-address instruction. Operands are plain strings: literal text
/// flows through verbatim and is never parsed to a numeric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacInstruction {
  Binary {
    dest: String,
    lhs: String,
    op: String,
    rhs: String,
  },
  Copy {
    dest: String,
    src: String,
  },
  Print {
    operand: String,
  },
}

impl fmt::Display for TacInstruction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TacInstruction::Binary { dest, lhs, op, rhs } => write!(f, "{dest} = {lhs} {op} {rhs}"),
      TacInstruction::Copy { dest, src } => write!(f, "{dest} = {src}"),
      TacInstruction::Print { operand } => write!(f, "print {operand}"),
    }
  }
}

/// Emission state for a single `generate` run.
struct Emitter {
  code: Vec<TacInstruction>,
  temp_count: u32,
}

impl Emitter {
  fn new() -> Self {
    Self {
      code: Vec::new(),
      temp_count: 0,
    }
  }

  /// Mint the next temporary name; the first one in a run is `t1`.
  fn new_temp(&mut self) -> String {
    self.temp_count += 1;
    format!("t{}", self.temp_count)
  }

  fn emit_stmt(&mut self, stmt: &Stmt) {
    match stmt {
      // Declarations reserve a name; they produce no code.
      Stmt::Decl { .. } => {}
      Stmt::Assign { name, value } => {
        let src = self.emit_expr(value);
        self.code.push(TacInstruction::Copy {
          dest: name.text.clone(),
          src,
        });
      }
      Stmt::Print { value, .. } => {
        let operand = self.emit_expr(value);
        self.code.push(TacInstruction::Print { operand });
      }
    }
  }

  /// Evaluate an expression to an operand, appending instructions as a side
  /// effect. The left operand is fully evaluated before the right one.
  fn emit_expr(&mut self, expr: &Expr) -> String {
    match expr {
      Expr::Number { token } => token.text.clone(),
      Expr::Var { token } => token.text.clone(),
      Expr::Unary { op, operand } => {
        let rhs = self.emit_expr(operand);
        if op.kind == TokenKind::Minus {
          // Unary minus is always materialised as a subtraction from zero,
          // even when the operand is a bare literal.
          let dest = self.new_temp();
          self.code.push(TacInstruction::Binary {
            dest: dest.clone(),
            lhs: "0".to_string(),
            op: "-".to_string(),
            rhs,
          });
          dest
        } else {
          // Unary plus passes its operand through and spends no temporary.
          rhs
        }
      }
      Expr::Binary { lhs, op, rhs } => {
        let lhs = self.emit_expr(lhs);
        let rhs = self.emit_expr(rhs);
        let dest = self.new_temp();
        self.code.push(TacInstruction::Binary {
          dest: dest.clone(),
          lhs,
          op: op.text.clone(),
          rhs,
        });
        dest
      }
    }
  }
}

/// Lower a semantically valid program into an ordered instruction list.
///
/// Each call starts from a fresh temporary counter, so numbering is stable
/// across runs. Generation consults no symbol table: a name that was never
/// declared would flow into the output verbatim, which is why this phase
/// assumes the analyzer already accepted the program.
pub fn generate(program: &Program) -> Vec<TacInstruction> {
  let mut emitter = Emitter::new();
  for stmt in &program.stmts {
    emitter.emit_stmt(stmt);
  }
  emitter.code
}
