// Copyright 2014 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::ast::CodeSpan;
use crate::back::compiler::*;

pub enum Kind
{
  And,
  Not
}

impl Kind
{
  fn condition(&self, slot: &str) -> String {
    match self {
      Kind::And => format!("{}.is_some()", slot),
      Kind::Not => format!("{}.is_none()", slot)
    }
  }
}

fn empty_match(context: &mut Context) {
  let result = context.result().name.clone();
  context.line(format!("{} = Some(ParseResult::new(cursor.clone(), cursor.clone(), String::new()));", result));
}

/// Lookahead on an expression, the cursor is rewound whatever the outcome.
pub struct SyntacticPredicateCompiler<'e>
{
  expr: &'e Expression,
  kind: Kind
}

impl<'e> SyntacticPredicateCompiler<'e>
{
  pub fn new(expr: &'e Expression, kind: Kind) -> SyntacticPredicateCompiler<'e> {
    SyntacticPredicateCompiler {
      expr,
      kind
    }
  }
}

impl<'e> CompileExpr for SyntacticPredicateCompiler<'e>
{
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError> {
    let start = context.next_name("start_cursor");
    context.line(format!("let {} = cursor.clone();", start));
    let lookahead = context.compile_in_slot(self.expr)?;
    context.line(format!("*cursor = {}.clone();", start));
    context.block(&format!("if {}", self.kind.condition(&lookahead.name)), |context| {
      empty_match(context);
      Ok(())
    })
  }
}

/// Lookahead on a host predicate, it sees the parse state as `state`.
pub struct CodePredicateCompiler<'e>
{
  span: &'e CodeSpan,
  kind: Kind
}

impl<'e> CodePredicateCompiler<'e>
{
  pub fn new(span: &'e CodeSpan, kind: Kind) -> CodePredicateCompiler<'e> {
    CodePredicateCompiler {
      span,
      kind
    }
  }
}

impl<'e> CompileExpr for CodePredicateCompiler<'e>
{
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError> {
    let negation = match self.kind {
      Kind::And => "",
      Kind::Not => "!"
    };
    context.line(format!("if {}(|state: &Cursor| -> bool {{", negation));
    context.code_span(self.span);
    context.line("})(&*cursor) {");
    context.indent();
    empty_match(context);
    context.unindent();
    context.line("}");
    Ok(())
  }
}
