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

use crate::ast::*;
use crate::back::compiler::*;
use crate::back::emitter::Emitter;
use crate::back::rtype::TypeResolver;
use crate::back::str_literal::to_literal;
use crate::identifier::escape_name;

/// Writes the method parsing `rule`. It returns `Ok(None)` when the rule does not match and leaves the cursor untouched in that case.
pub fn compile_rule(grammar: &Grammar, rule: &Rule, emitter: &mut Emitter) -> Result<(), CompileError> {
  log::debug!("Compiling rule `{}`.", rule.name());
  let ty = TypeResolver::new(grammar).resolve(&rule.expr)?;
  let memoize = rule.has_flag(MEMOIZE_FLAG);
  let visibility = if rule.has_flag(PUBLIC_FLAG) { "pub " } else { "" };
  let signature = format!("{}fn {}(&mut self, cursor: &mut Cursor) -> Result<Option<ParseResult<",
    visibility, escape_name(rule.name()));
  emitter.blank_line();
  match &rule.expr {
    Expression::Typed(Fragment::Code(span), _) => {
      emitter.line(signature);
      emitter.code_span(span);
      emitter.line(">>, FormatError> {");
    }
    _ => emitter.line(format!("{}{}>>, FormatError> {{", signature, ty))
  }
  emitter.indent();
  let mut context = Context::new(grammar, emitter, ty);
  let result = context.result().clone();
  context.line(format!("let mut {}: Option<ParseResult<{}>> = None;", result.name, result.ty));
  if memoize {
    compile_lookup(&mut context, rule, &result.name);
  }
  compile_expr(&mut context, &rule.expr)?;
  if memoize {
    context.line(format!("self.storage_store(storage_key, {}.clone());", result.name));
  }
  context.line(format!("Ok({})", result.name));
  emitter.unindent();
  emitter.line("}");
  Ok(())
}

fn compile_lookup(context: &mut Context, rule: &Rule, result: &str) {
  context.line(format!("let storage_key = MemoKey::new({}, cursor.state_key(), cursor.location());",
    to_literal(rule.name())));
  context.line("if let Some(cached) = self.storage_lookup(&storage_key) {");
  context.indent();
  context.line(format!("{} = cached;", result));
  context.line(format!("if let Some(cached) = &{} {{", result));
  context.indent();
  context.line("*cursor = cached.end_cursor.clone();");
  context.unindent();
  context.line("}");
  context.line(format!("return Ok({});", result));
  context.unindent();
  context.line("}");
}
