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
use crate::back::emitter::Emitter;
use crate::back::name_factory::NameFactory;
use crate::back::rtype::*;
use crate::error::CompileError;

/// Variable holding the result of the expression being compiled, `None` until it matches.
#[derive(Clone, Debug)]
pub struct ResultSlot
{
  pub name: String,
  pub ty: ResolvedType
}

/// State of the compilation of a single rule.
pub struct Context<'a>
{
  grammar: &'a Grammar,
  emitter: &'a mut Emitter,
  name_factory: NameFactory,
  result: ResultSlot
}

impl<'a> Context<'a>
{
  /// The rule result is stored in the first `r` variable.
  pub fn new(grammar: &'a Grammar, emitter: &'a mut Emitter, ty: ResolvedType) -> Context<'a> {
    let mut name_factory = NameFactory::new();
    let result = ResultSlot {
      name: name_factory.next_name("r"),
      ty
    };
    Context {
      grammar,
      emitter,
      name_factory,
      result
    }
  }

  pub fn grammar(&self) -> &'a Grammar {
    self.grammar
  }

  pub fn result(&self) -> &ResultSlot {
    &self.result
  }

  pub fn resolve(&self, expr: &Expression) -> Result<ResolvedType, CompileError> {
    TypeResolver::new(self.grammar).resolve(expr)
  }

  pub fn next_name(&mut self, prefix: &str) -> String {
    self.name_factory.next_name(prefix)
  }

  /// Declares a fresh result variable for `expr`, it is not yet the current one.
  pub fn declare_result(&mut self, expr: &Expression) -> Result<ResultSlot, CompileError> {
    let slot = ResultSlot {
      name: self.next_name("r"),
      ty: self.resolve(expr)?
    };
    self.declare(&slot);
    Ok(slot)
  }

  /// `let mut r: Option<ParseResult<T>> = None;`
  pub fn declare(&mut self, slot: &ResultSlot) {
    let prefix = format!("let mut {}: Option<ParseResult<", slot.name);
    match slot.ty.code_span() {
      Some(span) => {
        let span = span.clone();
        self.line(prefix);
        self.emitter.code_span(&span);
        self.line(">> = None;");
      }
      None => self.line(format!("{}{}>> = None;", prefix, slot.ty))
    }
  }

  /// Compiles `expr` into a fresh result variable and returns it.
  pub fn compile_in_slot(&mut self, expr: &Expression) -> Result<ResultSlot, CompileError> {
    let slot = self.declare_result(expr)?;
    let enclosing = std::mem::replace(&mut self.result, slot);
    let compiled = crate::back::compiler::compile_expr(self, expr);
    let slot = std::mem::replace(&mut self.result, enclosing);
    compiled.map(|_| slot)
  }

  pub fn line<S: AsRef<str>>(&mut self, line: S) {
    self.emitter.line(line);
  }

  pub fn code_span(&mut self, span: &CodeSpan) {
    self.emitter.code_span(span);
  }

  pub fn indent(&mut self) {
    self.emitter.indent();
  }

  pub fn unindent(&mut self) {
    self.emitter.unindent();
  }

  /// `header {`, the body, then `}`.
  pub fn block<F>(&mut self, header: &str, body: F) -> Result<(), CompileError> where
    F: FnOnce(&mut Context<'a>) -> Result<(), CompileError>
  {
    self.line(format!("{} {{", header));
    self.indent();
    let compiled = body(self);
    self.unindent();
    self.line("}");
    compiled
  }
}
