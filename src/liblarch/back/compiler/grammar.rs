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
use crate::back::compiler::helpers::helper_methods;
use crate::back::compiler::rule::compile_rule;
use crate::back::emitter::Emitter;
use crate::back::rtype::TypeResolver;
use crate::back::str_literal::to_literal;
use crate::compile_result::SourceMap;
use crate::error::CompileError;
use crate::identifier::escape_name;
use crate::settings::Settings;

static LINTS: &str = "#[allow(dead_code, non_snake_case, unreachable_code, unused_assignments, unused_comparisons, unused_imports, unused_mut, unused_parens, unused_variables, clippy::all)]";

pub struct GeneratedCode
{
  pub code: String,
  pub source_map: SourceMap
}

/// Writes the module holding the parser of a grammar.
pub struct GrammarCompiler<'a>
{
  grammar: &'a Grammar,
  settings: Settings,
  memoize: bool,
  emitter: Emitter
}

impl<'a> GrammarCompiler<'a>
{
  pub fn compile(grammar: &'a Grammar) -> Result<GeneratedCode, CompileError> {
    let mut compiler = GrammarCompiler {
      grammar,
      settings: Settings::from_grammar(grammar),
      memoize: grammar.uses_memoization(),
      emitter: Emitter::new()
    };
    compiler.compile_header();
    compiler.compile_module()?;
    let (code, source_map) = compiler.emitter.finish();
    Ok(GeneratedCode {
      code,
      source_map
    })
  }

  fn compile_header(&mut self) {
    self.emitter.line("// -----------------------------------------------------------------------");
    self.emitter.line(format!("// <auto-generated> This code was generated by {} {}.",
      env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
    self.emitter.line("// Changes to this file will be lost when the code is regenerated.");
    self.emitter.line("// -----------------------------------------------------------------------");
    self.emitter.blank_line();
  }

  fn compile_module(&mut self) -> Result<(), CompileError> {
    let start = self.grammar.start_rule().ok_or(CompileError::EmptyGrammar)?;
    self.emitter.line(LINTS);
    let namespace = self.settings.namespace.clone();
    self.emitter.fragment_line("pub mod ", &namespace, " {", escape_name);
    self.emitter.indent();
    self.compile_uses();
    self.emitter.blank_line();
    self.compile_struct();
    self.emitter.blank_line();
    let classname = self.settings.classname.clone();
    self.emitter.fragment_line("impl ", &classname, " {", escape_name);
    self.emitter.indent();
    self.compile_members();
    self.compile_constructor();
    self.compile_entry_point(start)?;
    for rule in &self.grammar.rules {
      compile_rule(self.grammar, rule, &mut self.emitter)?;
    }
    self.emitter.blank_line();
    self.emitter.lines(&helper_methods(self.memoize));
    self.emitter.unindent();
    self.emitter.line("}");
    self.emitter.unindent();
    self.emitter.line("}");
    Ok(())
  }

  fn compile_uses(&mut self) {
    self.emitter.line("use std::collections::HashMap;");
    self.emitter.line("use larch_runtime::{Cursor, FormatError, MemoKey, MutableCursor, ParseResult};");
    for using in &self.settings.usings {
      self.emitter.fragment_line("use ", using, ";", str::to_string);
    }
  }

  fn compile_struct(&mut self) {
    let prefix = format!("{} struct ", self.settings.accessibility).trim_start().to_string();
    let classname = self.settings.classname.clone();
    self.emitter.line("#[derive(Default)]");
    self.emitter.fragment_line(&prefix, &classname, " {", escape_name);
    if self.memoize {
      self.emitter.indent();
      self.emitter.line("storage: Option<HashMap<MemoKey, Box<dyn std::any::Any>>>,");
      self.emitter.unindent();
    }
    self.emitter.line("}");
  }

  fn compile_members(&mut self) {
    for member in &self.settings.members {
      match member {
        Fragment::Text(text) => self.emitter.lines(text),
        Fragment::Code(span) => self.emitter.code_span(span)
      }
      self.emitter.blank_line();
    }
  }

  fn compile_constructor(&mut self) {
    self.emitter.line("pub fn new() -> Self {");
    self.emitter.indent();
    self.emitter.line("Self::default()");
    self.emitter.unindent();
    self.emitter.line("}");
  }

  /// `parse` runs the start rule on the whole subject, with a fresh memoization storage if any rule is memoized. The storage is dropped when `parse` returns or unwinds.
  fn compile_entry_point(&mut self, start: &Rule) -> Result<(), CompileError> {
    let ty = TypeResolver::new(self.grammar).resolve(&start.expr)?;
    self.emitter.blank_line();
    self.emitter.line(format!(
      "pub fn parse(&mut self, subject: &str, file_name: Option<&str>) -> Result<{}, FormatError> {{", ty));
    self.emitter.indent();
    if self.memoize {
      self.emitter.line("self.storage = Some(HashMap::new());");
      self.emitter.line(format!(
        "let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> Result<{}, FormatError> {{", ty));
      self.emitter.indent();
      self.compile_start_call(start);
      self.emitter.unindent();
      self.emitter.line("}));");
      self.emitter.line("self.storage = None;");
      self.emitter.line("match result {");
      self.emitter.indent();
      self.emitter.line("Ok(result) => result,");
      self.emitter.line("Err(panic) => std::panic::resume_unwind(panic)");
      self.emitter.unindent();
      self.emitter.line("}");
    }
    else {
      self.compile_start_call(start);
    }
    self.emitter.unindent();
    self.emitter.line("}");
    Ok(())
  }

  fn compile_start_call(&mut self, start: &Rule) {
    let failure = format!("Failed to parse '{}'.", start.name());
    self.emitter.line("let mut cursor = Cursor::new(subject, 0, file_name);");
    self.emitter.line(format!("match self.{}(&mut cursor)? {{", escape_name(start.name())));
    self.emitter.indent();
    self.emitter.line("Some(result) => Ok(result.value),");
    self.emitter.line(format!("None => Err(Self::exception_helper(&cursor, |state| {})),", to_literal(&failure)));
    self.emitter.unindent();
    self.emitter.line("}");
  }
}
