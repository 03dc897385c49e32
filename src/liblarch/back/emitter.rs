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

//! Writes the generated code along with line directives for code fragments coming from the grammar.

use crate::ast::{CodeSpan, Fragment};
use crate::back::code_printer::CodePrinter;
use crate::back::str_literal::to_literal;
use crate::compile_result::{LineMapping, SourceMap};
use std::path::Path;

pub struct Emitter
{
  printer: CodePrinter,
  source_map: SourceMap
}

impl Emitter
{
  pub fn new() -> Emitter {
    Emitter {
      printer: CodePrinter::new(),
      source_map: vec![]
    }
  }

  pub fn line<S: AsRef<str>>(&mut self, line: S) {
    self.printer.write_line(line);
  }

  pub fn lines(&mut self, text: &str) {
    self.printer.write_lines(text);
  }

  pub fn blank_line(&mut self) {
    self.printer.blank_line();
  }

  pub fn indent(&mut self) {
    self.printer.indent();
  }

  pub fn unindent(&mut self) {
    self.printer.unindent();
  }

  /// Writes the code of `span` at its original column, between a directive naming its origin and a directive restoring the default.
  pub fn code_span(&mut self, span: &CodeSpan) {
    let start = &span.start;
    let file_name = Path::new(&start.file_name)
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_default();
    self.printer.write_line_no_tabs(
      format!("// #line {}:{} {}", start.line, start.column, to_literal(&file_name)));
    let generated_line = self.printer.next_line();
    log::trace!("Code at {} is written at line {}.", start, generated_line);
    self.source_map.push(LineMapping {
      generated_line,
      file_name: start.file_name.clone(),
      line: start.line,
      column: start.column
    });
    let padding = " ".repeat(start.column.saturating_sub(1));
    self.printer.write_line_no_tabs(format!("{}{}", padding, span.code));
    self.printer.write_line_no_tabs("// #line default");
  }

  /// Writes `prefix value suffix`. Text values go through `transform` and stay on a single line, code values are written as code spans.
  pub fn fragment_line<F>(&mut self, prefix: &str, fragment: &Fragment, suffix: &str, transform: F) where
    F: Fn(&str) -> String
  {
    match fragment {
      Fragment::Text(text) => self.line(format!("{}{}{}", prefix, transform(text), suffix)),
      Fragment::Code(span) => {
        if !prefix.trim().is_empty() {
          self.line(prefix.trim_end());
        }
        self.code_span(span);
        if !suffix.trim().is_empty() {
          self.line(suffix.trim_start());
        }
      }
    }
  }

  pub fn finish(self) -> (String, SourceMap) {
    (self.printer.finish(), self.source_map)
  }
}
