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

//! Indentation-aware text buffer. It knows nothing about grammars.

const INDENT: &str = "    ";

pub struct CodePrinter
{
  buffer: String,
  level: usize,
  lines: usize
}

impl CodePrinter
{
  pub fn new() -> CodePrinter {
    CodePrinter {
      buffer: String::new(),
      level: 0,
      lines: 0
    }
  }

  /// Writes `line` at the current indentation level. Empty lines are not indented.
  pub fn write_line<S: AsRef<str>>(&mut self, line: S) {
    let line = line.as_ref();
    if !line.is_empty() {
      for _ in 0..self.level {
        self.buffer.push_str(INDENT);
      }
    }
    self.write_line_no_tabs(line);
  }

  /// Writes `line` verbatim, ignoring the indentation level.
  pub fn write_line_no_tabs<S: AsRef<str>>(&mut self, line: S) {
    let line = line.as_ref();
    self.buffer.push_str(line);
    self.buffer.push('\n');
    self.lines += line.matches('\n').count() + 1;
  }

  /// Writes each line of `text`, keeping its relative indentation.
  pub fn write_lines(&mut self, text: &str) {
    for line in text.lines() {
      self.write_line(line);
    }
  }

  pub fn blank_line(&mut self) {
    self.write_line_no_tabs("");
  }

  pub fn indent(&mut self) {
    self.level += 1;
  }

  pub fn unindent(&mut self) {
    assert!(self.level > 0, "Unindent below the first column.");
    self.level -= 1;
  }

  /// 1-based number of the next line to be written.
  pub fn next_line(&self) -> usize {
    self.lines + 1
  }

  pub fn finish(self) -> String {
    self.buffer
  }
}

#[cfg(test)]
mod test
{
  use super::*;

  #[test]
  fn test_indentation() {
    let mut printer = CodePrinter::new();
    printer.write_line("fn main() {");
    printer.indent();
    printer.write_line("let a = 1;");
    printer.blank_line();
    printer.write_line_no_tabs("// verbatim");
    printer.unindent();
    printer.write_line("}");
    assert_eq!(printer.finish(), "fn main() {\n    let a = 1;\n\n// verbatim\n}\n");
  }

  #[test]
  fn test_line_count_includes_embedded_lines() {
    let mut printer = CodePrinter::new();
    assert_eq!(printer.next_line(), 1);
    printer.write_line("a");
    printer.write_line_no_tabs("b\nc");
    assert_eq!(printer.next_line(), 4);
  }

  #[test]
  fn test_write_lines_keeps_relative_indentation() {
    let mut printer = CodePrinter::new();
    printer.indent();
    printer.write_lines("if a {\n    b();\n}");
    assert_eq!(printer.finish(), "    if a {\n        b();\n    }\n");
  }

  #[test]
  #[should_panic]
  fn test_unbalanced_unindent() {
    CodePrinter::new().unindent();
  }
}
