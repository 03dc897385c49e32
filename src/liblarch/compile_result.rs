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

//! Outcome of a compilation: diagnostics reported by the passes, the generated code and its source map.

use crate::ast::Location;

/// Errors that prevent code generation from running.
pub static BLOCKING_ERRORS: [&str; 7] =
  ["PEG0001", "PEG0002", "PEG0003", "PEG0004", "PEG0005", "PEG0007", "PEG0012"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic
{
  pub code: String,
  pub message: String,
  pub is_warning: bool,
  pub location: Option<Location>
}

impl Diagnostic
{
  pub fn error(code: &str, message: &str) -> Diagnostic {
    Diagnostic {
      code: code.to_string(),
      message: message.to_string(),
      is_warning: false,
      location: None
    }
  }

  pub fn warning(code: &str, message: &str) -> Diagnostic {
    Diagnostic {
      is_warning: true,
      .. Diagnostic::error(code, message)
    }
  }
}

/// Maps a line of the generated code back to the grammar position of the code fragment written there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineMapping
{
  /// 1-based line in the generated code.
  pub generated_line: usize,
  pub file_name: String,
  pub line: usize,
  pub column: usize
}

pub type SourceMap = Vec<LineMapping>;

#[derive(Clone, Debug, Default)]
pub struct CompileResult
{
  diagnostics: Vec<Diagnostic>,
  code: Option<String>,
  source_map: SourceMap
}

impl CompileResult
{
  pub fn new() -> CompileResult {
    CompileResult::default()
  }

  pub fn report(&mut self, diagnostic: Diagnostic) {
    self.diagnostics.push(diagnostic);
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  /// True if an error (not a warning) with this code has been reported.
  pub fn has_error(&self, code: &str) -> bool {
    self.diagnostics.iter().any(|d| !d.is_warning && d.code == code)
  }

  pub fn set_code(&mut self, code: String, source_map: SourceMap) {
    assert!(self.code.is_none(), "The generated code can only be written once.");
    self.code = Some(code);
    self.source_map = source_map;
  }

  pub fn code(&self) -> Option<&str> {
    self.code.as_deref()
  }

  pub fn source_map(&self) -> &[LineMapping] {
    &self.source_map
  }
}

#[cfg(test)]
mod test
{
  use super::*;

  #[test]
  fn test_warnings_are_not_errors() {
    let mut result = CompileResult::new();
    result.report(Diagnostic::warning("PEG0002", "unused rule"));
    assert!(!result.has_error("PEG0002"));
    result.report(Diagnostic::error("PEG0002", "duplicate rule"));
    assert!(result.has_error("PEG0002"));
  }

  #[test]
  #[should_panic]
  fn test_code_is_written_once() {
    let mut result = CompileResult::new();
    result.set_code("mod a {}".into(), vec![]);
    result.set_code("mod b {}".into(), vec![]);
  }
}
