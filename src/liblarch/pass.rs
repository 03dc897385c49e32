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

//! Compilation pipeline. Passes run in order over the same grammar and report into a shared result, a pass is skipped if one of its blocking errors has been reported.

use crate::ast::Grammar;
use crate::back::GenerateCodePass;
use crate::compile_result::CompileResult;
use crate::error::CompileError;

pub trait CompilePass
{
  fn name(&self) -> &'static str;

  /// Codes of the errors this pass may report.
  fn errors_produced(&self) -> &[&'static str];

  /// Codes of the errors preventing this pass from running.
  fn blocked_by_errors(&self) -> &[&'static str];

  fn run(&self, grammar: &Grammar, result: &mut CompileResult) -> Result<(), CompileError>;
}

pub struct Compiler
{
  passes: Vec<Box<dyn CompilePass>>
}

impl Default for Compiler
{
  fn default() -> Compiler {
    Compiler {
      passes: vec![Box::new(GenerateCodePass)]
    }
  }
}

impl Compiler
{
  pub fn new() -> Compiler {
    Compiler::default()
  }

  /// Adds a pass running after the previously added ones and before code generation.
  pub fn with_pass<P: CompilePass + 'static>(mut self, pass: P) -> Compiler {
    let at = self.passes.len() - 1;
    self.passes.insert(at, Box::new(pass));
    self
  }

  pub fn compile(&self, grammar: &Grammar) -> Result<CompileResult, CompileError> {
    let mut result = CompileResult::new();
    for pass in &self.passes {
      let blocking: Vec<&str> = pass.blocked_by_errors().iter()
        .copied()
        .filter(|code| result.has_error(code))
        .collect();
      if blocking.is_empty() {
        log::debug!("Running pass `{}`, it may report {:?}.", pass.name(), pass.errors_produced());
        pass.run(grammar, &mut result)?;
      }
      else {
        log::warn!("Pass `{}` is skipped because of the errors {}.", pass.name(), blocking.join(", "));
      }
    }
    Ok(result)
  }
}
