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

//! Code generation: from a validated grammar to the Rust source of its parser.

mod code_printer;
mod compiler;
mod context;
mod emitter;
mod name_factory;
pub mod rtype;
mod str_literal;

use crate::ast::Grammar;
use crate::back::compiler::GrammarCompiler;
use crate::compile_result::{CompileResult, BLOCKING_ERRORS};
use crate::error::CompileError;
use crate::pass::CompilePass;

/// Last pass of the pipeline, it writes the generated code into the compilation result.
pub struct GenerateCodePass;

impl CompilePass for GenerateCodePass
{
  fn name(&self) -> &'static str {
    "generate-code"
  }

  fn errors_produced(&self) -> &[&'static str] {
    &[]
  }

  fn blocked_by_errors(&self) -> &[&'static str] {
    &BLOCKING_ERRORS
  }

  fn run(&self, grammar: &Grammar, result: &mut CompileResult) -> Result<(), CompileError> {
    let generated = GrammarCompiler::compile(grammar)?;
    log::info!("Generated {} bytes of code with {} mapped fragment(s).",
      generated.code.len(), generated.source_map.len());
    result.set_code(generated.code, generated.source_map);
    Ok(())
  }
}
