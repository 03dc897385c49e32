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

//! Larch generates recursive-descent parsers from Parsing Expression Grammars (PEG).
//!
//! A grammar is given as an AST (`ast::Grammar`) that has already been parsed and validated. The generator writes the source of a Rust module containing a parser type with one method per rule. Rules flagged `memoize` cache their results (packrat parsing). Host code written in the grammar (actions, predicates, types and settings) is copied into the parser along with line directives pointing back to the grammar.
//!
//! The generated code depends on the `larch_runtime` crate.

pub mod ast;
pub mod compile_result;
pub mod error;
pub mod pass;
pub mod settings;
mod back;
mod identifier;

pub use crate::back::GenerateCodePass;
pub use crate::back::rtype::{ResolvedType, ResultType, TypeResolver};
pub use crate::compile_result::{CompileResult, Diagnostic, LineMapping, SourceMap};
pub use crate::error::CompileError;
pub use crate::pass::{CompilePass, Compiler};

use crate::ast::Grammar;

/// Runs the default pipeline on `grammar`.
pub fn compile(grammar: &Grammar) -> Result<CompileResult, CompileError> {
  Compiler::new().compile(grammar)
}
