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

pub mod generation;
pub mod properties;

use larch::ast::*;
use larch::CompileResult;

pub fn at(line: usize, column: usize) -> Location {
  Location::new("grammars/calc.peg", line, column)
}

pub fn compile(grammar: &Grammar) -> CompileResult {
  larch::compile(grammar).expect("The grammar is valid.")
}

pub fn generated_code(grammar: &Grammar) -> String {
  let result = compile(grammar);
  let code = result.code().expect("The code has been generated.").to_string();
  if let Err(error) = syn::parse_file(&code) {
    panic!("The generated code is not valid Rust ({}):\n{}", error, code);
  }
  code
}
