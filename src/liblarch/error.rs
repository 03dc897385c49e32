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

use crate::ast::{CodeKind, Location};

/// Failures of the code generator. Grammars reaching the generator are expected to be validated, these errors report what slipped through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError
{
  #[error("{location}: {kind} code is only valid {placement}")]
  MisplacedCode {
    kind: CodeKind,
    placement: &'static str,
    location: Location
  },
  #[error("rule `{0}` is not defined")]
  UndefinedRule(String),
  #[error("the result type of rule `{0}` depends on itself")]
  CyclicResultType(String),
  #[error("`{0}` is a local of the generated code and cannot name a binding")]
  ReservedBinding(String),
  #[error("the grammar does not have a start rule")]
  EmptyGrammar
}

#[cfg(test)]
mod test
{
  use super::*;

  #[test]
  fn test_messages() {
    let misplaced = CompileError::MisplacedCode {
      kind: CodeKind::Error,
      placement: "at the end of a sequence expression",
      location: Location::new("calc.peg", 4, 12)
    };
    assert_eq!(misplaced.to_string(),
      "calc.peg:4:12: error code is only valid at the end of a sequence expression");
    assert_eq!(CompileError::UndefinedRule("Expr".into()).to_string(),
      "rule `Expr` is not defined");
    assert_eq!(CompileError::ReservedBinding("r1".into()).to_string(),
      "`r1` is a local of the generated code and cannot name a binding");
  }
}
