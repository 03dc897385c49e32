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

use crate::back::compiler::*;

/// Alternatives are tried in order until one of them sets the result.
pub struct ChoiceCompiler<'e>
{
  choices: &'e [Expression]
}

impl<'e> ChoiceCompiler<'e>
{
  pub fn new(choices: &'e [Expression]) -> ChoiceCompiler<'e> {
    ChoiceCompiler {
      choices
    }
  }
}

impl<'e> CompileExpr for ChoiceCompiler<'e>
{
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError> {
    let result = context.result().name.clone();
    for (i, choice) in self.choices.iter().enumerate() {
      if i == 0 {
        compile_expr(context, choice)?;
      }
      else {
        context.block(&format!("if {}.is_none()", result),
          |context| compile_expr(context, choice))?;
      }
    }
    Ok(())
  }
}
