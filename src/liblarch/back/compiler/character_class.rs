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

use crate::ast::ClassExpr;
use crate::back::compiler::*;
use crate::back::str_literal::to_literal;

pub struct CharacterClassCompiler<'e>
{
  class: &'e ClassExpr
}

impl<'e> CharacterClassCompiler<'e>
{
  pub fn new(class: &'e ClassExpr) -> CharacterClassCompiler<'e> {
    CharacterClassCompiler {
      class
    }
  }
}

impl<'e> CompileExpr for CharacterClassCompiler<'e>
{
  /// Ranges are passed as a string of bound pairs: `[a-z0-9]` becomes `"az09"`.
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError> {
    let bounds: String = self.class.ranges.iter()
      .flat_map(|range| vec![range.min, range.max])
      .collect();
    log::trace!("Character class {} compiled to the bounds {:?}.", self.class, bounds);
    let result = context.result().name.clone();
    context.line(format!("{} = self.parse_class(cursor, {}, {}, {});",
      result, to_literal(&bounds), self.class.negated, self.class.ignore_case));
    Ok(())
  }
}
