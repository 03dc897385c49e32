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

use crate::ast::LiteralExpr;
use crate::back::compiler::*;
use crate::back::str_literal::to_literal;

pub struct StrLiteralCompiler<'e>
{
  literal: &'e LiteralExpr
}

impl<'e> StrLiteralCompiler<'e>
{
  pub fn new(literal: &'e LiteralExpr) -> StrLiteralCompiler<'e> {
    StrLiteralCompiler {
      literal
    }
  }
}

impl<'e> CompileExpr for StrLiteralCompiler<'e>
{
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError> {
    let result = context.result().name.clone();
    context.line(format!("{} = self.parse_literal(cursor, {}, {});",
      result, to_literal(&self.literal.value), self.literal.ignore_case));
    Ok(())
  }
}
