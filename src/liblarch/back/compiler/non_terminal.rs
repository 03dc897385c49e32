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

use crate::ast::Identifier;
use crate::back::compiler::*;
use crate::identifier::escape_name;

pub struct NonTerminalCompiler<'e>
{
  ident: &'e Identifier
}

impl<'e> NonTerminalCompiler<'e>
{
  pub fn new(ident: &'e Identifier) -> NonTerminalCompiler<'e> {
    NonTerminalCompiler {
      ident
    }
  }
}

impl<'e> CompileExpr for NonTerminalCompiler<'e>
{
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError> {
    if context.grammar().find_rule(&self.ident.name).is_none() {
      return Err(CompileError::UndefinedRule(self.ident.name.clone()));
    }
    let result = context.result().name.clone();
    context.line(format!("{} = self.{}(cursor)?;", result, escape_name(&self.ident.name)));
    Ok(())
  }
}
