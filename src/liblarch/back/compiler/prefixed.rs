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
use crate::back::name_factory::is_generated_local;
use crate::identifier::escape_name;

/// `name:expr` binds the value of `expr` to `name` along with the cursors delimiting its match, `name_start` and `name_end`. Failed matches bind the default value.
pub struct PrefixedCompiler<'e>
{
  prefix: &'e Identifier,
  expr: &'e Expression
}

impl<'e> PrefixedCompiler<'e>
{
  pub fn new(prefix: &'e Identifier, expr: &'e Expression) -> PrefixedCompiler<'e> {
    PrefixedCompiler {
      prefix,
      expr
    }
  }
}

impl<'e> CompileExpr for PrefixedCompiler<'e>
{
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError> {
    let name = &self.prefix.name;
    if is_generated_local(name) {
      return Err(CompileError::ReservedBinding(name.clone()));
    }
    context.line(format!("let {} = cursor.clone();", escape_name(&format!("{}_start", name))));
    compile_expr(context, self.expr)?;
    context.line(format!("let {} = cursor.clone();", escape_name(&format!("{}_end", name))));
    let result = context.result().name.clone();
    context.line(format!("let {} = Self::value_or_default(&{});", escape_name(name), result));
    Ok(())
  }
}
