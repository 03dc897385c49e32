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

use crate::ast::RepetitionExpr;
use crate::back::compiler::*;

pub struct RepeatCompiler<'e>
{
  rep: &'e RepetitionExpr
}

impl<'e> RepeatCompiler<'e>
{
  pub fn new(rep: &'e RepetitionExpr) -> RepeatCompiler<'e> {
    RepeatCompiler {
      rep
    }
  }

  fn declare_list(&self, context: &mut Context, list: &str) -> Result<(), CompileError> {
    let item = context.resolve(&self.rep.expr)?;
    match item.code_span() {
      Some(span) => {
        let span = span.clone();
        context.line(format!("let mut {}: Vec<", list));
        context.code_span(&span);
        context.line("> = Vec::new();");
      }
      None => context.line(format!("let mut {}: Vec<{}> = Vec::new();", list, item))
    }
    Ok(())
  }
}

impl<'e> CompileExpr for RepeatCompiler<'e>
{
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError> {
    let result = context.result().name.clone();
    let start = context.next_name("start_cursor");
    let list = context.next_name("l");
    context.line(format!("let {} = cursor.clone();", start));
    self.declare_list(context, &list)?;
    let header = match self.rep.max {
      Some(max) => format!("while {}.len() < {}", list, max),
      None => "loop".to_string()
    };
    context.block(&header, |context| {
      let item = context.compile_in_slot(&self.rep.expr)?;
      context.block(&format!("match {}", item.name), |context| {
        context.line(format!("Some(item) => {}.push(item.value),", list));
        context.line("None => break,");
        Ok(())
      })
    })?;
    let success = format!("{} = Some(ParseResult::new({}.clone(), cursor.clone(), {}));",
      result, start, list);
    if self.rep.min == 0 {
      context.line(success);
      Ok(())
    }
    else {
      context.block(&format!("if {}.len() >= {}", list, self.rep.min), |context| {
        context.line(success);
        Ok(())
      })?;
      context.block("else", |context| {
        context.line(format!("*cursor = {}.clone();", start));
        Ok(())
      })
    }
  }
}
