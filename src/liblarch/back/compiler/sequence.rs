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
use crate::back::compiler::semantic_action::compile_state_code;

/// Steps are nested: each one runs only if the previous one matched, and any failure rewinds the cursor to the start of the sequence. A trailing result or error code computes what the sequence yields.
pub struct SequenceCompiler<'e>
{
  steps: &'e [Expression],
  action: Option<&'e CodeExpr>
}

impl<'e> SequenceCompiler<'e>
{
  pub fn new(seq: &'e [Expression]) -> SequenceCompiler<'e> {
    match seq.split_last() {
      Some((Expression::Code(code), steps)) if code.kind != CodeKind::State => SequenceCompiler {
        steps,
        action: Some(code)
      },
      _ => SequenceCompiler {
        steps: seq,
        action: None
      }
    }
  }

  fn compile_steps(&self, context: &mut Context, steps: &[Expression], start: &str)
    -> Result<(), CompileError>
  {
    match steps.split_first() {
      None => {
        self.compile_action(context, start);
        Ok(())
      }
      Some((step, rest)) => {
        let step_result = match step {
          Expression::Code(code) if code.kind == CodeKind::State =>
            compile_state_code(context, &code.span),
          _ => context.compile_in_slot(step)?
        };
        context.block(&format!("if {}.is_some()", step_result.name),
          |context| self.compile_steps(context, rest, start))?;
        context.block("else", |context| {
          context.line(format!("*cursor = {}.clone();", start));
          Ok(())
        })
      }
    }
  }

  fn compile_action(&self, context: &mut Context, start: &str) {
    let result = context.result().name.clone();
    match self.action {
      None => context.line(format!(
        "{} = Some(ParseResult::new({start}.clone(), cursor.clone(), cursor.subject()[{start}.location()..cursor.location()].to_string()));",
        result, start = start)),
      Some(code) if code.kind == CodeKind::Error => {
        context.line(format!("return Err(Self::exception_helper(&{}, |state| {{", start));
        context.code_span(&code.span);
        context.line("}));");
      }
      Some(code) => {
        context.line(format!("{} = Some(Self::return_helper({}.clone(), cursor.clone(), |state| {{",
          result, start));
        context.code_span(&code.span);
        context.line("}));");
      }
    }
  }
}

impl<'e> CompileExpr for SequenceCompiler<'e>
{
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError> {
    let start = context.next_name("start_cursor");
    context.line(format!("let {} = cursor.clone();", start));
    self.compile_steps(context, self.steps, &start)
  }
}
