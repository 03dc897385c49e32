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

use crate::ast::{CodeExpr, CodeSpan};
use crate::back::compiler::*;
use crate::back::rtype::ResolvedType;

/// Writes state code as a sequence step: it runs on a mutable view of the cursor, then matches the empty string.
pub fn compile_state_code(context: &mut Context, span: &CodeSpan) -> ResultSlot {
  let slot = ResultSlot {
    name: context.next_name("r"),
    ty: ResolvedType::text()
  };
  context.declare(&slot);
  let start = context.next_name("start_cursor");
  context.line(format!("let {} = cursor.clone();", start));
  context.line("{");
  context.indent();
  context.line("let mut state = cursor.to_mutable();");
  context.line("let _ = {");
  context.code_span(span);
  context.line("};");
  context.line("*cursor = state.freeze();");
  context.unindent();
  context.line("}");
  context.line(format!("{} = Some(ParseResult::new({}.clone(), cursor.clone(), String::new()));",
    slot.name, start));
  slot
}

/// Code reached outside of the positions where sequences handle it.
pub struct MisplacedCodeCompiler<'e>
{
  code: &'e CodeExpr
}

impl<'e> MisplacedCodeCompiler<'e>
{
  pub fn new(code: &'e CodeExpr) -> MisplacedCodeCompiler<'e> {
    MisplacedCodeCompiler {
      code
    }
  }
}

impl<'e> CompileExpr for MisplacedCodeCompiler<'e>
{
  fn compile_expr(&self, _context: &mut Context) -> Result<(), CompileError> {
    let placement = match self.code.kind {
      CodeKind::State => "as a step of a sequence expression",
      CodeKind::Result | CodeKind::Error => "at the end of a sequence expression"
    };
    Err(CompileError::MisplacedCode {
      kind: self.code.kind,
      placement,
      location: self.code.span.start.clone()
    })
  }
}
