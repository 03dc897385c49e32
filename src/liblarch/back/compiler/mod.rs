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

//! One compiler per kind of expression. Each one writes code matching its expression at `cursor` and storing the outcome in the current result variable. On failure, the result stays `None` and the cursor is left where it was.

mod grammar;
mod rule;
mod helpers;
mod str_literal;
mod any_single_char;
mod character_class;
mod non_terminal;
mod sequence;
mod choice;
mod repeat;
mod syntactic_predicate;
mod prefixed;
mod semantic_action;

pub use crate::back::compiler::grammar::*;
pub use crate::back::context::*;
use crate::ast::*;
use crate::back::compiler::str_literal::*;
use crate::back::compiler::any_single_char::*;
use crate::back::compiler::character_class::*;
use crate::back::compiler::non_terminal::*;
use crate::back::compiler::sequence::*;
use crate::back::compiler::choice::*;
use crate::back::compiler::repeat::*;
use crate::back::compiler::syntactic_predicate::*;
use crate::back::compiler::prefixed::*;
use crate::back::compiler::semantic_action::*;
use crate::error::CompileError;

pub trait CompileExpr
{
  fn compile_expr(&self, context: &mut Context) -> Result<(), CompileError>;
}

pub fn compile_expr(context: &mut Context, expr: &Expression) -> Result<(), CompileError> {
  expr_compiler(expr).compile_expr(context)
}

fn expr_compiler<'e>(expr: &'e Expression) -> Box<dyn CompileExpr + 'e> {
  use crate::ast::Expression::*;
  match expr {
    Literal(lit) => Box::new(StrLiteralCompiler::new(lit)),
    Wildcard => Box::new(AnySingleCharCompiler),
    Class(class) => Box::new(CharacterClassCompiler::new(class)),
    Name(ident) => Box::new(NonTerminalCompiler::new(ident)),
    Sequence(seq) => Box::new(SequenceCompiler::new(seq)),
    Choice(choices) => Box::new(ChoiceCompiler::new(choices)),
    Repetition(rep) => Box::new(RepeatCompiler::new(rep)),
    And(expr) => Box::new(SyntacticPredicateCompiler::new(expr, Kind::And)),
    Not(expr) => Box::new(SyntacticPredicateCompiler::new(expr, Kind::Not)),
    AndCode(span) => Box::new(CodePredicateCompiler::new(span, Kind::And)),
    NotCode(span) => Box::new(CodePredicateCompiler::new(span, Kind::Not)),
    Prefixed(prefix, expr) => Box::new(PrefixedCompiler::new(prefix, expr)),
    Typed(_, expr) => expr_compiler(expr),
    Code(code) => Box::new(MisplacedCodeCompiler::new(code))
  }
}
