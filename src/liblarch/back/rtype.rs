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

//! Result types of the expressions. The type of an expression is what a successful match yields, it is inferred without looking at the input.

use crate::ast::*;
use crate::error::CompileError;
use std::fmt::{Display, Error, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultType
{
  /// The matched text.
  Text,
  List(Box<ResultType>),
  /// Written by the grammar author.
  Declared(Fragment)
}

impl Display for ResultType
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    match self {
      ResultType::Text => formatter.write_str("String"),
      ResultType::List(ty) => write!(formatter, "Vec<{}>", ty),
      ResultType::Declared(ty) => ty.fmt(formatter)
    }
  }
}

/// A type along with whether it comes from a type ascription.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedType
{
  pub ty: ResultType,
  pub explicit: bool
}

impl ResolvedType
{
  pub fn text() -> ResolvedType {
    ResolvedType {
      ty: ResultType::Text,
      explicit: false
    }
  }

  /// The code span of an ascribed type, it must be written with line directives.
  pub fn code_span(&self) -> Option<&CodeSpan> {
    match &self.ty {
      ResultType::Declared(Fragment::Code(span)) if self.explicit => Some(span),
      _ => None
    }
  }
}

impl Display for ResolvedType
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    self.ty.fmt(formatter)
  }
}

pub struct TypeResolver<'a>
{
  grammar: &'a Grammar
}

impl<'a> TypeResolver<'a>
{
  pub fn new(grammar: &'a Grammar) -> TypeResolver<'a> {
    TypeResolver {
      grammar
    }
  }

  pub fn resolve(&self, expr: &Expression) -> Result<ResolvedType, CompileError> {
    self.resolve_in(expr, &mut vec![])
  }

  fn resolve_in(&self, expr: &Expression, visiting: &mut Vec<String>)
    -> Result<ResolvedType, CompileError>
  {
    use crate::ast::Expression::*;
    match expr {
      Choice(choices) => match choices.first() {
        Some(first) => self.resolve_in(first, visiting),
        None => Ok(ResolvedType::text())
      },
      Name(ident) => {
        if visiting.contains(&ident.name) {
          return Err(CompileError::CyclicResultType(ident.name.clone()));
        }
        let rule = self.grammar.find_rule(&ident.name)
          .ok_or_else(|| CompileError::UndefinedRule(ident.name.clone()))?;
        visiting.push(ident.name.clone());
        let resolved = self.resolve_in(&rule.expr, visiting)?;
        visiting.pop();
        Ok(ResolvedType {
          ty: resolved.ty,
          explicit: false
        })
      }
      Prefixed(_, expr) => self.resolve_in(expr, visiting),
      Repetition(rep) => {
        let item = self.resolve_in(&rep.expr, visiting)?;
        Ok(ResolvedType {
          ty: ResultType::List(Box::new(item.ty)),
          explicit: item.explicit
        })
      }
      Typed(ty, _) => Ok(ResolvedType {
        ty: ResultType::Declared(ty.clone()),
        explicit: true
      }),
      _ => Ok(ResolvedType::text())
    }
  }
}
