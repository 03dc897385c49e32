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

//! AST of a grammar, as produced by the grammar parser and checked by the validation passes. The code generator only reads it.

use std::fmt::{Display, Error, Formatter};

pub const MEMOIZE_FLAG: &str = "memoize";
pub const PUBLIC_FLAG: &str = "public";

/// Position of an item in the grammar source. Lines and columns are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location
{
  pub file_name: String,
  pub line: usize,
  pub column: usize
}

impl Location
{
  pub fn new(file_name: &str, line: usize, column: usize) -> Location {
    Location {
      file_name: file_name.to_string(),
      line,
      column
    }
  }
}

impl Display for Location
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    write!(formatter, "{}:{}:{}", self.file_name, self.line, self.column)
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier
{
  pub name: String,
  pub location: Option<Location>
}

impl Identifier
{
  pub fn new(name: &str) -> Identifier {
    Identifier {
      name: name.to_string(),
      location: None
    }
  }

  pub fn located(name: &str, location: Location) -> Identifier {
    Identifier {
      name: name.to_string(),
      location: Some(location)
    }
  }
}

/// Host code written in the grammar, with the position of its first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeSpan
{
  pub code: String,
  pub start: Location
}

impl CodeSpan
{
  pub fn new(code: &str, start: Location) -> CodeSpan {
    CodeSpan {
      code: code.to_string(),
      start
    }
  }
}

/// Value of a setting or of a type ascription: plain text, or host code that keeps track of its origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment
{
  Text(String),
  Code(CodeSpan)
}

impl Fragment
{
  pub fn text(text: &str) -> Fragment {
    Fragment::Text(text.to_string())
  }

  pub fn code(code: &str, start: Location) -> Fragment {
    Fragment::Code(CodeSpan::new(code, start))
  }
}

impl Display for Fragment
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    match self {
      Fragment::Text(text) => formatter.write_str(text),
      Fragment::Code(span) => formatter.write_str(span.code.trim())
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setting
{
  pub key: Identifier,
  pub value: Fragment
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar
{
  /// The first rule is the start rule.
  pub rules: Vec<Rule>,
  pub settings: Vec<Setting>
}

impl Grammar
{
  pub fn new(rules: Vec<Rule>) -> Grammar {
    Grammar {
      rules,
      settings: vec![]
    }
  }

  pub fn with_setting(mut self, key: &str, value: Fragment) -> Grammar {
    self.settings.push(Setting {
      key: Identifier::new(key),
      value
    });
    self
  }

  pub fn start_rule(&self) -> Option<&Rule> {
    self.rules.first()
  }

  pub fn find_rule(&self, name: &str) -> Option<&Rule> {
    self.rules.iter().find(|rule| rule.name() == name)
  }

  /// Values of the settings named `key`, in declaration order.
  pub fn settings_named<'a>(&'a self, key: &'a str) -> impl Iterator<Item=&'a Fragment> + 'a {
    self.settings.iter()
      .filter(move |setting| setting.key.name == key)
      .map(|setting| &setting.value)
  }

  pub fn uses_memoization(&self) -> bool {
    self.rules.iter().any(|rule| rule.has_flag(MEMOIZE_FLAG))
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule
{
  pub identifier: Identifier,
  pub expr: Expression,
  pub flags: Vec<Identifier>
}

impl Rule
{
  pub fn new(name: &str, expr: Expression) -> Rule {
    Rule {
      identifier: Identifier::new(name),
      expr,
      flags: vec![]
    }
  }

  pub fn with_flag(mut self, flag: &str) -> Rule {
    self.flags.push(Identifier::new(flag));
    self
  }

  pub fn name(&self) -> &str {
    &self.identifier.name
  }

  pub fn has_flag(&self, flag: &str) -> bool {
    self.flags.iter().any(|f| f.name == flag)
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression
{
  Literal(LiteralExpr), // "match me"
  Wildcard, // .
  Class(ClassExpr), // [0-9]
  Name(Identifier), // a_rule
  Sequence(Vec<Expression>), // a_rule next_rule
  Choice(Vec<Expression>), // try_this / or_try_this_one
  Repetition(RepetitionExpr), // expr<min,max>
  And(Box<Expression>), // &expr
  Not(Box<Expression>), // !expr
  AndCode(CodeSpan), // &{ predicate }
  NotCode(CodeSpan), // !{ predicate }
  Prefixed(Identifier, Box<Expression>), // name:expr
  Typed(Fragment, Box<Expression>), // <type> expr
  Code(CodeExpr) // { result } or #error{ message } or #{ state }
}

impl Expression
{
  pub fn literal(value: &str) -> Expression {
    Expression::Literal(LiteralExpr::new(value, false))
  }

  pub fn literal_ignore_case(value: &str) -> Expression {
    Expression::Literal(LiteralExpr::new(value, true))
  }

  pub fn class(ranges: Vec<CharacterRange>, negated: bool, ignore_case: bool) -> Expression {
    Expression::Class(ClassExpr {
      ranges,
      negated,
      ignore_case
    })
  }

  pub fn name(rule: &str) -> Expression {
    Expression::Name(Identifier::new(rule))
  }

  pub fn sequence(seq: Vec<Expression>) -> Expression {
    Expression::Sequence(seq)
  }

  pub fn choice(choices: Vec<Expression>) -> Expression {
    Expression::Choice(choices)
  }

  pub fn repetition(expr: Expression, min: usize, max: Option<usize>) -> Expression {
    Expression::Repetition(RepetitionExpr {
      expr: Box::new(expr),
      min,
      max
    })
  }

  pub fn zero_or_more(expr: Expression) -> Expression {
    Expression::repetition(expr, 0, None)
  }

  pub fn one_or_more(expr: Expression) -> Expression {
    Expression::repetition(expr, 1, None)
  }

  pub fn optional(expr: Expression) -> Expression {
    Expression::repetition(expr, 0, Some(1))
  }

  pub fn and(expr: Expression) -> Expression {
    Expression::And(Box::new(expr))
  }

  pub fn not(expr: Expression) -> Expression {
    Expression::Not(Box::new(expr))
  }

  pub fn prefixed(prefix: &str, expr: Expression) -> Expression {
    Expression::Prefixed(Identifier::new(prefix), Box::new(expr))
  }

  pub fn typed(ty: Fragment, expr: Expression) -> Expression {
    Expression::Typed(ty, Box::new(expr))
  }

  pub fn code(kind: CodeKind, span: CodeSpan) -> Expression {
    Expression::Code(CodeExpr {
      span,
      kind
    })
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralExpr
{
  pub value: String,
  pub ignore_case: bool
}

impl LiteralExpr
{
  pub fn new(value: &str, ignore_case: bool) -> LiteralExpr {
    LiteralExpr {
      value: value.to_string(),
      ignore_case
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassExpr
{
  pub ranges: Vec<CharacterRange>,
  pub negated: bool,
  pub ignore_case: bool
}

impl Display for ClassExpr
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.write_str(if self.negated { "[^" } else { "[" })?;
    for range in &self.ranges {
      range.fmt(formatter)?;
    }
    formatter.write_str(if self.ignore_case { "]i" } else { "]" })
  }
}

/// Inclusive range of characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterRange
{
  pub min: char,
  pub max: char
}

impl CharacterRange
{
  pub fn new(min: char, max: char) -> CharacterRange {
    CharacterRange {
      min,
      max
    }
  }

  pub fn single(c: char) -> CharacterRange {
    CharacterRange::new(c, c)
  }
}

impl Display for CharacterRange
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    if self.min == self.max {
      write!(formatter, "{}", self.min.escape_default())
    }
    else {
      write!(formatter, "{}-{}", self.min.escape_default(), self.max.escape_default())
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepetitionExpr
{
  pub expr: Box<Expression>,
  /// Inclusive bounds, no upper bound if `max` is `None`.
  pub min: usize,
  pub max: Option<usize>
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeKind
{
  /// Computes the value of the enclosing sequence.
  Result,
  /// Raises a diagnostic with the computed message.
  Error,
  /// Side effect on the parse state, matches the empty string.
  State
}

impl Display for CodeKind
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.write_str(match self {
      CodeKind::Result => "result",
      CodeKind::Error => "error",
      CodeKind::State => "state"
    })
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeExpr
{
  pub span: CodeSpan,
  pub kind: CodeKind
}
