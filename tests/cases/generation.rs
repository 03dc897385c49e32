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

use super::*;
use larch::ast::Expression as E;

fn calculator() -> Grammar {
  Grammar::new(vec![
    Rule::new("Sum", E::typed(Fragment::code("i32", at(1, 8)), E::sequence(vec![
      E::prefixed("first", E::name("Number")),
      E::prefixed("rest", E::zero_or_more(E::typed(Fragment::text("i32"), E::sequence(vec![
        E::literal("+"),
        E::prefixed("n", E::name("Number")),
        E::code(CodeKind::Result, CodeSpan::new("n", at(2, 30)))
      ])))),
      E::code(CodeKind::Result, CodeSpan::new("first + rest.iter().sum::<i32>()", at(3, 5)))
    ]))),
    Rule::new("Number", E::typed(Fragment::text("i32"), E::sequence(vec![
      E::prefixed("digits", E::one_or_more(E::class(vec![CharacterRange::new('0', '9')], false, false))),
      E::code(CodeKind::Result, CodeSpan::new("digits.concat().parse().unwrap_or(0)", at(4, 12)))
    ]))).with_flag(MEMOIZE_FLAG)
  ])
}

#[test]
fn test_header_and_defaults() {
  let code = generated_code(&calculator());
  assert!(code.starts_with("// ----"));
  assert!(code.contains(&format!("generated by larch {}", env!("CARGO_PKG_VERSION"))));
  assert!(code.contains("pub mod parsers {"));
  assert!(code.contains("pub struct Parser {"));
  assert!(code.contains("impl Parser {"));
  assert!(code.contains("pub fn parse(&mut self, subject: &str, file_name: Option<&str>) -> Result<i32, FormatError> {"));
}

#[test]
fn test_settings() {
  let grammar = calculator()
    .with_setting("namespace", Fragment::text("arithmetic"))
    .with_setting("classname", Fragment::text("Calculator"))
    .with_setting("accessibility", Fragment::text("pub(crate)"))
    .with_setting("using", Fragment::text("std::fmt"))
    .with_setting("using", Fragment::code("std::rc::Rc", at(9, 7)))
    .with_setting("members", Fragment::text("pub fn answer(&self) -> i32 { 42 }"))
    .with_setting("namespace", Fragment::text("ignored"));
  let code = generated_code(&grammar);
  assert!(code.contains("pub mod arithmetic {"));
  assert!(!code.contains("ignored"));
  assert!(code.contains("pub(crate) struct Calculator {"));
  assert!(code.contains("impl Calculator {"));
  assert!(code.contains("use std::fmt;"));
  assert!(code.contains("// #line 9:7 \"calc.peg\"\n      std::rc::Rc\n// #line default\n"));
  assert!(code.contains("pub fn answer(&self) -> i32 { 42 }"));
}

#[test]
fn test_keyword_namespace() {
  let grammar = calculator().with_setting("namespace", Fragment::text("mod"));
  assert!(generated_code(&grammar).contains("pub mod r#mod {"));
}

#[test]
fn test_explicit_code_type_in_signature() {
  let code = generated_code(&calculator());
  assert!(code.contains(
    "fn Sum(&mut self, cursor: &mut Cursor) -> Result<Option<ParseResult<\n// #line 1:8 \"calc.peg\"\n       i32\n// #line default\n"));
  assert!(code.contains("fn Number(&mut self, cursor: &mut Cursor) -> Result<Option<ParseResult<i32>>, FormatError> {"));
}

#[test]
fn test_source_map_points_at_code() {
  let result = compile(&calculator());
  let code = result.code().unwrap();
  let lines: Vec<&str> = code.lines().collect();
  assert_eq!(result.source_map().len(), 4);
  for mapping in result.source_map() {
    let line = lines[mapping.generated_line - 1];
    assert_eq!(mapping.file_name, "grammars/calc.peg");
    assert_eq!(line.len() - line.trim_start().len(), mapping.column - 1);
    assert!(lines[mapping.generated_line - 2].starts_with(
      &format!("// #line {}:{} ", mapping.line, mapping.column)));
    assert_eq!(lines[mapping.generated_line], "// #line default");
  }
}

#[test]
fn test_memoization_is_scoped_to_parse() {
  let code = generated_code(&calculator());
  assert!(code.contains("self.storage = Some(HashMap::new());"));
  assert!(code.contains("let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> Result<i32, FormatError> {"));
  let unwound = code.find("}));").unwrap();
  let cleared = code.find("self.storage = None;").unwrap();
  let resumed = code.find("Err(panic) => std::panic::resume_unwind(panic)").unwrap();
  assert!(unwound < cleared && cleared < resumed);
  assert!(code.contains("MemoKey::new(\"Number\", cursor.state_key(), cursor.location())"));
  let plain = generated_code(&Grammar::new(vec![Rule::new("Start", E::Wildcard)]));
  assert!(!plain.contains("storage"));
}

#[test]
fn test_diagnostics_are_empty() {
  assert!(compile(&calculator()).diagnostics().is_empty());
}
