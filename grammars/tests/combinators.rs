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

use larch_grammars::combinators::Parser;
use larch_grammars::probes;
use larch_runtime::{Cursor, ParseResult};

type Rule = fn(&mut Parser, &mut Cursor) -> Result<Option<ParseResult<String>>, larch_runtime::FormatError>;

fn run(rule: Rule, input: &str) -> (Option<ParseResult<String>>, usize) {
  let mut cursor = Cursor::new(input, 0, None);
  let result = rule(&mut Parser::new(), &mut cursor).unwrap();
  (result, cursor.location())
}

fn fails(rule: Rule, input: &str) -> bool {
  let (result, location) = run(rule, input);
  result.is_none() && location == 0
}

#[test]
fn test_sequence() {
  assert_eq!(Parser::new().parse("ab", None).unwrap(), "ab");
  let (result, location) = run(Parser::Start, "abc");
  let result = result.unwrap();
  assert_eq!(result.value, "ab");
  assert_eq!(result.end_cursor.location(), 2);
  assert_eq!(location, 2);
}

#[test]
fn test_start_rule_failure() {
  let error = Parser::new().parse("ax", Some("input.txt")).unwrap_err();
  assert_eq!(error.message(), "Failed to parse 'Start'.");
  assert_eq!(error.location(), 0);
  assert_eq!(error.cursor().file_name(), Some("input.txt"));
}

#[test]
fn test_failure_leaves_cursor() {
  let (result, location) = run(Parser::Start, "ax");
  assert!(result.is_none());
  assert_eq!(location, 0);
}

#[test]
fn test_one_or_more() {
  let mut cursor = Cursor::new("aaab", 0, None);
  let result = Parser::new().Letters(&mut cursor).unwrap().unwrap();
  assert_eq!(result.value, vec!["a", "a", "a"]);
  assert_eq!(result.end_cursor.location(), 3);
  let mut cursor = Cursor::new("b", 0, None);
  assert!(Parser::new().Letters(&mut cursor).unwrap().is_none());
}

#[test]
fn test_bounded_repetition() {
  let mut parser = Parser::new();
  let mut cursor = Cursor::new("a", 0, None);
  assert!(parser.Bounded(&mut cursor).unwrap().is_none());
  assert_eq!(cursor.location(), 0);
  let mut cursor = Cursor::new("aaaa", 0, None);
  let result = parser.Bounded(&mut cursor).unwrap().unwrap();
  assert_eq!(result.value.len(), 3);
  assert_eq!(cursor.location(), 3);
}

#[test]
fn test_optional() {
  assert_eq!(run(Parser::MaybeA, "b").0.unwrap().value, "b");
  assert_eq!(run(Parser::MaybeA, "ab").0.unwrap().value, "ab");
  assert!(run(Parser::MaybeA, "aab").0.is_none());
}

#[test]
fn test_not_predicate() {
  let (result, location) = run(Parser::NotA, "ba");
  assert_eq!(result.unwrap().value, "b");
  assert_eq!(location, 1);
  assert!(fails(Parser::NotA, "ab"));
}

#[test]
fn test_and_predicate() {
  let (result, location) = run(Parser::PeekA, "ab");
  assert_eq!(result.unwrap().value, "a");
  assert_eq!(location, 1);
  assert!(run(Parser::PeekA, "ba").0.is_none());
}

#[test]
fn test_ordered_choice() {
  assert_eq!(run(Parser::Ordered, "ab").1, 2);
  assert_eq!(run(Parser::Ordered, "ac").1, 1);
  assert_eq!(run(Parser::Ordered, "b").0.unwrap().value, "b");
  assert!(fails(Parser::Ordered, "c"));
}

#[test]
fn test_choice_skips_later_alternatives() {
  probes::reset();
  assert_eq!(run(Parser::Side, "a").0.unwrap().value, "a");
  assert_eq!(probes::runs("alt_a"), 1);
  assert_eq!(probes::runs("alt_b"), 0);
  probes::reset();
  assert!(fails(Parser::Side, "b"));
  assert_eq!(probes::runs("alt_a"), 1);
  assert_eq!(probes::runs("alt_b"), 1);
}

#[test]
fn test_type_flows_through_rule_chains() {
  let mut cursor = Cursor::new("xxy", 0, None);
  let result: ParseResult<usize> = Parser::new().Top(&mut cursor).unwrap().unwrap();
  assert_eq!(result.value, 2);
  assert_eq!(cursor.location(), 2);
}

#[test]
fn test_literal_ignore_case() {
  assert_eq!(run(Parser::Keyword, "SeLeCt *").0.unwrap().value, "SeLeCt");
  assert!(run(Parser::Keyword, "sel").0.is_none());
}

#[test]
fn test_character_classes() {
  let mut cursor = Cursor::new("AbCd", 0, None);
  let result = Parser::new().Abc(&mut cursor).unwrap().unwrap();
  assert_eq!(result.value, vec!["A", "b", "C"]);
  assert_eq!(run(Parser::NoDigit, "x1").0.unwrap().value, "x");
  assert!(fails(Parser::NoDigit, "1x"));
  assert!(fails(Parser::NoDigit, ""));
  let (greek, location) = run(Parser::Greek, "βeta");
  assert_eq!(greek.unwrap().value, "β");
  assert_eq!(location, 2);
}
