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

/// Renders `input` as a Rust string literal.
pub fn to_literal(input: &str) -> String {
  let mut literal = String::with_capacity(input.len() + 2);
  literal.push('"');
  for c in input.chars() {
    match c {
      '\'' => literal.push_str("\\'"),
      '"' => literal.push_str("\\\""),
      '\\' => literal.push_str("\\\\"),
      '\0' => literal.push_str("\\0"),
      '\n' => literal.push_str("\\n"),
      '\r' => literal.push_str("\\r"),
      '\t' => literal.push_str("\\t"),
      ' '..='~' => literal.push(c),
      _ => literal.push_str(&format!("\\u{{{:x}}}", c as u32))
    }
  }
  literal.push('"');
  literal
}

#[cfg(test)]
mod test
{
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn test_escapes() {
    assert_eq!(to_literal("ab"), "\"ab\"");
    assert_eq!(to_literal("a\"b"), "\"a\\\"b\"");
    assert_eq!(to_literal("it's"), "\"it\\'s\"");
    assert_eq!(to_literal("\\\n\r\t\0"), "\"\\\\\\n\\r\\t\\0\"");
    assert_eq!(to_literal("\u{7f}é"), "\"\\u{7f}\\u{e9}\"");
    assert_eq!(to_literal(""), "\"\"");
  }

  proptest! {
    #[test]
    fn literal_denotes_its_input(input in any::<String>()) {
      let literal = to_literal(&input);
      prop_assert!(literal.chars().all(|c| (' '..='~').contains(&c)));
      let parsed: syn::LitStr = syn::parse_str(&literal).unwrap();
      prop_assert_eq!(parsed.value(), input);
    }
  }
}
