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

//! Support methods written once in each generated parser.

const MATCHERS: &str = r#"fn parse_literal(&self, cursor: &mut Cursor, literal: &str, ignore_case: bool) -> Option<ParseResult<String>> {
    let matched = match cursor.remainder().get(..literal.len()) {
        Some(prefix) if ignore_case => prefix.to_lowercase() == literal.to_lowercase(),
        Some(prefix) => prefix == literal,
        None => false,
    };
    if !matched {
        return None;
    }
    let value = cursor.remainder()[..literal.len()].to_string();
    let end_cursor = cursor.advance(literal.len());
    let result = ParseResult::new(cursor.clone(), end_cursor.clone(), value);
    *cursor = end_cursor;
    Some(result)
}

fn parse_class(&self, cursor: &mut Cursor, bounds: &str, negated: bool, ignore_case: bool) -> Option<ParseResult<String>> {
    let c = cursor.remainder().chars().next()?;
    let bounds: Vec<char> = bounds.chars().collect();
    let in_ranges = |c: char| bounds.chunks(2).any(|range| range.len() == 2 && range[0] <= c && c <= range[1]);
    let mut matched = in_ranges(c);
    if !matched && ignore_case {
        matched = c.to_lowercase().chain(c.to_uppercase()).any(|variant| in_ranges(variant));
    }
    if matched == negated {
        return None;
    }
    let end_cursor = cursor.advance(c.len_utf8());
    let result = ParseResult::new(cursor.clone(), end_cursor.clone(), c.to_string());
    *cursor = end_cursor;
    Some(result)
}

fn parse_any(&self, cursor: &mut Cursor) -> Option<ParseResult<String>> {
    let c = cursor.remainder().chars().next()?;
    let end_cursor = cursor.advance(c.len_utf8());
    let result = ParseResult::new(cursor.clone(), end_cursor.clone(), c.to_string());
    *cursor = end_cursor;
    Some(result)
}

fn return_helper<T>(start_cursor: Cursor, end_cursor: Cursor, wrapped_code: impl FnOnce(&Cursor) -> T) -> ParseResult<T> {
    let value = wrapped_code(&end_cursor);
    ParseResult::new(start_cursor, end_cursor, value)
}

fn exception_helper<M: Into<String>>(cursor: &Cursor, wrapped_code: impl FnOnce(&Cursor) -> M) -> FormatError {
    FormatError::new(wrapped_code(cursor), cursor.clone())
}

fn value_or_default<T: Clone + Default>(result: &Option<ParseResult<T>>) -> T {
    result.as_ref().map(|result| result.value.clone()).unwrap_or_default()
}"#;

const STORAGE: &str = r#"fn storage_lookup<T: Clone + 'static>(&self, key: &MemoKey) -> Option<Option<ParseResult<T>>> {
    let cached = self.storage.as_ref()?.get(key)?;
    cached.downcast_ref::<Option<ParseResult<T>>>().cloned()
}

fn storage_store<T: 'static>(&mut self, key: MemoKey, result: Option<ParseResult<T>>) {
    if let Some(storage) = self.storage.as_mut() {
        storage.insert(key, Box::new(result));
    }
}"#;

/// Helper methods of the parser, the memoization storage ones only if `memoize` is true.
pub fn helper_methods(memoize: bool) -> String {
  if memoize {
    format!("{}\n\n{}", MATCHERS, STORAGE)
  }
  else {
    MATCHERS.to_string()
  }
}
