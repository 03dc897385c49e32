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

use crate::cursor::Cursor;
use std::ops::Range;

/// A successful match: the cursors before and after the match, and the value it produced.
/// A failed match is represented by the absence of a `ParseResult`.
#[derive(Clone, Debug)]
pub struct ParseResult<T>
{
  pub start_cursor: Cursor,
  pub end_cursor: Cursor,
  pub value: T
}

impl<T> ParseResult<T>
{
  #[inline]
  pub fn new(start_cursor: Cursor, end_cursor: Cursor, value: T) -> ParseResult<T> {
    ParseResult {
      start_cursor,
      end_cursor,
      value
    }
  }

  /// Byte range of the subject covered by the match.
  pub fn span(&self) -> Range<usize> {
    self.start_cursor.location()..self.end_cursor.location()
  }

  /// The matched text.
  pub fn text(&self) -> &str {
    &self.start_cursor.subject()[self.span()]
  }

  #[inline]
  pub fn map<U, F>(self, op: F) -> ParseResult<U> where
   F: FnOnce(T) -> U
  {
    ParseResult {
      start_cursor: self.start_cursor,
      end_cursor: self.end_cursor,
      value: op(self.value)
    }
  }
}

#[cfg(test)]
mod test
{
  use super::*;

  #[test]
  fn test_span_and_text() {
    let start = Cursor::new("let x", 0, None);
    let end = start.advance(3);
    let result = ParseResult::new(start, end, 3usize);
    assert_eq!(result.span(), 0..3);
    assert_eq!(result.text(), "let");
    assert_eq!(result.map(|len| len * 2).value, 6);
  }
}
