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

/// Diagnostic raised by a generated parser, either because the start rule did not match or because an `#error` action was reached.
/// The cursor at which the parser stopped is kept for error reporting.
#[derive(Debug, thiserror::Error)]
#[error("{}:{}: {message}", .cursor.line(), .cursor.column())]
pub struct FormatError
{
  message: String,
  cursor: Cursor
}

impl FormatError
{
  pub fn new(message: impl Into<String>, cursor: Cursor) -> FormatError {
    FormatError {
      message: message.into(),
      cursor
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn cursor(&self) -> &Cursor {
    &self.cursor
  }

  /// Byte offset at which the parser stopped.
  pub fn location(&self) -> usize {
    self.cursor.location()
  }
}

#[cfg(test)]
mod test
{
  use super::*;

  #[test]
  fn test_display_reports_position() {
    let cursor = Cursor::new("a\nbc", 0, None).advance(3);
    let err = FormatError::new("Failed to parse 'Start'.", cursor);
    assert_eq!(err.to_string(), "2:2: Failed to parse 'Start'.");
    assert_eq!(err.location(), 3);
    assert_eq!(err.message(), "Failed to parse 'Start'.");
  }
}
