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

//! Runtime support of the parsers generated by Larch. A generated parser threads a `Cursor` through its rule methods, wraps each successful match in a `ParseResult` and reports failures of the start rule or of an `#error` action with a `FormatError`.

mod cursor;
mod parse_result;
mod format_error;
mod memo_key;

pub use crate::cursor::*;
pub use crate::parse_result::*;
pub use crate::format_error::*;
pub use crate::memo_key::*;
