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

use larch_grammars::{keyed_state, memo, memo_failure, probes};
use std::panic::{self, AssertUnwindSafe};

#[test]
fn test_cached_success() {
  probes::reset();
  assert_eq!(memo::Parser::new().parse("ay", None).unwrap(), "ay");
  assert_eq!(probes::runs("item"), 1);
}

#[test]
fn test_cached_failure() {
  probes::reset();
  assert_eq!(memo_failure::Parser::new().parse("z", None).unwrap(), "z");
  assert_eq!(probes::runs("missing"), 1);
}

#[test]
fn test_storage_is_cleared_between_parses() {
  probes::reset();
  let mut parser = memo::Parser::new();
  parser.parse("ax", None).unwrap();
  parser.parse("ax", None).unwrap();
  assert_eq!(probes::runs("item"), 2);
}

#[test]
fn test_parser_is_reusable_after_a_panic() {
  probes::reset();
  let mut parser = memo::Parser::new();
  let unwound = panic::catch_unwind(AssertUnwindSafe(|| parser.parse("!", None)));
  assert!(unwound.is_err());
  assert_eq!(parser.parse("ay", None).unwrap(), "ay");
  assert_eq!(probes::runs("item"), 2);
}

#[test]
fn test_state_change_misses_the_cache() {
  probes::reset();
  assert_eq!(keyed_state::Parser::new().parse("ay", None).unwrap(), "ay");
  assert_eq!(probes::runs("probe"), 2);
  probes::reset();
  assert_eq!(keyed_state::Parser::new().parse("ax", None).unwrap(), "ax");
  assert_eq!(probes::runs("probe"), 1);
}
