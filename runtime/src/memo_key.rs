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

/// Key of the memoization table of a generated parser: a rule, the state fingerprint of the cursor and its location.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MemoKey
{
  rule: &'static str,
  state_key: u64,
  location: usize
}

impl MemoKey
{
  #[inline]
  pub fn new(rule: &'static str, state_key: u64, location: usize) -> MemoKey {
    MemoKey {
      rule,
      state_key,
      location
    }
  }

  pub fn rule(&self) -> &'static str {
    self.rule
  }

  pub fn state_key(&self) -> u64 {
    self.state_key
  }

  pub fn location(&self) -> usize {
    self.location
  }
}
