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

//! Parsers generated from the test grammars of `build.rs`.

pub mod probes
{
  //! Counters incremented by state code of the grammars, to observe how many times a rule body runs.

  use std::cell::RefCell;
  use std::collections::HashMap;

  thread_local! {
    static RUNS: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());
  }

  pub fn record(probe: &str) {
    RUNS.with(|runs| *runs.borrow_mut().entry(probe.to_string()).or_insert(0) += 1);
  }

  pub fn runs(probe: &str) -> usize {
    RUNS.with(|runs| runs.borrow().get(probe).copied().unwrap_or(0))
  }

  pub fn reset() {
    RUNS.with(|runs| runs.borrow_mut().clear());
  }
}

include!(concat!(env!("OUT_DIR"), "/combinators.rs"));
include!(concat!(env!("OUT_DIR"), "/calculator.rs"));
include!(concat!(env!("OUT_DIR"), "/memo.rs"));
include!(concat!(env!("OUT_DIR"), "/memo_failure.rs"));
include!(concat!(env!("OUT_DIR"), "/keyed_state.rs"));
include!(concat!(env!("OUT_DIR"), "/state.rs"));
include!(concat!(env!("OUT_DIR"), "/keywords.rs"));
