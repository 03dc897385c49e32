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

use std::collections::HashMap;

/// Prefixes of the counted names used in rule bodies.
static COUNTED_PREFIXES: [&str; 3] = ["r", "l", "start_cursor"];

/// Fixed local names of rule bodies.
static FIXED_LOCALS: [&str; 4] = ["cursor", "state", "storage_key", "cached"];

/// Whether a local of that name may be declared by the generated code of a rule, so that a grammar binding would shadow it.
pub fn is_generated_local(name: &str) -> bool {
  FIXED_LOCALS.contains(&name) || COUNTED_PREFIXES.iter().any(|prefix| {
    name.strip_prefix(prefix)
      .map_or(false, |counter| !counter.is_empty() && counter.bytes().all(|b| b.is_ascii_digit()))
  })
}

/// Hands out variable names made of a prefix and a counter. A new factory is used for each rule.
pub struct NameFactory
{
  counters: HashMap<String, usize>
}

impl NameFactory
{
  pub fn new() -> NameFactory {
    NameFactory {
      counters: HashMap::new()
    }
  }

  pub fn next_name(&mut self, prefix: &str) -> String {
    let counter = self.counters.entry(prefix.to_string()).or_insert(0);
    let name = format!("{}{}", prefix, counter);
    *counter += 1;
    name
  }
}
