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

//! Rule names, bindings and setting values are emitted as Rust identifiers. Names clashing with a keyword are escaped.

/// Keywords that cannot be written as raw identifiers.
static NOT_RAW_KEYWORDS: [&str; 5] = ["self", "Self", "super", "crate", "_"];

/// Keywords of the 2018 and later editions, plus the reserved ones. `syn` parses identifiers with the 2015 rules and accepts them.
static EDITION_KEYWORDS: [&str; 17] = [
  "async", "await", "dyn", "try", "gen", "abstract", "become", "box", "do", "final",
  "macro", "override", "priv", "typeof", "unsized", "virtual", "yield"
];

pub fn escape_name(name: &str) -> String {
  if is_plain_identifier(name) {
    name.to_string()
  }
  else if NOT_RAW_KEYWORDS.contains(&name) {
    format!("{}_", name)
  }
  else {
    let raw = format!("r#{}", name);
    if is_plain_identifier(&raw) {
      raw
    }
    else {
      log::warn!("`{}` is not a valid Rust identifier, it is emitted unchanged.", name);
      name.to_string()
    }
  }
}

fn is_plain_identifier(name: &str) -> bool {
  !EDITION_KEYWORDS.contains(&name) && syn::parse_str::<syn::Ident>(name).is_ok()
}
