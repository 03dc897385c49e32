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

//! Settings of a grammar shaping the generated module. Single-valued settings keep their first declaration, multi-valued ones keep every declaration in order.

use crate::ast::{Fragment, Grammar};

pub const NAMESPACE: &str = "namespace";
pub const CLASSNAME: &str = "classname";
pub const ACCESSIBILITY: &str = "accessibility";
pub const USING: &str = "using";
pub const MEMBERS: &str = "members";

pub const DEFAULT_NAMESPACE: &str = "parsers";
pub const DEFAULT_CLASSNAME: &str = "Parser";
pub const DEFAULT_ACCESSIBILITY: &str = "pub";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings
{
  pub namespace: Fragment,
  pub classname: Fragment,
  pub accessibility: Fragment,
  pub usings: Vec<Fragment>,
  pub members: Vec<Fragment>
}

impl Settings
{
  pub fn from_grammar(grammar: &Grammar) -> Settings {
    Settings {
      namespace: first_value(grammar, NAMESPACE, DEFAULT_NAMESPACE),
      classname: first_value(grammar, CLASSNAME, DEFAULT_CLASSNAME),
      accessibility: first_value(grammar, ACCESSIBILITY, DEFAULT_ACCESSIBILITY),
      usings: grammar.settings_named(USING).cloned().collect(),
      members: grammar.settings_named(MEMBERS).cloned().collect()
    }
  }
}

fn first_value(grammar: &Grammar, key: &str, default: &str) -> Fragment {
  let mut values = grammar.settings_named(key);
  match values.next() {
    Some(value) => {
      let ignored = values.count();
      if ignored > 0 {
        log::warn!("Setting `{}` is declared {} more time(s), only its first value `{}` is used.",
          key, ignored, value);
      }
      value.clone()
    }
    None => Fragment::text(default)
  }
}

#[cfg(test)]
mod test
{
  use super::*;
  use crate::ast::*;

  fn grammar() -> Grammar {
    Grammar::new(vec![Rule::new("Start", Expression::Wildcard)])
  }

  #[test]
  fn test_defaults() {
    let settings = Settings::from_grammar(&grammar());
    assert_eq!(settings.namespace, Fragment::text("parsers"));
    assert_eq!(settings.classname, Fragment::text("Parser"));
    assert_eq!(settings.accessibility, Fragment::text("pub"));
    assert!(settings.usings.is_empty());
    assert!(settings.members.is_empty());
  }

  #[test]
  fn test_first_value_wins() {
    let grammar = grammar()
      .with_setting(CLASSNAME, Fragment::text("Calculator"))
      .with_setting(CLASSNAME, Fragment::text("Ignored"));
    let settings = Settings::from_grammar(&grammar);
    assert_eq!(settings.classname, Fragment::text("Calculator"));
  }

  #[test]
  fn test_multi_valued_settings_keep_order() {
    let grammar = grammar()
      .with_setting(USING, Fragment::text("std::fmt"))
      .with_setting(MEMBERS, Fragment::text("fn a() {}"))
      .with_setting(USING, Fragment::text("std::rc::Rc"));
    let settings = Settings::from_grammar(&grammar);
    assert_eq!(settings.usings,
      vec![Fragment::text("std::fmt"), Fragment::text("std::rc::Rc")]);
    assert_eq!(settings.members.len(), 1);
  }
}
