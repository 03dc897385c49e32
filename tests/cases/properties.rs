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

use super::*;
use larch::ast::Expression as E;
use proptest::prelude::*;

fn arb_expr() -> impl Strategy<Value = Expression> {
  let leaf = prop_oneof![
    "[a-z\"'\\\\\n\u{e9}]{0,4}".prop_map(|text| E::literal(&text)),
    "[A-Z]{1,3}".prop_map(|text| E::literal_ignore_case(&text)),
    Just(E::Wildcard),
    (any::<char>(), any::<char>(), any::<bool>(), any::<bool>()).prop_map(|(a, b, negated, ignore_case)|
      E::class(vec![CharacterRange::new(a.min(b), a.max(b))], negated, ignore_case)),
    Just(E::name("Leaf")),
    Just(E::AndCode(CodeSpan::new("state.location() > 0", at(1, 1))))
  ];
  leaf.prop_recursive(4, 32, 4, |inner| prop_oneof![
    prop::collection::vec(inner.clone(), 1..4).prop_map(E::sequence),
    prop::collection::vec(inner.clone(), 1..4).prop_map(E::choice),
    (inner.clone(), 0usize..3, prop::option::of(3usize..5))
      .prop_map(|(expr, min, max)| E::repetition(expr, min, max)),
    inner.clone().prop_map(E::not),
    inner.clone().prop_map(E::and),
    inner.prop_map(|expr| E::prefixed("bound", expr))
  ])
}

fn grammar(expr: Expression, memoize: bool) -> Grammar {
  let start = Rule::new("Start", expr);
  let leaf = Rule::new("Leaf", E::literal("leaf"));
  Grammar::new(vec![if memoize { start.with_flag(MEMOIZE_FLAG) } else { start }, leaf])
}

proptest! {
  #[test]
  fn generated_code_is_valid_rust(expr in arb_expr(), memoize in any::<bool>()) {
    let code = generated_code(&grammar(expr, memoize));
    prop_assert_eq!(code.contains("fn storage_lookup"), memoize);
  }

  #[test]
  fn generation_is_deterministic(expr in arb_expr()) {
    let grammar = grammar(expr, false);
    prop_assert_eq!(generated_code(&grammar), generated_code(&grammar));
  }
}
