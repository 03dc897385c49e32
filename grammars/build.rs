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

//! Generates the parsers of the test grammars into `OUT_DIR`.

use larch::ast::*;
use larch::ast::Expression as E;
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
  println!("cargo:rerun-if-changed=build.rs");
  let out_dir = env::var("OUT_DIR")?;
  let grammars = vec![
    ("combinators", combinators()),
    ("calculator", calculator()),
    ("memo", memo()),
    ("memo_failure", memo_failure()),
    ("keyed_state", keyed_state()),
    ("state", state()),
    ("keywords", keywords())
  ];
  for (name, grammar) in grammars {
    let result = larch::compile(&grammar)?;
    let code = result.code()
      .ok_or_else(|| format!("No code generated for the grammar `{}`: {:?}", name, result.diagnostics()))?;
    fs::write(Path::new(&out_dir).join(format!("{}.rs", name)), code)?;
  }
  Ok(())
}

fn at(line: usize, column: usize) -> Location {
  Location::new("grammars/tests.peg", line, column)
}

fn code(kind: CodeKind, text: &str, line: usize, column: usize) -> Expression {
  E::code(kind, CodeSpan::new(text, at(line, column)))
}

fn public(name: &str, expr: Expression) -> Rule {
  Rule::new(name, expr).with_flag(PUBLIC_FLAG)
}

fn combinators() -> Grammar {
  Grammar::new(vec![
    public("Start", E::sequence(vec![E::literal("a"), E::literal("b")])),
    public("Letters", E::one_or_more(E::literal("a"))),
    public("Bounded", E::repetition(E::literal("a"), 2, Some(3))),
    public("MaybeA", E::sequence(vec![E::optional(E::literal("a")), E::literal("b")])),
    public("NotA", E::sequence(vec![E::not(E::literal("a")), E::Wildcard])),
    public("PeekA", E::sequence(vec![E::and(E::literal("a")), E::Wildcard])),
    public("Ordered", E::choice(vec![E::literal("ab"), E::literal("a"), E::literal("b")])),
    public("Keyword", E::literal_ignore_case("select")),
    public("Abc", E::one_or_more(E::class(vec![CharacterRange::new('a', 'c')], false, true))),
    public("NoDigit", E::class(vec![CharacterRange::new('0', '9')], true, false)),
    public("Greek", E::class(vec![CharacterRange::new('α', 'ω')], false, false)),
    public("Side", E::choice(vec![
      E::sequence(vec![counted("alt_a", 12), E::literal("a")]),
      E::sequence(vec![counted("alt_b", 13), E::literal("a")])
    ])),
    public("Top", E::name("Mid")),
    Rule::new("Mid", E::name("Leaf")),
    Rule::new("Leaf", E::typed(Fragment::text("usize"), E::sequence(vec![
      E::prefixed("xs", E::one_or_more(E::literal("x"))),
      code(CodeKind::Result, "xs.len()", 16, 28)
    ])))
  ])
  .with_setting("namespace", Fragment::text("combinators"))
  .with_setting("using", Fragment::text("crate::probes"))
}

/// Sum = first:(<i32> Number) rest:Tail* { ... }
fn calculator() -> Grammar {
  let number = E::typed(Fragment::code("i32", at(3, 10)), E::choice(vec![
    E::sequence(vec![
      E::prefixed("digits", E::one_or_more(E::class(vec![CharacterRange::new('0', '9')], false, false))),
      code(CodeKind::Result, "digits.concat().parse::<i32>().unwrap_or(0)", 4, 28)
    ]),
    E::sequence(vec![
      E::literal("?"),
      code(CodeKind::Error, "format!(\"unknown number at {}\", state.location())", 5, 15)
    ])
  ]));
  Grammar::new(vec![
    public("Sum", E::typed(Fragment::text("i32"), E::sequence(vec![
      E::prefixed("first", E::typed(Fragment::code(" i32 ", at(1, 22)), E::name("Number"))),
      E::prefixed("rest", E::zero_or_more(E::name("Tail"))),
      code(CodeKind::Result, "first + rest.iter().sum::<i32>()", 1, 52)
    ]))),
    Rule::new("Tail", E::typed(Fragment::text("i32"), E::sequence(vec![
      E::literal("+"),
      E::prefixed("n", E::name("Number")),
      code(CodeKind::Result, "n", 2, 26)
    ]))),
    Rule::new("Number", number)
  ])
  .with_setting("namespace", Fragment::text("calc"))
  .with_setting("classname", Fragment::text("Calculator"))
  .with_setting("members", Fragment::code("pub fn answer(&self) -> i32 {\n        42\n    }", at(7, 5)))
}

fn counted(probe: &str, line: usize) -> Expression {
  code(CodeKind::State, &format!("probes::record({:?})", probe), line, 10)
}

fn memo() -> Grammar {
  Grammar::new(vec![
    Rule::new("Start", E::choice(vec![
      E::sequence(vec![E::name("Item"), E::literal("x")]),
      E::sequence(vec![E::name("Item"), E::literal("y")]),
      E::sequence(vec![
        code(CodeKind::State, "if state.subject().starts_with('!') { panic!(\"unexpected bang\") }", 1, 40),
        E::literal("!")
      ])
    ])),
    Rule::new("Item", E::sequence(vec![counted("item", 2), E::literal("a")]))
      .with_flag(MEMOIZE_FLAG)
  ])
  .with_setting("namespace", Fragment::text("memo"))
  .with_setting("using", Fragment::text("crate::probes"))
}

fn memo_failure() -> Grammar {
  Grammar::new(vec![
    Rule::new("Start", E::choice(vec![
      E::sequence(vec![E::name("Missing"), E::literal("x")]),
      E::sequence(vec![E::name("Missing"), E::literal("y")]),
      E::literal("z")
    ])),
    Rule::new("Missing", E::sequence(vec![counted("missing", 2), E::literal("q")]))
      .with_flag(MEMOIZE_FLAG)
  ])
  .with_setting("namespace", Fragment::text("memo_failure"))
  .with_setting("using", Fragment::text("crate::probes"))
}

fn keyed_state() -> Grammar {
  Grammar::new(vec![
    Rule::new("Start", E::choice(vec![
      E::sequence(vec![E::name("Probe"), E::literal("x")]),
      E::sequence(vec![
        code(CodeKind::State, "state.set(\"depth\", 1usize)", 1, 30),
        E::name("Probe"),
        E::literal("y")
      ])
    ])),
    Rule::new("Probe", E::sequence(vec![counted("probe", 2), E::literal("a")]))
      .with_flag(MEMOIZE_FLAG)
  ])
  .with_setting("namespace", Fragment::text("keyed_state"))
  .with_setting("using", Fragment::code("crate::probes", at(8, 7)))
}

fn state() -> Grammar {
  let flag_is_set = "state.get::<bool>(\"flag\").copied().unwrap_or(false)";
  Grammar::new(vec![
    Rule::new("Start", E::sequence(vec![
      code(CodeKind::State, "state.set(\"flag\", true)", 1, 11),
      E::AndCode(CodeSpan::new(flag_is_set, at(1, 40))),
      E::literal("a")
    ])),
    public("Guarded", E::sequence(vec![
      E::AndCode(CodeSpan::new(flag_is_set, at(2, 13))),
      E::literal("a")
    ])),
    public("Unflagged", E::sequence(vec![
      E::NotCode(CodeSpan::new(flag_is_set, at(3, 15))),
      E::literal("a")
    ]))
  ])
  .with_setting("namespace", Fragment::text("state"))
}

/// Rule, binding and module names that are Rust keywords, from every edition.
fn keywords() -> Grammar {
  Grammar::new(vec![
    Rule::new("match", E::sequence(vec![E::name("type"), E::name("self")])),
    Rule::new("type", E::literal("t")),
    Rule::new("self", E::literal("s")),
    public("async", E::sequence(vec![E::prefixed("await", E::literal("a")), E::name("dyn")])),
    Rule::new("dyn", E::literal("d"))
  ])
  .with_setting("namespace", Fragment::text("type"))
}
