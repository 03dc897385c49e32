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

//! A cursor is an immutable snapshot of the parsing position. Advancing a cursor yields a new cursor, so backtracking is just a matter of keeping the old value around.

use std::any::Any;
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::{Debug, Error, Formatter};
use std::rc::Rc;

type StateMap = HashMap<String, Rc<dyn Any>>;

/// Position in the subject together with the custom state built by the state actions of the grammar.
/// Two cursors at the same location share a `state_key` only if they carry the same state.
#[derive(Clone)]
pub struct Cursor
{
  subject: Rc<str>,
  file_name: Option<Rc<str>>,
  location: usize,
  state: Rc<StateMap>,
  state_key: u64,
  key_source: Rc<Cell<u64>>
}

impl Cursor
{
  /// `location` is a byte offset into `subject` and must lie on a character boundary.
  pub fn new(subject: &str, location: usize, file_name: Option<&str>) -> Cursor {
    assert!(subject.is_char_boundary(location),
      "A cursor must be created on a character boundary of the subject.");
    Cursor {
      subject: Rc::from(subject),
      file_name: file_name.map(Rc::from),
      location,
      state: Rc::new(HashMap::new()),
      state_key: 0,
      key_source: Rc::new(Cell::new(0))
    }
  }

  pub fn subject(&self) -> &str {
    &self.subject
  }

  pub fn file_name(&self) -> Option<&str> {
    self.file_name.as_deref()
  }

  pub fn location(&self) -> usize {
    self.location
  }

  /// Fingerprint of the custom state, used as a component of memoization keys.
  pub fn state_key(&self) -> u64 {
    self.state_key
  }

  /// The part of the subject that has not been consumed yet.
  pub fn remainder(&self) -> &str {
    &self.subject[self.location..]
  }

  /// Moves forward by `count` bytes.
  pub fn advance(&self, count: usize) -> Cursor {
    let location = self.location + count;
    assert!(self.subject.is_char_boundary(location),
      "Cannot advance the cursor inside a character or past the end of the subject.");
    Cursor {
      location,
      ..self.clone()
    }
  }

  /// 1-based line of the cursor.
  pub fn line(&self) -> usize {
    self.subject[..self.location].matches('\n').count() + 1
  }

  /// 1-based column of the cursor, counted in characters.
  pub fn column(&self) -> usize {
    let consumed = &self.subject[..self.location];
    let line_start = consumed.rfind('\n').map_or(0, |idx| idx + 1);
    consumed[line_start..].chars().count() + 1
  }

  pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
    self.state.get(key).and_then(|value| value.downcast_ref::<T>())
  }

  /// Opens a mutable view on the position and the custom state. The view must be turned back into a cursor with `MutableCursor::freeze`.
  pub fn to_mutable(&self) -> MutableCursor {
    MutableCursor {
      base: self.clone(),
      location: self.location,
      state: (*self.state).clone(),
      changed: false
    }
  }
}

impl Debug for Cursor
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.debug_struct("Cursor")
      .field("file_name", &self.file_name())
      .field("location", &self.location)
      .field("line", &self.line())
      .field("column", &self.column())
      .field("state_key", &self.state_key)
      .finish()
  }
}

/// The view of a cursor handed to state actions.
pub struct MutableCursor
{
  base: Cursor,
  location: usize,
  state: StateMap,
  changed: bool
}

impl MutableCursor
{
  pub fn subject(&self) -> &str {
    self.base.subject()
  }

  pub fn location(&self) -> usize {
    self.location
  }

  pub fn set_location(&mut self, location: usize) {
    assert!(self.base.subject.is_char_boundary(location),
      "A cursor must stay on a character boundary of the subject.");
    self.location = location;
  }

  pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
    self.state.get(key).and_then(|value| value.downcast_ref::<T>())
  }

  pub fn set<T: Any>(&mut self, key: &str, value: T) {
    self.state.insert(key.to_string(), Rc::new(value));
    self.changed = true;
  }

  pub fn remove(&mut self, key: &str) -> bool {
    let removed = self.state.remove(key).is_some();
    self.changed |= removed;
    removed
  }

  /// Turns the view back into an immutable cursor. A fresh state fingerprint is allocated only if the state was modified.
  pub fn freeze(self) -> Cursor {
    let mut cursor = self.base;
    cursor.location = self.location;
    if self.changed {
      let key = cursor.key_source.get() + 1;
      cursor.key_source.set(key);
      cursor.state = Rc::new(self.state);
      cursor.state_key = key;
    }
    cursor
  }
}

#[cfg(test)]
mod test
{
  use super::*;

  #[test]
  fn test_advance_keeps_original() {
    let start = Cursor::new("héllo", 0, None);
    let next = start.advance(1).advance(2);
    assert_eq!(start.location(), 0);
    assert_eq!(next.location(), 3);
    assert_eq!(next.remainder(), "llo");
  }

  #[test]
  #[should_panic]
  fn test_advance_inside_char() {
    Cursor::new("é", 0, None).advance(1);
  }

  #[test]
  fn test_line_and_column() {
    let cursor = Cursor::new("ab\ncdé\nf", 0, Some("input.txt"));
    assert_eq!((cursor.line(), cursor.column()), (1, 1));
    let cursor = cursor.advance(7);
    assert_eq!((cursor.line(), cursor.column()), (2, 4));
    assert_eq!(cursor.file_name(), Some("input.txt"));
  }

  #[test]
  fn test_unchanged_state_keeps_key() {
    let cursor = Cursor::new("abc", 0, None);
    let mut state = cursor.to_mutable();
    state.set_location(2);
    let frozen = state.freeze();
    assert_eq!(frozen.state_key(), cursor.state_key());
    assert_eq!(frozen.location(), 2);
  }

  #[test]
  fn test_changed_state_gets_fresh_key() {
    let cursor = Cursor::new("abc", 0, None);
    let mut state = cursor.to_mutable();
    state.set("depth", 3usize);
    let first = state.freeze();
    let mut state = cursor.to_mutable();
    state.set("depth", 3usize);
    let second = state.freeze();
    assert_ne!(first.state_key(), cursor.state_key());
    assert_ne!(first.state_key(), second.state_key());
    assert_eq!(first.get::<usize>("depth"), Some(&3));
    assert_eq!(cursor.get::<usize>("depth"), None);
  }

  #[test]
  fn test_remove_state() {
    let mut state = Cursor::new("", 0, None).to_mutable();
    state.set("flag", true);
    assert!(state.remove("flag"));
    assert!(!state.remove("flag"));
    assert_eq!(state.get::<bool>("flag"), None);
  }
}
