//! Dotted paths into JSON trees and a generic "set at path".
//!
//! Paths use the familiar `a.b[0].c` form. Bare numeric segments (`a.0`) are
//! keys that may also address array elements. When an intermediate value is
//! missing or not a container it is replaced with an array if the next
//! segment is an index, otherwise with an object. Array indices are capped at
//! [`MAX_INDEX`].

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::PathError;

/// Largest array index a path may address.
pub const MAX_INDEX: usize = 1024;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object key (may still address an array if it is index-shaped).
    Key(String),
    /// Bracketed array index.
    Index(usize),
}

impl Segment {
    /// The array index this segment addresses, if any.
    ///
    /// Keys count as indices only in canonical form (`0`, `12`, never `01`)
    /// and only up to [`MAX_INDEX`].
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Key(key) => {
                let canonical = key == "0"
                    || (!key.starts_with('0') && key.chars().all(|c| c.is_ascii_digit()));
                if canonical && !key.is_empty() {
                    key.parse().ok().filter(|index| *index <= MAX_INDEX)
                } else {
                    None
                }
            }
        }
    }

    /// The object key this segment addresses.
    pub fn key(&self) -> String {
        match self {
            Segment::Key(key) => key.clone(),
            Segment::Index(index) => index.to_string(),
        }
    }
}

/// A parsed override path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    raw: String,
    segments: Vec<Segment>,
}

impl Path {
    /// Parse a path string.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        raw.parse()
    }

    /// The parsed segments, outermost first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The first segment.
    pub fn root(&self) -> &Segment {
        // parsing guarantees at least one segment
        &self.segments[0]
    }

    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut after_bracket = false;
        let mut chars = raw.chars();

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    if current.is_empty() && !after_bracket {
                        return Err(PathError::EmptySegment {
                            path: raw.to_string(),
                            position: segments.len(),
                        });
                    }
                    if !current.is_empty() {
                        segments.push(Segment::Key(std::mem::take(&mut current)));
                    }
                    after_bracket = false;
                }
                '[' => {
                    if !current.is_empty() {
                        segments.push(Segment::Key(std::mem::take(&mut current)));
                    }
                    let mut inner = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == ']' {
                            closed = true;
                            break;
                        }
                        inner.push(c);
                    }
                    if !closed {
                        return Err(PathError::UnclosedBracket(raw.to_string()));
                    }
                    segments.push(parse_bracket(raw, &inner)?);
                    after_bracket = true;
                }
                _ => current.push(c),
            }
        }

        if !current.is_empty() {
            segments.push(Segment::Key(current));
        } else if !after_bracket {
            return Err(PathError::EmptySegment {
                path: raw.to_string(),
                position: segments.len(),
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }
}

fn parse_bracket(raw: &str, inner: &str) -> Result<Segment, PathError> {
    let quoted = inner.len() >= 2
        && ((inner.starts_with('"') && inner.ends_with('"'))
            || (inner.starts_with('\'') && inner.ends_with('\'')));
    if quoted {
        return Ok(Segment::Key(inner[1..inner.len() - 1].to_string()));
    }
    let index: usize = inner.trim().parse().map_err(|_| PathError::InvalidIndex {
        path: raw.to_string(),
        index: inner.to_string(),
    })?;
    if index > MAX_INDEX {
        return Err(PathError::IndexTooLarge {
            path: raw.to_string(),
            index,
            max: MAX_INDEX,
        });
    }
    Ok(Segment::Index(index))
}

/// Set `value` at `path` inside `root`, creating intermediate containers.
///
/// Arrays grown to reach an index are padded with empty values of the same
/// shape as the one written at that index (`{}`, `[]` or `null`), so the
/// padding deserializes wherever the written element does. The tree is left
/// untouched when a string key addresses an array or an index is past
/// [`MAX_INDEX`].
pub fn set_at_path(root: &mut Value, path: &Path, value: Value) {
    let segments = path.segments();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut cursor = root;
    for (i, segment) in parents.iter().enumerate() {
        let next_is_index = segments[i + 1].as_index().is_some();
        let fill = if next_is_index {
            Value::Array(Vec::new())
        } else {
            Value::Object(Map::new())
        };
        let Some(child) = child_mut(cursor, segment, &fill) else {
            log::warn!("Path '{}' cannot address segment '{}'", path, segment.key());
            return;
        };
        if !(child.is_object() || child.is_array()) {
            *child = fill;
        }
        cursor = child;
    }

    let fill = match &value {
        Value::Object(_) => Value::Object(Map::new()),
        Value::Array(_) => Value::Array(Vec::new()),
        _ => Value::Null,
    };
    match child_mut(cursor, last, &fill) {
        Some(slot) => *slot = value,
        None => log::warn!("Path '{}' cannot address segment '{}'", path, last.key()),
    }
}

fn child_mut<'a>(
    container: &'a mut Value,
    segment: &Segment,
    fill: &Value,
) -> Option<&'a mut Value> {
    match (container, segment.as_index()) {
        (Value::Array(items), Some(index)) => {
            if index > MAX_INDEX {
                return None;
            }
            let len = index.checked_add(1)?;
            if items.len() < len {
                items.resize(len, fill.clone());
            }
            items.get_mut(index)
        }
        (Value::Array(_), None) => None,
        (Value::Object(map), _) => Some(map.entry(segment.key()).or_insert(Value::Null)),
        (other, _) => {
            *other = Value::Object(Map::new());
            other
                .as_object_mut()
                .map(|map| map.entry(segment.key()).or_insert(Value::Null))
        }
    }
}
