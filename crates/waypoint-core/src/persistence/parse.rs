//! Line grammar for the graph text format
//!
//! ```text
//! ID: <uint> Val: <value> Edges: (<neighborId>, <neighborValue>, <weight>) ...
//! ```
//!
//! Values are written with `Display` and read back with `FromStr`. A value
//! may contain commas as long as they sit inside brackets (`{1, 0}`), since
//! edge tuples are split on top-level commas only.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, Weight};

static LINE_RE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

fn line_regex() -> Result<&'static Regex> {
    LINE_RE
        .get_or_init(|| Regex::new(r"^\s*ID:\s*(\S+)\s+Val:\s*(.*?)\s+Edges:(.*)$"))
        .as_ref()
        .map_err(|e| GraphError::Other(format!("failed to compile line grammar: {}", e)))
}

/// One neighbor tuple from a line
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord<T> {
    pub target: NodeId,
    pub value: T,
    pub weight: Weight,
}

/// A fully parsed line
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord<T> {
    pub line: usize,
    pub id: NodeId,
    pub value: T,
    pub edges: Vec<EdgeRecord<T>>,
}

/// Parse one line of the text format. `line` is 1-based and only used for
/// error reporting.
pub fn parse_line<T>(line: usize, text: &str) -> Result<LineRecord<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let caps = line_regex()?
        .captures(text)
        .ok_or_else(|| GraphError::parse(line, "expected 'ID: <id> Val: <value> Edges: ...'"))?;

    let id = parse_id(line, &caps[1])?;
    let value = parse_value(line, &caps[2])?;
    let edges = split_tuples(line, &caps[3])?
        .into_iter()
        .map(|tuple| parse_edge(line, tuple))
        .collect::<Result<Vec<_>>>()?;

    Ok(LineRecord {
        line,
        id,
        value,
        edges,
    })
}

fn parse_id(line: usize, text: &str) -> Result<NodeId> {
    text.trim()
        .parse::<NodeId>()
        .map_err(|e| GraphError::parse(line, format!("invalid node id '{}': {}", text.trim(), e)))
}

fn parse_value<T>(line: usize, text: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| GraphError::parse(line, format!("invalid value '{}': {}", text.trim(), e)))
}

fn parse_weight(line: usize, text: &str) -> Result<Weight> {
    text.trim()
        .parse::<Weight>()
        .map_err(|e| GraphError::parse(line, format!("invalid weight '{}': {}", text.trim(), e)))
}

fn parse_edge<T>(line: usize, tuple: &str) -> Result<EdgeRecord<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let fields = split_top_level(tuple, ',');
    let [target, value, weight] = fields.as_slice() else {
        return Err(GraphError::parse(
            line,
            format!(
                "edge tuple '({})' has {} field(s), expected 3",
                tuple,
                fields.len()
            ),
        ));
    };

    Ok(EdgeRecord {
        target: parse_id(line, target)?,
        value: parse_value(line, value)?,
        weight: parse_weight(line, weight)?,
    })
}

/// Extract the contents of each `( ... )` group, honoring nested brackets
fn split_tuples(line: usize, text: &str) -> Result<Vec<&str>> {
    let mut tuples = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        if !rest.starts_with('(') {
            return Err(GraphError::parse(
                line,
                format!("expected '(' before '{}'", rest),
            ));
        }

        let close = matching_paren(rest)
            .ok_or_else(|| GraphError::parse(line, "unterminated edge tuple"))?;
        tuples.push(&rest[1..close]);
        rest = rest[close + 1..].trim_start();
    }

    Ok(tuples)
}

/// Byte index of the `)` closing the `(` at the start of `text`
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return (ch == ')').then_some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match ch {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&text[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}
