//! Interpolation template parser using winnow.
//!
//! Parses translated text into segments. Handles:
//! - Literal text
//! - Named placeholders: `{{name}}`, with optional inner whitespace
//! - Positional placeholders: `%s` and `%d`
//! - The `%%` escape
//!
//! Anything that is not a well-formed placeholder is literal text, so parsing
//! never fails.

use std::collections::HashMap;

use winnow::ascii::multispace0;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::types::Value;

/// A parsed piece of translated text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Segment {
    /// Text emitted as-is.
    Literal(String),
    /// `{{name}}`. `raw` is the source text, emitted when `name` is unbound.
    Named { name: String, raw: String },
    /// `%s` (`integer: false`) or `%d` (`integer: true`).
    Positional { integer: bool },
    /// `%%`.
    PercentEscape,
}

/// Translated text split into segments.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse text into segments. Always succeeds.
    pub(crate) fn parse(text: &str) -> Template {
        let mut remaining = text;
        let mut segments: Vec<Segment> = repeat(0.., segment)
            .parse_next(&mut remaining)
            .unwrap_or_default();
        if !remaining.is_empty() {
            segments.push(Segment::Literal(remaining.to_string()));
        }
        Template {
            segments: merge_literals(segments),
        }
    }

    #[cfg(test)]
    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitute named and, if `positional` is given, positional arguments.
    ///
    /// Unbound names and placeholders beyond the last positional argument are
    /// emitted verbatim. Without positional arguments, `%s`, `%d` and `%%`
    /// are left untouched.
    pub(crate) fn render(
        &self,
        named: &HashMap<String, Value>,
        positional: Option<&[Value]>,
    ) -> String {
        let mut out = String::new();
        let mut args = positional.map(<[Value]>::iter);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Named { name, raw } => match named.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => out.push_str(raw),
                },
                Segment::Positional { integer } => {
                    match args.as_mut().and_then(Iterator::next) {
                        Some(value) if *integer => out.push_str(&value.to_integer_string()),
                        Some(value) => out.push_str(&value.to_string()),
                        None if *integer => out.push_str("%d"),
                        None => out.push_str("%s"),
                    }
                }
                Segment::PercentEscape if args.is_some() => out.push('%'),
                Segment::PercentEscape => out.push_str("%%"),
            }
        }
        out
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }
    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((percent, named, literal_run, lone_char)).parse_next(input)
}

/// `%%`, `%s` or `%d`.
fn percent(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "%%".value(Segment::PercentEscape),
        "%s".value(Segment::Positional { integer: false }),
        "%d".value(Segment::Positional { integer: true }),
    ))
    .parse_next(input)
}

/// `{{ name }}`.
fn named(input: &mut &str) -> ModalResult<Segment> {
    let (name, raw) = delimited(("{{", multispace0), identifier, (multispace0, "}}"))
        .with_taken()
        .parse_next(input)?;
    Ok(Segment::Named {
        name: name.to_string(),
        raw: raw.to_string(),
    })
}

fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

/// A run of characters that cannot start a placeholder.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '%')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// A `{` or `%` that does not start a placeholder.
fn lone_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
