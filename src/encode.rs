//! Turns a [`Comic`] into one line of the flat output file.
//!
//! Line layout: every declared attribute followed by [`SEPARATOR`] (also after the
//! last one), then the `extra_parts` field and `\n`.
//!
//! Non-empty text is wrapped in double quotes and passed through [`ESCAPES`]:
//!
//! | char | written as |
//! |------|------------|
//! | `\n` | `\n` (backslash + `n`) |
//! | `"`  | `"` unchanged, a field holding a quote breaks the quoting |
//! | `,`  | `(COMMA)` |
//!
//! Empty text becomes the bare sentinel [`NA`]. Numbers and other non-text values are
//! written unquoted in their JSON form. The header is not quoted.

use std::borrow::Cow;

use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::comic::Comic;
use crate::Result;

pub const ATTRIBUTES: [&str; 11] = [
    "num",
    "year",
    "month",
    "day",
    "title",
    "safe_title",
    "transcript",
    "alt",
    "img",
    "link",
    "news",
];
pub const EXTRA_PARTS: &str = "extra_parts";
pub const SEPARATOR: &str = ", ";
pub const NA: &str = "NA";

pub const ESCAPES: &[(char, &str)] = &[('\n', "\\n"), ('"', "\""), (',', "(COMMA)")];

pub fn header_line() -> String {
    let mut line = String::new();
    for attr in ATTRIBUTES {
        line.push_str(attr);
        line.push_str(SEPARATOR);
    }
    line.push_str(EXTRA_PARTS);
    line.push('\n');
    line
}

pub fn encode_row(comic: &Comic) -> Result<String> {
    let mut line = String::new();
    for attr in ATTRIBUTES {
        line.push_str(&encode_value(comic.attribute(attr)?));
        line.push_str(SEPARATOR);
    }
    line.push_str(&encode_extra_parts(comic.extra_parts()));
    line.push('\n');
    Ok(line)
}

pub fn encode_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => encode_text(text),
        other => Cow::Owned(other.to_string()),
    }
}

pub fn encode_text(text: &str) -> Cow<'_, str> {
    if text.is_empty() {
        return Cow::Borrowed(NA);
    }
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ESCAPES.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => out.push_str(to),
            None => out.push(ch),
        }
    }
    out.push('"');
    Cow::Owned(out)
}

/// First entry of the `extra_parts` container, in source order.
/// Objects give their first key, arrays their first element, strings their first char.
pub fn encode_extra_parts(extra: Option<&Value>) -> Cow<'_, str> {
    let first = match extra {
        Some(Value::Object(map)) => map.keys().next().map(|k| Cow::Borrowed(k.as_str())),
        Some(Value::Array(items)) => items.first().map(|item| match item {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }),
        Some(Value::String(s)) => s.chars().next().map(|c| Cow::Owned(c.to_string())),
        _ => None,
    };
    first.unwrap_or(Cow::Borrowed(NA))
}

/// Owns the output sink for the duration of an export.
/// The header goes out on [`RowWriter::new`], each row in a single write.
pub struct RowWriter<W> {
    sink: W,
    rows: usize,
}

impl<W: AsyncWrite + Unpin> RowWriter<W> {
    pub async fn new(mut sink: W) -> Result<Self> {
        sink.write_all(header_line().as_bytes()).await?;
        Ok(Self { sink, rows: 0 })
    }

    pub async fn write_comic(&mut self, comic: &Comic) -> Result<()> {
        let line = encode_row(comic)?;
        self.sink.write_all(line.as_bytes()).await?;
        self.sink.flush().await?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub async fn finish(mut self) -> Result<W> {
        self.sink.flush().await?;
        Ok(self.sink)
    }
}
