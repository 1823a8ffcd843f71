//! Plain-text pretty printer.
//!
//! One [`Printer`] covers the dump formats used while debugging: a `{:#?}`
//! dump, a typed debug dump, pretty JSON, an aligned table, plain and
//! key-value lists, an alert box and separators. Everything is written line by line to an [`OutputSink`], so
//! the same printer works for stdout, a log file or a test buffer.
//!
//! Rendering never fails: unserializable data and empty inputs produce a
//! placeholder line instead of an error.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fmt::{self, Display};

use serde::Serialize;
use serde_json::Value;
use utilbelt_common::{EnvPort, OutputSink};

use crate::clock::env_snapshot;

pub const DEFAULT_PRE_TITLE: &str = "Data Output";
pub const DEFAULT_DEBUG_TITLE: &str = "Debug Information";
pub const DEFAULT_JSON_TITLE: &str = "JSON Output";
pub const DEFAULT_TABLE_TITLE: &str = "Table";
pub const DEFAULT_PLAIN_LIST_TITLE: &str = "List";
pub const DEFAULT_LIST_TITLE: &str = "Key-Value List";
pub const ENV_TITLE: &str = "Environment Variables";

pub const NO_TABLE_DATA: &str = "No data available to display in table format.";
pub const NO_LIST_DATA: &str = "No data available to display as list.";

const RULE_WIDTH: usize = 40;

/// Severity of an alert box.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    /// Any other kind, keeping its own capitalised label.
    Custom(String),
}

impl AlertKind {
    /// Capitalised label shown in front of the message.
    pub fn label(&self) -> &str {
        match self {
            AlertKind::Info => "Info",
            AlertKind::Success => "Success",
            AlertKind::Warning => "Warning",
            AlertKind::Error => "Error",
            AlertKind::Custom(label) => label,
        }
    }
}

impl Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Known names match case-insensitively. Any other name becomes
/// [`AlertKind::Custom`] with its first letter upper-cased; a blank name
/// falls back to [`AlertKind::Info`].
impl From<&str> for AlertKind {
    fn from(s: &str) -> Self {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "" | "info" => AlertKind::Info,
            "success" => AlertKind::Success,
            "warning" => AlertKind::Warning,
            "error" => AlertKind::Error,
            _ => AlertKind::Custom(capitalize_first(name)),
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Values whose size [`Printer::debug_measured`] reports as `Length:`.
///
/// Strings report their byte length, collections their element count.
pub trait Measured {
    fn measured_len(&self) -> usize;
}

impl Measured for str {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl Measured for String {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for [T] {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Measured for [T; N] {
    fn measured_len(&self) -> usize {
        N
    }
}

impl<T> Measured for Vec<T> {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for VecDeque<T> {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl<K, V, H> Measured for HashMap<K, V, H> {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl<T, H> Measured for HashSet<T, H> {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl<K, V> Measured for BTreeMap<K, V> {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

/// Writes formatted dumps to an [`OutputSink`].
#[derive(Debug)]
pub struct Printer<S: OutputSink> {
    sink: S,
}

impl<S: OutputSink> Printer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// `{:#?}` dump under a heading.
    pub fn pre<T: fmt::Debug + ?Sized>(&mut self, data: &T, title: Option<&str>) {
        self.heading(title.unwrap_or(DEFAULT_PRE_TITLE));
        self.lines(&format!("{:#?}", data));
        self.blank();
    }

    /// `{:#?}` dump headed by the value's type name.
    pub fn debug<T: fmt::Debug + ?Sized>(&mut self, data: &T, title: Option<&str>) {
        self.debug_dump(data, None, title);
    }

    /// Like [`Printer::debug`], with a `Length:` line for strings and
    /// collections.
    pub fn debug_measured<T>(&mut self, data: &T, title: Option<&str>)
    where
        T: fmt::Debug + Measured + ?Sized,
    {
        self.debug_dump(data, Some(data.measured_len()), title);
    }

    fn debug_dump<T: fmt::Debug + ?Sized>(
        &mut self,
        data: &T,
        len: Option<usize>,
        title: Option<&str>,
    ) {
        self.heading(title.unwrap_or(DEFAULT_DEBUG_TITLE));
        self.sink
            .write_line(&format!("Type: {}", std::any::type_name::<T>()));
        if let Some(len) = len {
            self.sink.write_line(&format!("Length: {}", len));
        }
        self.lines(&format!("{:#?}", data));
        self.blank();
    }

    /// Pretty-printed JSON under a heading.
    pub fn json_pretty<T: Serialize + ?Sized>(&mut self, data: &T, title: Option<&str>) {
        self.heading(title.unwrap_or(DEFAULT_JSON_TITLE));
        match serde_json::to_string_pretty(data) {
            Ok(json) => self.lines(&json),
            Err(e) => self.sink.write_line(&format!("<unserializable: {}>", e)),
        }
        self.blank();
    }

    /// Aligned table of serializable rows.
    ///
    /// Column headers are the keys of the first row, in field order. Later
    /// rows are matched by key; missing cells are blank and extra keys are
    /// ignored. Rows that do not serialize to objects render as blank rows.
    pub fn table<T: Serialize>(&mut self, rows: &[T], title: Option<&str>) {
        let rows: Vec<Value> = rows
            .iter()
            .map(|row| serde_json::to_value(row).unwrap_or(Value::Null))
            .collect();

        let headers: Vec<String> = match rows.first() {
            Some(Value::Object(first)) if !first.is_empty() => first.keys().cloned().collect(),
            _ => {
                self.sink.write_line(NO_TABLE_DATA);
                return;
            }
        };

        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|h| row.get(h).map(render_cell).unwrap_or_default())
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        self.heading(title.unwrap_or(DEFAULT_TABLE_TITLE));
        self.sink.write_line(&table_row(&headers, &widths));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.sink.write_line(&table_row(&rule, &widths));
        for row in &cells {
            self.sink.write_line(&table_row(row, &widths));
        }
        self.blank();
    }

    /// `- item` list under a heading.
    pub fn list<I>(&mut self, items: I, title: Option<&str>)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            self.sink.write_line(NO_LIST_DATA);
            return;
        }

        self.heading(title.unwrap_or(DEFAULT_PLAIN_LIST_TITLE));
        for item in items {
            self.sink.write_line(&format!("- {}", item));
        }
        self.blank();
    }

    /// `- key: value` list under a heading.
    pub fn key_value_list<K, V, I>(&mut self, entries: I, title: Option<&str>)
    where
        K: Display,
        V: Display,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            self.sink.write_line(NO_LIST_DATA);
            return;
        }

        self.heading(title.unwrap_or(DEFAULT_LIST_TITLE));
        for (key, value) in entries {
            self.sink.write_line(&format!("- {}: {}", key, value));
        }
        self.blank();
    }

    /// Boxed `"{Kind}: {message}"` line.
    pub fn alert(&mut self, message: &str, kind: AlertKind) {
        let text = format!("{}: {}", kind.label(), message);
        let border = format!("+{}+", "-".repeat(text.chars().count() + 2));
        self.sink.write_line(&border);
        self.sink.write_line(&format!("| {} |", text));
        self.sink.write_line(&border);
    }

    /// Horizontal rule, optionally preceded by a heading.
    pub fn separator(&mut self, title: Option<&str>) {
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            self.heading(title);
        }
        self.sink.write_line(&"-".repeat(RULE_WIDTH));
    }

    /// Horizontal rule preceded by a plain message.
    pub fn separator_with_message(&mut self, message: &str) {
        self.blank();
        self.sink.write_line(message);
        self.sink.write_line(&"-".repeat(RULE_WIDTH));
    }

    /// Lists the given environment variables; unset ones show as `Not Set`.
    pub fn env<K: AsRef<str>>(&mut self, env: &dyn EnvPort, keys: &[K]) {
        self.key_value_list(env_snapshot(env, keys), Some(ENV_TITLE));
    }

    fn heading(&mut self, title: &str) {
        self.blank();
        self.sink.write_line(title);
        self.sink.write_line(&"=".repeat(title.chars().count()));
    }

    fn lines(&mut self, text: &str) {
        for line in text.lines() {
            self.sink.write_line(line);
        }
    }

    fn blank(&mut self) {
        self.sink.write_line("");
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}
