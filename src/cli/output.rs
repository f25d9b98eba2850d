/// Output formatting: pretty JSON or tables on stdout, errors on stderr.
use std::borrow::Cow;
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use sakari::{RequestError, SakariError};
use serde::Serialize;
use serde_json::{Map, Value};

use super::progress::Progress;

/// Output context passed to all commands.
pub struct OutputCtx {
    pub json: bool,
    pub quiet: bool,
}

impl OutputCtx {
    #[must_use]
    pub fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Start a spinner unless `--quiet` is set.
    pub fn progress(&self, message: impl Into<Cow<'static, str>>) -> Progress {
        Progress::start(message, !self.quiet)
    }

    /// Print a one-line confirmation to stdout.
    pub fn status(&self, message: &str) {
        if !self.quiet {
            println!("✓ {message}");
        }
    }
}

// --- API responses ---

/// Write an API response to stdout.
pub fn write_value(value: &Value, ctx: &OutputCtx) {
    if ctx.json {
        print_json(value);
        return;
    }
    match render_table(value) {
        Some(table) => println!("{table}"),
        None => println!("{}", plain_text(value)),
    }
}

/// Records of interest: the `data` member of a response envelope, else the value itself.
fn payload(value: &Value) -> &Value {
    match value {
        Value::Object(map) => map.get("data").unwrap_or(value),
        _ => value,
    }
}

/// Render a response as a table. Scalars have no table form.
pub fn render_table(value: &Value) -> Option<Table> {
    match payload(value) {
        Value::Array(items) if !items.is_empty() => Some(records_table(items)),
        Value::Object(map) if !map.is_empty() => Some(fields_table(map)),
        _ => None,
    }
}

fn records_table(items: &[Value]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    // Columns in order of first appearance across all records.
    let mut columns: Vec<&str> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.contains(&key.as_str()) {
                    columns.push(key.as_str());
                }
            }
        }
    }

    if columns.is_empty() {
        table.set_header(["VALUE"]);
        for item in items {
            table.add_row([cell_text(item)]);
        }
        return table;
    }

    table.set_header(columns.iter().map(|c| c.to_uppercase()));
    for item in items {
        let row = columns
            .iter()
            .map(|column| item.get(*column).map(cell_text).unwrap_or_default());
        table.add_row(row);
    }
    table
}

fn fields_table(map: &Map<String, Value>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["FIELD", "VALUE"]);
    for (key, value) in map {
        table.add_row([key.clone(), cell_text(value)]);
    }
    table
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn plain_text(value: &Value) -> String {
    match payload(value) {
        Value::Array(_) => "(no results)".to_owned(),
        Value::Null => "(empty response)".to_owned(),
        other => cell_text(other),
    }
}

// --- Error output ---

#[derive(Debug, Serialize)]
struct ErrorOutput<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a Value>,
}

fn request_error(err: &anyhow::Error) -> Option<&RequestError> {
    err.downcast_ref::<SakariError>()
        .and_then(SakariError::as_request)
        .or_else(|| err.downcast_ref::<RequestError>())
}

fn error_detail(err: &anyhow::Error) -> ErrorDetail<'_> {
    let request = request_error(err);
    ErrorDetail {
        message: err.to_string(),
        status: request.and_then(RequestError::status),
        body: request.and_then(RequestError::body),
    }
}

/// Write an error to stderr, with the upstream status and body when present.
pub fn write_error(err: &anyhow::Error, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let detail = error_detail(err);

    if json {
        let s = serde_json::to_string_pretty(&ErrorOutput { error: detail }).unwrap_or_default();
        let _ = writeln!(out, "{s}");
        return;
    }

    let _ = writeln!(out, "Error: {}", detail.message);
    if let Some(status) = detail.status {
        let _ = writeln!(out, "  Status: {status}");
    }
    if let Some(body) = detail.body {
        let body = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
        let _ = writeln!(out, "  Response: {body}");
    }
}

// --- Generic JSON helpers ---

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
