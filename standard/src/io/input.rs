//! Reading CLI arguments as values.
//!
//! An argument is either `-` (read stdin), `@path` (read a file) or an inline
//! literal. File and stdin contents must be valid JSON; an inline literal that
//! does not parse as JSON is taken as a bare string, so `standard is email
//! a@b.com` needs no quoting.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::value::Value;

/// Resolve an argument to raw JSON.
pub fn read_json(arg: &str) -> Result<serde_json::Value> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        return serde_json::from_str(&buf).context("parse stdin as json");
    }
    if let Some(path) = arg.strip_prefix('@') {
        return read_json_file(Path::new(path));
    }
    match serde_json::from_str(arg) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::debug!(%err, "argument is not json, using it as a string");
            Ok(serde_json::Value::String(arg.to_string()))
        }
    }
}

/// Resolve an argument to a [`Value`].
pub fn read_value(arg: &str) -> Result<Value> {
    read_json(arg).map(Value::from)
}

fn read_json_file(path: &Path) -> Result<serde_json::Value> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Render a value for output: JSON, or `undefined` for [`Value::Undefined`].
pub fn render(value: &Value) -> Result<String> {
    if matches!(value, Value::Undefined) {
        return Ok("undefined".to_string());
    }
    serde_json::to_string(value).context("serialize value")
}
