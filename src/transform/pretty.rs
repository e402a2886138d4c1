use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::errors::Error;

/// Re-indents JSON text with the given indent unit. Fails like the parse
/// boundary fails: the error message names the offending line and column.
pub fn pretty_print(text: &str, indent: &str) -> Result<String, Error> {
    let value: Value = serde_json::from_str(text)?;
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(Error::Parse)?;
    Ok(String::from_utf8(buf).expect("serializer emits utf-8"))
}

/// Strips all insignificant whitespace.
pub fn minify(text: &str) -> Result<String, Error> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string(&value).map_err(Error::Parse)?)
}
