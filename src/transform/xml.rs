use serde_json::Value;

use crate::errors::{Error, TransformError};

const INDENT: &str = "  ";

/// Converts JSON text to an XML document.
///
/// Object members become elements named by their key; an array under a key
/// repeats that key's element once per item; a root array repeats `<item>`.
/// Two shapes have no faithful XML form and fail with `TransformError`:
/// keys that are not valid XML element names, and arrays nested directly
/// inside arrays (their items have no element name to repeat).
pub fn to_xml(text: &str) -> Result<String, Error> {
    let value: Value = serde_json::from_str(text)?;
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    match &value {
        Value::Array(items) => {
            out.push_str("<root>\n");
            for item in items {
                if item.is_array() {
                    return Err(TransformError::Unrepresentable(
                        "an array nested directly inside an array".to_string(),
                    )
                    .into());
                }
                write_member(&mut out, "item", item, 1)?;
            }
            out.push_str("</root>");
        }
        other => write_member(&mut out, "root", other, 0)?,
    }
    // Members always close their line; keep the document newline-free at
    // the end so callers own the final terminator.
    while out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

fn write_member(
    out: &mut String,
    name: &str,
    value: &Value,
    depth: usize,
) -> Result<(), TransformError> {
    if !is_xml_name(name) {
        return Err(TransformError::Unrepresentable(format!(
            "key {name:?} (not a valid XML element name)"
        )));
    }
    let pad = INDENT.repeat(depth);
    match value {
        Value::Array(items) => {
            // The repeated-element encoding consumes the key here; another
            // bare array inside has no name left to repeat.
            for item in items {
                if item.is_array() {
                    return Err(TransformError::Unrepresentable(
                        "an array nested directly inside an array".to_string(),
                    ));
                }
                write_member(out, name, item, depth)?;
            }
        }
        Value::Object(map) if map.is_empty() => {
            out.push_str(&format!("{pad}<{name}/>\n"));
        }
        Value::Object(map) => {
            out.push_str(&format!("{pad}<{name}>\n"));
            for (key, child) in map {
                write_member(out, key, child, depth + 1)?;
            }
            out.push_str(&format!("{pad}</{name}>\n"));
        }
        Value::Null => out.push_str(&format!("{pad}<{name}/>\n")),
        Value::Bool(b) => out.push_str(&format!("{pad}<{name}>{b}</{name}>\n")),
        Value::Number(n) => out.push_str(&format!("{pad}<{name}>{n}</{name}>\n")),
        Value::String(s) => {
            out.push_str(&format!("{pad}<{name}>{}</{name}>\n", escape_text(name, s)?));
        }
    }
    Ok(())
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Escapes element text. XML 1.0 has no representation at all for control
/// characters other than tab/LF/CR, so those fail rather than producing a
/// document no parser will accept.
fn escape_text(name: &str, text: &str) -> Result<String, TransformError> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\t' | '\n' | '\r' => out.push_str(&format!("&#x{:X};", ch as u32)),
            c if (c as u32) < 0x20 => {
                return Err(TransformError::Unrepresentable(format!(
                    "control character U+{:04X} in the value of {name:?}",
                    c as u32
                )));
            }
            c => out.push(c),
        }
    }
    Ok(out)
}
