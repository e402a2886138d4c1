use crate::errors::TransformError;

/// JSON string-content escaping. Total: every input string has an escaped
/// form, and `unescape(escape(s)) == s`.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Undoes JSON string-content escaping, including `\uXXXX` and UTF-16
/// surrogate pairs. Error positions are byte offsets into `text`.
pub fn unescape(text: &str) -> Result<String, TransformError> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let (pos, ch) = chars[i];
        if ch != '\\' {
            out.push(ch);
            i += 1;
            continue;
        }
        let Some(&(esc_pos, esc)) = chars.get(i + 1) else {
            return Err(TransformError::UnterminatedEscape(pos));
        };
        match esc {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => {
                let high = read_hex4(&chars, i + 2, pos)?;
                if (0xDC00..0xE000).contains(&high) {
                    return Err(TransformError::UnpairedSurrogate(pos, high as u16));
                }
                if (0xD800..0xDC00).contains(&high) {
                    // High surrogate: the low half must follow immediately.
                    let tail_ok = matches!(chars.get(i + 6), Some(&(_, '\\')))
                        && matches!(chars.get(i + 7), Some(&(_, 'u')));
                    if !tail_ok {
                        return Err(TransformError::UnpairedSurrogate(pos, high as u16));
                    }
                    let low = read_hex4(&chars, i + 8, pos)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(TransformError::UnpairedSurrogate(pos, high as u16));
                    }
                    let cp = 0x10000 + (((high - 0xD800) << 10) | (low - 0xDC00));
                    let decoded = char::from_u32(cp)
                        .ok_or(TransformError::InvalidUnicodeEscape(pos))?;
                    out.push(decoded);
                    i += 12;
                    continue;
                }
                let decoded =
                    char::from_u32(high).ok_or(TransformError::InvalidUnicodeEscape(pos))?;
                out.push(decoded);
                i += 6;
                continue;
            }
            other => return Err(TransformError::InvalidEscape(esc_pos, other)),
        }
        i += 2;
    }
    Ok(out)
}

/// Reads exactly four hex digits starting at `chars[start]`.
fn read_hex4(
    chars: &[(usize, char)],
    start: usize,
    err_pos: usize,
) -> Result<u32, TransformError> {
    let mut value = 0u32;
    for offset in 0..4 {
        let Some(&(_, digit)) = chars.get(start + offset) else {
            return Err(TransformError::InvalidUnicodeEscape(err_pos));
        };
        let Some(nibble) = digit.to_digit(16) else {
            return Err(TransformError::InvalidUnicodeEscape(err_pos));
        };
        value = value * 16 + nibble;
    }
    Ok(value)
}
