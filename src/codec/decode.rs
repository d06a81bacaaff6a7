use crate::codec::{Charset, MalformedEscapeError};
use crate::log_debug;

/// Reverse [`encode`](crate::codec::encode): `+` becomes a space and `%HH` becomes the
/// byte `0xHH` (hex digits are case-insensitive).
///
/// The whole input is gathered into one byte buffer and decoded through `charset` in a
/// single pass, so a character spread over several escapes, or over escapes and literal
/// trail bytes (`%92l` is 値 in Shift_JIS), comes back intact. Literal characters the
/// charset cannot represent are copied through unchanged, as is input with nothing to
/// unescape.
pub fn decode(escaped: &str, charset: Charset) -> Result<String, MalformedEscapeError> {
    if !escaped.contains(['%', '+']) {
        return Ok(escaped.to_string());
    }

    let bytes = escaped.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut buf = Vec::with_capacity(bytes.len());
    let mut literal_start: Option<usize> = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' | b'+' => {
                if let Some(start) = literal_start.take() {
                    push_literal(&mut out, &mut buf, &escaped[start..i], charset);
                }
                if bytes[i] == b'+' {
                    buf.push(b' ');
                    i += 1;
                    continue;
                }
                buf.push(unescape_at(escaped, i)?);
                i += 3;
            }
            _ => {
                literal_start.get_or_insert(i);
                i += 1;
            }
        }
    }
    if let Some(start) = literal_start {
        push_literal(&mut out, &mut buf, &escaped[start..], charset);
    }
    out.push_str(&charset.decode(&buf));

    Ok(out)
}

/// Literal text joins the byte buffer when the charset can represent it, so trail bytes
/// such as the `l` in `%92l` combine with the escapes before them. An unmappable
/// character flushes the buffer and is appended as-is.
fn push_literal(out: &mut String, buf: &mut Vec<u8>, literal: &str, charset: Charset) {
    let (bytes, unmappable) = charset.encode(literal);
    if !unmappable {
        buf.extend_from_slice(&bytes);
        return;
    }

    let mut scratch = [0u8; 4];
    for ch in literal.chars() {
        let (bytes, unmappable) = charset.encode(ch.encode_utf8(&mut scratch));
        if unmappable {
            out.push_str(&charset.decode(buf.as_slice()));
            buf.clear();
            out.push(ch);
        } else {
            buf.extend_from_slice(&bytes);
        }
    }
}

/// Decode the `%HH` escape starting at byte `pos`.
fn unescape_at(escaped: &str, pos: usize) -> Result<u8, MalformedEscapeError> {
    let digits = escaped.as_bytes().get(pos + 1..pos + 3);
    let mut out = [0u8; 1];

    match digits.map(|d| hex::decode_to_slice(d, &mut out)) {
        Some(Ok(())) => Ok(out[0]),
        _ => {
            let sequence: String = escaped[pos..].chars().take(3).collect();
            log_debug!("Decode", "malformed escape {:?} at offset {}", sequence, pos);
            Err(MalformedEscapeError {
                sequence,
                position: pos,
            })
        }
    }
}
