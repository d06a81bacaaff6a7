use crate::codec::Charset;

/// Characters that are never escaped: ALPHA / DIGIT / '-' / '_' / '.' / '*'.
pub fn is_unreserved(ch: char) -> bool {
    matches!(ch,
        'A'..='Z'
        | 'a'..='z'
        | '0'..='9'
        | '-' | '_' | '.' | '*'
    )
}

/// Percent-encode `raw` for use as a query-string or form-body token.
///
/// Unreserved characters are left as-is and a space becomes `+`. Every other run of
/// characters is converted to bytes under `charset` and each byte is written as `%HH`
/// (uppercase hex). Runs are converted as a whole so that multi-byte encodings get all
/// of their bytes escaped, trail bytes in the ASCII range included.
pub fn encode(raw: &str, charset: Charset) -> String {
    // In the worst case, every byte becomes "%XX" (3 chars)
    let mut out = String::with_capacity(raw.len() * 3);
    let mut run_start: Option<usize> = None;

    for (idx, ch) in raw.char_indices() {
        if ch != ' ' && !is_unreserved(ch) {
            run_start.get_or_insert(idx);
            continue;
        }
        if let Some(start) = run_start.take() {
            push_escaped(&mut out, &charset.encode(&raw[start..idx]).0);
        }
        out.push(if ch == ' ' { '+' } else { ch });
    }
    if let Some(start) = run_start {
        push_escaped(&mut out, &charset.encode(&raw[start..]).0);
    }

    out
}

fn push_escaped(out: &mut String, bytes: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    for &b in bytes {
        out.push('%');
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0F) as usize] as char);
    }
}
