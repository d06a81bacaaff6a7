use std::borrow::Cow;
use std::fmt;

use encoding_rs::{Encoding, REPLACEMENT, UTF_8};

use crate::codec::UnsupportedCharsetError;
use crate::log_debug;

/// Label used when nothing else is configured.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Labels the encoding tables fold into a larger encoding than the one they name.
const SUBSTITUTED_LABELS: &[&str] = &[
    "ascii",
    "us-ascii",
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "latin1",
    "l1",
    "iso-8859-9",
    "latin5",
    "iso-8859-11",
    "tis-620",
    "gb2312",
    "x-gbk",
];

/// A resolved character encoding used to turn non-ASCII text into escaped bytes and back.
///
/// Labels are resolved the way browsers resolve them (WHATWG Encoding Standard), so
/// `"Shift_JIS"`, `"sjis"` and `"windows-31j"` all name the same encoding, and
/// `"US-ASCII"` is treated as windows-1252. UTF-16 labels fall back to UTF-8 since
/// form data is never submitted as UTF-16.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Charset {
    encoding: &'static Encoding,
}

impl Charset {
    pub fn for_label(label: &str) -> Result<Self, UnsupportedCharsetError> {
        match Encoding::for_label(label.as_bytes()) {
            // The replacement encoding exists only to refuse dangerous labels.
            Some(encoding) if encoding != REPLACEMENT => {
                let charset = Self {
                    encoding: encoding.output_encoding(),
                };
                if charset.is_substitute_for(label) {
                    log_debug!("Charset", "label {:?} resolved to {}", label, charset.name());
                }
                Ok(charset)
            }
            _ => {
                log_debug!("Charset", "no encoding for label {:?}", label);
                Err(UnsupportedCharsetError {
                    label: label.to_string(),
                })
            }
        }
    }

    /// True when `label` names a different charset than the one in use, e.g. `US-ASCII`
    /// handled as windows-1252 or `UTF-16` handled as UTF-8.
    pub fn is_substitute_for(&self, label: &str) -> bool {
        let Some(named) = Encoding::for_label(label.as_bytes()) else {
            return true;
        };
        let normalized = label.trim().to_ascii_lowercase();
        named != self.encoding || SUBSTITUTED_LABELS.contains(&normalized.as_str())
    }

    pub fn utf8() -> Self {
        Self { encoding: UTF_8 }
    }

    /// Canonical name of the encoding, e.g. `"Shift_JIS"`.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Unmappable characters come out as HTML numeric character references, which is
    /// what browsers submit for them; the flag is set when that happened.
    pub(crate) fn encode<'a>(&self, text: &'a str) -> (Cow<'a, [u8]>, bool) {
        let (bytes, _, unmappable) = self.encoding.encode(text);
        (bytes, unmappable)
    }

    /// Invalid byte sequences decode to U+FFFD.
    pub(crate) fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        let (text, _) = self.encoding.decode_without_bom_handling(bytes);
        text
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Charset {
    type Err = UnsupportedCharsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s)
    }
}
