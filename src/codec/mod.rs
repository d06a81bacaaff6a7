//! Charset-aware percent codec for `application/x-www-form-urlencoded` tokens.
//!
//! Escaped grammar: `token := unreserved | '+' | '%' hex hex`, with
//! `unreserved := ALPHA | DIGIT | '-' | '_' | '.' | '*'`. Hex digits are written in
//! uppercase and read case-insensitively.

mod charset;
mod decode;
mod encode;
mod error;

pub use charset::{Charset, DEFAULT_CHARSET};
pub use decode::decode;
pub use encode::{encode, is_unreserved};
pub use error::{MalformedEscapeError, UnsupportedCharsetError};
