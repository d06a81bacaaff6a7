use thiserror::Error;

use crate::codec::{self, Charset, MalformedEscapeError, UnsupportedCharsetError};

/// Why an [`Argument`] could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error(transparent)]
    MalformedEscape(#[from] MalformedEscapeError),

    #[error(transparent)]
    UnsupportedCharset(#[from] UnsupportedCharsetError),
}

impl ArgumentError {
    /// Fatal errors come from the environment, not from the argument itself, and
    /// must be propagated instead of skipping the offending argument.
    pub fn is_fatal(&self) -> bool {
        match self {
            ArgumentError::MalformedEscape(_) => false,
            ArgumentError::UnsupportedCharset(err) => err.is_fatal(),
        }
    }
}

/// A single HTTP request parameter (query-string or form-body entry).
///
/// Name and value are always held in raw, decoded form. The escaped form is derived
/// on every read from the raw fields, the charset and the `always_encoded` policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: String,
    value: String,
    always_encoded: bool,
    charset: Charset,
    content_type: Option<String>,
    use_equals: bool,
}

impl Argument {
    /// Raw argument using the default charset (UTF-8).
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_charset(name, value, Charset::default())
    }

    pub fn with_charset(name: impl Into<String>, value: impl Into<String>, charset: Charset) -> Self {
        Argument {
            name: name.into(),
            value: value.into(),
            always_encoded: true,
            charset,
            content_type: None,
            use_equals: true,
        }
    }

    /// Build from an already-escaped name and value, decoding both once.
    pub fn from_encoded(name: &str, value: &str, charset: Charset) -> Result<Self, MalformedEscapeError> {
        let name = codec::decode(name, charset)?;
        let value = codec::decode(value, charset)?;
        Ok(Self::with_charset(name, value, charset))
    }

    /// Resolve `charset` and build either a raw or a pre-encoded argument.
    ///
    /// An unknown charset fails with [`ArgumentError::UnsupportedCharset`] even when
    /// nothing needs decoding.
    pub fn parse(name: &str, value: &str, pre_encoded: bool, charset: &str) -> Result<Self, ArgumentError> {
        let charset = Charset::for_label(charset)?;
        if pre_encoded {
            Ok(Self::from_encoded(name, value, charset)?)
        } else {
            Ok(Self::with_charset(name, value, charset))
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn encoded_name(&self) -> String {
        self.escape(&self.name)
    }

    pub fn encoded_value(&self) -> String {
        self.escape(&self.value)
    }

    fn escape(&self, raw: &str) -> String {
        if self.always_encoded {
            codec::encode(raw, self.charset)
        } else {
            raw.to_string()
        }
    }

    pub fn is_always_encoded(&self) -> bool {
        self.always_encoded
    }

    pub fn set_always_encoded(&mut self, always_encoded: bool) {
        self.always_encoded = always_encoded;
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn set_content_type(&mut self, content_type: Option<String>) {
        self.content_type = content_type;
    }

    pub fn use_equals(&self) -> bool {
        self.use_equals
    }

    /// When false and the value is empty, [`to_query_pair`](Self::to_query_pair)
    /// renders the name alone (`flag` instead of `flag=`).
    pub fn set_use_equals(&mut self, use_equals: bool) {
        self.use_equals = use_equals;
    }

    /// `name=value` in escaped form.
    pub fn to_query_pair(&self) -> String {
        let name = self.encoded_name();
        if !self.use_equals && self.value.is_empty() {
            return name;
        }
        format!("{}={}", name, self.encoded_value())
    }
}
