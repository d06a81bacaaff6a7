//! HTTP request arguments and the charset-aware percent codec behind them.
//!
//! ```
//! use http_argument::Argument;
//!
//! let arg = Argument::new("name.?", "value_ here");
//! assert_eq!(arg.encoded_name(), "name.%3F");
//! assert_eq!(arg.encoded_value(), "value_+here");
//! ```

pub mod argument;
pub mod codec;
pub mod config;
pub mod utils;

pub use argument::{convert_to_encoded_form, Argument, ArgumentError, Arguments};
pub use codec::{Charset, MalformedEscapeError, UnsupportedCharsetError};
pub use config::{Config, ConfigError};
