mod collection;
mod entity;

pub use collection::{convert_to_encoded_form, Arguments};
pub use entity::{Argument, ArgumentError};
