use std::ops::Index;

use crate::argument::Argument;
use crate::codec::{Charset, MalformedEscapeError};

/// Turn plain name/value pairs into HTTP-ready arguments, keeping their order.
///
/// Every argument uses the default charset and is escaped on read. Duplicate names
/// are kept as they are.
pub fn convert_to_encoded_form<N, V>(pairs: &[(N, V)]) -> Vec<Argument>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(name, value)| Argument::new(name.as_ref(), value.as_ref()))
        .collect()
}

/// Ordered list of request arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    items: Vec<Argument>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn convert_to_encoded_form<N, V>(pairs: &[(N, V)]) -> Self
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            items: convert_to_encoded_form(pairs),
        }
    }

    /// Parse `a=1&b=x+y` style input. Each side is decoded with `charset`; empty
    /// segments are skipped and a segment without `=` becomes a value-less argument.
    pub fn parse_query(query: &str, charset: Charset) -> Result<Self, MalformedEscapeError> {
        let mut arguments = Self::new();

        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let argument = match segment.split_once('=') {
                Some((name, value)) => Argument::from_encoded(name, value, charset)?,
                None => {
                    let mut argument = Argument::from_encoded(segment, "", charset)?;
                    argument.set_use_equals(false);
                    argument
                }
            };
            arguments.push(argument);
        }

        Ok(arguments)
    }

    pub fn push(&mut self, argument: Argument) {
        self.items.push(argument);
    }

    /// Append a raw name/value pair.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.push(Argument::new(name, value));
    }

    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Argument> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.items.iter()
    }

    /// Escaped `name=value` pairs joined with `&`.
    pub fn to_query_string(&self) -> String {
        self.items
            .iter()
            .map(Argument::to_query_pair)
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Index<usize> for Arguments {
    type Output = Argument;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl FromIterator<Argument> for Arguments {
    fn from_iter<T: IntoIterator<Item = Argument>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Arguments {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
