use crate::models::field::Field;
use crate::utils::formatting::is_reported;
use std::collections::HashMap;

/// One snapshot row of the sessions CSV, addressed by column name.
///
/// Every header column is present (possibly as an empty string). Records
/// are built once by the loader and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRecord {
    values: HashMap<String, String>,
}

impl SessionRecord {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of any column; `None` if the header did not have it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Raw value of a known column, empty string when absent.
    pub fn raw(&self, field: Field) -> &str {
        self.get(field.as_str()).unwrap_or("")
    }

    /// Value of a known column, `None` when absent or empty.
    pub fn value(&self, field: Field) -> Option<&str> {
        Some(self.raw(field)).filter(|v| !v.is_empty())
    }

    /// Value of a free-text column, `None` when absent, empty or the literal "None".
    pub fn reported(&self, field: Field) -> Option<&str> {
        Some(self.raw(field)).filter(|v| is_reported(v))
    }
}
