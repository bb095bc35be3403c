use std::collections::HashMap;
use std::fmt;

/// Opaque locator of a storage object. No structure is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataReference(String);

impl DataReference {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DataReference {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DataReference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for DataReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Write options, forwarded to the store untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub metadata: HashMap<String, String>,
}
