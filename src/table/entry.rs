//! Bucket chain entries

/// A single key-value entry in a bucket chain
///
/// Owns copies of both its key and its value. The table never hands out
/// references into an entry; lookups clone the value, so entries can be
/// moved or dropped without invalidating outstanding results.
#[derive(Debug, Clone)]
pub struct Entry {
    key: String,
    value: Vec<u8>,
}

impl Entry {
    pub(crate) fn new(key: String, value: Vec<u8>) -> Self {
        Self { key, value }
    }

    /// The entry's key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The entry's value bytes
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Replace the value in place, keeping the key
    pub(crate) fn replace_value(&mut self, value: &[u8]) {
        self.value = value.to_vec();
    }
}
