//! Switch table entries.

/// One `(key, destination)` pair.
///
/// The destination is an opaque code fragment (an identifier, a numeric
/// constant, an expression) spliced verbatim into the generated code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    pub key: String,
    pub destination: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            destination: destination.into(),
        }
    }
}

/// Index of a [`Candidate`] in a [`DispatchTree`](crate::DispatchTree)'s table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// An entry lowered to UTF-16 code units, the form synthesis works on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    units: Vec<u16>,
    destination: String,
}

impl Candidate {
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Key length in code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The key, decoded back to a string.
    pub fn key(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&Entry> for Candidate {
    fn from(entry: &Entry) -> Self {
        Self {
            units: entry.key.encode_utf16().collect(),
            destination: entry.destination.clone(),
        }
    }
}
