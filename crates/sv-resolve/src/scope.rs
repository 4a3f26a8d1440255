//! Candidate containers for resolution.

use serde_json::{Map, Value};

/// Field holding the secondary container.
pub const DATA_FIELD: &str = "data";

/// The containers one document offers to the resolver: the document itself,
/// then its `data` object when present.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    document: &'a Map<String, Value>,
    data: Option<&'a Map<String, Value>>,
}

impl<'a> Scope<'a> {
    pub fn new(document: &'a Map<String, Value>) -> Self {
        let data = document.get(DATA_FIELD).and_then(Value::as_object);
        Self { document, data }
    }

    /// Containers in search order.
    pub fn containers(&self) -> impl Iterator<Item = &'a Map<String, Value>> + use<'a> {
        std::iter::once(self.document).chain(self.data)
    }
}
