use im::OrdMap;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

use crate::common::{FieldPath, Value};
use crate::errors::{ErrorKind, FirestoreError, FirestoreResult};

/// The field mapping of a document, or of a nested map inside one.
///
/// Keys are field names and values are [Value]s. A field may also hold a
/// [Value::Collection], which is how subcollections hang off a document.
/// Nested fields are read with a [FieldPath] through [Document::get_path];
/// `put` always writes a single top-level key, dots included.
///
/// ## Persistent map
///
/// Backed by `im::OrdMap`, so cloning a document is O(1) and the store can
/// hand out copies to snapshots without deep-copying the tree. Iteration is
/// in ascending key order.
#[derive(Clone, Eq, PartialEq, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    data: OrdMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates `value` with the top-level field `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Fails with [ErrorKind::InvalidArgument] if `key` is empty.
    ///
    /// ```ignore
    /// let mut doc = Document::new();
    /// doc.put("name", "Alice")?;
    /// doc.put("age", 30)?;
    /// assert_eq!(doc.size(), 2);
    /// ```
    pub fn put<T: Into<Value>>(&mut self, key: &str, value: T) -> FirestoreResult<()> {
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(FirestoreError::new(
                "Document does not support empty key",
                ErrorKind::InvalidArgument,
            ));
        }
        self.data.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Returns the value of the top-level field `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Resolves a nested field by walking maps segment by segment.
    ///
    /// Returns `None` when a segment is missing or an intermediate value is not a map.
    ///
    /// ```ignore
    /// let doc = doc!{ "nested": { "a": 1 } };
    /// let path = FieldPath::parse("nested.a", ".")?;
    /// assert_eq!(doc.get_path(&path), Some(&Value::Integer(1)));
    /// ```
    pub fn get_path(&self, path: &FieldPath) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.data.get(first)?;
        for segment in rest {
            current = current.as_document()?.data.get(segment)?;
        }
        Some(current)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Removes the top-level field `key` and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Writes a field without validating the key. Used by the store, whose keys
    /// are already validated path segments.
    pub(crate) fn insert(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }

    /// Shallow merge: every top-level field of `other` overwrites the same-named
    /// field here. Fields absent from `other` are left untouched.
    ///
    /// ```ignore
    /// let mut doc = doc!{ "name": "Bob", "age": 40 };
    /// doc.merge(&doc!{ "city": "London" });
    /// assert_eq!(doc, doc!{ "name": "Bob", "age": 40, "city": "London" });
    /// ```
    pub fn merge(&mut self, other: &Document) {
        for (key, value) in other.data.iter() {
            self.data.insert(key.clone(), value.clone());
        }
    }

    /// Copy of this document without the fields that hold subcollections.
    pub fn without_collections(&self) -> Document {
        Document {
            data: self
                .data
                .iter()
                .filter(|(_, value)| !value.is_collection())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    /// Names of the fields that hold subcollections, in ascending order.
    pub fn collection_names(&self) -> Vec<String> {
        self.data
            .iter()
            .filter(|(_, value)| value.is_collection())
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Top-level field names in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Iterates over the top-level entries in ascending key order.
    ///
    /// The iterator owns a cheap clone of the document, so it does not
    /// borrow `self`.
    pub fn iter(&self) -> DocumentIter {
        DocumentIter {
            keys: self.data.keys().cloned().collect(),
            data: self.clone(),
            index: 0,
        }
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.data
                .iter()
                .map(|(key, value)| format!("{:?}: {}", key, value))
                .join(", ")
        )
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Document {
            data: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, Value>> for Document {
    fn from(map: BTreeMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

pub struct DocumentIter {
    keys: Vec<String>,
    data: Document,
    index: usize,
}

impl Iterator for DocumentIter {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.keys.len() {
            let key = &self.keys[self.index];
            self.index += 1;
            if let Some(value) = self.data.data.get(key) {
                return Some((key.clone(), value.clone()));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.keys.len().saturating_sub(self.index);
        (0, Some(remaining))
    }
}

pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a Document with JSON-like syntax.
///
/// ```rust
/// use firemock::doc;
///
/// let empty = doc!{};
///
/// let simple = doc!{
///     name: "Alice",
///     age: 30
/// };
///
/// let base = 100;
/// let with_expr = doc!{
///     "name": "Bob",
///     "score": (base * 2)
/// };
///
/// let complex = doc!{
///     user: {
///         name: "Charlie",
///         tags: ["admin", "user"]
///     },
///     values: [1, 2, 3]
/// };
/// ```
#[macro_export]
macro_rules! doc {
    ({}) => {
        $crate::document::Document::new()
    };

    () => {
        $crate::document::Document::new()
    };

    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::document::Document::new();
            $(
                doc.put(&$crate::document::normalize(stringify!($key)), $crate::doc_value!($value))
                .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
/// Handles nested maps, arrays, and expressions.
#[macro_export]
macro_rules! doc_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Map($crate::doc!{ $($key : $value),* })
        }
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
