//! Item domain model and partial updates.
//!
//! An [`Item`] is a caller-identified record with a display name and an open set
//! of additional fields. Updates are expressed as an explicit [`ItemPatch`] that
//! is merged field by field into the existing record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Identifier of an item, chosen by the caller at creation time.
pub type ItemId = i64;

/// A record held by the item store.
///
/// `id` and `name` are the enumerated fields; anything else lives in `extra` and
/// is flattened into the same JSON object when serialized.
///
/// # Examples
///
/// ```
/// use listkeeper::Item;
///
/// let item = Item::new(1, "Apple");
/// assert_eq!(item.id, 1);
/// assert_eq!(item.name, "Apple");
/// assert!(item.extra.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Item {
    /// Creates an item with no extra fields.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Sets a named field, builder style.
    ///
    /// `"id"` and `"name"` follow the same rules as [`Item::merged`], so they
    /// never end up in `extra`.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(key.into(), value.into());
        self
    }

    fn set_field(&mut self, key: String, value: Value) {
        match key.as_str() {
            "id" => {}
            "name" => {
                if let Value::String(name) = value {
                    self.name = name;
                }
            }
            _ => {
                self.extra.insert(key, value);
            }
        }
    }

    /// Returns the shallow merge of this item and `patch`.
    ///
    /// Fields present in the patch overwrite same-named fields; everything else
    /// is preserved. The id is never changed. A `"name"` entry in the patch's
    /// open fields overwrites the name only when it holds a JSON string, and an
    /// `"id"` entry is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkeeper::{Item, ItemPatch};
    ///
    /// let item = Item::new(1, "X").with_field("color", "red");
    /// let merged = item.merged(&ItemPatch::rename("Y"));
    ///
    /// assert_eq!(merged.name, "Y");
    /// assert_eq!(merged.extra["color"], "red");
    /// ```
    #[must_use]
    pub fn merged(&self, patch: &ItemPatch) -> Self {
        let mut next = self.clone();

        for (key, value) in &patch.fields {
            next.set_field(key.clone(), value.clone());
        }

        if let Some(name) = &patch.name {
            next.name.clone_from(name);
        }

        next
    }

    /// Whether the name contains `folded_query`, which must already be lowercased.
    #[must_use]
    pub fn name_contains_folded(&self, folded_query: &str) -> bool {
        folded_query.is_empty() || self.name.to_lowercase().contains(folded_query)
    }
}

/// A partial update to merge into an existing item.
///
/// `name` covers the enumerated field; `fields` carries any other named field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Value>,
}

impl ItemPatch {
    /// A patch that only changes the name.
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: BTreeMap::new(),
        }
    }

    /// Adds an open field to the patch.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}
