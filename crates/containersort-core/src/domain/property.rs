//! Property table: named options with documented defaults.
//!
//! The `properties` object in `config.json` maps option keys to JSON values:
//!
//! ```json
//! "properties": {
//!   "sort_on_close": true,
//!   "sign_keyword": "[sort]",
//!   "sort_cooldown_millis": 500
//! }
//! ```
//!
//! The known keys are enumerated by [`ContainerSortProperty`].  The table
//! itself ([`PropertyTable`]) stores raw JSON values so that a file written
//! by a newer plugin version, containing keys this build does not know,
//! still round-trips without losing them.
//!
//! Typed lookups never fail: a missing key, or a value of the wrong JSON type,
//! falls back to the property's default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A known configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerSortProperty {
    /// Sort a tracked container automatically when its inventory is closed.
    SortOnClose,
    /// Only containers with an attached sort sign are sorted.
    SignRequired,
    /// First-line text a player writes on a sign to mark a container.
    SignKeyword,
    /// Sort type used when a sign does not name one.
    DefaultSortType,
    /// Minimum delay between two sorts of the same container.
    SortCooldownMillis,
    /// Players need the sort permission node to create sort signs.
    PermissionRequired,
}

impl ContainerSortProperty {
    /// Every known property, in the order it appears in a fresh `config.json`.
    pub const ALL: [ContainerSortProperty; 6] = [
        ContainerSortProperty::SortOnClose,
        ContainerSortProperty::SignRequired,
        ContainerSortProperty::SignKeyword,
        ContainerSortProperty::DefaultSortType,
        ContainerSortProperty::SortCooldownMillis,
        ContainerSortProperty::PermissionRequired,
    ];

    /// Returns the JSON key under which this property is stored.
    pub fn key(self) -> &'static str {
        match self {
            ContainerSortProperty::SortOnClose => "sort_on_close",
            ContainerSortProperty::SignRequired => "sign_required",
            ContainerSortProperty::SignKeyword => "sign_keyword",
            ContainerSortProperty::DefaultSortType => "default_sort_type",
            ContainerSortProperty::SortCooldownMillis => "sort_cooldown_millis",
            ContainerSortProperty::PermissionRequired => "permission_required",
        }
    }

    /// Looks up a property by its JSON key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Returns the value used when the property is absent from the table.
    pub fn default_value(self) -> Value {
        match self {
            ContainerSortProperty::SortOnClose => Value::Bool(true),
            ContainerSortProperty::SignRequired => Value::Bool(true),
            ContainerSortProperty::SignKeyword => Value::from("[sort]"),
            ContainerSortProperty::DefaultSortType => Value::from("ALPHABETICAL"),
            ContainerSortProperty::SortCooldownMillis => Value::from(500_u64),
            ContainerSortProperty::PermissionRequired => Value::Bool(false),
        }
    }
}

/// Mapping from property key to property value, serialised as a JSON object.
///
/// `PropertyTable::default()` is the full defaults table, so a
/// `config.json` that omits `properties` entirely still behaves sensibly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyTable(Map<String, Value>);

impl PropertyTable {
    /// Returns the table of every known property at its default value.
    pub fn defaults() -> Self {
        let entries = ContainerSortProperty::ALL
            .into_iter()
            .map(|p| (p.key().to_string(), p.default_value()))
            .collect();
        Self(entries)
    }

    /// Returns an empty table; every lookup falls back to defaults.
    pub fn empty() -> Self {
        Self(Map::new())
    }

    /// Returns the stored value for `property`, or its default.
    pub fn value(&self, property: ContainerSortProperty) -> Value {
        self.0
            .get(property.key())
            .cloned()
            .unwrap_or_else(|| property.default_value())
    }

    /// Returns `property` as a boolean, falling back to the default when the
    /// stored value is missing or not a JSON boolean.
    pub fn bool(&self, property: ContainerSortProperty) -> bool {
        self.0
            .get(property.key())
            .and_then(Value::as_bool)
            .or_else(|| property.default_value().as_bool())
            .unwrap_or_default()
    }

    /// Returns `property` as a signed integer, falling back to the default
    /// when the stored value is missing or not an integer.
    pub fn integer(&self, property: ContainerSortProperty) -> i64 {
        self.0
            .get(property.key())
            .and_then(Value::as_i64)
            .or_else(|| property.default_value().as_i64())
            .unwrap_or_default()
    }

    /// Returns `property` as a string, falling back to the default when the
    /// stored value is missing or not a JSON string.
    pub fn string(&self, property: ContainerSortProperty) -> String {
        match self.0.get(property.key()).and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => property
                .default_value()
                .as_str()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Returns the raw stored value for an arbitrary key, known or not.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a copy of the table with `property` set to `value`.
    ///
    /// Tables inside a [`Configuration`] are never edited in place; callers
    /// build a new table and a new configuration instead.
    ///
    /// [`Configuration`]: super::configuration::Configuration
    pub fn with(mut self, property: ContainerSortProperty, value: impl Into<Value>) -> Self {
        self.0.insert(property.key().to_string(), value.into());
        self
    }

    /// Number of stored entries, including unknown keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the stored entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::defaults()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
