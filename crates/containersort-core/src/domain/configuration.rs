//! The ContainerSort configuration record.
//!
//! [`Configuration`] mirrors `config.json` field for field:
//!
//! ```json
//! {
//!   "pluginVersion": "2.3.1",
//!   "excludedWorlds": ["world_nether", "world_the_end"],
//!   "trackedContainerTypes": ["chest", "barrel", "shulker_box"],
//!   "properties": { "sort_on_close": true },
//!   "displayLines": ["&f[&6ContainerSort&f]", "&e%sign_owner_name%", "%container_sort_type%", " "]
//! }
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the key is absent from `config.json`, so a file that
//! lacks a key behaves like a fresh install for that key:
//!
//! | Key                     | Value when missing                              |
//! |-------------------------|-------------------------------------------------|
//! | `pluginVersion`         | `""` (never matches a host version → migration) |
//! | `excludedWorlds`        | `["world_nether", "world_the_end"]`             |
//! | `trackedContainerTypes` | `["chest", "barrel", "shulker_box"]`            |
//! | `properties`            | the full [`PropertyTable::defaults`] table      |
//! | `displayLines`          | the four default sign lines                     |
//!
//! A key that is present but empty (`"excludedWorlds": []`) is kept empty.
//! Unknown keys are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::property::PropertyTable;
use super::version::normalize_version;

/// Worlds in which sorting is disabled on a fresh install.
const DEFAULT_EXCLUDED_WORLDS: [&str; 2] = ["world_nether", "world_the_end"];

/// Container kinds sorted on a fresh install.
const DEFAULT_TRACKED_CONTAINER_TYPES: [&str; 3] = ["chest", "barrel", "shulker_box"];

/// Sign text written on a fresh install.  `&` introduces a colour code.
const DEFAULT_DISPLAY_LINES: [&str; 4] = [
    "&f[&6ContainerSort&f]",
    "&e%sign_owner_name%",
    "%container_sort_type%",
    " ",
];

/// Top-level plugin configuration stored in `config.json`.
///
/// Values are treated as immutable snapshots: the configuration service
/// replaces the whole record on reload or migration instead of editing
/// individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Plugin version (pre-release suffix stripped) that last wrote the file.
    #[serde(default)]
    pub plugin_version: String,
    /// Worlds in which sorting is disabled.
    #[serde(default = "default_excluded_worlds")]
    pub excluded_worlds: Vec<String>,
    /// Container kinds that sorting acts on, e.g. `"chest"`.
    #[serde(default = "default_tracked_container_types")]
    pub tracked_container_types: Vec<String>,
    /// Named options; see [`PropertyTable`].
    #[serde(default)]
    pub properties: PropertyTable,
    /// Sign text template, one entry per line.  May embed `%token%`
    /// placeholders such as `%sign_owner_name%`.
    #[serde(default = "default_display_lines")]
    pub display_lines: Vec<String>,
}

impl Configuration {
    /// Builds the hard-coded default configuration for `plugin_version`.
    ///
    /// The version is stored as given; callers pass an already-normalised
    /// version (see [`Configuration::for_host_version`]).
    pub fn defaults(plugin_version: impl Into<String>) -> Self {
        Self {
            plugin_version: plugin_version.into(),
            excluded_worlds: default_excluded_worlds(),
            tracked_container_types: default_tracked_container_types(),
            properties: PropertyTable::defaults(),
            display_lines: default_display_lines(),
        }
    }

    /// Builds the default configuration for a raw host-reported version,
    /// stripping any pre-release suffix first.
    pub fn for_host_version(raw_version: Option<&str>) -> Self {
        Self::defaults(normalize_version(raw_version))
    }

    /// Returns `true` if this configuration was written by `plugin_version`.
    pub fn is_current(&self, plugin_version: &str) -> bool {
        self.plugin_version == plugin_version
    }

    /// Returns `true` if sorting is disabled in the world named `world`.
    pub fn is_world_excluded(&self, world: &str) -> bool {
        self.excluded_worlds.iter().any(|w| w == world)
    }

    /// Returns `true` if containers of kind `container_type` are sorted.
    pub fn tracks_container(&self, container_type: &str) -> bool {
        self.tracked_container_types.iter().any(|t| t == container_type)
    }

    /// Renders [`display_lines`](Self::display_lines), replacing each
    /// `%token%` with `placeholders["token"]`.
    ///
    /// Tokens without a replacement are left untouched so a typo in
    /// `config.json` stays visible on the sign.
    pub fn render_display_lines(&self, placeholders: &HashMap<&str, &str>) -> Vec<String> {
        self.display_lines
            .iter()
            .map(|line| render_line(line, placeholders))
            .collect()
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_excluded_worlds() -> Vec<String> {
    to_owned_vec(&DEFAULT_EXCLUDED_WORLDS)
}

fn default_tracked_container_types() -> Vec<String> {
    to_owned_vec(&DEFAULT_TRACKED_CONTAINER_TYPES)
}

fn default_display_lines() -> Vec<String> {
    to_owned_vec(&DEFAULT_DISPLAY_LINES)
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Replaces `%token%` occurrences in a single line.
fn render_line(line: &str, placeholders: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('%') {
            Some(end) => {
                let token = &after[..end];
                match placeholders.get(token) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[end + 1..];
                    }
                    None => {
                        // Keep the opening '%' and retry from the closing one,
                        // which may start a valid token.
                        out.push('%');
                        out.push_str(token);
                        rest = &after[end..];
                    }
                }
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
