//! Host version normalisation.
//!
//! The host runtime reports versions such as `"2.3.1-SNAPSHOT"` for
//! development builds.  ContainerSort only cares about the release part, so
//! everything from the first `-` onwards is discarded before the version is
//! stored in a [`Configuration`] or compared against one.
//!
//! [`Configuration`]: super::configuration::Configuration

/// Separator between the release version and a build/pre-release suffix.
const PRE_RELEASE_SEPARATOR: char = '-';

/// Returns the release part of a host-reported version.
///
/// `None` (the host could not report a version) becomes the empty string.
/// Normalising an already-normalised version is a no-op.
///
/// # Example
///
/// ```rust
/// use containersort_core::normalize_version;
///
/// assert_eq!(normalize_version(Some("2.3.1-SNAPSHOT")), "2.3.1");
/// assert_eq!(normalize_version(Some("2.3.1")), "2.3.1");
/// assert_eq!(normalize_version(None), "");
/// ```
pub fn normalize_version(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    // `split` always yields at least one item, even for an empty string.
    raw.split(PRE_RELEASE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
