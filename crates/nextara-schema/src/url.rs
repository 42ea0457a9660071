//! Deterministic URL handling for `@id` and `url` values.
//!
//! All canonical URLs end in `/`; `@id`s are a canonical URL plus a `#fragment`.

/// Leading `/`, no trailing `/` (except the root itself), surrounding whitespace removed.
///
/// Never fails: the empty string normalizes to `/`.
///
/// Every trailing `/` is stripped, not just one, so `a//` becomes `/a` and
/// normalizing twice gives the same result as normalizing once.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path
        .trim_start()
        .trim_end_matches(|c: char| c == '/' || c.is_whitespace());
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Strip exactly one trailing `/` from the origin, if present.
pub fn normalize_origin(origin: &str) -> &str {
    origin.strip_suffix('/').unwrap_or(origin)
}

pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// Join origin and path into a canonical URL with a trailing `/`.
///
/// The root path yields `origin/`, never `origin//`.
pub fn build_url(origin: &str, path: &str) -> String {
    let origin = normalize_origin(origin);
    let path = normalize_path(path);
    if path == "/" {
        format!("{}/", origin)
    } else {
        format!("{}{}/", origin, path)
    }
}

/// Canonical URL of `path` plus `#fragment`.
///
/// `fragment` must be non-empty; callers pass one of the fixed fragments in [`crate::ids`].
pub fn build_schema_id(origin: &str, path: &str, fragment: &str) -> String {
    debug_assert!(!fragment.is_empty(), "schema id fragment must be non-empty");
    format!("{}#{}", build_url(origin, path), fragment)
}
