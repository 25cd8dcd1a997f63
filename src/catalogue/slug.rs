//! Filename normalization: base names, extensions, and slug roots.
//!
//! All helpers here are pure string transforms. Collision handling lives in
//! [`SlugAllocator`], which is created fresh for every catalogue build.

use rustc_hash::{FxHashMap, FxHashSet};

/// Slug root used when a filename normalizes to nothing (e.g. `___.jpg`).
pub const FALLBACK_ROOT: &str = "item";

/// Final path segment (everything after the last `/`).
///
/// `"a/b/Sunset.png"` -> `"Sunset.png"`, `"Sunset.png"` -> `"Sunset.png"`
pub fn file_base(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Strip the trailing extension: the last `.` and the run of
/// non-dot characters after it.
///
/// A trailing bare dot is not an extension (`"name."` stays as is).
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if idx + 1 < filename.len() => &filename[..idx],
        _ => filename,
    }
}

/// Derive the slug root of a filename, before collision handling.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-`, and trims hyphens from both ends. Returns [`FALLBACK_ROOT`]
/// when nothing is left.
pub fn slug_root(filename: &str) -> String {
    let lowered = strip_extension(filename).to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_ROOT.to_string()
    } else {
        slug
    }
}

/// Check that a slug only uses `[a-z0-9]` groups joined by single hyphens.
#[cfg(test)]
pub fn is_valid_slug(slug: &str) -> bool {
    let is_group = |part: &str| {
        !part.is_empty()
            && part
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    };
    slug.split('-').all(is_group)
}

/// Hands out unique slugs from (possibly repeated) slug roots.
///
/// The first claim of a root gets it unchanged; later claims get `root-2`,
/// `root-3`, ... in claim order. A suffixed candidate already handed out
/// (to a file literally named `root-2`) is skipped, and the count for the
/// root stays past it.
///
/// A suffixed slug can coincide with a root that already exists literally
/// (`sunset-2.png` next to two `sunset.png`). Such a candidate is skipped and
/// the counter keeps going until the slug is unused.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    /// Claims per root.
    seen: FxHashMap<String, usize>,
    /// Every slug handed out so far.
    issued: FxHashSet<String>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a slug for `root`.
    pub fn claim(&mut self, root: String) -> String {
        let count = self.seen.entry(root.clone()).or_insert(0);
        loop {
            *count += 1;
            let candidate = match *count {
                1 => root.clone(),
                n => format!("{root}-{n}"),
            };
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
