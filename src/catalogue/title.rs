//! Display metadata derived from filenames.

use super::slug::strip_extension;

/// Placeholder replaced by the derived title.
pub const TITLE_PLACEHOLDER: &str = "{title}";
/// Placeholder replaced by the original filename.
pub const FILENAME_PLACEHOLDER: &str = "{filename}";

/// Human-readable title from a filename.
///
/// Strips the extension, turns every run of `-`/`_` into one space, and
/// uppercases the first letter of each whitespace-delimited word, looking
/// past leading punctuation (`"(draft)"` -> `"(Draft)"`). A word that starts
/// with a digit stays as is. Other letters keep their case:
/// `"iPhone_shot.png"` -> `"IPhone Shot"`.
pub fn file_title(filename: &str) -> String {
    let stem = strip_extension(filename);

    let mut title = String::with_capacity(stem.len());
    let mut in_separator = false;
    let mut word_start = true;
    for c in stem.chars() {
        if c == '-' || c == '_' {
            if !in_separator {
                title.push(' ');
            }
            in_separator = true;
            word_start = true;
            continue;
        }
        in_separator = false;

        if c.is_whitespace() {
            title.push(c);
            word_start = true;
        } else if word_start && c.is_alphanumeric() {
            // Leading punctuation is skipped; a leading digit ends the search
            title.extend(c.to_uppercase());
            word_start = false;
        } else {
            title.push(c);
        }
    }
    title
}

/// Templates for the `subtitle` and `description` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// Rendered with `{title}`.
    pub subtitle: String,
    /// Rendered with `{filename}`.
    pub description: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            subtitle: "Project {title}".to_string(),
            description: "Identification page – original image: {filename}".to_string(),
        }
    }
}

impl Templates {
    pub fn subtitle(&self, title: &str) -> String {
        self.subtitle.replace(TITLE_PLACEHOLDER, title)
    }

    pub fn description(&self, filename: &str) -> String {
        self.description.replace(FILENAME_PLACEHOLDER, filename)
    }
}

/// Whether a template keeps some literal text once its placeholders are gone.
///
/// Used by config validation so that rendered fields are never empty.
pub fn has_literal_text(template: &str) -> bool {
    !template
        .replace(TITLE_PLACEHOLDER, "")
        .replace(FILENAME_PLACEHOLDER, "")
        .trim()
        .is_empty()
}
