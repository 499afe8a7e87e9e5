//! Output file naming.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that cannot appear in a file name on common filesystems.
static FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]"#).expect("valid filename regex"));

/// How output files are named after the event.
#[derive(Debug, Clone)]
pub struct NamingConfig {
    /// Prefix prepended to every output stem.
    pub prefix: String,
    /// Stem used when the event name sanitizes away to nothing.
    pub default_name: String,
    /// Event name used when the workbook leaves its name cell blank.
    pub default_event_name: String,
}

impl NamingConfig {
    /// The standard naming scheme.
    pub fn standard() -> Self {
        Self {
            prefix: "КП ".to_string(),
            default_name: "Банкет".to_string(),
            default_event_name: "Фуршет".to_string(),
        }
    }

    /// Make an event name safe for use in a file name: trim, replace
    /// forbidden characters with underscores, fall back to the default
    /// when nothing is left.
    pub fn sanitize(&self, raw: &str) -> String {
        let cleaned = FORBIDDEN.replace_all(raw.trim(), "_");
        if cleaned.is_empty() {
            self.default_name.clone()
        } else {
            cleaned.into_owned()
        }
    }

    /// File stem for a deck built from this event name (no extension).
    pub fn output_stem(&self, event_name: &str) -> String {
        format!("{}{}", self.prefix, self.sanitize(event_name))
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self::standard()
    }
}
