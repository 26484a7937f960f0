use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::oven::constants::{DEFAULT_EVENT_SLUG, MAX_RECENT_EVENTS};

/// Local desk preferences: which event is active and which were used lately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub current_event: String,

    #[serde(default)]
    pub recent_events: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            current_event: DEFAULT_EVENT_SLUG.to_string(),
            recent_events: vec![DEFAULT_EVENT_SLUG.to_string()],
        }
    }
}

impl Preferences {
    /// Make `slug` the active event.
    ///
    /// A slug not yet in the recents is added at the front; one already
    /// listed keeps its position. Blank slugs are ignored. Returns whether
    /// the slug was accepted.
    pub fn select_event(&mut self, slug: &str) -> bool {
        let slug = slug.trim();
        if slug.is_empty() {
            return false;
        }

        self.current_event = slug.to_string();
        if !self.recent_events.iter().any(|s| s == slug) {
            self.recent_events.insert(0, slug.to_string());
            self.recent_events.truncate(MAX_RECENT_EVENTS);
        }
        true
    }
}

/// Load preferences; a missing file yields the defaults.
pub fn load_preferences<P: AsRef<Path>>(path: P) -> Result<Preferences> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no preferences file, using defaults");
        return Ok(Preferences::default());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save preferences to a JSON file.
pub fn save_preferences<P: AsRef<Path>>(path: P, prefs: &Preferences) -> Result<()> {
    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_known_event_keeps_recent_order() {
        let mut prefs = Preferences::default();
        assert!(prefs.select_event("genesis-10"));
        assert_eq!(
            prefs.recent_events,
            vec!["genesis-10".to_string(), DEFAULT_EVENT_SLUG.to_string()]
        );

        assert!(prefs.select_event(DEFAULT_EVENT_SLUG));
        assert_eq!(prefs.current_event, DEFAULT_EVENT_SLUG);
        assert_eq!(
            prefs.recent_events,
            vec!["genesis-10".to_string(), DEFAULT_EVENT_SLUG.to_string()]
        );
    }

    #[test]
    fn test_recent_events_capped() {
        let mut prefs = Preferences::default();
        for i in 0..8 {
            prefs.select_event(&format!("weekly-{}", i));
        }
        assert_eq!(prefs.recent_events.len(), MAX_RECENT_EVENTS);
        assert_eq!(prefs.recent_events[0], "weekly-7");
        assert_eq!(prefs.recent_events[4], "weekly-3");
    }

    #[test]
    fn test_blank_slug_ignored() {
        let mut prefs = Preferences::default();
        assert!(!prefs.select_event("   "));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        assert_eq!(load_preferences(&path).unwrap(), Preferences::default());

        let mut prefs = Preferences::default();
        prefs.select_event("evo-2026");
        save_preferences(&path, &prefs).unwrap();
        assert_eq!(load_preferences(&path).unwrap(), prefs);
    }
}
