//! `localStorage`-backed persistence for the story catalog snapshot.

use leptos::logging;
use serde_json::Value;

/// Storage key for the serialized `ShowcaseState`.
pub const SHOWCASE_STATE_KEY: &str = "ui-showcase.state.v1";

#[derive(Debug, Clone, Copy, Default)]
/// Browser store for the catalog snapshot backed by `window.localStorage`.
pub struct ShowcasePrefs;

impl ShowcasePrefs {
    /// Loads the last saved snapshot, if any.
    pub fn load(self) -> Option<Value> {
        decode(&self.load_json(SHOWCASE_STATE_KEY)?)
    }

    /// Saves a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails.
    pub fn save(self, snapshot: &Value) -> Result<(), String> {
        self.save_json(SHOWCASE_STATE_KEY, &snapshot.to_string())
    }

    fn load_json(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn save_json(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(key, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }
}

fn decode(raw: &str) -> Option<Value> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            logging::warn!("ui showcase snapshot decode failed: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decode_accepts_json_and_rejects_garbage() {
        assert_eq!(
            decode(r#"{"selected":"switch--default"}"#),
            Some(json!({ "selected": "switch--default" }))
        );
        assert_eq!(decode("{not json"), None);
    }

    #[test]
    fn native_builds_have_no_backing_store() {
        let prefs = ShowcasePrefs;
        assert!(prefs.save(&json!({ "selected": "text--roles" })).is_ok());
        assert_eq!(prefs.load(), None);
    }
}
