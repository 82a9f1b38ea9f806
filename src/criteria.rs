/// Persistence of the last-used search criteria
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::query::SearchCriteria;

/// localStorage key the criteria blob lives under.
pub const CRITERIA_KEY: &str = "atsSearchCriteria";

#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("persisted criteria is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The persistence capability. The app hands the real localStorage-backed
/// implementation to the store functions; tests hand an in-memory map, so
/// save/load/clear stay testable off the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` as a [`KeyValueStore`]. Writes are best-effort:
/// a full or disabled store logs a warning and the app carries on.
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for key {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Serialize the whole criteria record, overwriting any prior snapshot.
pub fn save(store: &impl KeyValueStore, criteria: &SearchCriteria) {
    match serde_json::to_string(criteria) {
        Ok(json) => store.set(CRITERIA_KEY, &json),
        Err(err) => log::warn!("failed to serialize criteria: {err}"),
    }
}

/// Restore the persisted criteria. `Ok(None)` when nothing is stored;
/// `Err` when the stored blob does not parse. The caller decides the
/// fallback policy; a corrupt blob must never prevent startup.
pub fn load(store: &impl KeyValueStore) -> Result<Option<SearchCriteria>, CriteriaError> {
    match store.get(CRITERIA_KEY) {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Drop the persisted snapshot. Resetting the form fields is the UI's job.
pub fn clear(store: &impl KeyValueStore) {
    store.remove(CRITERIA_KEY);
}

static UNSAFE_WORK_TYPE: OnceLock<Regex> = OnceLock::new();

/// A restored work-type value may only select a radio button if it is
/// non-empty and free of quote, parenthesis, apostrophe, and space
/// characters. Anything else (stale or hand-edited storage) is ignored.
pub fn is_safe_work_type(value: &str) -> bool {
    let unsafe_chars =
        UNSAFE_WORK_TYPE.get_or_init(|| Regex::new(r#"[ "()']"#).expect("fixed character class"));
    !value.is_empty() && !unsafe_chars.is_match(value)
}
