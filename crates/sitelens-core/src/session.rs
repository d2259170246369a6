//! Session hand-off between the analyze and results steps
//!
//! The analyze step writes one payload; the results step takes it, which also
//! removes it. Values are stored as JSON text, so any string key-value backend
//! can stand in for [`MemorySessionStore`].

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::error::SessionError;
use crate::types::{SessionPayload, SiteProfile};

/// Key the current analysis is stored under.
pub const ANALYSIS_SESSION_KEY: &str = "seoAnalysis";

/// String key-value store with take-once reads.
pub trait SessionStore: Send + Sync {
    fn put(&self, key: &str, value: String);

    /// Remove and return the value under `key`.
    fn take(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn put(&self, key: &str, value: String) {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value);
    }

    fn take(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key)
    }
}

/// Write `{url, profile, timestamp}` for the results step, replacing any
/// payload that was never taken.
pub fn store_analysis(
    store: &dyn SessionStore,
    url: &str,
    profile: &SiteProfile,
) -> Result<(), SessionError> {
    let payload = SessionPayload {
        url: url.to_string(),
        profile: profile.clone(),
        timestamp: Utc::now(),
    };
    let encoded = serde_json::to_string(&payload).map_err(SessionError::Encode)?;
    store.put(ANALYSIS_SESSION_KEY, encoded);
    Ok(())
}

/// Take the pending analysis, if any. A second call returns `None`.
pub fn take_analysis(store: &dyn SessionStore) -> Result<Option<SessionPayload>, SessionError> {
    store
        .take(ANALYSIS_SESSION_KEY)
        .map(|raw| serde_json::from_str(&raw).map_err(SessionError::Decode))
        .transpose()
}
