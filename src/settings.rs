// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Local settings cache
//!
//! Small files in the home directory that let the next start reconnect
//! without asking again:
//!
//! - `.ga4_assistant_credentials.json` - service-account key
//! - `.ga4_assistant_propertyid.txt` - property id
//! - `.ga4_assistant_llm.json` - AI provider and API key
//! - `.ga4_assistant_history.json` - question history
//!
//! Files are written only on explicit connect/save actions and removed on
//! disconnect/clear. Unreadable files are skipped with a warning.

use std::path::{Path, PathBuf};

use crate::analytics::{Credentials, ServiceAccountKey};
use crate::error::{AssistantError, Result};
use crate::models::HistoryEntry;
use crate::providers::AiSettings;
use crate::session::Session;

const CREDENTIALS_FILE: &str = ".ga4_assistant_credentials.json";
const PROPERTY_ID_FILE: &str = ".ga4_assistant_propertyid.txt";
const AI_SETTINGS_FILE: &str = ".ga4_assistant_llm.json";
const HISTORY_FILE: &str = ".ga4_assistant_history.json";

#[derive(Debug, Clone)]
pub struct SettingsCache {
    base_dir: PathBuf,
}

impl SettingsCache {
    /// Cache rooted at the user's home directory
    pub fn in_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(AssistantError::HomeNotFound)?;
        Ok(Self::new(home))
    }

    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.base_dir.join(CREDENTIALS_FILE)
    }

    pub fn property_id_path(&self) -> PathBuf {
        self.base_dir.join(PROPERTY_ID_FILE)
    }

    pub fn ai_settings_path(&self) -> PathBuf {
        self.base_dir.join(AI_SETTINGS_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.base_dir.join(HISTORY_FILE)
    }

    /// Build a session from whatever the cache holds
    pub fn load_session(&self) -> Session {
        let mut session = Session::new();

        match self.load_credentials() {
            Ok(Some(credentials)) => {
                log::info!("Auto-connected to GA4 property {}", credentials.property_id);
                session.restore_credentials(credentials);
            }
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring saved credentials: {}", e),
        }

        match self.load_ai_settings() {
            Ok(Some(ai)) => session.set_ai(ai),
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring saved AI settings: {}", e),
        }

        match self.load_history() {
            Ok(history) => session.restore_history(history),
            Err(e) => log::warn!("Ignoring saved history: {}", e),
        }

        session
    }

    /// Saved credentials, if both cache files exist
    pub fn load_credentials(&self) -> Result<Option<Credentials>> {
        let cred_path = self.credentials_path();
        let prop_path = self.property_id_path();
        if !cred_path.exists() || !prop_path.exists() {
            return Ok(None);
        }

        let key = ServiceAccountKey::from_json(&std::fs::read_to_string(&cred_path)?)?;
        let property_id = std::fs::read_to_string(&prop_path)?;
        Ok(Some(Credentials::new(key, property_id.trim())?))
    }

    pub fn save_credentials(&self, credentials: &Credentials) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::write(
            self.credentials_path(),
            serde_json::to_string(&credentials.key.to_value())?,
        )?;
        std::fs::write(self.property_id_path(), &credentials.property_id)?;
        Ok(())
    }

    pub fn clear_credentials(&self) -> Result<()> {
        remove_if_exists(&self.credentials_path())?;
        remove_if_exists(&self.property_id_path())
    }

    pub fn has_ai_settings(&self) -> bool {
        self.ai_settings_path().exists()
    }

    pub fn load_ai_settings(&self) -> Result<Option<AiSettings>> {
        let path = self.ai_settings_path();
        if !path.exists() {
            return Ok(None);
        }
        let settings = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        Ok(Some(settings))
    }

    pub fn save_ai_settings(&self, settings: &AiSettings) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::write(self.ai_settings_path(), serde_json::to_string(settings)?)?;
        Ok(())
    }

    pub fn clear_ai_settings(&self) -> Result<()> {
        remove_if_exists(&self.ai_settings_path())
    }

    pub fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        let path = self.history_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }

    pub fn save_history(&self, history: &[HistoryEntry]) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::write(self.history_path(), serde_json::to_string_pretty(history)?)?;
        Ok(())
    }

    pub fn clear_history(&self) -> Result<()> {
        remove_if_exists(&self.history_path())
    }
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
