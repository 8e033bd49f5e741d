// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Per-user session state
//!
//! A session starts empty, is filled from the settings cache or by explicit
//! connect/save actions, and is torn down with [`Session::clear`]. It is passed
//! by reference to every pipeline stage that needs it.

use crate::analytics::{Credentials, ServiceAccountKey};
use crate::error::{AssistantError, Result};
use crate::models::HistoryEntry;
use crate::providers::AiSettings;

#[derive(Debug, Clone)]
pub struct Session {
    credentials: Option<Credentials>,
    ai: AiSettings,
    history: Vec<HistoryEntry>,
    enhance_enabled: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty session: not connected, default AI settings, no history
    pub fn new() -> Self {
        Self {
            credentials: None,
            ai: AiSettings::default(),
            history: Vec::new(),
            enhance_enabled: true,
        }
    }

    /// Validate and store a property id and key file contents
    pub fn connect(&mut self, property_id: &str, key_json: &str) -> Result<&Credentials> {
        let property_id = property_id.trim();
        if property_id.is_empty() || key_json.trim().is_empty() {
            return Err(AssistantError::InvalidCredentials(
                "both a property ID and a service account file are required".to_string(),
            ));
        }
        let key = ServiceAccountKey::from_json(key_json)?;
        let credentials = Credentials::new(key, property_id)?;
        Ok(self.credentials.insert(credentials))
    }

    /// Install credentials that were already validated (settings cache)
    pub fn restore_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    pub fn disconnect(&mut self) {
        self.credentials = None;
    }

    pub fn is_connected(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn property_id(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.property_id.as_str())
    }

    pub fn ai(&self) -> &AiSettings {
        &self.ai
    }

    pub fn set_ai(&mut self, ai: AiSettings) {
        self.ai = ai;
    }

    pub fn enhance_enabled(&self) -> bool {
        self.enhance_enabled
    }

    pub fn set_enhance_enabled(&mut self, enabled: bool) {
        self.enhance_enabled = enabled;
    }

    /// Append a submitted question to the history log
    pub fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// Replace the history log (settings cache load)
    pub fn restore_history(&mut self, history: Vec<HistoryEntry>) {
        self.history = history;
    }

    /// History in insertion order
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// History entry by 1-based position
    pub fn history_entry(&self, number: usize) -> Result<&HistoryEntry> {
        number
            .checked_sub(1)
            .and_then(|i| self.history.get(i))
            .ok_or(AssistantError::HistoryEntryNotFound(number))
    }

    /// Tear the session down to its initial empty state
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
