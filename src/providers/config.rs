// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! AI provider types and settings

use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

/// Supported AI assistant providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiProvider {
    /// OpenAI ChatGPT (default)
    #[default]
    #[serde(rename = "OpenAI (ChatGPT)", alias = "OpenAI")]
    OpenAI,
    /// Anthropic Claude
    #[serde(rename = "Claude")]
    Claude,
    /// Google Gemini
    #[serde(rename = "Gemini (Google)")]
    Gemini,
    /// Mistral AI
    #[serde(rename = "Mistral")]
    Mistral,
    /// Cohere
    #[serde(rename = "Cohere")]
    Cohere,
    /// Anything else
    #[serde(rename = "Custom")]
    Custom,
}

impl AiProvider {
    pub const ALL: [AiProvider; 6] = [
        Self::OpenAI,
        Self::Claude,
        Self::Gemini,
        Self::Mistral,
        Self::Cohere,
        Self::Custom,
    ];

    /// Get the display name for this provider
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAI => "OpenAI (ChatGPT)",
            Self::Claude => "Claude",
            Self::Gemini => "Gemini (Google)",
            Self::Mistral => "Mistral",
            Self::Cohere => "Cohere",
            Self::Custom => "Custom",
        }
    }

    /// Page where an API key for this provider is created
    pub fn api_key_url(&self) -> Option<&'static str> {
        match self {
            Self::OpenAI => Some("https://platform.openai.com/account/api-keys"),
            Self::Claude => Some("https://console.anthropic.com/settings/keys"),
            Self::Gemini => Some("https://makersuite.google.com/app/apikey"),
            Self::Mistral => Some("https://console.mistral.ai/api-keys"),
            Self::Cohere => Some("https://dashboard.cohere.com/api-keys"),
            Self::Custom => None,
        }
    }

    /// Short name used on the command line
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Claude => "claude",
            Self::Gemini => "gemini",
            Self::Mistral => "mistral",
            Self::Cohere => "cohere",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for AiProvider {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" | "chatgpt" | "openai (chatgpt)" => Ok(Self::OpenAI),
            "claude" | "anthropic" => Ok(Self::Claude),
            "gemini" | "google" | "gemini (google)" => Ok(Self::Gemini),
            "mistral" => Ok(Self::Mistral),
            "cohere" => Ok(Self::Cohere),
            "custom" => Ok(Self::Custom),
            _ => Err(AssistantError::UnknownProvider(s.to_string())),
        }
    }
}

/// Saved AI assistant choice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSettings {
    pub provider: AiProvider,
    #[serde(default)]
    pub api_key: String,
}

impl AiSettings {
    pub fn new(provider: AiProvider, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// API key with all but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }
}
