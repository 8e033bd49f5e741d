// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Service-account credentials and OAuth token exchange
//!
//! A service-account key is exchanged for a short-lived access token by
//! signing an RS256 JWT assertion and posting it to the key's token URI
//! (RFC 7523 JWT bearer grant). The token is scoped read-only.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, ReportError, Result};

/// Read-only Analytics scope requested for every token
pub const ANALYTICS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/analytics.readonly";

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Keys a key file must carry to be accepted at connect time
pub const REQUIRED_KEYS: &[&str] = &["type", "project_id", "private_key_id", "private_key"];

static PROPERTY_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5,12}$").expect("property id pattern is valid"));

/// Check a GA4 property id: 5 to 12 digits
pub fn validate_property_id(property_id: &str) -> Result<()> {
    if PROPERTY_ID.is_match(property_id) {
        Ok(())
    } else {
        Err(AssistantError::InvalidPropertyId(property_id.to_string()))
    }
}

/// Service-account key material, kept verbatim as uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceAccountKey {
    raw: serde_json::Map<String, serde_json::Value>,
}

impl ServiceAccountKey {
    /// Parse and validate a key file's contents
    pub fn from_json(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
            AssistantError::InvalidCredentials(format!(
                "not valid JSON ({}); upload the exact file from Google Cloud",
                e
            ))
        })?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(raw) = value else {
            return Err(AssistantError::InvalidCredentials(
                "expected a JSON object".to_string(),
            ));
        };

        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|k| !raw.contains_key(**k))
            .map(|k| k.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AssistantError::MissingCredentialKeys(missing));
        }

        Ok(Self { raw })
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(|v| v.as_str())
    }

    pub fn project_id(&self) -> Option<&str> {
        self.field("project_id")
    }

    pub fn client_email(&self) -> Option<&str> {
        self.field("client_email")
    }

    pub fn private_key_id(&self) -> Option<&str> {
        self.field("private_key_id")
    }

    pub fn private_key(&self) -> Option<&str> {
        self.field("private_key")
    }

    pub fn token_uri(&self) -> &str {
        self.field("token_uri").unwrap_or(DEFAULT_TOKEN_URI)
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.raw.clone())
    }
}

/// Connected property and the key used to read it
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub key: ServiceAccountKey,
    pub property_id: String,
}

impl Credentials {
    pub fn new(key: ServiceAccountKey, property_id: impl Into<String>) -> Result<Self> {
        let property_id = property_id.into();
        validate_property_id(&property_id)?;
        Ok(Self { key, property_id })
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Build the signed JWT assertion for `key`, audience `token_uri`
pub fn build_assertion(key: &ServiceAccountKey, token_uri: &str) -> std::result::Result<String, ReportError> {
    let client_email = key
        .client_email()
        .ok_or_else(|| ReportError::Unexpected("service account key has no client_email".into()))?;
    let private_key = key
        .private_key()
        .ok_or_else(|| ReportError::Unexpected("service account key has no private_key".into()))?;

    let iat = Utc::now().timestamp();
    let claims = AssertionClaims {
        iss: client_email,
        scope: ANALYTICS_READONLY_SCOPE,
        aud: token_uri,
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id().map(String::from);

    let encoding_key = EncodingKey::from_rsa_pem(private_key.as_bytes())
        .map_err(|e| ReportError::Unexpected(format!("unreadable private key: {}", e)))?;

    encode(&header, &claims, &encoding_key)
        .map_err(|e| ReportError::Unexpected(format!("failed to sign token request: {}", e)))
}

/// Exchange a service-account key for a bearer access token
pub fn fetch_access_token(
    client: &reqwest::blocking::Client,
    key: &ServiceAccountKey,
    token_uri_override: Option<&str>,
) -> std::result::Result<String, ReportError> {
    let token_uri = token_uri_override.unwrap_or_else(|| key.token_uri());
    let assertion = build_assertion(key, token_uri)?;

    log::debug!("Requesting access token from {}", token_uri);
    let response = client
        .post(token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .map_err(|e| ReportError::Unexpected(format!("token request failed: {}", e)))?;

    let status = response.status();
    let body = response.text().unwrap_or_default();

    if !status.is_success() {
        let detail = serde_json::from_str::<TokenErrorResponse>(&body)
            .map(|e| match e.error_description {
                Some(desc) => format!("{}: {}", e.error, desc),
                None => e.error,
            })
            .unwrap_or(body);
        return Err(ReportError::Unexpected(format!(
            "authentication failed ({}): {}",
            status, detail
        )));
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| ReportError::Unexpected(format!("invalid token response: {}", e)))?;
    log::debug!("Access token acquired (expires in {:?}s)", token.expires_in);
    Ok(token.access_token)
}
