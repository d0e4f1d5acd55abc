//! Access token claims.
//!
//! The payload is decoded without verifying the signature: the client only
//! reads roles and the subject for display purposes, the services verify
//! the token themselves.

use base64::Engine;
use serde::Deserialize;

use crate::error::{ClientError, Result};
use crate::id::AccountId;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessClaims {
    /// Identity-provider account id
    pub sub: AccountId,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub realm_access: RealmAccess,
    /// Unix seconds
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

pub fn decode_access_token(token: &str) -> Result<AccessClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ClientError::Token("Invalid JWT format".into()));
    }

    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| ClientError::Token(format!("Failed to decode JWT: {}", e)))?;

    serde_json::from_slice(&payload)
        .map_err(|e| ClientError::Token(format!("Failed to parse JWT claims: {}", e)))
}

#[cfg(test)]
pub(crate) fn encode_test_token(claims: &serde_json::Value) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    format!(
        "{}.{}.{}",
        engine.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
        engine.encode(claims.to_string()),
        engine.encode("signature")
    )
}
