// ABOUTME: Signed, HTTP-only session cookie creation and verification
// ABOUTME: HMAC-SHA256 over the session id using the configured session secret
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session cookie handling
//!
//! Cookie value format is `<session uuid>.<hex hmac-sha256>`. The cookie is
//! non-permanent (no `Max-Age`), `HttpOnly`, `SameSite=Lax` and scoped to `/`,
//! with `Secure` added when configured.

use crate::constants::session::{GENERATED_SECRET_LEN, SESSION_COOKIE_NAME};
use crate::errors::{AppError, AppResult};
use crate::sessions::SessionId;
use axum::http::{header, HeaderMap};
use rand::RngCore;
use ring::hmac;
use std::fmt;

/// Minimum accepted secret length in bytes
pub const MIN_SECRET_LEN: usize = 16;

/// Key material for signing session cookies
#[derive(Clone)]
pub struct SessionSecret {
    bytes: Vec<u8>,
}

impl SessionSecret {
    /// Parse a configured secret
    ///
    /// Hex input of at least [`MIN_SECRET_LEN`] decoded bytes is used as raw
    /// key material; anything else is taken as the literal string bytes.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if the secret is shorter than [`MIN_SECRET_LEN`] bytes
    pub fn from_config_value(value: &str) -> AppResult<Self> {
        let value = value.trim();
        let bytes = match hex::decode(value) {
            Ok(decoded) if decoded.len() >= MIN_SECRET_LEN => decoded,
            _ => value.as_bytes().to_vec(),
        };

        if bytes.len() < MIN_SECRET_LEN {
            return Err(AppError::config_invalid(format!(
                "SESSION_SECRET must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        Ok(Self { bytes })
    }

    /// Random secret for processes started without one
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = vec![0_u8; GENERATED_SECRET_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Raw key material
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(<redacted>)")
    }
}

/// Issues and verifies signed session cookies
#[derive(Clone)]
pub struct SessionCookieManager {
    key: hmac::Key,
    secure: bool,
}

impl SessionCookieManager {
    /// Create a manager signing with `secret`
    #[must_use]
    pub fn new(secret: &SessionSecret, secure: bool) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes()),
            secure,
        }
    }

    /// Signed cookie value for a session id
    #[must_use]
    pub fn sign(&self, session: &SessionId) -> String {
        let id = session.to_string();
        let tag = hmac::sign(&self.key, id.as_bytes());
        format!("{id}.{}", hex::encode(tag.as_ref()))
    }

    /// Session id from a signed cookie value, `None` if malformed or tampered
    #[must_use]
    pub fn verify(&self, value: &str) -> Option<SessionId> {
        let (id, signature) = value.split_once('.')?;
        let signature = hex::decode(signature).ok()?;
        hmac::verify(&self.key, id.as_bytes(), &signature).ok()?;
        id.parse().ok()
    }

    /// Verified session id from request headers
    #[must_use]
    pub fn session_from_headers(&self, headers: &HeaderMap) -> Option<SessionId> {
        let value = get_cookie_value(headers, SESSION_COOKIE_NAME)?;
        let session = self.verify(&value);
        if session.is_none() {
            tracing::debug!("Rejected session cookie with invalid signature");
        }
        session
    }

    /// `Set-Cookie` header value for a session id
    #[must_use]
    pub fn set_cookie_header(&self, session: &SessionId) -> String {
        let mut cookie = format!(
            "{SESSION_COOKIE_NAME}={}; HttpOnly; SameSite=Lax; Path=/",
            self.sign(session)
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

impl fmt::Debug for SessionCookieManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookieManager")
            .field("secure", &self.secure)
            .finish_non_exhaustive()
    }
}

/// Value of the named cookie from any `Cookie` header
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}
