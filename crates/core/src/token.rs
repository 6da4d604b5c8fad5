//! Bearer token payload decoding and expiry checks
//!
//! Tokens are opaque three-segment credentials (`header.payload.signature`);
//! only the payload segment is consumed here, and only to answer "is this
//! still usable" locally. Signature verification is the backend's job.
//!
//! Every check fails safe: a credential that cannot be decoded is reported as
//! expired, never as live.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Decoded payload of a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Credential identifier, unique per issued token.
    pub id: String,
    pub user_id: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

/// Decode the payload segment of a token.
///
/// Returns `None` for anything that is not a three-segment credential whose
/// middle segment is base64url-encoded JSON with the expected fields. Never
/// panics, never does I/O.
pub fn decode_payload(token: &str) -> Option<TokenPayload> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };
    // Issuers differ on padding; strip it and decode unpadded.
    let raw = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&raw).ok()
}

/// Whether the token is expired at the given instant.
///
/// Pure and deterministic: the same token and instant always yield the same
/// answer. Malformed tokens and payloads without a usable expiry are expired.
pub fn is_expired_at(token: &str, now: DateTime<Utc>) -> bool {
    match decode_payload(token) {
        Some(payload) => now >= payload.expires,
        None => true,
    }
}

/// Whether the token is expired right now.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Utc::now())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde_json::json;

    use super::*;

    fn encode_segments(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.signature")
    }

    fn token_expiring_at(expires: DateTime<Utc>) -> String {
        encode_segments(&json!({
            "id": "credential-1",
            "user_id": "user-1",
            "role": "reader",
            "issued_at": (expires - Duration::hours(2)).to_rfc3339(),
            "expires": expires.to_rfc3339(),
        }))
    }

    #[test]
    fn wrong_segment_count_is_expired() {
        let now = Utc::now();
        for token in ["", "justonesegment", "two.segments", "a.b.c.d", "..{}.."] {
            assert!(is_expired_at(token, now), "token {token:?} should be expired");
        }
    }

    #[test]
    fn undecodable_payload_is_expired() {
        let now = Utc::now();
        assert!(is_expired_at("aGVhZA.%%%.c2ln", now));
        let not_json = format!("aGVhZA.{}.c2ln", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(is_expired_at(&not_json, now));
    }

    #[test]
    fn missing_expiry_is_expired() {
        let token = encode_segments(&json!({
            "id": "credential-1",
            "user_id": "user-1",
            "role": "reader",
            "issued_at": Utc::now().to_rfc3339(),
        }));
        assert!(is_expired_at(&token, Utc::now()));
    }

    #[test]
    fn future_expiry_is_live() {
        let now = Utc::now();
        let token = token_expiring_at(now + Duration::hours(1));
        assert!(!is_expired_at(&token, now));
    }

    #[test]
    fn past_or_equal_expiry_is_expired() {
        let now = Utc::now();
        assert!(is_expired_at(&token_expiring_at(now - Duration::hours(1)), now));
        assert!(is_expired_at(&token_expiring_at(now), now));
    }

    #[test]
    fn expiry_check_is_deterministic() {
        let now = Utc::now();
        let token = token_expiring_at(now + Duration::seconds(30));
        assert_eq!(is_expired_at(&token, now), is_expired_at(&token, now));
    }

    #[test]
    fn padded_payload_segment_decodes() {
        let now = Utc::now();
        let body = base64::engine::general_purpose::URL_SAFE.encode(
            json!({
                "id": "credential-1",
                "user_id": "user-1",
                "role": "admin",
                "issued_at": now.to_rfc3339(),
                "expires": (now + Duration::hours(1)).to_rfc3339(),
            })
            .to_string(),
        );
        let token = format!("head.{body}.sig");
        assert!(!is_expired_at(&token, now));
    }

    #[test]
    fn decode_payload_exposes_fields() {
        let now = Utc::now();
        let token = token_expiring_at(now + Duration::hours(1));
        let payload = decode_payload(&token).unwrap();
        assert_eq!(payload.user_id, "user-1");
        assert_eq!(payload.role, Role::Reader);
        assert!(payload.expires > payload.issued_at);
    }

    #[test]
    fn decode_payload_returns_none_on_garbage() {
        assert_eq!(decode_payload("not a token"), None);
        assert_eq!(decode_payload("a.b.c"), None);
        assert_eq!(decode_payload(""), None);
    }
}
