//! Session cookie extraction

use axum::http::{header::COOKIE, HeaderMap};
use percent_encoding::percent_decode_str;

use crate::error::{Error, Result};
use crate::session::models::UserProfile;

/// Look up a cookie by name across every `Cookie` header.
///
/// The first occurrence wins. Values are percent-decoded, and a value that
/// does not decode to UTF-8 is returned as sent.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(cookie_str) = header.to_str() else {
            continue;
        };

        for pair in cookie_str.split(';') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if key.trim() != name {
                continue;
            }

            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);

            return Some(match percent_decode_str(value).decode_utf8() {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => value.to_string(),
            });
        }
    }

    None
}

/// Read the signed-in user from the session cookie.
///
/// Returns `Ok(None)` when the cookie is absent or empty. Any JSON value is
/// returned as sent, `null` included; content that is not JSON at all is
/// reported as [`Error::MalformedSession`].
pub fn read_session(headers: &HeaderMap, cookie_name: &str) -> Result<Option<UserProfile>> {
    let Some(raw) = cookie_value(headers, cookie_name) else {
        return Ok(None);
    };

    if raw.is_empty() {
        return Ok(None);
    }

    UserProfile::from_json(&raw)
        .map(Some)
        .map_err(|source| Error::MalformedSession {
            cookie: cookie_name.to_string(),
            source,
        })
}
