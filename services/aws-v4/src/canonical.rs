//! Canonical request construction for host-only presigning.

use crate::constants::HOST;
use presign_core::hash::hex_sha256;
use std::fmt::Write;

/// Build the canonical request for a presigned request that signs only `host`.
///
/// ```text
/// <method>
/// <path>
/// <query>
/// host:<lowercase host>
///
/// host
/// <hex sha256 of payload>
/// ```
///
/// `path` and `query` are used as given: they must already be in canonical
/// (encoded and ordered) form.
pub fn canonical_request_string(
    method: &str,
    path: &str,
    query: &str,
    host: &str,
    payload: &[u8],
) -> presign_core::Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{method}")?;
    writeln!(f, "{path}")?;
    writeln!(f, "{query}")?;
    // Canonical headers, each line terminated by its own newline.
    writeln!(f, "{HOST}:{}", host.to_ascii_lowercase())?;
    writeln!(f)?;
    // Signed headers.
    writeln!(f, "{HOST}")?;
    write!(f, "{}", hex_sha256(payload))?;

    Ok(f)
}

/// Hex encoded SHA-256 of the canonical request.
pub fn hashed_canonical_request(canonical_request: &str) -> String {
    hex_sha256(canonical_request.as_bytes())
}
