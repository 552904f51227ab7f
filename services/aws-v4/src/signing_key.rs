use crate::constants::{AWS4_REQUEST, AWS4_SECRET_PREFIX};
use presign_core::hash::{hex_hmac_sha256, hmac_sha256, SHA256_OUTPUT_LEN};
use std::fmt::{Debug, Formatter};
use zeroize::{ZeroizeOnDrop, Zeroizing};

/// The final key of the SigV4 derivation chain.
///
/// ```text
/// kDate    = HMAC("AWS4" + secret, date_stamp)
/// kRegion  = HMAC(kDate, region)
/// kService = HMAC(kRegion, service)
/// kSigning = HMAC(kService, "aws4_request")
/// ```
///
/// Every intermediate key is wiped as soon as the next one is computed, and
/// the signing key itself is wiped on drop. The key bytes are never exposed.
#[derive(ZeroizeOnDrop)]
pub struct SigningKey {
    key: [u8; SHA256_OUTPUT_LEN],
}

impl SigningKey {
    /// Derive the signing key for `date_stamp/region/service/aws4_request`.
    pub fn derive(secret: &str, date_stamp: &str, region: &str, service: &str) -> Self {
        let secret = Zeroizing::new(format!("{AWS4_SECRET_PREFIX}{secret}"));

        let k_date = Zeroizing::new(hmac_sha256(secret.as_bytes(), date_stamp.as_bytes()));
        let k_region = Zeroizing::new(hmac_sha256(k_date.as_slice(), region.as_bytes()));
        let k_service = Zeroizing::new(hmac_sha256(k_region.as_slice(), service.as_bytes()));

        Self {
            key: hmac_sha256(k_service.as_slice(), AWS4_REQUEST.as_bytes()),
        }
    }

    /// Hex encoded HMAC-SHA256 of `string_to_sign` under this key.
    pub fn sign(&self, string_to_sign: &str) -> String {
        hex_hmac_sha256(&self.key, string_to_sign.as_bytes())
    }

    #[cfg(test)]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.key
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey")
    }
}
