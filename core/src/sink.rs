//! Opt-in diagnostics for the signing pipeline.
//!
//! Signers never print or log intermediate values on their own. A caller that
//! wants to see them passes a [`DebugSink`]; [`NoopSink`] is the default.

use log::debug;
use std::fmt;
use std::fmt::Debug;

/// The intermediate values a signer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningStage {
    /// The canonical request, before hashing.
    CanonicalRequest,
    /// Hex encoded SHA-256 of the canonical request.
    HashedCanonicalRequest,
    /// The string to sign.
    StringToSign,
    /// The final hex encoded signature.
    Signature,
    /// The assembled URL, with any session token redacted.
    Url,
}

impl SigningStage {
    /// Human readable label of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningStage::CanonicalRequest => "canonical request",
            SigningStage::HashedCanonicalRequest => "hashed canonical request",
            SigningStage::StringToSign => "string to sign",
            SigningStage::Signature => "signature",
            SigningStage::Url => "url",
        }
    }
}

impl fmt::Display for SigningStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DebugSink receives intermediate signing values.
///
/// Derived keys never reach a sink.
pub trait DebugSink: Debug + Send + Sync {
    /// Record one intermediate value.
    fn record(&self, stage: SigningStage, value: &str);
}

/// NoopSink drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DebugSink for NoopSink {
    fn record(&self, _: SigningStage, _: &str) {}
}

/// LogSink forwards every value to [`log::debug!`] under target `presign::sigv4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DebugSink for LogSink {
    fn record(&self, stage: SigningStage, value: &str) {
        debug!(target: "presign::sigv4", "{stage}: {value}");
    }
}

impl<T: DebugSink + ?Sized> DebugSink for &T {
    fn record(&self, stage: SigningStage, value: &str) {
        (**self).record(stage, value)
    }
}

impl<T: DebugSink + ?Sized> DebugSink for std::sync::Arc<T> {
    fn record(&self, stage: SigningStage, value: &str) {
        (**self).record(stage, value)
    }
}
