use crate::canonical::{canonical_request_string, hashed_canonical_request};
use crate::constants::{
    AWS4_HMAC_SHA256, AWS4_REQUEST, AWS_QUERY_ENCODE_SET, X_AMZ_SECURITY_TOKEN, X_AMZ_SIGNATURE,
};
use crate::signing_key::SigningKey;
use crate::Credential;
use log::debug;
use percent_encoding::utf8_percent_encode;
use presign_core::time::{now, DateTime, SigningTime};
use presign_core::utils::redact_query_param;
use presign_core::{DebugSink, Error, NoopSink, Result, SigningStage};
use std::fmt::{self, Display, Write};
use std::sync::Arc;

/// A request to be presigned.
///
/// The query must already be percent-encoded and in the order it will be
/// sent: it is signed byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignRequest {
    method: String,
    scheme: String,
    host: String,
    path: String,
    query: String,
    payload: Vec<u8>,
}

impl PresignRequest {
    /// Create a `GET` request with an empty payload.
    ///
    /// `scheme` includes the separator, for example `wss://`.
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            method: "GET".to_string(),
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
            query: query.into(),
            payload: Vec::new(),
        }
    }

    /// Override the http method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the payload whose hash goes into the canonical request.
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Http method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Scheme including the separator.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host as given by the caller.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Encoded query string, without the leading `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Credential scope: `<date_stamp>/<region>/<service>/aws4_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    date_stamp: String,
    region: String,
    service: String,
}

impl Scope {
    /// Create a new scope.
    pub fn new(
        date_stamp: impl Into<String>,
        region: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            date_stamp: date_stamp.into(),
            region: region.into(),
            service: service.into(),
        }
    }

    /// Date stamp, `YYYYMMDD`.
    pub fn date_stamp(&self) -> &str {
        &self.date_stamp
    }

    /// Region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// `20150101/us-east-1/iotdata/aws4_request`
    pub fn credential_scope(&self) -> String {
        format!(
            "{}/{}/{}/{AWS4_REQUEST}",
            self.date_stamp, self.region, self.service
        )
    }

    /// Value of `X-Amz-Credential`: `<akid>/<scope>`, percent-encoded.
    pub fn encoded_credential(&self, access_key_id: &str) -> String {
        let credential = format!("{access_key_id}/{}", self.credential_scope());
        utf8_percent_encode(&credential, &AWS_QUERY_ENCODE_SET).to_string()
    }

    fn validate(&self) -> Result<()> {
        if self.date_stamp.is_empty() {
            return Err(Error::request_invalid("date stamp must not be empty"));
        }
        if self.region.is_empty() {
            return Err(Error::request_invalid("region must not be empty"));
        }
        if self.service.is_empty() {
            return Err(Error::request_invalid("service must not be empty"));
        }
        Ok(())
    }
}

/// A presigned URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    url: String,
    signature: String,
}

impl SignedUrl {
    /// The full URL.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The hex encoded signature carried in `X-Amz-Signature`.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Consume and return the URL.
    pub fn into_string(self) -> String {
        self.url
    }
}

impl Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for SignedUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    timestamp: &str,
    scope: &Scope,
    hashed_canonical_request: &str,
) -> Result<String> {
    let mut f = String::with_capacity(128);
    writeln!(f, "{AWS4_HMAC_SHA256}")?;
    writeln!(f, "{timestamp}")?;
    writeln!(f, "{}", scope.credential_scope())?;
    write!(f, "{hashed_canonical_request}")?;
    Ok(f)
}

/// Presign `req` and return the URL with `X-Amz-Signature` appended, followed
/// by `X-Amz-Security-Token` if the credential carries a session token.
///
/// All input is validated before anything is hashed. Intermediate values are
/// reported to `sink`; the derived key never is.
///
/// The session token is encoded with the AWS unreserved set, so `!*'()` are
/// percent-encoded too, unlike JavaScript's `encodeURIComponent`.
pub fn sign_url(
    req: &PresignRequest,
    cred: &Credential,
    scope: &Scope,
    timestamp: &str,
    sink: &dyn DebugSink,
) -> Result<SignedUrl> {
    cred.validate()?;
    scope.validate()?;
    if req.host.is_empty() {
        return Err(Error::request_invalid("host must not be empty"));
    }
    if timestamp.is_empty() {
        return Err(Error::request_invalid("timestamp must not be empty"));
    }

    let creq = canonical_request_string(
        &req.method,
        &req.path,
        &req.query,
        &req.host,
        &req.payload,
    )?;
    sink.record(SigningStage::CanonicalRequest, &creq);

    let hashed = hashed_canonical_request(&creq);
    sink.record(SigningStage::HashedCanonicalRequest, &hashed);

    let sts = string_to_sign(timestamp, scope, &hashed)?;
    sink.record(SigningStage::StringToSign, &sts);

    let signature = {
        let key = SigningKey::derive(
            &cred.secret_access_key,
            &scope.date_stamp,
            &scope.region,
            &scope.service,
        );
        key.sign(&sts)
    };
    sink.record(SigningStage::Signature, &signature);

    let mut url = String::with_capacity(
        req.scheme.len() + req.host.len() + req.path.len() + req.query.len() + 128,
    );
    write!(
        url,
        "{}{}{}?{}&{X_AMZ_SIGNATURE}={signature}",
        req.scheme, req.host, req.path, req.query
    )?;
    if let Some(token) = cred.session_token() {
        write!(
            url,
            "&{X_AMZ_SECURITY_TOKEN}={}",
            utf8_percent_encode(token, &AWS_QUERY_ENCODE_SET)
        )?;
    }
    sink.record(
        SigningStage::Url,
        &redact_query_param(&url, X_AMZ_SECURITY_TOKEN),
    );

    Ok(SignedUrl { url, signature })
}

/// RequestSigner that implement AWS SigV4 query presigning.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
    sink: Option<Arc<dyn DebugSink>>,
}

impl RequestSigner {
    /// Create a new builder for AWS V4 signer.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
            sink: None,
        }
    }

    /// Specify the signing time used by [`RequestSigner::presign_now`].
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Report intermediate values to `sink`.
    pub fn with_sink(mut self, sink: impl DebugSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Service this signer is scoped to.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region this signer is scoped to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Scope for the given signing time.
    pub fn scope(&self, time: &SigningTime) -> Scope {
        Scope::new(time.date_stamp(), &self.region, &self.service)
    }

    /// Presign `req` at `time`.
    pub fn presign(
        &self,
        req: &PresignRequest,
        cred: &Credential,
        time: DateTime,
    ) -> Result<SignedUrl> {
        let time = SigningTime::new(time);
        let scope = self.scope(&time);
        debug!("calculated scope: {}", scope.credential_scope());

        let sink: &dyn DebugSink = match &self.sink {
            Some(sink) => &**sink,
            None => &NoopSink,
        };
        sign_url(req, cred, &scope, time.timestamp(), sink)
    }

    /// Presign `req` at the configured time, or now.
    pub fn presign_now(&self, req: &PresignRequest, cred: &Credential) -> Result<SignedUrl> {
        self.presign(req, cred, self.time.unwrap_or_else(now))
    }
}
