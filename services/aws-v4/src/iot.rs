//! Presigned websocket urls for the AWS IoT data plane.
//!
//! MQTT over websocket authenticates with a SigV4 signature carried in the
//! query of the upgrade request to `wss://<endpoint>/mqtt`.

use crate::config::WebSocketOptions;
use crate::constants::*;
use crate::sign_request::{sign_url, PresignRequest, Scope, SignedUrl};
use crate::Credential;
use log::debug;
use presign_core::time::{DateTime, SigningTime};
use presign_core::{DebugSink, NoopSink, Result};

/// Build the presign query for an IoT websocket connection.
///
/// ```text
/// X-Amz-Algorithm=AWS4-HMAC-SHA256
/// &X-Amz-Credential=<akid>%2F<date>%2F<region>%2F<service>%2Faws4_request
/// &X-Amz-Date=<timestamp>
/// &X-Amz-SignedHeaders=host
/// ```
pub fn websocket_query(
    access_key_id: &str,
    time: &SigningTime,
    region: &str,
    service: &str,
) -> String {
    let scope = Scope::new(time.date_stamp(), region, service);
    format!(
        "{X_AMZ_ALGORITHM}={AWS4_HMAC_SHA256}&{X_AMZ_CREDENTIAL}={}&{X_AMZ_DATE}={}&{X_AMZ_SIGNED_HEADERS}={HOST}",
        scope.encoded_credential(access_key_id),
        time.timestamp(),
    )
}

/// Presign a `wss://<host>/mqtt` url for AWS IoT at `time`.
pub fn prepare_websocket_url(
    options: &WebSocketOptions,
    cred: &Credential,
    time: DateTime,
) -> Result<SignedUrl> {
    prepare_websocket_url_with_sink(options, cred, time, &NoopSink)
}

/// Same as [`prepare_websocket_url`], reporting intermediate values to `sink`.
pub fn prepare_websocket_url_with_sink(
    options: &WebSocketOptions,
    cred: &Credential,
    time: DateTime,
    sink: &dyn DebugSink,
) -> Result<SignedUrl> {
    let time = SigningTime::new(time);
    let scope = Scope::new(time.date_stamp(), &options.region, IOT_SERVICE);
    let query = websocket_query(&cred.access_key_id, &time, &options.region, IOT_SERVICE);
    let req = PresignRequest::new(WSS_SCHEME, &options.host, IOT_MQTT_PATH, query);

    debug!(
        "presigning iot websocket url for {} in {}",
        options.host,
        scope.credential_scope()
    );
    sign_url(&req, cred, &scope, time.timestamp(), sink)
}
