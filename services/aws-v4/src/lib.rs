//! AWS SigV4 query presigning.
//!
//! This crate presigns urls with AWS Signature Version 4 where only the `host`
//! header is signed, the shape used by AWS IoT MQTT over websocket.
//!
//! ## Example
//!
//! ```no_run
//! use presign_aws_v4::{iot, Credential, WebSocketOptions};
//! use presign_core::time::now;
//!
//! # fn main() -> presign_core::Result<()> {
//! let options = WebSocketOptions::new("a1b2c3-ats.iot.us-east-1.amazonaws.com", "us-east-1");
//! let cred = Credential::new("access_key_id", "secret_access_key");
//!
//! let url = iot::prepare_websocket_url(&options, &cred, now())?;
//! println!("{url}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;
pub use config::WebSocketOptions;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

pub mod canonical;

mod signing_key;
pub use signing_key::SigningKey;

mod sign_request;
pub use sign_request::sign_url;
pub use sign_request::string_to_sign;
pub use sign_request::PresignRequest;
pub use sign_request::RequestSigner;
pub use sign_request::Scope;
pub use sign_request::SignedUrl;

pub mod iot;

pub use constants::IOT_SERVICE;
