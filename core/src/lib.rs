//! Core components for presigning requests.
//!
//! This crate provides the foundational types and traits shared by the presign
//! services. It holds no service specific logic: hashing, time formatting,
//! credential loading abstractions and the diagnostic side channel live here.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the environment implementation used by credential loaders
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and validation (`SigningCredential`)
//! - **DebugSink**: An opt-in channel that receives intermediate signing values
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use presign_core::{Context, ProvideCredential, Result, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::NoopEnv;
pub use context::OsEnv;
pub use context::StaticEnv;

mod api;
pub use api::{ProvideCredential, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};

mod sink;
pub use sink::{DebugSink, LogSink, NoopSink, SigningStage};
