use crate::provide_credential::{
    ConfigCredentialProvider, EnvCredentialProvider, ProvideCredentialChain,
};
use crate::{Config, Credential};
use async_trait::async_trait;
use presign_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// Credential sources a device-side presigner consults by default.
///
/// Resolution order:
///
/// 1. Environment variables (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`,
///    `AWS_SESSION_TOKEN`)
/// 2. The [`Config`] given to [`DefaultCredentialProvider::with_config`], if any
///
/// Use [`DefaultCredentialProvider::with_chain`] for any other order.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Read credentials from the environment only.
    pub fn new() -> Self {
        Self {
            chain: ProvideCredentialChain::new().push(EnvCredentialProvider::new()),
        }
    }

    /// Fall back to the keys carried by `cfg` when the environment has none.
    pub fn with_config(self, cfg: Arc<Config>) -> Self {
        Self {
            chain: self.chain.push(ConfigCredentialProvider::new(cfg)),
        }
    }

    /// Replace the sources entirely.
    pub fn with_chain(chain: ProvideCredentialChain) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
