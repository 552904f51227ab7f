use crate::{Config, Credential};
use async_trait::async_trait;
use presign_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// ConfigCredentialProvider returns the credential carried by a [`Config`].
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new `ConfigCredentialProvider` instance.
    pub fn new(cfg: Arc<Config>) -> Self {
        Self { config: cfg }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let (Some(ak), Some(sk)) = (&self.config.access_key_id, &self.config.secret_access_key)
        else {
            return Ok(None);
        };

        let cred = Credential::new(ak, sk);
        Ok(Some(match &self.config.session_token {
            Some(token) => cred.with_session_token(token),
            None => cred,
        }))
    }
}
