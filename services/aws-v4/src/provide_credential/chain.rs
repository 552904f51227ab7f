use crate::Credential;
use async_trait::async_trait;
use log::{debug, warn};
use presign_core::{Context, ProvideCredential, Result};
use std::fmt::{self, Debug};

type BoxedProvider = Box<dyn ProvideCredential<Credential = Credential>>;

/// Ordered credential sources, asked one by one until one yields a credential.
///
/// A source that returns an error does not stop the chain: the error is
/// logged with its [`ErrorKind`](presign_core::ErrorKind) and the next source
/// is asked. The chain itself only fails to find anything, it never errors.
#[derive(Default)]
pub struct ProvideCredentialChain {
    providers: Vec<BoxedProvider>,
}

impl ProvideCredentialChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source, asked after every source already in the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether there are no sources.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl FromIterator<BoxedProvider> for ProvideCredentialChain {
    fn from_iter<I: IntoIterator<Item = BoxedProvider>>(iter: I) -> Self {
        Self {
            providers: iter.into_iter().collect(),
        }
    }
}

impl Debug for ProvideCredentialChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.providers).finish()
    }
}

#[async_trait]
impl ProvideCredential for ProvideCredentialChain {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for (idx, provider) in self.providers.iter().enumerate() {
            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    debug!("credential found by provider #{idx} {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => debug!("provider #{idx} {provider:?} has no credential"),
                Err(e) => warn!("credential provider {:?} failed ({}): {}", provider, e.kind(), e),
            }
        }

        debug!("none of {} credential providers had a credential", self.len());
        Ok(None)
    }
}
