use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signers as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used to load credentials from the environment.
///
/// Returning `Ok(None)` means "nothing here", so a chain can move on to the
/// next provider. Errors are reserved for sources that exist but are broken.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from the current context.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}
