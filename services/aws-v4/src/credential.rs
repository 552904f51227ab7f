// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use presign_core::utils::Redact;
use presign_core::{Error, Result, SigningCredential};
use std::fmt::{Debug, Formatter};
use zeroize::Zeroize;

/// Credential that holds the access_key and secret_key.
///
/// The secret parts are wiped when the credential is dropped.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id for aws services.
    pub access_key_id: String,
    /// Secret access key for aws services.
    pub secret_access_key: String,
    /// Session token for aws services.
    pub session_token: Option<String>,
}

impl Credential {
    /// Create a credential from an access key id and a secret access key.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Attach a session token (`AWS_SESSION_TOKEN` / STS token).
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Reject credentials that cannot produce a verifiable signature.
    ///
    /// An empty session token is treated as absent.
    pub fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(Error::credential_invalid("access key id must not be empty"));
        }
        if self.secret_access_key.is_empty() {
            return Err(Error::credential_invalid(
                "secret access key must not be empty",
            ));
        }
        Ok(())
    }

    /// The session token, if one is set and non-empty.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Drop for Credential {
    fn drop(&mut self) {
        self.secret_access_key.zeroize();
        self.session_token.zeroize();
    }
}
