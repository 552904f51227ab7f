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

use crate::constants::*;
use presign_core::utils::Redact;
use presign_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for presigning AWS IoT websocket urls.
#[derive(Clone, Default)]
pub struct Config {
    /// `region` will be loaded from:
    ///
    /// - env value: `AWS_REGION`
    /// - env value: `AWS_DEFAULT_REGION`
    pub region: Option<String>,
    /// `host` of the AWS IoT data endpoint, loaded from env value `AWS_IOT_ENDPOINT`.
    ///
    /// Looks like `a1b2c3-ats.iot.us-east-1.amazonaws.com`.
    pub host: Option<String>,
    /// `access_key_id` will be loaded from env value `AWS_ACCESS_KEY_ID`.
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from env value `AWS_SECRET_ACCESS_KEY`.
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from env value `AWS_SESSION_TOKEN`.
    pub session_token: Option<String>,
}

impl Config {
    /// Load config from env.
    ///
    /// Empty values are treated as unset.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            region: ctx.env_var_any(&[AWS_REGION, AWS_DEFAULT_REGION]),
            host: ctx.env_var_any(&[AWS_IOT_ENDPOINT]),
            access_key_id: ctx.env_var_any(&[AWS_ACCESS_KEY_ID]),
            secret_access_key: ctx.env_var_any(&[AWS_SECRET_ACCESS_KEY]),
            session_token: ctx.env_var_any(&[AWS_SESSION_TOKEN]),
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("host", &self.host)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .finish()
    }
}

/// Where an AWS IoT websocket connection goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSocketOptions {
    /// Host of the IoT data endpoint, emitted in the url as given.
    pub host: String,
    /// Region the endpoint lives in.
    pub region: String,
}

impl WebSocketOptions {
    /// Create new options.
    pub fn new(host: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            region: region.into(),
        }
    }
}

impl TryFrom<&Config> for WebSocketOptions {
    type Error = Error;

    fn try_from(cfg: &Config) -> Result<Self> {
        let host = cfg.host.clone().ok_or_else(|| {
            Error::config_invalid(format!("{AWS_IOT_ENDPOINT} is required but not set"))
        })?;
        let region = cfg.region.clone().ok_or_else(|| {
            Error::config_invalid(format!(
                "{AWS_REGION} or {AWS_DEFAULT_REGION} is required but not set"
            ))
        })?;
        Ok(Self { host, region })
    }
}
