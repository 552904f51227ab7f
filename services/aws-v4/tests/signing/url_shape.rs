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

use super::*;
use presign_aws_v4::iot;
use pretty_assertions::assert_eq;

fn params(url: &str) -> Vec<(String, String)> {
    let (_, query) = url.split_once('?').expect("url must have a query");
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn count(params: &[(String, String)], key: &str) -> usize {
    params.iter().filter(|(k, _)| k == key).count()
}

#[test]
fn test_url_shape_without_token() -> anyhow::Result<()> {
    let signed = iot::prepare_websocket_url(&options(), &credential(), fixed_time())?;
    let params = params(signed.as_str());

    let keys: Vec<_> = params.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "X-Amz-Algorithm",
            "X-Amz-Credential",
            "X-Amz-Date",
            "X-Amz-SignedHeaders",
            "X-Amz-Signature",
        ]
    );
    assert_eq!(params[0].1, "AWS4-HMAC-SHA256");
    assert_eq!(params[1].1, "AKIDEXAMPLE/20150101/us-east-1/iotdata/aws4_request");
    assert_eq!(params[2].1, "20150101T000000Z");
    assert_eq!(params[3].1, "host");
    assert_eq!(params[4].1, SIGNATURE);
    assert_eq!(count(&params, "X-Amz-Security-Token"), 0);
    Ok(())
}

#[test]
fn test_url_shape_with_token() -> anyhow::Result<()> {
    let cred = credential().with_session_token(SESSION_TOKEN);
    let signed = iot::prepare_websocket_url(&options(), &cred, fixed_time())?;
    let params = params(signed.as_str());

    assert_eq!(count(&params, "X-Amz-Signature"), 1);
    assert_eq!(count(&params, "X-Amz-Security-Token"), 1);

    // Signature comes before the token, and the token decodes back unchanged.
    let (last_key, last_value) = params.last().unwrap();
    assert_eq!(last_key, "X-Amz-Security-Token");
    assert_eq!(last_value, SESSION_TOKEN);
    assert_eq!(params[params.len() - 2].0, "X-Amz-Signature");
    Ok(())
}

#[test]
fn test_url_prefix() -> anyhow::Result<()> {
    let signed = iot::prepare_websocket_url(&options(), &credential(), fixed_time())?;
    assert!(signed.as_ref().starts_with(&format!("wss://{HOST}/mqtt?")));
    assert_eq!(signed.to_string(), signed.as_str());
    Ok(())
}
