use super::*;
use chrono::{TimeZone, Utc};
use presign_aws_v4::{iot, sign_url, Scope, WebSocketOptions};
use presign_core::time::SigningTime;
use presign_core::{ErrorKind, NoopSink};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_deterministic() -> anyhow::Result<()> {
    let a = iot::prepare_websocket_url(&options(), &credential(), fixed_time())?;
    let b = iot::prepare_websocket_url(&options(), &credential(), fixed_time())?;
    assert_eq!(a, b);

    let later = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 1).unwrap();
    let c = iot::prepare_websocket_url(&options(), &credential(), later)?;
    assert_ne!(a.signature(), c.signature());
    Ok(())
}

#[test]
fn test_host_is_normalized_for_signing() -> anyhow::Result<()> {
    let lower = iot::prepare_websocket_url(
        &WebSocketOptions::new("example.com", REGION),
        &credential(),
        fixed_time(),
    )?;
    let mixed = iot::prepare_websocket_url(
        &WebSocketOptions::new("Example.COM", REGION),
        &credential(),
        fixed_time(),
    )?;

    assert_eq!(lower.signature(), mixed.signature());
    // The url keeps the host as given.
    assert!(mixed.as_str().starts_with("wss://Example.COM/mqtt?"));
    Ok(())
}

#[test]
fn test_session_token_only_appends() -> anyhow::Result<()> {
    let plain = iot::prepare_websocket_url(&options(), &credential(), fixed_time())?;
    let with_token = iot::prepare_websocket_url(
        &options(),
        &credential().with_session_token(SESSION_TOKEN),
        fixed_time(),
    )?;

    assert_eq!(plain.signature(), with_token.signature());

    let suffix = with_token
        .as_str()
        .strip_prefix(plain.as_str())
        .expect("token url must extend the plain url");
    assert!(suffix.starts_with("&X-Amz-Security-Token=AQoDYXdzEPT%2F%2F%2F%2F%2F%2F%2F%2F%2F%2FwEXAMPLE"));
    assert!(suffix.ends_with("ICCR%2FoLxBA%3D%3D"));
    assert_eq!(suffix.matches('&').count(), 1);
    assert!(!suffix.contains('+'));
    Ok(())
}

#[test]
fn test_session_token_reserved_marks_are_encoded() -> anyhow::Result<()> {
    let signed = iot::prepare_websocket_url(
        &options(),
        &credential().with_session_token("a!*'()b-._~"),
        fixed_time(),
    )?;
    assert!(signed
        .as_str()
        .ends_with("&X-Amz-Security-Token=a%21%2A%27%28%29b-._~"));
    Ok(())
}

#[test]
fn test_large_query() -> anyhow::Result<()> {
    let query = format!("X-Amz-Date=20150101T000000Z&pad={}", "a".repeat(1 << 20));
    let signed = sign_url(
        &request(HOST, &query),
        &credential(),
        &Scope::new("20150101", REGION, "iotdata"),
        "20150101T000000Z",
        &NoopSink,
    )?;
    assert_eq!(signed.signature().len(), 64);
    assert!(signed.as_str().contains(&query));
    Ok(())
}

#[test]
fn test_empty_session_token_is_absent() -> anyhow::Result<()> {
    let plain = iot::prepare_websocket_url(&options(), &credential(), fixed_time())?;
    let empty = iot::prepare_websocket_url(
        &options(),
        &credential().with_session_token(""),
        fixed_time(),
    )?;
    assert_eq!(plain, empty);
    Ok(())
}

#[test_case("2024-02-29T23:59:59Z", "20240229T235959Z", "20240229"; "leap day")]
#[test_case("2000-02-29T00:00:00Z", "20000229T000000Z", "20000229"; "leap century")]
#[test_case("2014-12-31T23:59:59Z", "20141231T235959Z", "20141231"; "year end")]
#[test_case("2015-01-01T00:00:00Z", "20150101T000000Z", "20150101"; "year start")]
#[test_case("2023-03-01T00:00:00Z", "20230301T000000Z", "20230301"; "after february")]
fn test_timestamp_and_scope_agree(instant: &str, timestamp: &str, date_stamp: &str) {
    let time = chrono::DateTime::parse_from_rfc3339(instant)
        .unwrap()
        .with_timezone(&Utc);
    let signed = iot::prepare_websocket_url(&options(), &credential(), time).unwrap();

    assert!(signed
        .as_str()
        .contains(&format!("&X-Amz-Date={timestamp}&")));
    assert!(signed.as_str().contains(&format!(
        "X-Amz-Credential={ACCESS_KEY_ID}%2F{date_stamp}%2F{REGION}%2Fiotdata%2Faws4_request"
    )));

    // Signing with an explicitly built scope gives the same result.
    let st = SigningTime::new(time);
    assert_eq!(st.timestamp(), timestamp);
    let query = iot::websocket_query(ACCESS_KEY_ID, &st, REGION, "iotdata");
    let again = sign_url(
        &request(HOST, &query),
        &credential(),
        &Scope::new(date_stamp, REGION, "iotdata"),
        timestamp,
        &NoopSink,
    )
    .unwrap();
    assert_eq!(signed, again);
}

#[test]
fn test_key_derivation_is_scoped() -> anyhow::Result<()> {
    let query = "X-Amz-Date=20150101T000000Z";
    let sign = |scope: Scope| {
        sign_url(
            &request(HOST, query),
            &credential(),
            &scope,
            "20150101T000000Z",
            &NoopSink,
        )
        .map(|s| s.signature().to_string())
    };

    let base = sign(Scope::new("20150101", "us-east-1", "iotdata"))?;
    assert_ne!(base, sign(Scope::new("20150102", "us-east-1", "iotdata"))?);
    assert_ne!(base, sign(Scope::new("20150101", "us-west-2", "iotdata"))?);
    assert_ne!(base, sign(Scope::new("20150101", "us-east-1", "iot"))?);
    // Swapping the values of two derivation steps changes the key.
    assert_ne!(base, sign(Scope::new("us-east-1", "20150101", "iotdata"))?);
    Ok(())
}

#[test_case("", SECRET_ACCESS_KEY, HOST, REGION, ErrorKind::CredentialInvalid; "empty access key id")]
#[test_case(ACCESS_KEY_ID, "", HOST, REGION, ErrorKind::CredentialInvalid; "empty secret")]
#[test_case(ACCESS_KEY_ID, SECRET_ACCESS_KEY, "", REGION, ErrorKind::RequestInvalid; "empty host")]
#[test_case(ACCESS_KEY_ID, SECRET_ACCESS_KEY, HOST, "", ErrorKind::RequestInvalid; "empty region")]
fn test_invalid_input(ak: &str, sk: &str, host: &str, region: &str, kind: ErrorKind) {
    let err = iot::prepare_websocket_url(
        &WebSocketOptions::new(host, region),
        &presign_aws_v4::Credential::new(ak, sk),
        fixed_time(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), kind);
    assert!(err.is_invalid_input());
    assert!(!err.to_string().contains(SECRET_ACCESS_KEY));
}
