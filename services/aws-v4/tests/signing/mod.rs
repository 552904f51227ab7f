mod known_vector;
mod properties;
mod url_shape;

use chrono::{TimeZone, Utc};
use presign_aws_v4::{Credential, PresignRequest, WebSocketOptions};
use presign_core::time::DateTime;

pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
pub const HOST: &str = "a1b2c3.iot.us-east-1.amazonaws.com";
pub const REGION: &str = "us-east-1";

pub const SESSION_TOKEN: &str = "AQoDYXdzEPT//////////wEXAMPLEtc764bNrC9SAPBSM22wDOk4x4HIZ8j4FZTwdQWLWsKWHGBuFqwAeMicRXmxfpSPfIeoIYRqTflfKD8YUuwthAx7mSEI/qkPpKPi/kMcGdQrmGdeehM4IC1NtBmUpp2wUE8phUZampKsburEDy0KPkyQDYwT7WZ0wq5VSXDvp75YU9HFvlRd8Tx6q6fE8YQcHNVXAkiY9q6d+xo0rKwT38xVqr7ZD0u0iPPkUL64lIZbqBAz+scqKmlzm8FDrypNC9Yjc8fPOLn9FX9KSYvKTr4rvx3iSIlTJabIQwj2ICCR/oLxBA==";

/// Signature of the known vector at 2015-01-01T00:00:00Z.
pub const SIGNATURE: &str = "5a70dd2b1357a96772adea5af8169b5400f3c61073c1ff9fc87b048119a08e38";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fixed_time() -> DateTime {
    Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap()
}

pub fn credential() -> Credential {
    Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY)
}

pub fn options() -> WebSocketOptions {
    WebSocketOptions::new(HOST, REGION)
}

pub fn request(host: &str, query: &str) -> PresignRequest {
    PresignRequest::new("wss://", host, "/mqtt", query)
}
