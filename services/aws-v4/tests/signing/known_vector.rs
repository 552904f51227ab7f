use super::*;
use presign_aws_v4::{iot, RequestSigner, IOT_SERVICE};
use presign_core::{DebugSink, SigningStage};
use pretty_assertions::assert_eq;
use std::sync::Mutex;

const QUERY: &str = "X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Credential=AKIDEXAMPLE%2F20150101%2Fus-east-1%2Fiotdata%2Faws4_request&X-Amz-Date=20150101T000000Z&X-Amz-SignedHeaders=host";

#[derive(Debug, Default)]
struct RecordingSink(Mutex<Vec<(SigningStage, String)>>);

impl RecordingSink {
    fn get(&self, stage: SigningStage) -> Option<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, v)| v.clone())
    }
}

impl DebugSink for RecordingSink {
    fn record(&self, stage: SigningStage, value: &str) {
        self.0.lock().unwrap().push((stage, value.to_string()));
    }
}

#[test]
fn test_known_vector_intermediates() -> anyhow::Result<()> {
    init_logger();

    let sink = RecordingSink::default();
    let signed =
        iot::prepare_websocket_url_with_sink(&options(), &credential(), fixed_time(), &sink)?;

    assert_eq!(
        sink.get(SigningStage::CanonicalRequest).unwrap(),
        format!(
            "GET\n/mqtt\n{QUERY}\nhost:{HOST}\n\nhost\ne3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        )
    );
    assert_eq!(
        sink.get(SigningStage::HashedCanonicalRequest).unwrap(),
        "faf0f2778e38dbb5e47bd22b5511de9590ca95d87177d8696001f8b8075a78a0"
    );
    assert_eq!(
        sink.get(SigningStage::StringToSign).unwrap(),
        "AWS4-HMAC-SHA256\n20150101T000000Z\n20150101/us-east-1/iotdata/aws4_request\nfaf0f2778e38dbb5e47bd22b5511de9590ca95d87177d8696001f8b8075a78a0"
    );
    assert_eq!(sink.get(SigningStage::Signature).unwrap(), SIGNATURE);
    assert_eq!(
        signed.as_str(),
        format!("wss://{HOST}/mqtt?{QUERY}&X-Amz-Signature={SIGNATURE}")
    );
    assert_eq!(sink.get(SigningStage::Url).unwrap(), signed.as_str());
    Ok(())
}

#[test]
fn test_known_vector_with_request_signer() -> anyhow::Result<()> {
    let signer = RequestSigner::new(IOT_SERVICE, REGION).with_sink(presign_core::LogSink);
    let signed = signer.presign(&request(HOST, QUERY), &credential(), fixed_time())?;

    assert_eq!(signed.signature(), SIGNATURE);
    assert_eq!(
        signed.into_string(),
        iot::prepare_websocket_url(&options(), &credential(), fixed_time())?.into_string()
    );
    Ok(())
}
