use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::config::FaceApiConfig;
use crate::detection::domain::face_detector::FaceDetector;
use crate::error::FaceBlurError;
use crate::shared::constants::{FACE_DETECT_ROUTE, RECOGNITION_MODEL, SUBSCRIPTION_KEY_HEADER};
use crate::shared::region::FaceRegion;

/// One face entry in the service's JSON response body.
#[derive(Debug, Deserialize)]
struct DetectedFace {
    #[serde(rename = "faceRectangle")]
    face_rectangle: FaceRectangle,
}

#[derive(Debug, Deserialize)]
struct FaceRectangle {
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

/// Face detector backed by an Azure Face-compatible HTTPS service.
///
/// Construction is purely local: the endpoint and key are bound here but no
/// network I/O happens until `detect` is called. Each call posts the raw
/// image bytes and blocks until the response arrives; timeouts are whatever
/// the HTTP client defaults to, and nothing is retried.
pub struct RemoteFaceDetector {
    client: Client,
    detect_url: String,
    key: String,
}

impl RemoteFaceDetector {
    pub fn new(config: &FaceApiConfig) -> Result<Self, FaceBlurError> {
        let client = Client::builder().build().map_err(|e| {
            FaceBlurError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;
        Ok(Self {
            client,
            detect_url: detect_url(&config.endpoint),
            key: config.key.clone(),
        })
    }
}

impl FaceDetector for RemoteFaceDetector {
    fn detect(&self, image_bytes: &[u8]) -> Result<Vec<FaceRegion>, FaceBlurError> {
        let response = self
            .client
            .post(&self.detect_url)
            .query(&[
                ("returnFaceId", "false"),
                ("recognitionModel", RECOGNITION_MODEL),
            ])
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image_bytes.to_vec())
            .send()
            .map_err(|e| FaceBlurError::DetectionService {
                reason: format!("request to {} failed", self.detect_url),
                source: Some(e),
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| FaceBlurError::DetectionService {
                reason: "could not read response body".to_string(),
                source: Some(e),
            })?;

        if !status.is_success() {
            return Err(FaceBlurError::DetectionService {
                reason: format!("service returned {status}: {body}"),
                source: None,
            });
        }

        parse_response(&body)
    }
}

fn detect_url(endpoint: &str) -> String {
    format!("{}/{FACE_DETECT_ROUTE}", endpoint.trim_end_matches('/'))
}

/// Parses the service's JSON face list into regions, preserving order.
fn parse_response(body: &str) -> Result<Vec<FaceRegion>, FaceBlurError> {
    let faces: Vec<DetectedFace> =
        serde_json::from_str(body).map_err(|e| FaceBlurError::DetectionService {
            reason: format!("could not parse response body: {e}"),
            source: None,
        })?;

    Ok(faces
        .into_iter()
        .map(|f| {
            let r = f.face_rectangle;
            FaceRegion::new(r.left, r.top, r.width, r.height)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_url_joins_route() {
        assert_eq!(
            detect_url("https://westus.api.cognitive.microsoft.com"),
            "https://westus.api.cognitive.microsoft.com/face/v1.0/detect"
        );
    }

    #[test]
    fn test_detect_url_strips_trailing_slash() {
        assert_eq!(
            detect_url("https://example.com/"),
            "https://example.com/face/v1.0/detect"
        );
    }

    #[test]
    fn test_parse_response_maps_rectangles_in_order() {
        let body = r#"[
            {"faceId": "a", "faceRectangle": {"top": 10, "left": 20, "width": 30, "height": 40}},
            {"faceRectangle": {"top": 1, "left": 2, "width": 3, "height": 4}}
        ]"#;
        let regions = parse_response(body).unwrap();
        assert_eq!(
            regions,
            vec![FaceRegion::new(20, 10, 30, 40), FaceRegion::new(2, 1, 3, 4)]
        );
    }

    #[test]
    fn test_parse_response_empty_list() {
        let regions = parse_response("[]").unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_parse_response_ignores_extra_fields() {
        let body = r#"[{"faceId": "x", "recognitionModel": "recognition_02",
            "faceRectangle": {"top": 0, "left": 0, "width": 5, "height": 5}}]"#;
        let regions = parse_response(body).unwrap();
        assert_eq!(regions.len(), 1);
    }

    #[test]
    fn test_parse_response_malformed_is_service_error() {
        let err = parse_response("{\"error\": \"unauthorized\"}").unwrap_err();
        assert!(matches!(err, FaceBlurError::DetectionService { .. }));
    }

    #[test]
    fn test_new_is_local_only() {
        // No network I/O at construction: building against an unreachable
        // endpoint must succeed.
        let config = FaceApiConfig::new("https://unreachable.invalid", "key").unwrap();
        assert!(RemoteFaceDetector::new(&config).is_ok());
    }
}
