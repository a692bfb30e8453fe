use std::env;

use crate::error::FaceBlurError;
use crate::shared::constants::{FACE_ENDPOINT_ENV, FACE_KEY_ENV};

/// Credentials for the face detection service.
///
/// Built once at startup and passed by parameter; never mutated, never
/// written to disk. Validation is eager so a missing endpoint or key fails
/// here with a clear message instead of on the first network call.
#[derive(Clone, Debug)]
pub struct FaceApiConfig {
    pub endpoint: String,
    pub key: String,
}

impl FaceApiConfig {
    pub fn new(endpoint: &str, key: &str) -> Result<Self, FaceBlurError> {
        if endpoint.trim().is_empty() {
            return Err(FaceBlurError::Configuration(format!(
                "face service endpoint is empty (set {FACE_ENDPOINT_ENV})"
            )));
        }
        if key.trim().is_empty() {
            return Err(FaceBlurError::Configuration(format!(
                "face service key is empty (set {FACE_KEY_ENV})"
            )));
        }
        Ok(Self {
            endpoint: endpoint.to_string(),
            key: key.to_string(),
        })
    }

    /// Reads the endpoint and key from `FACE_ENDPOINT` / `FACE_SUBSCRIPTION_KEY`.
    pub fn from_env() -> Result<Self, FaceBlurError> {
        let endpoint = env::var(FACE_ENDPOINT_ENV)
            .map_err(|_| FaceBlurError::Configuration(format!("{FACE_ENDPOINT_ENV} is not set")))?;
        let key = env::var(FACE_KEY_ENV)
            .map_err(|_| FaceBlurError::Configuration(format!("{FACE_KEY_ENV} is not set")))?;
        Self::new(&endpoint, &key)
    }
}
