/// Environment variable holding the face service endpoint URL.
pub const FACE_ENDPOINT_ENV: &str = "FACE_ENDPOINT";

/// Environment variable holding the face service subscription key.
pub const FACE_KEY_ENV: &str = "FACE_SUBSCRIPTION_KEY";

/// Detect route appended to the service endpoint.
pub const FACE_DETECT_ROUTE: &str = "face/v1.0/detect";

/// Recognition model requested from the detection service.
pub const RECOGNITION_MODEL: &str = "recognition_02";

/// Header carrying the subscription key on every detection request.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Box blur kernel radius applied to each detected face region.
pub const BLUR_RADIUS: u32 = 20;

/// Suffix inserted before the extension of every output file.
pub const OUTPUT_SUFFIX: &str = "-blur";
