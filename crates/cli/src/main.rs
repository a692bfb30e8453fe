use std::path::PathBuf;
use std::process;

use clap::Parser;

use faceblur_core::config::FaceApiConfig;
use faceblur_core::detection::domain::face_detector::FaceDetector;
use faceblur_core::detection::infrastructure::remote_face_detector::RemoteFaceDetector;
use faceblur_core::pipeline::blur_images_use_case::BlurImagesUseCase;
use faceblur_core::pipeline::detect_faces_use_case::DetectFacesUseCase;

/// Blurs detected faces in local image files via a remote vision API.
///
/// Each input `<name>.<ext>` produces `<name>-blur.<ext>` (JPEG bytes) in
/// the same directory, overwriting any previous output. Requires the
/// FACE_ENDPOINT and FACE_SUBSCRIPTION_KEY environment variables.
#[derive(Parser)]
#[command(name = "faceblur")]
struct Cli {
    /// Image files to process, in order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = FaceApiConfig::from_env()?;
    let detector: Box<dyn FaceDetector> = Box::new(RemoteFaceDetector::new(&config)?);

    log::info!("Detecting faces ...");
    let tasks = DetectFacesUseCase::new(detector).execute(&cli.inputs)?;

    log::info!("Blurring faces ...");
    BlurImagesUseCase::new().execute(&tasks)?;

    Ok(())
}
