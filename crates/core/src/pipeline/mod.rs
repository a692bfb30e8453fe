pub mod blur_images_use_case;
pub mod detect_faces_use_case;
pub mod output_path;
