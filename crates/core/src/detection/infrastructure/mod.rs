pub mod remote_face_detector;
