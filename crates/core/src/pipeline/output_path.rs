use std::path::{Path, PathBuf};

use crate::shared::constants::OUTPUT_SUFFIX;

/// Derives the output path for an input image: `-blur` inserted immediately
/// before the last extension segment, same directory.
///
/// `/a/b/photo.jpg` → `/a/b/photo-blur.jpg`; extensionless inputs get a
/// plain `-blur` suffix. Applying this to an already-derived path is
/// undefined and not guarded against.
pub fn derive(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match input.extension() {
        Some(ext) => {
            input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{}", ext.to_string_lossy()))
        }
        None => input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain_jpeg("/a/b/photo.jpg", "/a/b/photo-blur.jpg")]
    #[case::relative_path("shots/team.png", "shots/team-blur.png")]
    #[case::bare_filename("selfie.jpeg", "selfie-blur.jpeg")]
    #[case::multi_dot_name("/a/archive.tar.jpg", "/a/archive.tar-blur.jpg")]
    #[case::no_extension("/a/rawdump", "/a/rawdump-blur")]
    fn test_derive(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(derive(Path::new(input)), PathBuf::from(expected));
    }

    #[test]
    fn test_derive_keeps_directory() {
        let out = derive(Path::new("/some/deep/dir/face.jpg"));
        assert_eq!(out.parent(), Some(Path::new("/some/deep/dir")));
    }
}
