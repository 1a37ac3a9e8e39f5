use crate::config::{ANIMATED_IMAGE_EXTENSIONS, SUPPORTED_IMAGE_EXTENSIONS};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| extensions.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Returns true if the extension is one the popup can display.
pub fn is_supported_image(path: &Path) -> bool {
    has_extension_in(path, &SUPPORTED_IMAGE_EXTENSIONS)
}

/// Returns true if the file should be played back as an animation.
pub fn is_animation(path: &Path) -> bool {
    has_extension_in(path, &ANIMATED_IMAGE_EXTENSIONS)
}

/// Lists supported images directly inside `dir`, sorted by path. Subfolders are not visited.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    image_files.sort();
    Ok(image_files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(is_supported_image(Path::new("cat.PNG")));
        assert!(is_supported_image(Path::new("cat.JpEg")));
        assert!(is_supported_image(Path::new("cat.webp")));
        assert!(!is_supported_image(Path::new("cat.bmp")));
        assert!(!is_supported_image(Path::new("gif")));
    }

    #[test]
    fn only_gif_is_animated() {
        assert!(is_animation(Path::new("dance.GIF")));
        assert!(!is_animation(Path::new("dance.webp")));
        assert!(!is_animation(Path::new("dance.png")));
    }

    #[test]
    fn scan_skips_unsupported_files_and_subfolders() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.gif");
        touch(dir.path(), "a.png");
        touch(dir.path(), "readme.txt");
        fs::create_dir(dir.path().join("nested.png")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "deep.png");

        let found = scan_directory(dir.path()).unwrap();

        assert_eq!(found, vec![dir.path().join("a.png"), dir.path().join("b.gif")]);
    }

    #[test]
    fn scan_of_missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_directory(&dir.path().join("absent")).is_err());
    }
}
