//! Path utilities for naming fragment output files

use std::path::Path;

/// Path utilities for output naming
pub struct PathUtils;

impl PathUtils {
    /// Create a new path utils instance
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PathUtils {
    fn default() -> Self {
        Self::new()
    }
}

impl PathUtils {
    /// Name of the fragment file: `<stem> from <start>[ to <end>]<.ext>`
    pub fn fragment_file_name(&self, input_path: &str, start: &str, end: Option<&str>) -> String {
        let path = Path::new(input_path);
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        match end {
            Some(end) => format!("{} from {} to {}{}", stem, start, end, extension),
            None => format!("{} from {}{}", stem, start, extension),
        }
    }

    /// Place `file_name` in the directory of `input_path`
    pub fn sibling_path(&self, input_path: &str, file_name: &str) -> String {
        match Path::new(input_path).parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(file_name).to_string_lossy().to_string(),
            _ => file_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_file_name_with_end() {
        let name = PathUtils::new().fragment_file_name("movie.mkv", "1:00", Some("2:30"));
        assert_eq!(name, "movie from 1:00 to 2:30.mkv");
    }

    #[test]
    fn test_fragment_file_name_without_end() {
        let name = PathUtils::new().fragment_file_name("movie.mkv", "75", None);
        assert_eq!(name, "movie from 75.mkv");
    }

    #[test]
    fn test_fragment_file_name_keeps_last_extension_only() {
        let name = PathUtils::new().fragment_file_name("show.s01e01.mp4", "0", None);
        assert_eq!(name, "show.s01e01 from 0.mp4");
    }

    #[test]
    fn test_fragment_file_name_without_extension() {
        let name = PathUtils::new().fragment_file_name("/media/capture", "1", Some("2"));
        assert_eq!(name, "capture from 1 to 2");
    }

    #[test]
    fn test_sibling_path() {
        let utils = PathUtils::new();
        assert_eq!(utils.sibling_path("movie.mkv", "cut.mkv"), "cut.mkv");
        assert_eq!(
            utils.sibling_path("/media/my films/movie.mkv", "cut.mkv"),
            Path::new("/media/my films").join("cut.mkv").to_string_lossy()
        );
    }
}
