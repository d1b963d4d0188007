//! Sound catalog built from a directory of audio files.
//!
//! The catalog scans an injected sounds directory once at construction
//! and resolves a sound by title-substring lookup. Construction fails
//! if the directory is unreadable or contains no audio files, so a
//! successfully built catalog always has at least one entry.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::SoundError;

/// Supported audio file extensions.
const SUPPORTED_EXTENSIONS: &[&str] = &["wav", "mp3", "aiff", "m4a", "flac"];

// ============================================================================
// SoundEntry
// ============================================================================

/// A single discovered audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    /// The name of the sound (file stem, e.g. "nya").
    name: String,
    /// The full path to the sound file.
    path: PathBuf,
}

impl SoundEntry {
    /// Returns the name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file path of the entry.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ============================================================================
// SoundCatalog
// ============================================================================

/// The set of audio files discovered in the sounds directory.
///
/// Entries are sorted by file name so lookup fallback order is stable
/// across platforms.
#[derive(Debug, Clone)]
pub struct SoundCatalog {
    entries: Vec<SoundEntry>,
}

impl SoundCatalog {
    /// Builds a catalog from the audio files in the given directory.
    ///
    /// Files are filtered by supported extension and sorted by name.
    ///
    /// # Errors
    ///
    /// - `SoundError::FileNotFound` if the directory cannot be read
    /// - `SoundError::EmptyCatalog` if no audio files are discovered
    pub fn from_dir(dir: &Path) -> Result<Self, SoundError> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| SoundError::FileNotFound(format!("{}: {}", dir.display(), e)))?;

        let mut sounds = Vec::new();
        for entry in entries.flatten() {
            let file_path = entry.path();
            if let Some(ext) = file_path.extension() {
                let ext_str = ext.to_string_lossy().to_lowercase();
                if SUPPORTED_EXTENSIONS.contains(&ext_str.as_str()) {
                    if let Some(stem) = file_path.file_stem() {
                        sounds.push(SoundEntry {
                            name: stem.to_string_lossy().into_owned(),
                            path: file_path,
                        });
                    }
                }
            }
        }

        if sounds.is_empty() {
            return Err(SoundError::EmptyCatalog(dir.display().to_string()));
        }

        // Sort by file name for consistent ordering
        sounds.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

        debug!("Discovered {} sound(s) in {}", sounds.len(), dir.display());

        Ok(Self { entries: sounds })
    }

    /// Looks up a sound by title.
    ///
    /// Returns the first entry whose path contains the title as a
    /// substring; if none match, returns the first entry in the catalog.
    #[must_use]
    pub fn lookup(&self, title: &str) -> &SoundEntry {
        self.entries
            .iter()
            .find(|e| e.path.to_string_lossy().contains(title))
            .unwrap_or(&self.entries[0])
    }

    /// Returns all entries in the catalog.
    #[must_use]
    pub fn entries(&self) -> &[SoundEntry] {
        &self.entries
    }

    /// Returns the number of discovered sounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty catalogs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_sounds_dir(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"RIFF").unwrap();
        }
        dir
    }

    #[test]
    fn test_from_dir_discovers_audio_files() {
        let dir = create_sounds_dir(&["boom.mp3", "nya.mp3"]);
        let catalog = SoundCatalog::from_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_dir_filters_by_extension() {
        let dir = create_sounds_dir(&["boom.mp3", "readme.txt", "cover.png"]);
        let catalog = SoundCatalog::from_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].name(), "boom");
    }

    #[test]
    fn test_from_dir_extension_case_insensitive() {
        let dir = create_sounds_dir(&["loud.WAV", "quiet.Mp3"]);
        let catalog = SoundCatalog::from_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_dir_sorted_by_file_name() {
        let dir = create_sounds_dir(&["nya.mp3", "amongus.mp3", "boom.mp3"]);
        let catalog = SoundCatalog::from_dir(dir.path()).unwrap();
        let names: Vec<&str> = catalog.entries().iter().map(SoundEntry::name).collect();
        assert_eq!(names, vec!["amongus", "boom", "nya"]);
    }

    #[test]
    fn test_from_dir_empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = SoundCatalog::from_dir(dir.path());
        assert!(matches!(result, Err(SoundError::EmptyCatalog(_))));
    }

    #[test]
    fn test_from_dir_only_unsupported_files_fails() {
        let dir = create_sounds_dir(&["notes.txt"]);
        let result = SoundCatalog::from_dir(dir.path());
        assert!(matches!(result, Err(SoundError::EmptyCatalog(_))));
    }

    #[test]
    fn test_from_dir_missing_directory_fails() {
        let result = SoundCatalog::from_dir(Path::new("/nonexistent/sounds/dir"));
        assert!(matches!(result, Err(SoundError::FileNotFound(_))));
    }

    #[test]
    fn test_lookup_by_title() {
        let dir = create_sounds_dir(&["boom.mp3", "nya.mp3"]);
        let catalog = SoundCatalog::from_dir(dir.path()).unwrap();

        let entry = catalog.lookup("nya");
        assert!(entry.path().to_string_lossy().contains("nya"));
    }

    #[test]
    fn test_lookup_unknown_title_falls_back_to_first() {
        let dir = create_sounds_dir(&["boom.mp3", "nya.mp3"]);
        let catalog = SoundCatalog::from_dir(dir.path()).unwrap();

        let entry = catalog.lookup("doesnotexist");
        assert_eq!(entry.name(), "boom");
    }

    #[test]
    fn test_lookup_matches_substring_of_path() {
        let dir = create_sounds_dir(&["antabaka.wav"]);
        let catalog = SoundCatalog::from_dir(dir.path()).unwrap();

        // A partial title still matches
        let entry = catalog.lookup("taba");
        assert_eq!(entry.name(), "antabaka");
    }

    #[test]
    fn test_is_empty_false_after_construction() {
        let dir = create_sounds_dir(&["beep.wav"]);
        let catalog = SoundCatalog::from_dir(dir.path()).unwrap();
        assert!(!catalog.is_empty());
    }
}
