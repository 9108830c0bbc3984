use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(|e| {
                AppError::File(format!("Failed to create directory {:?}: {}", path, e))
            })?;
        }
        Ok(())
    }

    // @generates: Sibling path with a tag before the extension (talk.srt -> talk.stripped.srt)
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P, tag: &str) -> PathBuf {
        let input_file = input_file.as_ref();
        let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();

        let output_filename = match input_file.extension() {
            Some(ext) => format!("{}.{}.{}", stem, tag, ext.to_string_lossy()),
            None => format!("{}.{}", stem, tag),
        };

        input_file.with_file_name(output_filename)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(AppError::File(format!("Input file does not exist: {:?}", path)));
        }

        fs::read_to_string(path)
            .map_err(|e| AppError::File(format!("Failed to read file {:?}: {}", path, e)))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), AppError> {
        let path = path.as_ref();
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(path, content)
            .map_err(|e| AppError::File(format!("Failed to write to file {:?}: {}", path, e)))
    }
}
