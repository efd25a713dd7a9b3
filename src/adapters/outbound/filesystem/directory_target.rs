use crate::ports::outbound::TargetHandler;
use crate::shared::error::LicenseError;
use crate::shared::security::{validate_file_name_component, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// DirectoryTargetHandler adapter copying each license text into a directory
///
/// The license `name` with extension `ext` is written to `<dir>/<name><ext>`.
/// The directory is created on the first write.
pub struct DirectoryTargetHandler {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectoryTargetHandler {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written so far, in delivery order
    pub fn written_files(&self) -> &[PathBuf] {
        &self.written
    }
}

impl TargetHandler for DirectoryTargetHandler {
    fn handle(&mut self, name: &str, extension: &str, content: &[u8]) -> Result<()> {
        validate_file_name_component(name)?;

        let target = self.output_dir.join(format!("{}{}", name, extension));
        let write_error = |details: String| LicenseError::TargetWriteError {
            path: target.clone(),
            details,
        };

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| write_error(format!("Failed to create output directory: {}", e)))?;
        validate_not_symlink(&target, "write")?;
        fs::write(&target, content).map_err(|e| write_error(e.to_string()))?;

        self.written.push(target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_handle_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut target = DirectoryTargetHandler::new(temp_dir.path());

        target.handle("MIT", ".txt", b"MIT License").unwrap();

        let path = temp_dir.path().join("MIT.txt");
        assert_eq!(fs::read(&path).unwrap(), b"MIT License");
        assert_eq!(target.written_files(), &[path]);
    }

    #[test]
    fn test_handle_creates_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("out").join("licenses");
        let mut target = DirectoryTargetHandler::new(&output_dir);

        target.handle("Apache-2.0", "", b"Apache").unwrap();

        assert!(output_dir.join("Apache-2.0").is_file());
    }

    #[test]
    fn test_handle_rejects_invalid_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut target = DirectoryTargetHandler::new(temp_dir.path());

        assert!(target.handle("../MIT", ".txt", b"x").is_err());
        assert!(target.written_files().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_handle_refuses_to_write_through_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let elsewhere = temp_dir.path().join("elsewhere.txt");
        fs::write(&elsewhere, "keep").unwrap();
        let out = temp_dir.path().join("out");
        fs::create_dir(&out).unwrap();
        std::os::unix::fs::symlink(&elsewhere, out.join("MIT.txt")).unwrap();

        let mut target = DirectoryTargetHandler::new(&out);
        let result = target.handle("MIT", ".txt", b"MIT");

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&elsewhere).unwrap(), "keep");
    }
}
