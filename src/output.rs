use crate::error::BotError;
use path_clean::PathClean;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a generated artifact lands: the directory to create and the file to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub dir: PathBuf,
    pub file: PathBuf,
}

impl Destination {
    /// `<root>/<subdir>/<file_name>`
    pub fn in_root(root: &Path, subdir: &str, file_name: &str) -> Self {
        let dir = root.join(subdir).clean();
        let file = dir.join(file_name);
        Destination { dir, file }
    }

    /// A file path given with `--output`; its parent directory is created when missing.
    pub fn explicit(path: &Path) -> Self {
        let file = path.to_path_buf().clean();
        let dir = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Destination { dir, file }
    }

    /// A file inside a directory given with `--output`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        let dir = dir.to_path_buf().clean();
        let file = dir.join(file_name);
        Destination { dir, file }
    }
}

pub struct OutputWriter;

impl OutputWriter {
    /// Create the destination directory and write `text`, replacing any existing file.
    pub fn write(dest: &Destination, text: &str) -> Result<PathBuf, BotError> {
        let write_error = |path: &Path, source| BotError::OutputWrite {
            path: path.display().to_string(),
            source,
        };

        if !dest.dir.as_os_str().is_empty() {
            fs::create_dir_all(&dest.dir).map_err(|e| write_error(&dest.dir, e))?;
        }
        fs::write(&dest.file, text).map_err(|e| write_error(&dest.file, e))?;

        info!("wrote {} bytes to {}", text.len(), dest.file.display());
        Ok(dest.file.clone())
    }
}
