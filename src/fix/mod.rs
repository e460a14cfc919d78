//! In-place quote fixing for a single file
//!
//! The file is read fully into memory and the read handle is dropped before
//! anything is written back.

mod unescape;

pub use unescape::{count_escaped_quotes, unescape_quotes, ESCAPED_QUOTE, QUOTE};

use crate::error::{FixError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// How the transformed content is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate the file and overwrite it. A failed write can leave it empty.
    #[default]
    InPlace,
    /// Write a temporary file next to the target and rename it over the target.
    Atomic,
}

#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    pub write_mode: WriteMode,
}

impl FixOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn atomic(self, enabled: bool) -> Self {
        self.write_mode(if enabled { WriteMode::Atomic } else { WriteMode::InPlace })
    }
}

/// Outcome of a successful fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub path: PathBuf,
    pub replacements: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

impl FixReport {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Fix escaped quotes in `path`, overwriting it in place.
pub fn fix(path: &Path) -> Result<FixReport> {
    fix_with(path, &FixOptions::default())
}

/// Fix escaped quotes in `path` using the given options.
///
/// The file is always rewritten, even when it contains no escaped quotes.
pub fn fix_with(path: &Path, options: &FixOptions) -> Result<FixReport> {
    let content = read_text(path)?;
    let replacements = count_escaped_quotes(&content);
    let fixed = unescape_quotes(&content);

    tracing::debug!(
        path = %path.display(),
        replacements,
        mode = ?options.write_mode,
        "Unescaped quotes"
    );

    match options.write_mode {
        WriteMode::InPlace => write_in_place(path, &fixed)?,
        WriteMode::Atomic => write_atomic(path, &fixed)?,
    }

    Ok(FixReport {
        path: path.to_path_buf(),
        replacements,
        bytes_before: content.len(),
        bytes_after: fixed.len(),
    })
}

fn read_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).map_err(|source| FixError::Read { path: path.to_path_buf(), source })?;
    String::from_utf8(bytes).map_err(|source| FixError::Decode { path: path.to_path_buf(), source })
}

fn write_in_place(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| FixError::Write { path: path.to_path_buf(), source })
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: io::Error| FixError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Temp files are created owner-only; keep the original mode.
    let permissions = fs::metadata(path).map_err(write_err)?.permissions();
    fs::set_permissions(tmp.path(), permissions).map_err(write_err)?;

    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
