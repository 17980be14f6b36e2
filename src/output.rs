//! Output targets and encodings
//!
//! Resolves where generated artifacts land and writes them in the
//! configured UTF-family encoding. A failed write never leaves a
//! partial file behind; a close/sync failure after a complete write is
//! reported without retracting the file.

use crate::error::{Error, Result};
use crate::options::{GeneratorOptions, OUTPUT_ENCODING_OPTION};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// The UTF-family encodings an output file can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputEncoding {
    /// UTF-8, no byte order mark
    #[default]
    Utf8,
    /// UTF-16 big-endian with byte order mark
    Utf16Be,
    /// UTF-16 little-endian with byte order mark
    Utf16Le,
}

impl OutputEncoding {
    /// Parse an encoding name as supplied by the configuration system
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(OutputEncoding::Utf8),
            "utf-16" | "utf-16be" => Ok(OutputEncoding::Utf16Be),
            "utf-16le" => Ok(OutputEncoding::Utf16Le),
            _ => Err(Error::InvalidArgument(format!(
                "unsupported output encoding '{}'",
                name
            ))),
        }
    }

    /// The encoding selected by the `output-encoding` option, UTF-8 by
    /// default
    pub fn from_options(options: &GeneratorOptions) -> Result<Self> {
        match options.get(OUTPUT_ENCODING_OPTION) {
            Some(name) => Self::from_name(name),
            None => Ok(OutputEncoding::Utf8),
        }
    }

    /// Encode text to bytes in this encoding
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            OutputEncoding::Utf8 => text.as_bytes().to_vec(),
            OutputEncoding::Utf16Be => {
                let mut bytes = vec![0xFE, 0xFF];
                for unit in text.encode_utf16() {
                    bytes.extend_from_slice(&unit.to_be_bytes());
                }
                bytes
            }
            OutputEncoding::Utf16Le => {
                let mut bytes = vec![0xFF, 0xFE];
                for unit in text.encode_utf16() {
                    bytes.extend_from_slice(&unit.to_le_bytes());
                }
                bytes
            }
        }
    }
}

/// Where a generator writes its output
#[derive(Debug, Clone, Default)]
pub struct OutputTarget {
    dir: Option<PathBuf>,
    encoding: OutputEncoding,
}

impl OutputTarget {
    /// Target the current working directory in UTF-8
    pub fn new() -> Self {
        Self::default()
    }

    /// Target a specific directory; it must exist at resolution time
    pub fn in_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            encoding: OutputEncoding::default(),
        }
    }

    /// Select the output encoding
    pub fn with_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Resolve the full path for an output file name.
    ///
    /// Fails with `NoSuchDirectory` when a target directory was given
    /// but does not exist.
    pub fn resolve_file(&self, file_name: &str) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(Error::NoSuchDirectory(dir.clone()));
                }
                Ok(dir.join(file_name))
            }
            None => Ok(PathBuf::from(file_name)),
        }
    }

    /// Write text to an already-resolved path in the target encoding.
    ///
    /// On a write failure the partial file is removed; on a sync
    /// failure after a complete write the file is kept and the failure
    /// reported. Either way the error is `OutputWriteFailed` with the
    /// underlying cause.
    pub fn write(&self, path: &Path, text: &str) -> Result<()> {
        let bytes = self.encoding.encode(text);

        let mut file = File::create(path).map_err(|source| Error::OutputWriteFailed {
            path: Some(path.to_path_buf()),
            source,
        })?;

        if let Err(source) = file.write_all(&bytes) {
            drop(file);
            let _ = fs::remove_file(path);
            return Err(Error::OutputWriteFailed {
                path: Some(path.to_path_buf()),
                source,
            });
        }

        file.sync_all().map_err(|source| Error::OutputWriteFailed {
            path: Some(path.to_path_buf()),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_encoding_names() {
        assert_eq!(
            OutputEncoding::from_name("UTF-8").unwrap(),
            OutputEncoding::Utf8
        );
        assert_eq!(
            OutputEncoding::from_name("utf-16").unwrap(),
            OutputEncoding::Utf16Be
        );
        assert!(OutputEncoding::from_name("latin-1").is_err());
    }

    #[test]
    fn test_encoding_from_options() {
        let mut options = GeneratorOptions::new();
        assert_eq!(
            OutputEncoding::from_options(&options).unwrap(),
            OutputEncoding::Utf8
        );
        options.set(OUTPUT_ENCODING_OPTION, "utf-16le");
        assert_eq!(
            OutputEncoding::from_options(&options).unwrap(),
            OutputEncoding::Utf16Le
        );
    }

    #[test]
    fn test_utf16_encoding_carries_bom() {
        let be = OutputEncoding::Utf16Be.encode("A");
        assert_eq!(be, vec![0xFE, 0xFF, 0x00, 0x41]);
        let le = OutputEncoding::Utf16Le.encode("A");
        assert_eq!(le, vec![0xFF, 0xFE, 0x41, 0x00]);
    }

    #[test]
    fn test_resolve_requires_existing_directory() {
        let target = OutputTarget::in_directory("/no/such/dir/anywhere");
        assert!(matches!(
            target.resolve_file("x.dtd"),
            Err(Error::NoSuchDirectory(_))
        ));
    }

    #[test]
    fn test_write_round_trip() {
        let dir = TempDir::new().unwrap();
        let target = OutputTarget::in_directory(dir.path());
        let path = target.resolve_file("out.dtd").unwrap();
        target.write(&path, "<!ELEMENT root ANY>\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<!ELEMENT root ANY>\n");
    }

    #[test]
    fn test_failed_write_reports_path() {
        let dir = TempDir::new().unwrap();
        let target = OutputTarget::in_directory(dir.path());
        // Writing to the directory itself fails on create.
        let err = target.write(dir.path(), "x").unwrap_err();
        assert!(matches!(err, Error::OutputWriteFailed { path: Some(_), .. }));
    }
}
