//! Wheel reader - pulls METADATA out of a wheel without unpacking it

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::RepoError;
use crate::error::Result;
use crate::filename::WheelFilename;

/// Reader for Python wheel files
///
/// Entries are located through the zip central directory, so reading one
/// file does not touch the rest of the archive.
pub struct WheelReader<R: Read + Seek> {
    archive: ZipArchive<R>,
    path: PathBuf,
}

impl WheelReader<BufReader<File>> {
    /// Open the wheel at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| RepoError::io(path, e))?;
        Self::new(BufReader::new(file), path)
    }
}

impl<R: Read + Seek> WheelReader<R> {
    /// Create a new wheel reader; `path` is only used in error reports
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let archive = ZipArchive::new(reader).map_err(|source| RepoError::Archive {
            path: path.clone(),
            source,
        })?;

        Ok(Self { archive, path })
    }

    /// Read the raw bytes of a single archive entry
    pub fn read_entry(&mut self, entry: &str) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(entry).map_err(|source| match source {
            ZipError::FileNotFound => RepoError::MissingMetadata {
                path: self.path.clone(),
                entry: entry.to_string(),
            },
            source => RepoError::Archive {
                path: self.path.clone(),
                source,
            },
        })?;

        // The declared size comes from the archive and is not trusted.
        let mut content = Vec::new();
        std::io::copy(&mut file, &mut content).map_err(|e| RepoError::io(&self.path, e))?;
        Ok(content)
    }

    /// Read the METADATA file of the dist-info directory named by `wheel`
    pub fn read_metadata(&mut self, wheel: &WheelFilename) -> Result<Vec<u8>> {
        self.read_entry(&wheel.metadata_entry())
    }

    /// Get the number of files in the archive
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Check if the archive is empty
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }
}

/// Open the wheel at `path` and return its METADATA bytes
pub fn extract_metadata(path: &Path, wheel: &WheelFilename) -> Result<Vec<u8>> {
    WheelReader::open(path)?.read_metadata(wheel)
}
