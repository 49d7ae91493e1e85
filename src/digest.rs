//! SHA-256 content digests for index links

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::Digest;
use sha2::Sha256;

use crate::error::RepoError;
use crate::error::Result;

/// Compute the SHA256 hash of `content` as lowercase hex
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Compute the SHA256 hash of a reader's contents
pub fn hash_reader<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the SHA256 hash of the file at `path`, reading it in chunks
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| RepoError::io(path, e))?;
    hash_reader(file).map_err(|e| RepoError::io(path, e))
}
