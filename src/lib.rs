//! pkgrepo: build a static PyPI "simple" index from a directory of wheels
//!
//! Wheels are grouped by their PEP 503 normalized project name, copied into
//! `<outdir>/simple/<project>/` next to the METADATA extracted from each
//! archive, and indexed with SHA-256 link fragments and PEP 658
//! `data-dist-info-metadata` attributes. Any installer pointed at the
//! `simple/` directory can use the result as a package index.
//!
//! # Example
//!
//! ```no_run
//! // Index ./wheels into ./repo/simple
//! let simple = pkgrepo::build_index("wheels", "repo").unwrap();
//! assert!(simple.join("index.html").exists());
//! ```

pub mod digest;
pub mod error;
pub mod filename;
pub mod index;
pub mod name;
pub mod repository;
pub mod wheel;

use std::path::Path;
use std::path::PathBuf;

pub use digest::hash_content;
pub use digest::hash_file;
pub use digest::hash_reader;
pub use error::RepoError;
pub use error::Result;
pub use filename::WheelFilename;
pub use name::normalize_project_name;
pub use repository::RepositoryBuilder;
pub use wheel::WheelReader;

/// Index every wheel under `source` into `outdir/simple`
///
/// Fails if `outdir/simple` already exists. Returns the path of the
/// created `simple/` directory.
pub fn build_index(source: impl AsRef<Path>, outdir: impl AsRef<Path>) -> Result<PathBuf> {
    RepositoryBuilder::new(source.as_ref(), outdir).build()
}
