//! Repository builder - lays out wheels and their metadata per project

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tracing::Span;
use tracing::debug;
use tracing::info;
use tracing::info_span;
use walkdir::WalkDir;

use crate::error::RepoError;
use crate::error::Result;
use crate::filename::WHEEL_EXTENSION;
use crate::filename::WheelFilename;
use crate::index;
use crate::wheel::extract_metadata;

/// Name of the index root created under the output directory
pub const SIMPLE_DIR: &str = "simple";

/// Suffix of the metadata file written next to each wheel
pub const METADATA_SUFFIX: &str = ".metadata";

/// A wheel that has been copied into the output tree
#[derive(Debug, Clone)]
pub struct CollectedWheel {
    pub filename: WheelFilename,
    pub project_dir: PathBuf,
    pub wheel_path: PathBuf,
    pub metadata_path: PathBuf,
}

/// Builds a simple index from a directory of wheels
///
/// The builder owns the output tree for the duration of a run. A run has
/// three phases: collect every wheel, write the root index, then write one
/// index per project. Any error aborts the run.
pub struct RepositoryBuilder {
    source: PathBuf,
    simple_dir: PathBuf,
    span: Span,
}

impl RepositoryBuilder {
    /// Prepare a build of `source` into `outdir/simple`
    pub fn new(source: impl Into<PathBuf>, outdir: impl AsRef<Path>) -> Self {
        let source = source.into();
        let simple_dir = outdir.as_ref().join(SIMPLE_DIR);
        let span = info_span!("repository", output = %simple_dir.display());
        Self {
            source,
            simple_dir,
            span,
        }
    }

    /// The `simple/` index root
    pub fn simple_dir(&self) -> &Path {
        &self.simple_dir
    }

    /// Run all phases and return the index root
    pub fn build(self) -> Result<PathBuf> {
        self.create_output_root()?;
        self.collect()?;

        let _entered = self.span.enter();
        index::render_all(&self.simple_dir)?;
        info!("Done.");

        Ok(self.simple_dir)
    }

    /// Create the index root, refusing to reuse one from an earlier run
    pub fn create_output_root(&self) -> Result<()> {
        let _entered = self.span.enter();

        if self.simple_dir.exists() {
            return Err(RepoError::OutputExists {
                path: self.simple_dir.clone(),
            });
        }
        if let Some(parent) = self.simple_dir.parent() {
            fs::create_dir_all(parent).map_err(|e| RepoError::io(parent, e))?;
        }
        fs::create_dir(&self.simple_dir).map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                RepoError::OutputExists {
                    path: self.simple_dir.clone(),
                }
            } else {
                RepoError::io(&self.simple_dir, e)
            }
        })?;

        debug!("created {}", self.simple_dir.display());
        Ok(())
    }

    /// Copy every wheel under the source directory into the output tree
    pub fn collect(&self) -> Result<Vec<CollectedWheel>> {
        let _entered = self.span.enter();
        info!("Collecting wheels");

        let mut collected = Vec::new();
        for path in find_wheels(&self.source)? {
            collected.push(self.collect_wheel(&path)?);
        }
        Ok(collected)
    }

    /// Copy one wheel and write its extracted METADATA beside it
    pub fn collect_wheel(&self, path: &Path) -> Result<CollectedWheel> {
        let filename = WheelFilename::from_path(path)?;
        info!("  {}", filename.filename());

        let metadata = extract_metadata(path, &filename)?;

        let project_dir = self.simple_dir.join(filename.normalized_project());
        fs::create_dir_all(&project_dir).map_err(|e| RepoError::io(&project_dir, e))?;

        let wheel_path = project_dir.join(filename.filename());
        fs::copy(path, &wheel_path).map_err(|source| RepoError::Copy {
            from: path.to_path_buf(),
            to: wheel_path.clone(),
            source,
        })?;

        let metadata_path =
            project_dir.join(format!("{}{}", filename.filename(), METADATA_SUFFIX));
        fs::write(&metadata_path, &metadata).map_err(|e| RepoError::io(&metadata_path, e))?;
        debug!(
            "wrote {} ({} bytes of metadata)",
            metadata_path.display(),
            metadata.len()
        );

        Ok(CollectedWheel {
            filename,
            project_dir,
            wheel_path,
            metadata_path,
        })
    }
}

/// Find every `.whl` file below `source`, sorted by path
pub fn find_wheels(source: &Path) -> Result<Vec<PathBuf>> {
    let mut wheels = Vec::new();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| RepoError::Walk {
            path: e.path().unwrap_or(source).to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .ends_with(WHEEL_EXTENSION)
        {
            wheels.push(path.to_path_buf());
        }
    }

    Ok(wheels)
}
