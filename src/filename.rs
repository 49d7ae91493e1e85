//! Wheel filename parsing
//!
//! Only the leading `{project}-{version}-` part of the filename is
//! interpreted; the python, abi and platform tags that follow are ignored.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::RepoError;
use crate::error::Result;
use crate::name::dist_info_name;
use crate::name::normalize_project_name;

/// File extension of wheel archives
pub const WHEEL_EXTENSION: &str = ".whl";

static WHEEL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9](?:[A-Za-z0-9._]*[A-Za-z0-9])?)-([A-Za-z0-9_.!+]+)-")
        .expect("wheel name pattern is valid")
});

/// The project and version encoded in a wheel filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelFilename {
    filename: String,
    project: String,
    version: String,
}

impl WheelFilename {
    /// Parse a wheel filename such as `requests-2.31.0-py3-none-any.whl`
    ///
    /// Names without the `.whl` extension are rejected even when their
    /// prefix would match, so `not-a-wheel.txt` is not a wheel.
    pub fn parse(filename: &str) -> Result<Self> {
        Self::parse_at(filename, Path::new(filename))
    }

    /// Parse the final component of `path`
    ///
    /// Errors name the whole path. Filenames that are not valid UTF-8 are
    /// rejected rather than copied under a lossy spelling.
    pub fn from_path(path: &Path) -> Result<Self> {
        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| RepoError::InvalidWheelName {
                filename: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path: path.to_path_buf(),
            })?;
        Self::parse_at(filename, path)
    }

    fn parse_at(filename: &str, path: &Path) -> Result<Self> {
        let invalid = || RepoError::InvalidWheelName {
            filename: filename.to_string(),
            path: path.to_path_buf(),
        };
        if !filename.ends_with(WHEEL_EXTENSION) {
            return Err(invalid());
        }
        let captures = WHEEL_NAME.captures(filename).ok_or_else(invalid)?;

        Ok(Self {
            filename: filename.to_string(),
            project: captures[1].to_string(),
            version: captures[2].to_string(),
        })
    }

    /// The full filename, tags included
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The project name exactly as written in the filename
    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The PEP 503 normalized project name
    pub fn normalized_project(&self) -> String {
        normalize_project_name(&self.project)
    }

    /// Path of the METADATA entry inside the archive
    pub fn metadata_entry(&self) -> String {
        format!("{}/METADATA", dist_info_name(&self.project, &self.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(filename: &str) -> (String, String) {
        let parsed = WheelFilename::parse(filename).unwrap();
        (parsed.project().to_string(), parsed.version().to_string())
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(
            parts("requests-2.31.0-py3-none-any.whl"),
            ("requests".to_string(), "2.31.0".to_string())
        );
    }

    #[test]
    fn test_parse_dotted_project() {
        assert_eq!(
            parts("my.pkg-1.0-py3-none-any.whl"),
            ("my.pkg".to_string(), "1.0".to_string())
        );
    }

    #[test]
    fn test_parse_single_character_project() {
        assert_eq!(
            parts("a-0.1-py3-none-any.whl"),
            ("a".to_string(), "0.1".to_string())
        );
    }

    #[test]
    fn test_parse_version_charset() {
        assert_eq!(
            parts("torch-2.10.0a0+git1d21b4d-cp312-cp312-linux_x86_64.whl"),
            ("torch".to_string(), "2.10.0a0+git1d21b4d".to_string())
        );
        assert_eq!(
            parts("pkg-1!2.0_post1-py3-none-any.whl"),
            ("pkg".to_string(), "1!2.0_post1".to_string())
        );
    }

    #[test]
    fn test_parse_invalid_names() {
        for name in [
            "not-a-wheel.txt",
            "badname.whl",
            "_private-1.0-py3-none-any.whl",
            "trailing_-1.0-py3-none-any.whl",
            "pkg-1.0.whl",
            "",
        ] {
            match WheelFilename::parse(name) {
                Err(RepoError::InvalidWheelName { filename, .. }) => assert_eq!(filename, name),
                other => panic!("expected InvalidWheelName for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_metadata_entry_uses_raw_name() {
        let parsed = WheelFilename::parse("Zope.Interface-6.0-cp311-cp311-linux_x86_64.whl").unwrap();
        assert_eq!(parsed.normalized_project(), "zope-interface");
        assert_eq!(
            parsed.metadata_entry(),
            "Zope.Interface-6.0.dist-info/METADATA"
        );
    }

    #[test]
    fn test_from_path() {
        let parsed =
            WheelFilename::from_path(Path::new("/tmp/wheels/demo-1.0-py3-none-any.whl")).unwrap();
        assert_eq!(parsed.filename(), "demo-1.0-py3-none-any.whl");
        assert_eq!(parsed.project(), "demo");
    }

    #[test]
    fn test_from_path_reports_full_path() {
        let path = Path::new("wheels/a/b/badname.whl");
        match WheelFilename::from_path(path) {
            Err(err @ RepoError::InvalidWheelName { .. }) => {
                assert_eq!(err.path(), path);
                assert!(err.to_string().contains("wheels/a/b/badname.whl"));
            }
            other => panic!("expected InvalidWheelName, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_from_path_rejects_non_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"demo-1.0-py3-none-\xff.whl");
        let path = Path::new("wheels").join(name);
        match WheelFilename::from_path(&path) {
            Err(RepoError::InvalidWheelName { filename, path: failed }) => {
                assert_eq!(failed, path);
                assert!(filename.contains('\u{FFFD}'));
            }
            other => panic!("expected InvalidWheelName, got {other:?}"),
        }
    }
}
