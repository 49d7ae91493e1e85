//! Render index documents from the contents of the output tree

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use rayon::prelude::*;
use tracing::debug;
use tracing::info;

use super::html::IndexEntry;
use super::html::write_project_index;
use super::html::write_root_index;
use crate::digest::hash_file;
use crate::error::RepoError;
use crate::error::Result;
use crate::filename::WHEEL_EXTENSION;
use crate::repository::METADATA_SUFFIX;

const INDEX_FILE: &str = "index.html";

/// Render the root index and every project index under `simple_dir`
pub fn render_all(simple_dir: &Path) -> Result<()> {
    info!("Writing root index");
    let projects = render_root_index(simple_dir)?;

    for project in &projects {
        info!("Writing project index [{}]", project);
        render_project_index(&simple_dir.join(project))?;
    }

    Ok(())
}

/// Write `simple_dir/index.html` and return the listed projects
pub fn render_root_index(simple_dir: &Path) -> Result<Vec<String>> {
    let projects = list_entries(simple_dir, |path, _| path.is_dir())?;
    write_document(&simple_dir.join(INDEX_FILE), |out| {
        write_root_index(out, &projects)
    })?;
    Ok(projects)
}

/// Write `project_dir/index.html`, hashing every wheel and its metadata
pub fn render_project_index(project_dir: &Path) -> Result<()> {
    let project = project_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let wheels = list_entries(project_dir, |path, name| {
        path.is_file() && name.ends_with(WHEEL_EXTENSION)
    })?;

    let entries = wheels
        .par_iter()
        .map(|filename| index_entry(project_dir, filename))
        .collect::<Result<Vec<_>>>()?;

    write_document(&project_dir.join(INDEX_FILE), |out| {
        write_project_index(out, &project, &entries)
    })
}

fn index_entry(project_dir: &Path, filename: &str) -> Result<IndexEntry> {
    let wheel_sha256 = hash_file(&project_dir.join(filename))?;
    let metadata_sha256 =
        hash_file(&project_dir.join(format!("{}{}", filename, METADATA_SUFFIX)))?;
    debug!("{filename}: sha256={wheel_sha256} metadata sha256={metadata_sha256}");

    Ok(IndexEntry {
        filename: filename.to_string(),
        wheel_sha256,
        metadata_sha256,
    })
}

/// Names of the entries of `dir` accepted by `keep`, sorted
fn list_entries(dir: &Path, keep: impl Fn(&Path, &str) -> bool) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| RepoError::io(dir, e))? {
        let entry = entry.map_err(|e| RepoError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if keep(&entry.path(), &name) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

fn write_document(
    path: &Path,
    render: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<()> {
    let file = File::create(path).map_err(|e| RepoError::io(path, e))?;
    let mut out = BufWriter::new(file);
    render(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| RepoError::io(path, e))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::digest::hash_content;

    #[test]
    fn test_root_index_lists_directories_sorted() {
        let temp_dir = TempDir::new().unwrap();
        for project in ["zeta", "alpha", "beta"] {
            fs::create_dir(temp_dir.path().join(project)).unwrap();
        }

        let projects = render_root_index(temp_dir.path()).unwrap();
        assert_eq!(projects, ["alpha", "beta", "zeta"]);

        let html = fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
        let alpha = html.find(r#"<a href="alpha/">"#).unwrap();
        let beta = html.find(r#"<a href="beta/">"#).unwrap();
        let zeta = html.find(r#"<a href="zeta/">"#).unwrap();
        assert!(alpha < beta && beta < zeta);
    }

    #[test]
    fn test_project_index_hashes_current_contents() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("demo");
        fs::create_dir(&project_dir).unwrap();
        fs::write(project_dir.join("demo-2.0-py3-none-any.whl"), b"wheel two").unwrap();
        fs::write(project_dir.join("demo-2.0-py3-none-any.whl.metadata"), b"meta two").unwrap();
        fs::write(project_dir.join("demo-1.0-py3-none-any.whl"), b"wheel one").unwrap();
        fs::write(project_dir.join("demo-1.0-py3-none-any.whl.metadata"), b"meta one").unwrap();

        render_project_index(&project_dir).unwrap();

        let html = fs::read_to_string(project_dir.join("index.html")).unwrap();
        assert!(html.contains("<title>Links for demo</title>"));
        assert!(html.contains("<h1>Links for demo</h1>"));
        let one = format!(
            r#"<a href="demo-1.0-py3-none-any.whl#sha256={}" data-dist-info-metadata="sha256={}">demo-1.0-py3-none-any.whl</a><br />"#,
            hash_content(b"wheel one"),
            hash_content(b"meta one")
        );
        let two = format!(
            r#"<a href="demo-2.0-py3-none-any.whl#sha256={}" data-dist-info-metadata="sha256={}">demo-2.0-py3-none-any.whl</a><br />"#,
            hash_content(b"wheel two"),
            hash_content(b"meta two")
        );
        assert!(html.find(&one).unwrap() < html.find(&two).unwrap());
        assert_eq!(html.matches("<a ").count(), 2);
    }

    #[test]
    fn test_project_index_requires_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("demo");
        fs::create_dir(&project_dir).unwrap();
        fs::write(project_dir.join("demo-1.0-py3-none-any.whl"), b"wheel").unwrap();

        match render_project_index(&project_dir) {
            Err(RepoError::Io { path, .. }) => {
                assert_eq!(path, project_dir.join("demo-1.0-py3-none-any.whl.metadata"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
