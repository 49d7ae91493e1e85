//! Simple Repository API documents (PEP 503, PEP 658)

use std::io::Write;

const ROOT_INDEX_PREAMBLE: &str = "\
<!DOCTYPE html>
<html>
  <head>
    <meta name=\"pypi:repository-version\" content=\"1.0\">
  </head>
  <body>
";

const ROOT_INDEX_POSTAMBLE: &str = "  </body>\n</html>\n";

const PROJECT_INDEX_POSTAMBLE: &str = "    </body>\n</html>\n";

/// One wheel link in a project index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub filename: String,
    /// Hex SHA-256 of the wheel archive
    pub wheel_sha256: String,
    /// Hex SHA-256 of the extracted `.metadata` file
    pub metadata_sha256: String,
}

/// Write the root index linking every project directory, in the given order
pub fn write_root_index<W: Write, S: AsRef<str>>(
    out: &mut W,
    projects: &[S],
) -> std::io::Result<()> {
    out.write_all(ROOT_INDEX_PREAMBLE.as_bytes())?;
    for project in projects {
        let project = project.as_ref();
        writeln!(out, "    <a href=\"{project}/\">{project}</a><br />")?;
    }
    out.write_all(ROOT_INDEX_POSTAMBLE.as_bytes())
}

/// Write the index of a single project
pub fn write_project_index<W: Write>(
    out: &mut W,
    project: &str,
    entries: &[IndexEntry],
) -> std::io::Result<()> {
    write!(
        out,
        "<!DOCTYPE html>
<html>
  <head>
    <meta name=\"pypi:repository-version\" content=\"1.0\">
    <title>Links for {project}</title>
  </head>
  <body>
    <h1>Links for {project}</h1>
"
    )?;
    for entry in entries {
        writeln!(
            out,
            "    <a href=\"{0}#sha256={1}\" data-dist-info-metadata=\"sha256={2}\">{0}</a><br />",
            entry.filename, entry.wheel_sha256, entry.metadata_sha256
        )?;
    }
    out.write_all(PROJECT_INDEX_POSTAMBLE.as_bytes())
}
