use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the catalog.
///
/// Malformed data rows are never an error; they are dropped during the merge.
/// Only unreadable sources and broken schemas are fatal.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more source files cannot be read. Every missing path is
    /// collected before failing so the caller can report all of them at once.
    #[error("missing source files: {}", format_paths(.paths))]
    MissingSources { paths: Vec<PathBuf> },

    #[error("{} has no '{column}' column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
