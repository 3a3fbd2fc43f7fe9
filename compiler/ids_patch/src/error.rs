//! Driver errors.

use std::io;
use std::path::PathBuf;

use ids_switch::SwitchError;
use thiserror::Error;

use crate::table::TableKind;

/// Error in the text of one source file. Line numbers are 1-based.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SourceError {
    /// A `#region` opened on `line` has no matching `#endregion`.
    #[error("line {line}: region `{name}` is never closed by #endregion")]
    UnterminatedRegion { line: usize, name: String },

    /// A generated region has no id table of its kind left to consume.
    #[error("line {line}: no `{}` table for this generated region", .kind.name())]
    MissingTable { line: usize, kind: TableKind },

    /// The table feeding the region on `line` could not be synthesized.
    #[error("line {line}: {source}")]
    Switch {
        line: usize,
        #[source]
        source: SwitchError,
    },
}

/// Error while patching files on disk.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot list {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: SourceError,
    },
}

impl PatchError {
    /// File the error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PatchError::Read { path, .. }
            | PatchError::Write { path, .. }
            | PatchError::Walk { path, .. }
            | PatchError::Source { path, .. } => path,
        }
    }
}
