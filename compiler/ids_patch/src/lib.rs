//! Id switch region patcher.
//!
//! Finds id tables (`#region Ids`, `#region InstanceIds`,
//! `#region PrototypeIds`) in source files and regenerates the matching
//! `#region Generated ... Switch` blocks from them with
//! [`ids_switch::SwitchGenerator`].
//!
//! Files are only rewritten when their content changes, and always through a
//! temporary file that is renamed into place.

mod error;
pub mod files;
pub mod region;
pub mod table;

pub use error::{PatchError, SourceError};
pub use region::{patch_source, PatchedSource};
pub use table::{key_for, read_tables, IdTable, TableKind};

use std::path::{Path, PathBuf};

use ids_switch::SwitchGenerator;
use tracing::{debug, info};

/// Driver settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchOptions {
    /// Destination assigned when no key matches.
    pub default_destination: String,
    /// Extension of files picked up when walking directories.
    pub extension: String,
    /// Report what would change without writing.
    pub dry_run: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            default_destination: "0".to_string(),
            extension: "cs".to_string(),
            dry_run: false,
        }
    }
}

/// What happened to one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// No id tables; the file was not considered further.
    NoTables,
    /// Regenerated text equals the current text.
    Unchanged { regions: usize },
    /// Dry run: the file would be rewritten.
    WouldUpdate { regions: usize },
    Updated { regions: usize },
}

impl FileOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            FileOutcome::NoTables => "no tables",
            FileOutcome::Unchanged { .. } => "unchanged",
            FileOutcome::WouldUpdate { .. } => "would update",
            FileOutcome::Updated { .. } => "updated",
        }
    }
}

/// Regenerates id switch regions with one generator and set of options.
#[derive(Clone, Debug)]
pub struct Patcher {
    generator: SwitchGenerator,
    options: PatchOptions,
}

impl Patcher {
    pub fn new(generator: SwitchGenerator, options: PatchOptions) -> Self {
        Self { generator, options }
    }

    pub fn options(&self) -> &PatchOptions {
        &self.options
    }

    /// Patch source text held in memory.
    pub fn patch_source(&self, source: &str) -> Result<PatchedSource, SourceError> {
        patch_source(source, &self.generator, &self.options.default_destination)
    }

    /// Patch one file on disk.
    pub fn patch_file(&self, path: &Path) -> Result<FileOutcome, PatchError> {
        let source = files::read_source(path)?;
        let patched = self
            .patch_source(&source)
            .map_err(|source| PatchError::Source {
                path: path.to_path_buf(),
                source,
            })?;

        let regions = patched.regions;
        let outcome = if patched.tables == 0 {
            FileOutcome::NoTables
        } else if !patched.differs_from(&source) {
            FileOutcome::Unchanged { regions }
        } else if self.options.dry_run {
            FileOutcome::WouldUpdate { regions }
        } else {
            files::replace_contents(path, &patched.text)?;
            FileOutcome::Updated { regions }
        };

        match outcome {
            FileOutcome::Updated { .. } => info!(path = %path.display(), regions, "updated"),
            _ => debug!(path = %path.display(), outcome = outcome.label(), "skipped"),
        }
        Ok(outcome)
    }

    /// Patch every source file under `paths`.
    ///
    /// Stops at the first failing file; files handled before it keep their
    /// new contents.
    pub fn patch_paths(&self, paths: &[PathBuf]) -> Result<Vec<(PathBuf, FileOutcome)>, PatchError> {
        let sources = files::collect_sources(paths, &self.options.extension)?;
        let mut outcomes = Vec::with_capacity(sources.len());
        for path in sources {
            let outcome = self.patch_file(&path)?;
            outcomes.push((path, outcome));
        }
        Ok(outcomes)
    }
}
