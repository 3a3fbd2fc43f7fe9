//! Generated region rewriting.
//!
//! A generated region runs from a marker line such as
//! `#region Generated PrototypeId Switch` to the next line containing
//! `#endregion`. Both marker lines are kept; the lines between them are
//! replaced with code synthesized from the next unused id table of the same
//! kind. Tables pair with regions of their kind in file order.
//!
//! Every other line is copied through byte for byte.

use std::collections::VecDeque;

use ids_emit::{CodeBuffer, IndentStyle, LineTerminator};
use ids_switch::SwitchGenerator;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::SourceError;
use crate::table::{is_region_end, read_tables, IdTable, TableKind};

/// Result of patching one source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchedSource {
    pub text: String,
    /// Id tables found.
    pub tables: usize,
    /// Generated regions rewritten.
    pub regions: usize,
}

impl PatchedSource {
    /// Whether patching changed the text.
    pub fn differs_from(&self, source: &str) -> bool {
        self.text != source
    }
}

/// Rewrite every generated region in `source`.
///
/// Code is written with the line terminator `source` already uses.
pub fn patch_source(
    source: &str,
    generator: &SwitchGenerator,
    default: &str,
) -> Result<PatchedSource, SourceError> {
    let tables = read_tables(source)?;
    let mut pending: FxHashMap<TableKind, VecDeque<&IdTable>> = FxHashMap::default();
    for table in &tables {
        pending.entry(table.kind).or_default().push_back(table);
    }

    let terminator = LineTerminator::detect(source);
    let mut text = String::with_capacity(source.len());
    let mut regions = 0;
    let mut lines = source.split_inclusive('\n').enumerate();

    while let Some((index, line)) = lines.next() {
        text.push_str(line);
        let Some(kind) = TableKind::parse_generated_marker(line) else {
            continue;
        };
        let number = index + 1;

        let table = pending
            .get_mut(&kind)
            .and_then(VecDeque::pop_front)
            .ok_or(SourceError::MissingTable { line: number, kind })?;

        // Drop the old body up to and including the closing marker.
        let end = lines.by_ref().map(|(_, line)| line).find(|line| is_region_end(line));
        let Some(end) = end else {
            return Err(SourceError::UnterminatedRegion {
                line: number,
                name: kind.generated_marker().trim_start_matches("#region ").to_owned(),
            });
        };

        let mut out = CodeBuffer::with_style(IndentStyle::default(), terminator);
        generator
            .generate(&table.entries, default, &mut out)
            .map_err(|source| SourceError::Switch {
                line: table.line,
                source,
            })?;
        text.push_str(out.as_str());
        text.push_str(end);

        debug!(
            kind = kind.name(),
            line = number,
            entries = table.entries.len(),
            "regenerated region"
        );
        regions += 1;
    }

    Ok(PatchedSource {
        text,
        tables: tables.len(),
        regions,
    })
}
