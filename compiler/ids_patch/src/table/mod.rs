//! Id table discovery.
//!
//! An id table is a region of constant declarations:
//!
//! ```text
//! #region PrototypeIds
//! private const int Id_constructor = 1;
//! private const int Id_toString = 2;
//! private const int MAX_PROTOTYPE_ID = 2;
//! #endregion
//! ```
//!
//! Each `Id_<name>` constant becomes an entry keyed by `<name>` (or its alias,
//! see [`key_for`]) that dispatches to the constant itself. Other lines in
//! the region are ignored.

use ids_switch::Entry;
use tracing::warn;

use crate::error::SourceError;

/// Prefix shared by every id constant.
pub const ID_PREFIX: &str = "Id_";

/// Which member set a table describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Ids,
    InstanceIds,
    PrototypeIds,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [
        TableKind::Ids,
        TableKind::InstanceIds,
        TableKind::PrototypeIds,
    ];

    /// Region name of the table itself.
    pub const fn name(self) -> &'static str {
        match self {
            TableKind::Ids => "Ids",
            TableKind::InstanceIds => "InstanceIds",
            TableKind::PrototypeIds => "PrototypeIds",
        }
    }

    /// Marker of the region regenerated from this table.
    pub const fn generated_marker(self) -> &'static str {
        match self {
            TableKind::Ids => "#region Generated Id Switch",
            TableKind::InstanceIds => "#region Generated InstanceId Switch",
            TableKind::PrototypeIds => "#region Generated PrototypeId Switch",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Table kind opened by `line`, if it is a table region marker.
    pub fn parse_table_marker(line: &str) -> Option<Self> {
        let rest = line.trim().strip_prefix("#region")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Self::from_name(rest.trim())
    }

    /// Generated region kind opened by `line`, if any.
    pub fn parse_generated_marker(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| line.contains(kind.generated_marker()))
    }
}

/// One id table found in a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdTable {
    pub kind: TableKind,
    /// Line of the opening marker, 1-based.
    pub line: usize,
    pub entries: Vec<Entry>,
}

/// Whether `line` closes the current region.
pub fn is_region_end(line: &str) -> bool {
    line.contains("#endregion")
}

/// Collect every id table in `source`, in file order.
pub fn read_tables(source: &str) -> Result<Vec<IdTable>, SourceError> {
    let mut tables = Vec::new();
    let mut open: Option<IdTable> = None;

    for (index, line) in source.lines().enumerate() {
        let number = index + 1;
        match open.take() {
            Some(table) if is_region_end(line) => {
                if table.entries.is_empty() {
                    warn!(
                        kind = table.kind.name(),
                        line = table.line,
                        "id table has no declarations"
                    );
                }
                tables.push(table);
            }
            Some(mut table) => {
                table.entries.extend(declarations(line));
                open = Some(table);
            }
            None => {
                if let Some(kind) = TableKind::parse_table_marker(line) {
                    open = Some(IdTable {
                        kind,
                        line: number,
                        entries: Vec::new(),
                    });
                }
            }
        }
    }

    match open {
        Some(table) => Err(SourceError::UnterminatedRegion {
            line: table.line,
            name: table.kind.name().to_owned(),
        }),
        None => Ok(tables),
    }
}

/// Every `private const int Id_<name> = <value>` declaration on `line`.
fn declarations(line: &str) -> impl Iterator<Item = Entry> + '_ {
    line.split(';').filter_map(parse_declaration)
}

fn parse_declaration(statement: &str) -> Option<Entry> {
    let mut words = statement.split_whitespace();
    if words.next()? != "private" || words.next()? != "const" || words.next()? != "int" {
        return None;
    }
    let constant = words.next()?;
    let name = constant.strip_prefix(ID_PREFIX)?;
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return None;
    }
    if words.next()? != "=" {
        return None;
    }
    words.next()?;
    Some(Entry::new(key_for(name), constant))
}

/// Dispatch key for an id constant named `Id_<name>`.
///
/// Names that cannot spell the member they stand for map to an alias:
/// the RegExp constructor's `$*`, `$_`, `$&`, `` $` ``, `$'`, `$+` and
/// `$0`..`$9` properties.
pub fn key_for(name: &str) -> String {
    let alias = match name {
        "STAR" => "$*",
        "UNDERSCORE" => "$_",
        "AMPERSAND" => "$&",
        "PLUS" => "$+",
        "BACKQUOTE" => "$`",
        "QUOTE" => "$'",
        _ => match name.strip_prefix("DOLLAR_") {
            Some(digit) if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
                return format!("${digit}");
            }
            _ => name,
        },
    };
    alias.to_owned()
}

#[cfg(test)]
mod tests;
