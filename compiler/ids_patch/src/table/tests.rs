use pretty_assertions::assert_eq;

use super::*;

#[test]
fn table_markers() {
    assert_eq!(
        TableKind::parse_table_marker("    #region Ids"),
        Some(TableKind::Ids)
    );
    assert_eq!(
        TableKind::parse_table_marker("\t#region PrototypeIds\r"),
        Some(TableKind::PrototypeIds)
    );
    assert_eq!(
        TableKind::parse_table_marker("#region InstanceIds"),
        Some(TableKind::InstanceIds)
    );
    assert_eq!(TableKind::parse_table_marker("#regionIds"), None);
    assert_eq!(TableKind::parse_table_marker("#region Idsx"), None);
    assert_eq!(
        TableKind::parse_table_marker("#region Generated Id Switch"),
        None
    );
}

#[test]
fn generated_markers() {
    assert_eq!(
        TableKind::parse_generated_marker("        #region Generated PrototypeId Switch"),
        Some(TableKind::PrototypeIds)
    );
    assert_eq!(
        TableKind::parse_generated_marker("#region Generated InstanceId Switch"),
        Some(TableKind::InstanceIds)
    );
    assert_eq!(
        TableKind::parse_generated_marker("#region Generated Id Switch"),
        Some(TableKind::Ids)
    );
    assert_eq!(TableKind::parse_generated_marker("#region Ids"), None);
}

#[test]
fn aliases() {
    assert_eq!(key_for("STAR"), "$*");
    assert_eq!(key_for("UNDERSCORE"), "$_");
    assert_eq!(key_for("AMPERSAND"), "$&");
    assert_eq!(key_for("PLUS"), "$+");
    assert_eq!(key_for("BACKQUOTE"), "$`");
    assert_eq!(key_for("QUOTE"), "$'");
    assert_eq!(key_for("DOLLAR_0"), "$0");
    assert_eq!(key_for("DOLLAR_9"), "$9");
    assert_eq!(key_for("DOLLAR_10"), "DOLLAR_10");
    assert_eq!(key_for("toString"), "toString");
}

#[test]
fn reads_declarations_in_order() {
    let source = "\
class Foo {
    #region PrototypeIds
    private const int Id_constructor = 1;
    private const int Id_toString = 2;
    private const int MAX_PROTOTYPE_ID = 2;
    #endregion
}
";
    let tables = read_tables(source).unwrap_or_default();
    assert_eq!(
        tables,
        vec![IdTable {
            kind: TableKind::PrototypeIds,
            line: 2,
            entries: vec![
                Entry::new("constructor", "Id_constructor"),
                Entry::new("toString", "Id_toString"),
            ],
        }]
    );
}

#[test]
fn several_declarations_on_one_line() {
    let source = "#region Ids\nprivate const int Id_a = 1; private const int Id_b = Id_a + 1;\n#endregion\n";
    let tables = read_tables(source).unwrap_or_default();
    assert_eq!(tables.len(), 1);
    assert_eq!(
        tables[0].entries,
        vec![Entry::new("a", "Id_a"), Entry::new("b", "Id_b")]
    );
}

#[test]
fn aliased_declarations() {
    let source = "\
#region InstanceIds
private const int Id_STAR = 1, x = 2;
private const int Id_DOLLAR_3 = 4;
#endregion
";
    let tables = read_tables(source).unwrap_or_default();
    assert_eq!(
        tables[0].entries,
        vec![Entry::new("$*", "Id_STAR"), Entry::new("$3", "Id_DOLLAR_3")]
    );
}

#[test]
fn ignores_non_declarations() {
    let source = "\
#region Ids
// private const int Id_commented = 1;
public const int Id_public = 1;
private const int Id_ok = 2;
private const int Id_bad-name = 3;
private const int Id_noValue;
private static int Id_static = 4;
#endregion
";
    let tables = read_tables(source).unwrap_or_default();
    assert_eq!(tables[0].entries, vec![Entry::new("ok", "Id_ok")]);
}

#[test]
fn multiple_tables_keep_file_order() {
    let source = "\
#region InstanceIds
private const int Id_length = 1;
#endregion
#region PrototypeIds
#endregion
#region InstanceIds
private const int Id_name = 1;
#endregion
";
    let tables = read_tables(source).unwrap_or_default();
    let summary: Vec<(TableKind, usize, usize)> = tables
        .iter()
        .map(|t| (t.kind, t.line, t.entries.len()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TableKind::InstanceIds, 1, 1),
            (TableKind::PrototypeIds, 4, 0),
            (TableKind::InstanceIds, 6, 1),
        ]
    );
}

#[test]
fn no_tables() {
    assert_eq!(read_tables("class Empty {}\n"), Ok(vec![]));
    assert_eq!(read_tables(""), Ok(vec![]));
}

#[test]
fn unterminated_table() {
    let source = "class A {\n#region Ids\nprivate const int Id_a = 1;\n";
    assert_eq!(
        read_tables(source),
        Err(SourceError::UnterminatedRegion {
            line: 2,
            name: "Ids".to_string()
        })
    );
}

#[test]
fn crlf_lines() {
    let source = "#region Ids\r\nprivate const int Id_a = 1;\r\n#endregion\r\n";
    let tables = read_tables(source).unwrap_or_default();
    assert_eq!(tables[0].entries, vec![Entry::new("a", "Id_a")]);
}
