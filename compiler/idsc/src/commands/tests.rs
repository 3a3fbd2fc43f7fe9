use std::path::PathBuf;

use ids_patch::PatchOptions;
use ids_switch::{Entry, SwitchConfig, SyntaxProfile};
use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

// Shared flags

#[test]
fn generator_flags() {
    let mut profile = SyntaxProfile::csharp();
    let mut config = SwitchConfig::default();
    assert!(apply_generator_flag("--profile=java", &mut profile, &mut config));
    assert!(apply_generator_flag("--indent=1", &mut profile, &mut config));
    assert!(apply_generator_flag("--use-if=5", &mut profile, &mut config));
    assert!(apply_generator_flag("--tail-test=0", &mut profile, &mut config));
    assert!(!apply_generator_flag("--dry-run", &mut profile, &mut config));
    assert_eq!(profile, SyntaxProfile::java());
    assert_eq!(
        config,
        SwitchConfig {
            use_if_threshold: 5,
            char_tail_test_threshold: 0,
            base_indent: 1,
        }
    );
}

#[test]
fn bad_values_keep_previous_setting() {
    let mut profile = SyntaxProfile::java();
    let mut config = SwitchConfig::default();
    assert!(apply_generator_flag("--profile=cobol", &mut profile, &mut config));
    assert!(apply_generator_flag("--use-if=-1", &mut profile, &mut config));
    assert_eq!(profile, SyntaxProfile::java());
    assert_eq!(config, SwitchConfig::default());
}

// gen

#[test]
fn gen_defaults() {
    let options = parse_gen_options(&[]);
    assert_eq!(options.profile, SyntaxProfile::csharp());
    assert_eq!(options.config.base_indent, 0);
    assert_eq!(options.default_destination, "0");
}

#[test]
fn gen_flags() {
    let options = parse_gen_options(&args(&["--default=-1", "--profile=java", "--bogus"]));
    assert_eq!(options.default_destination, "-1");
    assert_eq!(options.profile, SyntaxProfile::java());
}

#[test]
fn table_parsing() {
    let text = "\
# builtin ids
length   Id_length

toString Id_toString
  $*     Id_STAR
";
    assert_eq!(
        parse_table(text),
        Ok(vec![
            Entry::new("length", "Id_length"),
            Entry::new("toString", "Id_toString"),
            Entry::new("$*", "Id_STAR"),
        ])
    );
}

#[test]
fn table_parsing_errors() {
    assert_eq!(
        parse_table("a 1\nlonely\n"),
        Err("line 2: expected `key destination`, found 'lonely'".to_string())
    );
    assert!(parse_table("a 1 extra").is_err());
}

#[test]
fn quoted_keys() {
    let text = r##"
""              Id_empty
"two words"     Id_two
"#hash"         Id_hash
"say \"hi\"\\"  Id_say
"é\t"      Id_e_tab
"😀"  Id_smile
"##;
    assert_eq!(
        parse_table(text),
        Ok(vec![
            Entry::new("", "Id_empty"),
            Entry::new("two words", "Id_two"),
            Entry::new("#hash", "Id_hash"),
            Entry::new("say \"hi\"\\", "Id_say"),
            Entry::new("é\t", "Id_e_tab"),
            Entry::new("😀", "Id_smile"),
        ])
    );
}

#[test]
fn quoted_key_errors() {
    let cases = [
        (r#""open Id_x"#, "line 1: unterminated quoted key"),
        (r#""a"Id_x"#, "line 1: expected `key destination`, found '\"a\"Id_x'"),
        (r#""a""#, "line 1: expected `key destination`, found '\"a\"'"),
        (r#""\q" Id_x"#, "line 1: unknown escape '\\q'"),
        (r#""\u12G4" Id_x"#, "line 1: bad escape '\\u12G4'"),
        (r#""\uD83D" Id_x"#, "line 1: quoted key has an unpaired surrogate"),
    ];
    for (line, message) in cases {
        assert_eq!(parse_table(line), Err(message.to_string()), "{line}");
    }
}

#[test]
fn empty_key_from_table_renders_for_java() {
    let entries = parse_table("\"\" Id_E\na Id_1\nbb Id_2\nccc Id_3\n").unwrap_or_default();
    let options = parse_gen_options(&args(&["--profile=java"]));
    let code = generate_code(&entries, &options).unwrap_or_default();
    assert!(code.contains("    case 0: id=Id_E; break L0; \n"));
    assert!(!code.contains("break L0; break;"));
}

#[test]
fn generated_code_starts_at_margin() {
    let entries = vec![Entry::new("get", "1"), Entry::new("set", "2")];
    let options = GenOptions::default();
    let code = generate_code(&entries, &options).unwrap_or_default();
    assert!(code.starts_with("L0: { id = 0; string X = null;"));
    assert!(code.ends_with("}\nEL0:\n"));
}

#[test]
fn generate_code_reports_duplicates() {
    let entries = vec![Entry::new("get", "1"), Entry::new("get", "2")];
    let err = generate_code(&entries, &GenOptions::default()).err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("duplicate key \"get\" in switch table".to_string())
    );
}

// patch

#[test]
fn patch_arguments() {
    let command = parse_patch_options(&args(&[
        "src",
        "--dry-run",
        "--ext=.java",
        "Extra.java",
        "--profile=java",
        "--default=NONE",
    ]));
    assert_eq!(
        command.paths,
        vec![PathBuf::from("src"), PathBuf::from("Extra.java")]
    );
    assert_eq!(command.profile, SyntaxProfile::java());
    assert_eq!(
        command.options,
        PatchOptions {
            default_destination: "NONE".to_string(),
            extension: "java".to_string(),
            dry_run: true,
        }
    );
}

#[test]
fn patch_defaults() {
    let command = parse_patch_options(&args(&["."]));
    assert_eq!(command.options, PatchOptions::default());
    assert_eq!(command.config, SwitchConfig::default());
    assert_eq!(command.patcher().options(), &PatchOptions::default());
}
