//! The `gen` command: print dispatch code for a table file.
//!
//! Table files hold one `key destination` pair per line. Blank lines and
//! lines starting with `#` are skipped.
//!
//! A key may be written as a double-quoted literal, using the escapes the
//! generator itself emits (`\b \t \n \f \r \\ \" \' \uXXXX`). That is the
//! only way to spell an empty key, a key with whitespace, or one starting
//! with `#` or `"`:
//!
//! ```text
//! ""          Id_empty
//! "two words" Id_two_words
//! "#hash"     Id_hash
//! ```

use ids_emit::CodeBuffer;
use ids_switch::{Entry, SwitchConfig, SwitchError, SwitchGenerator, SyntaxProfile};

use super::{apply_generator_flag, read_file};

/// Options for `idswitch gen`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenOptions {
    pub profile: SyntaxProfile,
    pub config: SwitchConfig,
    pub default_destination: String,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            profile: SyntaxProfile::csharp(),
            // Printed code starts at the left margin.
            config: SwitchConfig {
                base_indent: 0,
                ..SwitchConfig::default()
            },
            default_destination: "0".to_string(),
        }
    }
}

/// Parse `gen` flags. Unknown flags produce a warning.
pub fn parse_gen_options(args: &[String]) -> GenOptions {
    let mut options = GenOptions::default();
    for arg in args {
        if apply_generator_flag(arg, &mut options.profile, &mut options.config) {
            continue;
        }
        if let Some(default) = arg.strip_prefix("--default=") {
            options.default_destination = default.to_string();
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        }
    }
    options
}

/// Parse table file text into entries.
pub fn parse_table(text: &str) -> Result<Vec<Entry>, String> {
    let mut entries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let entry = parse_line(line).map_err(|msg| format!("line {}: {msg}", index + 1))?;
        entries.push(entry);
    }
    Ok(entries)
}

fn parse_line(line: &str) -> Result<Entry, String> {
    let malformed = || format!("expected `key destination`, found '{line}'");

    let (key, rest) = if let Some(quoted) = line.strip_prefix('"') {
        let (key, rest) = unquote(quoted)?;
        if !rest.starts_with(char::is_whitespace) {
            return Err(malformed());
        }
        (key, rest)
    } else {
        let (key, rest) = line.split_once(char::is_whitespace).ok_or_else(malformed)?;
        (key.to_string(), rest)
    };

    let mut fields = rest.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(destination), None) => Ok(Entry::new(key, destination)),
        _ => Err(malformed()),
    }
}

/// Decode a quoted key whose opening quote is already consumed.
///
/// Returns the key and the text after the closing quote.
fn unquote(body: &str) -> Result<(String, &str), String> {
    let mut units: Vec<u16> = Vec::new();
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                let key = String::from_utf16(&units)
                    .map_err(|_| "quoted key has an unpaired surrogate".to_string())?;
                return Ok((key, &body[i + 1..]));
            }
            '\\' => {
                let Some((_, escape)) = chars.next() else {
                    break;
                };
                let unit = match escape {
                    'b' => 0x08,
                    't' => 0x09,
                    'n' => 0x0A,
                    'f' => 0x0C,
                    'r' => 0x0D,
                    '\\' => 0x5C,
                    '"' => 0x22,
                    '\'' => 0x27,
                    'u' => {
                        let hex: String = chars.by_ref().take(4).map(|(_, c)| c).collect();
                        if hex.len() != 4 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                            return Err(format!("bad escape '\\u{hex}'"));
                        }
                        u16::from_str_radix(&hex, 16).map_err(|e| e.to_string())?
                    }
                    other => return Err(format!("unknown escape '\\{other}'")),
                };
                units.push(unit);
            }
            _ => {
                let mut buf = [0; 2];
                units.extend_from_slice(c.encode_utf16(&mut buf));
            }
        }
    }
    Err("unterminated quoted key".to_string())
}

/// Synthesize the code for `entries` as a string.
pub fn generate_code(entries: &[Entry], options: &GenOptions) -> Result<String, SwitchError> {
    let generator =
        SwitchGenerator::new(options.profile.clone()).with_config(options.config);
    let mut out = CodeBuffer::new();
    generator.generate(entries, &options.default_destination, &mut out)?;
    Ok(out.into_string())
}

/// Print the code generated for the table file at `path`.
pub fn run_gen(path: &str, options: &GenOptions) {
    let text = read_file(path);
    let entries = match parse_table(&text) {
        Ok(entries) => entries,
        Err(msg) => {
            eprintln!("{path}: {msg}");
            std::process::exit(1);
        }
    };
    tracing::debug!(path, entries = entries.len(), profile = %options.profile.name, "gen");

    match generate_code(&entries, options) {
        Ok(code) => print!("{code}"),
        Err(err) => {
            eprintln!("{path}: {err}");
            std::process::exit(1);
        }
    }
}
