//! Command handlers for the `idswitch` CLI.
//!
//! Each submodule implements one command. Flags shared by both commands
//! (syntax profile and synthesis heuristics) are parsed here.

use ids_switch::{SwitchConfig, SyntaxProfile};

mod generate;
mod patch;

pub use generate::{generate_code, parse_gen_options, parse_table, run_gen, GenOptions};
pub use patch::{parse_patch_options, run_patch, PatchCommand};

/// Apply one generator flag to `profile`/`config`.
///
/// Returns `false` if `arg` is not a generator flag. Malformed values are
/// reported and ignored, keeping the previous setting.
pub(crate) fn apply_generator_flag(
    arg: &str,
    profile: &mut SyntaxProfile,
    config: &mut SwitchConfig,
) -> bool {
    if let Some(name) = arg.strip_prefix("--profile=") {
        match SyntaxProfile::by_name(name) {
            Some(preset) => *profile = preset,
            None => eprintln!(
                "warning: unknown profile '{name}', options: {}",
                SyntaxProfile::PRESETS.join(", ")
            ),
        }
    } else if let Some(value) = arg.strip_prefix("--indent=") {
        set_count(&mut config.base_indent, "--indent", value);
    } else if let Some(value) = arg.strip_prefix("--use-if=") {
        set_count(&mut config.use_if_threshold, "--use-if", value);
    } else if let Some(value) = arg.strip_prefix("--tail-test=") {
        set_count(&mut config.char_tail_test_threshold, "--tail-test", value);
    } else {
        return false;
    }
    true
}

fn set_count(slot: &mut usize, flag: &str, value: &str) {
    match value.parse() {
        Ok(n) => *slot = n,
        Err(_) => eprintln!("warning: {flag} expects a non-negative integer, got '{value}'"),
    }
}

/// Read a file, or report why not and exit.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
