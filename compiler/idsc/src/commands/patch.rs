//! The `patch` command: regenerate id switch regions in place.

use std::path::PathBuf;

use ids_patch::{FileOutcome, PatchOptions, Patcher};
use ids_switch::{SwitchConfig, SwitchGenerator, SyntaxProfile};

use super::apply_generator_flag;

/// Parsed `idswitch patch` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchCommand {
    pub paths: Vec<PathBuf>,
    pub profile: SyntaxProfile,
    pub config: SwitchConfig,
    pub options: PatchOptions,
}

impl Default for PatchCommand {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            profile: SyntaxProfile::csharp(),
            config: SwitchConfig::default(),
            options: PatchOptions::default(),
        }
    }
}

impl PatchCommand {
    pub fn patcher(&self) -> Patcher {
        let generator = SwitchGenerator::new(self.profile.clone()).with_config(self.config);
        Patcher::new(generator, self.options.clone())
    }
}

/// Parse `patch` arguments: paths and flags in any order.
pub fn parse_patch_options(args: &[String]) -> PatchCommand {
    let mut command = PatchCommand::default();
    for arg in args {
        if apply_generator_flag(arg, &mut command.profile, &mut command.config) {
            continue;
        }
        if let Some(default) = arg.strip_prefix("--default=") {
            command.options.default_destination = default.to_string();
        } else if let Some(ext) = arg.strip_prefix("--ext=") {
            command.options.extension = ext.trim_start_matches('.').to_string();
        } else if arg == "--dry-run" || arg == "-n" {
            command.options.dry_run = true;
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        } else {
            command.paths.push(PathBuf::from(arg));
        }
    }
    command
}

/// Patch every path, printing one status line per file with tables.
///
/// Exits with status 1 on the first error.
pub fn run_patch(command: &PatchCommand) {
    let patcher = command.patcher();
    let outcomes = match patcher.patch_paths(&command.paths) {
        Ok(outcomes) => outcomes,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut changed = 0;
    for (path, outcome) in &outcomes {
        let regions = match *outcome {
            FileOutcome::NoTables => continue,
            FileOutcome::Unchanged { regions } => regions,
            FileOutcome::WouldUpdate { regions } | FileOutcome::Updated { regions } => {
                changed += 1;
                regions
            }
        };
        println!("{}\t{regions}\t{}", path.display(), outcome.label());
    }

    let verb = if command.options.dry_run {
        "would update"
    } else {
        "updated"
    };
    println!("{} file(s) scanned, {changed} {verb}", outcomes.len());
}
