//! Id switch generator CLI.

use idsc::commands::{parse_gen_options, parse_patch_options, run_gen, run_patch};

fn main() {
    idsc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "gen" => {
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("Usage: idswitch gen <table-file> [options]");
                eprintln!();
                eprintln!("Table file: one `key destination` pair per line, `#` comments.");
                eprintln!("Quote keys that are empty, contain spaces, or start with `#`:");
                eprintln!("  \"\"  Id_empty    \"two words\"  Id_two    \"\\u00E9\"  Id_e");
                eprintln!();
                print_generator_options();
                eprintln!("  --default=<tok>     Destination when nothing matches (default: 0)");
                std::process::exit(1);
            };
            let options = parse_gen_options(&args[2..]);
            run_gen(path, &options);
        }
        "patch" => {
            let command = parse_patch_options(&args[2..]);
            if command.paths.is_empty() {
                eprintln!("Usage: idswitch patch <path>... [options]");
                eprintln!();
                print_generator_options();
                eprintln!("  --default=<tok>     Destination when nothing matches (default: 0)");
                eprintln!("  --ext=<ext>         Extension searched in directories (default: cs)");
                eprintln!("  --dry-run, -n       Report changes without writing");
                std::process::exit(1);
            }
            run_patch(&command);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("idswitch {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_generator_options() {
    eprintln!("Options:");
    eprintln!("  --profile=<name>    Target syntax: csharp, java (default: csharp)");
    eprintln!("  --indent=<n>        Indentation level of the outermost line");
    eprintln!("  --use-if=<n>        Max branches emitted as if/else (default: 3)");
    eprintln!("  --tail-test=<n>     Max unchecked chars tested inline (default: 2)");
}

fn print_usage() {
    println!("idswitch: string dispatch code generator");
    println!();
    println!("Usage: idswitch <command> [options]");
    println!();
    println!("Commands:");
    println!("  gen <table-file>     Print dispatch code for a key/destination table");
    println!("  patch <path>...      Regenerate id switch regions in source files");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=ids_switch=debug) for diagnostics.");
}
