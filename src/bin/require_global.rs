//! CLI wrapper for the require-global resolver.
//!
//! Usage:
//!   require-global <expr>...                 # Resolve expressions against the host global object
//!   require-global --build <expr>...         # Build pass: every load yields null
//!   require-global --config <file> <expr>... # Read loader options from a file
//!   require-global                           # Start REPL (interactive mode)

use require_global::parser::Expression;
use require_global::runner::plugin::config::LoaderConfig;
use require_global::runner::plugin::global_object::GlobalObject;
use require_global::runner::plugin::loader::{resource_name, GlobalLoader};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = LoaderConfig::new();
    let mut expressions = Vec::new();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-b" | "--build" => config.is_build = true,
            "-c" | "--config" => {
                let path = match args.next() {
                    Some(p) => p,
                    None => {
                        print_usage();
                        process::exit(1);
                    }
                };
                let is_build = config.is_build;
                config = match LoaderConfig::load(Path::new(&path)) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error loading config '{}': {}", path, e);
                        process::exit(1);
                    }
                };
                config.is_build |= is_build;
            }
            _ => expressions.push(arg),
        }
    }

    let global = GlobalObject::with_host_builtins();
    let global_names = global.binding_names();
    let loader = GlobalLoader::new(Box::new(global));

    if expressions.is_empty() {
        run_repl(&global_names, &loader, &config);
        return;
    }

    let mut failed = false;
    for expression in &expressions {
        if !resolve_and_print(&loader, &config, expression) {
            failed = true;
        }
    }
    if failed {
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("require-global - safe global reference resolver");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  require-global <expr>...                 Resolve expressions");
    eprintln!("  require-global --build <expr>...         Build pass, loads yield null");
    eprintln!("  require-global --config <file> <expr>... Read loader options from a file");
    eprintln!("  require-global                           Start REPL (interactive mode)");
    eprintln!();
    eprintln!("Expressions may carry the loader prefix, e.g. global!Math.cos");
}

fn resolve_and_print(loader: &GlobalLoader, config: &LoaderConfig, module_id: &str) -> bool {
    match loader.load_module(module_id, config) {
        Ok(value) => {
            println!("{} = {}", module_id, value);
            true
        }
        Err(e) => {
            eprintln!("{}: {}", e.error_type(), e);
            false
        }
    }
}

fn run_repl(global_names: &[String], loader: &GlobalLoader, config: &LoaderConfig) {
    println!("require-global v0.1.0");
    println!("Type a dot-notation reference and press Enter.");
    println!("Type .globals to list root bindings, .exit to quit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }

        // Only the line ending is dropped, whitespace is part of the expression.
        let input = input.trim_end_matches(|c: char| c == '\n' || c == '\r');

        if input == ".exit" || input == ".quit" {
            break;
        }

        if input.is_empty() {
            continue;
        }

        if input == ".globals" {
            println!("{}", global_names.join(" "));
            continue;
        }

        if !Expression::parse(resource_name(input)).is_identifier_chain() {
            eprintln!("note: `{}` is not a plain identifier chain", input);
        }
        resolve_and_print(loader, config, input);
    }

    println!("Goodbye!");
}
