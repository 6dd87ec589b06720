// CLI argument parsing and structures

use std::path::Path;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for file compilation
#[derive(Debug, Clone)]
pub struct CompileConfig {
    pub input: String,
    pub output: String,
    pub strict: bool,
    pub debug: bool,
    pub json: bool,
}

/// Parsed CLI arguments
#[derive(Debug)]
pub enum CliArgs {
    Help,
    Version,
    Repl,
    Compile(CompileConfig),
    Invalid(String),
}

/// Print help message
pub fn print_help() {
    println!("🔧 KalaLang - Line-oriented Kala to assembly compiler");
    println!();
    println!("Usage:");
    println!("  kalac                      # Start interactive translation mode (default)");
    println!("  kalac main.kala main.s     # Compile Kala file to assembly");
    println!("  kalac main.kala main.s --strict  # Abort on mismatched block closures");
    println!("  kalac --help               # Show this help");
    println!();
    println!("File Compilation:");
    println!("  • Create files with .kala extension");
    println!("  • Output file must have a .s extension and must not already exist");
    println!("  • Compile with: kalac input.kala output.s");
    println!();
    println!("Flags:");
    println!("  --strict                   # Treat mismatched block closures as fatal");
    println!("  --json                     # Print a machine-readable compile report");
    println!("  --debug                    # Trace line dispatch and dump the listing");
    println!();
    println!("Features:");
    println!("  • Lists, classes, methods, print statements");
    println!("  • if / while / for control flow with unique branch labels");
    println!("  • Best-effort translation: malformed lines are reported, not fatal");
    println!("  • Unrecognized lines pass through as listing comments");
    println!();
    println!("Example Kala file (example.kala):");
    println!("  # Simple Kala program");
    println!("  list nums = [1, 2, 3]");
    println!("  while x {{");
    println!("      print \"looping\"");
    println!("  }}");
    println!();
    println!("Run with: kalac example.kala example.s");
    println!("Debug run: kalac example.kala example.s --debug");
}

/// Print version
pub fn print_version() {
    println!("KalaLang v{}", VERSION);
}

pub fn version() -> &'static str {
    VERSION
}

/// Разбор аргументов командной строки (без сторонних crates)
pub fn parse_args(args: &[String]) -> CliArgs {
    let mut strict = false;
    let mut debug = false;
    let mut json = false;
    let mut positional: Vec<String> = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => return CliArgs::Help,
            "--version" | "-v" => return CliArgs::Version,
            "--strict" => strict = true,
            "--debug" => debug = true,
            "--json" => json = true,
            other if other.starts_with('-') => {
                return CliArgs::Invalid(format!("Неизвестный аргумент: {}", other));
            }
            other => positional.push(other.to_string()),
        }
    }

    match positional.len() {
        0 => CliArgs::Repl,
        2 => CliArgs::Compile(CompileConfig {
            input: positional[0].clone(),
            output: positional[1].clone(),
            strict,
            debug,
            json,
        }),
        _ => CliArgs::Invalid(
            "expected exactly two file arguments: <input.kala> <output.s>".to_string(),
        ),
    }
}

/// Проверки входного и выходного файлов перед компиляцией.
/// Порядок проверок фиксирован: существование входа, отсутствие выхода,
/// расширение входа, расширение выхода.
pub fn validate_files(config: &CompileConfig) -> Result<(), String> {
    if !Path::new(&config.input).exists() {
        return Err("Input file does not exist.".to_string());
    }
    if Path::new(&config.output).exists() {
        return Err("Output file already exists.".to_string());
    }
    if !config.input.ends_with(".kala") {
        return Err("Input file must have a .kala extension.".to_string());
    }
    if !config.output.ends_with(".s") {
        return Err("Output file must have a .s extension.".to_string());
    }
    Ok(())
}
