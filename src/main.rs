// Main entry point для компилятора KalaLang

use std::fs;
use std::process;

use kala_lang::cli::{self, CliArgs, CompileConfig};
use kala_lang::common::debug;
use kala_lang::{CompileReport, Translator, TranslatorOptions};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match cli::parse_args(&args) {
        CliArgs::Help => cli::print_help(),
        CliArgs::Version => cli::print_version(),
        CliArgs::Invalid(message) => {
            eprintln!("❌ {}", message);
            eprintln!("Используйте --help для справки");
            process::exit(1);
        }
        CliArgs::Repl => {
            if let Err(e) = kala_lang::repl::run_repl() {
                eprintln!("Ошибка: {}", e);
                process::exit(1);
            }
        }
        CliArgs::Compile(config) => {
            let code = compile_file(&config);
            process::exit(code);
        }
    }
}

/// Компиляция файла: проверки путей, чтение, трансляция, запись
fn compile_file(config: &CompileConfig) -> i32 {
    debug::set_debug(config.debug);

    if let Err(message) = cli::validate_files(config) {
        eprintln!("❌ {}", message);
        return 1;
    }

    let source = match fs::read_to_string(&config.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("❌ Error reading {}: {}", config.input, e);
            return 1;
        }
    };

    let options = TranslatorOptions {
        strict: config.strict,
    };
    let mut translator = Translator::with_options(options);

    match translator.translate(&source) {
        Ok(()) => {
            kala_lang::debug_println!("{}", translator.program().dump(&config.input));

            let output = translator.into_output();
            if let Err(e) = fs::write(&config.output, &output.asm) {
                eprintln!("❌ Error writing {}: {}", config.output, e);
                return 1;
            }

            if config.json {
                let report = CompileReport::success(&output.diagnostics);
                if let Ok(json) = serde_json::to_string(&report) {
                    println!("{}", json);
                }
            } else {
                println!("✅ Compilation successful: {} → {}", config.input, config.output);
                if !output.diagnostics.is_empty() {
                    eprintln!(
                        "⚠️  {} error(s), {} warning(s)",
                        output.diagnostics.error_count(),
                        output.diagnostics.warning_count()
                    );
                }
            }
            0
        }
        Err(e) => {
            // Строгий режим: структурный сбой прерывает компиляцию,
            // выходной файл не создается
            if config.json {
                let report = CompileReport::failure(&e, translator.diagnostics());
                if let Ok(json) = serde_json::to_string(&report) {
                    println!("{}", json);
                }
            } else {
                eprintln!("❌ Compilation failed: {}", e);
            }
            1
        }
    }
}
