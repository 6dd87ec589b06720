// REPL mode: построчная интерактивная трансляция

use crate::cli::version;
use crate::compiler::Translator;

/// Run REPL mode
pub fn run_repl() -> Result<(), String> {
    println!("KalaLang v{} - построчный транслятор", version());
    println!("Введите код (Ctrl+D или 'exit' для выхода):");
    println!();

    // Один Translator на всю сессию: открытые блоки живут между строками,
    // поэтому многострочные конструкции работают
    let mut translator = Translator::new();
    let mut input = String::new();
    loop {
        use std::io::{self, Write};

        // Show prompt
        print!("kala> ");
        io::stdout().flush().unwrap();

        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!("\nДо свидания!");
                break;
            }
            Ok(_) => {
                let trimmed = input.trim();

                // Check for exit command
                if trimmed == "exit" || trimmed == "quit" {
                    println!("До свидания!");
                    break;
                }

                if trimmed.is_empty() {
                    input.clear();
                    continue;
                }

                // Транслируем строку и показываем только новые инструкции
                let emitted_from = translator.program().len();
                match translator.translate_line(trimmed) {
                    Ok(()) => {
                        let emitted = translator.program().render_from(emitted_from);
                        if !emitted.is_empty() {
                            print!("{}", emitted);
                        }
                    }
                    Err(e) => {
                        eprintln!("Ошибка: {}", e);
                    }
                }
                input.clear();
            }
            Err(e) => {
                eprintln!("Ошибка чтения: {}", e);
                break;
            }
        }
    }

    // Незакрытые блоки на выходе фиксируются как структурные сбои
    let _ = translator.finish();
    Ok(())
}
