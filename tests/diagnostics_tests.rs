// Тесты диагностики и политики обработки ошибок
// Тестируем: fail-soft продолжение, структурные сбои, строгий режим, отчеты

#[cfg(test)]
mod tests {
    use kala_lang::{
        compile, compile_with_options, CompileError, CompileReport, DiagnosticKind, Severity,
        TranslatorOptions,
    };

    fn strict() -> TranslatorOptions {
        TranslatorOptions { strict: true }
    }

    // ========== Fail-soft: проход продолжается после ошибок разбора ==========

    #[test]
    fn test_malformed_line_does_not_stop_the_pass() {
        let output = compile("list broken\nprint \"ok\"\n").unwrap();
        assert!(output.asm.contains("syscall"), "got:\n{}", output.asm);
        assert_eq!(output.diagnostics.parse_error_count(), 1);
    }

    #[test]
    fn test_each_malformed_line_is_reported_once() {
        let source = "list a\nlist b\nfor i in range( {\n";
        let output = compile(source).unwrap();
        assert_eq!(output.asm, "");
        assert_eq!(output.diagnostics.parse_error_count(), 3);
    }

    #[test]
    fn test_diagnostic_carries_source_line_number() {
        let output = compile("print \"ok\"\nlist broken\n").unwrap();
        let records = output.diagnostics.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 2);
        assert_eq!(records[0].kind, DiagnosticKind::Parse);
        assert_eq!(records[0].severity, Severity::Error);
    }

    // ========== Структурные сбои ==========

    #[test]
    fn test_lone_brace_reports_exactly_one_structural_fault() {
        let with_fault = compile("print \"a\"\n}\nprint \"b\"\n").unwrap();
        let without = compile("print \"a\"\nprint \"b\"\n").unwrap();

        assert_eq!(with_fault.diagnostics.structural_fault_count(), 1);
        // Сбойная строка не влияет на остальной вывод
        assert_eq!(with_fault.asm, without.asm);
    }

    #[test]
    fn test_structural_fault_line_number() {
        let output = compile("print \"a\"\n\n}\n").unwrap();
        let faults: Vec<_> = output
            .diagnostics
            .records()
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Structural)
            .collect();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].line, 3);
    }

    #[test]
    fn test_unclosed_block_at_end_of_input() {
        let output = compile("while x {\nprint \"a\"\n").unwrap();
        assert_eq!(output.diagnostics.structural_fault_count(), 1);
        // Накопленный вывод возвращается даже при незакрытом блоке
        assert!(output.asm.contains("while_label_0:"), "got:\n{}", output.asm);
    }

    #[test]
    fn test_each_unclosed_block_is_a_separate_fault() {
        let output = compile("class A {\nmethod m {\nwhile x {\n").unwrap();
        assert_eq!(output.diagnostics.structural_fault_count(), 3);
    }

    // ========== Строгий режим ==========

    #[test]
    fn test_strict_mode_aborts_on_mismatched_closure() {
        let result = compile_with_options("}\n", strict());
        match result {
            Err(CompileError::StructuralError { line, .. }) => assert_eq!(line, 1),
            other => panic!("Expected StructuralError, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_mode_aborts_on_unclosed_block() {
        let result = compile_with_options("while x {\n", strict());
        assert!(matches!(
            result,
            Err(CompileError::StructuralError { .. })
        ));
    }

    #[test]
    fn test_strict_mode_keeps_parse_errors_recoverable() {
        // Строгость касается только структуры блоков
        let output = compile_with_options("list broken\nprint \"ok\"\n", strict()).unwrap();
        assert_eq!(output.diagnostics.parse_error_count(), 1);
        assert!(output.asm.contains("syscall"), "got:\n{}", output.asm);
    }

    #[test]
    fn test_lenient_mode_is_the_default() {
        let output = compile("}\n}\n").unwrap();
        assert_eq!(output.diagnostics.structural_fault_count(), 2);
    }

    // ========== Сериализация отчетов ==========

    #[test]
    fn test_diagnostics_serialize_to_json() {
        let output = compile("list broken\nunknown line\n").unwrap();
        let value = serde_json::to_value(&output.diagnostics).unwrap();

        let records = value["records"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["kind"], "parse");
        assert_eq!(records[0]["severity"], "error");
        assert_eq!(records[0]["line"], 1);
        assert_eq!(records[1]["kind"], "unrecognized");
        assert_eq!(records[1]["severity"], "warning");
    }

    #[test]
    fn test_compile_report_success_shape() {
        let output = compile("print \"a\"\n").unwrap();
        let report = CompileReport::success(&output.diagnostics);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["success"], true);
        assert!(value["error"].is_null());
        assert_eq!(value["diagnostics"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_compile_report_failure_shape() {
        let error = CompileError::StructuralError {
            message: "mismatched block closure: '}' with no open block".to_string(),
            line: 1,
        };
        let diagnostics = kala_lang::Diagnostics::new();
        let report = CompileReport::failure(&error, &diagnostics);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["success"], false);
        assert!(value["error"]
            .as_str()
            .unwrap()
            .contains("[Structural Error] Line 1"));
    }

    // ========== Счетчики ==========

    #[test]
    fn test_counters_separate_kinds() {
        let source = "list broken\n}\nunknown line\n";
        let output = compile(source).unwrap();
        assert_eq!(output.diagnostics.parse_error_count(), 1);
        assert_eq!(output.diagnostics.structural_fault_count(), 1);
        assert_eq!(output.diagnostics.warning_count(), 1);
        assert_eq!(output.diagnostics.error_count(), 2);
        assert_eq!(output.diagnostics.len(), 3);
    }

    #[test]
    fn test_clean_compile_has_no_diagnostics() {
        let output = compile("class A {\nprint \"x\"\n}\n").unwrap();
        assert!(output.diagnostics.is_empty());
        assert_eq!(output.diagnostics.error_count(), 0);
    }
}
