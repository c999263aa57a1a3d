use course_book::course::{Content, ModuleStructure, Quiz};
use course_book::parser::{parse_or_default, resolve, Parsed};
use course_book::ModelError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

/// Keeps every warning emitted by this test binary.
struct CaptureLogger {
    warnings: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut warnings) = self.warnings.lock() {
                warnings.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    warnings: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn captured_warnings() -> Vec<String> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Warn);
    });
    LOGGER.warnings.lock().unwrap().clone()
}

#[test]
fn test_degraded_section_emits_warning() {
    captured_warnings();

    let parsed = parse_or_default("{ broken", Content::default(), "Walrus section");
    assert!(parsed.is_defaulted());
    let parsed = resolve(Err(ModelError::EmptyResponse), Quiz::default(), "Otter section");
    assert!(parsed.is_defaulted());

    let warnings = captured_warnings();
    assert!(warnings
        .iter()
        .any(|w| w.starts_with("⚠️ Walrus section generation failed: invalid JSON")));
    assert!(warnings
        .iter()
        .any(|w| w == "⚠️ Otter section generation failed: model service returned no text"));
}

#[test]
fn test_decoded_section_emits_no_warning() {
    captured_warnings();

    let parsed = parse_or_default(r#"{"theory": "ok"}"#, Content::default(), "Heron section");
    assert!(!parsed.is_defaulted());

    assert!(!captured_warnings().iter().any(|w| w.contains("Heron section")));
}

#[test]
fn test_malformed_json_yields_exact_default() {
    for raw in ["", "   ", "null", "{\"theory\": ", "Sure! Here is the JSON:"] {
        let parsed = parse_or_default(raw, Content::default(), "Content");
        assert!(parsed.is_defaulted(), "{:?} should degrade", raw);
        assert_eq!(parsed.into_inner(), Content::default());
    }
}

#[test]
fn test_partial_object_decodes_with_defaults() {
    let parsed = parse_or_default(r#"{"theory": "Only theory"}"#, Content::default(), "Content");
    assert!(!parsed.is_defaulted());
    let content = parsed.into_inner();
    assert_eq!(content.theory, "Only theory");
    assert!(content.key_points.is_empty());
    assert!(content.table_data.is_none());
}

#[test]
fn test_table_cells_are_coerced_to_text() {
    let raw = r#"{"table_data": {"headers": ["n", "square"], "rows": [[1, 1], [2, 4.5], [null, true]]}}"#;
    let content = parse_or_default(raw, Content::default(), "Content").into_inner();
    let table = content.table_data.unwrap();
    assert_eq!(table.rows[1], vec!["2", "4.5"]);
    assert_eq!(table.rows[2], vec!["", "true"]);
}

#[test]
fn test_service_error_yields_default() {
    let fallback = Quiz {
        instructions: "fallback".to_string(),
        questions: Vec::new(),
    };
    let parsed = resolve(Err(ModelError::MissingApiKey), fallback.clone(), "Quiz");
    match parsed {
        Parsed::Defaulted { value, reason } => {
            assert_eq!(value, fallback);
            assert!(reason.contains("API key"));
        }
        Parsed::Decoded(_) => panic!("service error must degrade"),
    }
}

#[test]
fn test_structure_without_submodules_is_empty() {
    let parsed = resolve(Ok("{}".to_string()), ModuleStructure::default(), "Structure");
    assert!(!parsed.is_defaulted());
    assert!(parsed.into_inner().submodules.is_empty());
}
