mod common;

use common::sample_course;
use course_book::output::{load_course_json, ArtifactKind, ArtifactWriter, CURRICULUM_BASENAME};
use course_book::render::render_course_text;
use course_book::write_documents;
use tempfile::tempdir;

#[test]
fn test_json_reload_reproduces_course_and_text() {
    let course = sample_course();
    let temp = tempdir().unwrap();
    let writer = ArtifactWriter::new(temp.path());

    let written = write_documents(&writer, &course).unwrap();
    let kinds: Vec<ArtifactKind> = written.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![ArtifactKind::Text, ArtifactKind::Json]);

    let json_path = writer.path_for(&ArtifactKind::Json.filename(CURRICULUM_BASENAME));
    let reloaded = load_course_json(&json_path).unwrap();
    assert_eq!(reloaded, course);

    let original_text = std::fs::read_to_string(&written[0].path).unwrap();
    assert_eq!(render_course_text(&reloaded), original_text);
}

#[test]
fn test_json_preserves_non_ascii() {
    let mut course = sample_course();
    course.modules[0].overview = "Café ☕ → NumPy".to_string();
    let temp = tempdir().unwrap();
    let writer = ArtifactWriter::new(temp.path());

    let meta = writer.write_json(CURRICULUM_BASENAME, &course).unwrap();
    let raw = std::fs::read_to_string(&meta.path).unwrap();

    assert!(raw.contains("\"difficulty\": \"intermediate\""));
    assert!(raw.contains("Café ☕ → NumPy"));
    assert!(!raw.contains("\\u"));
    assert!(raw.starts_with("{\n  \"title\": \"Test Course\""));
}

#[test]
fn test_legacy_json_without_hierarchy_loads() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{"title": "Old", "modules": [{"name": "M", "detailed_content": [{"title": "S", "explanation": "E"}]}]}"#,
    )
    .unwrap();

    let course = load_course_json(&path).unwrap();
    assert!(course.comprehensive_quiz.is_none());
    assert!(course.modules[0].hierarchical_structure.submodules.is_empty());
    assert!(render_course_text(&course).contains("Section 1: S"));
}
