mod common;

use common::{happy_client, ScriptedClient, CONTENT_REPLY, METADATA_REPLY, QUIZ_REPLY, STRUCTURE_REPLY};
use course_book::course::{course_topics, ModuleBody};
use course_book::llm::{PromptKind, ResponseFormat};
use course_book::output::{load_course_json, ArtifactWriter};
use course_book::quiz::FALLBACK_INSTRUCTIONS;
use course_book::render::render_course_text;
use course_book::{generate_course, write_documents, CourseAssembler};
use tempfile::tempdir;

#[tokio::test]
async fn test_end_to_end_stub_course() {
    let client = happy_client();
    let course = generate_course(&client).await;

    assert_eq!(course.modules.len(), course_topics().len());

    let first = &course.modules[0];
    assert_eq!(first.name, course_topics()[0].name);
    let content = &first.hierarchical_structure.submodules[0].sub_submodules[0].content;
    assert_eq!(content.key_points, vec!["Python runs line by line"]);
    assert!(content.code_examples.is_empty());

    let quiz = course.comprehensive_quiz.as_ref().unwrap();
    assert_eq!(quiz.questions.len(), 1);

    let text = render_course_text(&course);
    assert!(text.lines().any(|line| line == "✅ Correct Answer: B"));

    let temp = tempdir().unwrap();
    let writer = ArtifactWriter::new(temp.path());
    let written = write_documents(&writer, &course).unwrap();
    assert_eq!(written.len(), 2);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written[1].path).unwrap()).unwrap();
    assert_eq!(
        json["modules"][0]["hierarchical_structure"]["submodules"][0]["sub_submodules"][0]["content"]
            ["key_points"],
        serde_json::json!(["Python runs line by line"])
    );

    let reloaded = load_course_json(&written[1].path).unwrap();
    assert_eq!(reloaded, course);
}

#[tokio::test]
async fn test_requests_are_issued_in_order() {
    let client = happy_client();
    let topics = course_topics().into_iter().take(1).collect();
    let assembler = CourseAssembler::new(&client, topics);

    assembler.build_course().await;

    assert_eq!(
        client.kinds().await,
        vec![PromptKind::Structure, PromptKind::Content, PromptKind::Metadata]
    );

    let requests = client.requests().await;
    assert_eq!(requests[0].response_format, ResponseFormat::Json);
    assert_eq!(requests[1].max_tokens, Some(2000));
    assert!(requests[2].function.is_some());
    assert!(requests[1].user.contains("Installing Python"));
}

#[tokio::test]
async fn test_unreachable_service_degrades_every_section() {
    let client = ScriptedClient::new();
    let course = generate_course(&client).await;

    assert_eq!(course.modules.len(), course_topics().len());
    for (module, topic) in course.modules.iter().zip(course_topics()) {
        assert_eq!(module.name, topic.name);
        assert!(matches!(module.body(), ModuleBody::Empty));
    }

    let quiz = course.comprehensive_quiz.as_ref().unwrap();
    assert_eq!(quiz.instructions, FALLBACK_INSTRUCTIONS);
    assert!(quiz.questions.is_empty());

    // One structure, one metadata call per topic, then the quiz.
    assert_eq!(client.kinds().await.len(), course_topics().len() * 2 + 1);

    let text = render_course_text(&course);
    assert!(!text.contains("FINAL QUIZ"));
    assert!(text.contains("CONGRATULATIONS"));
}

#[tokio::test]
async fn test_structure_failure_skips_content_calls() {
    let client = ScriptedClient::new()
        .reply(PromptKind::Structure, "not json at all")
        .reply(PromptKind::Content, CONTENT_REPLY)
        .reply(PromptKind::Metadata, METADATA_REPLY)
        .reply(PromptKind::Quiz, QUIZ_REPLY);
    let topics = course_topics().into_iter().take(1).collect();

    let course = CourseAssembler::new(&client, topics).build_course().await;

    assert!(course.modules[0].hierarchical_structure.submodules.is_empty());
    assert_eq!(
        client.kinds().await,
        vec![PromptKind::Structure, PromptKind::Metadata]
    );
}

#[tokio::test]
async fn test_malformed_content_keeps_structure() {
    let client = ScriptedClient::new()
        .reply(PromptKind::Structure, STRUCTURE_REPLY)
        .reply(PromptKind::Content, "```json\n{ broken")
        .reply(PromptKind::Metadata, METADATA_REPLY);
    let topics = course_topics().into_iter().take(1).collect();

    let course = CourseAssembler::new(&client, topics).build_course().await;

    let sub_sub = &course.modules[0].hierarchical_structure.submodules[0].sub_submodules[0];
    assert_eq!(sub_sub.name, "Installing Python");
    assert_eq!(sub_sub.content, Default::default());
}

#[tokio::test]
async fn test_quiz_drops_out_of_range_answers() {
    let quiz_reply = r#"{
      "instructions": "Go.",
      "questions": [
        {"question": "Valid?", "options": ["yes", "no"], "answer_index": 0},
        {"question": "Broken?", "options": ["yes", "no"], "answer_index": 7},
        {"question": "Odd difficulty", "difficulty": "expert", "options": ["a"], "answer_index": 0}
      ]
    }"#;
    let client = happy_client().reply(PromptKind::Quiz, quiz_reply);
    let course = generate_course(&client).await;

    let quiz = course.comprehensive_quiz.unwrap();
    let questions: Vec<&str> = quiz.questions.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(questions, vec!["Valid?", "Odd difficulty"]);
    assert_eq!(quiz.questions[1].difficulty, None);
}

#[tokio::test]
async fn test_quiz_keeps_numeric_options() {
    let quiz_reply = r#"{
      "instructions": "Go.",
      "questions": [
        {"question": "Valid?", "options": ["yes", "no"], "answer_index": 0},
        {"question": "What does len([1, 2, 3]) return?", "options": [1, 2, 3, 4], "answer_index": 2}
      ]
    }"#;
    let client = happy_client().reply(PromptKind::Quiz, quiz_reply);
    let course = generate_course(&client).await;

    let quiz = course.comprehensive_quiz.as_ref().unwrap();
    assert_eq!(quiz.instructions, "Go.");
    assert_eq!(quiz.questions.len(), 2);
    assert_eq!(quiz.questions[1].options, vec!["1", "2", "3", "4"]);

    let text = render_course_text(&course);
    assert!(text.contains("  C) 3"));
    assert!(text.lines().any(|line| line == "✅ Correct Answer: C"));
}

#[tokio::test]
async fn test_code_example_with_both_output_keys_keeps_content() {
    let content_reply = r#"{
      "theory": "Printing values.",
      "key_points": ["print writes to stdout"],
      "code_examples": [
        {"title": "Print", "code": "print(1)", "output": "1", "expected_output": "1"}
      ]
    }"#;
    let client = happy_client().reply(PromptKind::Content, content_reply);
    let topics = course_topics().into_iter().take(1).collect();

    let course = CourseAssembler::new(&client, topics).build_course().await;

    let content = &course.modules[0].hierarchical_structure.submodules[0].sub_submodules[0].content;
    assert_eq!(content.theory, "Printing values.");
    assert_eq!(content.code_examples[0].output.as_deref(), Some("1"));
}
