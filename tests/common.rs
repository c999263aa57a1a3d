#![allow(dead_code)]

use std::collections::HashMap;

use course_book::course::{
    CodeExample, Content, Course, Difficulty, Module, Question, Quiz, Section, SubSubmodule,
    Submodule, TableData,
};
use course_book::llm::{CompletionRequest, PromptKind};
use course_book::{ModelClient, ModelError};

/// Replies with a fixed raw string per prompt kind and records every request.
/// Kinds without a scripted reply fail like an unreachable service.
pub struct ScriptedClient {
    replies: HashMap<PromptKind, String>,
    requests: tokio::sync::Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            requests: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, kind: PromptKind, raw: impl Into<String>) -> Self {
        self.replies.insert(kind, raw.into());
        self
    }

    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn kinds(&self) -> Vec<PromptKind> {
        self.requests.lock().await.iter().map(|r| r.kind).collect()
    }
}

#[async_trait::async_trait]
impl ModelClient for ScriptedClient {
    async fn submit(&self, request: CompletionRequest) -> Result<String, ModelError> {
        let kind = request.kind;
        self.requests.lock().await.push(request);
        self.replies
            .get(&kind)
            .cloned()
            .ok_or(ModelError::Status {
                status: 503,
                body: format!("no scripted reply for {}", kind),
            })
    }
}

pub const STRUCTURE_REPLY: &str = r#"{
  "submodules": [
    {
      "name": "Getting Started",
      "description": "First contact with Python",
      "sub_submodules": [
        {"name": "Installing Python", "description": "Set up the interpreter"}
      ]
    }
  ]
}"#;

pub const CONTENT_REPLY: &str = r#"{
  "theory": "Python is an interpreted language.",
  "key_points": ["Python runs line by line"],
  "visual_elements": [],
  "table_data": null,
  "code_examples": [],
  "exercises": []
}"#;

pub const METADATA_REPLY: &str = r#"{
  "name": "",
  "overview": "",
  "learning_objectives": [],
  "prerequisites": [],
  "estimated_duration": "",
  "key_terms": [],
  "topics": [],
  "detailed_content": [],
  "exercises": [],
  "resources": []
}"#;

pub const QUIZ_REPLY: &str = r#"{
  "instructions": "Pick one answer per question.",
  "questions": [
    {
      "module": "Python Basics",
      "difficulty": "beginner",
      "question": "Which option is B?",
      "options": ["A", "B", "C", "D"],
      "answer_index": 1,
      "explanation": "B is the second option."
    }
  ]
}"#;

/// The client every section answers successfully.
pub fn happy_client() -> ScriptedClient {
    ScriptedClient::new()
        .reply(PromptKind::Structure, STRUCTURE_REPLY)
        .reply(PromptKind::Content, CONTENT_REPLY)
        .reply(PromptKind::Metadata, METADATA_REPLY)
        .reply(PromptKind::Quiz, QUIZ_REPLY)
}

/// A small hand-built course touching every renderable section.
pub fn sample_course() -> Course {
    let mut module = Module::named("Python Basics");
    module.overview = "Variables, types and control flow.".to_string();
    module.learning_objectives = vec!["Write a loop".to_string()];
    module.key_terms = vec!["variable".to_string(), "loop".to_string()];
    module.hierarchical_structure.submodules = vec![Submodule {
        name: "Variables".to_string(),
        description: "Naming values".to_string(),
        sub_submodules: vec![SubSubmodule {
            name: "Assignment".to_string(),
            description: "Binding names".to_string(),
            content: Content {
                theory: "A variable names a value.\n\nNames can be rebound.".to_string(),
                key_points: vec!["Use descriptive names".to_string()],
                table_data: Some(TableData {
                    headers: vec!["Type".to_string(), "Example".to_string()],
                    rows: vec![
                        vec!["int".to_string(), "42".to_string()],
                        vec!["str".to_string(), "\"hi\"".to_string()],
                    ],
                    caption: "Common types".to_string(),
                }),
                code_examples: vec![CodeExample {
                    title: "Assign a number".to_string(),
                    code: "x = 42\nprint(x)".to_string(),
                    explanation: "Prints 42.".to_string(),
                    output: Some("42".to_string()),
                }],
                ..Content::default()
            },
        }],
    }];

    let mut legacy = Module::named("Legacy Module");
    legacy.detailed_content = vec![Section {
        title: "Old style section".to_string(),
        explanation: "Flat content from an older run.".to_string(),
        code_examples: Vec::new(),
    }];

    Course {
        title: "Test Course".to_string(),
        audience: "Testers".to_string(),
        level: "Beginner".to_string(),
        outcome: "Confidence".to_string(),
        modules: vec![module, legacy],
        comprehensive_quiz: Some(Quiz {
            instructions: "Answer everything.".to_string(),
            questions: vec![Question {
                module: "Python Basics".to_string(),
                difficulty: Some(Difficulty::Intermediate),
                question: "Which letter is third?".to_string(),
                options: vec![
                    "first".to_string(),
                    "second".to_string(),
                    "third".to_string(),
                ],
                answer_index: Some(2),
                explanation: "Counting from A.".to_string(),
            }],
        }),
    }
}

pub fn typst_available() -> bool {
    std::process::Command::new("typst")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
