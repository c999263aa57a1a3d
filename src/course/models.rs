//! Course tree produced by the generation pass and consumed by the renderers.
//!
//! Every struct tolerates missing fields on input so that partially
//! conforming model output still decodes. Field names match the JSON shapes
//! requested in the prompts and are kept verbatim in the JSON artifact.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The whole book.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Course {
    pub title: String,
    pub audience: String,
    pub level: String,
    pub outcome: String,
    pub modules: Vec<Module>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comprehensive_quiz: Option<Quiz>,
}

/// A top-level chapter.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Module {
    pub name: String,
    pub overview: String,
    #[serde(deserialize_with = "string_list")]
    pub learning_objectives: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub prerequisites: Vec<String>,
    pub estimated_duration: String,
    #[serde(deserialize_with = "string_list")]
    pub key_terms: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub topics: Vec<String>,
    /// Legacy flat content, used only when the hierarchy is empty.
    pub detailed_content: Vec<Section>,
    pub exercises: Vec<Exercise>,
    pub resources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    pub hierarchical_structure: ModuleStructure,
}

/// How a module's body is laid out, selected once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModuleBody<'a> {
    Hierarchical(&'a [Submodule]),
    Flat(&'a [Section]),
    Empty,
}

impl Module {
    /// Module with only a name and everything else empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn body(&self) -> ModuleBody<'_> {
        if !self.hierarchical_structure.submodules.is_empty() {
            ModuleBody::Hierarchical(&self.hierarchical_structure.submodules)
        } else if !self.detailed_content.is_empty() {
            ModuleBody::Flat(&self.detailed_content)
        } else {
            ModuleBody::Empty
        }
    }

    /// Titles of the topics this module covers, in display order.
    pub fn topic_titles(&self) -> Vec<String> {
        match self.body() {
            ModuleBody::Hierarchical(submodules) => submodules
                .iter()
                .flat_map(|sm| sm.sub_submodules.iter().map(|ssm| ssm.name.clone()))
                .collect(),
            ModuleBody::Flat(sections) => sections.iter().map(|s| s.title.clone()).collect(),
            ModuleBody::Empty => self.topics.clone(),
        }
    }
}

/// Submodule tree returned by the structure prompt.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ModuleStructure {
    pub submodules: Vec<Submodule>,
}

impl ModuleStructure {
    pub fn sub_submodule_count(&self) -> usize {
        self.submodules.iter().map(|sm| sm.sub_submodules.len()).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Submodule {
    pub name: String,
    pub description: String,
    pub sub_submodules: Vec<SubSubmodule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SubSubmodule {
    pub name: String,
    pub description: String,
    pub content: Content,
}

/// Learning material for one sub-submodule.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Content {
    pub theory: String,
    #[serde(deserialize_with = "string_list")]
    pub key_points: Vec<String>,
    pub visual_elements: Vec<VisualElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_data: Option<TableData>,
    pub code_examples: Vec<CodeExample>,
    pub exercises: Vec<Exercise>,
}

/// An image, diagram or table the model suggests placing next to the text.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VisualElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub search_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TableData {
    #[serde(deserialize_with = "string_list")]
    pub headers: Vec<String>,
    #[serde(deserialize_with = "string_grid")]
    pub rows: Vec<Vec<String>>,
    pub caption: String,
}

impl TableData {
    /// A table is only drawn when it has both a header row and data rows.
    pub fn is_renderable(&self) -> bool {
        !self.headers.is_empty() && !self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(from = "CodeExampleWire")]
pub struct CodeExample {
    pub title: String,
    pub code: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Accepts `output`, the older `expected_output`, or both; `output` wins.
#[derive(Deserialize, Default)]
#[serde(default)]
struct CodeExampleWire {
    title: String,
    code: String,
    explanation: String,
    output: Option<String>,
    expected_output: Option<String>,
}

impl From<CodeExampleWire> for CodeExample {
    fn from(wire: CodeExampleWire) -> Self {
        Self {
            title: wire.title,
            code: wire.code,
            explanation: wire.explanation,
            output: wire.output.or(wire.expected_output),
        }
    }
}

/// Entry of the legacy flat `detailed_content` list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Section {
    pub title: String,
    pub explanation: String,
    pub code_examples: Vec<CodeExample>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Exercise {
    #[serde(alias = "task")]
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_outline: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

/// Capstone project attached to the final module.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub problem_statement: String,
    pub dataset: String,
    pub milestones: Vec<String>,
    pub rubric: Vec<String>,
    pub extensions: Vec<String>,
}

impl Project {
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.problem_statement.trim().is_empty()
            && self.dataset.trim().is_empty()
            && self.milestones.is_empty()
            && self.rubric.is_empty()
            && self.extensions.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Quiz {
    pub instructions: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Question {
    pub module: String,
    #[serde(
        deserialize_with = "lenient_difficulty",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<Difficulty>,
    pub question: String,
    #[serde(deserialize_with = "string_list")]
    pub options: Vec<String>,
    pub answer_index: Option<usize>,
    pub explanation: String,
}

impl Question {
    /// Letter of the correct option (`0` → `A`).
    pub fn answer_letter(&self) -> Option<char> {
        self.answer_index.map(option_letter)
    }
}

/// Letter shown in front of the option at `index`.
pub fn option_letter(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Medium,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Medium => "medium",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Beginner => "🟢",
            Self::Intermediate => "🟡",
            Self::Medium => "🟠",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Medium => "Medium",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "medium" => Ok(Self::Medium),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

// ============================================================================
// Lenient decoding helpers
// ============================================================================

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(cell_to_string)
        .collect())
}

fn string_grid<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Vec<Value>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_prefers_hierarchy() {
        let mut module = Module::named("Python Basics");
        module.detailed_content.push(Section {
            title: "Legacy".to_string(),
            ..Section::default()
        });
        assert!(matches!(module.body(), ModuleBody::Flat(_)));

        module.hierarchical_structure.submodules.push(Submodule {
            name: "Syntax".to_string(),
            ..Submodule::default()
        });
        assert!(matches!(module.body(), ModuleBody::Hierarchical(s) if s.len() == 1));
    }

    #[test]
    fn test_body_empty() {
        assert_eq!(Module::named("x").body(), ModuleBody::Empty);
    }

    #[test]
    fn test_unknown_difficulty_decodes_to_none() {
        let question: Question =
            serde_json::from_str(r#"{"question": "q", "difficulty": "hard"}"#).unwrap();
        assert_eq!(question.difficulty, None);

        let question: Question =
            serde_json::from_str(r#"{"question": "q", "difficulty": "Beginner"}"#).unwrap();
        assert_eq!(question.difficulty, Some(Difficulty::Beginner));
    }

    #[test]
    fn test_table_cells_coerced_to_strings() {
        let table: TableData = serde_json::from_str(
            r#"{"headers": ["Type", "Size"], "rows": [["int", 28], ["bool", true]], "caption": "Sizes"}"#,
        )
        .unwrap();
        assert_eq!(table.rows[0][1], "28");
        assert_eq!(table.rows[1][1], "true");
        assert!(table.is_renderable());
    }

    #[test]
    fn test_legacy_aliases() {
        let example: CodeExample =
            serde_json::from_str(r#"{"title": "t", "code": "print(1)", "expected_output": "1"}"#)
                .unwrap();
        assert_eq!(example.output.as_deref(), Some("1"));

        let example: CodeExample = serde_json::from_str(
            r#"{"code": "print(1)", "output": "1", "expected_output": "one"}"#,
        )
        .unwrap();
        assert_eq!(example.output.as_deref(), Some("1"));

        let exercise: Exercise =
            serde_json::from_str(r#"{"task": "Count words", "hints": ["split()"]}"#).unwrap();
        assert_eq!(exercise.prompt, "Count words");
        assert_eq!(exercise.hints, vec!["split()".to_string()]);
    }

    #[test]
    fn test_numeric_list_items_coerced_to_strings() {
        let question: Question = serde_json::from_str(
            r#"{"question": "len([1, 2, 3])?", "options": [1, 2, 3, 4], "answer_index": 2}"#,
        )
        .unwrap();
        assert_eq!(question.options, vec!["1", "2", "3", "4"]);

        let content: Content =
            serde_json::from_str(r#"{"key_points": ["lists are ordered", 3.5, null]}"#).unwrap();
        assert_eq!(content.key_points, vec!["lists are ordered", "3.5", ""]);
    }

    #[test]
    fn test_answer_letter() {
        let question = Question {
            answer_index: Some(2),
            ..Question::default()
        };
        assert_eq!(question.answer_letter(), Some('C'));
        assert_eq!(Question::default().answer_letter(), None);
    }
}
