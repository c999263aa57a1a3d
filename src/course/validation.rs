//! Defensive checks on generated content.
//!
//! The model is asked for a schema but nothing enforces it, so the shapes the
//! renderers rely on are checked here. Problems are collected rather than
//! raised: callers log them and keep going.

use std::fmt;

use super::models::{ModuleStructure, Question, Quiz};

pub const MIN_SUBMODULES: usize = 3;
pub const MAX_SUBMODULES: usize = 5;
pub const MIN_SUB_SUBMODULES: usize = 2;
pub const MAX_SUB_SUBMODULES: usize = 4;

/// A single problem found in generated content.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Path of the offending value, e.g. `questions[3].answer_index`
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} is empty", label))
    }

    pub fn answer_out_of_range(field: &str, index: usize, options: usize) -> Self {
        Self::new(
            field,
            format!("answer index {} has no matching option ({} options)", index, options),
        )
        .with_suggestion("question dropped from the quiz")
    }

    pub fn count_out_of_range(field: &str, count: usize, min: usize, max: usize) -> Self {
        Self::new(
            field,
            format!("expected {}-{} entries, got {}", min, max, count),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Emit every collected problem as a warning tagged with `context`.
    pub fn log_warnings(&self, context: &str) {
        for error in &self.errors {
            log::warn!("⚠️ {}: {}", context, error);
        }
    }
}

// ============================================================================
// Checks
// ============================================================================

/// Check submodule and sub-submodule counts against the requested ranges.
pub fn validate_structure(structure: &ModuleStructure, errors: &mut ValidationErrors) {
    let count = structure.submodules.len();
    if !(MIN_SUBMODULES..=MAX_SUBMODULES).contains(&count) {
        errors.add(ValidationError::count_out_of_range(
            "submodules",
            count,
            MIN_SUBMODULES,
            MAX_SUBMODULES,
        ));
    }

    for (i, submodule) in structure.submodules.iter().enumerate() {
        if submodule.name.trim().is_empty() {
            errors.add(ValidationError::empty_field(
                &format!("submodules[{}].name", i),
                "Submodule name",
            ));
        }
        let count = submodule.sub_submodules.len();
        if !(MIN_SUB_SUBMODULES..=MAX_SUB_SUBMODULES).contains(&count) {
            errors.add(ValidationError::count_out_of_range(
                &format!("submodules[{}].sub_submodules", i),
                count,
                MIN_SUB_SUBMODULES,
                MAX_SUB_SUBMODULES,
            ));
        }
    }
}

/// Check that a question can be rendered; returns false if it must be dropped.
pub fn validate_question(question: &Question, index: usize, errors: &mut ValidationErrors) -> bool {
    if question.question.trim().is_empty() {
        errors.add(
            ValidationError::empty_field(&format!("questions[{}].question", index), "Question text")
                .with_suggestion("question dropped from the quiz"),
        );
        return false;
    }

    match question.answer_index {
        Some(answer) if answer >= question.options.len() => {
            errors.add(ValidationError::answer_out_of_range(
                &format!("questions[{}].answer_index", index),
                answer,
                question.options.len(),
            ));
            false
        }
        _ => true,
    }
}

/// Drop questions that cannot be rendered, keeping the order of the rest.
pub fn retain_valid_questions(quiz: &mut Quiz) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let questions = std::mem::take(&mut quiz.questions);
    quiz.questions = questions
        .into_iter()
        .enumerate()
        .filter(|(i, question)| validate_question(question, *i, &mut errors))
        .map(|(_, question)| question)
        .collect();
    errors
}
