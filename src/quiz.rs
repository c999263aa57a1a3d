//! Final quiz pass over the assembled course.

use crate::course::validation::retain_valid_questions;
use crate::course::{Course, Quiz};
use crate::llm::{CompletionRequest, ModelClient, PromptKind};
use crate::parser::resolve;
use crate::prompts::{quiz_prompt, ModuleSummary};

pub const FALLBACK_INSTRUCTIONS: &str = "Complete the following quiz questions.";
const QUIZ_TEMPERATURE: f32 = 0.5;

/// Names, key terms, objectives and topic titles of every module.
pub fn course_summary(course: &Course) -> Vec<ModuleSummary> {
    course
        .modules
        .iter()
        .map(|module| ModuleSummary {
            name: module.name.clone(),
            key_terms: module.key_terms.clone(),
            learning_objectives: module.learning_objectives.clone(),
            topics: module.topic_titles(),
        })
        .collect()
}

fn fallback_quiz() -> Quiz {
    Quiz {
        instructions: FALLBACK_INSTRUCTIONS.to_string(),
        questions: Vec::new(),
    }
}

pub struct QuizGenerator<'a, C: ModelClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: ModelClient + ?Sized> QuizGenerator<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub async fn generate(&self, course: &Course) -> Quiz {
        let summary = course_summary(course);
        let request = CompletionRequest::new(PromptKind::Quiz, quiz_prompt(&summary))
            .json()
            .temperature(QUIZ_TEMPERATURE);

        let mut quiz = resolve(self.client.submit(request).await, fallback_quiz(), "Quiz").into_inner();

        let problems = retain_valid_questions(&mut quiz);
        problems.log_warnings("Quiz");

        log::info!("✅ Quiz: {} questions", quiz.questions.len());
        quiz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{Module, Section, SubSubmodule, Submodule};

    #[test]
    fn test_summary_uses_hierarchy_topic_titles() {
        let mut hierarchical = Module::named("Numpy, Pandas");
        hierarchical.key_terms = vec!["DataFrame".to_string()];
        hierarchical.hierarchical_structure.submodules = vec![Submodule {
            name: "Arrays".to_string(),
            description: String::new(),
            sub_submodules: vec![
                SubSubmodule {
                    name: "Shapes".to_string(),
                    ..SubSubmodule::default()
                },
                SubSubmodule {
                    name: "Broadcasting".to_string(),
                    ..SubSubmodule::default()
                },
            ],
        }];

        let mut flat = Module::named("Plotting");
        flat.detailed_content = vec![Section {
            title: "Line plots".to_string(),
            ..Section::default()
        }];

        let course = Course {
            modules: vec![hierarchical, flat],
            ..Course::default()
        };
        let summary = course_summary(&course);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].topics, vec!["Shapes", "Broadcasting"]);
        assert_eq!(summary[0].key_terms, vec!["DataFrame"]);
        assert_eq!(summary[1].topics, vec!["Line plots"]);
    }
}
