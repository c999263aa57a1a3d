use serde::Serialize;

use super::Prompt;

const SYSTEM: &str = "You are a supportive teacher creating a quiz for students who just completed their first Python for AI course. Write questions that help students TEST their understanding while also REINFORCING learning. Be encouraging and educational.";

const SHAPE: &str = r#"{
  "instructions": "Friendly instructions: 'Congratulations on completing the course! This quiz will help you...'",
  "questions": [
    {
      "module": "Module name",
      "difficulty": "beginner|intermediate|medium",
      "question": "Question in conversational, student-friendly tone",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "answer_index": 0,
      "explanation": "Encouraging explanation that reinforces learning"
    }
  ]
}"#;

/// What the quiz prompt is told about one module. Full content is left out
/// to keep the prompt small.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModuleSummary {
    pub name: String,
    pub key_terms: Vec<String>,
    pub learning_objectives: Vec<String>,
    pub topics: Vec<String>,
}

pub fn quiz_prompt(summary: &[ModuleSummary]) -> Prompt {
    let summary_json = serde_json::to_string_pretty(summary).unwrap_or_else(|_| "[]".into());

    let user = format!(
        "Based on the following course modules, create a friendly, comprehensive quiz:\n\n\
         Course Content Summary:\n{summary_json}\n\n\
         Generate 12-15 multiple-choice questions with these characteristics:\n\n\
         STYLE & TONE:\n\
         - Write questions as if asking a student: \"Which approach would you use to...\"\n\
         - Make scenarios realistic: \"You're analyzing customer data and need to...\"\n\
         - Avoid trick questions - test real understanding\n\
         - Be clear and unambiguous\n\n\
         CONTENT COVERAGE:\n\
         - Cover all {count} modules proportionally\n\
         - Mix theoretical (\"What is...\") and practical (\"How would you...\")\n\
         - Include beginner (🟢), intermediate (🟡), and medium (🟠) difficulty\n\
         - Focus on ML/AI-relevant Python concepts\n\n\
         ANSWER OPTIONS:\n\
         - Provide 4 plausible options (avoid obviously wrong answers)\n\
         - Make distractors educational (common misconceptions)\n\n\
         EXPLANATIONS:\n\
         - Explain WHY the correct answer is right\n\
         - Briefly mention why other options are incorrect\n\
         - Reinforce the learning point\n\
         - Use encouraging language: \"Great! The correct answer is...\"\n\n\
         Return as a JSON object with this structure:\n{shape}",
        count = summary.len(),
        shape = SHAPE,
    );

    Prompt::new(SYSTEM, user)
}
