use super::Prompt;
use crate::course::TopicSpec;

const SYSTEM: &str = "You are a curriculum architect. Create a detailed hierarchical breakdown of a Python learning module into submodules and sub-submodules.";

const SHAPE: &str = r#"{
  "submodules": [
    {
      "name": "Submodule name",
      "description": "Brief description",
      "sub_submodules": [
        {
          "name": "Sub-submodule name",
          "description": "What student will learn"
        }
      ]
    }
  ]
}"#;

pub fn structure_prompt(topic: &TopicSpec) -> Prompt {
    let user = format!(
        "Module: {name}\n\
         Guidance: {guidance}\n\n\
         Create a focused, book-friendly hierarchical structure for a 30-40 page PDF book:\n\
         1. Break this module into 3-5 SUBMODULES (key topics only)\n   \
         - Focus on the most important concepts for a beginner\n   \
         - Keep it concise and book-appropriate\n\
         2. For each submodule, identify 2-4 SUB-SUBMODULES (essential concepts)\n   \
         - Focus on core learning points\n   \
         - Ensure content fits in 5-7 pages per module\n\n\
         Return as JSON with this structure:\n{shape}\n\n\
         Make the breakdown logical and comprehensive for a beginner learning Python for ML/AI.",
        name = topic.name,
        guidance = topic.guidance,
        shape = SHAPE,
    );

    Prompt::new(SYSTEM, user)
}
