//! Module overview prompt and the `build_module` function schema.

use serde_json::{json, Value};

use super::Prompt;
use crate::course::TopicSpec;
use crate::llm::FunctionSpec;

pub const MODULE_FUNCTION_NAME: &str = "build_module";

const SYSTEM: &str = "You are a friendly, patient teacher creating a comprehensive Python course for absolute beginners. Create module-level overview and metadata.";

const GUIDELINES: &str = "TONE & APPROACH:
- Write in second person (\"you will learn\", \"let's explore\")
- Be conversational and encouraging, not academic or dry
- Assume ZERO prior knowledge - explain everything from scratch
- Use relatable real-world analogies (cooking, everyday tasks, etc.)
- Include motivational context: \"why should I care about this?\"
- Break down intimidating concepts into digestible chunks
- Acknowledge common student struggles and provide reassurance

CONTENT STRUCTURE - Follow this order strictly:

1. WARM INTRODUCTION:
   - Start with: \"Welcome to [topic]! In this section, you'll discover...\"
   - Hook the student with why this matters for their AI/ML journey
   - Set clear expectations: \"By the end, you'll be able to...\"

2. THEORY - EXPLAINED LIKE A FRIEND:
   - Define concepts using simple language first, then technical terms
   - Use analogies: \"Think of variables like labeled boxes...\"
   - Explain the \"why\" before the \"how\"
   - Include \"💡 Pro Tip\", \"⚠️ Common Mistake\", \"🤔 Think About It\" callouts
   - Build intuition before diving into details
   - Connect to ML/AI context: \"You'll use this when...\"

3. CODE EXAMPLES - LEARN BY DOING:
   - 4-6 examples per topic, starting with \"Hello World\" simplicity
   - Introduce each example: \"Let's see this in action...\"
   - Walk through code line-by-line as if explaining to a friend
   - Show expected output and explain what happened
   - Include variations: \"What if we change this?\"
   - Relate examples to data science tasks

4. YOUR TURN - PRACTICE EXERCISES:
   - 5-7 exercises with encouraging prompts
   - Start with: \"Now it's your turn to try...\"
   - Provide helpful starter code with \"# TODO\" comments
   - Give step-by-step solution outlines, not just answers
   - Include hints: \"Stuck? Try thinking about...\"

5. LEARNING AIDS:
   - \"Key Takeaways\" summary: \"Remember these important points...\"
   - \"What's Next\" preview: \"In the next section, we'll build on this...\"
   - Recommended resources with context: \"If you want to dive deeper...\"";

/// Prompt for the module overview; the submodules are already generated.
pub fn metadata_prompt(topic: &TopicSpec, submodule_names: &[String]) -> Prompt {
    let names = serde_json::to_string_pretty(submodule_names).unwrap_or_else(|_| "[]".into());

    let mut user = format!(
        "Create module overview for: {name}\n\n\
         Submodules covered:\n{names}\n\n\
         {guidelines}\n\n\
         Create welcoming overview, learning objectives, prerequisites, key terms, estimated duration.\n\
         Context: {guidance}\n\n",
        name = topic.name,
        guidance = topic.guidance,
        guidelines = GUIDELINES,
    );

    if topic.capstone {
        user.push_str(
            "This is the capstone module: fill in the project section with a title, \
             problem_statement, dataset description, milestones, rubric, and extensions.\n\n",
        );
    }

    user.push_str("Return minimal overview - detailed content is already in submodules.");

    Prompt::new(SYSTEM, user)
}

/// Function the metadata request forces the model to call.
pub fn module_function() -> FunctionSpec {
    FunctionSpec {
        name: MODULE_FUNCTION_NAME.to_string(),
        description: "Create a detailed module for a Python & Data for AI course with examples, exercises, and a quiz.".to_string(),
        parameters: module_schema(),
    }
}

fn module_schema() -> Value {
    let string_list = json!({ "type": "array", "items": { "type": "string" } });

    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "overview": { "type": "string" },
            "learning_objectives": string_list,
            "prerequisites": string_list,
            "estimated_duration": { "type": "string" },
            "key_terms": string_list,
            "topics": string_list,
            "detailed_content": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "explanation": { "type": "string" },
                        "code_examples": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "title": { "type": "string" },
                                    "code": { "type": "string" },
                                    "explanation": { "type": "string" },
                                    "expected_output": { "type": "string" }
                                },
                                "required": ["title", "code", "explanation"]
                            }
                        }
                    },
                    "required": ["title", "explanation"]
                }
            },
            "exercises": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "prompt": { "type": "string" },
                        "starter_code": { "type": "string" },
                        "solution_outline": { "type": "string" }
                    },
                    "required": ["prompt"]
                }
            },
            "resources": string_list,
            "project": {
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "problem_statement": { "type": "string" },
                    "dataset": { "type": "string" },
                    "milestones": string_list,
                    "rubric": string_list,
                    "extensions": string_list
                }
            }
        },
        "required": [
            "name",
            "overview",
            "learning_objectives",
            "detailed_content",
            "exercises",
            "estimated_duration",
            "prerequisites",
            "key_terms"
        ]
    })
}
