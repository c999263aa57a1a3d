use super::Prompt;

const SYSTEM: &str = "You are a friendly Python teacher creating book content for beginners. Write concisely for a PDF book format. Include references to visual elements like tables, diagrams, and images.";

const SHAPE: &str = r#"{
  "theory": "Concise explanation (150-250 words)",
  "key_points": ["point1", "point2", "point3"],
  "visual_elements": [
    {
      "type": "image|diagram|table",
      "description": "What to show",
      "search_query": "Image search term for unsplash/pexels"
    }
  ],
  "table_data": {
    "headers": ["col1", "col2"],
    "rows": [["data1", "data2"]],
    "caption": "Table description"
  },
  "code_examples": [
    {
      "title": "Example name",
      "code": "Python code (keep short)",
      "explanation": "Brief explanation",
      "output": "Expected result"
    }
  ]
}"#;

/// Prompt for the material of one sub-submodule.
pub fn content_prompt(
    module: &str,
    submodule: &str,
    sub_submodule: &str,
    description: &str,
) -> Prompt {
    let user = format!(
        "Create book-friendly learning content for:\n\
         Module: {module} > {submodule} > {sub_submodule}\n\
         Description: {description}\n\n\
         Generate concise, book-appropriate content with:\n\
         1. THEORY:\n   \
         - Clear, concise explanation\n   \
         - Focus on key concepts\n   \
         - Book-friendly language\n\n\
         2. VISUAL ELEMENTS:\n   \
         - Suggest 1-2 relevant images/diagrams with search terms\n   \
         - Suggest 1 comparison table if applicable\n\n\
         3. CODE EXAMPLE (1-2 examples max):\n   \
         - Short, clear examples\n   \
         - Essential code only\n   \
         - Brief explanation\n\n\
         4. KEY TAKEAWAY:\n   \
         - 2-3 bullet points summarizing the concept\n\n\
         Return as JSON:\n{shape}",
        shape = SHAPE,
    );

    Prompt::new(SYSTEM, user)
}
