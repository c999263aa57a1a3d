//! Plain-text rendering of the course.
//!
//! Deterministic: the same tree always yields the same bytes, so a course
//! reloaded from the JSON artifact renders identically.

use crate::course::models::option_letter;
use crate::course::{
    CodeExample, Content, Course, Exercise, Module, ModuleBody, Project, Quiz, Section,
    SubSubmodule, Submodule,
};

const WIDTH: usize = 100;
const INNER_WIDTH: usize = 95;

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !is_blank(v))
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Accumulates output lines; joined with `\n` at the end.
struct TextBook {
    lines: Vec<String>,
}

impl TextBook {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Section banner: `ch` rule, title, `ch` rule, preceded by an empty line.
    fn banner(&mut self, ch: char, title: &str) {
        self.line(format!("\n{}", rule(ch, WIDTH)));
        self.line(title);
        self.line(rule(ch, WIDTH));
        self.blank();
    }

    fn heading(&mut self, title: &str) {
        self.line(title);
        self.line(rule('-', WIDTH));
    }

    /// Fenced block with every line prefixed by `indent`.
    fn fenced(&mut self, indent: &str, lang: &str, body: &str) {
        self.line(format!("{}```{}", indent, lang));
        for line in body.split('\n') {
            self.line(format!("{}{}", indent, line));
        }
        self.line(format!("{}```", indent));
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

pub fn render_course_text(course: &Course) -> String {
    let mut book = TextBook::new();

    front_matter(&mut book, course);

    for (i, module) in course.modules.iter().enumerate() {
        render_module(&mut book, i + 1, module);
    }

    if let Some(quiz) = course.comprehensive_quiz.as_ref() {
        if !quiz.questions.is_empty() {
            render_quiz(&mut book, quiz);
        }
    }

    closing(&mut book);

    book.finish()
}

fn front_matter(book: &mut TextBook, course: &Course) {
    book.line(rule('=', WIDTH));
    book.line(center(&course.title, WIDTH));
    book.line(rule('=', WIDTH));
    book.blank();
    book.line("🎓 Welcome to Your Learning Journey!");
    book.blank();
    book.line(format!("👋 Who is this for? {}", course.audience));
    book.line(format!("📈 Your Path: {}", course.level));
    book.line(format!("🎯 What You'll Achieve: {}", course.outcome));
    book.blank();
    book.line("💪 Ready to start? Let's dive in! Remember: everyone starts as a beginner.");
    book.line("    Take your time, practice the examples, and don't hesitate to revisit sections.");
    book.blank();
    book.line(rule('=', WIDTH));
    book.blank();
}

fn render_module(book: &mut TextBook, number: usize, module: &Module) {
    let name = if is_blank(&module.name) {
        "Untitled"
    } else {
        module.name.as_str()
    };
    book.line(format!("\n{}", rule('#', WIDTH)));
    book.line(format!("MODULE {}: {}", number, name));
    book.line(rule('#', WIDTH));
    book.blank();

    if !is_blank(&module.overview) {
        book.heading("📝 OVERVIEW");
        book.line(module.overview.as_str());
        book.blank();
    }

    let body = module.body();

    if let ModuleBody::Hierarchical(submodules) = body {
        book.heading("📋 MODULE STRUCTURE");
        for (sm_idx, submodule) in submodules.iter().enumerate() {
            book.line(format!("  {}. {}", sm_idx + 1, submodule.name));
            for (ssm_idx, sub_sub) in submodule.sub_submodules.iter().enumerate() {
                book.line(format!("     {}.{} {}", sm_idx + 1, ssm_idx + 1, sub_sub.name));
            }
        }
        book.blank();
    }

    if !is_blank(&module.estimated_duration) {
        book.line(format!("⏱️  Estimated Duration: {}", module.estimated_duration));
        book.blank();
    }

    bullet_section(book, "📋 PREREQUISITES", "  • ", &module.prerequisites);
    bullet_section(book, "🎯 LEARNING OBJECTIVES", "  ✓ ", &module.learning_objectives);

    if !module.key_terms.is_empty() {
        book.heading("🔑 KEY TERMS");
        book.line(format!("  {}", module.key_terms.join(", ")));
        book.blank();
    }

    match body {
        ModuleBody::Hierarchical(submodules) => hierarchical_content(book, submodules),
        ModuleBody::Flat(sections) => flat_content(book, sections),
        ModuleBody::Empty => {}
    }

    module_exercises(book, &module.exercises);

    if let Some(project) = module.project.as_ref().filter(|p| !p.is_empty()) {
        mini_project(book, project);
    }

    if !module.resources.is_empty() {
        book.banner('=', "📚 ADDITIONAL RESOURCES");
        for resource in &module.resources {
            book.line(format!("  • {}", resource));
        }
        book.blank();
    }
}

fn bullet_section(book: &mut TextBook, title: &str, bullet: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    book.heading(title);
    for item in items {
        book.line(format!("{}{}", bullet, item));
    }
    book.blank();
}

fn hierarchical_content(book: &mut TextBook, submodules: &[Submodule]) {
    book.banner('=', "📚 DETAILED CONTENT (HIERARCHICAL)");

    for (sm_idx, submodule) in submodules.iter().enumerate() {
        let name = if is_blank(&submodule.name) {
            "Untitled"
        } else {
            submodule.name.as_str()
        };
        book.line(format!("\n{}", rule('━', WIDTH)));
        book.line(format!("📖 SUBMODULE {}: {}", sm_idx + 1, name));
        book.line(rule('━', WIDTH));
        if !is_blank(&submodule.description) {
            book.line(format!("Description: {}", submodule.description));
        }
        book.blank();

        for (ssm_idx, sub_sub) in submodule.sub_submodules.iter().enumerate() {
            sub_submodule(book, sm_idx + 1, ssm_idx + 1, sub_sub);
        }
    }
}

fn sub_submodule(book: &mut TextBook, sm: usize, ssm: usize, sub_sub: &SubSubmodule) {
    let name = if is_blank(&sub_sub.name) {
        "Untitled"
    } else {
        sub_sub.name.as_str()
    };
    book.line(format!("\n  {}", rule('─', INNER_WIDTH)));
    book.line(format!("  📘 {}.{} {}", sm, ssm, name));
    book.line(format!("  {}", rule('─', INNER_WIDTH)));
    if !is_blank(&sub_sub.description) {
        book.line(format!("  {}", sub_sub.description));
    }
    book.blank();

    content_block(book, &sub_sub.content);
}

fn content_block(book: &mut TextBook, content: &Content) {
    if !is_blank(&content.theory) {
        book.line("  📚 Theory:");
        book.line(format!("  {}", rule('·', INNER_WIDTH)));
        for line in content.theory.split('\n') {
            book.line(format!("  {}", line));
        }
        book.blank();
    }

    if !content.key_points.is_empty() {
        book.line("  🔑 Key Points:");
        for point in &content.key_points {
            book.line(format!("    • {}", point));
        }
        book.blank();
    }

    if !content.visual_elements.is_empty() {
        book.line("  🖼️  Suggested Visuals:");
        for visual in &content.visual_elements {
            let kind = if is_blank(&visual.kind) { "visual" } else { visual.kind.as_str() };
            book.line(format!("    • [{}] {}", kind, visual.description));
            if !is_blank(&visual.search_query) {
                book.line(format!("      Search: {}", visual.search_query));
            }
        }
        book.blank();
    }

    if let Some(table) = content.table_data.as_ref().filter(|t| t.is_renderable()) {
        if is_blank(&table.caption) {
            book.line("  📊 Table:");
        } else {
            book.line(format!("  📊 Table: {}", table.caption));
        }
        book.line(format!("    | {} |", table.headers.join(" | ")));
        book.line(format!(
            "    |{}|",
            table
                .headers
                .iter()
                .map(|h| rule('-', h.chars().count() + 2))
                .collect::<Vec<_>>()
                .join("|")
        ));
        for row in &table.rows {
            book.line(format!("    | {} |", row.join(" | ")));
        }
        book.blank();
    }

    if !content.code_examples.is_empty() {
        book.line("  💻 Code Examples:");
        for (ex_idx, example) in content.code_examples.iter().enumerate() {
            content_example(book, ex_idx + 1, example);
        }
    }

    if !content.exercises.is_empty() {
        book.line("  ✏️  Practice Exercises:");
        for (ex_idx, exercise) in content.exercises.iter().enumerate() {
            book.line(format!("\n    Exercise {}:", ex_idx + 1));
            if !is_blank(&exercise.prompt) {
                book.line(format!("    Task: {}", exercise.prompt));
            }
            if let Some(code) = present(&exercise.starter_code) {
                book.line("    Starter Code:");
                book.fenced("    ", "python", code);
            }
            if !exercise.hints.is_empty() {
                book.line("    💡 Hints:");
                for hint in &exercise.hints {
                    book.line(format!("      • {}", hint));
                }
            }
            book.blank();
        }
    }
}

fn content_example(book: &mut TextBook, number: usize, example: &CodeExample) {
    let title = if is_blank(&example.title) {
        "Code"
    } else {
        example.title.as_str()
    };
    book.line(format!("\n    Example {}: {}", number, title));
    if !is_blank(&example.explanation) {
        book.line(format!("    {}", example.explanation));
    }
    if !is_blank(&example.code) {
        book.fenced("    ", "python", &example.code);
    }
    if let Some(output) = present(&example.output) {
        book.line("    Output:");
        book.fenced("    ", "", output);
    }
    book.blank();
}

fn flat_content(book: &mut TextBook, sections: &[Section]) {
    book.banner('=', "📚 DETAILED CONTENT");

    for (idx, section) in sections.iter().enumerate() {
        let title = if is_blank(&section.title) {
            "Untitled"
        } else {
            section.title.as_str()
        };
        book.line(format!("\n{}", rule('─', WIDTH)));
        book.line(format!("Section {}: {}", idx + 1, title));
        book.line(rule('─', WIDTH));
        book.blank();

        if !is_blank(&section.explanation) {
            book.line(section.explanation.as_str());
            book.blank();
        }

        for (ex_idx, example) in section.code_examples.iter().enumerate() {
            let title = if is_blank(&example.title) {
                "Code Example"
            } else {
                example.title.as_str()
            };
            book.line(format!("\n💻 Example {}: {}", ex_idx + 1, title));
            book.line(rule('~', WIDTH));

            if !is_blank(&example.explanation) {
                book.line(example.explanation.as_str());
                book.blank();
            }
            if !is_blank(&example.code) {
                book.line("Code:");
                book.fenced("", "python", &example.code);
                book.blank();
            }
            if let Some(output) = present(&example.output) {
                book.line("Expected Output:");
                book.fenced("", "", output);
                book.blank();
            }
        }
    }
}

fn module_exercises(book: &mut TextBook, exercises: &[Exercise]) {
    if exercises.is_empty() {
        return;
    }
    book.banner('=', "✏️  PRACTICE EXERCISES");

    for (idx, exercise) in exercises.iter().enumerate() {
        book.line(format!("\nExercise {}:", idx + 1));
        book.line(rule('-', WIDTH));

        if !is_blank(&exercise.prompt) {
            book.line(format!("📝 Task: {}", exercise.prompt));
            book.blank();
        }
        if let Some(code) = present(&exercise.starter_code) {
            book.line("Starter Code:");
            book.fenced("", "python", code);
            book.blank();
        }
        if let Some(outline) = present(&exercise.solution_outline) {
            book.line("💡 Solution Outline:");
            book.line(outline);
            book.blank();
        }
        if !exercise.hints.is_empty() {
            book.line("💡 Hints:");
            for hint in &exercise.hints {
                book.line(format!("  • {}", hint));
            }
            book.blank();
        }
    }
}

fn mini_project(book: &mut TextBook, project: &Project) {
    book.banner('=', "🚀 MINI-PROJECT");

    if !is_blank(&project.title) {
        book.line(format!("Project Title: {}", project.title));
        book.blank();
    }
    if !is_blank(&project.problem_statement) {
        book.heading("Problem Statement:");
        book.line(project.problem_statement.as_str());
        book.blank();
    }
    if !is_blank(&project.dataset) {
        book.heading("Dataset Description:");
        book.line(project.dataset.as_str());
        book.blank();
    }
    if !project.milestones.is_empty() {
        book.heading("Project Milestones:");
        for (idx, milestone) in project.milestones.iter().enumerate() {
            book.line(format!("  {}. {}", idx + 1, milestone));
        }
        book.blank();
    }
    bullet_section(book, "Grading Rubric:", "  • ", &project.rubric);
    bullet_section(book, "Extension Ideas:", "  + ", &project.extensions);
}

fn render_quiz(book: &mut TextBook, quiz: &Quiz) {
    book.line(format!("\n\n{}", rule('#', WIDTH)));
    book.line("🎓 FINAL QUIZ - TEST YOUR KNOWLEDGE!");
    book.line(rule('#', WIDTH));
    book.blank();
    book.line("🎉 Congratulations on completing all the modules!");
    book.blank();

    if !is_blank(&quiz.instructions) {
        book.heading("📋 How This Quiz Works:");
        book.line(quiz.instructions.as_str());
        book.blank();
    }

    book.line("\n💡 This quiz helps you review everything you've learned.");
    book.line("   Don't worry about getting everything right - this is about learning!");
    book.line(format!("\n📊 Total Questions: {}", quiz.questions.len()));
    book.line("   Mix of beginner 🟢, intermediate 🟡, and medium 🟠 difficulty");
    book.blank();
    book.line("✨ Take your time and think through each question. Good luck!");
    book.blank();

    for (idx, question) in quiz.questions.iter().enumerate() {
        book.line(format!("\n{}", rule('=', WIDTH)));
        book.line(format!("Question {}", idx + 1));
        if !is_blank(&question.module) {
            book.line(format!("Module: {}", question.module));
        }
        if let Some(difficulty) = question.difficulty {
            book.line(format!(
                "Difficulty: {} {}",
                difficulty.emoji(),
                difficulty.label()
            ));
        }
        book.line(rule('=', WIDTH));
        book.blank();
        book.line(question.question.as_str());
        book.blank();

        if !question.options.is_empty() {
            for (opt_idx, option) in question.options.iter().enumerate() {
                book.line(format!("  {}) {}", option_letter(opt_idx), option));
            }
            book.blank();
        }

        if let Some(letter) = question.answer_letter() {
            book.line(format!("✅ Correct Answer: {}", letter));
        }

        if !is_blank(&question.explanation) {
            book.line("\n💡 Explanation:");
            book.line(question.explanation.as_str());
        }
        book.blank();
    }
}

fn closing(book: &mut TextBook) {
    book.line(format!("\n{}", rule('=', WIDTH)));
    book.line("🎊 CONGRATULATIONS - YOU'VE COMPLETED THE COURSE! 🎊");
    book.line(rule('=', WIDTH));
    book.blank();
    book.line("🌟 Amazing work! You've taken your first steps into the world of Python, Data, and AI.");
    book.blank();
    book.line("📚 What You've Accomplished:");
    book.line("   ✓ Mastered Python fundamentals");
    book.line("   ✓ Learned to work with real data (CSV, JSON)");
    book.line("   ✓ Explored NumPy and Pandas for data analysis");
    book.line("   ✓ Created visualizations with Matplotlib");
    book.line("   ✓ Built a complete data analysis project");
    book.blank();
    book.line("🚀 Next Steps on Your Journey:");
    book.line("   • Practice, practice, practice - build your own projects!");
    book.line("   • Explore machine learning libraries like scikit-learn");
    book.line("   • Join data science communities and keep learning");
    book.line("   • Remember: every expert was once a beginner");
    book.blank();
    book.line("💙 Keep coding, keep learning, and enjoy the journey!");
    book.line(rule('=', WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pads_both_sides() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 3), "toolong");
    }

    #[test]
    fn test_fenced_block_indents_every_line() {
        let mut book = TextBook::new();
        book.fenced("    ", "python", "x = 1\nprint(x)");
        assert_eq!(
            book.finish(),
            "    ```python\n    x = 1\n    print(x)\n    ```"
        );
    }

    #[test]
    fn test_empty_course_still_has_front_matter_and_closing() {
        let text = render_course_text(&Course::default());
        assert!(text.contains("🎓 Welcome to Your Learning Journey!"));
        assert!(text.contains("YOU'VE COMPLETED THE COURSE"));
        assert!(!text.contains("FINAL QUIZ"));
    }
}
