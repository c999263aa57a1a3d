//! Typst source for the PDF book.
//!
//! The preamble fixes the page geometry and the style sheet as Typst
//! functions; the body is a sequence of calls to those functions. Every
//! piece of generated text is passed as an escaped string literal so model
//! output can never be interpreted as markup.

use std::fmt::Write as _;

use super::common::typst_str;
use crate::course::models::option_letter;
use crate::course::{
    CodeExample, Content, Course, Module, ModuleBody, Quiz, Section, Submodule, TableData,
};

const PREAMBLE: &str = r##"#set page(
  paper: "us-letter",
  margin: (top: 72pt, left: 72pt, right: 72pt, bottom: 18pt),
)
#set text(font: ("Helvetica", "Arial", "Liberation Sans", "DejaVu Sans"), size: 10pt)
#set par(justify: true, leading: 4pt)
#show raw: set text(font: ("Courier", "Courier New", "DejaVu Sans Mono"), size: 9pt, fill: rgb("#2C3E50"))

#show heading.where(level: 1): it => block(above: 12pt, below: 12pt,
  text(size: 16pt, weight: "bold", fill: rgb("#34495E"), it.body))
#show heading.where(level: 2): it => block(above: 12pt, below: 10pt,
  text(size: 12pt, weight: "bold", fill: rgb("#7F8C8D"), it.body))
#show heading.where(level: 3): it => block(above: 10pt, below: 6pt,
  text(size: 11pt, weight: "bold", fill: rgb("#2C3E50"), it.body))

#let body-text(body) = block(below: 12pt, par(justify: true, body))

#let title-page(title, audience, generated) = {
  v(1.5in)
  align(center, line(length: 80%, stroke: 2pt + rgb("#3498db")))
  v(20pt)
  align(center, text(size: 24pt, weight: "bold", fill: rgb("#2C3E50"), title))
  v(10pt)
  align(center, line(length: 60%, stroke: 1pt + rgb("#3498db")))
  v(30pt)
  align(center, text(size: 12pt, fill: rgb("#7F8C8D"), "A Comprehensive Beginner's Guide"))
  v(0.3in)
  align(center, text(size: 12pt, fill: rgb("#7F8C8D"), audience))
  v(1in)
  align(center, text(size: 10pt, fill: gray, "Generated: " + generated))
}

#let data-table(caption, headers, rows) = block(breakable: false, width: 100%, above: 11pt, below: 11pt)[
  #if caption != none {
    block(below: 6pt, text(size: 10pt, weight: "bold", fill: rgb("#34495e"), "📊 " + caption))
  }
  #block(stroke: 2pt + rgb("#3498db"), table(
    columns: headers.len(),
    stroke: 0.5pt + rgb("#BDC3C7"),
    inset: (x: 10pt, y: 8pt),
    fill: (x, y) => if y == 0 { rgb("#3498db") } else if calc.odd(y) { white } else { rgb("#F8F9FA") },
    align: (x, y) => if y == 0 { center } else { left },
    table.header(..headers.map(h => text(size: 10pt, weight: "bold", fill: rgb("#F5F5F5"), h))),
    ..rows.flatten().map(c => text(size: 9pt, c)),
  ))
]

#let code-example(title, code, explanation) = block(breakable: false, width: 100%, above: 11pt)[
  #block(below: 8pt, text(size: 11pt, weight: "bold", fill: rgb("#2980b9"), "💻 " + title))
  #if code != none {
    block(width: 100%, fill: rgb("#F8F9FA"), stroke: 1pt + rgb("#DEE2E6"), inset: (x: 12pt, y: 10pt),
      raw(code, block: true, lang: "python"))
  }
  #if explanation != none { body-text(explanation) }
]

#let key-points(points) = block(breakable: false, width: 100%, above: 11pt,
  fill: rgb("#E8F8F5"), stroke: 2pt + rgb("#27ae60"), inset: (x: 15pt, y: 10pt))[
  #block(below: 8pt, text(size: 11pt, weight: "bold", fill: rgb("#27ae60"), "🔑 Key Takeaways"))
  #for point in points {
    block(below: 6pt, pad(left: 10pt, text(size: 10pt, "✓ " + point)))
  }
]

#let quiz-question(body) = block(above: 15pt, below: 10pt,
  text(size: 11pt, weight: "bold", fill: rgb("#2C3E50"), body))
#let quiz-option(body) = block(below: 5pt, pad(left: 20pt, text(size: 10pt, body)))
#let quiz-answer(body) = block(above: 5pt, below: 10pt,
  pad(left: 20pt, text(size: 9pt, fill: rgb("#7F8C8D"), body)))
"##;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A Typst string literal, or `none` for blank values.
fn optional_str(value: Option<&str>) -> String {
    match value {
        Some(v) if !is_blank(v) => typst_str(v),
        _ => "none".to_string(),
    }
}

/// Typst array literal of strings; the trailing comma keeps one-element
/// arrays from being read as parenthesized expressions.
fn str_array<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from("(");
    for item in items {
        out.push_str(&typst_str(item));
        out.push_str(", ");
    }
    out.push(')');
    out
}

/// Rows padded or cut to the header width so flattened cells stay aligned.
fn normalized_rows(table: &TableData) -> Vec<Vec<&str>> {
    let width = table.headers.len();
    table
        .rows
        .iter()
        .map(|row| {
            (0..width)
                .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                .collect()
        })
        .collect()
}

/// Builds the Typst source of the book.
pub struct BookTypesetter {
    generated_on: String,
}

impl BookTypesetter {
    /// `generated_on` is printed on the title page.
    pub fn new(generated_on: impl Into<String>) -> Self {
        Self {
            generated_on: generated_on.into(),
        }
    }

    pub fn render(&self, course: &Course) -> String {
        let mut doc = TypstDoc::new();

        doc.raw(&format!("#set document(title: {})\n", typst_str(&course.title)));
        doc.raw(PREAMBLE);
        doc.raw("\n");

        doc.call(
            "title-page",
            &[
                typst_str(&course.title),
                typst_str(&course.audience),
                typst_str(&self.generated_on),
            ],
        );

        for (i, module) in course.modules.iter().enumerate() {
            doc.raw("#pagebreak(weak: true)\n");
            render_module(&mut doc, i + 1, module);
        }

        if let Some(quiz) = course.comprehensive_quiz.as_ref() {
            if !quiz.questions.is_empty() {
                doc.raw("#pagebreak(weak: true)\n");
                render_quiz(&mut doc, quiz);
            }
        }

        doc.finish()
    }
}

struct TypstDoc {
    out: String,
}

impl TypstDoc {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn raw(&mut self, source: &str) {
        self.out.push_str(source);
    }

    /// `#name(arg, arg, ...)` on its own line.
    fn call(&mut self, name: &str, args: &[String]) {
        let _ = writeln!(self.out, "#{}({})", name, args.join(", "));
    }

    fn heading(&mut self, level: u8, title: &str) {
        let _ = writeln!(self.out, "#heading(level: {}, {})", level, typst_str(title));
    }

    fn spacer(&mut self, amount: &str) {
        let _ = writeln!(self.out, "#v({})", amount);
    }

    /// One `body-text` call per blank-line separated paragraph.
    fn paragraphs(&mut self, text: &str) {
        for paragraph in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            self.call("body-text", &[typst_str(paragraph)]);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

fn render_module(doc: &mut TypstDoc, number: usize, module: &Module) {
    doc.heading(1, &format!("Chapter {}: {}", number, module.name));
    doc.spacer("0.2in");

    if !is_blank(&module.overview) {
        doc.paragraphs(&module.overview);
        doc.spacer("0.2in");
    }

    match module.body() {
        ModuleBody::Hierarchical(submodules) => {
            for (sm_idx, submodule) in submodules.iter().enumerate() {
                render_submodule(doc, number, sm_idx + 1, submodule);
            }
        }
        ModuleBody::Flat(sections) => {
            for (idx, section) in sections.iter().enumerate() {
                render_section(doc, number, idx + 1, section);
            }
        }
        ModuleBody::Empty => {}
    }
}

fn render_submodule(doc: &mut TypstDoc, module: usize, number: usize, submodule: &Submodule) {
    doc.heading(2, &format!("{}.{} {}", module, number, submodule.name));

    for (ssm_idx, sub_sub) in submodule.sub_submodules.iter().enumerate() {
        doc.heading(
            3,
            &format!("{}.{}.{} {}", module, number, ssm_idx + 1, sub_sub.name),
        );
        doc.spacer("0.1in");
        render_content(doc, &sub_sub.content);
        doc.spacer("0.25in");
    }
}

fn render_content(doc: &mut TypstDoc, content: &Content) {
    if !is_blank(&content.theory) {
        doc.paragraphs(&content.theory);
        doc.spacer("0.1in");
    }

    if let Some(table) = content.table_data.as_ref().filter(|t| t.is_renderable()) {
        let rows = normalized_rows(table);
        let rows_literal = format!(
            "({})",
            rows.into_iter()
                .map(|row| format!("{}, ", str_array(row)))
                .collect::<String>()
        );
        doc.call(
            "data-table",
            &[
                optional_str(Some(table.caption.as_str())),
                str_array(table.headers.iter().map(String::as_str)),
                rows_literal,
            ],
        );
    }

    for example in &content.code_examples {
        code_example(doc, example);
    }

    if !content.key_points.is_empty() {
        doc.call(
            "key-points",
            &[str_array(content.key_points.iter().map(String::as_str))],
        );
    }
}

fn code_example(doc: &mut TypstDoc, example: &CodeExample) {
    let title = if is_blank(&example.title) {
        "Example"
    } else {
        example.title.as_str()
    };
    doc.call(
        "code-example",
        &[
            typst_str(title),
            optional_str(Some(example.code.as_str())),
            optional_str(Some(example.explanation.as_str())),
        ],
    );
}

fn render_section(doc: &mut TypstDoc, module: usize, number: usize, section: &Section) {
    doc.heading(2, &format!("{}.{} {}", module, number, section.title));
    if !is_blank(&section.explanation) {
        doc.paragraphs(&section.explanation);
    }
    for example in &section.code_examples {
        code_example(doc, example);
    }
    doc.spacer("0.25in");
}

fn render_quiz(doc: &mut TypstDoc, quiz: &Quiz) {
    doc.heading(1, "📝 Comprehensive Quiz");
    doc.spacer("0.2in");

    if !is_blank(&quiz.instructions) {
        doc.paragraphs(&quiz.instructions);
        doc.spacer("0.3in");
    }

    for (idx, question) in quiz.questions.iter().enumerate() {
        doc.call(
            "quiz-question",
            &[typst_str(&format!("Q{}. {}", idx + 1, question.question))],
        );

        for (opt_idx, option) in question.options.iter().enumerate() {
            doc.call(
                "quiz-option",
                &[typst_str(&format!("{}. {}", option_letter(opt_idx), option))],
            );
        }

        let answer = match (question.answer_letter(), is_blank(&question.explanation)) {
            (Some(letter), false) => Some(format!("✓ Answer: {} - {}", letter, question.explanation)),
            (Some(letter), true) => Some(format!("✓ Answer: {}", letter)),
            (None, false) => Some(format!("💡 {}", question.explanation)),
            (None, true) => None,
        };
        if let Some(answer) = answer {
            doc.call("quiz-answer", &[typst_str(&answer)]);
        }

        doc.spacer("0.15in");
    }
}
