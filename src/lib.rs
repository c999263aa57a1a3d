//! Generates a beginner Python & data-for-AI course book with a language
//! model and renders it as plain text, JSON and a Typst-compiled PDF.

use anyhow::Context;
use env_logger::Env;

pub mod assembler;
pub mod config;
pub mod course;
pub mod llm;
pub mod output;
pub mod parser;
pub mod prompts;
pub mod quiz;
pub mod render;

pub use crate::assembler::CourseAssembler;
pub use crate::config::{BookConfig, ConfigError};
pub use crate::course::{course_topics, Course};
pub use crate::llm::{ModelClient, ModelError};
pub use crate::quiz::QuizGenerator;

use crate::llm::openai::OpenAiClient;
use crate::output::{
    load_course_json, ArtifactError, ArtifactMetadata, ArtifactWriter, BOOK_BASENAME,
    CURRICULUM_BASENAME,
};
use crate::render::{format_generated_date, render_course_text, BookTypesetter, TypstRenderEngine};

/// Runs every module through the assembler, then the quiz pass.
pub async fn generate_course<C: ModelClient + ?Sized>(client: &C) -> Course {
    let mut course = CourseAssembler::new(client, course_topics())
        .build_course()
        .await;

    log::info!("📝 Generating comprehensive quiz...");
    let quiz = QuizGenerator::new(client).generate(&course).await;
    course.comprehensive_quiz = Some(quiz);

    course
}

/// Writes the text book and the JSON tree.
pub fn write_documents(
    writer: &ArtifactWriter,
    course: &Course,
) -> Result<Vec<ArtifactMetadata>, ArtifactError> {
    let text = writer.write_text(CURRICULUM_BASENAME, &render_course_text(course))?;
    log::info!("📄 Text book: {}", text);

    let json = writer.write_json(CURRICULUM_BASENAME, course)?;
    log::info!("🗂️ JSON: {}", json);

    Ok(vec![text, json])
}

/// Typesets and compiles the PDF book, then writes it.
pub fn write_book_pdf(
    writer: &ArtifactWriter,
    engine: &TypstRenderEngine,
    course: &Course,
) -> anyhow::Result<ArtifactMetadata> {
    let source = BookTypesetter::new(format_generated_date()).render(course);
    log::debug!("Typst source: {} bytes", source.len());

    let document = engine
        .render(&source, BOOK_BASENAME)
        .context("failed to compile the PDF book")?;
    let pdf = writer
        .write_pdf(&document)
        .context("failed to save the PDF book")?;

    log::info!("📕 PDF book: {}", pdf);
    Ok(pdf)
}

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = BookConfig::from_env().context("invalid configuration")?;
    let writer = ArtifactWriter::new(config.output_dir.clone());
    let engine = TypstRenderEngine::new(config.typst_bin.clone());

    let course = match config.render_from.as_deref() {
        Some(path) => {
            log::info!("♻️ Re-rendering saved course from {}", path.display());
            load_course_json(path).context("failed to load saved course")?
        }
        None => {
            if config.openai.api_key.is_none() {
                log::warn!("OPENAI_API_KEY not set, every section will fall back to defaults");
            }
            log::info!("🚀 Generating course with {}", config.openai.model);
            let client = OpenAiClient::new(config.openai.clone())
                .context("failed to build the model client")?;
            generate_course(&client).await
        }
    };

    let mut artifacts =
        write_documents(&writer, &course).context("failed to write course documents")?;
    artifacts.push(write_book_pdf(&writer, &engine, &course)?);

    log::info!(
        "✨ Done: {} modules, {} artifacts in {}",
        course.modules.len(),
        artifacts.len(),
        writer.dir().display()
    );
    Ok(())
}
