//! Course assembler: drives prompt building, model calls and parsing for
//! every topic, strictly one request at a time.

use crate::course::topics::{COURSE_AUDIENCE, COURSE_LEVEL, COURSE_OUTCOME, COURSE_TITLE};
use crate::course::validation::{validate_structure, ValidationErrors};
use crate::course::{Content, Course, Module, ModuleStructure, TopicSpec};
use crate::llm::{CompletionRequest, ModelClient, PromptKind};
use crate::parser::resolve;
use crate::prompts;

const STRUCTURE_TEMPERATURE: f32 = 0.5;
const CONTENT_TEMPERATURE: f32 = 0.4;
const CONTENT_MAX_TOKENS: u32 = 2000;
const METADATA_TEMPERATURE: f32 = 0.4;

pub struct CourseAssembler<'a, C: ModelClient + ?Sized> {
    client: &'a C,
    topics: Vec<TopicSpec>,
}

impl<'a, C: ModelClient + ?Sized> CourseAssembler<'a, C> {
    pub fn new(client: &'a C, topics: Vec<TopicSpec>) -> Self {
        Self { client, topics }
    }

    /// Generate every module in topic order. Never fails: broken sections
    /// come back empty.
    pub async fn build_course(&self) -> Course {
        let total = self.topics.len();
        let mut modules = Vec::with_capacity(total);

        for (i, topic) in self.topics.iter().enumerate() {
            modules.push(self.build_module(topic, i + 1, total).await);
        }

        Course {
            title: COURSE_TITLE.to_string(),
            audience: COURSE_AUDIENCE.to_string(),
            level: COURSE_LEVEL.to_string(),
            outcome: COURSE_OUTCOME.to_string(),
            modules,
            comprehensive_quiz: None,
        }
    }

    pub async fn build_module(&self, topic: &TopicSpec, index: usize, total: usize) -> Module {
        log::info!("📚 Module {}/{}: {}", index, total, topic.name);

        let mut structure = self.generate_structure(topic).await;

        let total_sub_subs = structure.sub_submodule_count();
        let mut current = 0;
        for submodule in structure.submodules.iter_mut() {
            for sub_sub in submodule.sub_submodules.iter_mut() {
                current += 1;
                log::info!("   [{}/{}] {}", current, total_sub_subs, sub_sub.name);
                sub_sub.content = self
                    .generate_content(topic.name, &submodule.name, &sub_sub.name, &sub_sub.description)
                    .await;
            }
        }

        let mut module = self.generate_metadata(topic, &structure).await;
        module.hierarchical_structure = structure;
        module
    }

    async fn generate_structure(&self, topic: &TopicSpec) -> ModuleStructure {
        let request = CompletionRequest::new(PromptKind::Structure, prompts::structure_prompt(topic))
            .json()
            .temperature(STRUCTURE_TEMPERATURE);

        let structure = resolve(
            self.client.submit(request).await,
            ModuleStructure::default(),
            "Structure",
        )
        .into_inner();

        let mut problems = ValidationErrors::new();
        validate_structure(&structure, &mut problems);
        problems.log_warnings(topic.name);

        structure
    }

    async fn generate_content(
        &self,
        module: &str,
        submodule: &str,
        sub_submodule: &str,
        description: &str,
    ) -> Content {
        let prompt = prompts::content_prompt(module, submodule, sub_submodule, description);
        let request = CompletionRequest::new(PromptKind::Content, prompt)
            .json()
            .temperature(CONTENT_TEMPERATURE)
            .max_tokens(CONTENT_MAX_TOKENS);

        resolve(self.client.submit(request).await, Content::default(), "Content").into_inner()
    }

    async fn generate_metadata(&self, topic: &TopicSpec, structure: &ModuleStructure) -> Module {
        let names: Vec<String> = structure.submodules.iter().map(|sm| sm.name.clone()).collect();
        let request = CompletionRequest::new(
            PromptKind::Metadata,
            prompts::metadata_prompt(topic, &names),
        )
        .function(prompts::module_function())
        .temperature(METADATA_TEMPERATURE);

        let mut module = resolve(
            self.client.submit(request).await,
            Module::named(topic.name),
            "Metadata",
        )
        .into_inner();

        if module.name.trim().is_empty() {
            module.name = topic.name.to_string();
        }
        module
    }
}
