//! Course domain: the generated book tree, the fixed topic list and the
//! checks applied to model output before it reaches the renderers.

pub mod models;
pub mod topics;
pub mod validation;

pub use models::{
    CodeExample, Content, Course, Difficulty, Exercise, Module, ModuleBody, ModuleStructure,
    Project, Question, Quiz, Section, SubSubmodule, Submodule, TableData, VisualElement,
};
pub use topics::{course_topics, TopicSpec};
pub use validation::{ValidationError, ValidationErrors};
