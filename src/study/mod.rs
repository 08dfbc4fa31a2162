// src/study/mod.rs
pub mod loader;
pub mod models;

#[allow(unused_imports)]
pub use models::{Attribute, AttributeScores, Dep, Pos, Section, StudyDocument, Token};
