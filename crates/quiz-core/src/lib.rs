//! # quiz-core
//!
//! Core types, ID generation, and error types for the quiz workspace.
//!
//! This crate provides the foundational types shared across all quiz crates:
//! - Entity structs for quizzes, questions, options, and results
//! - Session status enum with its transition table, integrity violation kinds
//! - Id generation behind an injectable trait
//! - Authoring validation rules
//! - Collaborator contracts (`QuizRepository`, `ResultSink`) that storage
//!   adapters implement and the session layer consumes
//! - Cross-cutting error types

pub mod contracts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod validation;
