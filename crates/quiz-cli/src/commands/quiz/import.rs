use std::path::Path;

use anyhow::Context;
use quiz_author::QuizDraft;
use quiz_core::contracts::QuizRepository;
use quiz_core::entities::Quiz;
use serde::{Deserialize, Serialize};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// A file holds either one quiz or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImportFile {
    Many(Vec<Quiz>),
    One(Box<Quiz>),
}

#[derive(Serialize)]
struct ImportResponse {
    imported: usize,
    ids: Vec<String>,
}

pub async fn handle(file: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let quizzes = parse_import(&content)
        .with_context(|| format!("{} is not a valid quiz file", file.display()))?;

    for quiz in &quizzes {
        ctx.store
            .save(quiz)
            .await
            .with_context(|| format!("failed to save quiz '{}'", quiz.id))?;
    }
    tracing::info!(count = quizzes.len(), "quizzes imported");

    output(
        &ImportResponse {
            imported: quizzes.len(),
            ids: quizzes.into_iter().map(|quiz| quiz.id).collect(),
        },
        flags,
    )
}

/// Parse and validate every quiz before anything is saved.
fn parse_import(content: &str) -> anyhow::Result<Vec<Quiz>> {
    let quizzes = match serde_json::from_str::<ImportFile>(content)? {
        ImportFile::Many(quizzes) => quizzes,
        ImportFile::One(quiz) => vec![*quiz],
    };
    anyhow::ensure!(!quizzes.is_empty(), "no quizzes in file");

    quizzes
        .into_iter()
        .map(|quiz| {
            let id = quiz.id.clone();
            QuizDraft::edit(quiz)
                .finish()
                .with_context(|| format!("quiz '{id}' breaks the authoring rules"))
        })
        .collect()
}
