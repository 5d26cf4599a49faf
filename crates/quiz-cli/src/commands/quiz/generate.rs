use std::sync::Arc;

use anyhow::Context;
use quiz_author::{GeminiGenerator, QuizGenerator};
use quiz_core::contracts::QuizRepository;
use quiz_core::ids::UuidIds;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{hint, output};

#[derive(Serialize)]
struct GenerateSummary {
    id: String,
    title: String,
    category: String,
    questions: usize,
    saved: bool,
}

pub async fn handle(
    topic: &str,
    save: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let generator = GeminiGenerator::new(&ctx.config.generator, Arc::new(UuidIds))
        .context("quiz generation is unavailable")?;
    let quiz = generator
        .generate(topic)
        .await
        .with_context(|| format!("failed to generate a quiz about '{topic}'"))?;

    if save {
        ctx.store
            .save(&quiz)
            .await
            .with_context(|| format!("failed to save generated quiz '{}'", quiz.id))?;
    } else {
        hint(flags, "Not saved. Re-run with --save, or import the JSON output.");
    }

    if flags.format == OutputFormat::Table {
        output(
            &GenerateSummary {
                id: quiz.id.clone(),
                title: quiz.title.clone(),
                category: quiz.category.clone(),
                questions: quiz.question_count(),
                saved: save,
            },
            flags,
        )
    } else {
        output(&quiz, flags)
    }
}
