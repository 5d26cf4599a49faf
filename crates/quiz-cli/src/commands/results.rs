use quiz_core::entities::QuizResult;
use quiz_session::{Grade, Score};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ResultRow {
    date: String,
    quiz: String,
    score: String,
    percentage: String,
    grade: Grade,
}

impl From<&QuizResult> for ResultRow {
    fn from(result: &QuizResult) -> Self {
        let score = Score {
            score: result.score,
            total: result.total,
        };
        Self {
            date: result.date.format("%Y-%m-%d %H:%M").to_string(),
            quiz: result.quiz_title.clone(),
            score: format!("{}/{}", result.score, result.total),
            percentage: format!("{}%", score.percentage()),
            grade: score.grade(),
        }
    }
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let results = ctx.results.recent().await;
    if flags.format == OutputFormat::Table {
        let rows: Vec<ResultRow> = results.iter().map(ResultRow::from).collect();
        output(&rows, flags)
    } else {
        output(&results, flags)
    }
}
