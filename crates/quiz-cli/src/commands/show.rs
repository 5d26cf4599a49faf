use anyhow::Context;
use quiz_core::entities::Quiz;
use serde::Serialize;

use crate::cli::root_commands::ShowArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::list::describe_time_limit;
use crate::context::AppContext;
use crate::output::output;

/// A quiz as a player may see it before playing: no answer key.
#[derive(Debug, Serialize)]
struct QuizOutline {
    id: String,
    title: String,
    description: String,
    category: String,
    time_limit: String,
    questions: Vec<QuestionOutline>,
}

#[derive(Debug, Serialize)]
struct QuestionOutline {
    number: usize,
    text: String,
    options: Vec<String>,
}

impl From<&Quiz> for QuizOutline {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            category: quiz.category.clone(),
            time_limit: describe_time_limit(quiz.time_limit),
            questions: quiz
                .questions
                .iter()
                .enumerate()
                .map(|(idx, question)| QuestionOutline {
                    number: idx + 1,
                    text: question.text.clone(),
                    options: question
                        .options
                        .iter()
                        .zip('A'..='Z')
                        .map(|(option, letter)| format!("{letter}) {}", option.text))
                        .collect(),
                })
                .collect(),
        }
    }
}

pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let quiz = ctx
        .store
        .find(&args.quiz_id)
        .await
        .with_context(|| format!("failed to load quiz '{}'", args.quiz_id))?;
    let outline = QuizOutline::from(&quiz);

    if flags.format == OutputFormat::Table {
        println!("{} ({})", outline.title, outline.category);
        if !outline.description.is_empty() {
            println!("{}", outline.description);
        }
        println!("time limit: {}\n", outline.time_limit);
        output(&outline.questions, flags)
    } else {
        output(&outline, flags)
    }
}
