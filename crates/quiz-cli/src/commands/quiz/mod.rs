mod delete;
mod generate;
mod import;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuizCommands;
use crate::context::AppContext;

/// Handle `quizctl quiz` subcommands. Every one of them needs an admin session.
pub async fn handle(action: &QuizCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let admin = ctx.auth.require_admin()?;
    tracing::debug!(admin = %admin.username, "catalog change authorized");

    match action {
        QuizCommands::Import { file } => import::handle(file, ctx, flags).await,
        QuizCommands::Delete { id } => delete::handle(id, ctx, flags).await,
        QuizCommands::Generate { topic, save } => generate::handle(topic, *save, ctx, flags).await,
    }
}
