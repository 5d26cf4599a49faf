use anyhow::Context;
use quiz_core::contracts::QuizRepository;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse {
    id: String,
    deleted: bool,
}

pub async fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let existed = ctx.store.list().await?.iter().any(|quiz| quiz.id == id);
    ctx.store
        .delete(id)
        .await
        .with_context(|| format!("failed to delete quiz '{id}'"))?;

    output(
        &DeleteResponse {
            id: id.to_string(),
            deleted: existed,
        },
        flags,
    )
}
