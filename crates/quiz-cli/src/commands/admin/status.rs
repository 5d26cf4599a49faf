use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AdminStatusResponse {
    admin: bool,
    username: Option<String>,
    logged_in_at: Option<String>,
    session_file: String,
    project_root: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.auth.current();

    output(
        &AdminStatusResponse {
            admin: session.is_some(),
            username: session.as_ref().map(|s| s.username.clone()),
            logged_in_at: session.as_ref().map(|s| s.logged_in_at.to_rfc3339()),
            session_file: ctx.auth.session_file().display().to_string(),
            project_root: ctx.project_root.display().to_string(),
        },
        flags,
    )
}
