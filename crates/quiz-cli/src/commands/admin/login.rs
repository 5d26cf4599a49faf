use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    status: &'static str,
    username: String,
    logged_in_at: String,
}

pub fn handle(
    username: &str,
    password: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx
        .auth
        .login(username, password)
        .context("admin login failed")?;

    output(
        &LoginResponse {
            status: "ok",
            username: session.username,
            logged_in_at: session.logged_in_at.to_rfc3339(),
        },
        flags,
    )
}
