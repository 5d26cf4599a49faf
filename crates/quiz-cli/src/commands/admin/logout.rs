use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    status: &'static str,
    was_logged_in: bool,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let was_logged_in = ctx.auth.is_admin();
    ctx.auth.logout()?;

    output(
        &LogoutResponse {
            status: "ok",
            was_logged_in,
        },
        flags,
    )
}
