mod login;
mod logout;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

/// Handle `quizctl admin` subcommands.
pub fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AdminCommands::Login { username, password } => login::handle(username, password, ctx, flags),
        AdminCommands::Logout => logout::handle(ctx, flags),
        AdminCommands::Status => status::handle(ctx, flags),
    }
}
