use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Play(args) => commands::play::handle(&args, ctx, flags).await,
        Commands::Results => commands::results::handle(ctx, flags).await,
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags),
        Commands::Quiz { action } => commands::quiz::handle(&action, ctx, flags).await,
    }
}
