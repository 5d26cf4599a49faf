use clap::Subcommand;

/// Admin session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Log in as admin
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Log out
    Logout,
    /// Show whether an admin session is active
    Status,
}
