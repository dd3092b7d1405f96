use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

pub mod chat;
pub mod config;
pub mod dataset;
pub mod extract;
pub mod models;
pub mod plan;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Plan(args) => plan::handle(&args, ctx, flags).await,
        Commands::Extract(args) => extract::handle(&args, ctx, flags),
        Commands::Chat(args) => chat::handle(&args, ctx, flags).await,
        Commands::Dataset(args) => dataset::handle(&args, ctx, flags),
        Commands::Config => config::handle(ctx, flags),
        Commands::Models => models::handle(flags),
    }
}
