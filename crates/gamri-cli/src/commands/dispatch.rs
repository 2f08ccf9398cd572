use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Record the visit, then dispatch a parsed command to its handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if command.records_activity() {
        ctx.activity.record_visit().await;
        ctx.activity
            .record_action(command.action_name(), command.action_detail().as_deref())
            .await;
    }

    match command {
        Commands::Overview => commands::overview::handle(ctx, flags).await,
        Commands::Categories => commands::categories::handle(ctx, flags).await,
        Commands::Trend(args) => commands::trend::handle(&args, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Profile(args) => commands::profile::handle(&args, ctx, flags).await,
        Commands::Report(args) => commands::report::handle(&args, ctx, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args, ctx, flags).await,
        Commands::Taxonomy(args) => commands::taxonomy::handle(&args, ctx, flags),
        Commands::Activity => commands::activity::handle(ctx, flags).await,
    }
}
