use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gamri activity`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.activity.is_enabled() {
        tracing::warn!("activity log is disabled; counts are empty");
    }
    let summary = ctx.activity.summary().await?;
    output(&summary, flags.format)
}
