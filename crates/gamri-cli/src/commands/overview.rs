use gamri_core::stats;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gamri overview`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cases = ctx.require_cases().await?;
    output(&stats::overview(&cases, &ctx.taxonomy), flags.format)
}
