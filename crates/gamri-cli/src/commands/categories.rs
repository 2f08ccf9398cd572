use gamri_core::stats::category_counts;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gamri categories`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cases = ctx.require_cases().await?;
    output(&category_counts(&cases, &ctx.taxonomy), flags.format)
}
