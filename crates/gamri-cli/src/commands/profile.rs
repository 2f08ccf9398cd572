use gamri_core::stats::category_profile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProfileArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gamri profile`.
pub async fn handle(args: &ProfileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_category(&args.category)?;
    let cases = ctx.require_cases().await?;
    let profile = category_profile(&cases, &ctx.taxonomy, &args.category)?;
    output(&profile, flags.format)
}
