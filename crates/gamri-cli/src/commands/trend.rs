use gamri_core::stats::{cases_in_category, year_counts};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TrendArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gamri trend`.
pub async fn handle(args: &TrendArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(category) = &args.category {
        ctx.require_category(category)?;
    }
    let cases = ctx.require_cases().await?;

    let counts = match &args.category {
        Some(category) => year_counts(cases_in_category(&cases, category)),
        None => year_counts(&cases),
    };
    output(&counts, flags.format)
}
