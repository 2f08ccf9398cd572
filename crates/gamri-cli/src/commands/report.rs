use anyhow::bail;
use gamri_core::stats::cases_in_category;
use gamri_report::prompt::guide_prompt;
use gamri_report::{PromptBudget, PromptKind};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::generate::{self, Generation};
use crate::context::AppContext;

/// Handle `gamri report`.
pub async fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_category(&args.category)?;
    let cases = ctx.require_cases().await?;

    let selected = cases_in_category(&cases, &args.category);
    if selected.is_empty() {
        bail!("no cases in category '{}'", args.category);
    }

    let budget = PromptBudget::from(&ctx.config.generator);
    let prompt = guide_prompt(&args.category, &selected, budget);

    generate::run(
        Generation {
            kind: PromptKind::Guide,
            subject: &args.category,
            case_count: selected.len(),
            prompt,
            dry_run: args.dry_run,
        },
        ctx,
        flags,
    )
    .await
}
