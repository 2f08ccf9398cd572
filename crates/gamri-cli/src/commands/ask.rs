use anyhow::bail;
use gamri_core::search::search;
use gamri_report::prompt::question_prompt;
use gamri_report::{PromptBudget, PromptKind};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::commands::shared::generate::{self, Generation};
use crate::context::AppContext;

/// Handle `gamri ask`.
pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.question.trim().is_empty() {
        bail!("question must not be empty");
    }
    if let Some(category) = &args.category {
        ctx.require_category(category)?;
    }
    let cases = ctx.require_cases().await?;

    let selected = search(&cases, args.keyword.as_deref(), args.category.as_deref());
    if selected.is_empty() {
        bail!("no cases match the selection");
    }

    let budget = PromptBudget::from(&ctx.config.generator);
    let prompt = question_prompt(&args.question, &selected, budget);

    generate::run(
        Generation {
            kind: PromptKind::Question,
            subject: &args.question,
            case_count: selected.len(),
            prompt,
            dry_run: args.dry_run,
        },
        ctx,
        flags,
    )
    .await
}
