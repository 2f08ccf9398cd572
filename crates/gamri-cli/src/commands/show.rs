use gamri_core::search::{search, select};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gamri show`.
///
/// The label is looked up among the cases `--keyword`/`--category` find, so
/// a search hit stays reachable when another case shares its label.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(category) = &args.category {
        ctx.require_category(category)?;
    }
    let cases = ctx.require_cases().await?;
    let matches = search(&cases, args.keyword.as_deref(), args.category.as_deref());
    let case = select(matches, &args.label)?;
    output(case, flags.format)
}
