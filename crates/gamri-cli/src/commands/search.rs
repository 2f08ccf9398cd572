use gamri_core::responses::{CaseSummary, SearchResponse};
use gamri_core::search::search;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gamri search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(category) = &args.category {
        ctx.require_category(category)?;
    }
    let cases = ctx.require_cases().await?;

    let matches = search(&cases, args.keyword.as_deref(), args.category.as_deref());
    let limit = effective_limit(args.top, flags.limit, ctx.config.general.default_limit);

    let response = SearchResponse {
        keyword: args.keyword.clone(),
        category: args.category.clone(),
        total_results: matches.len(),
        results: matches
            .into_iter()
            .take(limit as usize)
            .map(CaseSummary::from)
            .collect(),
    };
    output(&response, flags.format)
}
