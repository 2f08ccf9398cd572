use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Headline figures: totals, top category, top violation, counts.
    Overview,
    /// Case counts per category.
    Categories,
    /// Case counts per decision year.
    Trend(TrendArgs),
    /// Keyword search across every case field.
    Search(SearchArgs),
    /// Full detail of one case by selection label.
    Show(ShowArgs),
    /// Deep dive into one category.
    Profile(ProfileArgs),
    /// AI training guide for one category.
    Report(ReportArgs),
    /// Ask a free-text question against a selected set of cases.
    Ask(AskArgs),
    /// Print the active taxonomy or its JSON schema.
    Taxonomy(TaxonomyArgs),
    /// Visit, action and AI log counts.
    Activity,
}

impl Commands {
    /// Name recorded in the action log.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Categories => "categories",
            Self::Trend(_) => "trend",
            Self::Search(_) => "search",
            Self::Show(_) => "show",
            Self::Profile(_) => "profile",
            Self::Report(_) => "report",
            Self::Ask(_) => "ask",
            Self::Taxonomy(_) => "taxonomy",
            Self::Activity => "activity",
        }
    }

    /// Detail recorded with the action, if any.
    #[must_use]
    pub fn action_detail(&self) -> Option<String> {
        match self {
            Self::Trend(args) => args.category.clone(),
            Self::Search(args) => match (&args.keyword, &args.category) {
                (Some(keyword), Some(category)) => Some(format!("{keyword} in {category}")),
                (Some(keyword), None) => Some(keyword.clone()),
                (None, category) => category.clone(),
            },
            Self::Show(args) => Some(args.label.clone()),
            Self::Profile(args) => Some(args.category.clone()),
            Self::Report(args) => Some(args.category.clone()),
            Self::Ask(args) => Some(args.question.clone()),
            Self::Overview | Self::Categories | Self::Taxonomy(_) | Self::Activity => None,
        }
    }

    /// Whether the command is recorded in the visit and action logs.
    #[must_use]
    pub const fn records_activity(&self) -> bool {
        !matches!(self, Self::Taxonomy(_))
    }
}

#[derive(Clone, Debug, Args)]
pub struct TrendArgs {
    /// Restrict to one category label.
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Literal, case-sensitive keyword. Omit to list every case.
    pub keyword: Option<String>,
    /// Restrict to one category label.
    #[arg(long)]
    pub category: Option<String>,
    /// Max results (overrides the global --limit).
    #[arg(long)]
    pub top: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Selection label, `[<category>] <company> - <account>`.
    pub label: String,
    /// Pick among the cases this keyword finds, as `search` does.
    #[arg(long)]
    pub keyword: Option<String>,
    /// Pick among the cases of one category label.
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    /// Category label.
    pub category: String,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Category label.
    pub category: String,
    /// Print the prompt without calling the model.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Question for the model.
    pub question: String,
    /// Only include cases containing this keyword.
    #[arg(long)]
    pub keyword: Option<String>,
    /// Only include cases in this category.
    #[arg(long)]
    pub category: Option<String>,
    /// Print the prompt without calling the model.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TaxonomyArgs {
    /// Print the JSON schema of the taxonomy file format instead.
    #[arg(long)]
    pub schema: bool,
}
