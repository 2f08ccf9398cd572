//! Shared tail of `gamri report` and `gamri ask`: call the model, log the
//! exchange, print the result.

use anyhow::Context;
use gamri_db::AiExchange;
use gamri_report::{GeminiClient, PromptKind, Report, ReportGenerator, generate_report};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// A built prompt waiting to be sent.
pub struct Generation<'a> {
    pub kind: PromptKind,
    pub subject: &'a str,
    pub case_count: usize,
    pub prompt: String,
    pub dry_run: bool,
}

pub async fn run(
    generation: Generation<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Generation {
        kind,
        subject,
        case_count,
        prompt,
        dry_run,
    } = generation;

    if dry_run {
        return print_report(&Report::dry_run(kind, subject, case_count, prompt), flags);
    }

    let client = GeminiClient::new(ctx.config.generator.clone())
        .context("cannot generate without a configured model")?;

    let progress = Progress::spinner(&format!(
        "{} is analyzing {case_count} cases...",
        client.model_name()
    ));
    let result = generate_report(&client, kind, subject, case_count, prompt.clone()).await;

    ctx.activity
        .record_ai(&AiExchange {
            kind: kind.as_str(),
            subject: Some(subject),
            prompt: &prompt,
            response: result.as_ref().ok().and_then(|report| report.text.as_deref()),
        })
        .await;

    match result {
        Ok(report) => {
            progress.finish_clear();
            print_report(&report, flags)
        }
        Err(error) => {
            progress.finish_err("generation failed");
            Err(error).context("report generation failed")
        }
    }
}

/// Tables make no sense for prose; the table format prints the text itself.
fn print_report(report: &Report, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            println!("{}", report.text.as_deref().unwrap_or(&report.prompt));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(report, flags.format),
    }
}
