use gamri_core::taxonomy::Taxonomy;

use crate::cli::root_commands::TaxonomyArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gamri taxonomy`.
pub fn handle(args: &TaxonomyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.schema {
        let schema = schemars::schema_for!(Taxonomy);
        return output(&schema, flags.format);
    }

    match flags.format {
        // The TOML form can be saved as a taxonomy file and edited.
        OutputFormat::Table => {
            print!("{}", ctx.taxonomy.to_toml_string()?);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&ctx.taxonomy, flags.format),
    }
}
