use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `agro config`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.config.redacted(), flags.format)
}
