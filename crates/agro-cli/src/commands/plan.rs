use agro_chart::visualize_response;
use agro_core::i18n::strings;
use agro_session::{PlanRequest, plan_prompt};
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PlanArgs;
use crate::context::AppContext;
use crate::output::report::print_report;
use crate::progress::Progress;

/// Handle `agro plan`.
pub async fn handle(args: &PlanArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let plan = plan_request(args, ctx);
    plan.validate(ctx.config.gemini.is_configured())?;
    let options = ctx.parse_options(&args.extraction)?;

    let dataset = ctx.dataset(args.dataset.as_deref())?;
    let prompt = plan_prompt(&plan, &dataset);
    let client = ctx.client(args.model.as_deref())?;
    tracing::debug!(model = client.model(), prompt_chars = prompt.len(), "requesting plan");

    let texts = strings(ctx.language);
    let spinner = Progress::spinner(texts.generate_schedule);
    let text = match client.generate_text(&prompt).await {
        Ok(text) => {
            spinner.finish_clear();
            text
        }
        Err(error) => {
            spinner.finish_err(&error.to_string());
            return Err(error).context("plan request failed");
        }
    };

    if let Some(path) = &args.save_response {
        std::fs::write(path, &text)
            .with_context(|| format!("failed to write response to {}", path.display()))?;
    }

    let report = visualize_response(&text, &options, ctx.language);
    print_report(Some(&text), &report, ctx.language, flags.format)
}

fn plan_request(args: &PlanArgs, ctx: &AppContext) -> PlanRequest {
    PlanRequest {
        request: args.request.clone().unwrap_or_default(),
        area_hectares: args.area,
        location: args.location.clone(),
        harvest_months: args.harvest_months,
        language: ctx.language,
    }
}
