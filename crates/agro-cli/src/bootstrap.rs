use anyhow::Context;

use agro_config::AgroConfig;

/// Load `.env`, then the layered configuration, and reject bad values early.
pub fn load_config() -> anyhow::Result<AgroConfig> {
    let config = AgroConfig::load_with_dotenv().context("failed to load configuration")?;
    config.validate()?;
    if !config.gemini.is_configured() {
        tracing::debug!("no Gemini API key configured; only offline commands will work");
    }
    Ok(config)
}
