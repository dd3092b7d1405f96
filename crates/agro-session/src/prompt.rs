//! Prompt templates.
//!
//! Section labels and column names in the templates must stay byte-identical
//! to the section catalog, or the extractor will not find the tables.

use std::fmt::Write as _;

use agro_core::enums::{Language, SectionKind};
use agro_core::i18n::strings;
use serde::{Deserialize, Serialize};

use crate::dataset::ReferenceDataset;
use crate::error::SessionError;

/// The user's inputs for a one-shot plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub request: String,
    pub area_hectares: Option<f64>,
    pub location: Option<String>,
    pub harvest_months: Option<u32>,
    /// Language for the prose around the tables.
    #[serde(default)]
    pub language: Language,
}

impl PlanRequest {
    #[must_use]
    pub fn new(request: impl Into<String>) -> Self {
        Self {
            request: request.into(),
            ..Self::default()
        }
    }

    /// Check the inputs the model call cannot go without.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingApiKey`] or
    /// [`SessionError::MissingRequest`] with a message in the request's
    /// language.
    pub fn validate(&self, api_key_present: bool) -> Result<(), SessionError> {
        let ui = strings(self.language);
        if !api_key_present {
            return Err(SessionError::MissingApiKey(ui.error_api_key.to_string()));
        }
        if self.request.trim().is_empty() {
            return Err(SessionError::MissingRequest(ui.error_request.to_string()));
        }
        Ok(())
    }
}

const NOT_GIVEN: &str = "não informado";

/// The one-shot planning prompt.
#[must_use]
pub fn plan_prompt(plan: &PlanRequest, dataset: &ReferenceDataset) -> String {
    let mut out = String::new();
    out.push_str("**Instruções para o Modelo de Linguagem:**\n");
    out.push_str("Você é um assistente de IA especializado em agrofloresta amazônica.\n\n");
    out.push_str("**Tarefa:**\n");
    out.push_str(
        "Com base nos dados fornecidos e na solicitação do usuário, crie um cronograma de \
         cultivo detalhado e sugira parcerias entre plantas.\n\n",
    );
    out.push_str("**Formato de Saída OBRIGATÓRIO (use CSV):**\n");
    out.push_str("1.  **Parcerias Recomendadas:** Uma breve análise das parcerias de plantas.\n");
    for (i, section) in SectionKind::ALL.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}.  **{}:** Um bloco de código CSV com as colunas: {}.",
            i + 2,
            section.label(),
            column_list(*section)
        );
    }
    out.push_str(
        "\nUse datas no formato AAAA-MM-DD e apenas números nas colunas numéricas.\n",
    );
    if plan.language != Language::Pt {
        let _ = writeln!(
            out,
            "Escreva o texto explicativo em {}, mantendo os títulos das seções e os nomes das \
             colunas exatamente como acima.",
            plan.language.display_name()
        );
    }

    out.push_str("\n**Dados Adicionais:**\n");
    let area = plan
        .area_hectares
        .map_or_else(|| NOT_GIVEN.to_string(), |a| format!("{a} hectares"));
    let location = plan
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(NOT_GIVEN);
    let harvest = plan
        .harvest_months
        .map_or_else(|| NOT_GIVEN.to_string(), |m| format!("{m} meses"));
    let _ = writeln!(out, "*   Tamanho da área: {area}");
    let _ = writeln!(out, "*   Localização: {location}");
    let _ = writeln!(out, "*   Tempo esperado de colheita: {harvest}");

    out.push_str("\n**Conjunto de Dados:**\n```\n");
    out.push_str(dataset.as_prompt_text());
    out.push_str("\n```\n\n**Solicitação do Usuário:**\n```\n");
    out.push_str(plan.request.trim());
    out.push_str("\n```\n");
    out
}

/// System instruction for the conversational mode.
#[must_use]
pub fn chat_instruction(language: Language, dataset: &ReferenceDataset) -> String {
    let mut out = String::new();
    out.push_str(
        "Você é um assistente especializado em agrofloresta amazônica. Ajude o usuário a \
         planejar uma agrofloresta: parcerias entre plantas, cronograma, desenvolvimento, \
         rendimento, produção e regeneração do solo.\n\n",
    );
    out.push_str("Ferramentas disponíveis:\n");
    out.push_str("- create_gantt_chart: cronograma de cultivo (atividade, planta, início e fim em AAAA-MM-DD).\n");
    out.push_str("- create_development_chart: estágios de desenvolvimento com duração em dias.\n");
    out.push_str("- create_yield_chart: probabilidade de rendimento (0 a 100) e fatores por planta.\n");
    out.push_str("- create_production_chart: produção prevista em kg por hectare.\n");
    out.push_str("- create_soil_chart: indicadores do solo com valor inicial e final.\n");
    out.push_str("- create_task_checklist: lista de tarefas de implementação para o usuário acompanhar.\n\n");
    out.push_str(
        "Use as ferramentas sempre que apresentar dados tabulares; não repita as tabelas no texto.\n",
    );
    let _ = writeln!(out, "Responda sempre em {}.", language.display_name());
    out.push_str("\n**Conjunto de Dados:**\n```\n");
    out.push_str(dataset.as_prompt_text());
    out.push_str("\n```\n");
    out
}

fn column_list(section: SectionKind) -> String {
    section
        .required_fields()
        .iter()
        .map(|field| format!("`{field}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
