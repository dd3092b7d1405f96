//! Translated user-facing strings.
//!
//! The planner ships Portuguese, Spanish and English copies of every label,
//! error and chart heading. Lookups are static; nothing here allocates.

use crate::enums::{Language, SectionKind};

/// Page-level strings.
#[derive(Debug)]
pub struct UiStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub api_key: &'static str,
    pub gemini_model: &'static str,
    pub area_size: &'static str,
    pub location: &'static str,
    pub harvest_time: &'static str,
    pub request: &'static str,
    pub generate_schedule: &'static str,
    pub schedule_title: &'static str,
    pub error_api_key: &'static str,
    pub error_request: &'static str,
    pub chart_title: &'static str,
    pub chart_warning: &'static str,
    pub chart_columns_warning: &'static str,
    pub chart_generation_warning: &'static str,
    pub greeting: &'static str,
    pub restarted: &'static str,
    pub checklist_title: &'static str,
    pub checklist_empty: &'static str,
    pub soil_initial: &'static str,
    pub soil_final: &'static str,
    pub soil_stage: &'static str,
    pub soil_value: &'static str,
}

/// Strings for one visualization section.
#[derive(Debug)]
pub struct SectionStrings {
    /// Subheader shown above the chart.
    pub heading: &'static str,
    /// Title embedded in the chart spec.
    pub chart_title: &'static str,
    /// Shown when the section is missing from the response.
    pub not_found: &'static str,
    /// Shown when the section lacks required columns.
    pub columns_warning: &'static str,
    /// Prefix for any other failure; the error text follows it.
    pub generation_warning: &'static str,
    /// Display names of the section's columns, in record field order.
    pub columns: &'static [&'static str],
}

#[must_use]
pub const fn strings(language: Language) -> &'static UiStrings {
    match language {
        Language::Pt => &PT,
        Language::Es => &ES,
        Language::En => &EN,
    }
}

#[must_use]
pub const fn section_strings(language: Language, section: SectionKind) -> &'static SectionStrings {
    let table = match language {
        Language::Pt => &PT_SECTIONS,
        Language::Es => &ES_SECTIONS,
        Language::En => &EN_SECTIONS,
    };
    match section {
        SectionKind::Schedule => &table[0],
        SectionKind::Development => &table[1],
        SectionKind::Yield => &table[2],
        SectionKind::Production => &table[3],
        SectionKind::Soil => &table[4],
    }
}

static PT: UiStrings = UiStrings {
    title: "BioAI: Agrofloresta Inteligente",
    description: "Esta ferramenta utiliza a IA do Google Gemini para gerar uma Agrofloresta específica para o bioma Amazônico",
    api_key: "Chave da API do Google Gemini",
    gemini_model: "Escolha o modelo Gemini",
    area_size: "Tamanho da área (em hectares)",
    location: "Localização (cidade/estado)",
    harvest_time: "Tempo esperado de colheita (em meses)",
    request: "Descreva sua solicitação",
    generate_schedule: "Gerar Cronograma",
    schedule_title: "Cronograma de Cultivo Gerado",
    error_api_key: "Por favor, insira sua chave de API do Google Gemini.",
    error_request: "Por favor, descreva sua solicitação.",
    chart_title: "Visualização do Cronograma",
    chart_warning: "Não foi possível encontrar uma tabela de cronograma na resposta.",
    chart_columns_warning: "A tabela de cronograma na resposta não tem as colunas esperadas.",
    chart_generation_warning: "Não foi possível gerar o gráfico a partir da resposta:",
    greeting: "Olá! Sou seu assistente de agrofloresta amazônica. Conte-me sobre sua área, localização e o que deseja cultivar.",
    restarted: "Conversa reiniciada.",
    checklist_title: "Lista de Tarefas de Implementação",
    checklist_empty: "Nenhuma tarefa ainda.",
    soil_initial: "Valor Inicial",
    soil_final: "Valor Final",
    soil_stage: "Estágio",
    soil_value: "Valor",
};

static ES: UiStrings = UiStrings {
    title: "BioAI: Agroforestería Inteligente",
    description: "Esta herramienta utiliza la IA de Google Gemini para generar una Agroforestería específica para el bioma Amazónico",
    api_key: "Clave de API de Google Gemini",
    gemini_model: "Elige el modelo Gemini",
    area_size: "Tamaño del área (en hectáreas)",
    location: "Ubicación (ciudad/estado)",
    harvest_time: "Tiempo de cosecha esperado (en meses)",
    request: "Describe tu solicitud",
    generate_schedule: "Generar Calendario",
    schedule_title: "Calendario de Cultivo Generado",
    error_api_key: "Por favor, introduce tu clave de API de Google Gemini.",
    error_request: "Por favor, describe tu solicitud.",
    chart_title: "Visualización del Calendario",
    chart_warning: "No se pudo encontrar una tabla de calendario en la respuesta.",
    chart_columns_warning: "La tabla de calendario en la respuesta no tiene las columnas esperadas.",
    chart_generation_warning: "No se pudo generar el gráfico a partir de la respuesta:",
    greeting: "¡Hola! Soy tu asistente de agroforestería amazónica. Cuéntame sobre tu área, ubicación y lo que deseas cultivar.",
    restarted: "Conversación reiniciada.",
    checklist_title: "Lista de Tareas de Implementación",
    checklist_empty: "Aún no hay tareas.",
    soil_initial: "Valor Inicial",
    soil_final: "Valor Final",
    soil_stage: "Etapa",
    soil_value: "Valor",
};

static EN: UiStrings = UiStrings {
    title: "BioAI: Smart Agroforestry",
    description: "This tool uses Google's Gemini AI to generate a specific Agroforestry for the Amazon biome",
    api_key: "Google Gemini API Key",
    gemini_model: "Choose the Gemini model",
    area_size: "Area size (in hectares)",
    location: "Location (city/state)",
    harvest_time: "Expected harvest time (in months)",
    request: "Describe your request",
    generate_schedule: "Generate Schedule",
    schedule_title: "Generated Cultivation Schedule",
    error_api_key: "Please enter your Google Gemini API key.",
    error_request: "Please describe your request.",
    chart_title: "Schedule Visualization",
    chart_warning: "Could not find a schedule table in the response.",
    chart_columns_warning: "The schedule table in the response does not have the expected columns.",
    chart_generation_warning: "Could not generate the chart from the response:",
    greeting: "Hello! I am your Amazon agroforestry assistant. Tell me about your area, location and what you want to grow.",
    restarted: "Conversation restarted.",
    checklist_title: "Implementation Checklist",
    checklist_empty: "No tasks yet.",
    soil_initial: "Initial Value",
    soil_final: "Final Value",
    soil_stage: "Stage",
    soil_value: "Value",
};

static PT_SECTIONS: [SectionStrings; 5] = [
    SectionStrings {
        heading: "Visualização do Cronograma",
        chart_title: "Cronograma de Cultivo Gerado",
        not_found: "Não foi possível encontrar uma tabela de cronograma na resposta.",
        columns_warning: "A tabela de cronograma na resposta não tem as colunas esperadas.",
        generation_warning: "Não foi possível gerar o gráfico a partir da resposta:",
        columns: &["Atividade", "Planta", "Início", "Fim"],
    },
    SectionStrings {
        heading: "Desenvolvimento dos Cultivos",
        chart_title: "Fases de Desenvolvimento dos Cultivos",
        not_found: "Não foi possível encontrar dados de desenvolvimento dos cultivos na resposta.",
        columns_warning: "A tabela de desenvolvimento dos cultivos não tem as colunas esperadas.",
        generation_warning: "Não foi possível gerar o gráfico de desenvolvimento:",
        columns: &["Planta", "Estágio", "Duração (dias)"],
    },
    SectionStrings {
        heading: "Probabilidade de Rendimento",
        chart_title: "Probabilidade de Rendimento por Cultura",
        not_found: "Não foi possível encontrar dados de probabilidade de rendimento na resposta.",
        columns_warning: "A tabela de probabilidade de rendimento não tem as colunas esperadas.",
        generation_warning: "Não foi possível gerar o gráfico de probabilidade de rendimento:",
        columns: &["Planta", "Probabilidade (%)", "Fatores"],
    },
    SectionStrings {
        heading: "Previsão de Produção",
        chart_title: "Previsão de Produção por Cultura",
        not_found: "Não foi possível encontrar dados de previsão de produção na resposta.",
        columns_warning: "A tabela de previsão de produção não tem as colunas esperadas.",
        generation_warning: "Não foi possível gerar o gráfico de previsão de produção:",
        columns: &["Planta", "Produção (kg/hectare)"],
    },
    SectionStrings {
        heading: "Regeneração do Solo",
        chart_title: "Previsão de Regeneração do Solo",
        not_found: "Não foi possível encontrar dados de regeneração do solo na resposta.",
        columns_warning: "A tabela de regeneração do solo não tem as colunas esperadas.",
        generation_warning: "Não foi possível gerar o gráfico de regeneração do solo:",
        columns: &["Indicador", "Valor Inicial", "Valor Final"],
    },
];

static ES_SECTIONS: [SectionStrings; 5] = [
    SectionStrings {
        heading: "Visualización del Calendario",
        chart_title: "Calendario de Cultivo Generado",
        not_found: "No se pudo encontrar una tabla de calendario en la respuesta.",
        columns_warning: "La tabla de calendario en la respuesta no tiene las columnas esperadas.",
        generation_warning: "No se pudo generar el gráfico a partir de la respuesta:",
        columns: &["Actividad", "Planta", "Inicio", "Fin"],
    },
    SectionStrings {
        heading: "Desarrollo de los Cultivos",
        chart_title: "Fases de Desarrollo de los Cultivos",
        not_found: "No se encontraron datos de desarrollo de los cultivos en la respuesta.",
        columns_warning: "La tabla de desarrollo de los cultivos no tiene las columnas esperadas.",
        generation_warning: "No se pudo generar el gráfico de desarrollo:",
        columns: &["Planta", "Etapa", "Duración (días)"],
    },
    SectionStrings {
        heading: "Probabilidad de Rendimiento",
        chart_title: "Probabilidad de Rendimiento por Cultivo",
        not_found: "No se encontraron datos de probabilidad de rendimiento en la respuesta.",
        columns_warning: "La tabla de probabilidad de rendimiento no tiene las columnas esperadas.",
        generation_warning: "No se pudo generar el gráfico de probabilidad de rendimiento:",
        columns: &["Planta", "Probabilidad (%)", "Factores"],
    },
    SectionStrings {
        heading: "Previsión de Producción",
        chart_title: "Previsión de Producción por Cultivo",
        not_found: "No se encontraron datos de previsión de producción en la respuesta.",
        columns_warning: "La tabla de previsión de producción no tiene las columnas esperadas.",
        generation_warning: "No se pudo generar el gráfico de previsión de producción:",
        columns: &["Planta", "Producción (kg/hectárea)"],
    },
    SectionStrings {
        heading: "Regeneración del Suelo",
        chart_title: "Previsión de Regeneración del Suelo",
        not_found: "No se encontraron datos de regeneración del suelo en la respuesta.",
        columns_warning: "La tabla de regeneración del suelo no tiene las columnas esperadas.",
        generation_warning: "No se pudo generar el gráfico de regeneración del suelo:",
        columns: &["Indicador", "Valor Inicial", "Valor Final"],
    },
];

static EN_SECTIONS: [SectionStrings; 5] = [
    SectionStrings {
        heading: "Schedule Visualization",
        chart_title: "Generated Cultivation Schedule",
        not_found: "Could not find a schedule table in the response.",
        columns_warning: "The schedule table in the response does not have the expected columns.",
        generation_warning: "Could not generate the chart from the response:",
        columns: &["Activity", "Plant", "Start", "End"],
    },
    SectionStrings {
        heading: "Crop Development",
        chart_title: "Crop Development Stages",
        not_found: "Could not find crop development data in the response.",
        columns_warning: "The crop development table does not have the expected columns.",
        generation_warning: "Could not generate the development chart:",
        columns: &["Plant", "Stage", "Duration (days)"],
    },
    SectionStrings {
        heading: "Yield Probability",
        chart_title: "Yield Probability by Crop",
        not_found: "Could not find yield probability data in the response.",
        columns_warning: "The yield probability table does not have the expected columns.",
        generation_warning: "Could not generate the yield probability chart:",
        columns: &["Plant", "Probability (%)", "Factors"],
    },
    SectionStrings {
        heading: "Production Forecast",
        chart_title: "Production Forecast by Crop",
        not_found: "Could not find production forecast data in the response.",
        columns_warning: "The production forecast table does not have the expected columns.",
        generation_warning: "Could not generate the production forecast chart:",
        columns: &["Plant", "Production (kg/hectare)"],
    },
    SectionStrings {
        heading: "Soil Regeneration",
        chart_title: "Soil Regeneration Forecast",
        not_found: "Could not find soil regeneration data in the response.",
        columns_warning: "The soil regeneration table does not have the expected columns.",
        generation_warning: "Could not generate the soil regeneration chart:",
        columns: &["Indicator", "Initial Value", "Final Value"],
    },
];
