//! One user turn of the conversational mode.
//!
//! The model may answer with tool calls instead of text. Each call is decoded,
//! answered with a `functionResponse`, and the model is asked again, until it
//! replies with text or the round limit is reached. The history passed in is
//! never mutated; the new turns come back in [`TurnOutcome::turns`].

use agro_core::conversation::{ConversationTurn, Part, ToolResult};
use agro_core::enums::{Role, SectionKind};
use serde::Serialize;
use serde_json::json;

use crate::client::{LanguageModel, ModelRequest};
use crate::error::GeminiError;
use crate::tools::{ToolInvocation, ToolRegistry};

#[derive(Debug, Clone, PartialEq)]
pub struct ConverseOptions {
    pub system_instruction: Option<String>,
    /// Model calls allowed after the first one, to answer tool calls.
    pub max_tool_rounds: usize,
    pub temperature: Option<f32>,
}

impl Default for ConverseOptions {
    fn default() -> Self {
        Self {
            system_instruction: None,
            max_tool_rounds: 4,
            temperature: None,
        }
    }
}

/// A tool call that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolFailure {
    pub tool: String,
    /// Section of the chart the call was meant to draw.
    pub section: Option<SectionKind>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnOutcome {
    /// Turns to append to the history, in order.
    pub turns: Vec<ConversationTurn>,
    /// Decoded tool calls, in the order the model made them.
    pub invocations: Vec<ToolInvocation>,
    pub tool_failures: Vec<ToolFailure>,
    /// Text of the last model turn, if it had any.
    pub text: Option<String>,
    /// Whether the loop stopped at the round limit with tool calls pending.
    pub hit_round_limit: bool,
}

/// Run one conversational turn over `history`, whose last turn is normally
/// the user's new message.
///
/// # Errors
///
/// Returns the first [`GeminiError`] from the model. Tool decoding failures
/// are not errors: they are answered to the model and listed in
/// [`TurnOutcome::tool_failures`].
pub async fn converse<M: LanguageModel>(
    model: &M,
    tools: &ToolRegistry,
    history: &[ConversationTurn],
    options: &ConverseOptions,
) -> Result<TurnOutcome, GeminiError> {
    let mut request = ModelRequest {
        system_instruction: options.system_instruction.clone(),
        history: history.to_vec(),
        tools: tools.declarations(),
        temperature: options.temperature,
    };
    let mut outcome = TurnOutcome::default();

    for round in 0..=options.max_tool_rounds {
        let reply = model.generate(&request).await?;
        let turn = reply.turn;
        outcome.text = turn.text();

        if !turn.has_tool_calls() {
            request.history.push(turn.clone());
            outcome.turns.push(turn);
            break;
        }

        let mut results = Vec::new();
        for call in turn.tool_calls() {
            let response = match tools.decode(call) {
                Ok(invocation) => {
                    tracing::debug!(tool = %call.name, "decoded tool call");
                    let ack = invocation.acknowledgement();
                    outcome.invocations.push(invocation);
                    ack
                }
                Err(error) => {
                    tracing::warn!(tool = %call.name, %error, "tool call rejected");
                    outcome.tool_failures.push(ToolFailure {
                        tool: call.name.clone(),
                        section: tools.section_for(&call.name),
                        message: error.to_string(),
                    });
                    json!({ "error": error.to_string() })
                }
            };
            results.push(Part::ToolResult(ToolResult {
                name: call.name.clone(),
                response,
            }));
        }
        let answer = ConversationTurn {
            role: Role::User,
            parts: results,
        };

        request.history.push(turn.clone());
        request.history.push(answer.clone());
        outcome.turns.push(turn);
        outcome.turns.push(answer);

        if round == options.max_tool_rounds {
            tracing::warn!(
                rounds = options.max_tool_rounds,
                "tool round limit reached, stopping"
            );
            outcome.hit_round_limit = true;
        }
    }

    Ok(outcome)
}
