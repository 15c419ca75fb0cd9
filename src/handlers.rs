use axum::{extract::State, http::StatusCode, response::Html, Form, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use crate::llm::error::ErrorKind;
use crate::state::AppState;
use crate::translate::interface::{TranslateRequest, TranslateResponse};
use crate::views::IndexPage;

type HtmlResult = Result<Html<String>, (StatusCode, String)>;

/// Direct bridge call; `messages` may be any JSON value and is type checked
/// by the bridge itself
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub model_name: String,
    #[serde(default)]
    pub messages: Value,
}

#[derive(Debug, Serialize)]
pub struct InvokeResponse {
    pub ok: bool,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

fn render_page(state: &AppState, response: &TranslateResponse) -> HtmlResult {
    let page = IndexPage {
        original: &response.original,
        translation: &response.translation,
        evaluation: &response.evaluation,
        language: &response.language,
        languages: &state.config.pipeline.languages,
    };

    state.views.render_index(&page).map(Html).map_err(|e| {
        error!("Failed to render page: {:#}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to render page".to_string(),
        )
    })
}

pub async fn index_get(State(state): State<AppState>) -> HtmlResult {
    let response = TranslateResponse {
        language: state.pipeline.resolve_language(None),
        ..TranslateResponse::default()
    };
    render_page(&state, &response)
}

pub async fn index_post(
    State(state): State<AppState>,
    Form(request): Form<TranslateRequest>,
) -> HtmlResult {
    let response = state.pipeline.run(&request).await;
    render_page(&state, &response)
}

pub async fn api_translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Json<TranslateResponse> {
    Json(state.pipeline.run(&request).await)
}

pub async fn api_invoke(
    State(state): State<AppState>,
    Json(request): Json<InvokeRequest>,
) -> Json<InvokeResponse> {
    let response = match state
        .bridge
        .invoke_value(&request.model_name, &request.messages)
        .await
    {
        Ok(result) => InvokeResponse {
            ok: true,
            result,
            kind: None,
        },
        Err(err) => InvokeResponse {
            ok: false,
            result: err.to_string(),
            kind: Some(err.kind()),
        },
    };
    Json(response)
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.bridge.provider(),
        "translate_model": state.pipeline.config().translate_model,
        "judge_model": state.pipeline.config().judge_model,
    }))
}
