//! Routes for the Draw bounded context.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use secret_santa_draw::application::command_handlers;
use secret_santa_draw::application::query_handlers::{self, RevealView};
use secret_santa_draw::domain::assignment::Assignment;
use secret_santa_draw::domain::commands;
use secret_santa_share::ShareableState;
use secret_santa_share::link::{self, PersonLink};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct DrawRequest {
    /// Participants in their significant order.
    pub participants: Vec<String>,
    /// Groups whose members must not give to each other.
    #[serde(default)]
    pub exclusion_groups: Vec<Vec<String>>,
    /// Seed to replay; a fresh one is picked when absent.
    #[serde(default)]
    pub seed: Option<u32>,
}

/// Request body for POST /reveal.
#[derive(Debug, Deserialize)]
pub struct RevealRequest {
    /// Participants in their significant order.
    pub participants: Vec<String>,
    /// Groups whose members must not give to each other.
    #[serde(default)]
    pub exclusion_groups: Vec<Vec<String>>,
    /// Seed of the draw to replay.
    pub seed: u32,
    /// The giver whose receiver is revealed.
    pub person: String,
}

/// Response body for a completed draw.
#[derive(Debug, Serialize)]
pub struct DrawResponse {
    /// Seed that reproduces this draw.
    pub seed: u32,
    /// Giver → receiver pairs in placement order.
    pub assignments: Assignment,
    /// Link reopening the configuration with this draw's state.
    pub share_url: String,
    /// Like `share_url`, but runs the draw on open.
    pub autorun_url: String,
    /// Private reveal links, one per giver.
    pub individual_links: Vec<PersonLink>,
}

/// POST /
#[instrument(skip(state, request), fields(participants = request.participants.len()))]
async fn draw_assignments(
    State(state): State<AppState>,
    Json(request): Json<DrawRequest>,
) -> Result<Json<DrawResponse>, ApiError> {
    let command = commands::DrawAssignments {
        correlation_id: Uuid::new_v4(),
        participants: request.participants,
        exclusion_groups: request.exclusion_groups,
        seed: request.seed,
    };

    info!(correlation_id = %command.correlation_id, "handling draw_assignments command");

    let draw = command_handlers::handle_draw_assignments(&command, state.seed_source.as_ref())?;

    let shared = ShareableState {
        participants: command.participants,
        exclusion_groups: command.exclusion_groups,
        seed: Some(draw.seed),
        view: None,
    };
    let base = &state.public_base_url;
    let individual_links = link::individual_links(
        base,
        &shared,
        draw.assignment.pairs().iter().map(|p| p.giver.as_str()),
    );

    Ok(Json(DrawResponse {
        seed: draw.seed,
        share_url: link::share_url(base, &shared).to_string(),
        autorun_url: link::autorun_url(base, &shared).to_string(),
        individual_links,
        assignments: draw.assignment,
    }))
}

/// POST /reveal
#[instrument(skip(request), fields(seed = request.seed))]
async fn reveal_assignment(
    Json(request): Json<RevealRequest>,
) -> Result<Json<RevealView>, ApiError> {
    let query = commands::RevealAssignment {
        correlation_id: Uuid::new_v4(),
        participants: request.participants,
        exclusion_groups: request.exclusion_groups,
        seed: request.seed,
        person: request.person,
    };

    info!(correlation_id = %query.correlation_id, "handling reveal_assignment query");

    let view = query_handlers::reveal_assignment(&query)?;

    Ok(Json(view))
}

/// Returns the router for the draw context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(draw_assignments))
        .route("/reveal", post(reveal_assignment))
}
