//! Routes for the Share bounded context.

use axum::extract::{RawQuery, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use secret_santa_draw::application::command_handlers::{self, Draw};
use secret_santa_draw::application::query_handlers::{self, RevealView};
use secret_santa_draw::domain::commands;
use secret_santa_share::link::{self, LinkRequest, PersonLink};
use secret_santa_share::{ShareableState, token};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct LinksRequest {
    /// Participants in their significant order.
    pub participants: Vec<String>,
    /// Groups whose members must not give to each other.
    #[serde(default)]
    pub exclusion_groups: Vec<Vec<String>>,
    /// Seed of the draw, if one has been made.
    #[serde(default)]
    pub seed: Option<u32>,
}

/// Request body for POST /decode.
#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    /// A token taken from a link's `state` parameter.
    pub token: String,
}

/// Shareable state as returned to clients.
#[derive(Debug, Serialize)]
pub struct StateView {
    /// Participants in their significant order.
    pub participants: Vec<String>,
    /// Groups whose members must not give to each other.
    pub exclusion_groups: Vec<Vec<String>>,
    /// Seed of the draw, if any.
    pub seed: Option<u32>,
    /// The person a reveal link was made for, if any.
    pub view: Option<String>,
}

impl From<ShareableState> for StateView {
    fn from(state: ShareableState) -> Self {
        Self {
            participants: state.participants,
            exclusion_groups: state.exclusion_groups,
            seed: state.seed,
            view: state.view,
        }
    }
}

/// Response body for POST /.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    /// The bundled state token.
    pub token: String,
    /// Link reopening the configuration.
    pub share_url: String,
    /// Like `share_url`, but runs the draw on open.
    pub autorun_url: String,
    /// The same state in the legacy multi-parameter form.
    pub legacy_url: String,
    /// Private reveal links in participant order; empty without a seed.
    pub individual_links: Vec<PersonLink>,
}

/// What a shared link resolves to.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResolveResponse {
    /// The configuration view.
    Configure {
        /// The decoded state; empty if the link could not be decoded.
        state: StateView,
        /// Whether the link asked for an immediate draw.
        autorun: bool,
        /// The draw, when `autorun` was honoured.
        draw: Option<Draw>,
        /// Why the link was ignored, if it could not be decoded.
        decode_error: Option<String>,
    },
    /// One person's private reveal.
    Reveal(RevealView),
}

/// POST /
#[instrument(skip(state, request), fields(participants = request.participants.len()))]
async fn build_links(
    State(state): State<AppState>,
    Json(request): Json<LinksRequest>,
) -> Json<LinksResponse> {
    let shared = ShareableState {
        participants: request.participants,
        exclusion_groups: request.exclusion_groups,
        seed: request.seed,
        view: None,
    };
    let base = &state.public_base_url;

    let individual_links = if shared.seed.is_some() {
        link::individual_links(base, &shared, shared.participants.iter().map(String::as_str))
    } else {
        Vec::new()
    };

    Json(LinksResponse {
        token: token::encode(&shared),
        share_url: link::share_url(base, &shared).to_string(),
        autorun_url: link::autorun_url(base, &shared).to_string(),
        legacy_url: link::legacy_url(base, &shared).to_string(),
        individual_links,
    })
}

/// POST /decode
#[instrument(skip(request))]
async fn decode_token(Json(request): Json<DecodeRequest>) -> Result<Json<StateView>, ApiError> {
    let shared = token::decode(&request.token)?;

    Ok(Json(shared.into()))
}

/// GET /resolve?<query of the shared link>
///
/// A link that cannot be decoded resolves to the empty configuration view
/// and never triggers a draw.
#[instrument(skip(state, query))]
async fn resolve_link(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ResolveResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    let (request, decode_error) = match LinkRequest::from_query(query.as_deref().unwrap_or("")) {
        Ok(request) => (request, None),
        Err(err) => {
            warn!(%correlation_id, error = %err, "shared link unreadable; using empty state");
            (LinkRequest::default(), Some(err.to_string()))
        }
    };

    match request {
        LinkRequest::Reveal {
            state: shared,
            person,
            seed,
        } => {
            let reveal = commands::RevealAssignment {
                correlation_id,
                participants: shared.participants,
                exclusion_groups: shared.exclusion_groups,
                seed,
                person,
            };
            info!(%correlation_id, "resolving reveal link");

            let view = query_handlers::reveal_assignment(&reveal)?;
            Ok(Json(ResolveResponse::Reveal(view)))
        }
        LinkRequest::Configure {
            state: shared,
            autorun,
        } => {
            let draw = if autorun {
                let command = commands::DrawAssignments {
                    correlation_id,
                    participants: shared.participants.clone(),
                    exclusion_groups: shared.exclusion_groups.clone(),
                    seed: shared.seed,
                };
                info!(%correlation_id, "auto-running draw from link");
                Some(command_handlers::handle_draw_assignments(
                    &command,
                    state.seed_source.as_ref(),
                )?)
            } else {
                None
            };

            Ok(Json(ResolveResponse::Configure {
                state: shared.into(),
                autorun,
                draw,
                decode_error,
            }))
        }
    }
}

/// Returns the router for the share context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(build_links))
        .route("/decode", post(decode_token))
        .route("/resolve", get(resolve_link))
}
