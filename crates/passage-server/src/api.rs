use std::sync::Arc;

use anyhow::bail;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::Method,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use passage_shared::constants::API_PREFIX;
use passage_shared::schema::{
    validate, InsertConsultation, InsertContact, InsertContribution, InsertFundraisingCampaign,
    InsertSchema,
};
use passage_shared::{ApiResponse, ValidationError};
use passage_store::{
    Consultation, Contact, Contribution, FundraisingCampaign, RecordId, Storage, TopContributor,
};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::request_log::{request_log_middleware, RequestLog};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: Arc<ServerConfig>,
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServerError>;

/// Build the full application: the JSON API under `/api`, plus the built
/// front-end when a static directory is configured.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let request_log = RequestLog {
        body_preview: state.config.log_body_preview,
    };
    let max_body_size = state.config.max_body_size;

    let router = Router::new().nest(API_PREFIX, api_routes(state.clone()));

    let router = match &state.config.static_dir {
        Some(dir) => {
            if !dir.is_dir() {
                bail!(
                    "Could not find the static build directory: {}",
                    dir.display()
                );
            }
            info!(path = %dir.display(), "Serving front-end assets");
            let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            router.fallback_service(spa)
        }
        None => router.fallback(unknown_route),
    };

    Ok(router
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(middleware::from_fn_with_state(
            request_log,
            request_log_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/consultations",
            get(list_consultations).post(create_consultation),
        )
        .route("/consultations/:id", get(get_consultation))
        .route("/contacts", get(list_contacts).post(create_contact))
        .route(
            "/fundraising-campaigns",
            get(list_campaigns).post(create_campaign),
        )
        .route("/fundraising-campaigns/:id", get(get_campaign))
        .route("/contributions", post(create_contribution))
        .route(
            "/contributions/campaign/:campaign_id",
            get(list_campaign_contributions),
        )
        .route("/contributors/top", get(top_contributors))
        .fallback(unknown_route)
        .with_state(state)
}

// ─── Request helpers ───

/// Decode and validate a JSON body against an insert schema.
///
/// An empty body is treated as `{}` so it reports the missing fields; a
/// body that is not JSON at all is a validation failure too.
fn parse_insert<T: InsertSchema>(body: &[u8], resource: &'static str) -> Result<T, ServerError> {
    let value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(body).map_err(|_| {
            ServerError::validation(resource, ValidationError::malformed("invalid JSON"))
        })?
    };
    validate(&value).map_err(|e| ServerError::validation(resource, e))
}

/// Path ids are not rejected when malformed: they simply match nothing.
fn parse_id(raw: &str) -> Option<RecordId> {
    raw.trim().parse().ok()
}

async fn unknown_route() -> ServerError {
    ServerError::UnknownRoute
}

async fn health_check() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("API is healthy"))
}

// ─── Consultations ───

async fn create_consultation(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Consultation> {
    let req: InsertConsultation = parse_insert(&body, "consultation")?;
    let created = state
        .storage
        .create_consultation(req)
        .await
        .map_err(ServerError::storage("create consultation"))?;

    info!(id = created.id, "Consultation request received");
    Ok(Json(ApiResponse::ok(created)))
}

async fn list_consultations(State(state): State<AppState>) -> ApiResult<Vec<Consultation>> {
    let all = state
        .storage
        .list_consultations()
        .await
        .map_err(ServerError::storage("fetch consultations"))?;
    Ok(Json(ApiResponse::ok(all)))
}

async fn get_consultation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Consultation> {
    let found = match parse_id(&id) {
        Some(id) => state
            .storage
            .get_consultation(id)
            .await
            .map_err(ServerError::storage("fetch consultation"))?,
        None => None,
    };
    found
        .map(|c| Json(ApiResponse::ok(c)))
        .ok_or(ServerError::NotFound("Consultation"))
}

// ─── Contacts ───

async fn create_contact(State(state): State<AppState>, body: Bytes) -> ApiResult<Contact> {
    let req: InsertContact = parse_insert(&body, "contact")?;
    let created = state
        .storage
        .create_contact(req)
        .await
        .map_err(ServerError::storage("create contact"))?;

    info!(id = created.id, "Contact message received");
    Ok(Json(ApiResponse::ok(created)))
}

async fn list_contacts(State(state): State<AppState>) -> ApiResult<Vec<Contact>> {
    let all = state
        .storage
        .list_contacts()
        .await
        .map_err(ServerError::storage("fetch contacts"))?;
    Ok(Json(ApiResponse::ok(all)))
}

// ─── Fundraising campaigns ───

async fn create_campaign(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<FundraisingCampaign> {
    let req: InsertFundraisingCampaign = parse_insert(&body, "campaign")?;
    let created = state
        .storage
        .create_campaign(req)
        .await
        .map_err(ServerError::storage("create campaign"))?;

    info!(id = created.id, name = %created.name, "Fundraising campaign created");
    Ok(Json(ApiResponse::ok(created)))
}

async fn list_campaigns(State(state): State<AppState>) -> ApiResult<Vec<FundraisingCampaign>> {
    let all = state
        .storage
        .list_campaigns()
        .await
        .map_err(ServerError::storage("fetch campaigns"))?;
    Ok(Json(ApiResponse::ok(all)))
}

async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<FundraisingCampaign> {
    let found = match parse_id(&id) {
        Some(id) => state
            .storage
            .get_campaign(id)
            .await
            .map_err(ServerError::storage("fetch campaign"))?,
        None => None,
    };
    found
        .map(|c| Json(ApiResponse::ok(c)))
        .ok_or(ServerError::NotFound("Campaign"))
}

// ─── Contributions ───

/// Responds with the stored contribution, not the credited campaign.
async fn create_contribution(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Contribution> {
    let req: InsertContribution = parse_insert(&body, "contribution")?;
    let created = state
        .storage
        .create_contribution(req)
        .await
        .map_err(ServerError::storage("create contribution"))?;

    info!(
        id = created.id,
        campaign_id = ?created.campaign_id,
        amount = created.amount,
        "Contribution received"
    );
    Ok(Json(ApiResponse::ok(created)))
}

async fn list_campaign_contributions(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
) -> ApiResult<Vec<Contribution>> {
    let contributions = match parse_id(&campaign_id) {
        Some(id) => state
            .storage
            .get_contributions_by_campaign(id)
            .await
            .map_err(ServerError::storage("fetch contributions"))?,
        None => Vec::new(),
    };
    Ok(Json(ApiResponse::ok(contributions)))
}

async fn top_contributors(State(state): State<AppState>) -> ApiResult<Vec<TopContributor>> {
    let top = state
        .storage
        .get_top_contributors()
        .await
        .map_err(ServerError::storage("fetch top contributors"))?;
    Ok(Json(ApiResponse::ok(top)))
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state)?;

    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
