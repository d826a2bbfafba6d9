use axum::{
    extract::{Path, State as AxumState},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use craps_execution::{casino::DiceSource, Layer, LayerError, LeaderboardStore, SessionId};
use craps_types::casino::{LeaderboardEntry, LeaderboardError, SessionSnapshot, LEADERBOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

mod store;
pub use store::JsonLeaderboard;

/// Session layer with its dice and leaderboard chosen at startup.
pub type Table = Layer<Box<dyn DiceSource + Send>, Box<dyn LeaderboardStore + Send>>;

pub fn table(
    dice: impl DiceSource + Send + 'static,
    store: impl LeaderboardStore + Send + 'static,
) -> Table {
    Layer::new(Box::new(dice), Box::new(store))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Opened {
    pub id: SessionId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Wager {
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OddsPlaced {
    pub placed: bool,
    pub session: SessionSnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Finish {
    pub player_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Finished {
    pub entry: Option<LeaderboardEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// [LayerError] rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(LayerError);

impl From<LayerError> for ApiError {
    fn from(error: LayerError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LayerError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            LayerError::GameOver(_) => StatusCode::CONFLICT,
            LayerError::Leaderboard(
                LeaderboardError::EmptyName | LeaderboardError::NameTooLong { .. },
            ) => StatusCode::BAD_REQUEST,
            LayerError::Leaderboard(LeaderboardError::Storage(_)) | LayerError::Game(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            warn!("request failed: {}", self.0);
        }
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub struct Api {
    table: Arc<Table>,
}

impl Api {
    pub fn new(table: Arc<Table>) -> Self {
        Self { table }
    }

    pub fn router(&self) -> Router {
        // Configure CORS
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            .route("/sessions", post(open_session))
            .route("/sessions/:id", get(get_session).delete(close_session))
            .route("/sessions/:id/roll", post(roll))
            .route("/sessions/:id/bet", post(set_bet))
            .route("/sessions/:id/odds", post(place_odds))
            .route("/sessions/:id/reset", post(reset))
            .route("/sessions/:id/finish", post(finish))
            .route("/leaderboard", get(leaderboard))
            .layer(cors)
            .with_state(self.table.clone())
    }
}

async fn open_session(AxumState(table): AxumState<Arc<Table>>) -> impl IntoResponse {
    let id = table.open();
    (StatusCode::CREATED, Json(Opened { id }))
}

async fn get_session(
    AxumState(table): AxumState<Arc<Table>>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(table.snapshot(id)?))
}

async fn close_session(
    AxumState(table): AxumState<Arc<Table>>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    if table.close(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(LayerError::SessionNotFound(id).into())
    }
}

async fn roll(
    AxumState(table): AxumState<Arc<Table>>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(table.roll(id)?))
}

async fn set_bet(
    AxumState(table): AxumState<Arc<Table>>,
    Path(id): Path<SessionId>,
    Json(wager): Json<Wager>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(table.set_bet(id, wager.amount)?))
}

async fn place_odds(
    AxumState(table): AxumState<Arc<Table>>,
    Path(id): Path<SessionId>,
    Json(wager): Json<Wager>,
) -> Result<Json<OddsPlaced>, ApiError> {
    let (placed, session) = table.place_odds(id, wager.amount)?;
    Ok(Json(OddsPlaced { placed, session }))
}

async fn reset(
    AxumState(table): AxumState<Arc<Table>>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(table.reset(id)?))
}

async fn finish(
    AxumState(table): AxumState<Arc<Table>>,
    Path(id): Path<SessionId>,
    Json(request): Json<Finish>,
) -> Result<Json<Finished>, ApiError> {
    let entry = table.finish(id, &request.player_name)?;
    if entry.is_none() {
        info!(session = %id, "finished without a name, score not recorded");
    }
    Ok(Json(Finished { entry }))
}

async fn leaderboard(AxumState(table): AxumState<Arc<Table>>) -> Json<Vec<LeaderboardEntry>> {
    Json(table.leaderboard(LEADERBOARD_SIZE))
}
