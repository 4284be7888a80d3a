//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{InvalidStation, NetworkError, StationId, Weight};
use crate::stations::LookupError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network/adjacency", get(adjacency))
        .route("/network/incidence", get(incidence))
        .route("/network/edges", get(edge_list))
        .route("/network/successors", get(successors))
        .route("/network/degrees", get(degrees))
        .route("/routes/stops", get(route_by_stops))
        .route("/routes/distance", get(route_by_distance))
        .route("/stations", get(list_stations).post(create_station))
        .route("/stations/by-name", get(station_by_name))
        .route("/stations/by-prefix", get(stations_by_prefix))
        .route("/stations/:id", delete(delete_station))
        .route(
            "/connections",
            post(create_connection).delete(delete_connection),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Adjacency matrix as numbers and as a table.
async fn adjacency(State(state): State<AppState>) -> Result<Json<AdjacencyResponse>, AppError> {
    let system = state.system.read().await;
    let network = system.network();

    let report = network.adjacency_report()?;
    let matrix = network.adjacency()?.rows().map(<[Weight]>::to_vec).collect();

    Ok(Json(AdjacencyResponse {
        station_ids: network.mapping().ids().to_vec(),
        matrix,
        report,
    }))
}

/// Incidence matrix as numbers and as a table.
async fn incidence(State(state): State<AppState>) -> Result<Json<IncidenceResponse>, AppError> {
    let system = state.system.read().await;
    let network = system.network();

    let report = network.incidence_report()?;
    let matrix = network.incidence()?;
    let matrix = (0..matrix.rows()).map(|i| matrix.row(i).to_vec()).collect();

    Ok(Json(IncidenceResponse {
        station_ids: network.mapping().ids().to_vec(),
        connections: network
            .connections()
            .iter()
            .map(ConnectionResult::from)
            .collect(),
        matrix,
        report,
    }))
}

async fn edge_list(State(state): State<AppState>) -> Json<EdgeListResponse> {
    let system = state.system.read().await;
    let network = system.network();

    Json(EdgeListResponse {
        connections: network
            .connections()
            .iter()
            .map(ConnectionResult::from)
            .collect(),
        report: network.edge_list_report(),
    })
}

/// Positive-weight neighbours of every station.
async fn successors(
    State(state): State<AppState>,
) -> Result<Json<SuccessorListResponse>, AppError> {
    let system = state.system.read().await;
    let network = system.network();

    let report = network.successor_report()?;
    let adjacency = network.adjacency()?;
    let mapping = network.mapping();

    let successors = mapping
        .ids()
        .iter()
        .enumerate()
        .filter_map(|(i, &id)| {
            let station = network.station(id)?;
            let neighbors = adjacency
                .neighbors(i)
                .filter_map(|(j, weight)| {
                    let next = network.station(mapping.id_at(j)?)?;
                    Some(NeighborResult {
                        station: next.into(),
                        weight,
                    })
                })
                .collect();
            Some(SuccessorEntry {
                station: station.into(),
                neighbors,
            })
        })
        .collect();

    Ok(Json(SuccessorListResponse { successors, report }))
}

async fn degrees(State(state): State<AppState>) -> Result<Json<DegreesResponse>, AppError> {
    let system = state.system.read().await;
    let network = system.network();

    let report = network.degree_report()?;
    let degrees = network
        .degrees()?
        .into_iter()
        .map(|(station, degree)| DegreeEntry {
            station: station.into(),
            degree,
        })
        .collect();

    Ok(Json(DegreesResponse { degrees, report }))
}

/// Fewest-stops route (BFS).
async fn route_by_stops(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let system = state.system.read().await;
    let route = system
        .network()
        .bfs(StationId(req.from), StationId(req.to))?;
    Ok(Json(RouteResponse::from(&route)))
}

/// Least-weight route (Dijkstra).
async fn route_by_distance(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let system = state.system.read().await;
    let route = system
        .network()
        .dijkstra(StationId(req.from), StationId(req.to))?;
    Ok(Json(RouteResponse::from(&route)))
}

/// Every station in alphabetical order.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<StationListResponse>, AppError> {
    let system = state.system.read().await;
    let stations = system.alphabetical()?;
    Ok(Json(StationListResponse::new(
        stations,
        system.names().listing_report(),
    )))
}

/// Exact, case-sensitive name lookup.
async fn station_by_name(
    State(state): State<AppState>,
    Query(req): Query<NameQuery>,
) -> Result<Json<StationResult>, AppError> {
    let system = state.system.read().await;
    let station = system.find_by_name(&req.name)?;
    Ok(Json(station.into()))
}

/// Accent- and case-insensitive prefix lookup.
async fn stations_by_prefix(
    State(state): State<AppState>,
    Query(req): Query<PrefixQuery>,
) -> Result<Json<StationListResponse>, AppError> {
    let system = state.system.read().await;
    let found = system.find_by_prefix(&req.prefix)?;
    Ok(Json(StationListResponse::new(
        found,
        system.prefixes().search_report(&req.prefix),
    )))
}

async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<CreateStationRequest>,
) -> Result<(StatusCode, Json<StationResult>), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "name must not be blank".to_string(),
        });
    }

    let mut system = state.system.write().await;
    let station = system.add_station(&req.name)?;
    Ok((StatusCode::CREATED, Json((&station).into())))
}

/// Remove a station and every connection touching it.
async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<StationResult>, AppError> {
    let mut system = state.system.write().await;
    let station = system.remove_station(StationId(id))?;
    Ok(Json((&station).into()))
}

async fn create_connection(
    State(state): State<AppState>,
    Json(req): Json<CreateConnectionRequest>,
) -> Result<(StatusCode, Json<ConnectionResult>), AppError> {
    let mut system = state.system.write().await;
    let connection = system.add_connection(StationId(req.from), StationId(req.to), req.weight)?;
    Ok((StatusCode::CREATED, Json((&connection).into())))
}

/// Remove the first connection between two stations, in either direction.
async fn delete_connection(
    State(state): State<AppState>,
    Query(req): Query<ConnectionQuery>,
) -> Result<StatusCode, AppError> {
    let mut system = state.system.write().await;
    if system.remove_connection(StationId(req.from), StationId(req.to)) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            kind: "connection_not_found",
            message: format!("no connection between {} and {}", req.from, req.to),
        })
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
    },
    NotFound {
        kind: &'static str,
        message: String,
    },
    Network(NetworkError),
    Lookup(LookupError),
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::Network(e)
    }
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError::Lookup(e)
    }
}

impl From<InvalidStation> for AppError {
    fn from(e: InvalidStation) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Network(e) => match e {
                NetworkError::UnknownStation(_) | NetworkError::NoPathFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                NetworkError::UnknownEndpoint { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                NetworkError::EmptyGraph | NetworkError::NotYetGenerated(_) => {
                    StatusCode::CONFLICT
                }
            },
            AppError::Lookup(e) => match e {
                LookupError::BlankQuery { .. } => StatusCode::BAD_REQUEST,
                LookupError::NotFound { .. } | LookupError::NoPrefixMatch { .. } => {
                    StatusCode::NOT_FOUND
                }
                LookupError::EmptyIndex => StatusCode::CONFLICT,
            },
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "bad_request",
            AppError::NotFound { kind, .. } => *kind,
            AppError::Network(e) => e.kind(),
            AppError::Lookup(e) => e.kind(),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::BadRequest { message } | AppError::NotFound { message, .. } => {
                message.clone()
            }
            AppError::Network(e) => e.to_string(),
            AppError::Lookup(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let kind = self.kind();
        let message = self.message();

        warn!(%status, kind, %message, "Request failed");

        let body = Json(ErrorResponse {
            error: message,
            kind: kind.to_string(),
        });
        (status, body).into_response()
    }
}
