use crate::config::Config;
use crate::error::PlannerError;
use crate::geocoder::{GeocoderProvider, GoogleGeocoderProvider};
use crate::location_parser::{ChatCompletionService, OpenAI};
use crate::planner::{TravelPlanRequest, TravelPlanner};
use crate::utils::maptypes::Destination;
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub const SEARCH_DESTINATION_PATH: &str = "/public/search-destination";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchDestinationResponse {
    pub destinations: Vec<Destination>,
}

pub async fn start_server(config: Config) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()
        .context("Failed to build HTTP client")?;

    let planner = TravelPlanner::new(
        OpenAI::new(
            client.clone(),
            config.openai_base_url,
            config.openai_api_key,
            config.openai_model,
            config.openai_temperature,
        ),
        GoogleGeocoderProvider::new(client, config.geocoder_url, config.google_maps_api_key),
    );
    let app = router(planner);

    let address = SocketAddr::from(([0, 0, 0, 0, 0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Listening on {}", address);

    axum::serve(listener, app).await.context("Server error")
}

pub fn router<P, G>(planner: TravelPlanner<P, G>) -> Router
where
    P: ChatCompletionService + 'static,
    G: GeocoderProvider + 'static,
{
    Router::new()
        .route(SEARCH_DESTINATION_PATH, post(search_destination::<P, G>))
        .with_state(Arc::new(planner))
}

async fn search_destination<P, G>(
    State(planner): State<Arc<TravelPlanner<P, G>>>,
    payload: Result<Json<TravelPlanRequest>, JsonRejection>,
) -> Result<Json<SearchDestinationResponse>, PlannerError>
where
    P: ChatCompletionService + 'static,
    G: GeocoderProvider + 'static,
{
    let Json(request) = payload.map_err(|e| PlannerError::validation(e.body_text()))?;
    let request = request.validate()?;
    info!(
        "Destination search for '{}' with {} given destination(s)",
        request.region,
        request.destinations.len()
    );

    let destinations = planner.plan(request).await?;
    Ok(Json(SearchDestinationResponse { destinations }))
}
