use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use attendance_engine::shell::config::Config;
use attendance_engine::shell::graphql::{AppSchema, schema};
use attendance_engine::shell::http::router;
use attendance_engine::shell::state::{AppState, InMemoryBackends};
use attendance_engine::shell::workers::spawn_carryover_worker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    // In-memory deps for now
    let backends = InMemoryBackends::new(config.token_cache_capacity);
    let state = AppState::from_backends(&backends);

    let _carryover = spawn_carryover_worker(state.carryover.clone(), config.carryover_interval);

    let app = router(state.clone())
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP API: http://{}", config.http_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.http_addr);
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
