use std::sync::Arc;

use aws_config::BehaviorVersion;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_api::config::Config;
use todo_api::routes;
use todo_api::state::AppState;
use todo_api::store::DynamoStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    // One DynamoDB client for the lifetime of the process, shared by all requests.
    let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = Arc::new(DynamoStore::new(client, config.table_name.clone()));

    let state = AppState { store };

    let app = routes::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .expect("Error binding listener");

    info!("todo api listening at http://{}", config.addr());

    axum::serve(listener, app).await.expect("Error serving app");
}
