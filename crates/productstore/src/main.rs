mod config;
mod dispatcher;
mod error;
mod handlers;
mod response;
mod storage;

use std::sync::Arc;

use lambda_http::{run, service_fn, Error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::storage::dynamodb::{create_client, DynamoDbRepository};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "productstore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration is read once per process; invocations stay stateless.
    let config = Config::from_env();

    tracing::info!(
        table = %config.table_name,
        target = %config.aws.target_display(),
        "Starting product handler"
    );

    // One DynamoDB client for the process lifetime, reused across invocations.
    let client = create_client(&config.aws).await;
    let repository = Arc::new(DynamoDbRepository::new(client, &config.table_name));

    run(service_fn(move |event| {
        let repository = Arc::clone(&repository);
        async move { Ok::<_, Error>(dispatcher::handle_event(repository.as_ref(), event).await) }
    }))
    .await
}
