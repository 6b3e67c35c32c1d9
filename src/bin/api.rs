pub use insights_hub::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    insights_hub::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
