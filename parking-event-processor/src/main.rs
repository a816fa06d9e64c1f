use lambda_runtime::{run, service_fn, Error};
use parking_event_processor::{handler, telemetry};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    run(service_fn(handler::function_handler)).await
}
