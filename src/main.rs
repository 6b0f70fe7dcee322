use std::env::set_var;

use lambda_http::{run, service_fn, tracing, Error};
use movie_ingest::{db, ingest::function_handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    let db = db::from_env().await;

    run(service_fn(|event| function_handler(db.as_ref(), event))).await
}
