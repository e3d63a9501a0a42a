mod cli;
mod demo;
mod infra;
mod routes;
mod server;

pub use routes::analysis_router;

use adscraft::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
