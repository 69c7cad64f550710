use std::{env, io, sync::Arc};

use estimator::Estimator;
use log::info;
use server::App;
use tokio::{net::TcpListener, signal};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_ARTIFACT: &str = "house_rent_model.json";

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    // The artifact must load before the listener binds.
    let artifact_path =
        env::var("ARTIFACT").unwrap_or_else(|_| DEFAULT_ARTIFACT.to_string());
    let artifact = artifact::load(&artifact_path).map_err(io::Error::other)?;

    let encoders = &artifact.encoders;
    info!(
        "loaded artifact from {artifact_path}: {} weights, vocabularies {}/{}/{}",
        artifact.model.size(),
        encoders.furnishing.len(),
        encoders.tennants.len(),
        encoders.locality.len(),
    );

    let estimator = Estimator::new(Box::new(artifact.model), artifact.encoders);
    let app = App::new(Arc::new(estimator));

    let addr = format!(
        "{}:{}",
        env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
        env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
    );

    let listener = TcpListener::bind(&addr).await?;
    info!("listening at http://{addr}");

    tokio::select! {
        ret = server::run(listener, app) => ret,
        _ = signal::ctrl_c() => {
            info!("received SIGTERM, shutting down");
            Ok(())
        }
    }
}
