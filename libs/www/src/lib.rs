pub mod handlers;
pub mod services;

use std::{
    net::{AddrParseError, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use handlers::{handle_rejection, static_files::StaticFileRouter, theme_pages::ThemePageRouter};
use log::info;
use persistance::fs::{
    config::{Config, General},
    utils::parse_location,
};
use services::SiteState;
use thiserror::Error;
use warp::{filters::BoxedFilter, Filter, Reply};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid listen address {0}")]
    InvalidAddress(String, #[source] AddrParseError),
}

pub fn routes(site: Arc<SiteState>, static_location: PathBuf) -> BoxedFilter<(impl Reply,)> {
    let static_files = StaticFileRouter {
        static_location: Arc::new(static_location),
    };
    let pages = ThemePageRouter::new(site);
    static_files
        .routes()
        .or(pages.routes())
        .recover(handle_rejection)
        .with(warp::log("baolog"))
        .boxed()
}

pub fn listen_addr(general: &General) -> Result<SocketAddr, ServerError> {
    let raw = format!("{}:{}", general.host, general.port);
    raw.parse::<SocketAddr>()
        .map_err(|e| ServerError::InvalidAddress(raw, e))
}

pub async fn server(config: Config) -> Result<(), ServerError> {
    let addr = listen_addr(&config.general)?;
    let site = Arc::new(SiteState::from(&config));
    let static_location = parse_location(&config.general.static_location);
    info!("Starting server at: http://{}", addr);
    warp::serve(routes(site, static_location)).run(addr).await;
    Ok(())
}
