pub mod filters;
pub mod static_files;
pub mod theme_pages;

use std::convert::Infallible;

use log::error;
use warp::{
    http::{Response, StatusCode},
    Rejection, Reply,
};

pub use self::filters::*;

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed".to_string(),
        )
    } else {
        error!("unhandled error: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    };

    let response = Response::new(message);
    let (mut parts, body) = response.into_parts();
    parts.status = code;
    Ok(Response::from_parts(parts, body))
}
