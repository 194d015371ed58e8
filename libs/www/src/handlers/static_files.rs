use std::{path::PathBuf, sync::Arc};

use warp::{filters::BoxedFilter, Filter, Reply};

pub struct StaticFileRouter {
    pub static_location: Arc<PathBuf>,
}

impl StaticFileRouter {
    pub fn routes(&self) -> BoxedFilter<(impl Reply,)> {
        warp::path("static")
            .and(warp::fs::dir(self.static_location.as_ref().clone()))
            .boxed()
    }
}
