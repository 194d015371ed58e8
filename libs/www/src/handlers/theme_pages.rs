use std::collections::HashMap;

use warp::{filters::BoxedFilter, http::StatusCode, path::FullPath, Filter, Reply};

use render::title::PageContext;

use crate::services::{render_context, render_sponsor};

use super::filters::{page_flags, with_site, SharedSite};

pub struct ThemePageRouter {
    site: SharedSite,
}

impl ThemePageRouter {
    pub fn new(site: SharedSite) -> Self {
        Self { site }
    }

    pub fn routes(&self) -> BoxedFilter<(impl Reply,)> {
        self.support().or(self.pages()).boxed()
    }

    fn support(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(warp::path("support"))
            .and(warp::path::end())
            .and(with_site(self.site.clone()))
            .then(|site: SharedSite| async move {
                warp::reply::html(render_sponsor(&site).await)
            })
            .boxed()
    }

    fn pages(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(warp::path::full())
            .and(warp::query::<HashMap<String, String>>())
            .and(with_site(self.site.clone()))
            .then(
                |path: FullPath, query: HashMap<String, String>, site: SharedSite| async move {
                    let context = page_flags(path.as_str()).classify();
                    let status = if context == PageContext::NotFound {
                        StatusCode::NOT_FOUND
                    } else {
                        StatusCode::OK
                    };
                    let search_term = query.get("s").map(String::as_str);
                    let body = render_context(&site, context, search_term).await;
                    warp::reply::with_status(warp::reply::html(body), status)
                },
            )
            .boxed()
    }
}
