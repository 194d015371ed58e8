use std::sync::Arc;

use render::title::PageFlags;
use urlencoding::decode;
use warp::{Filter, Rejection};

use crate::services::SiteState;

pub type SharedSite = Arc<SiteState>;

pub fn with_site(
    site: SharedSite,
) -> impl Filter<Extract = (SharedSite,), Error = Rejection> + Clone {
    warp::any().map(move || site.clone()).boxed()
}

fn decode_segment(segment: &str) -> String {
    match decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

/// Answers the host's page predicates for a request path.
pub fn page_flags(path: &str) -> PageFlags {
    let segments = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect::<Vec<String>>();
    let segments = segments.iter().map(String::as_str).collect::<Vec<&str>>();
    let mut flags = PageFlags::default();
    match segments.as_slice() {
        [] => flags.is_home = true,
        ["category", name] => {
            flags.is_category = true;
            flags.category_title = name.to_string();
        }
        ["post", title] => {
            flags.is_single = true;
            flags.post_title = title.to_string();
        }
        ["search"] => flags.is_search = true,
        ["tag", name] => {
            flags.is_tag = true;
            flags.tag_title = name.to_string();
        }
        ["page", title] => flags.generic_title = title.to_string(),
        _ => flags.is_not_found = true,
    }
    flags
}
