use std::path::{Path, PathBuf};

use log::{debug, warn};
use persistance::fs::{
    config::{Config, Menus, SiteIdentity},
    options::{FileOptionsStore, ThemeOptions},
    utils::parse_location,
};
use render::{
    content_page::ContentPage, escape_html, partials::ThemePartials, sponsor_page::SponsorPage,
    title::PageContext, Render, Theme,
};

/// Site settings that stay fixed for the life of the server.
#[derive(Debug, Clone)]
pub struct SiteState {
    pub site: SiteIdentity,
    pub menus: Menus,
    pub options_location: PathBuf,
}

impl From<&Config> for SiteState {
    fn from(config: &Config) -> Self {
        Self {
            site: config.site.clone(),
            menus: config.menus.clone(),
            options_location: parse_location(&config.general.options_location),
        }
    }
}

/// Reads the option store for one request. Failures degrade to empty options.
pub async fn load_options(location: &Path) -> ThemeOptions {
    match FileOptionsStore::load(location).await {
        Ok(store) => ThemeOptions::from_store(&store),
        Err(e) => {
            warn!("{}, rendering with empty options", e);
            ThemeOptions::default()
        }
    }
}

/// Card body for contexts that have something to say without any post content.
pub fn context_body(context: &PageContext, search_term: Option<&str>) -> String {
    match context {
        PageContext::NotFound => "<p>抱歉，您访问的页面不存在。</p>".to_string(),
        PageContext::Search => match search_term.map(str::trim) {
            Some(term) if !term.is_empty() => {
                format!("<p>没有找到与“{}”相关的内容。</p>", escape_html(term))
            }
            _ => "<p>请输入搜索关键词。</p>".to_string(),
        },
        _ => String::new(),
    }
}

pub async fn render_context(
    state: &SiteState,
    context: PageContext,
    search_term: Option<&str>,
) -> String {
    debug!("rendering {:?}", context);
    let body = context_body(&context, search_term);
    let options = load_options(&state.options_location).await;
    let partials = ThemePartials::new(&state.site);
    let theme = Theme {
        site: &state.site,
        options: &options,
        menus: &state.menus,
        partials: &partials,
    };
    ContentPage::new(theme, &context).with_body(body).render()
}

pub async fn render_sponsor(state: &SiteState) -> String {
    let options = load_options(&state.options_location).await;
    let partials = ThemePartials::new(&state.site);
    let theme = Theme {
        site: &state.site,
        options: &options,
        menus: &state.menus,
        partials: &partials,
    };
    SponsorPage::new(theme).render()
}
