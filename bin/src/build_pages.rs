use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;
use persistance::fs::config::Config;
use render::{
    content_page::ContentPage, partials::ThemePartials, sponsor_page::SponsorPage,
    title::PageContext, Render, Theme,
};
use www::services::{load_options, SiteState};

/// Renders the home and sponsor pages into `out_dir`.
pub async fn build(config: &Config, out_dir: &Path) -> Result<Vec<PathBuf>, io::Error> {
    let state = SiteState::from(config);
    let options = load_options(&state.options_location).await;
    let partials = ThemePartials::new(&state.site);
    let theme = Theme {
        site: &state.site,
        options: &options,
        menus: &state.menus,
        partials: &partials,
    };

    let home = PageContext::Home;
    let pages = [
        (out_dir.join("index.html"), ContentPage::new(theme, &home).render()),
        (
            out_dir.join("support").join("index.html"),
            SponsorPage::new(theme).render(),
        ),
    ];
    let mut written = Vec::with_capacity(pages.len());
    for (path, html) in pages {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, html)?;
        info!("wrote {:?}", path);
        written.push(path);
    }
    Ok(written)
}
