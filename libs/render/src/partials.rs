use chrono::{Datelike, Local};
use persistance::fs::config::SiteIdentity;

use crate::{escape_html, template};

/// Pieces of markup the surrounding site supplies around the theme's own templates.
pub trait Partials {
    fn head_injection(&self) -> String;
    fn search_form(&self) -> String;
    fn sidebar(&self) -> String;
    fn footer(&self) -> String;
}

pub struct ThemePartials {
    home_url: String,
    site_name: String,
    year: i32,
}

impl ThemePartials {
    pub fn new(site: &SiteIdentity) -> Self {
        Self {
            home_url: escape_html(&site.home_url),
            site_name: escape_html(&site.name),
            year: Local::now().year(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

impl Partials for ThemePartials {
    fn head_injection(&self) -> String {
        format!(
            "<meta name=\"generator\" content=\"baolog {}\" />",
            env!("CARGO_PKG_VERSION")
        )
    }

    fn search_form(&self) -> String {
        template("search_form").replace("<%= home_url %>", &self.home_url)
    }

    fn sidebar(&self) -> String {
        template("sidebar").replace("<%= home_url %>", &self.home_url)
    }

    fn footer(&self) -> String {
        template("footer")
            .replace("<%= year %>", &self.year.to_string())
            .replace("<%= home_url %>", &self.home_url)
            .replace("<%= site_name %>", &self.site_name)
    }
}
