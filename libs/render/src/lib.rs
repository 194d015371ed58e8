use log::warn;
use persistance::fs::{config::Menus, config::SiteIdentity, options::ThemeOptions};

use partials::Partials;

pub mod content_page;
pub mod head;
pub mod header_page;
pub mod nav;
pub mod partials;
pub mod sponsor_page;
pub mod title;

pub trait Render {
    fn render(&self) -> String;
}

/// Everything a page needs from the outside world, fetched once per request.
#[derive(Clone, Copy)]
pub struct Theme<'a> {
    pub site: &'a SiteIdentity,
    pub options: &'a ThemeOptions,
    pub menus: &'a Menus,
    pub partials: &'a dyn Partials,
}

pub fn parse_includes(include_str: &str) -> Option<&str> {
    include_str
        .strip_prefix("<%= include \"")?
        .strip_suffix("\" %>")
}

#[inline]
fn process_included_file(file: &str, partials: &dyn Partials) -> String {
    match file {
        "head_injection" => partials.head_injection(),
        "search_form" => partials.search_form(),
        "sidebar" => partials.sidebar(),
        "footer" => partials.footer(),
        _ => {
            warn!("Unknown include: {}", file);
            String::with_capacity(0)
        }
    }
}

pub fn render_includes(ctx: String, partials: &dyn Partials) -> String {
    let lines = ctx.lines().map(|line| {
        let trimmed = line.trim();
        match parse_includes(trimmed) {
            Some(included_file) => process_included_file(included_file, partials),
            None => line.to_string(),
        }
    });
    lines.collect::<Vec<String>>().join("\n")
}

#[inline]
pub fn get_template_file(requested_file: &str) -> Option<&'static str> {
    let template = match requested_file {
        "head" => include_str!("../templates/head.html"),
        "header" => include_str!("../templates/header.html"),
        "nav_fallback" => include_str!("../templates/nav_fallback.html"),
        "sponsor" => include_str!("../templates/sponsor.html"),
        "content" => include_str!("../templates/content.html"),
        "search_form" => include_str!("../templates/search_form.html"),
        "sidebar" => include_str!("../templates/sidebar.html"),
        "footer" => include_str!("../templates/footer.html"),
        _ => {
            warn!("Could not find template {}", requested_file);
            return None;
        }
    };
    Some(template)
}

/// Loads a template, falling back to an empty page so rendering never stops.
pub(crate) fn template(requested_file: &str) -> String {
    get_template_file(requested_file)
        .unwrap_or_default()
        .to_string()
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
pub(crate) mod test_support {
    use persistance::fs::{
        config::{Menus, SiteIdentity},
        options::ThemeOptions,
    };

    use crate::partials::ThemePartials;

    pub fn site() -> SiteIdentity {
        SiteIdentity {
            name: "BaoLog".into(),
            description: "A quiet blog".into(),
            home_url: "https://blog.example".into(),
            stylesheet_url: "https://blog.example/static/style.css".into(),
            template_url: "https://blog.example/static".into(),
            pingback_url: "https://blog.example/xmlrpc.php".into(),
        }
    }

    pub fn options() -> ThemeOptions {
        ThemeOptions {
            description: "Notes on things".into(),
            keywords: "rust,blog".into(),
            favicon: "https://cdn.example/favicon.ico".into(),
            support_alipay: "https://cdn.example/alipay.png".into(),
            support_wechat: "https://cdn.example/wechat.png".into(),
        }
    }

    pub struct Fixture {
        pub site: SiteIdentity,
        pub options: ThemeOptions,
        pub menus: Menus,
        pub partials: ThemePartials,
    }

    impl Fixture {
        pub fn new() -> Self {
            let site = site();
            let partials = ThemePartials::new(&site).with_year(2024);
            Self {
                site,
                options: options(),
                menus: Menus::default(),
                partials,
            }
        }

        pub fn theme(&self) -> crate::Theme<'_> {
            crate::Theme {
                site: &self.site,
                options: &self.options,
                menus: &self.menus,
                partials: &self.partials,
            }
        }
    }
}
