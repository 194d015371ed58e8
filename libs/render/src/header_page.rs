use crate::{
    escape_html,
    head::HeadMeta,
    nav::render_primary_nav,
    render_includes, template,
    title::{select_title, PageContext},
    Render, Theme,
};

/// Doctype, `<head>` and the site header block shared by every page.
pub struct HeaderPage<'a> {
    theme: Theme<'a>,
    context: &'a PageContext,
}

impl<'a> HeaderPage<'a> {
    pub fn new(theme: Theme<'a>, context: &'a PageContext) -> Self {
        Self { theme, context }
    }
}

impl<'a> Render for HeaderPage<'a> {
    fn render(&self) -> String {
        let Theme {
            site,
            options,
            menus,
            partials,
        } = self.theme;
        let title = select_title(self.context, site);
        let head = HeadMeta::new(self.theme, title).render();
        let ctx = template("header")
            .replace("<%= home_url %>", &escape_html(&site.home_url))
            .replace("<%= site_name %>", &escape_html(&site.name))
            .replace("<%= description %>", &escape_html(&options.description))
            .replace("<%= nav %>", &render_primary_nav(menus, site));
        // head is spliced in after includes are resolved
        render_includes(ctx, partials).replace("<%= head %>", &head)
    }
}
