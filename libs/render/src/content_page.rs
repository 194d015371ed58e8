use crate::{
    escape_html, header_page::HeaderPage, render_includes, template, title::PageContext, Render,
    Theme,
};

pub struct ContentPage<'a> {
    theme: Theme<'a>,
    context: &'a PageContext,
    body: String,
}

impl<'a> ContentPage<'a> {
    pub fn new(theme: Theme<'a>, context: &'a PageContext) -> Self {
        Self {
            theme,
            context,
            body: String::with_capacity(0),
        }
    }

    /// Trusted markup for the card body.
    pub fn with_body(mut self, body: String) -> Self {
        self.body = body;
        self
    }

    fn heading(&self) -> String {
        match self.context {
            PageContext::Home => escape_html(&self.theme.site.name),
            context => escape_html(context.heading()),
        }
    }
}

impl<'a> Render for ContentPage<'a> {
    fn render(&self) -> String {
        let mut page = HeaderPage::new(self.theme, self.context).render();
        let ctx = template("content")
            .replace("<%= heading %>", &self.heading())
            .replace("<%= body %>", &self.body);
        page.push('\n');
        page.push_str(&render_includes(ctx, self.theme.partials));
        page
    }
}
