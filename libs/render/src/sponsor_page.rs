use crate::{
    escape_html, header_page::HeaderPage, render_includes, template, title::PageContext, Render,
    Theme,
};

pub const SPONSOR_TITLE: &str = "赞助我们";

/// Which payment method the sponsor card is showing. Switching happens in the browser; the
/// server only ever renders the starting state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SponsorTab {
    #[default]
    Alipay,
    Wechat,
}

impl SponsorTab {
    /// Clicking a tab handle shows that tab. Every state accepts every click.
    pub fn select(self, tab: SponsorTab) -> SponsorTab {
        tab
    }

    fn state_class(self, tab: SponsorTab) -> &'static str {
        if self == tab {
            " active show"
        } else {
            ""
        }
    }

    fn aria_selected(self, tab: SponsorTab) -> &'static str {
        if self == tab {
            "true"
        } else {
            "false"
        }
    }
}

pub struct SponsorPage<'a> {
    theme: Theme<'a>,
    context: PageContext,
    active: SponsorTab,
}

impl<'a> SponsorPage<'a> {
    pub fn new(theme: Theme<'a>) -> Self {
        Self {
            theme,
            context: PageContext::Other(SPONSOR_TITLE.to_string()),
            active: SponsorTab::default(),
        }
    }

    pub fn with_tab(mut self, tab: SponsorTab) -> Self {
        self.active = tab;
        self
    }

    pub fn active_tab(&self) -> SponsorTab {
        self.active
    }

    fn render_card(&self) -> String {
        let options = self.theme.options;
        let active = self.active;
        let ctx = template("sponsor")
            .replace("<%= alipay_tab_state %>", active.state_class(SponsorTab::Alipay))
            .replace("<%= wechat_tab_state %>", active.state_class(SponsorTab::Wechat))
            .replace("<%= alipay_selected %>", active.aria_selected(SponsorTab::Alipay))
            .replace("<%= wechat_selected %>", active.aria_selected(SponsorTab::Wechat))
            .replace("<%= support_alipay %>", &escape_html(&options.support_alipay))
            .replace("<%= support_wechat %>", &escape_html(&options.support_wechat));
        render_includes(ctx, self.theme.partials)
    }
}

impl<'a> Render for SponsorPage<'a> {
    fn render(&self) -> String {
        let mut page = HeaderPage::new(self.theme, &self.context).render();
        page.push('\n');
        page.push_str(&self.render_card());
        page
    }
}
