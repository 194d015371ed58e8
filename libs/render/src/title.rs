use persistance::fs::config::SiteIdentity;

pub const SEARCH_RESULTS_LABEL: &str = "搜索结果";
pub const NOT_FOUND_LABEL: &str = "页面未找到";

/// What the current request is showing. Each variant carries the title material it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContext {
    Home,
    Category(String),
    Single(String),
    Search,
    NotFound,
    Tag(String),
    Other(String),
}

impl PageContext {
    /// Text for the page's own heading, as opposed to the `<title>`.
    pub fn heading(&self) -> &str {
        match self {
            PageContext::Home => "",
            PageContext::Search => SEARCH_RESULTS_LABEL,
            PageContext::NotFound => NOT_FOUND_LABEL,
            PageContext::Category(title)
            | PageContext::Single(title)
            | PageContext::Tag(title)
            | PageContext::Other(title) => title.as_str(),
        }
    }
}

impl Default for PageContext {
    fn default() -> Self {
        PageContext::Other(String::new())
    }
}

/// The predicate view a host router exposes, where nothing stops several flags being set at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFlags {
    pub is_home: bool,
    pub is_category: bool,
    pub is_single: bool,
    pub is_search: bool,
    pub is_not_found: bool,
    pub is_tag: bool,
    pub category_title: String,
    pub post_title: String,
    pub tag_title: String,
    pub generic_title: String,
}

impl PageFlags {
    /// First match wins: home, category, single, search, not-found, tag, then anything else.
    pub fn classify(self) -> PageContext {
        if self.is_home {
            PageContext::Home
        } else if self.is_category {
            PageContext::Category(self.category_title)
        } else if self.is_single {
            PageContext::Single(self.post_title)
        } else if self.is_search {
            PageContext::Search
        } else if self.is_not_found {
            PageContext::NotFound
        } else if self.is_tag {
            PageContext::Tag(self.tag_title)
        } else {
            PageContext::Other(self.generic_title)
        }
    }
}

impl From<PageFlags> for PageContext {
    fn from(flags: PageFlags) -> Self {
        flags.classify()
    }
}

pub fn select_title(context: &PageContext, site: &SiteIdentity) -> String {
    match context {
        PageContext::Home => format!("{} - {}", site.name, site.description),
        PageContext::Category(title) | PageContext::Single(title) | PageContext::Tag(title) => {
            format!("{} - {}", title, site.name)
        }
        PageContext::Search => format!("{} - {}", SEARCH_RESULTS_LABEL, site.name),
        PageContext::NotFound => NOT_FOUND_LABEL.to_string(),
        // An empty generic title still keeps the separator.
        PageContext::Other(title) => format!("{} - {}", title, site.name),
    }
}
