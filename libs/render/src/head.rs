use crate::{escape_html, render_includes, template, Render, Theme};

/// The document `<head>`: title, option-driven metadata, favicons and stylesheets.
pub struct HeadMeta<'a> {
    theme: Theme<'a>,
    title: String,
}

impl<'a> HeadMeta<'a> {
    pub fn new(theme: Theme<'a>, title: String) -> Self {
        Self { theme, title }
    }
}

impl<'a> Render for HeadMeta<'a> {
    fn render(&self) -> String {
        let Theme { site, options, .. } = self.theme;
        let ctx = template("head")
            .replace("<%= title %>", &escape_html(&self.title))
            .replace("<%= description %>", &escape_html(&options.description))
            .replace("<%= keywords %>", &escape_html(&options.keywords))
            .replace("<%= favicon %>", &escape_html(&options.favicon))
            .replace("<%= pingback_url %>", &escape_html(&site.pingback_url))
            .replace("<%= stylesheet_url %>", &escape_html(&site.stylesheet_url))
            .replace("<%= template_url %>", &escape_html(&site.template_url));
        render_includes(ctx, self.theme.partials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;

    #[test]
    fn renders_metadata_from_options() {
        let fixture = Fixture::new();
        let head = HeadMeta::new(fixture.theme(), "Hello - BaoLog".into()).render();
        assert!(head.contains("<title>Hello - BaoLog</title>"));
        assert!(head.contains(r#"<meta name="description" content="Notes on things" />"#));
        assert!(head.contains(r#"<meta name="keywords" content="rust,blog" />"#));
        assert!(head.contains(r#"<link rel="shortcut icon" href="https://cdn.example/favicon.ico">"#));
        assert!(head.contains(
            r#"<link rel="icon" sizes="32x32" href="https://cdn.example/favicon.ico">"#
        ));
        assert!(head.contains(r#"<link rel="Bookmark" href="https://cdn.example/favicon.ico">"#));
        assert!(head.contains(r#"<link rel="pingback" href="https://blog.example/xmlrpc.php"/>"#));
        assert!(head.contains(r#"href="https://blog.example/static/css/bootstrap.css""#));
        assert!(head.contains(r#"<meta name="generator""#));
        assert!(!head.contains("<%="));
    }

    #[test]
    fn missing_options_render_empty() {
        let mut fixture = Fixture::new();
        fixture.options.description.clear();
        fixture.options.favicon.clear();
        let head = HeadMeta::new(fixture.theme(), "t".into()).render();
        assert!(head.contains(r#"<meta name="description" content="" />"#));
        assert!(head.contains(r#"<link rel="shortcut icon" href="">"#));
        // fields after the missing ones still render
        assert!(head.contains(r#"<meta name="keywords" content="rust,blog" />"#));
        assert!(head.contains(r#"href="https://blog.example/static/style.css""#));
        assert!(head.trim_end().ends_with("</head>"));
    }

    #[test]
    fn escapes_title() {
        let fixture = Fixture::new();
        let head = HeadMeta::new(fixture.theme(), "<script> - BaoLog".into()).render();
        assert!(head.contains("<title>&lt;script&gt; - BaoLog</title>"));
    }
}
