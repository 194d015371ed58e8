use std::fmt::Write as _;

use persistance::fs::config::{MenuNode, Menus, SiteIdentity, PRIMARY_MENU_LOCATION};

use crate::{escape_html, template};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    pub container_class: &'static str,
    pub menu_class: &'static str,
    pub menu_id: &'static str,
    /// Deepest level rendered. Top-level items are depth 1.
    pub depth: usize,
}

pub const PRIMARY_MENU: MenuConfig = MenuConfig {
    container_class: "col-sm-8 px-0",
    menu_class: "nav sm-center",
    menu_id: "menu-primary-items",
    depth: 2,
};

/// Configured primary menu if the location has items, the fixed two-link fallback otherwise.
pub fn render_primary_nav(menus: &Menus, site: &SiteIdentity) -> String {
    if menus.has_menu(PRIMARY_MENU_LOCATION) {
        render_menu(menus.get(PRIMARY_MENU_LOCATION), &PRIMARY_MENU)
    } else {
        render_fallback(site)
    }
}

pub fn render_fallback(site: &SiteIdentity) -> String {
    template("nav_fallback").replace("<%= home_url %>", &escape_html(&site.home_url))
}

pub fn render_menu(tree: &[MenuNode], config: &MenuConfig) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<div class=\"{}\"><ul id=\"{}\" class=\"{}\">",
        config.container_class, config.menu_id, config.menu_class
    );
    if config.depth > 0 {
        for node in tree {
            render_item(&mut out, node, 1, config.depth);
        }
    }
    out.push_str("</ul></div>");
    out
}

fn render_item(out: &mut String, node: &MenuNode, level: usize, max_depth: usize) {
    let label = escape_html(&node.label);
    let link = escape_html(&node.link);
    // children past the depth limit are dropped along with their subtrees
    let has_children = !node.children.is_empty() && level < max_depth;
    if level == 1 {
        if has_children {
            let _ = write!(
                out,
                "<li class=\"nav-item dropdown\"><a class=\"nav-link dropdown-toggle\" href=\"{}\" data-toggle=\"dropdown\" aria-haspopup=\"true\" aria-expanded=\"false\">{}</a>",
                link, label
            );
        } else {
            let _ = write!(
                out,
                "<li class=\"nav-item\"><a class=\"nav-link\" href=\"{}\">{}</a>",
                link, label
            );
        }
    } else {
        let _ = write!(
            out,
            "<li><a class=\"dropdown-item\" href=\"{}\">{}</a>",
            link, label
        );
    }
    if has_children {
        out.push_str("<ul class=\"dropdown-menu\">");
        for child in &node.children {
            render_item(out, child, level + 1, max_depth);
        }
        out.push_str("</ul>");
    }
    out.push_str("</li>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::site;

    #[test]
    fn fallback_when_no_primary_menu() {
        let nav = render_primary_nav(&Menus::default(), &site());
        let expected = "<div class=\"col-sm-8 px-0\">\n\
<ul class=\"nav sm-center\">\n\
<li class=\"nav-item\">\n\
<a class=\"nav-link\" href=\"https://blog.example\">首页</a>\n\
</li>\n\
<li class=\"nav-item\">\n\
<a class=\"nav-link\" href=\"https://blog.example/wp-admin/nav-menus.php\">请到后台添加导航(我是主导航)</a>\n\
</li>\n\
</ul></div>\n";
        assert_eq!(nav, expected);
    }

    #[test]
    fn fallback_when_primary_menu_is_empty() {
        let mut menus = Menus::default();
        menus.insert(PRIMARY_MENU_LOCATION, Vec::new());
        menus.insert("menu_footer", vec![MenuNode::new("Elsewhere", "/x")]);
        assert_eq!(render_primary_nav(&menus, &site()), render_fallback(&site()));
    }

    #[test]
    fn renders_configured_menu() {
        let mut menus = Menus::default();
        menus.insert(
            PRIMARY_MENU_LOCATION,
            vec![
                MenuNode::new("Home", "/"),
                MenuNode::new("Topics", "/topics")
                    .with_children(vec![MenuNode::new("Rust", "/category/rust")]),
            ],
        );
        let nav = render_primary_nav(&menus, &site());
        assert_eq!(
            nav,
            "<div class=\"col-sm-8 px-0\"><ul id=\"menu-primary-items\" class=\"nav sm-center\">\
<li class=\"nav-item\"><a class=\"nav-link\" href=\"/\">Home</a></li>\
<li class=\"nav-item dropdown\"><a class=\"nav-link dropdown-toggle\" href=\"/topics\" data-toggle=\"dropdown\" aria-haspopup=\"true\" aria-expanded=\"false\">Topics</a>\
<ul class=\"dropdown-menu\"><li><a class=\"dropdown-item\" href=\"/category/rust\">Rust</a></li></ul></li>\
</ul></div>"
        );
        assert!(!nav.contains("首页"));
    }

    #[test]
    fn drops_items_past_depth_two() {
        let tree = vec![MenuNode::new("Archive", "/archive").with_children(vec![
            MenuNode::new("2020", "/archive/2020")
                .with_children(vec![MenuNode::new("March", "/archive/2020/03")]),
        ])];
        let nav = render_menu(&tree, &PRIMARY_MENU);
        assert!(nav.contains("2020"));
        assert!(!nav.contains("March"));
        assert!(!nav.contains("/archive/2020/03"));
        // the level-two item has nothing left to drop down
        assert!(nav.contains(
            "<li><a class=\"dropdown-item\" href=\"/archive/2020\">2020</a></li>"
        ));
        assert_eq!(nav.matches("<ul class=\"dropdown-menu\">").count(), 1);
    }

    #[test]
    fn deeper_limits_render_nested_dropdowns() {
        let tree = vec![MenuNode::new("a", "/a").with_children(vec![
            MenuNode::new("b", "/b").with_children(vec![MenuNode::new("c", "/c")]),
        ])];
        let config = MenuConfig {
            depth: 3,
            ..PRIMARY_MENU
        };
        let nav = render_menu(&tree, &config);
        assert!(nav.contains("href=\"/c\""));
        assert_eq!(nav.matches("<ul class=\"dropdown-menu\">").count(), 2);
    }

    #[test]
    fn escapes_labels() {
        let tree = vec![MenuNode::new("<b>Bold</b>", "/?a=1&b=2")];
        let nav = render_menu(&tree, &PRIMARY_MENU);
        assert!(nav.contains("href=\"/?a=1&amp;b=2\">&lt;b&gt;Bold&lt;/b&gt;</a>"));
    }
}
