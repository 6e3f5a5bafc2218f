//! Base layout components for the web UI.
//!
//! This module provides the page skeleton: head, navigation between the two
//! search modes, and footer.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Page styles. Small enough to inline, so the binary needs no static files.
const PAGE_STYLE: &str = r"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
.container { max-width: 1400px; margin: 0 auto; padding: 0 1rem; }
nav ul { display: flex; gap: 1rem; list-style: none; padding: 0; }
nav a[aria-current=page] { font-weight: bold; }
form.search-form { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 0.75rem; align-items: end; }
form.search-form label { display: block; font-size: 0.85rem; }
article.error { border-left: 4px solid #c0392b; background: #fdecea; padding: 0.5rem 1rem; }
article.info { border-left: 4px solid #2980b9; background: #eaf2f8; padding: 0.5rem 1rem; }
table { border-collapse: collapse; width: 100%; margin-top: 1rem; }
th, td { border-bottom: 1px solid #ddd; padding: 0.35rem; text-align: left; vertical-align: top; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
img.profile-img { width: 44px; height: 44px; border-radius: 50%; }
";

/// Navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Keyword,
    Related,
}

impl NavItem {
    const ALL: [NavItem; 2] = [NavItem::Keyword, NavItem::Related];

    const fn href(self) -> &'static str {
        match self {
            Self::Keyword => "/",
            Self::Related => "/related",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Keyword => "Keyword search",
            Self::Related => "Related to rivals",
        }
    }
}

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::{BaseLayout, NavItem};
///
/// let page = BaseLayout::new("Keyword search")
///     .active(NavItem::Keyword)
///     .render(html! { h1 { "Hello" } });
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    active: Option<NavItem>,
}

impl<'a> BaseLayout<'a> {
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            active: None,
        }
    }

    /// Highlight a navigation entry.
    #[must_use]
    pub fn active(mut self, item: NavItem) -> Self {
        self.active = Some(item);
        self
    }

    /// Render the complete HTML page with the given content inside `<main>`.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="robots" content="noindex";
                    title { (self.title) " - Tube Scout" }
                    style { (PreEscaped(PAGE_STYLE)) }
                }
                body {
                    (self.render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    fn render_header(&self) -> Markup {
        html! {
            header class="container" {
                nav {
                    ul {
                        li { strong { "Tube Scout" } }
                        @for item in NavItem::ALL {
                            li {
                                a href=(item.href())
                                    aria-current=[(self.active == Some(item)).then_some("page")]
                                { (item.label()) }
                            }
                        }
                    }
                }
            }
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small { "Data from the YouTube Data API v3" }
            }
        }
    }
}
