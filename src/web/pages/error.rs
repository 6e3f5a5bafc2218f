use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, NavItem};

/// Render a failure page with a link back to the form it came from.
#[must_use]
pub fn render_error_page(title: &str, message: &str, back: NavItem) -> Markup {
    let back_href = match back {
        NavItem::Keyword => "/",
        NavItem::Related => "/related",
    };

    let content = html! {
        h1 { (title) }
        (Alert::error(message))
        p { a href=(back_href) { "Back to the search form" } }
    };

    BaseLayout::new(title).active(back).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_page() {
        let html = render_error_page(
            "Search failed",
            "YouTube API quota exceeded: daily limit",
            NavItem::Related,
        )
        .into_string();
        assert!(html.contains("<h1>Search failed</h1>"));
        assert!(html.contains("quota exceeded"));
        assert!(html.contains(r#"<a href="/related">Back to the search form</a>"#));
    }
}
