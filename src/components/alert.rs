//! Alert components for messages shown above forms and results.

use maud::{html, Markup, Render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Error,
    Info,
}

impl AlertVariant {
    #[must_use]
    pub const fn article_class(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// An alert message rendered as a styled `<article>`.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub title: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self {
            variant,
            title: None,
            message,
        }
    }

    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    #[must_use]
    pub const fn info(message: &'a str) -> Self {
        Self::new(AlertVariant::Info, message)
    }

    #[must_use]
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            article class=(self.variant.article_class()) role="alert" {
                @if let Some(title) = self.title {
                    strong { (title) }
                    " "
                }
                (self.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_alert_with_title() {
        let html = Alert::error("Keyword is required")
            .with_title("Invalid input")
            .render()
            .into_string();
        assert_eq!(
            html,
            r#"<article class="error" role="alert"><strong>Invalid input</strong> Keyword is required</article>"#
        );
    }

    #[test]
    fn test_info_alert_escapes_message() {
        let html = Alert::info("<none>").render().into_string();
        assert!(html.contains(r#"class="info""#));
        assert!(html.contains("&lt;none&gt;"));
    }
}
