//! Embedded player and channel avatar components.

use maud::{html, Markup, Render};

/// An embedded YouTube player for an `https://www.youtube.com/embed/...` URL.
#[derive(Debug, Clone)]
pub struct EmbedPlayer<'a> {
    pub src: &'a str,
    pub title: &'a str,
    pub width: u32,
    pub height: u32,
}

impl<'a> EmbedPlayer<'a> {
    #[must_use]
    pub fn new(src: &'a str, title: &'a str) -> Self {
        Self {
            src,
            title,
            width: 240,
            height: 135,
        }
    }
}

impl Render for EmbedPlayer<'_> {
    fn render(&self) -> Markup {
        html! {
            iframe
                src=(self.src)
                title=(self.title)
                width=(self.width)
                height=(self.height)
                loading="lazy"
                frameborder="0"
                allow="encrypted-media; picture-in-picture"
                allowfullscreen {}
        }
    }
}

/// A channel's round profile picture; renders nothing without a URL.
#[derive(Debug, Clone)]
pub struct ProfileImage<'a> {
    pub src: &'a str,
    pub alt: &'a str,
}

impl<'a> ProfileImage<'a> {
    #[must_use]
    pub fn new(src: &'a str, alt: &'a str) -> Self {
        Self { src, alt }
    }
}

impl Render for ProfileImage<'_> {
    fn render(&self) -> Markup {
        html! {
            @if !self.src.is_empty() {
                img class="profile-img" src=(self.src) alt=(self.alt) loading="lazy";
            }
        }
    }
}
