//! Form components for maud templates.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional CSS class
    pub class: Option<&'a str>,
}

impl<'a> Form<'a> {
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
        }
    }

    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Input name attribute, also used as its ID
    pub name: &'a str,
    /// Input type ("text", "number", "date")
    pub r#type: &'a str,
    /// Current value
    pub value: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub required: bool,
    /// Minimum value (for number inputs)
    pub min: Option<&'a str>,
    /// Maximum value (for number inputs)
    pub max: Option<&'a str>,
    pub maxlength: Option<usize>,
}

impl<'a> Input<'a> {
    #[must_use]
    pub fn new(name: &'a str, r#type: &'a str) -> Self {
        Self {
            name,
            r#type,
            value: None,
            placeholder: None,
            required: false,
            min: None,
            max: None,
            maxlength: None,
        }
    }

    #[must_use]
    pub fn text(name: &'a str) -> Self {
        Self::new(name, "text")
    }

    #[must_use]
    pub fn number(name: &'a str) -> Self {
        Self::new(name, "number")
    }

    /// Create a date picker (`YYYY-MM-DD`).
    #[must_use]
    pub fn date(name: &'a str) -> Self {
        Self::new(name, "date")
    }

    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min(mut self, min: &'a str) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: &'a str) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn maxlength(mut self, maxlength: usize) -> Self {
        self.maxlength = Some(maxlength);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                id=(self.name)
                value=[self.value]
                placeholder=[self.placeholder]
                required[self.required]
                min=[self.min]
                max=[self.max]
                maxlength=[self.maxlength];
        }
    }
}

/// A select element.
#[derive(Debug)]
pub struct Select<'a> {
    /// Select name attribute, also used as its ID
    pub name: &'a str,
    /// `(value, label)` pairs
    pub options: Vec<(&'a str, &'a str)>,
    /// Currently selected value
    pub selected: Option<&'a str>,
}

impl<'a> Select<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            options: Vec::new(),
            selected: None,
        }
    }

    /// Add a single option.
    #[must_use]
    pub fn option(mut self, value: &'a str, label: &'a str) -> Self {
        self.options.push((value, label));
        self
    }

    #[must_use]
    pub fn selected(mut self, selected: &'a str) -> Self {
        self.selected = Some(selected);
        self
    }
}

impl Render for Select<'_> {
    fn render(&self) -> Markup {
        html! {
            select name=(self.name) id=(self.name) {
                @for (value, label) in &self.options {
                    option value=(value) selected[self.selected == Some(*value)] {
                        (label)
                    }
                }
            }
        }
    }
}

/// A label + control pair.
#[derive(Debug)]
pub struct FormGroup<'a> {
    /// Label text
    pub label: &'a str,
    /// ID of the control (used for the label's `for` attribute)
    pub id: &'a str,
    /// The control element
    pub control: Markup,
    /// Optional help text
    pub help: Option<&'a str>,
}

impl<'a> FormGroup<'a> {
    #[must_use]
    pub fn new(label: &'a str, id: &'a str, control: Markup) -> Self {
        Self {
            label,
            id,
            control,
            help: None,
        }
    }

    #[must_use]
    pub fn help(mut self, help: &'a str) -> Self {
        self.help = Some(help);
        self
    }
}

impl Render for FormGroup<'_> {
    fn render(&self) -> Markup {
        html! {
            div {
                label for=(self.id) { (self.label) }
                (self.control)
                @if let Some(help) = self.help {
                    small { (help) }
                }
            }
        }
    }
}
