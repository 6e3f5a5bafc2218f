//! Keyword search page: the search form and, after a submission, the results.

use maud::{html, Markup, Render};

use crate::components::{
    Alert, BaseLayout, EmbedPlayer, Form, FormGroup, Input, NavItem, ProfileImage, Select, Table,
    TableRow, TableVariant,
};
use crate::constants::{MAX_KEYWORD_LEN, MAX_RESULTS_PER_PAGE};
use crate::pipeline::KeywordTableRow;
use crate::web::forms::KeywordForm;
use crate::youtube::SearchOrder;

/// Render the keyword page.
///
/// `results` is `None` before the first submission.
#[must_use]
pub fn render_keyword_page(
    form: &KeywordForm,
    error: Option<&str>,
    results: Option<&[KeywordTableRow]>,
) -> Markup {
    let content = html! {
        h1 { "Keyword search" }

        @if let Some(err) = error {
            (Alert::error(err).with_title("Invalid input"))
        }

        (KeywordSearchForm { form })

        @if let Some(rows) = results {
            (KeywordResults { rows })
        }
    };

    BaseLayout::new("Keyword search")
        .active(NavItem::Keyword)
        .render(content)
}

struct KeywordSearchForm<'a> {
    form: &'a KeywordForm,
}

impl Render for KeywordSearchForm<'_> {
    fn render(&self) -> Markup {
        let f = self.form;
        let max_page = MAX_RESULTS_PER_PAGE.to_string();
        let order_select = SearchOrder::ALL
            .iter()
            .fold(Select::new("order"), |select, order| {
                select.option(order.as_api_str(), order.label())
            })
            .selected(&f.order);

        let fields = html! {
            (FormGroup::new("Keyword", "keyword",
                Input::text("keyword").value(&f.keyword).maxlength(MAX_KEYWORD_LEN).required().render()))
            (FormGroup::new("Result count", "items_count",
                Input::number("items_count").value(&f.items_count).min("1").max(&max_page).required().render())
                .help("At most one page (50) is fetched"))
            (FormGroup::new("Minimum views", "viewcount",
                Input::number("viewcount").value(&f.viewcount).min("0").required().render()))
            (FormGroup::new("Order", "order", order_select.render()))
            (FormGroup::new("Search start", "search_start",
                Input::date("search_start").value(&f.search_start).required().render()))
            (FormGroup::new("Search end", "search_end",
                Input::date("search_end").value(&f.search_end).required().render()))
            div { button type="submit" { "Search" } }
        };

        Form::post("/", fields).class("search-form").render()
    }
}

struct KeywordResults<'a> {
    rows: &'a [KeywordTableRow],
}

impl Render for KeywordResults<'_> {
    fn render(&self) -> Markup {
        if self.rows.is_empty() {
            return Alert::info("No videos matched the search and view-count threshold.").render();
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                TableRow::new()
                    .cell(&row.publishtime)
                    .cell(&row.title)
                    .cell(&row.channeltitle)
                    .cell_markup(EmbedPlayer::new(&row.url, &row.title).render())
                    .cell_markup(ProfileImage::new(&row.profile_img, &row.channeltitle).render())
                    .num_cell(&row.viewcount)
                    .num_cell(row.like_count.as_display())
                    .num_cell(row.favorite_count.as_display())
                    .num_cell(row.comment_count.as_display())
                    .render()
            })
            .collect();

        html! {
            p { (self.rows.len()) " videos" }
            (Table::new(KeywordTableRow::COLUMNS.to_vec())
                .variant(TableVariant::Results)
                .rows(rows))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::pipeline::StatValue;

    fn form() -> KeywordForm {
        KeywordForm::with_defaults(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
    }

    fn row() -> KeywordTableRow {
        KeywordTableRow {
            publishtime: "2024-03-02".into(),
            title: "Great <video>".into(),
            channeltitle: "Chan".into(),
            url: "https://www.youtube.com/embed/abc123".into(),
            profile_img: "https://yt3.example/c.jpg".into(),
            viewcount: "1500".into(),
            like_count: StatValue::Unavailable,
            favorite_count: StatValue::Available("0".into()),
            comment_count: StatValue::Available("4".into()),
        }
    }

    #[test]
    fn test_form_only_on_first_visit() {
        let html = render_keyword_page(&form(), None, None).into_string();
        assert!(html.contains(r#"action="/""#));
        assert!(html.contains(r#"name="keyword""#));
        assert!(html.contains(r#"<option value="viewCount" selected>"#));
        assert!(html.contains(r#"value="2024-03-01""#));
        assert!(!html.contains("<table"));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn test_error_is_shown() {
        let html = render_keyword_page(&form(), Some("Keyword is required"), None).into_string();
        assert!(html.contains("Keyword is required"));
        assert!(html.contains(r#"<article class="error""#));
    }

    #[test]
    fn test_results_table() {
        let rows = vec![row()];
        let html = render_keyword_page(&form(), None, Some(&rows)).into_string();
        assert!(html.contains("<th>publishtime</th>"));
        assert!(html.contains("<th>commentCount</th>"));
        assert!(html.contains("Great &lt;video&gt;"));
        assert!(html.contains(r#"src="https://www.youtube.com/embed/abc123""#));
        assert!(html.contains(r#"<td class="num">1500</td>"#));
        assert!(html.contains(r#"<td class="num">-</td>"#));
        assert!(html.contains("1 videos"));
    }

    #[test]
    fn test_empty_results_message() {
        let html = render_keyword_page(&form(), None, Some(&[])).into_string();
        assert!(html.contains("No videos matched"));
        assert!(!html.contains("<table"));
    }
}
