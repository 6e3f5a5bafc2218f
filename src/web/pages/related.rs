//! Related-video page: which of my videos show up next to rival videos.

use maud::{html, Markup, Render};

use crate::components::{
    Alert, BaseLayout, EmbedPlayer, Form, FormGroup, Input, NavItem, ProfileImage, Select, Table,
    TableRow, TableVariant,
};
use crate::constants::MAX_RESULTS_PER_PAGE;
use crate::pipeline::RelatedTableRow;
use crate::web::forms::RelatedForm;
use crate::youtube::SearchOrder;

/// Render the related page. `results` is `None` before the first submission.
#[must_use]
pub fn render_related_page(
    form: &RelatedForm,
    error: Option<&str>,
    results: Option<&[RelatedTableRow]>,
) -> Markup {
    let content = html! {
        h1 { "Related to rivals" }
        p {
            "Finds videos from your channel that appear among the related videos of "
            "recent uploads from rival channels."
        }

        @if let Some(err) = error {
            (Alert::error(err).with_title("Invalid input"))
        }

        (RelatedSearchForm { form })

        @if let Some(rows) = results {
            (RelatedResults { rows })
        }
    };

    BaseLayout::new("Related to rivals")
        .active(NavItem::Related)
        .render(content)
}

struct RelatedSearchForm<'a> {
    form: &'a RelatedForm,
}

impl Render for RelatedSearchForm<'_> {
    fn render(&self) -> Markup {
        let f = self.form;
        let max_page = MAX_RESULTS_PER_PAGE.to_string();
        let order_select = SearchOrder::ALL
            .iter()
            .fold(Select::new("rival_order"), |select, order| {
                select.option(order.as_api_str(), order.label())
            })
            .selected(&f.rival_order);

        let fields = html! {
            (FormGroup::new("My channel ID", "my_channel_id",
                Input::text("my_channel_id").value(&f.my_channel_id).placeholder("UC...").required().render()))
            (FormGroup::new("Rival channel IDs", "rival_channel_id",
                Input::text("rival_channel_id").value(&f.rival_channel_id).required().render())
                .help("Comma-separated"))
            (FormGroup::new("Rival video count", "rival_items_count",
                Input::number("rival_items_count").value(&f.rival_items_count).min("1").max(&max_page).required().render()))
            (FormGroup::new("Rival order", "rival_order", order_select.render()))
            (FormGroup::new("Rival search start", "rival_search_start",
                Input::date("rival_search_start").value(&f.rival_search_start).required().render()))
            (FormGroup::new("Rival search end", "rival_search_end",
                Input::date("rival_search_end").value(&f.rival_search_end).required().render()))
            (FormGroup::new("Related video count", "related_items_count",
                Input::number("related_items_count").value(&f.related_items_count).min("1").max(&max_page).required().render()))
            div { button type="submit" { "Search" } }
        };

        Form::post("/related", fields).class("search-form").render()
    }
}

struct RelatedResults<'a> {
    rows: &'a [RelatedTableRow],
}

impl Render for RelatedResults<'_> {
    fn render(&self) -> Markup {
        if self.rows.is_empty() {
            return Alert::info("None of your videos appeared among the rivals' related videos.")
                .render();
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                TableRow::new()
                    .num_cell(&row.ranking.to_string())
                    .cell_markup(EmbedPlayer::new(&row.url, &row.title).render())
                    .cell_markup(ProfileImage::new(&row.profile_img, &row.channeltitle).render())
                    .cell(&row.title)
                    .cell(&row.channeltitle)
                    .num_cell(row.viewcount.as_display())
                    .cell(&row.publishtime)
                    .num_cell(row.like_count.as_display())
                    .num_cell(row.favorite_count.as_display())
                    .num_cell(row.comment_count.as_display())
                    .cell_markup(EmbedPlayer::new(&row.rivalurl, &row.rivaltitle).render())
                    .cell(&row.rivaltitle)
                    .cell(&row.rivalchanneltitle)
                    .cell(&row.rivalpublishtime)
                    .render()
            })
            .collect();

        html! {
            p { (self.rows.len()) " matches" }
            (Table::new(RelatedTableRow::COLUMNS.to_vec())
                .variant(TableVariant::Comparison)
                .rows(rows))
        }
    }
}
