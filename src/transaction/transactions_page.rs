//! Defines the route handler for the transactions page.

use maud::Markup;

use super::view::transactions_view;

/// Render the transactions page.
///
/// The page is a static shell: the card grid loads itself over htmx once the
/// page is in the browser, so this handler needs no state.
pub async fn get_transactions_page() -> Markup {
    transactions_view()
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::get_transactions_page;

    async fn parse_page() -> Html {
        let markup = get_transactions_page().await;

        Html::parse_document(&markup.into_string())
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[tokio::test]
    async fn page_has_title_and_add_button() {
        let html = parse_page().await;
        assert_valid_html(&html);

        let heading = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("No h1 found");
        assert_eq!(heading.text().collect::<String>().trim(), "Transactions");

        let button_selector = Selector::parse("button[hx-post]").unwrap();
        let add_button = html
            .select(&button_selector)
            .next()
            .expect("No add button found");
        assert_eq!(
            add_button.value().attr("hx-post"),
            Some(endpoints::ADD_TRANSACTION),
            "want the add button to post to the add endpoint"
        );
        assert_eq!(
            add_button.value().attr("hx-swap"),
            Some("beforeend"),
            "want new cards appended to the grid"
        );
    }

    #[tokio::test]
    async fn page_has_both_date_inputs_and_a_filter_control() {
        let html = parse_page().await;

        for id in ["startingDate", "endingDate"] {
            let selector = Selector::parse(&format!("input[type='date']#{id}")).unwrap();
            html.select(&selector)
                .next()
                .unwrap_or_else(|| panic!("No date input with id {id} found"));
        }

        let form_selector = Selector::parse("form[hx-get]").unwrap();
        let form = html
            .select(&form_selector)
            .next()
            .expect("No filter form found");
        assert_eq!(
            form.value().attr("hx-get"),
            Some(endpoints::TRANSACTION_LIST_FRAGMENT)
        );

        let hidden_selector = Selector::parse("input[name='requireDates']").unwrap();
        form.select(&hidden_selector)
            .next()
            .expect("Filter form should mark its requests as filter submissions");
    }

    #[tokio::test]
    async fn sort_selector_offers_none_date_and_amount() {
        let html = parse_page().await;

        let option_selector = Selector::parse("select#sortBy option").unwrap();
        let values: Vec<&str> = html
            .select(&option_selector)
            .map(|option| option.value().attr("value").unwrap_or_default())
            .collect();

        assert_eq!(values, ["", "date", "amount"]);
    }

    #[tokio::test]
    async fn grid_fetches_itself_on_page_load() {
        let html = parse_page().await;

        let grid_selector = Selector::parse("div#transaction-grid").unwrap();
        let grid = html
            .select(&grid_selector)
            .next()
            .expect("No transaction grid found");

        assert_eq!(
            grid.value().attr("hx-get"),
            Some(endpoints::TRANSACTION_LIST_FRAGMENT)
        );
        assert_eq!(grid.value().attr("hx-trigger"), Some("load"));
        assert_eq!(
            grid.value().attr("hx-target-error"),
            Some("#alert-container"),
            "want fetch errors routed to the alert banner"
        );
    }

    #[tokio::test]
    async fn page_has_an_empty_alert_container() {
        let html = parse_page().await;

        let alert_selector = Selector::parse("div#alert-container").unwrap();
        let container = html
            .select(&alert_selector)
            .next()
            .expect("No alert container found");
        assert!(
            container.text().collect::<String>().trim().is_empty(),
            "the banner should start empty"
        );
    }
}
