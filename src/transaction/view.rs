//! HTML rendering for the transactions page.

use maud::{Markup, html};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, CARD_TEXT_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, format_currency,
    },
};

use super::model::Transaction;

/// The max number of graphemes to display in a transaction card's
/// description before truncating and displaying an ellipsis.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// Card dates render as MM/DD/YYYY.
const CARD_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[month]/[day]/[year]");

/// Render the transactions page.
///
/// The page itself carries no data: the card grid fetches itself from the
/// fragment endpoint when the page loads, and the filter form, sort
/// selector, and add button re-fetch or extend it from there. Failed
/// requests land in the alert container via `hx-target-error`.
pub(crate) fn transactions_view() -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-5xl space-y-4"
            {
                div id="alert-container" {}

                header class="flex flex-col items-center"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    button
                        class=(BUTTON_PRIMARY_STYLE)
                        hx-post=(endpoints::ADD_TRANSACTION)
                        hx-target="#transaction-grid"
                        hx-swap="beforeend"
                        hx-target-error="#alert-container"
                    {
                        "Add Transaction"
                    }
                }

                (filter_form())

                (sort_selector())

                div
                    id="transaction-grid"
                    class="grid grid-cols-1 md:grid-cols-3 gap-4"
                    hx-get=(endpoints::TRANSACTION_LIST_FRAGMENT)
                    hx-trigger="load"
                    hx-target-error="#alert-container"
                {}
            }
        }
    };

    base("Transactions", &content)
}

/// The date range form. Submitting it re-fetches the grid with both dates
/// plus whatever sort is currently selected.
fn filter_form() -> Markup {
    html! {
        section
        {
            h3 class="text-lg font-bold" { "Filter" }

            form
                class="flex flex-wrap items-end gap-4"
                hx-get=(endpoints::TRANSACTION_LIST_FRAGMENT)
                hx-target="#transaction-grid"
                hx-target-error="#alert-container"
                hx-include="#sortBy"
            {
                // Marks this request as a filter submission: the server
                // rejects it unless both dates are present.
                input type="hidden" name="requireDates" value="true";

                div
                {
                    label for="startingDate" class=(FORM_LABEL_STYLE) { "Starting Date" }

                    input
                        type="date"
                        id="startingDate"
                        name="startingDate"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="endingDate" class=(FORM_LABEL_STYLE) { "Ending Date" }

                    input
                        type="date"
                        id="endingDate"
                        name="endingDate"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filter" }
            }
        }
    }
}

/// The sort selector. Changing it re-fetches the grid immediately, carrying
/// the date inputs along so an active filter stays applied.
fn sort_selector() -> Markup {
    html! {
        section
        {
            h3 class="text-lg font-bold" { "Sort By" }

            div class="flex items-center gap-2"
            {
                label for="sortBy" class=(FORM_LABEL_STYLE) { "Sort Transactions" }

                select
                    id="sortBy"
                    name="sortBy"
                    class=(FORM_TEXT_INPUT_STYLE)
                    hx-get=(endpoints::TRANSACTION_LIST_FRAGMENT)
                    hx-trigger="change"
                    hx-target="#transaction-grid"
                    hx-target-error="#alert-container"
                    hx-include="#startingDate, #endingDate"
                {
                    option value="" { "None" }
                    option value="date" { "Date" }
                    option value="amount" { "Amount" }
                }
            }
        }
    }
}

/// Render one card per transaction, in the order given.
pub(crate) fn transaction_cards(transactions: &[Transaction]) -> Markup {
    html! {
        @for transaction in transactions {
            (transaction_card(transaction))
        }
    }
}

/// Render a single transaction as a card showing its ID, description,
/// amount, and date.
pub(crate) fn transaction_card(transaction: &Transaction) -> Markup {
    html! {
        div class=(CARD_STYLE) data-transaction-card=(transaction.id)
        {
            h2 class="text-lg font-bold" { "Transaction " (transaction.id) }

            p class=(CARD_TEXT_STYLE) { (truncate_description(&transaction.description)) }

            p class=(CARD_TEXT_STYLE) { (format_currency(transaction.amount)) }

            p class=(CARD_TEXT_STYLE) { (format_card_date(transaction.date)) }
        }
    }
}

fn truncate_description(description: &str) -> String {
    let mut graphemes = description.graphemes(true);
    let truncated: String = graphemes.by_ref().take(MAX_DESCRIPTION_GRAPHEMES).collect();

    if graphemes.next().is_some() {
        format!("{truncated}…")
    } else {
        truncated
    }
}

fn format_card_date(date: OffsetDateTime) -> String {
    date.format(CARD_DATE_FORMAT)
        .unwrap_or_else(|_| date.date().to_string())
}
