//! The alert banner shown when a backend request fails.
//!
//! Every failure the user can see collapses to a single message rendered
//! into the page's alert container. Alerts are not dismissable; they are
//! cleared out-of-band by the next successful request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// A message to display in the page's alert container.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something went wrong; shown in red.
    Error {
        /// The message to display.
        message: String,
    },
}

impl Alert {
    /// Create a new error alert.
    pub fn error(message: impl Into<String>) -> Self {
        Alert::Error {
            message: message.into(),
        }
    }

    /// Render the alert as markup.
    pub fn into_html(self) -> Markup {
        match self {
            Alert::Error { message } => html! {
                div
                    role="alert"
                    data-alert-level="error"
                    class="w-full p-4 mb-4 text-sm rounded text-red-800 bg-red-100 \
                        dark:bg-gray-800 dark:text-red-400"
                {
                    (message)
                }
            },
        }
    }

    /// Render the alert as an HTTP response with `status_code`.
    ///
    /// Elements that issue fragment requests set
    /// `hx-target-error="#alert-container"`, so a non-2xx status routes this
    /// markup into the banner instead of the element's normal target.
    pub fn into_response(self, status_code: StatusCode) -> Response {
        (status_code, self.into_html()).into_response()
    }
}

/// Markup that clears the alert container via an out-of-band swap.
///
/// Successful fragment responses append this so that a stale error banner
/// disappears as soon as a request succeeds again.
pub fn clear_alert_container() -> Markup {
    html! {
        div id="alert-container" hx-swap-oob="innerHTML" {}
    }
}
