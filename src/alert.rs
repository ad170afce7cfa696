//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the `#alert-container` element of the base layout, either as the
//! target of an error response (`hx-target-error`) or as an out-of-band swap.

use maud::{Markup, html};

/// An alert message with a short headline and an optional longer explanation.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class=(container_style) role="alert"
                {
                    div class="flex justify-between items-start"
                    {
                        div
                        {
                            span class="font-medium" { (message) }

                            @if !details.is_empty() {
                                p class="mt-1" { (details) }
                            }
                        }

                        button
                            type="button"
                            class="ms-3 font-bold"
                            aria-label="Dismiss"
                            onclick="this.closest('#alert-container').classList.add('hidden')"
                        {
                            "×"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn renders_error_message_and_details() {
        let alert = Alert::Error {
            message: "Something went wrong".to_owned(),
            details: "Check the server logs.".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let role = Selector::parse("[role='alert']").unwrap();
        let text = html
            .select(&role)
            .next()
            .expect("No alert found")
            .text()
            .collect::<String>();
        assert!(text.contains("Something went wrong"));
        assert!(text.contains("Check the server logs."));
    }

    #[test]
    fn omits_empty_details() {
        let alert = Alert::Success {
            message: "Done".to_owned(),
            details: String::new(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let p = Selector::parse("p").unwrap();
        assert_eq!(html.select(&p).count(), 0);
    }
}
