//! Root document component - the complete HTML page

use super::LandingView;
use crate::styles::LANDING_CSS;
use crate::types::LandingContent;
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(
    /// Copy displayed by the page
    content: LandingContent,
) -> impl IntoView {
    let page_title = content.title.clone();

    view! {
        <html lang="it">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{page_title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <LandingView content=content />
            </body>
        </html>
    }
}
