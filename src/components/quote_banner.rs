//! Quote Banner Component
//!
//! Quote of the day from the backup API, shown under the hero text.

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::config::QUOTES_LIMIT;
use crate::context::use_app_context;
use crate::models::Quote;

/// Pick a quote that stays the same for a whole day
fn quote_for_day(quotes: &[Quote], day_of_year: u32) -> Option<&Quote> {
    if quotes.is_empty() {
        return None;
    }
    quotes.get(day_of_year as usize % quotes.len())
}

/// Renders nothing until a quote has loaded, or at all if the fetch fails
#[component]
pub fn QuoteBanner() -> impl IntoView {
    let ctx = use_app_context();
    let quote = RwSignal::new(None::<Quote>);

    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            match client.fetch_quotes(Some(QUOTES_LIMIT)).await {
                Ok(quotes) => quote.set(quote_for_day(&quotes, Utc::now().ordinal()).cloned()),
                Err(e) => warn!("[Quote] Unavailable: {}", e),
            }
        });
    });

    view! {
        {move || quote.get().map(|q| view! {
            <blockquote class="quote-banner">
                <p>{format!("\u{201c}{}\u{201d}", q.quote)}</p>
                <cite>{format!("- {}", q.author)}</cite>
            </blockquote>
        })}
    }
}
