use std::time::Duration;

use horizon_listing::PropertyListing;
use horizon_listing::layout;
use horizon_listing::motion::{Reveal, stagger_delay, transition_style};
use leptos::prelude::*;

/// Headline figures strip under the hero.
#[component]
pub fn Stats(listing: &'static PropertyListing, stagger: Duration) -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container stats-grid">
                {layout::stat_tiles(listing)
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <div
                                class=Reveal::FadeUp.class()
                                style=transition_style(stagger_delay(tile.index, stagger))
                            >
                                <p class="stat-label">{tile.label}</p>
                                <p class="stat-value">{tile.value}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
