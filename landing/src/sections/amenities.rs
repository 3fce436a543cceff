use std::time::Duration;

use horizon_listing::PropertyListing;
use horizon_listing::data::copy;
use horizon_listing::layout::{self, AmenityCard};
use horizon_listing::motion::{Reveal, stagger_delay, transition_style};
use horizon_listing::nav::SectionId;
use leptos::prelude::*;

use super::Icon;

#[component]
pub fn Amenities(listing: &'static PropertyListing, stagger: Duration) -> impl IntoView {
    view! {
        <section id=SectionId::Amenities.as_str() class="amenities">
            <div class="container">
                <div class="amenities-header">
                    <div>
                        <p class="eyebrow">{copy::AMENITIES_EYEBROW}</p>
                        <h2 class="section-title">{copy::AMENITIES_TITLE}</h2>
                    </div>
                    <p class="amenities-intro">{copy::AMENITIES_INTRO}</p>
                </div>

                <div class="amenities-grid">
                    {layout::amenity_cards(listing)
                        .into_iter()
                        .map(|card| view! { <AmenityCardView card=card stagger=stagger /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AmenityCardView(card: AmenityCard<'static>, stagger: Duration) -> impl IntoView {
    view! {
        <div
            class=format!("amenity-card {}", Reveal::Fade.class())
            style=transition_style(stagger_delay(card.index, stagger))
            data-icon=card.icon_key
        >
            <div class="amenity-icon">
                <Icon path=card.glyph />
            </div>
            <h3 class="amenity-name">{card.name}</h3>
            <p class="amenity-blurb">{copy::AMENITY_BLURB}</p>
        </div>
    }
}
