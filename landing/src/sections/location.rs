use horizon_listing::PropertyListing;
use horizon_listing::data::copy;
use horizon_listing::icons::{ICON_CHEVRON_RIGHT, ICON_MAP_PIN};
use horizon_listing::layout;
use horizon_listing::motion::Reveal;
use horizon_listing::nav::SectionId;
use leptos::prelude::*;

use super::Icon;

#[component]
pub fn Location(listing: &'static PropertyListing) -> impl IntoView {
    let hood = &listing.neighborhood;
    let map_url = layout::map_search_url(&listing.contact);

    view! {
        <section id=SectionId::Location.as_str() class="location">
            <div class="container location-grid">
                <div class=Reveal::SlideLeft.class()>
                    <p class="eyebrow">{copy::LOCATION_EYEBROW}</p>
                    <h2 class="location-title">{hood.title.as_str()}</h2>
                    <p class="location-text">{hood.description.as_str()}</p>
                    <div class="location-address">
                        <Icon path=ICON_MAP_PIN />
                        <p>{listing.contact.address.as_str()}</p>
                    </div>
                    <a href=map_url target="_blank" rel="noopener noreferrer" class="map-link">
                        {copy::MAP_LINK}
                        <Icon path=ICON_CHEVRON_RIGHT size="16" />
                    </a>
                </div>

                <div class=format!("location-media {}", Reveal::SlideRight.class())>
                    <img src=hood.image.as_str() alt="Neighborhood" referrerpolicy="no-referrer" />
                </div>
            </div>
        </section>
    }
}
