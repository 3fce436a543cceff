use horizon_listing::data::copy;
use horizon_listing::icons::ICON_ARROW_RIGHT;
use horizon_listing::nav::SectionId;
use horizon_listing::PropertyListing;
use leptos::prelude::*;

use super::Icon;
use crate::navigator::Navigator;

#[component]
pub fn Hero(listing: &'static PropertyListing, nav: Navigator) -> impl IntoView {
    let price = (!listing.price.is_empty()).then(|| {
        view! { <p class="hero-price hero-enter hero-enter-3">{listing.price.as_str()}</p> }
    });

    view! {
        <section id=SectionId::Overview.as_str() class="hero">
            <div class="hero-media">
                <img
                    src=listing.hero_image.as_str()
                    alt="Hero"
                    class="hero-image"
                    referrerpolicy="no-referrer"
                />
                <div class="hero-shade"></div>
            </div>

            <div class="hero-content">
                <p class="hero-location hero-enter hero-enter-1">{listing.location.as_str()}</p>
                <h1 class="hero-title hero-enter hero-enter-2">{listing.tagline.as_str()}</h1>
                {price}
                <div class="hero-actions hero-enter hero-enter-4">
                    <button class="btn btn-light" on:click=move |_| { nav.go(SectionId::Contact); }>
                        {copy::HERO_CTA}
                        <Icon path=ICON_ARROW_RIGHT size="16" class="btn-arrow" />
                    </button>
                </div>
            </div>

            <div class="hero-scroll-cue">
                <div class="hero-scroll-line"></div>
            </div>
        </section>
    }
}
