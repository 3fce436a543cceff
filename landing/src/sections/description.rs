use horizon_listing::PropertyListing;
use horizon_listing::motion::Reveal;
use leptos::prelude::*;

#[component]
pub fn Description(listing: &'static PropertyListing) -> impl IntoView {
    view! {
        <section class="description">
            <div class="description-inner">
                <h2 class=format!("description-text {}", Reveal::Fade.class())>
                    {listing.description.as_str()}
                </h2>
                <div class="divider"></div>
            </div>
        </section>
    }
}
