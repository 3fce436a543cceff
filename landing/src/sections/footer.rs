use horizon_listing::PropertyListing;
use horizon_listing::data::copy;
use horizon_listing::layout;
use leptos::prelude::*;

#[component]
pub fn Footer(listing: &'static PropertyListing, year: u16) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">{layout::brand_mark(&listing.name)}</div>
                <p class="footer-copyright">{layout::copyright_line(year, &listing.name)}</p>
                <div class="footer-links">
                    // Placeholders; there are no policy pages yet
                    {copy::FOOTER_LINKS
                        .iter()
                        .map(|&(key, label)| {
                            view! { <button class="footer-link" data-link=key>{label}</button> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
