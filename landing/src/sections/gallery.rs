use horizon_listing::PropertyListing;
use horizon_listing::data::copy;
use horizon_listing::layout::{self, GalleryTile};
use horizon_listing::motion::Reveal;
use horizon_listing::nav::SectionId;
use leptos::prelude::*;

#[component]
pub fn Gallery(listing: &'static PropertyListing) -> impl IntoView {
    view! {
        <section id=SectionId::Gallery.as_str() class="gallery">
            <div class="container">
                <div class="gallery-header">
                    <p class="eyebrow">{copy::GALLERY_EYEBROW}</p>
                    <h2 class="section-title">{copy::GALLERY_TITLE}</h2>
                </div>

                <div class="gallery-grid">
                    {layout::gallery_tiles(listing).into_iter().map(tile_view).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

fn tile_view(tile: GalleryTile<'static>) -> impl IntoView {
    let class = if tile.wide {
        format!("gallery-tile gallery-tile-wide {}", Reveal::Zoom.class())
    } else {
        format!("gallery-tile {}", Reveal::Zoom.class())
    };

    view! {
        <div class=class>
            <img src=tile.src alt=tile.alt referrerpolicy="no-referrer" />
        </div>
    }
}
