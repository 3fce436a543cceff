use horizon_listing::icons::{ICON_CLOSE, ICON_MENU};
use horizon_listing::layout;
use horizon_listing::nav::{CTA_LABEL, DESKTOP_NAV, MOBILE_NAV, NavItem, SectionId};
use horizon_listing::PropertyListing;
use leptos::prelude::*;

use super::Icon;
use crate::navigator::Navigator;

#[component]
pub fn Nav(listing: &'static PropertyListing, nav: Navigator) -> impl IntoView {
    let brand = layout::brand_mark(&listing.name);

    view! {
        <nav class="nav">
            <div class="nav-brand">{brand}</div>

            // Desktop bar
            <div class="nav-links">
                {DESKTOP_NAV
                    .iter()
                    .map(|&NavItem { id, label }| {
                        view! {
                            <button class="nav-link" on:click=move |_| { nav.go(id); }>
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button class="nav-cta" on:click=move |_| { nav.go(SectionId::Contact); }>
                    {CTA_LABEL}
                </button>
            </div>

            <button class="nav-toggle" aria-label="menu" on:click=move |_| nav.toggle_menu()>
                {move || {
                    if nav.menu_open() {
                        view! { <Icon path=ICON_CLOSE /> }
                    } else {
                        view! { <Icon path=ICON_MENU /> }
                    }
                }}
            </button>
        </nav>

        // Mobile overlay, only mounted while open
        <Show when=move || nav.menu_open()>
            <div class="mobile-menu">
                <div class="mobile-menu-inner">
                    {MOBILE_NAV
                        .iter()
                        .map(|&NavItem { id, label }| {
                            view! {
                                <button class="mobile-link" on:click=move |_| { nav.go(id); }>
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </Show>
    }
}
