use leptos::prelude::*;

/// Inline stroke icon from a 24×24 path.
///
/// An empty `path` renders nothing, which is how unknown amenity icon keys
/// drop out of the page.
#[component]
#[allow(clippy::unused_unit)]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    if path.is_empty() {
        return view! {}.into_any();
    }

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            <path d=path></path>
        </svg>
    }
    .into_any()
}
