//! Page stylesheet, injected once by `App`.

/// Complete CSS for the landing page.
///
/// Palette: warm paper background, near-black ink, champagne gold accent.
/// Serif display type for headings, sans for body copy.
pub const LANDING_CSS: &str = r#"
:root {
    --ink: #1a1a1a;
    --ink-60: rgba(26, 26, 26, 0.6);
    --ink-40: rgba(26, 26, 26, 0.4);
    --hairline: rgba(0, 0, 0, 0.05);
    --paper: #f9f7f2;
    --white: #ffffff;
    --gold: #c5a059;
    --serif: "Cormorant Garamond", "Noto Serif TC", Georgia, serif;
    --sans: "Inter", "Noto Sans TC", system-ui, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: var(--sans);
    color: var(--ink);
    background: var(--white);
    -webkit-font-smoothing: antialiased;
}

::selection { background: rgba(197, 160, 89, 0.3); }

h1, h2, h3 { font-family: var(--serif); font-weight: 400; margin: 0; }
p { margin: 0; }
button { font: inherit; color: inherit; background: none; border: 0; cursor: pointer; padding: 0; }
img { display: block; }

.container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.eyebrow { font-size: 0.75rem; letter-spacing: 0.2em; color: var(--gold); font-weight: 600; margin-bottom: 1rem; }
.section-title { font-size: 3rem; line-height: 1.15; }

/* ------------------------------------------------------------------ nav */

.nav {
    position: fixed; top: 0; left: 0; width: 100%; z-index: 50;
    display: flex; justify-content: space-between; align-items: center;
    padding: 1rem 1.5rem;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(4px);
    border-bottom: 1px solid var(--hairline);
}
.nav-brand { font-family: var(--serif); font-size: 1.5rem; font-weight: 600; letter-spacing: -0.05em; }
.nav-links { display: none; gap: 2rem; align-items: center; }
.nav-link { font-size: 0.75rem; letter-spacing: 0.2em; font-weight: 500; transition: color 0.2s; }
.nav-link:hover { color: var(--gold); }
.nav-cta { background: var(--ink); color: var(--white); padding: 0.5rem 1.5rem; font-size: 0.75rem; letter-spacing: 0.2em; transition: background 0.3s; }
.nav-cta:hover { background: var(--gold); }
.nav-toggle { display: inline-flex; }

.mobile-menu {
    position: fixed; inset: 0; z-index: 40;
    background: var(--white);
    padding: 6rem 2rem 0;
    animation: menu-drop 0.25s ease-out;
}
.mobile-menu-inner { display: flex; flex-direction: column; gap: 2rem; }
.mobile-link { font-family: var(--serif); font-size: 1.5rem; text-align: left; border-bottom: 1px solid var(--hairline); padding-bottom: 1rem; }

@keyframes menu-drop {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}

/* ----------------------------------------------------------------- hero */

.hero { position: relative; height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden; }
.hero-media { position: absolute; inset: 0; z-index: 0; }
.hero-image { width: 100%; height: 100%; object-fit: cover; transform: scale(1.05); animation: slow-zoom 20s ease-in-out infinite alternate; }
.hero-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.4); }
.hero-content { position: relative; z-index: 10; text-align: center; color: var(--white); padding: 0 1.5rem; max-width: 56rem; }
.hero-location { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.4em; margin-bottom: 1rem; font-weight: 500; }
.hero-title { font-size: 3.75rem; line-height: 1.15; margin-bottom: 1.5rem; }
.hero-price { font-size: 0.875rem; letter-spacing: 0.2em; margin-bottom: 2rem; opacity: 0.85; }
.hero-actions { display: flex; justify-content: center; }
.hero-scroll-cue { position: absolute; bottom: 2.5rem; left: 50%; transform: translateX(-50%); animation: bounce 1s infinite; }
.hero-scroll-line { width: 1px; height: 4rem; background: rgba(255, 255, 255, 0.3); }

.hero-enter { opacity: 0; animation: enter-up 0.6s ease-out forwards; }
.hero-enter-1 { animation-delay: 0.2s; }
.hero-enter-2 { animation-delay: 0.4s; }
.hero-enter-3 { animation-delay: 0.6s; }
.hero-enter-4 { animation-delay: 0.8s; }

.btn { display: inline-flex; align-items: center; gap: 0.5rem; padding: 1rem 2.5rem; font-size: 0.875rem; letter-spacing: 0.2em; transition: all 0.5s; }
.btn-light { background: var(--white); color: var(--ink); }
.btn-light:hover { background: var(--gold); color: var(--white); }
.btn-arrow { transition: transform 0.3s; }
.btn:hover .btn-arrow { transform: translateX(4px); }

@keyframes slow-zoom {
    0% { transform: scale(1); }
    100% { transform: scale(1.1); }
}
@keyframes enter-up {
    from { opacity: 0; transform: translateY(24px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes bounce {
    0%, 100% { transform: translate(-50%, -25%); }
    50% { transform: translate(-50%, 0); }
}

/* ---------------------------------------------------------------- stats */

.stats { padding: 6rem 0; border-bottom: 1px solid var(--hairline); }
.stats-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 3rem; text-align: center; }
.stat-label { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.2em; color: rgba(26, 26, 26, 0.5); margin-bottom: 0.5rem; }
.stat-value { font-family: var(--serif); font-size: 1.875rem; }

/* ---------------------------------------------------------- description */

.description { padding: 8rem 0; background: var(--paper); }
.description-inner { max-width: 56rem; margin: 0 auto; padding: 0 1.5rem; text-align: center; }
.description-text { font-size: 2.5rem; line-height: 1.35; margin-bottom: 2.5rem; text-wrap: balance; }
.divider { width: 5rem; height: 1px; background: var(--gold); margin: 0 auto; }

/* ------------------------------------------------------------ amenities */

.amenities { padding: 8rem 0; }
.amenities-header { display: flex; flex-direction: column; justify-content: space-between; align-items: flex-start; gap: 2rem; margin-bottom: 5rem; }
.amenities-header > div { max-width: 36rem; }
.amenities-intro { color: var(--ink-60); max-width: 24rem; }
.amenities-grid { display: grid; grid-template-columns: 1fr; gap: 1px; background: var(--hairline); border: 1px solid var(--hairline); }
.amenity-card { background: var(--white); padding: 3rem; transition: background 0.3s; }
.amenity-card:hover { background: var(--paper); }
.amenity-icon { color: var(--gold); margin-bottom: 1.5rem; min-height: 24px; transition: transform 0.5s; }
.amenity-card:hover .amenity-icon { transform: scale(1.1); }
.amenity-name { font-size: 1.25rem; margin-bottom: 0.5rem; }
.amenity-blurb { font-size: 0.875rem; color: rgba(26, 26, 26, 0.5); line-height: 1.6; }

/* -------------------------------------------------------------- gallery */

.gallery { padding: 8rem 0; background: var(--ink); color: var(--white); }
.gallery-header { text-align: center; margin-bottom: 5rem; }
.gallery-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
.gallery-tile { position: relative; overflow: hidden; aspect-ratio: 4 / 3; }
.gallery-tile img { width: 100%; height: 100%; object-fit: cover; transition: transform 1s; }
.gallery-tile img:hover { transform: scale(1.1); }

/* ------------------------------------------------------------- location */

.location { padding: 8rem 0; background: var(--paper); }
.location-grid { display: grid; grid-template-columns: 1fr; gap: 5rem; align-items: center; }
.location-title { font-size: 3rem; margin-bottom: 2rem; }
.location-text { font-size: 1.125rem; color: rgba(26, 26, 26, 0.7); line-height: 1.7; margin-bottom: 2.5rem; }
.location-address { display: flex; align-items: flex-start; gap: 1rem; margin-bottom: 1.5rem; color: rgba(26, 26, 26, 0.8); }
.location-address svg { color: var(--gold); flex-shrink: 0; margin-top: 0.25rem; }
.map-link { display: inline-flex; align-items: center; gap: 0.5rem; font-size: 0.75rem; letter-spacing: 0.2em; font-weight: 700; color: inherit; text-decoration: none; transition: color 0.2s; }
.map-link:hover { color: var(--gold); }
.location-media { position: relative; aspect-ratio: 1 / 1; overflow: hidden; border-radius: 1rem; box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
.location-media img { width: 100%; height: 100%; object-fit: cover; }

/* -------------------------------------------------------------- contact */

.contact { padding: 8rem 0; }
.contact-grid { display: grid; grid-template-columns: 1fr; gap: 5rem; }
.contact-intro { color: var(--ink-60); margin: 2rem 0 3rem; font-size: 1.125rem; }
.contact-lines { display: flex; flex-direction: column; gap: 1.5rem; }
.contact-line { display: flex; align-items: center; gap: 1rem; }
.contact-badge { width: 3rem; height: 3rem; border-radius: 9999px; background: var(--paper); display: flex; align-items: center; justify-content: center; color: var(--gold); }
.contact-caption { font-size: 0.75rem; letter-spacing: 0.2em; color: var(--ink-40); }
.contact-value { font-weight: 500; }

.inquiry-form { display: flex; flex-direction: column; gap: 1.5rem; padding: 2.5rem; border-radius: 1rem; background: rgba(255, 255, 255, 0.7); backdrop-filter: blur(12px); border: 1px solid rgba(255, 255, 255, 0.3); box-shadow: 0 10px 40px rgba(0, 0, 0, 0.06); }
.form-row { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
.form-field { display: flex; flex-direction: column; gap: 0.5rem; }
.form-label { font-size: 0.75rem; letter-spacing: 0.2em; font-weight: 600; }
.form-input { width: 100%; background: var(--paper); border: 0; padding: 1rem; outline: none; font: inherit; transition: box-shadow 0.2s; }
.form-input:focus { box-shadow: 0 0 0 1px var(--gold); }
.form-textarea { resize: none; }
.form-submit { width: 100%; background: var(--ink); color: var(--white); padding: 1.25rem 0; font-size: 0.75rem; letter-spacing: 0.2em; font-weight: 700; transition: background 0.5s; }
.form-submit:hover { background: var(--gold); }

/* --------------------------------------------------------------- footer */

.footer { padding: 3rem 0; background: var(--paper); border-top: 1px solid var(--hairline); }
.footer-inner { display: flex; flex-direction: column; justify-content: space-between; align-items: center; gap: 2rem; }
.footer-brand { font-family: var(--serif); font-size: 1.25rem; font-weight: 600; letter-spacing: -0.05em; }
.footer-copyright, .footer-link { font-size: 0.75rem; letter-spacing: 0.2em; color: var(--ink-40); }
.footer-links { display: flex; gap: 1.5rem; }
.footer-link:hover { color: var(--gold); }

/* --------------------------------------------------------------- reveal */

.reveal { transition: opacity 0.6s ease-out var(--reveal-delay, 0ms), transform 0.6s ease-out var(--reveal-delay, 0ms); }
.amenity-card.reveal { transition: opacity 0.6s ease-out var(--reveal-delay, 0ms), transform 0.6s ease-out var(--reveal-delay, 0ms), background 0.3s; }
.reveal:not(.visible) { opacity: 0; }
.reveal-fade-up:not(.visible) { transform: translateY(20px); }
.reveal-zoom:not(.visible) { transform: scale(0.95); }
.reveal-slide-left:not(.visible) { transform: translateX(-30px); }
.reveal-slide-right:not(.visible) { transform: translateX(30px); }

/* ------------------------------------------------------------ wide view */

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-toggle, .mobile-menu { display: none; }
    .hero-title { font-size: 6rem; }
    .stats-grid { grid-template-columns: repeat(4, 1fr); }
    .description-text { font-size: 3rem; }
    .amenities-header { flex-direction: row; align-items: flex-end; }
    .amenities-grid { grid-template-columns: repeat(3, 1fr); }
    .gallery-grid { grid-template-columns: repeat(2, 1fr); }
    .gallery-tile-wide { grid-column: span 2; aspect-ratio: 21 / 9; }
    .form-row { grid-template-columns: repeat(2, 1fr); }
    .footer-inner { flex-direction: row; }
}

@media (min-width: 1024px) {
    .location-grid, .contact-grid { grid-template-columns: repeat(2, 1fr); }
}
"#;

#[cfg(test)]
mod tests {
    use super::LANDING_CSS;
    use horizon_listing::motion::DELAY_PROPERTY;

    fn rule(selector: &str) -> Option<(usize, &'static str)> {
        let start = LANDING_CSS.find(&format!("\n{selector} {{"))?;
        let body = &LANDING_CSS[start..];
        let end = body.find('}')?;
        Some((start, &body[..end]))
    }

    #[test]
    fn reveal_delay_only_applies_to_entry_transition() {
        let (_, reveal) = rule(".reveal").expect(".reveal rule");
        assert!(reveal.contains(&format!("var({DELAY_PROPERTY}")));
        assert!(!LANDING_CSS.contains("transition-delay"));
    }

    #[test]
    fn amenity_hover_keeps_its_background_fade() {
        let (reveal_at, _) = rule(".reveal").expect(".reveal rule");
        let (card_at, card) = rule(".amenity-card.reveal").expect("combined rule");
        assert!(card_at > reveal_at);
        assert!(card.contains("background 0.3s"));
        assert!(card.contains("opacity"));
    }
}
