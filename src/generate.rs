//! HTML page generation.
//!
//! Stage 2 of the taplist pipeline. Takes the sorted record set and site
//! config and assembles the complete page as one string; the caller writes
//! it in a single operation, so a failure anywhere here leaves nothing
//! half-written on disk.
//!
//! ## Page Structure
//!
//! ```text
//! <head>            stylesheet link + embedded CSS + title
//! <h1> + branding   from SiteConfig
//! <section> × 6     fixed category order, each a <dl> of records
//! <section>         map embed
//! <footer>          attribution, build timestamp, © range
//! ```
//!
//! ## Record Fragments
//!
//! Each record renders as `<dt id="{slug}">[badge ]{name}</dt>` followed by a
//! `<dd><ul>` of sub-blocks. A sub-block is one `<li>` of inline fields with
//! a `<span class="separator"> | </span>` between consecutive fields; a
//! sub-block whose every field is absent emits no `<li>` at all. Sub-blocks
//! in order: location/contact, social, beer community, online store,
//! food/drink, notes.
//!
//! The emitted class names (`map`, `phone`, `social`, `store`, `food`,
//! `on_premise`, `no`, `closed`, `in_planning`, `status`, `separator`) are a
//! styling contract — `static/style.css` and downstream consumers key off
//! them.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Interpolated record fields are auto-escaped; note strings are the one
//! deliberate exception (trusted markup from the data file).

use crate::config::{FooterConfig, MapConfig, SiteConfig};
use crate::format::{phone_display, status_badge};
use crate::types::{MissingFieldError, Record};
use chrono::{DateTime, Datelike, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

/// A category section: the tag records are filtered by, and the heading.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub tag: &'static str,
    pub title: &'static str,
}

/// Page sections in their fixed display order.
pub const SECTIONS: &[Section] = &[
    Section {
        tag: "craft_brewery",
        title: "Independent Craft Breweries",
    },
    Section {
        tag: "chain_brewery",
        title: "Chain Breweries",
    },
    Section {
        tag: "craft_brewery_in_planning",
        title: "Independent Craft Breweries Opening Soon",
    },
    Section {
        tag: "bottle_shop",
        title: "Notable Bottle Shops",
    },
    Section {
        tag: "bar",
        title: "Notable Bars",
    },
    Section {
        tag: "restaurant",
        title: "Notable Restaurants",
    },
];

const CSS_STATIC: &str = include_str!("../static/style.css");

// ============================================================================
// Record components
// ============================================================================

/// Join present fields into one inline `<li>`, separator glyph between
/// consecutive fields only. Zero fields produce no markup at all — the list
/// item is never emitted for an empty sub-block.
fn inline_fields(fields: &[Markup]) -> Option<Markup> {
    if fields.is_empty() {
        return None;
    }
    Some(html! {
        li {
            @for (i, field) in fields.iter().enumerate() {
                @if i > 0 {
                    span.separator { " | " }
                }
                (field)
            }
        }
    })
}

/// Icon link shared by the social and beer-community sub-blocks.
///
/// `invert` marks logos that need color inversion in dark mode.
fn icon_link(
    href: &str,
    platform: &'static str,
    logo: &'static str,
    alt: &'static str,
    invert: bool,
    label: &'static str,
) -> Markup {
    html! {
        a class={ "social " (platform) } href=(href) {
            img src={ "logos/" (logo) } alt=(alt) class=[invert.then_some("invert")];
            " " (label)
        }
    }
}

/// Icon link whose logo is a raster with a `@2x` srcset variant.
fn icon_link_2x(
    href: &str,
    platform: &'static str,
    logo: &'static str,
    alt: &'static str,
    label: &'static str,
) -> Markup {
    html! {
        a class={ "social " (platform) } href=(href) {
            img src={ "logos/" (logo) ".png" }
                srcset={ "logos/" (logo) ".png 1x, logos/" (logo) "@2x.png 2x" }
                alt=(alt);
            " " (label)
        }
    }
}

/// Render one record into its `<dt>`/`<dd>` fragment.
///
/// Callers validate first (see [`render_section`]); a missing name or slug
/// renders as an empty string rather than panicking.
fn render_record(rec: &Record) -> Markup {
    let name = rec.name.as_deref().unwrap_or_default();
    let slug = rec.slug.as_deref().unwrap_or_default();
    let badge = status_badge(rec.open_status.as_deref());

    let mut location = Vec::new();
    // An address renders only when it can link somewhere. Unlinked plain-text
    // addresses are dropped on purpose.
    if let (Some(address), Some(maps_url)) = (&rec.address, &rec.google_maps_url) {
        location.push(html! { a class="map" href=(maps_url) { (address) } });
    }
    if let Some(phone) = &rec.phone_number {
        location.push(html! {
            a class="phone" href={ "tel://" (phone) } { (phone_display(phone)) }
        });
    }

    let mut social = Vec::new();
    if let Some(url) = &rec.website {
        social.push(html! { a class="social website" href=(url) { "Website" } });
    }
    if let Some(handle) = &rec.twitter_handle {
        social.push(icon_link(
            &format!("https://twitter.com/{handle}"),
            "twitter",
            "x.svg",
            "X (Twitter) Logo",
            true,
            "X (Twitter)",
        ));
    }
    if let Some(url) = &rec.facebook_url {
        social.push(icon_link(url, "facebook", "facebook.svg", "Facebook Logo", false, "Facebook"));
    }
    // Instagram visibility keys off facebook_url, not instagram_handle.
    // Suspect, but the published page depends on it; see DESIGN.md before
    // changing the gate.
    if rec.facebook_url.is_some() {
        let handle = rec.instagram_handle.as_deref().unwrap_or_default();
        social.push(icon_link(
            &format!("https://instagram.com/{handle}"),
            "instagram",
            "instagram.svg",
            "Instagram Logo",
            true,
            "Instagram",
        ));
    }
    if let Some(url) = &rec.yelp_url {
        social.push(icon_link(url, "yelp", "yelp.svg", "Yelp Logo", false, "Yelp"));
    }
    if let Some(url) = &rec.trip_advisor_url {
        social.push(icon_link(
            url,
            "trip_advisor",
            "trip_advisor.svg",
            "Trip Advisor Logo",
            true,
            "Trip Advisor",
        ));
    }

    let mut beer = Vec::new();
    if let Some(url) = &rec.untappd_url {
        beer.push(icon_link(url, "untappd", "untappd.svg", "Untappd Logo", false, "Untappd"));
    }
    if let Some(url) = &rec.beer_advocate_url {
        beer.push(icon_link_2x(url, "beer_advocate", "beer_advocate", "Beer Advocate Logo", "Beer Advocate"));
    }
    if let Some(url) = &rec.rate_beer_url {
        beer.push(icon_link(url, "ratebeer", "ratebeer.svg", "RateBeer Logo", false, "RateBeer"));
    }
    if let Some(url) = &rec.brewery_db_url {
        beer.push(icon_link_2x(url, "brewerydb", "brewerydb", "BreweryDB Logo", "BreweryDB"));
    }

    let mut store = Vec::new();
    if let Some(url) = &rec.store_url {
        store.push(html! { a class="store" href=(url) { "Online Store" } });
    }

    let mut amenities = Vec::new();
    if let Some(food) = rec.food {
        amenities.push(if food {
            html! { span class="food" { "Always serves food" } }
        } else {
            html! { span class="no food" { "No food service" } }
        });
    }
    if let Some(on_premise) = rec.drink_on_premise {
        amenities.push(if on_premise {
            html! { span class="on_premise" { "Drink on premise" } }
        } else {
            html! { span class="no on_premise" { "No drinking on premise" } }
        });
    }

    let sub_blocks = [&location, &social, &beer, &store, &amenities]
        .into_iter()
        .filter_map(|fields| inline_fields(fields));

    html! {
        dt id=(slug) {
            @if let Some(badge) = &badge {
                span class=(badge.class) { (badge.label) ": " }
                " "
            }
            (name)
        }
        dd {
            ul {
                @for block in sub_blocks {
                    (block)
                }
                @if let Some(notes) = rec.notes.as_deref().filter(|n| !n.is_empty()) {
                    li {
                        strong { "Notes:" }
                        ul {
                            // Notes are trusted markup authored in the data file
                            @for note in notes {
                                li { (PreEscaped(note)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Sections and page assembly
// ============================================================================

/// Render one category section.
///
/// Every record is validated on each section pass, matching or not, so a
/// broken record aborts the run no matter which categories it names. A
/// category with zero matches still emits its titled container.
pub fn render_section(section: &Section, records: &[Record]) -> Result<Markup, GenerateError> {
    let mut entries = Vec::new();
    for rec in records {
        rec.validate()?;
        if !rec.has_tag(section.tag) {
            continue;
        }
        entries.push(render_record(rec));
    }
    Ok(html! {
        section {
            h2 id=(section.tag) { (section.title) }
            dl {
                @for entry in &entries {
                    (entry)
                }
            }
        }
    })
}

fn render_map(map: &MapConfig) -> Markup {
    html! {
        section {
            h2 { (map.title) }
            iframe class="d-block mx-auto" src=(map.embed_url) width=(map.width) height=(map.height) {}
        }
    }
}

fn render_footer(footer: &FooterConfig, built_at: DateTime<Local>) -> Markup {
    let stamp = built_at.format("%d %B %Y at %I:%M:%S %p").to_string();
    html! {
        footer {
            hr;
            (PreEscaped(&footer.attribution))
            br;
            "Last updated on " (stamp) "."
            br;
            "© " (footer.copyright_start_year) "–" (built_at.year()) " "
            a href=(footer.copyright_url) { (footer.copyright_holder) }
            ". "
            a href=(footer.license_href) { "License" }
            "."
        }
    }
}

/// Assemble the complete page.
///
/// `built_at` is injected by the caller — it supplies both the "last
/// updated" stamp and the end of the copyright range, and a fixed value
/// makes the output fully deterministic.
pub fn render_page(
    records: &[Record],
    config: &SiteConfig,
    built_at: DateTime<Local>,
) -> Result<String, GenerateError> {
    let mut sections = Vec::with_capacity(SECTIONS.len());
    for section in SECTIONS {
        sections.push(render_section(section, records)?);
    }

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
                link rel="stylesheet" href=(config.stylesheet.href)
                    integrity=(config.stylesheet.integrity) crossorigin="anonymous";
                style { (PreEscaped(CSS_STATIC)) }
                title { (config.title) }
            }
            body {
                h1 { (config.title) }
                div class="center" {
                    a href=(config.branding.href) {
                        img src=(config.branding.image)
                            srcset={ (config.branding.image) " 1x, " (config.branding.image_2x) " 2x" }
                            alt=(config.branding.alt)
                            title=(config.branding.title);
                    }
                }
                @for markup in &sections {
                    (markup)
                }
                (render_map(&config.map))
                (render_footer(&config.footer, built_at))
            }
        }
    };
    Ok(page.into_string())
}

// ============================================================================
// Tests
// ============================================================================
