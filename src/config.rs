//! Site configuration.
//!
//! Everything on the page that is chrome rather than record data — title,
//! branding image, stylesheet, map embed, footer attribution — comes from an
//! optional `taplist.toml`. Stock defaults reproduce the moco.beer page, so
//! a bare data file renders without any config at all.
//!
//! ## Config File Location
//!
//! Resolution order:
//!
//! 1. An explicit `--config <path>` (must parse; a bad path is an error)
//! 2. `taplist.toml` next to the input data file
//! 3. Stock defaults
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Beer in Montgomery County, Maryland"
//!
//! [stylesheet]
//! href = "https://stackpath.bootstrapcdn.com/bootstrap/4.1.3/css/bootstrap.min.css"
//! integrity = "sha384-MCw98/SFnGE8fJT3GXwEOngsV7Zt27NXFoaoApmYm81iuXoPkFOJwJ8ERdknLPMO"
//!
//! [branding]
//! href = "https://thinkmoco.com/made-in-moco/"
//! image = "logos/drinklocal_mocomade.png"
//! image_2x = "logos/drinklocal_mocomade@2x.png"
//! alt = "Drink Local. Moco Made."
//! title = "#mocomade"
//!
//! [map]
//! title = "Google Map of Locations"
//! embed_url = "https://www.google.com/maps/d/u/1/embed?mid=..."
//! width = 640
//! height = 480
//!
//! [footer]
//! attribution = "Made and <a href=\"...\">open sourced</a> ..."
//! license_href = "LICENSE"
//! copyright_holder = "Greg Fiumara"
//! copyright_url = "https://gregfiumara.com"
//! copyright_start_year = 2018
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the page title
//! title = "Beer in Frederick County, Maryland"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `taplist.toml`.
///
/// All fields have stock defaults. User config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page `<title>` and `<h1>` heading.
    pub title: String,
    /// External stylesheet reference.
    pub stylesheet: StylesheetConfig,
    /// Branding image shown under the heading.
    pub branding: BrandingConfig,
    /// Embedded locations map.
    pub map: MapConfig,
    /// Footer attribution and copyright.
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Beer in Montgomery County, Maryland".to_string(),
            stylesheet: StylesheetConfig::default(),
            branding: BrandingConfig::default(),
            map: MapConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.map.width == 0 || self.map.height == 0 {
            return Err(ConfigError::Validation(
                "map.width and map.height must be non-zero".into(),
            ));
        }
        if !(1000..=9999).contains(&self.footer.copyright_start_year) {
            return Err(ConfigError::Validation(
                "footer.copyright_start_year must be a four-digit year".into(),
            ));
        }
        Ok(())
    }
}

/// External stylesheet link. `integrity` travels with `href` — change both
/// together or the browser refuses the sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylesheetConfig {
    pub href: String,
    pub integrity: String,
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        Self {
            href: "https://stackpath.bootstrapcdn.com/bootstrap/4.1.3/css/bootstrap.min.css"
                .to_string(),
            integrity: "sha384-MCw98/SFnGE8fJT3GXwEOngsV7Zt27NXFoaoApmYm81iuXoPkFOJwJ8ERdknLPMO"
                .to_string(),
        }
    }
}

/// Branding image link rendered under the page heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandingConfig {
    /// Where the branding image links to.
    pub href: String,
    /// 1x image path, relative to the output file.
    pub image: String,
    /// 2x image path for the srcset.
    pub image_2x: String,
    pub alt: String,
    pub title: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            href: "https://thinkmoco.com/made-in-moco/".to_string(),
            image: "logos/drinklocal_mocomade.png".to_string(),
            image_2x: "logos/drinklocal_mocomade@2x.png".to_string(),
            alt: "Drink Local. Moco Made.".to_string(),
            title: "#mocomade".to_string(),
        }
    }
}

/// Embedded map section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub title: String,
    pub embed_url: String,
    pub width: u32,
    pub height: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "Google Map of Locations".to_string(),
            embed_url: "https://www.google.com/maps/d/u/1/embed?mid=1HcsTMRMiEsDwHCUf9J7_T5jXwnAVGaIZ&z=10&ll=39.14789573526428,-77.2005358102505"
                .to_string(),
            width: 640,
            height: 480,
        }
    }
}

/// Footer attribution and copyright range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// First footer line, emitted as-is (may contain markup).
    pub attribution: String,
    /// License link target.
    pub license_href: String,
    pub copyright_holder: String,
    pub copyright_url: String,
    /// Start of the © range; the end is the build year.
    pub copyright_start_year: i32,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            attribution: "Made and <a href=\"https://github.com/gfiumara/mocobeer\">open sourced</a> \
                in Gaithersburg by <a href=\"https://gregfiumara.com\">Greg Fiumara</a> and \
                <a href=\"https://github.com/gfiumara/mocobeer/contributors\">contributors</a>."
                .to_string(),
            license_href: "LICENSE".to_string(),
            copyright_holder: "Greg Fiumara".to_string(),
            copyright_url: "https://gregfiumara.com".to_string(),
            copyright_start_year: 2018,
        }
    }
}

/// Resolve and load site configuration for a given input file.
///
/// `explicit` is the `--config` flag; otherwise a `taplist.toml` sitting
/// next to the input file is picked up, and stock defaults apply when
/// neither exists.
pub fn load_config(explicit: Option<&Path>, input: &Path) -> Result<SiteConfig, ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let sibling = input
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("taplist.toml");
            sibling.exists().then_some(sibling)
        }
    };

    let config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => SiteConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
