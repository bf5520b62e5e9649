//! Site content and tunables, embedded from `content/site.toml`.
//!
//! Numeric tunables outside their accepted range fall back to defaults with a
//! warning. Structural mistakes are reported as [`Error`]s.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::error::{Error, Result};
use crate::parallax::Blob;
use crate::typewriter::{Highlight, TypewriterConfig, DEFAULT_SPEED_MS};

pub const SITE_TOML: &str = include_str!("../content/site.toml");

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_TICKER_CYCLE_SECONDS: u32 = 45;
const DEFAULT_HERO_DELAY_SECONDS: f64 = 0.0;

const HERO_DELAY_SECONDS_BOUNDS: (f64, f64) = (0.0, 30.0);
const TICKER_CYCLE_SECONDS_BOUNDS: (u32, u32) = (5, 600);
const BLOB_FACTOR_BOUNDS: (f64, f64) = (1.0, 500.0);
const DEFAULT_BLOB_FACTOR: f64 = 30.0;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

pub const PROJECTS_SECTION: &str = "projects";
pub const SKILLS_SECTION: &str = "skills";
pub const CONTACT_SECTION: &str = "contact";

/// Section anchors the page knows how to render.
pub const KNOWN_SECTIONS: [&str; 3] = [PROJECTS_SECTION, SKILLS_SECTION, CONTACT_SECTION];

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub site: SiteConfig,
    pub profile: Profile,
    pub hero: HeroConfig,
    #[serde(default)]
    pub ticker: TickerConfig,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub blobs: Vec<Blob>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub sections: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub title: String,
    #[serde(deserialize_with = "deserialize_birth_date")]
    pub birth_date: NaiveDate,
    pub email: String,
    /// Hero paragraph; `{age}` is replaced with the current age.
    pub bio: String,
    pub url: String,
    pub image: String,
    pub organization: String,
    pub description: String,
    #[serde(default)]
    pub knows_about: Vec<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

impl Profile {
    /// Whole years on `today`; the birthday itself counts as reached.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }

    pub fn bio_on(&self, today: NaiveDate) -> String {
        self.bio.replace("{age}", &self.age_on(today).to_string())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeroConfig {
    pub greeting: String,
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub delay_seconds: f64,
    #[serde(default = "default_speed_ms")]
    pub speed_ms: i32,
}

impl HeroConfig {
    pub fn typewriter(&self) -> TypewriterConfig {
        let config = TypewriterConfig::new(self.greeting.clone())
            .with_delay(self.delay_seconds)
            .with_speed(self.speed_ms);

        match &self.highlight {
            Some(name) => config.with_highlight(name.clone()),
            None => config,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TickerConfig {
    pub cycle_seconds: u32,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            cycle_seconds: DEFAULT_TICKER_CYCLE_SECONDS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    /// Monochrome icons that disappear on the dark background.
    #[serde(default)]
    pub invert_on_dark: bool,
}

fn deserialize_birth_date<'de, D>(
    deserializer: D,
) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT)
        .map_err(|source| Error::BirthDate { value, source })
        .map_err(serde::de::Error::custom)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_speed_ms() -> i32 {
    DEFAULT_SPEED_MS
}

fn f64_with_bounds(name: &str, value: f64, default: f64, bounds: (f64, f64)) -> f64 {
    if value.is_finite() && (bounds.0..=bounds.1).contains(&value) {
        return value;
    }
    warn!(setting = name, value, default, "value out of range, using default");
    default
}

fn u32_with_bounds(name: &str, value: u32, default: u32, bounds: (u32, u32)) -> u32 {
    if (bounds.0..=bounds.1).contains(&value) {
        return value;
    }
    warn!(setting = name, value, default, "value out of range, using default");
    default
}

impl SiteContent {
    pub fn load() -> Result<Self> {
        Self::from_toml(SITE_TOML)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        let mut content: Self = toml::from_str(source)?;
        content.validate()?;
        content.normalize();
        Ok(content)
    }

    fn validate(&self) -> Result<()> {
        if self.site.sections.is_empty() {
            return Err(Error::NoSections);
        }

        let mut seen = HashSet::new();
        for id in &self.site.sections {
            if !KNOWN_SECTIONS.contains(&id.as_str()) {
                return Err(Error::UnknownSection(id.clone()));
            }
            if !seen.insert(id.as_str()) {
                return Err(Error::DuplicateSection(id.clone()));
            }
        }

        if let Some(name) = &self.hero.highlight {
            Highlight::new(name)?;
        }

        Ok(())
    }

    fn normalize(&mut self) {
        self.hero.delay_seconds = f64_with_bounds(
            "hero.delay_seconds",
            self.hero.delay_seconds,
            DEFAULT_HERO_DELAY_SECONDS,
            HERO_DELAY_SECONDS_BOUNDS,
        );
        self.ticker.cycle_seconds = u32_with_bounds(
            "ticker.cycle_seconds",
            self.ticker.cycle_seconds,
            DEFAULT_TICKER_CYCLE_SECONDS,
            TICKER_CYCLE_SECONDS_BOUNDS,
        );
        for blob in &mut self.blobs {
            blob.factor = f64_with_bounds(
                "blobs.factor",
                blob.factor,
                DEFAULT_BLOB_FACTOR,
                BLOB_FACTOR_BOUNDS,
            );
        }
    }

    /// Normalized `tracing` filter directive for `[site] log_level`.
    pub fn log_level(&self) -> &'static str {
        match self.site.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            other => {
                warn!(level = other, "unknown log level, using {DEFAULT_LOG_LEVEL}");
                DEFAULT_LOG_LEVEL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [site]
        sections = ["projects", "skills"]

        [profile]
        name = "Ada Lovelace"
        initials = "AL."
        title = "Analyst"
        birth_date = "1815-12-10"
        email = "ada@example.com"
        bio = "I am {age}."
        url = "https://example.com"
        image = "https://example.com/og.jpg"
        organization = "Analytical Engines"
        description = "Notes on the engine."

        [hero]
        greeting = "Hi, I am Ada Lovelace."
        highlight = "Ada Lovelace"
    "#;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::load().unwrap();

        assert_eq!(content.site.sections, vec!["projects", "skills", "contact"]);
        assert!(!content.projects.is_empty());
        assert!(!content.skills.is_empty());
        assert!(content.hero.greeting.contains(&content.profile.name));
    }

    #[test]
    fn minimal_content_uses_defaults() {
        let content = SiteContent::from_toml(MINIMAL).unwrap();

        assert_eq!(content.log_level(), "info");
        assert_eq!(content.hero.speed_ms, DEFAULT_SPEED_MS);
        assert_eq!(content.ticker.cycle_seconds, DEFAULT_TICKER_CYCLE_SECONDS);
        assert!(content.projects.is_empty());
        assert!(content.blobs.is_empty());
    }

    #[test]
    fn out_of_range_tunables_fall_back() {
        let source = MINIMAL
            .replace("[hero]", "[ticker]\ncycle_seconds = 1\n\n[hero]\ndelay_seconds = 99.0")
            + "\n[[blobs]]\nclass = \"blob\"\nfactor = 0.0\n";
        let content = SiteContent::from_toml(&source).unwrap();

        assert_eq!(content.hero.delay_seconds, DEFAULT_HERO_DELAY_SECONDS);
        assert_eq!(content.ticker.cycle_seconds, DEFAULT_TICKER_CYCLE_SECONDS);
        assert_eq!(content.blobs[0].factor, DEFAULT_BLOB_FACTOR);
    }

    #[test]
    fn rejects_duplicate_sections() {
        let source = MINIMAL.replace(r#"["projects", "skills"]"#, r#"["skills", "skills"]"#);
        let err = SiteContent::from_toml(&source).unwrap_err();
        assert!(matches!(err, Error::DuplicateSection(id) if id == "skills"));
    }

    #[test]
    fn rejects_sections_missing_from_the_page() {
        let source = MINIMAL.replace(r#"["projects", "skills"]"#, r#"["projects", "about"]"#);
        let err = SiteContent::from_toml(&source).unwrap_err();
        assert!(matches!(err, Error::UnknownSection(id) if id == "about"));
    }

    #[test]
    fn bundled_sections_are_all_known() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.site.sections, KNOWN_SECTIONS);
    }

    #[test]
    fn rejects_empty_sections() {
        let source = MINIMAL.replace(r#"["projects", "skills"]"#, "[]");
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(Error::NoSections)
        ));
    }

    #[test]
    fn rejects_malformed_birth_date() {
        let source = MINIMAL.replace("1815-12-10", "1815-13-10");
        let err = SiteContent::from_toml(&source).unwrap_err();
        assert!(matches!(err, Error::Content(_)));
        assert!(err.to_string().contains("1815-13-10"));
    }

    #[test]
    fn unknown_log_level_defaults_to_info() {
        let source = MINIMAL.replace("[site]", "[site]\nlog_level = \"LOUD\"");
        let content = SiteContent::from_toml(&source).unwrap();
        assert_eq!(content.log_level(), "info");

        let source = MINIMAL.replace("[site]", "[site]\nlog_level = \"Debug\"");
        assert_eq!(SiteContent::from_toml(&source).unwrap().log_level(), "debug");
    }

    #[test]
    fn age_counts_birthday_as_reached() {
        let source = MINIMAL.replace("1815-12-10", "2005-07-25");
        let profile = SiteContent::from_toml(&source).unwrap().profile;

        assert_eq!(profile.birth_date, date(2005, 7, 25));
        assert_eq!(profile.age_on(date(2025, 7, 24)), 19);
        assert_eq!(profile.age_on(date(2025, 7, 25)), 20);
        assert_eq!(profile.age_on(date(2025, 12, 1)), 20);
        assert_eq!(profile.age_on(date(2004, 1, 1)), 0);
    }

    #[test]
    fn leap_day_birthdays_parse() {
        let source = MINIMAL.replace("1815-12-10", "2004-02-29");
        let profile = SiteContent::from_toml(&source).unwrap().profile;

        assert_eq!(profile.age_on(date(2005, 2, 28)), 0);
        assert_eq!(profile.age_on(date(2005, 3, 1)), 1);

        let source = MINIMAL.replace("1815-12-10", "2005-02-29");
        assert!(SiteContent::from_toml(&source).is_err());
    }

    #[test]
    fn bio_interpolates_age() {
        let content = SiteContent::from_toml(MINIMAL).unwrap();
        assert_eq!(content.profile.bio_on(date(1835, 12, 9)), "I am 19.");
    }

    #[test]
    fn birth_date_must_be_iso() {
        let source = MINIMAL.replace("1815-12-10", "July 25");
        let err = SiteContent::from_toml(&source).unwrap_err();
        assert!(err.to_string().contains("July 25"));
    }

    #[test]
    fn hero_builds_typewriter_config() {
        let content = SiteContent::from_toml(MINIMAL).unwrap();
        let config = content.hero.typewriter();

        assert_eq!(config.text, "Hi, I am Ada Lovelace.");
        assert_eq!(config.highlight.as_deref(), Some("Ada Lovelace"));
        assert_eq!(config.speed_ms, DEFAULT_SPEED_MS);
    }
}
