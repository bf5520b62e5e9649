//! JSON-LD `Person` metadata for the document head.

use serde::Serialize;

use crate::content::Profile;

#[derive(Debug, Serialize)]
pub struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    url: &'a str,
    image: &'a str,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'a str>,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    #[serde(rename = "worksFor")]
    works_for: Organization<'a>,
    description: &'a str,
    #[serde(rename = "knowsAbout")]
    knows_about: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct Organization<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

impl<'a> PersonSchema<'a> {
    pub fn from_profile(profile: &'a Profile) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: &profile.name,
            url: &profile.url,
            image: &profile.image,
            same_as: profile
                .links
                .iter()
                .map(|link| link.href.as_str())
                .filter(|href| href.starts_with("http"))
                .collect(),
            job_title: &profile.title,
            works_for: Organization {
                kind: "Organization",
                name: &profile.organization,
            },
            description: &profile.description,
            knows_about: profile.knows_about.iter().map(String::as_str).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
