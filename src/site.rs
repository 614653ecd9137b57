//! Portfolio content shown on the page.
//!
//! Defaults are a complete sample site; the server can override any field
//! from its config file or `PORTFOLIO_SITE__*` env vars.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub title: String,
    pub owner: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub photo: String,
    /// Full-resolution portrait used for the lightbox and download link
    pub photo_full: Option<String>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            owner: "Camille Martin".to_string(),
            tagline: "Développeuse web & designer d'interfaces".to_string(),
            about: "J'aime construire des interfaces sobres, rapides et accessibles. \
                    Ce site rassemble quelques projets récents."
                .to_string(),
            email: "contact@example.com".to_string(),
            photo: "/assets/avatar.svg".to_string(),
            photo_full: Some("/assets/avatar-full.svg".to_string()),
            skills: ["Rust", "HTML & CSS", "Accessibilité", "Design system"]
                .into_iter()
                .map(String::from)
                .collect(),
            projects: vec![
                Project {
                    title: "Atelier".to_string(),
                    summary: "Site vitrine pour un atelier de céramique.".to_string(),
                    image: "/assets/project-atelier.svg".to_string(),
                    link: None,
                },
                Project {
                    title: "Carnet".to_string(),
                    summary: "Application de prise de notes hors-ligne.".to_string(),
                    image: "/assets/project-carnet.svg".to_string(),
                    link: None,
                },
            ],
        }
    }
}

/// Nav entries, in page order: (section id, label)
pub const SECTIONS: [(&str, &str); 4] = [
    ("about", "À propos"),
    ("projects", "Projets"),
    ("skills", "Compétences"),
    ("contact", "Contact"),
];

/// Ids of every section that animates in on scroll
pub fn reveal_ids() -> Vec<String> {
    SECTIONS.iter().map(|(id, _)| id.to_string()).collect()
}
