use crate::common::site_config;
use actix_files::NamedFile;
use actix_web::{HttpResponse, Responder};
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// One navigation menu entry, as consumed by the frontend core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub route: String,
    pub icon: String,
}

/// The menu document served by `/api/menu.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuDocument {
    pub items: Vec<MenuEntry>,
}

impl MenuDocument {
    /// Built-in menu, served when no deployment-provided document exists.
    /// Must stay in sync with the fallback list baked into the core.
    pub fn builtin() -> Self {
        let entry = |label: &str, route: &str, icon: &str| MenuEntry {
            label: label.to_string(),
            route: route.to_string(),
            icon: icon.to_string(),
        };

        Self {
            items: vec![
                entry("Home", "home", "home"),
                entry("Schedule", "schedule", "event"),
                entry("Gallery", "gallery", "image:collections"),
                entry("Join", "join", "add"),
            ],
        }
    }
}

pub async fn index() -> actix_web::Result<NamedFile> {
    debug!("index() called");

    Ok(NamedFile::open(site_config().static_dir.join("index.html"))?)
}

pub async fn menu() -> impl Responder {
    debug!("menu() called");

    HttpResponse::Ok().json(load_menu(&site_config().menu_path))
}

/// Load the deployment-provided menu document, falling back to the built-in
/// entries when the file is missing or does not parse.
pub fn load_menu(path: &Path) -> MenuDocument {
    match read_menu(path) {
        Ok(document) => document,
        Err(e) => {
            warn!("{e:#}, serving built-in menu");
            MenuDocument::builtin()
        }
    }
}

fn read_menu(path: &Path) -> Result<MenuDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read menu document {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("cannot parse menu document {}", path.display()))
}
