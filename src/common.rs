use std::{env::var, path::PathBuf, sync::OnceLock};

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Deployment configuration, resolved from the environment once.
#[derive(Clone)]
pub struct SiteConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub menu_path: PathBuf,
}

pub fn site_config() -> SiteConfig {
    SITE_CONFIG
        .get_or_init(|| {
            let port = var("UI_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080);
            let static_dir = PathBuf::from(var("STATIC_PATH").unwrap_or("static".to_string()));
            let menu_path = PathBuf::from(var("MENU_PATH").unwrap_or("/data/menu.json".to_string()));

            SiteConfig {
                port,
                static_dir,
                menu_path,
            }
        })
        .clone()
}
