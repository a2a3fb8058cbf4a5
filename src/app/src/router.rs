//! URL to route derivation.
//!
//! The site is a single document; pages are addressed through the `page`
//! query parameter (`/?page=join`) so no server-side route table is needed.
//! [`route_for`] is the only way a [`Route`] comes into existence: it is
//! pure, never fails, and maps anything it does not recognize to
//! [`Route::NotFound`].

use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter carrying the page name.
pub const PAGE_PARAM: &str = "page";

/// Dummy base for parsing URL snapshots. The shell hands us URLs relative
/// to the site origin, and the `url` crate refuses to parse relative input
/// without a base.
const PARSE_BASE: &str = "https://relative";

/// Logical page identifier derived from a URL snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Schedule,
    Gallery,
    Join,
    NotFound,
}

impl Route {
    /// All routes a URL can resolve to.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Schedule,
        Route::Gallery,
        Route::Join,
        Route::NotFound,
    ];

    /// Canonical page name, as used in menu entries and the `page` query
    /// parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Schedule => "schedule",
            Route::Gallery => "gallery",
            Route::Join => "join",
            Route::NotFound => "not-found",
        }
    }

    /// Resolve a page name to its route. Unknown names resolve to
    /// [`Route::NotFound`] rather than failing.
    pub fn from_name(name: &str) -> Route {
        match name {
            "home" => Route::Home,
            "schedule" => Route::Schedule,
            "gallery" => Route::Gallery,
            "join" => Route::Join,
            _ => Route::NotFound,
        }
    }

    /// Canonical URL for this route: `/` for home, `/?page=<name>` for
    /// everything else. Navigation never encodes [`Route::NotFound`] (it
    /// only ever arises from [`route_for`]), but the encoding is total and
    /// still round-trips.
    pub fn canonical_url(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            _ => format!("/?{}={}", PAGE_PARAM, self.name()),
        }
    }
}

/// Derive the route for a URL snapshot (path and query, or absolute).
///
/// A recognized `page` query parameter wins; without one the bare root path
/// is home and everything else does not exist. Malformed input degrades to
/// [`Route::NotFound`], never to an error.
pub fn route_for(url: &str) -> Route {
    let parsed = match Url::parse(PARSE_BASE).and_then(|base| base.join(url)) {
        Ok(parsed) => parsed,
        Err(_) => return Route::NotFound,
    };

    if let Some((_, name)) = parsed.query_pairs().find(|(key, _)| key == PAGE_PARAM) {
        return Route::from_name(&name);
    }

    if parsed.path() == "/" {
        Route::Home
    } else {
        Route::NotFound
    }
}
