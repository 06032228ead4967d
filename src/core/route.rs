use super::catalog::Catalog;

const ALL_PROJECTS: &str = "all-projects";
const PROJECT_PREFIX: &str = "project/";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    AllProjects,
    Project(String),
}

impl Route {
    /// Parse a location pathname. `base` is the site prefix (always ending in `/`).
    /// Anything unrecognized maps to `Home`.
    pub fn parse(pathname: &str, base: &str) -> Route {
        let base_trimmed = base.trim_end_matches('/');
        let rest = pathname.strip_prefix(base_trimmed).unwrap_or(pathname);
        let rest = rest.trim_matches('/');
        if rest.is_empty() {
            return Route::Home;
        }
        if rest == ALL_PROJECTS {
            return Route::AllProjects;
        }
        if let Some(id) = rest.strip_prefix(PROJECT_PREFIX) {
            if !id.is_empty() && !id.contains('/') {
                return Route::Project(id.to_string());
            }
        }
        Route::Home
    }

    pub fn path(&self, base: &str) -> String {
        match self {
            Route::Home => base.to_string(),
            Route::AllProjects => format!("{base}{ALL_PROJECTS}"),
            Route::Project(id) => format!("{base}{PROJECT_PREFIX}{id}"),
        }
    }

    /// Home-page anchors only exist while the home route is mounted.
    #[inline]
    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    /// Replace the current history entry with this route.
    Redirect(Route),
}

/// Validate a parsed route against the catalog.
pub fn resolve(route: Route, catalog: &Catalog) -> Resolution {
    match route {
        Route::Project(ref id) if catalog.get(id).is_none() => {
            log::warn!("[route] unknown project id {id:?}, redirecting home");
            Resolution::Redirect(Route::Home)
        }
        other => Resolution::Render(other),
    }
}
