// Host-side tests for the project catalog and route resolution.

#![allow(dead_code)]
mod core {
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod route {
        include!("../src/core/route.rs");
    }
}

use core::catalog::*;
use core::route::*;

const BUNDLED: &str = include_str!("../assets/projects.json");

fn record(id: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: id.to_uppercase(),
        ..Default::default()
    }
}

fn small() -> Catalog {
    Catalog::from_records(vec![record("a"), record("b"), record("c")]).unwrap()
}

#[test]
fn bundled_catalog_parses_in_order() {
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    assert_eq!(catalog.len(), 9);
    let ids = catalog.ids();
    assert_eq!(ids.first().map(String::as_str), Some("dp2-motor-play"));
    assert_eq!(ids.last().map(String::as_str), Some("artwork"));
    assert_eq!(catalog.position("moti"), Some(2));
}

#[test]
fn bundled_catalog_hides_artwork_from_listing_only() {
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    let artwork = catalog.get("artwork").unwrap();
    assert!(artwork.hidden);
    assert_eq!(catalog.listed().count(), 8);
    assert!(catalog.listed().all(|r| r.id != "artwork"));
    // Still reachable from its neighbours.
    let adj = catalog.adjacent("dp2-motor-play").unwrap();
    assert_eq!(adj.previous.id, "artwork");
}

#[test]
fn bundled_catalog_carries_details() {
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    let dp2 = catalog.get("dp2-motor-play").unwrap();
    assert!(dp2.has_overview());
    let names: Vec<&str> = dp2.links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["conceptGdd", "gameGdd"]);
    let research = dp2.research.as_ref().unwrap();
    assert!(!research.key_metrics.is_empty());
    assert!(!research.findings.is_empty());

    let flowlog = catalog.get("flowlog").unwrap();
    assert!(!flowlog.has_overview());
    assert!(!flowlog.gallery.is_empty());
}

#[test]
fn adjacency_wraps_both_ends() {
    let catalog = small();
    let first = catalog.adjacent("a").unwrap();
    assert_eq!((first.previous.id.as_str(), first.next.id.as_str()), ("c", "b"));
    let last = catalog.adjacent("c").unwrap();
    assert_eq!((last.previous.id.as_str(), last.next.id.as_str()), ("b", "a"));
    assert!(catalog.adjacent("zzz").is_none());
}

#[test]
fn single_record_is_its_own_neighbour() {
    let catalog = Catalog::from_records(vec![record("solo")]).unwrap();
    let adj = catalog.adjacent("solo").unwrap();
    assert_eq!(adj.previous.id, "solo");
    assert_eq!(adj.next.id, "solo");
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::from_records(vec![record("a"), record("b"), record("a")]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
}

#[test]
fn empty_ids_are_rejected() {
    let err = Catalog::from_records(vec![record("a"), record("  ")]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyId(1)));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        Catalog::from_json("[{\"id\": 3}]"),
        Err(CatalogError::Malformed(_))
    ));
    assert!(Catalog::from_json("not json").is_err());
}

#[test]
fn missing_optional_fields_default() {
    let catalog = Catalog::from_json(r#"[{"id":"x","title":"X"}]"#).unwrap();
    let r = catalog.get("x").unwrap();
    assert!(r.gallery.is_empty());
    assert!(r.research.is_none());
    assert!(!r.hidden);
    assert!(!r.has_overview());
}

#[test]
fn parse_known_paths() {
    assert_eq!(Route::parse("/", "/"), Route::Home);
    assert_eq!(Route::parse("", "/"), Route::Home);
    assert_eq!(Route::parse("/all-projects", "/"), Route::AllProjects);
    assert_eq!(Route::parse("/all-projects/", "/"), Route::AllProjects);
    assert_eq!(
        Route::parse("/project/moti", "/"),
        Route::Project("moti".to_string())
    );
}

#[test]
fn parse_under_a_base_prefix() {
    assert_eq!(Route::parse("/site/", "/site/"), Route::Home);
    assert_eq!(Route::parse("/site", "/site/"), Route::Home);
    assert_eq!(Route::parse("/site/all-projects", "/site/"), Route::AllProjects);
    assert_eq!(
        Route::parse("/site/project/flowlog", "/site/"),
        Route::Project("flowlog".to_string())
    );
}

#[test]
fn unrecognized_paths_fall_back_home() {
    assert_eq!(Route::parse("/nope", "/"), Route::Home);
    assert_eq!(Route::parse("/project/", "/"), Route::Home);
    assert_eq!(Route::parse("/project/a/b", "/"), Route::Home);
}

#[test]
fn paths_round_trip() {
    for base in ["/", "/site/"] {
        for route in [
            Route::Home,
            Route::AllProjects,
            Route::Project("dp2-motor-play".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path(base), base), route);
        }
    }
    assert_eq!(Route::Project("a".into()).path("/site/"), "/site/project/a");
}

#[test]
fn unknown_project_redirects_home() {
    let catalog = small();
    assert_eq!(
        resolve(Route::Project("b".into()), &catalog),
        Resolution::Render(Route::Project("b".into()))
    );
    assert_eq!(
        resolve(Route::Project("missing".into()), &catalog),
        Resolution::Redirect(Route::Home)
    );
    assert_eq!(
        resolve(Route::AllProjects, &catalog),
        Resolution::Render(Route::AllProjects)
    );
    assert!(Route::Home.is_home());
    assert!(!Route::AllProjects.is_home());
}
