// Host-side tests for page configuration and render-region containment.

#![allow(dead_code)]
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod region {
        include!("../src/core/region.rs");
    }
}

use core::config::*;
use core::region::*;
use log::LevelFilter;
use std::cell::Cell;

#[test]
fn defaults_when_attributes_are_missing() {
    let cfg = AppConfig::from_attrs(None, None, None).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.base_url, "/");
    assert_eq!(cfg.log_level, LevelFilter::Info);
    assert_eq!(cfg.model_url(), "/models/Controller.glb");
}

#[test]
fn blank_attributes_keep_defaults() {
    let cfg = AppConfig::from_attrs(Some("  "), Some(""), Some(" ")).unwrap();
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn attributes_override_defaults() {
    let cfg = AppConfig::from_attrs(Some("portfolio"), Some("DEBUG"), Some("/m/orb.glb")).unwrap();
    assert_eq!(cfg.base_url, "/portfolio/");
    assert_eq!(cfg.log_level, LevelFilter::Debug);
    assert_eq!(cfg.model_url(), "/portfolio/m/orb.glb");
}

#[test]
fn base_is_normalized() {
    assert_eq!(normalize_base(""), "/");
    assert_eq!(normalize_base("/"), "/");
    assert_eq!(normalize_base("x"), "/x/");
    assert_eq!(normalize_base("/x"), "/x/");
    assert_eq!(normalize_base("//x/y//"), "/x/y/");
}

#[test]
fn log_levels() {
    assert_eq!(parse_log_level("warning"), Ok(LevelFilter::Warn));
    assert_eq!(parse_log_level(" Trace "), Ok(LevelFilter::Trace));
    assert_eq!(
        parse_log_level("loud"),
        Err(ConfigError::LogLevel("loud".to_string()))
    );
    assert!(AppConfig::from_attrs(None, Some("loud"), None).is_err());
}

#[test]
fn region_runs_while_live() {
    let mut region = Region::new("test");
    let runs = Cell::new(0);
    for _ in 0..3 {
        let status = region.render(|| {
            runs.set(runs.get() + 1);
            Ok::<(), String>(())
        });
        assert_eq!(status, RegionStatus::Live);
    }
    assert_eq!(runs.get(), 3);
}

#[test]
fn region_latches_after_first_failure() {
    let mut region = Region::new("test");
    let runs = Cell::new(0);
    let status = region.render(|| {
        runs.set(runs.get() + 1);
        Err("device lost")
    });
    assert_eq!(status, RegionStatus::Failed);
    assert!(!region.is_live());
    let status = region.render(|| {
        runs.set(runs.get() + 1);
        Ok::<(), &str>(())
    });
    assert_eq!(status, RegionStatus::Failed);
    assert_eq!(runs.get(), 1);
}

#[test]
fn region_fail_is_idempotent() {
    let mut region = Region::new("test");
    region.fail("setup");
    region.fail("again");
    assert_eq!(region.status(), RegionStatus::Failed);
}

#[test]
fn out_of_band_errors_fail_the_next_step() {
    let sink = ErrorSink::new();
    let mut region = Region::new("scene");
    assert_eq!(region.render(|| sink.check()), RegionStatus::Live);

    // Reported from a device callback between frames.
    let reporter = sink.clone();
    reporter.record("Validation Error: buffer size mismatch");
    reporter.record("second error");
    let runs = Cell::new(0);
    let status = region.render(|| {
        sink.check()?;
        runs.set(runs.get() + 1);
        Ok::<(), String>(())
    });
    assert_eq!(status, RegionStatus::Failed);
    assert_eq!(runs.get(), 0);
    assert!(!region.is_live());
}

#[test]
fn error_sink_keeps_the_first_message() {
    let sink = ErrorSink::new();
    assert_eq!(sink.check(), Ok(()));
    sink.record("first");
    sink.record("second");
    assert_eq!(sink.take().as_deref(), Some("first"));
    assert_eq!(sink.take(), None);
}
