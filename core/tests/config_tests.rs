// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use keyword_stats_core::{Config, StatsError, DEFAULT_PAGE_SIZE};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.max_workers, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_fills_missing_fields() {
    let file = write_config(r#"{ "max_workers": 8 }"#);
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.max_workers, 8);
}

#[test]
fn test_load_full_config() {
    let file = write_config(r#"{ "page_size": 500, "max_workers": 2 }"#);
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config, Config::default().with_page_size(500).with_max_workers(2));
}

#[test]
fn test_load_rejects_zero_page_size() {
    let file = write_config(r#"{ "page_size": 0 }"#);
    let err = Config::load(file.path()).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_load_rejects_malformed_json() {
    let file = write_config("page_size = 10");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, StatsError::Config(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, StatsError::Io(_)));
}
