use bidforge::config::{SolverConfig, BYTES_PER_CELL, DEFAULT_MAX_CELLS, DEFAULT_SCALE};
use bidforge::error::BidForgeError;
use bidforge::intent::Intent;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let cfg = SolverConfig::default();
    assert_eq!(cfg.scale, DEFAULT_SCALE);
    assert_eq!(cfg.scale, 10_000);
    assert_eq!(cfg.max_cells, DEFAULT_MAX_CELLS);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_default_cell_cap_memory() {
    let per_cell = (std::mem::size_of::<i64>() + std::mem::size_of::<u32>()) as u64;
    assert_eq!(BYTES_PER_CELL, per_cell);
    assert!(DEFAULT_MAX_CELLS * BYTES_PER_CELL <= 256 * 1024 * 1024);
}

#[test]
fn test_validate_rejects_zero_values() {
    assert!(matches!(
        SolverConfig::with_scale(0).validate(),
        Err(BidForgeError::InvalidScale)
    ));

    let cfg = SolverConfig {
        max_cells: 0,
        ..Default::default()
    };
    assert!(matches!(cfg.validate(), Err(BidForgeError::Config(_))));
}

#[test]
fn test_table_size_boundary() {
    let cfg = SolverConfig {
        max_cells: 22,
        ..Default::default()
    };
    // (1 + 1) * (10 + 1) = 22 cells.
    assert!(cfg.check_table_size(1, 10).is_ok());
    assert!(matches!(
        cfg.check_table_size(1, 11),
        Err(BidForgeError::TableTooLarge { cells: 24, .. })
    ));
    // Saturates instead of overflowing.
    assert!(cfg.check_table_size(usize::MAX, u64::MAX).is_err());
}

#[test]
fn test_parallel_threshold() {
    let cfg = SolverConfig {
        parallel_threshold: 100,
        ..Default::default()
    };
    assert!(!cfg.use_parallel(99));
    assert!(cfg.use_parallel(100));
}

// --- INTENT ---

#[test]
fn test_intent_from_json() {
    let intent =
        Intent::from_json(r#"{"budget": 20000000, "forced_keywords": ["국제배송", "shoes"]}"#)
            .unwrap();
    assert_eq!(intent.budget, Some(20_000_000.0));
    assert_eq!(intent.forced_keywords, vec!["국제배송", "shoes"]);
}

#[test]
fn test_intent_null_and_missing_fields() {
    let intent = Intent::from_json(r#"{"budget": null}"#).unwrap();
    assert_eq!(intent, Intent::default());

    let err = intent.resolve_budget(None).unwrap_err();
    assert!(matches!(err, BidForgeError::Config(_)));
}

#[test]
fn test_intent_rejects_malformed_json() {
    let err = Intent::from_json("budget: lots").unwrap_err();
    assert!(matches!(err, BidForgeError::Json(_)));
}

#[test]
fn test_explicit_budget_wins() {
    let intent = Intent {
        budget: Some(5_000.0),
        forced_keywords: vec![],
    };
    assert_eq!(intent.resolve_budget(Some(9_000.0)).unwrap(), 9_000.0);
    assert_eq!(intent.resolve_budget(None).unwrap(), 5_000.0);
}

#[test]
fn test_merged_keywords_dedupe_and_trim() {
    let intent = Intent {
        budget: None,
        forced_keywords: vec!["a".into(), " b ".into()],
    };
    let merged = intent.merged_keywords(&["b".to_string(), String::new(), "c".to_string()]);
    assert_eq!(merged, vec!["a", "b", "c"]);
}

#[test]
fn test_intent_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"budget": 30000, "forced_keywords": ["x"]}}"#).unwrap();
    let intent = Intent::load_from_file(file.path()).unwrap();
    assert_eq!(intent.budget, Some(30_000.0));
}
