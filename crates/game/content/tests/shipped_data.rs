//! The data files under `data/` must describe the built-in reference arena.
#![cfg(feature = "loaders")]

use std::path::PathBuf;

use arena_content::{ContentFactory, builtin};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn shipped_files_match_builtin_tables() {
    let factory = ContentFactory::new(data_dir());

    assert_eq!(factory.load_config().unwrap(), arena_core::ArenaConfig::default());
    assert_eq!(factory.load_player().unwrap(), builtin::reference_player());
    assert_eq!(factory.load_roster().unwrap(), builtin::reference_roster());
    assert_eq!(factory.load_items().unwrap(), builtin::reference_catalog());
}

#[test]
fn shipped_setup_is_valid() {
    let setup = ContentFactory::new(data_dir()).load_setup().unwrap();
    assert_eq!(setup, builtin::reference_setup());
}

#[test]
fn config_file_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    for file in ["player.ron", "roster.ron", "items.ron"] {
        std::fs::copy(data_dir().join(file), dir.path().join(file)).unwrap();
    }

    let setup = ContentFactory::new(dir.path()).load_setup().unwrap();
    assert_eq!(setup.config, arena_core::ArenaConfig::default());
}

#[test]
fn invalid_content_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    for file in ["player.ron", "items.ron"] {
        std::fs::copy(data_dir().join(file), dir.path().join(file)).unwrap();
    }
    std::fs::write(dir.path().join("roster.ron"), "(adversaries: [])").unwrap();

    let error = ContentFactory::new(dir.path()).load_setup().unwrap_err();
    assert!(error.to_string().contains("no adversaries"));
}
