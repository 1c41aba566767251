//! Startup config behavior through a real `App` and real files.

use bevy::app::App;
use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{read_config, RipenessConfig, SeedPolicy, CURRENT_VERSION};
use crate::InstantCropsPlugin;

/// Helper to create a unique temp directory for each test.
fn test_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(format!("/tmp/instant_crops_app_test_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Boot a headless server against a real config path and run Startup.
fn boot(path: &Path) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(InstantCropsPlugin::with_config_path(path));
    app.update();
    app
}

#[test]
fn test_first_boot_writes_default_file() {
    let dir = test_dir("first_boot");
    let path = dir.join("instant_crops.json");

    let app = boot(&path);

    assert_eq!(
        app.world().resource::<RipenessConfig>(),
        &RipenessConfig::default()
    );
    let on_disk = read_config(&path).unwrap().unwrap();
    assert_eq!(on_disk, RipenessConfig::default());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_boot_migrates_pre_one_zero_file() {
    let dir = test_dir("migrate_old");
    let path = dir.join("instant_crops.json");
    let stored = RipenessConfig {
        version: "0.9.0".to_string(),
        seeds: vec![SeedPolicy {
            item_short_name: "seed.wheat".to_string(),
            ripen_in_planter: true,
            ripen_in_ground: true,
        }],
    };
    fs::write(&path, serde_json::to_string_pretty(&stored).unwrap()).unwrap();

    let app = boot(&path);

    let config = app.world().resource::<RipenessConfig>();
    assert_eq!(config.version, CURRENT_VERSION);
    assert!(config.seed("seed.wheat").is_none());
    assert_eq!(config.seeds, RipenessConfig::default().seeds);

    // The migrated config replaced the old file.
    let on_disk = read_config(&path).unwrap().unwrap();
    assert_eq!(&on_disk, config);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_boot_preserves_post_one_zero_entries() {
    let dir = test_dir("preserve_entries");
    let path = dir.join("instant_crops.json");
    let stored = RipenessConfig {
        version: "1.0.0".to_string(),
        seeds: vec![SeedPolicy {
            item_short_name: "seed.wheat".to_string(),
            ripen_in_planter: true,
            ripen_in_ground: false,
        }],
    };
    fs::write(&path, serde_json::to_string_pretty(&stored).unwrap()).unwrap();

    let app = boot(&path);

    let config = app.world().resource::<RipenessConfig>();
    assert_eq!(config.version, CURRENT_VERSION);
    let wheat = config.seed("seed.wheat").unwrap();
    assert!(wheat.ripen_in_planter);
    assert!(!wheat.ripen_in_ground);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_boot_tolerates_malformed_file() {
    let dir = test_dir("malformed_boot");
    let path = dir.join("instant_crops.json");
    fs::write(&path, "not json at all").unwrap();

    let app = boot(&path);

    assert_eq!(
        app.world().resource::<RipenessConfig>(),
        &RipenessConfig::default()
    );
    let on_disk = read_config(&path).unwrap().unwrap();
    assert_eq!(on_disk, RipenessConfig::default());

    let _ = fs::remove_dir_all(&dir);
}
