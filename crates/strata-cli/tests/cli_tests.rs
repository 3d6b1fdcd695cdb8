//! Integration tests for the `strata` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config, env and terminal.
fn strata(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("STRATA__DEFAULTS__APP_NAME")
        .env_remove("STRATA__DEFAULTS__BASE_PATH")
        .env_remove("STRATA__OUTPUT__FORMAT")
        .env_remove("STRATA__OUTPUT__NO_COLOR")
        .current_dir(home)
        .write_stdin("");
    cmd
}

fn feature_file(base: &Path, path: &str) -> String {
    fs::read_to_string(base.join(path)).unwrap()
}

#[test]
fn help_flag() {
    let home = TempDir::new().unwrap();
    strata(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    strata(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_generates_feature() {
    let home = TempDir::new().unwrap();
    let base = home.path().join("lib/features");
    fs::create_dir_all(&base).unwrap();

    strata(home.path())
        .args(["new", "UserProfile", "--app", "MyApp", "-y", "--path"])
        .arg(&base)
        .assert()
        .success()
        .stdout(predicate::str::contains("created at"));

    let root = base.join("user_profile");
    let dart_files = walk(&root);
    assert_eq!(dart_files, 13);

    let data_store = feature_file(&root, "data/data_store/user_profile_data_store.dart");
    assert!(data_store.contains("class UserProfileDataStore"));

    let usecase = feature_file(&root, "domain/usecases/user_profile_usecase.dart");
    assert!(usecase.contains("package:myapp/features/user_profile/domain/repository/"));
}

#[test]
fn rerun_is_byte_identical() {
    let home = TempDir::new().unwrap();
    let base = home.path();
    let run = || {
        strata(base)
            .args(["new", "orderHistory", "--app", "shop", "-y"])
            .assert()
            .success();
    };

    run();
    let first = feature_file(base, "order_history/presentation/viewmodel/order_history_view_model.dart");
    run();
    let second = feature_file(base, "order_history/presentation/viewmodel/order_history_view_model.dart");
    assert_eq!(first, second);
}

#[test]
fn blank_feature_is_user_error() {
    let home = TempDir::new().unwrap();

    strata(home.path())
        .args(["new", "   ", "--app", "MyApp", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("feature name"));

    assert_eq!(walk(home.path()), 0);
    assert!(fs::read_dir(home.path()).unwrap().next().is_none());
}

#[test]
fn blank_app_is_user_error() {
    let home = TempDir::new().unwrap();

    strata(home.path())
        .args(["new", "Settings", "--app", "", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("application name"));

    assert!(!home.path().join("settings").exists());
}

#[test]
fn missing_feature_without_terminal_is_user_error() {
    let home = TempDir::new().unwrap();

    strata(home.path())
        .args(["new", "--app", "MyApp"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("feature name is required"));
}

#[test]
fn missing_base_path_is_not_found() {
    let home = TempDir::new().unwrap();

    strata(home.path())
        .args(["new", "Settings", "--app", "shop", "-y", "--path", "does/not/exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Base path does not exist"))
        .stderr(predicate::str::contains("--path"));
}

#[test]
fn dry_run_writes_nothing() {
    let home = TempDir::new().unwrap();

    strata(home.path())
        .args(["new", "UserProfile", "--app", "MyApp", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains(
            "data/data_store/user_profile_data_store.dart",
        ));

    assert!(!home.path().join("user_profile").exists());
}

#[test]
fn dry_run_json() {
    let home = TempDir::new().unwrap();

    let out = strata(home.path())
        .args([
            "--output-format",
            "json",
            "new",
            "settings",
            "--app",
            "shop",
            "--dry-run",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(plan["dry_run"], true);
    assert_eq!(plan["files"].as_array().unwrap().len(), 13);
    assert_eq!(plan["directories"].as_array().unwrap().len(), 11);
    assert!(!home.path().join("settings").exists());
}

#[test]
fn app_name_from_environment() {
    let home = TempDir::new().unwrap();

    strata(home.path())
        .env("STRATA__DEFAULTS__APP_NAME", "Shop")
        .args(["new", "settings", "-y"])
        .assert()
        .success();

    let screen = feature_file(home.path(), "settings/presentation/widgets/settings_screen.dart");
    assert!(screen.contains("package:shop/features/settings/"));
    assert!(screen.contains("class SettingsScreen"));
}

#[test]
fn config_file_supplies_defaults() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("lib/features")).unwrap();
    let config = home.path().join("strata.toml");
    fs::write(
        &config,
        "[defaults]\napp_name = \"shop\"\nbase_path = \"lib/features\"\n",
    )
    .unwrap();

    strata(home.path())
        .arg("--config")
        .arg(&config)
        .args(["new", "cart", "-y"])
        .assert()
        .success();

    assert!(home
        .path()
        .join("lib/features/cart/domain/entities/cart_model.dart")
        .is_file());
}

#[test]
fn missing_config_file_is_configuration_error() {
    let home = TempDir::new().unwrap();

    strata(home.path())
        .args(["--config", "nope.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("cfg/strata.toml");

    strata(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "defaults.app_name", "my_app"])
        .assert()
        .code(4); // --config must exist before it is read

    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "").unwrap();

    strata(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "defaults.app_name", "my_app"])
        .assert()
        .success();

    strata(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "defaults.app_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my_app"));

    strata(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn init_writes_local_config() {
    let home = TempDir::new().unwrap();

    strata(home.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let text = fs::read_to_string(home.path().join(".strata.toml")).unwrap();
    assert!(text.contains("[output]"));

    // Second run keeps the file.
    strata(home.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn list_csv() {
    let home = TempDir::new().unwrap();

    let out = strata(home.path())
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "role,layer,directory,file_pattern,description");
    assert_eq!(lines.len(), 14);
    assert!(lines[1].starts_with("data_store,data,data/data_store,<feature>_data_store.dart"));
}

#[test]
fn list_json_filtered_by_layer() {
    let home = TempDir::new().unwrap();

    let out = strata(home.path())
        .args(["list", "--format", "json", "--layer", "domain"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(listing["templates"].as_array().unwrap().len(), 3);
    assert_eq!(listing["directories"].as_array().unwrap().len(), 3);
    assert_eq!(listing["templates"][0]["layer"], "domain");
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    strata(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}

/// Count `.dart` files under `dir`.
fn walk(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .flatten()
        .map(|e| {
            let path = e.path();
            if path.is_dir() {
                walk(&path)
            } else {
                usize::from(path.extension().is_some_and(|ext| ext == "dart"))
            }
        })
        .sum()
}
