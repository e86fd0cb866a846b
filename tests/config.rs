use std::time::Duration;

use dialettami::{Config, API_PROXY_PATH};
use serial_test::serial;

fn clear_env() {
    std::env::remove_var("DIALETTAMI_PROXY_URL");
    std::env::remove_var("DIALETTAMI_DIALECT");
    std::env::remove_var("DIALETTAMI_TIMEOUT_SECS");
}

fn temp_config(name: &str, body: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("dialettami-{}-{name}.json", std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.default_dialect, "napoletano");
    assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
    assert_eq!(
        cfg.endpoint(),
        format!("http://localhost:8888{API_PROXY_PATH}")
    );
}

#[test]
fn endpoint_trims_trailing_slash() {
    let cfg = Config {
        proxy_base_url: "https://example.netlify.app/".into(),
        ..Config::default()
    };
    assert_eq!(
        cfg.endpoint(),
        "https://example.netlify.app/.netlify/functions/dialettami"
    );
}

#[test]
fn missing_file_gives_defaults() {
    let cfg = Config::load_from(std::path::Path::new("/definitely/not/here/config.json"));
    assert_eq!(cfg, Config::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let path = temp_config("partial", r#"{"default_dialect":"milanese"}"#);
    let cfg = Config::load_from(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(cfg.default_dialect, "milanese");
    assert_eq!(cfg.proxy_base_url, Config::default().proxy_base_url);
}

#[test]
fn invalid_file_gives_defaults() {
    let path = temp_config("invalid", "{ nope");
    let cfg = Config::load_from(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(cfg, Config::default());
}

#[test]
#[serial]
fn env_overrides_file_values() {
    clear_env();
    std::env::set_var("DIALETTAMI_PROXY_URL", "https://proxy.test");
    std::env::set_var("DIALETTAMI_DIALECT", "genovese");
    std::env::set_var("DIALETTAMI_TIMEOUT_SECS", "5");
    let mut cfg = Config::default();
    cfg.apply_env();
    clear_env();
    assert_eq!(cfg.proxy_base_url, "https://proxy.test");
    assert_eq!(cfg.default_dialect, "genovese");
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
#[serial]
fn empty_or_invalid_env_values_are_ignored() {
    clear_env();
    std::env::set_var("DIALETTAMI_PROXY_URL", "  ");
    std::env::set_var("DIALETTAMI_TIMEOUT_SECS", "soon");
    let mut cfg = Config::default();
    cfg.apply_env();
    clear_env();
    assert_eq!(cfg, Config::default());
}
