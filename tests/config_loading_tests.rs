// Config loading tests - testing AiSettings::load from files
//
// Tests focused on file handling, provider parsing and API key expansion.

use mybrain_ai::config::defaults::{DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL};
use mybrain_ai::{AiProvider, AiSettings, ConfigError};
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("ai.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn returns_error_when_file_not_found() {
    let result = AiSettings::load(Some(Path::new("/nonexistent/path/ai.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn returns_error_when_toml_is_invalid() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "provider = [unterminated");

    let result = AiSettings::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn returns_error_for_unknown_provider() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), r#"provider = "bard""#);

    let result = AiSettings::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::UnknownProvider { .. })));
}

#[test]
fn none_provider_loads_as_unselected() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), r#"provider = "none""#);

    let settings = AiSettings::load(Some(&path)).expect("load config");
    assert_eq!(settings.provider, None);
}

#[test]
fn loads_full_configuration() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
provider = "gemini"
system_prompt = "Answer in one sentence."

[openai]
api_key = "sk-openai"
model = "gpt-4.1"
base_url = "https://proxy.example.com/v1"

[gemini]
api_key = "g-key"
model = "gemini-2.0-flash"
"#,
    );

    let settings = AiSettings::load(Some(&path)).expect("load config");
    assert_eq!(settings.provider, Some(AiProvider::Gemini));
    assert_eq!(settings.system_prompt, "Answer in one sentence.");
    assert_eq!(settings.openai.api_key, "sk-openai");
    assert_eq!(settings.openai.model, "gpt-4.1");
    assert_eq!(settings.openai.base_url, "https://proxy.example.com/v1");
    assert_eq!(settings.gemini.api_key, "g-key");
    assert_eq!(settings.gemini.model, "gemini-2.0-flash");
    assert_eq!(settings.active().model, "gemini-2.0-flash");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), r#"provider = "openai""#);

    let settings = AiSettings::load(Some(&path)).expect("load config");
    assert_eq!(settings.openai.model, DEFAULT_OPENAI_MODEL);
    assert_eq!(settings.gemini.model, DEFAULT_GEMINI_MODEL);
    assert!(settings.openai.api_key.is_empty());
    assert!(settings.openai.base_url.is_empty());
}

#[test]
#[serial]
fn expands_api_key_from_environment() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
provider = "openai"

[openai]
api_key = "${MYBRAIN_TEST_OPENAI_KEY}"
"#,
    );

    // SAFETY: serialized with other env-mutating tests.
    unsafe { std::env::set_var("MYBRAIN_TEST_OPENAI_KEY", "sk-from-env") };
    let settings = AiSettings::load(Some(&path)).expect("load config");
    unsafe { std::env::remove_var("MYBRAIN_TEST_OPENAI_KEY") };

    assert_eq!(settings.openai.api_key, "sk-from-env");
}

#[test]
#[serial]
fn unset_key_variable_yields_blank_key() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
provider = "gemini"

[gemini]
api_key = "${MYBRAIN_TEST_GEMINI_KEY}"
"#,
    );

    // SAFETY: serialized with other env-mutating tests.
    unsafe { std::env::remove_var("MYBRAIN_TEST_GEMINI_KEY") };
    let settings = AiSettings::load(Some(&path)).expect("load config");

    assert!(settings.gemini.api_key.is_empty());
    let request = settings.request(&[]);
    assert!(request.credential.trim().is_empty());
}
