mod support;

use coinmarketcap_plugin::config::{
    Config, API_KEY_SETTING, DEFAULT_TARGET_SYMBOLS, TARGET_SYMBOLS_SETTING,
};
use coinmarketcap_plugin::error::{ConfigError, Error};

use support::FakeSettings;

fn settings_with_key() -> FakeSettings {
    FakeSettings::new().with(API_KEY_SETTING, "test-key")
}

#[test]
fn symbols_are_trimmed_with_empty_tokens_dropped() {
    let settings = settings_with_key().with(TARGET_SYMBOLS_SETTING, " BTC, eth ,,SOL ");

    let config = Config::validate(&settings).expect("valid config");

    assert_eq!(config.target_symbols, vec!["BTC", "eth", "SOL"]);
}

#[test]
fn unset_symbols_use_the_default_list() {
    let config = Config::validate(&settings_with_key()).expect("valid config");

    assert_eq!(config.target_symbols, DEFAULT_TARGET_SYMBOLS.to_vec());
}

#[test]
fn blank_symbols_use_the_default_list() {
    let settings = settings_with_key().with(TARGET_SYMBOLS_SETTING, "   ");

    let config = Config::validate(&settings).expect("valid config");

    assert_eq!(config.target_symbols, DEFAULT_TARGET_SYMBOLS.to_vec());
}

#[test]
fn all_empty_tokens_use_the_default_list() {
    let settings = settings_with_key().with(TARGET_SYMBOLS_SETTING, " , ,, ");

    let config = Config::validate(&settings).expect("valid config");

    assert_eq!(config.target_symbols, DEFAULT_TARGET_SYMBOLS.to_vec());
}

#[test]
fn missing_api_key_fails_naming_the_field() {
    let result = Config::validate(&FakeSettings::new());

    match result {
        Err(Error::Config(err @ ConfigError::Validation(_))) => {
            let message = err.to_string();
            assert!(message.contains(API_KEY_SETTING), "message: {message}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn whitespace_only_api_key_fails() {
    let settings = FakeSettings::new().with(API_KEY_SETTING, "   ");

    assert!(matches!(
        Config::validate(&settings),
        Err(Error::Config(ConfigError::Validation(_)))
    ));
}

#[test]
fn validation_error_message_has_the_aggregate_header() {
    let err = Config::validate(&FakeSettings::new()).unwrap_err();

    assert!(err
        .to_string()
        .starts_with("CoinMarketCap configuration validation failed:"));
}

#[test]
fn api_key_is_trimmed() {
    let settings = FakeSettings::new().with(API_KEY_SETTING, "  test-key  ");

    let config = Config::validate(&settings).expect("valid config");

    assert_eq!(config.api_key, "test-key");
}
