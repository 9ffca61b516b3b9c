use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

#[test]
fn test_loaded_config_matches_embedded_file() {
    let config = store::config::load_config();
    assert_eq!(config.currency.code, "XAF");
    assert_eq!(config.currency.thousands_separator, ",");
    assert_eq!(config.branding.company_name, "FOTABONG ROYAL");
    assert!(config.features.animations);
}

#[test]
fn test_app_config_returns_same_instance() {
    let first = store::config::app_config();
    let second = store::config::load_config();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_parse_config_overrides_currency() {
    let config = store::config::parse_config(
        r#"
        [currency]
        code = "NGN"
        thousands_separator = " "

        [features]
        animations = false
        "#,
    )
    .unwrap();
    assert_eq!(config.currency.code, "NGN");
    assert_eq!(config.currency.thousands_separator, " ");
    assert!(!config.features.animations);
    assert_eq!(config.branding.tagline, "ENTERPRISE");
}

#[test]
fn test_parse_config_empty_separator_keeps_branding_and_flags() {
    let config = store::config::parse_config(
        r#"
        [branding]
        company_name = "ACME BUILD"

        [currency]
        thousands_separator = ""

        [features]
        animations = false
        "#,
    )
    .unwrap();
    assert_eq!(config.currency.thousands_separator, "");
    assert_eq!(config.currency.code, "XAF");
    assert_eq!(config.branding.company_name, "ACME BUILD");
    assert!(!config.features.animations);
}

#[test]
fn test_parse_config_rejects_wrong_types() {
    let err = store::config::parse_config("[features]\nanimations = \"yes\"").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
}
