use super::*;

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> {
    move |var: &str| vars.iter().find(|(k, _)| *k == var).map(|(_, v)| *v)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_documented_values() {
    let config = SiteConfig::default();
    assert_eq!(config.reveal_threshold.steps(), &[0.1]);
    assert_eq!(config.reset_after, Duration::from_secs(8));
    assert_eq!(config.submit_timeout, Duration::from_secs(15));
    assert_eq!(config.contact_endpoint, "/api/contact");
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = SiteConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, SiteConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn every_variable_overrides_its_default() {
    let vars = [
        (REVEAL_THRESHOLD_VAR, "0.5"),
        (RESET_AFTER_VAR, "3000"),
        (SUBMIT_TIMEOUT_VAR, " 2500 "),
        (CONTACT_ENDPOINT_VAR, "https://forms.example.com/zia"),
    ];
    let config = SiteConfig::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(config.reveal_threshold.steps(), &[0.5]);
    assert_eq!(config.reset_after, Duration::from_secs(3));
    assert_eq!(config.submit_timeout, Duration::from_millis(2500));
    assert_eq!(config.contact_endpoint, "https://forms.example.com/zia");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn threshold_outside_unit_range_is_rejected() {
    let vars = [(REVEAL_THRESHOLD_VAR, "1.5")];
    let err = SiteConfig::from_lookup(lookup(&vars)).unwrap_err();
    assert!(matches!(err, ConfigError::Threshold { var: REVEAL_THRESHOLD_VAR, .. }));
}

#[test]
fn non_numeric_values_are_rejected() {
    let vars = [(RESET_AFTER_VAR, "eight seconds")];
    let err = SiteConfig::from_lookup(lookup(&vars)).unwrap_err();
    assert_eq!(err, ConfigError::NotANumber { var: RESET_AFTER_VAR, value: "eight seconds".to_owned() });
}

#[test]
fn zero_duration_is_rejected() {
    let vars = [(SUBMIT_TIMEOUT_VAR, "0")];
    let err = SiteConfig::from_lookup(lookup(&vars)).unwrap_err();
    assert_eq!(err, ConfigError::ZeroDuration { var: SUBMIT_TIMEOUT_VAR });
}

#[test]
fn blank_endpoint_is_rejected() {
    let vars = [(CONTACT_ENDPOINT_VAR, "   ")];
    let err = SiteConfig::from_lookup(lookup(&vars)).unwrap_err();
    assert_eq!(err, ConfigError::EmptyEndpoint { var: CONTACT_ENDPOINT_VAR });
}

#[test]
fn error_message_names_the_variable() {
    let err = ConfigError::ZeroDuration { var: RESET_AFTER_VAR };
    assert_eq!(err.to_string(), "SITE_RESET_AFTER_MS: must be greater than zero");
}
