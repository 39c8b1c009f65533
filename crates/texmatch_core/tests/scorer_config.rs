use texmatch_core::{ConfigError, ScorerConfig, DEFAULT_NGRAM_SIZE};

#[test]
fn empty_object_decodes_to_defaults() {
    let config: ScorerConfig = serde_json::from_str("{}").expect("empty object should decode");
    assert_eq!(config, ScorerConfig::default());
    assert_eq!(config.ngram_size, DEFAULT_NGRAM_SIZE);
}

#[test]
fn explicit_ngram_size_is_kept() {
    let config: ScorerConfig = serde_json::from_str(r#"{"ngram_size": 2}"#).expect("explicit size should decode");
    assert_eq!(config.ngram_size, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_str::<ScorerConfig>(r#"{"ngram": 2}"#);
    assert!(result.is_err());
}

#[test]
fn decoded_zero_size_fails_validation() {
    let config: ScorerConfig = serde_json::from_str(r#"{"ngram_size": 0}"#).expect("zero size should still decode");
    let err = config
        .validate()
        .expect_err("zero size should fail validation");
    assert_eq!(err, ConfigError::ZeroNgramSize);
}
