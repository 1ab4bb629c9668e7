use tick_sieve::api::{
    SelectionPolicy, SymbolicPolicy, TICK_DECISIONS_JSON_SCHEMA_V1, TickDecisionsJsonContractV1,
    TickSelectionConfig, TickSelector,
};
use tick_sieve::core::{TickCandidate, TickDecision};
use tick_sieve::error::TickError;
use tick_sieve::text::{HeuristicTextMeasurer, LabelFont};

#[test]
fn selection_config_json_roundtrip() {
    let config = TickSelectionConfig::new()
        .with_policy(SymbolicPolicy::PreserveStartEnd)
        .with_min_tick_gap(8.0)
        .with_font(LabelFont::new(11.0).with_family("Inter"))
        .with_unit("ms")
        .with_label_angle(-45.0);

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = TickSelectionConfig::from_json_str(&json).expect("config should deserialize");
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = TickSelectionConfig::from_json_str("{}").expect("empty config is valid");
    assert_eq!(config, TickSelectionConfig::default());
    assert_eq!(config.policy, None);
    assert_eq!(config.min_tick_gap, 5.0);
    assert!(config.ticks_enabled);
}

#[test]
fn policy_accepts_integers_and_symbolic_names() {
    let numeric = TickSelectionConfig::from_json_str(r#"{ "policy": 2 }"#).expect("numeric");
    assert_eq!(numeric.policy, Some(SelectionPolicy::Interval(2)));

    let negative = TickSelectionConfig::from_json_str(r#"{ "policy": -1 }"#).expect("negative");
    assert_eq!(negative.policy, Some(SelectionPolicy::Interval(-1)));

    let symbolic =
        TickSelectionConfig::from_json_str(r#"{ "policy": "preserveEnd" }"#).expect("symbolic");
    assert_eq!(symbolic.policy, Some(SelectionPolicy::PRESERVE_END));

    let equidistant =
        TickSelectionConfig::from_json_str(r#"{ "policy": "equidistantPreserveStart" }"#)
            .expect("equidistant");
    assert_eq!(
        equidistant.policy,
        Some(SelectionPolicy::EQUIDISTANT_PRESERVE_START)
    );
}

#[test]
fn unknown_policy_name_is_a_serialization_error() {
    let result = TickSelectionConfig::from_json_str(r#"{ "policy": "preserveMiddle" }"#);
    assert!(matches!(result, Err(TickError::Serialization(_))));
}

#[test]
fn invalid_values_are_rejected_on_load_and_construction() {
    let negative_gap = TickSelectionConfig::from_json_str(r#"{ "minTickGap": -1.0 }"#)
        .expect("a negative gap allows overlap and is valid");
    assert_eq!(negative_gap.min_tick_gap, -1.0);

    let infinite_gap = TickSelectionConfig::new().with_min_tick_gap(f64::INFINITY);
    assert!(matches!(
        infinite_gap.validate(),
        Err(TickError::InvalidConfig(_))
    ));

    let zero_font = TickSelectionConfig::new().with_font(LabelFont::new(0.0));
    assert!(matches!(
        TickSelector::new(zero_font, HeuristicTextMeasurer),
        Err(TickError::InvalidConfig(_))
    ));

    let nan_angle = TickSelectionConfig::new().with_label_angle(f64::NAN);
    assert!(nan_angle.validate().is_err());
}

#[test]
fn set_config_keeps_the_previous_config_on_error() {
    let mut selector =
        TickSelector::new(TickSelectionConfig::new(), HeuristicTextMeasurer).expect("valid");
    let bad = TickSelectionConfig::new().with_min_tick_gap(f64::NAN);
    assert!(selector.set_config(bad).is_err());
    assert_eq!(selector.config(), &TickSelectionConfig::new());
}

#[test]
fn decisions_contract_roundtrip_and_bare_array_compat() {
    let ticks = vec![
        TickDecision::placed(TickCandidate::new(90i64, 250.0), 20.0),
        TickDecision::sampled(TickCandidate::new(10i64, 50.0)),
    ];
    let payload = TickDecisionsJsonContractV1::new(ticks.clone());
    let json = payload.to_json_pretty().expect("serialize");
    assert!(json.contains("\"schemaVersion\": 1"));

    let restored =
        TickDecisionsJsonContractV1::<i64>::from_json_compat_str(&json).expect("deserialize");
    assert_eq!(restored.ticks, ticks);

    let bare = serde_json::to_string(&ticks).expect("serialize bare");
    let restored =
        TickDecisionsJsonContractV1::<i64>::from_json_compat_str(&bare).expect("bare array");
    assert_eq!(restored.schema_version, TICK_DECISIONS_JSON_SCHEMA_V1);
    assert_eq!(restored.ticks, ticks);
}

#[test]
fn decisions_contract_rejects_unknown_schema_versions() {
    let result = TickDecisionsJsonContractV1::<i64>::from_json_compat_str(
        r#"{ "schemaVersion": 7, "ticks": [] }"#,
    );
    assert!(matches!(result, Err(TickError::Serialization(_))));
}
