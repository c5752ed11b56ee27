//! Regression test: the shipped void smite build
//!
//! Pins every reported figure of the default build so changes to aggregation,
//! unpacking or the damage chain show up immediately.

use build_core::{default_build_config, default_skill_tags, Attribute, Build, Resistance, StatValue};

fn fixture_build() -> Build {
    default_build_config()
        .expect("shipped build config parses")
        .to_build()
        .expect("shipped build resolves")
}

#[test]
fn test_fixture_attributes() {
    let build = fixture_build();
    let attributes = build.attributes();

    assert!((attributes.get(Attribute::Strength) - 5.0).abs() < f64::EPSILON);
    assert!((attributes.get(Attribute::Dexterity) - 1.0).abs() < f64::EPSILON);
    assert!((attributes.get(Attribute::Intelligence) - 1.0).abs() < f64::EPSILON);
    assert!((attributes.get(Attribute::Attunement) - 6.0).abs() < f64::EPSILON);
    assert!((attributes.get(Attribute::Vitality) - 78.0).abs() < f64::EPSILON);
}

#[test]
fn test_fixture_generic_stats() {
    let generic = fixture_build().generic_stats();

    assert!((generic.health - 3709.0).abs() < f64::EPSILON);
    assert!((generic.mana - 128.0).abs() < f64::EPSILON);
    assert!((generic.health_regen - 84.0).abs() < f64::EPSILON);
    assert!((generic.mana_regen - 11.0).abs() < f64::EPSILON);
    assert_eq!(generic.movement_speed, StatValue::Int(46));
}

#[test]
fn test_fixture_resistances() {
    let resistances = fixture_build().resistances();
    let expected = [
        (Resistance::Fire, 114.0),
        (Resistance::Lightning, 100.0),
        (Resistance::Cold, 83.0),
        (Resistance::Physical, 145.0),
        (Resistance::Poison, 26.0),
        (Resistance::Necrotic, 32.0),
        (Resistance::Void, 88.0),
    ];

    for (res, value) in expected {
        assert!(
            (resistances.get(res) - value).abs() < f64::EPSILON,
            "{:?}: expected {}, got {}",
            res,
            value,
            resistances.get(res)
        );
    }
    // every resistance contribution in the shipped build is a whole number
    assert!(resistances.entries.iter().all(|(_, value)| !value.is_float()));
}

#[test]
fn test_fixture_smite_damage() {
    let build = fixture_build();
    let skills = default_skill_tags().expect("shipped skills parse");
    let dmg = build.damage_report("smite", &skills).unwrap();

    assert!((dmg.base - 361.5).abs() < 1e-9);
    assert!((dmg.increases - 1067.0).abs() < f64::EPSILON);
    assert!((dmg.crit_chance - 0.7815).abs() < 1e-12);
    assert!((dmg.crit_multiplier - 3.46).abs() < 1e-12);
    assert!((dmg.pre_crit - 15946.7049).abs() < 1e-6);
    assert!((dmg.final_damage - 106632.5324).abs() < 1e-3);
    assert_eq!(dmg.truncated(), 106632);
}

#[test]
fn test_fixture_additional_stats() {
    let extra = fixture_build().additional_stats();

    assert!((extra.block_chance - 0.0).abs() < f64::EPSILON);
    assert_eq!(extra.block_effectiveness, StatValue::Int(433));
    assert!((extra.armor - 1871.0).abs() < f64::EPSILON);
}

#[test]
fn test_fixture_pool_has_no_pseudo_stats() {
    let build = fixture_build();
    assert!(!build.stats().contains("all_attributes"));
    assert!(!build.stats().contains("elemental_resistance"));
    // stats no source mentions still read as zero
    assert!((build.get("increased_mana") - 0.0).abs() < f64::EPSILON);
}
