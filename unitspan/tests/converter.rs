//! End-to-end converter scenarios

use unitspan::{ConvertError, UnitConverter};

fn lengths() -> UnitConverter {
    UnitConverter::new(
        ["m", "ft", "in"],
        [("m", "ft", 3.28084), ("ft", "in", 12.0)],
    )
    .unwrap()
}

#[test]
fn derives_chained_conversion_both_ways() {
    let mut conv = lengths();

    let m_to_in = conv.get_conversion("m", "in").unwrap();
    assert!((m_to_in.factor - 39.37008).abs() / 39.37008 < 1e-9);

    let in_to_m = conv.get_conversion("in", "m").unwrap();
    assert!((in_to_m.factor - 0.0254).abs() < 1e-6);
}

#[test]
fn incomplete_before_any_derivation() {
    let conv = lengths();
    // only 4 of the 6 ordered cross pairs are known up front
    assert_eq!(conv.store().len(), 4);
    assert!(!conv.is_complete());
}

#[test]
fn disconnected_units_stay_unreachable() {
    let mut conv =
        UnitConverter::new(["m", "kg"], std::iter::empty::<(&str, &str, f64)>()).unwrap();

    conv.saturate().unwrap();
    assert!(!conv.is_complete());

    let err = conv.get_conversion("m", "kg").unwrap_err();
    assert!(matches!(err, ConvertError::NoConversionPath { .. }));
}

#[test]
fn inverse_is_available_immediately_after_construction() {
    let mut conv = UnitConverter::new(["a", "b"], [("a", "b", 2.0)]).unwrap();
    assert_eq!(conv.get_conversion("b", "a").unwrap().factor, 0.5);
}

#[test]
fn inverse_consistency_after_saturation() {
    let mut conv = lengths();
    conv.saturate().unwrap();

    let cached: Vec<_> = conv.store().iter().copied().collect();
    for c in cached {
        let back = conv.store().get(c.target, c.source).unwrap();
        assert!((back.factor - 1.0 / c.factor).abs() / back.factor < 1e-12);
    }
}

#[test]
fn composition_consistency() {
    let mut conv = lengths();

    let ab = conv.get_conversion("m", "ft").unwrap().factor;
    let bc = conv.get_conversion("ft", "in").unwrap().factor;
    let ac = conv.get_conversion("m", "in").unwrap().factor;

    assert!((ac - ab * bc).abs() / ac < 1e-9);
}

#[test]
fn self_identity_without_store_mutation() {
    let mut conv = lengths();
    let before = conv.store().len();

    for unit in ["m", "ft", "in"] {
        assert_eq!(conv.get_conversion(unit, unit).unwrap().factor, 1.0);
    }
    assert_eq!(conv.store().len(), before);
}

#[test]
fn saturation_is_idempotent() {
    let mut conv = lengths();
    conv.saturate().unwrap();
    let edges = conv.store().len();

    conv.saturate().unwrap();
    assert_eq!(conv.store().len(), edges);
    assert!(conv.is_complete());
}

#[test]
fn store_grows_monotonically_across_queries() {
    let mut conv = UnitConverter::new(
        ["mm", "cm", "m", "km"],
        [("mm", "cm", 0.1), ("cm", "m", 0.01), ("m", "km", 0.001)],
    )
    .unwrap();

    let mut last = conv.store().len();
    for (src, dst) in [("mm", "m"), ("km", "cm"), ("mm", "km"), ("m", "mm")] {
        conv.get_conversion(src, dst).unwrap();
        let now = conv.store().len();
        assert!(now >= last);
        last = now;
    }
}

#[test]
fn repeated_queries_are_deterministic() {
    let build = || {
        let mut conv = UnitConverter::new(
            ["m", "cm", "mm"],
            [("m", "cm", 100.0), ("cm", "mm", 10.0), ("m", "mm", 1000.0)],
        )
        .unwrap();
        conv.saturate().unwrap();
        conv.store()
            .iter()
            .map(|c| (c.source, c.target, c.factor))
            .collect::<Vec<_>>()
    };

    assert_eq!(build(), build());
}

#[test]
fn definitions_file_to_table() {
    let text = "\
units: m ft in
m -> ft = 3.28084
ft -> in = 12
";
    let defs = unitspan::parse::parse_definitions(text).unwrap();
    let mut conv = UnitConverter::new(defs.units, defs.conversions).unwrap();
    conv.saturate().unwrap();

    let table = unitspan::table::render(&conv);
    assert_eq!(table.lines().count(), 4);
    assert!(!table.contains('?'));
    assert!(table.contains('-'));
}
