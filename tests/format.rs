//! 数值格式化与惯用小数位的回归测试。
use oilfield_unit_toolbox::format::{
    display_decimals, format_value, format_with_label, DEFAULT_DECIMALS,
};
use oilfield_unit_toolbox::quantity::{QuantityKind, UnitSystem};

#[test]
fn default_is_two_decimals() {
    assert_eq!(DEFAULT_DECIMALS, 2);
    assert_eq!(format_value(3.14159, None), "3.14");
    assert_eq!(format_value(3.1, None), "3.10");
}

#[test]
fn explicit_places() {
    assert_eq!(format_value(3.14159, Some(2)), "3.14");
    assert_eq!(format_value(2.0, Some(0)), "2");
    assert_eq!(format_value(1.5, Some(4)), "1.5000");
    assert_eq!(format_value(-0.25, Some(1)), "-0.2");
}

#[test]
fn non_finite_values_format_without_panic() {
    assert_eq!(format_value(f64::NAN, None), "NaN");
    assert_eq!(format_value(f64::INFINITY, None), "inf");
    assert_eq!(format_value(f64::NEG_INFINITY, None), "-inf");
}

#[test]
fn display_decimals_table() {
    assert_eq!(
        display_decimals(QuantityKind::Temperature, UnitSystem::Metric),
        0
    );
    assert_eq!(
        display_decimals(QuantityKind::Pressure, UnitSystem::Metric),
        1
    );
    assert_eq!(
        display_decimals(QuantityKind::Pressure, UnitSystem::Imperial),
        0
    );
    assert_eq!(
        display_decimals(QuantityKind::Diameter, UnitSystem::Metric),
        0
    );
    assert_eq!(
        display_decimals(QuantityKind::Diameter, UnitSystem::Imperial),
        2
    );
    assert_eq!(display_decimals(QuantityKind::Depth, UnitSystem::Metric), 1);
    assert_eq!(
        display_decimals(QuantityKind::Power, UnitSystem::Imperial),
        1
    );
    assert_eq!(
        display_decimals(QuantityKind::Force, UnitSystem::Metric),
        0
    );
    assert_eq!(
        display_decimals(QuantityKind::Weight, UnitSystem::Imperial),
        0
    );
}

#[test]
fn format_with_label_joins_value_and_symbol() {
    assert_eq!(
        format_with_label(12.345, "pressure", UnitSystem::Metric),
        "12.3 MPa"
    );
    assert_eq!(
        format_with_label(12.345, "pressure", UnitSystem::Imperial),
        "12 psi"
    );
    assert_eq!(
        format_with_label(2500.0, "depth", UnitSystem::Imperial),
        "2500.0 ft"
    );
}

#[test]
fn format_with_label_unknown_key_keeps_default_places() {
    // 未知键名:默认两位小数,符号为空
    assert_eq!(format_with_label(5.0, "bogus", UnitSystem::Metric), "5.00 ");
}
