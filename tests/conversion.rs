//! 换算函数与 convert_value 字符串入口的回归测试。
use oilfield_unit_toolbox::conversion::convert_value;
use oilfield_unit_toolbox::units::*;

fn assert_close(a: f64, b: f64) {
    let tol = 1e-9 * b.abs().max(1.0);
    assert!((a - b).abs() < tol, "{a} vs {b}");
}

#[test]
fn anchor_values() {
    // 100 ft = 30.48 m,系数精确
    assert_eq!(convert_value(100.0, "ft", "m"), 30.48);
    assert_eq!(convert_value(30.48, "m", "ft"), 100.0);
    // 水的沸点与冰点
    assert_eq!(convert_value(212.0, "°F", "°C"), 100.0);
    assert_eq!(convert_value(0.0, "°C", "°F"), 32.0);
    // 1000 psi ≈ 6.8947 MPa
    let mpa = convert_value(1000.0, "psi", "MPa");
    assert!((mpa - 6.8947).abs() < 1e-4, "expected ~6.8947 MPa, got {mpa}");
    assert_close(convert_value(mpa, "MPa", "psi"), 1000.0);
}

#[test]
fn wired_directions_cover_seven_quantities() {
    assert_close(convert_value(1.0, "in", "mm"), 25.4);
    assert_close(convert_value(25.4, "mm", "in"), 1.0);
    assert_close(convert_value(5.0, "bbl/d", "m³/d"), 0.795);
    assert_close(convert_value(0.795, "m³/d", "bbl/d"), 5.0);
    assert_close(convert_value(1.0, "HP", "kW"), 0.746);
    assert_close(convert_value(0.746, "kW", "HP"), 1.0);
    assert_close(convert_value(1.0, "lbs", "N"), 4.448);
    assert_close(convert_value(4.448, "N", "lbs"), 1.0);
}

#[test]
fn forward_inverse_roundtrips() {
    let values = [-1234.5, -1.0, 0.0, 0.159, 37.8, 9000.0];
    for v in values {
        assert_close(meters_to_feet(feet_to_meters(v)), v);
        assert_close(mm_to_inches(inches_to_mm(v)), v);
        assert_close(mpa_to_psi(psi_to_mpa(v)), v);
        assert_close(celsius_to_fahrenheit(fahrenheit_to_celsius(v)), v);
        assert_close(m3_to_bbl(bbl_to_m3(v)), v);
        assert_close(kgm3_to_lbft3(lbft3_to_kgm3(v)), v);
        assert_close(kw_to_hp(hp_to_kw(v)), v);
        assert_close(newtons_to_lbs(lbs_to_newtons(v)), v);
        assert_close(kg_to_lbs(lbs_to_kg(v)), v);
    }
}

#[test]
fn same_symbol_is_identity() {
    let symbols = [
        "ft", "m", "in", "mm", "psi", "MPa", "°F", "°C", "bbl/d", "m³/d", "HP", "kW", "lbs",
        "N", "kg", "bogus",
    ];
    for unit in symbols {
        assert_eq!(convert_value(12.5, unit, unit), 12.5, "unit={unit}");
    }
}

#[test]
fn unknown_pairs_pass_through() {
    // 跨物理量与无法识别的符号一律原样返回
    assert_eq!(convert_value(7.0, "ft", "mm"), 7.0);
    assert_eq!(convert_value(7.0, "psi", "°C"), 7.0);
    assert_eq!(convert_value(7.0, "bogus", "m"), 7.0);
    assert_eq!(convert_value(7.0, "ft", ""), 7.0);
}

#[test]
fn density_and_weight_not_dispatched() {
    // 密度与重量有独立换算函数,但未接入字符串入口
    assert_eq!(convert_value(5.0, "lb/ft³", "kg/m³"), 5.0);
    assert_eq!(convert_value(5.0, "lbft3", "kgm3"), 5.0);
    assert_eq!(convert_value(5.0, "kg/m³", "lb/ft³"), 5.0);
    assert_eq!(convert_value(5.0, "lbs", "kg"), 5.0);
    assert_eq!(convert_value(5.0, "kg", "lbs"), 5.0);
    // 函数本身可直接调用
    assert_close(lbft3_to_kgm3(1.0), 16.018);
    assert_close(kgm3_to_lbft3(16.018), 1.0);
    assert_close(lbs_to_kg(1.0), 0.453592);
}

#[test]
fn symbols_are_case_sensitive() {
    assert!(DepthUnit::from_symbol("FT").is_none());
    assert!(PressureUnit::from_symbol("mpa").is_none());
    assert!(PressureUnit::from_symbol("MPa").is_some());
    assert!(TemperatureUnit::from_symbol("°F").is_some());
    assert_eq!(convert_value(100.0, "FT", "M"), 100.0);
}

#[test]
fn typed_convert_same_unit_is_identity() {
    assert_eq!(convert_depth(3.5, DepthUnit::Foot, DepthUnit::Foot), 3.5);
    assert_eq!(
        convert_power(3.5, PowerUnit::Kilowatt, PowerUnit::Kilowatt),
        3.5
    );
    assert_eq!(
        convert_weight(3.5, WeightUnit::Kilogram, WeightUnit::Kilogram),
        3.5
    );
}
