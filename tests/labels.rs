//! 单位标签与显示名查询的回归测试。
use oilfield_unit_toolbox::i18n::Language;
use oilfield_unit_toolbox::labels::{all_unit_labels, label_for, unit_display_text, unit_label};
use oilfield_unit_toolbox::quantity::{QuantityKind, UnitSystem};

#[test]
fn pressure_labels_follow_unit_system() {
    assert_eq!(unit_label("pressure", UnitSystem::Metric), "MPa");
    assert_eq!(unit_label("pressure", UnitSystem::Imperial), "psi");
}

#[test]
fn unknown_or_wrong_case_key_gives_empty() {
    assert_eq!(unit_label("bogus", UnitSystem::Metric), "");
    assert_eq!(unit_label("Depth", UnitSystem::Metric), "");
    assert_eq!(
        unit_display_text("bogus", UnitSystem::Metric, Language::Zh),
        ""
    );
}

#[test]
fn chinese_display_text() {
    assert_eq!(
        unit_display_text("power", UnitSystem::Imperial, Language::Zh),
        "马力"
    );
    assert_eq!(
        unit_display_text("depth", UnitSystem::Metric, Language::Zh),
        "米"
    );
    assert_eq!(
        unit_display_text("flow", UnitSystem::Metric, Language::Zh),
        "立方米/天"
    );
    assert_eq!(
        unit_display_text("pressure", UnitSystem::Imperial, Language::Zh),
        "磅每平方英寸"
    );
}

#[test]
fn english_display_text_equals_label() {
    for system in [UnitSystem::Metric, UnitSystem::Imperial] {
        for kind in QuantityKind::ALL {
            assert_eq!(
                unit_display_text(kind.key(), system, Language::En),
                label_for(kind, system),
                "kind={kind:?} system={system:?}"
            );
        }
    }
}

#[test]
fn all_labels_cover_every_quantity_in_order() {
    let metric = all_unit_labels(UnitSystem::Metric);
    assert_eq!(metric.len(), 9);
    assert_eq!(metric[0], ("depth", "m"));
    assert_eq!(metric[4], ("flow", "m³/d"));
    assert_eq!(metric[8], ("weight", "kg"));

    let imperial = all_unit_labels(UnitSystem::Imperial);
    assert_eq!(imperial[2], ("pressure", "psi"));
    assert_eq!(imperial[5], ("density", "lb/ft³"));
    // 英制下重量与力共用 lbs
    assert_eq!(imperial[7], ("force", "lbs"));
    assert_eq!(imperial[8], ("weight", "lbs"));
}
