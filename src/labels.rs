use crate::i18n::Language;
use crate::quantity::{QuantityKind, UnitSystem};
use crate::units::*;

/// 公制符号表。符号拼写取自各单位模块,保证与换算侧一致。
fn metric_symbol(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Depth => DepthUnit::Meter.symbol(),
        QuantityKind::Diameter => DiameterUnit::Millimeter.symbol(),
        QuantityKind::Pressure => PressureUnit::MegaPascal.symbol(),
        QuantityKind::Temperature => TemperatureUnit::Celsius.symbol(),
        QuantityKind::Flow => FlowUnit::CubicMeterPerDay.symbol(),
        QuantityKind::Density => DensityUnit::KilogramPerCubicMeter.symbol(),
        QuantityKind::Power => PowerUnit::Kilowatt.symbol(),
        QuantityKind::Force => ForceUnit::Newton.symbol(),
        QuantityKind::Weight => WeightUnit::Kilogram.symbol(),
    }
}

/// 英制符号表。重量与力在英制下同为 lbs。
fn imperial_symbol(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Depth => DepthUnit::Foot.symbol(),
        QuantityKind::Diameter => DiameterUnit::Inch.symbol(),
        QuantityKind::Pressure => PressureUnit::Psi.symbol(),
        QuantityKind::Temperature => TemperatureUnit::Fahrenheit.symbol(),
        QuantityKind::Flow => FlowUnit::BarrelPerDay.symbol(),
        QuantityKind::Density => DensityUnit::PoundPerCubicFoot.symbol(),
        QuantityKind::Power => PowerUnit::Horsepower.symbol(),
        QuantityKind::Force => ForceUnit::PoundForce.symbol(),
        QuantityKind::Weight => WeightUnit::Pound.symbol(),
    }
}

/// 公制单位的中文名称。
fn metric_text_zh(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Depth => "米",
        QuantityKind::Diameter => "毫米",
        QuantityKind::Pressure => "兆帕",
        QuantityKind::Temperature => "摄氏度",
        QuantityKind::Flow => "立方米/天",
        QuantityKind::Density => "千克/立方米",
        QuantityKind::Power => "千瓦",
        QuantityKind::Force => "牛顿",
        QuantityKind::Weight => "千克",
    }
}

/// 英制单位的中文名称。
fn imperial_text_zh(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Depth => "英尺",
        QuantityKind::Diameter => "英寸",
        QuantityKind::Pressure => "磅每平方英寸",
        QuantityKind::Temperature => "华氏度",
        QuantityKind::Flow => "桶每天",
        QuantityKind::Density => "磅每立方英尺",
        QuantityKind::Power => "马力",
        QuantityKind::Force => "磅力",
        QuantityKind::Weight => "磅",
    }
}

/// 按物理量与单位制查询单位符号,类型化入口。
pub fn label_for(kind: QuantityKind, system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => metric_symbol(kind),
        UnitSystem::Imperial => imperial_symbol(kind),
    }
}

/// 按 UI 侧键名查询单位符号。未知键返回空串,不报错。
pub fn unit_label(unit_type: &str, system: UnitSystem) -> &'static str {
    match QuantityKind::from_key(unit_type) {
        Some(kind) => label_for(kind, system),
        None => "",
    }
}

/// 按物理量查询显示名称,类型化入口。非中文环境直接给单位符号。
pub fn display_text_for(kind: QuantityKind, system: UnitSystem, lang: Language) -> &'static str {
    match lang {
        Language::Zh => match system {
            UnitSystem::Metric => metric_text_zh(kind),
            UnitSystem::Imperial => imperial_text_zh(kind),
        },
        Language::En => label_for(kind, system),
    }
}

/// 按 UI 侧键名查询单位显示名称。未知键返回空串。
pub fn unit_display_text(unit_type: &str, system: UnitSystem, lang: Language) -> &'static str {
    match QuantityKind::from_key(unit_type) {
        Some(kind) => display_text_for(kind, system, lang),
        None => "",
    }
}

/// 给出一个单位制下全部(键名, 符号)对,顺序与标签表一致。
pub fn all_unit_labels(system: UnitSystem) -> [(&'static str, &'static str); 9] {
    QuantityKind::ALL.map(|kind| (kind.key(), label_for(kind, system)))
}
