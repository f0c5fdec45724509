use crate::labels;
use crate::quantity::{QuantityKind, UnitSystem};

/// 未指定位数时的默认小数位。
pub const DEFAULT_DECIMALS: usize = 2;

/// 将数值格式化为定长小数字符串。`decimals` 为 None 时取默认两位。
pub fn format_value(value: f64, decimals: Option<usize>) -> String {
    let places = decimals.unwrap_or(DEFAULT_DECIMALS);
    format!("{value:.places$}")
}

/// 各物理量在报表中的惯用小数位。压力与管径随单位制不同。
pub fn display_decimals(kind: QuantityKind, system: UnitSystem) -> usize {
    match kind {
        QuantityKind::Depth => 1,
        QuantityKind::Diameter => match system {
            UnitSystem::Metric => 0,
            UnitSystem::Imperial => 2,
        },
        QuantityKind::Pressure => match system {
            UnitSystem::Metric => 1,
            UnitSystem::Imperial => 0,
        },
        QuantityKind::Temperature => 0,
        QuantityKind::Flow => 1,
        QuantityKind::Density => 1,
        QuantityKind::Power => 1,
        QuantityKind::Force => 0,
        QuantityKind::Weight => 0,
    }
}

/// 按物理量的惯用位数格式化并拼接单位符号。未知键名时位数取默认,符号为空。
pub fn format_with_label(value: f64, unit_type: &str, system: UnitSystem) -> String {
    let (places, label) = match QuantityKind::from_key(unit_type) {
        Some(kind) => (display_decimals(kind, system), labels::label_for(kind, system)),
        None => (DEFAULT_DECIMALS, ""),
    };
    format!("{} {}", format_value(value, Some(places)), label)
}
