use serde::{Deserialize, Serialize};

/// 深度单位。井深、下泵深度等长度量在 ft 与 m 之间换算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthUnit {
    Foot,
    Meter,
}

impl DepthUnit {
    /// 前端约定的单位符号。
    pub fn symbol(self) -> &'static str {
        match self {
            DepthUnit::Foot => "ft",
            DepthUnit::Meter => "m",
        }
    }

    /// 按符号严格匹配解析,不做大小写或别名归一。
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "ft" => Some(DepthUnit::Foot),
            "m" => Some(DepthUnit::Meter),
            _ => None,
        }
    }
}

const METERS_PER_FOOT: f64 = 0.3048;

/// 英尺转米。
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

/// 米转英尺。
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

/// 深度在两种单位间转换。
pub fn convert_depth(value: f64, from: DepthUnit, to: DepthUnit) -> f64 {
    match (from, to) {
        (DepthUnit::Foot, DepthUnit::Meter) => feet_to_meters(value),
        (DepthUnit::Meter, DepthUnit::Foot) => meters_to_feet(value),
        _ => value,
    }
}
