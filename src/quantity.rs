use serde::{Deserialize, Serialize};

/// 前端涉及的物理量种类。键名与 UI 侧约定的字符串一一对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Depth,
    Diameter,
    Pressure,
    Temperature,
    Flow,
    Density,
    Power,
    Force,
    Weight,
}

impl QuantityKind {
    /// 全部物理量,顺序与标签表一致。
    pub const ALL: [QuantityKind; 9] = [
        QuantityKind::Depth,
        QuantityKind::Diameter,
        QuantityKind::Pressure,
        QuantityKind::Temperature,
        QuantityKind::Flow,
        QuantityKind::Density,
        QuantityKind::Power,
        QuantityKind::Force,
        QuantityKind::Weight,
    ];

    /// 按 UI 侧键名解析。严格区分大小写,未知键返回 None。
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "depth" => Some(QuantityKind::Depth),
            "diameter" => Some(QuantityKind::Diameter),
            "pressure" => Some(QuantityKind::Pressure),
            "temperature" => Some(QuantityKind::Temperature),
            "flow" => Some(QuantityKind::Flow),
            "density" => Some(QuantityKind::Density),
            "power" => Some(QuantityKind::Power),
            "force" => Some(QuantityKind::Force),
            "weight" => Some(QuantityKind::Weight),
            _ => None,
        }
    }

    /// UI 侧约定的键名。
    pub fn key(self) -> &'static str {
        match self {
            QuantityKind::Depth => "depth",
            QuantityKind::Diameter => "diameter",
            QuantityKind::Pressure => "pressure",
            QuantityKind::Temperature => "temperature",
            QuantityKind::Flow => "flow",
            QuantityKind::Density => "density",
            QuantityKind::Power => "power",
            QuantityKind::Force => "force",
            QuantityKind::Weight => "weight",
        }
    }
}

/// 单位制,对应界面上的公制/英制开关。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    Metric,
    Imperial,
}
