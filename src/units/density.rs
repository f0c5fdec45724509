use serde::{Deserialize, Serialize};

/// 密度单位。lb/ft³ 与 kg/m³ 之间换算。
/// 注意:密度换算函数尚未接入通用调度 convert_value,与前端现状一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    PoundPerCubicFoot,
    KilogramPerCubicMeter,
}

impl DensityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::PoundPerCubicFoot => "lb/ft³",
            DensityUnit::KilogramPerCubicMeter => "kg/m³",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "lb/ft³" => Some(DensityUnit::PoundPerCubicFoot),
            "kg/m³" => Some(DensityUnit::KilogramPerCubicMeter),
            _ => None,
        }
    }
}

const KGM3_PER_LBFT3: f64 = 16.018;

/// 磅/立方英尺转千克/立方米。
pub fn lbft3_to_kgm3(lbft3: f64) -> f64 {
    lbft3 * KGM3_PER_LBFT3
}

/// 千克/立方米转磅/立方英尺。
pub fn kgm3_to_lbft3(kgm3: f64) -> f64 {
    kgm3 / KGM3_PER_LBFT3
}

/// 密度在两种单位间转换。
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    match (from, to) {
        (DensityUnit::PoundPerCubicFoot, DensityUnit::KilogramPerCubicMeter) => {
            lbft3_to_kgm3(value)
        }
        (DensityUnit::KilogramPerCubicMeter, DensityUnit::PoundPerCubicFoot) => {
            kgm3_to_lbft3(value)
        }
        _ => value,
    }
}
