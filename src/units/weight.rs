use serde::{Deserialize, Serialize};

/// 重量单位。lbs 与 kg 之间换算。
/// 英制下重量与力共用符号 lbs;重量换算未接入通用调度 convert_value。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Pound,
    Kilogram,
}

impl WeightUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Pound => "lbs",
            WeightUnit::Kilogram => "kg",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "lbs" => Some(WeightUnit::Pound),
            "kg" => Some(WeightUnit::Kilogram),
            _ => None,
        }
    }
}

const KG_PER_LB: f64 = 0.453592;

/// 磅转千克。
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// 千克转磅。
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// 重量在两种单位间转换。
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Pound, WeightUnit::Kilogram) => lbs_to_kg(value),
        (WeightUnit::Kilogram, WeightUnit::Pound) => kg_to_lbs(value),
        _ => value,
    }
}
