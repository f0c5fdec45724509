use serde::{Deserialize, Serialize};

/// 力单位。杆柱载荷等在 lbs 与 N 之间换算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    PoundForce,
    Newton,
}

impl ForceUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            ForceUnit::PoundForce => "lbs",
            ForceUnit::Newton => "N",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "lbs" => Some(ForceUnit::PoundForce),
            "N" => Some(ForceUnit::Newton),
            _ => None,
        }
    }
}

const NEWTONS_PER_LB: f64 = 4.448;

/// 磅力转牛顿。
pub fn lbs_to_newtons(lbs: f64) -> f64 {
    lbs * NEWTONS_PER_LB
}

/// 牛顿转磅力。
pub fn newtons_to_lbs(newtons: f64) -> f64 {
    newtons / NEWTONS_PER_LB
}

/// 力在两种单位间转换。
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    match (from, to) {
        (ForceUnit::PoundForce, ForceUnit::Newton) => lbs_to_newtons(value),
        (ForceUnit::Newton, ForceUnit::PoundForce) => newtons_to_lbs(value),
        _ => value,
    }
}
