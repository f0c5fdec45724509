use serde::{Deserialize, Serialize};

/// 功率单位。电机铭牌的 HP 与 kW 之间换算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Horsepower,
    Kilowatt,
}

impl PowerUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PowerUnit::Horsepower => "HP",
            PowerUnit::Kilowatt => "kW",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "HP" => Some(PowerUnit::Horsepower),
            "kW" => Some(PowerUnit::Kilowatt),
            _ => None,
        }
    }
}

const KW_PER_HP: f64 = 0.746;

/// 马力转千瓦。
pub fn hp_to_kw(hp: f64) -> f64 {
    hp * KW_PER_HP
}

/// 千瓦转马力。
pub fn kw_to_hp(kw: f64) -> f64 {
    kw / KW_PER_HP
}

/// 功率在两种单位间转换。
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    match (from, to) {
        (PowerUnit::Horsepower, PowerUnit::Kilowatt) => hp_to_kw(value),
        (PowerUnit::Kilowatt, PowerUnit::Horsepower) => kw_to_hp(value),
        _ => value,
    }
}
