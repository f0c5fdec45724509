use serde::{Deserialize, Serialize};

/// 压力单位。psi 与 MPa 之间换算,系数以 psi/MPa 表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    MegaPascal,
}

impl PressureUnit {
    /// 前端约定的单位符号。
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Psi => "psi",
            PressureUnit::MegaPascal => "MPa",
        }
    }

    /// 按符号严格匹配解析,"mpa" 等写法不被接受。
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "psi" => Some(PressureUnit::Psi),
            "MPa" => Some(PressureUnit::MegaPascal),
            _ => None,
        }
    }
}

const PSI_PER_MPA: f64 = 145.038;

/// psi 转 MPa。
pub fn psi_to_mpa(psi: f64) -> f64 {
    psi / PSI_PER_MPA
}

/// MPa 转 psi。
pub fn mpa_to_psi(mpa: f64) -> f64 {
    mpa * PSI_PER_MPA
}

/// 压力在两种单位间转换。
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    match (from, to) {
        (PressureUnit::Psi, PressureUnit::MegaPascal) => psi_to_mpa(value),
        (PressureUnit::MegaPascal, PressureUnit::Psi) => mpa_to_psi(value),
        _ => value,
    }
}
