use serde::{Deserialize, Serialize};

/// 日产量单位。bbl/d 与 m³/d 之间换算,沿用前端约定的 0.159 桶米系数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    BarrelPerDay,
    CubicMeterPerDay,
}

impl FlowUnit {
    /// 前端约定的单位符号,立方采用上标 ³。
    pub fn symbol(self) -> &'static str {
        match self {
            FlowUnit::BarrelPerDay => "bbl/d",
            FlowUnit::CubicMeterPerDay => "m³/d",
        }
    }

    /// 按符号严格匹配解析,"m3/d" 等写法不被接受。
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "bbl/d" => Some(FlowUnit::BarrelPerDay),
            "m³/d" => Some(FlowUnit::CubicMeterPerDay),
            _ => None,
        }
    }
}

const M3_PER_BBL: f64 = 0.159;

/// 桶/天转立方米/天。
pub fn bbl_to_m3(bbl: f64) -> f64 {
    bbl * M3_PER_BBL
}

/// 立方米/天转桶/天。
pub fn m3_to_bbl(m3: f64) -> f64 {
    m3 / M3_PER_BBL
}

/// 流量在两种单位间转换。
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    match (from, to) {
        (FlowUnit::BarrelPerDay, FlowUnit::CubicMeterPerDay) => bbl_to_m3(value),
        (FlowUnit::CubicMeterPerDay, FlowUnit::BarrelPerDay) => m3_to_bbl(value),
        _ => value,
    }
}
