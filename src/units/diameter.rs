use serde::{Deserialize, Serialize};

/// 管径/杆径单位。in 与 mm 之间换算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiameterUnit {
    Inch,
    Millimeter,
}

impl DiameterUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DiameterUnit::Inch => "in",
            DiameterUnit::Millimeter => "mm",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "in" => Some(DiameterUnit::Inch),
            "mm" => Some(DiameterUnit::Millimeter),
            _ => None,
        }
    }
}

const MM_PER_INCH: f64 = 25.4;

/// 英寸转毫米。
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// 毫米转英寸。
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// 直径在两种单位间转换。
pub fn convert_diameter(value: f64, from: DiameterUnit, to: DiameterUnit) -> f64 {
    match (from, to) {
        (DiameterUnit::Inch, DiameterUnit::Millimeter) => inches_to_mm(value),
        (DiameterUnit::Millimeter, DiameterUnit::Inch) => mm_to_inches(value),
        _ => value,
    }
}
