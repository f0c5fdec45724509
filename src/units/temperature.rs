use serde::{Deserialize, Serialize};

/// 温度单位。°F 与 °C 之间为仿射变换,不是单一比例系数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// 前端约定的单位符号,带度数符号。
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }

    /// 按符号严格匹配解析,必须带 ° 前缀。
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "°F" => Some(TemperatureUnit::Fahrenheit),
            "°C" => Some(TemperatureUnit::Celsius),
            _ => None,
        }
    }
}

/// 华氏度转摄氏度。
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// 摄氏度转华氏度。
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// 温度在两种单位间转换。
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => fahrenheit_to_celsius(value),
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => celsius_to_fahrenheit(value),
        _ => value,
    }
}
