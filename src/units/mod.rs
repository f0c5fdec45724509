//! 单位定义与换算模块。每个物理量一个子模块,符号拼写与前端约定严格一致。

pub mod density;
pub mod depth;
pub mod diameter;
pub mod flow;
pub mod force;
pub mod power;
pub mod pressure;
pub mod temperature;
pub mod weight;

pub use density::{convert_density, kgm3_to_lbft3, lbft3_to_kgm3, DensityUnit};
pub use depth::{convert_depth, feet_to_meters, meters_to_feet, DepthUnit};
pub use diameter::{convert_diameter, inches_to_mm, mm_to_inches, DiameterUnit};
pub use flow::{bbl_to_m3, convert_flow, m3_to_bbl, FlowUnit};
pub use force::{convert_force, lbs_to_newtons, newtons_to_lbs, ForceUnit};
pub use power::{convert_power, hp_to_kw, kw_to_hp, PowerUnit};
pub use pressure::{convert_pressure, mpa_to_psi, psi_to_mpa, PressureUnit};
pub use temperature::{
    celsius_to_fahrenheit, convert_temperature, fahrenheit_to_celsius, TemperatureUnit,
};
pub use weight::{convert_weight, kg_to_lbs, lbs_to_kg, WeightUnit};
