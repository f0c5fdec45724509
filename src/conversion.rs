use crate::units::*;

/// 通用数值换算。按前端传来的单位符号严格匹配:同符号直接返回,
/// 未匹配到任何已接线方向时原样返回。这是约定的静默降级,不报错,
/// 调用方(界面)永远拿得到一个可显示的数值。
///
/// 已接线方向共十四条:深度、直径、压力、温度、流量、功率、力,
/// 每种各两个方向。密度与重量的换算函数存在但未接入本调度,
/// 与前端现状保持一致。
pub fn convert_value(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    if from_unit == to_unit {
        return value;
    }

    // 深度
    if let (Some(from), Some(to)) = (
        DepthUnit::from_symbol(from_unit),
        DepthUnit::from_symbol(to_unit),
    ) {
        return convert_depth(value, from, to);
    }

    // 直径
    if let (Some(from), Some(to)) = (
        DiameterUnit::from_symbol(from_unit),
        DiameterUnit::from_symbol(to_unit),
    ) {
        return convert_diameter(value, from, to);
    }

    // 压力
    if let (Some(from), Some(to)) = (
        PressureUnit::from_symbol(from_unit),
        PressureUnit::from_symbol(to_unit),
    ) {
        return convert_pressure(value, from, to);
    }

    // 温度
    if let (Some(from), Some(to)) = (
        TemperatureUnit::from_symbol(from_unit),
        TemperatureUnit::from_symbol(to_unit),
    ) {
        return convert_temperature(value, from, to);
    }

    // 流量
    if let (Some(from), Some(to)) = (
        FlowUnit::from_symbol(from_unit),
        FlowUnit::from_symbol(to_unit),
    ) {
        return convert_flow(value, from, to);
    }

    // 功率
    if let (Some(from), Some(to)) = (
        PowerUnit::from_symbol(from_unit),
        PowerUnit::from_symbol(to_unit),
    ) {
        return convert_power(value, from, to);
    }

    // 力
    if let (Some(from), Some(to)) = (
        ForceUnit::from_symbol(from_unit),
        ForceUnit::from_symbol(to_unit),
    ) {
        return convert_force(value, from, to);
    }

    value
}
