use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::format;
use crate::i18n::{keys, Translator};
use crate::labels;
use crate::quantity::UnitSystem;

/// 主菜单选项。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Labels,
    Settings,
    Exit,
}

/// 显示主菜单并返回选择结果。
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_LABELS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Labels),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 处理单位换算菜单。
pub fn handle_convert(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    println!("{}", tr.t(keys::CONVERT_SUPPORTED_LINE));
    println!("{}", tr.t(keys::CONVERT_NOTE_PASSTHROUGH));
    let value = read_f64(tr, tr.t(keys::CONVERT_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::CONVERT_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::CONVERT_PROMPT_TO_UNIT))?;
    let result = conversion::convert_value(value, from_unit.trim(), to_unit.trim());
    println!(
        "{} {} {}",
        tr.t(keys::CONVERT_RESULT),
        format::format_value(result, None),
        to_unit.trim()
    );
    Ok(())
}

/// 按当前单位制列出全部单位标签。
pub fn handle_labels(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LABELS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_SYSTEM),
        system_name(tr, cfg.unit_system)
    );
    println!("{}", tr.t(keys::LABELS_COLUMNS));
    for (key, label) in labels::all_unit_labels(cfg.unit_system) {
        let text = labels::unit_display_text(key, cfg.unit_system, tr.language());
        println!("{key:<12} {label:<8} {text}");
    }
    Ok(())
}

/// 处理设置菜单。
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_SYSTEM),
        system_name(tr, cfg.unit_system)
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.unit_system = match sel.trim() {
        "1" => UnitSystem::Metric,
        "2" => UnitSystem::Imperial,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.unit_system
        }
    };
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_SAVED),
        system_name(tr, cfg.unit_system)
    );
    Ok(())
}

/// 单位制的本地化名称。
pub fn system_name(tr: &Translator, system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => tr.t(keys::SYSTEM_METRIC),
        UnitSystem::Imperial => tr.t(keys::SYSTEM_IMPERIAL),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
