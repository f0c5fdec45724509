use sys_locale::get_locale;

/// 字符串键名的命名空间。
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_LABELS: &str = "main_menu.labels";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const CONVERT_SUPPORTED_LINE: &str = "convert.supported_line";
    pub const CONVERT_NOTE_PASSTHROUGH: &str = "convert.note_passthrough";
    pub const CONVERT_PROMPT_VALUE: &str = "convert.prompt_value";
    pub const CONVERT_PROMPT_FROM_UNIT: &str = "convert.prompt_from_unit";
    pub const CONVERT_PROMPT_TO_UNIT: &str = "convert.prompt_to_unit";
    pub const CONVERT_RESULT: &str = "convert.result";

    pub const LABELS_HEADING: &str = "labels.heading";
    pub const LABELS_COLUMNS: &str = "labels.columns";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const SYSTEM_METRIC: &str = "system.metric";
    pub const SYSTEM_IMPERIAL: &str = "system.imperial";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Zh,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Zh
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }
}

/// 提供运行期的界面文案。
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 按语言代码(zh/en)创建翻译器。未知代码回落到中文。
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 取翻译文案。英文缺失的键回落到中文字符串。
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| zh(key)),
            Language::Zh => zh(key),
        }
    }
}

/// 按 CLI 参数、配置文件、系统环境的顺序决定语言代码。
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "zh-cn".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "zh" => Some("zh".into()),
        "zh-cn" => Some("zh-cn".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("zh") => Some("zh-cn".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "zh" => Some("zh".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 从系统区域设置推断语言。
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn zh(key: &str) -> &'static str {
    use keys::*;
    match key {
        APP_EXIT => "程序退出。",
        MAIN_MENU_TITLE => "\n=== Oilfield Unit Toolbox ===",
        MAIN_MENU_CONVERT => "1) 单位换算",
        MAIN_MENU_LABELS => "2) 单位标签一览",
        MAIN_MENU_SETTINGS => "3) 设置",
        MAIN_MENU_EXIT => "0) 退出",
        PROMPT_MENU_SELECT => "菜单选择: ",
        INVALID_SELECTION_RETRY => "输入无效,请重新选择。",
        CONVERT_HEADING => "\n-- 单位换算 --",
        CONVERT_SUPPORTED_LINE => {
            "支持: ft↔m  in↔mm  psi↔MPa  °F↔°C  bbl/d↔m³/d  HP↔kW  lbs↔N"
        }
        CONVERT_NOTE_PASSTHROUGH => "注: 无法识别的单位对按原值返回,不报错。",
        CONVERT_PROMPT_VALUE => "输入数值: ",
        CONVERT_PROMPT_FROM_UNIT => "源单位(如 ft, psi, °C): ",
        CONVERT_PROMPT_TO_UNIT => "目标单位(如 m, MPa, °F): ",
        CONVERT_RESULT => "换算结果:",
        LABELS_HEADING => "\n-- 单位标签 --",
        LABELS_COLUMNS => "类别          符号      名称",
        SETTINGS_HEADING => "\n-- 设置 --",
        SETTINGS_CURRENT_SYSTEM => "当前单位制:",
        SETTINGS_OPTIONS => "1) 公制  2) 英制",
        SETTINGS_PROMPT_CHANGE => "输入编号修改(回车取消): ",
        SETTINGS_INVALID => "输入无效,保持原设置。",
        SETTINGS_SAVED => "单位制已更新:",
        SYSTEM_METRIC => "公制",
        SYSTEM_IMPERIAL => "英制",
        ERROR_INVALID_NUMBER => "请输入数字。",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Oilfield Unit Toolbox ===",
        MAIN_MENU_CONVERT => "1) Unit Converter",
        MAIN_MENU_LABELS => "2) Unit Labels",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CONVERT_HEADING => "\n-- Unit Conversion --",
        CONVERT_SUPPORTED_LINE => {
            "Supported: ft↔m  in↔mm  psi↔MPa  °F↔°C  bbl/d↔m³/d  HP↔kW  lbs↔N"
        }
        CONVERT_NOTE_PASSTHROUGH => "Note: unrecognized unit pairs return the value unchanged.",
        CONVERT_PROMPT_VALUE => "Value: ",
        CONVERT_PROMPT_FROM_UNIT => "From unit (ex: ft, psi, °C): ",
        CONVERT_PROMPT_TO_UNIT => "To unit (ex: m, MPa, °F): ",
        CONVERT_RESULT => "Result:",
        LABELS_HEADING => "\n-- Unit Labels --",
        LABELS_COLUMNS => "category      symbol    name",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Metric  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        SYSTEM_METRIC => "Metric",
        SYSTEM_IMPERIAL => "Imperial",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    })
}
