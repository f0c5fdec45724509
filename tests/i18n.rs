//! 语言解析与界面文案查询的回归测试。
use oilfield_unit_toolbox::i18n::{keys, resolve_language, Language, Translator};

#[test]
fn cli_flag_wins_over_config() {
    assert_eq!(resolve_language("en", Some("zh-cn")), "en");
    assert_eq!(resolve_language("zh", Some("en-us")), "zh");
}

#[test]
fn config_used_when_cli_is_auto() {
    assert_eq!(resolve_language("auto", Some("zh-cn")), "zh-cn");
    assert_eq!(resolve_language("", Some("en")), "en");
}

#[test]
fn regional_codes_normalize_to_primary_forms() {
    assert_eq!(resolve_language("zh-TW", None), "zh-cn");
    assert_eq!(resolve_language("en-GB", None), "en-us");
    assert_eq!(resolve_language("EN-US", None), "en-us");
}

#[test]
fn translator_language_and_code() {
    let zh = Translator::new("zh-cn");
    assert_eq!(zh.language(), Language::Zh);
    assert_eq!(zh.language_code(), "zh");

    let en = Translator::new("en-us");
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.language_code(), "en");

    // 未知代码回落中文
    assert_eq!(Translator::new("fr").language(), Language::Zh);
}

#[test]
fn lookup_by_language() {
    let zh = Translator::new("zh");
    let en = Translator::new("en");
    assert_eq!(zh.t(keys::SYSTEM_METRIC), "公制");
    assert_eq!(en.t(keys::SYSTEM_METRIC), "Metric");
    assert_eq!(en.t(keys::SYSTEM_IMPERIAL), "Imperial");
    assert_eq!(zh.t("no.such.key"), "[missing translation]");
}
