use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SPECTRAL: &str = "main_menu.spectral";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_POWER: &str = "main_menu.power";
    pub const MAIN_MENU_FIBER: &str = "main_menu.fiber";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const SPECTRAL_HEADING: &str = "spectral.heading";
    pub const SPECTRAL_FIELDS_HINT: &str = "spectral.fields_hint";
    pub const SPECTRAL_ANCHOR_HINT: &str = "spectral.anchor_hint";
    pub const SPECTRAL_PROMPT_FIELD: &str = "spectral.prompt_field";
    pub const SPECTRAL_PROMPT_VALUE: &str = "spectral.prompt_value";
    pub const SPECTRAL_PROMPT_UNIT: &str = "spectral.prompt_unit";
    pub const SPECTRAL_ANCHOR_SET: &str = "spectral.anchor_set";
    pub const SPECTRAL_UNKNOWN_FIELD: &str = "spectral.unknown_field";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const POWER_HEADING: &str = "power.heading";
    pub const POWER_PROMPT_FIELD: &str = "power.prompt_field";
    pub const POWER_PROMPT_VALUE: &str = "power.prompt_value";
    pub const POWER_UNKNOWN_FIELD: &str = "power.unknown_field";

    pub const FIBER_HEADING: &str = "fiber.heading";
    pub const FIBER_PROMPT_WAVELENGTH: &str = "fiber.prompt_wavelength";
    pub const FIBER_PROMPT_SPOT: &str = "fiber.prompt_spot";
    pub const FIBER_PROMPT_MFD: &str = "fiber.prompt_mfd";
    pub const FIBER_RESULT: &str = "fiber.result";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
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
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
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

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Laser Optics Toolbox ===",
        MAIN_MENU_SPECTRAL => "1) 파장/주파수 연동 변환",
        MAIN_MENU_UNIT_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_POWER => "3) 파워 변환 (dBm/mW/W)",
        MAIN_MENU_FIBER => "4) 파이버 커플링 초점거리",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        SPECTRAL_HEADING => "\n-- 파장/주파수 연동 변환 --",
        SPECTRAL_FIELDS_HINT => {
            "필드: f(주파수) l(파장) k(파수) df(Δ주파수) dl(Δ파장) dk(Δ파수)"
        }
        SPECTRAL_ANCHOR_HINT => {
            "Δ 필드에 값 없이 엔터를 치면 그 필드가 앵커가 됩니다. 빈 필드 입력=돌아가기."
        }
        SPECTRAL_PROMPT_FIELD => "편집할 필드: ",
        SPECTRAL_PROMPT_VALUE => "값 (빈 입력=앵커만 지정): ",
        SPECTRAL_PROMPT_UNIT => "단위 (빈 입력=현재 단위): ",
        SPECTRAL_ANCHOR_SET => "앵커가 변경되었습니다: ",
        SPECTRAL_UNKNOWN_FIELD => "알 수 없는 필드입니다.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 주파수  2) 파장  3) 파수",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: THz, nm, 1/cm): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: GHz, µm, 1/m): ",
        UNIT_CONVERSION_RESULT => "변환 결과",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        POWER_HEADING => "\n-- 파워 변환 --",
        POWER_PROMPT_FIELD => "편집할 필드(dbm/mw/w): ",
        POWER_PROMPT_VALUE => "값 입력: ",
        POWER_UNKNOWN_FIELD => "알 수 없는 필드입니다.",
        FIBER_HEADING => "\n-- 파이버 커플링 초점거리 --",
        FIBER_PROMPT_WAVELENGTH => "파장 (nm): ",
        FIBER_PROMPT_SPOT => "입사 광속 직경 (mm): ",
        FIBER_PROMPT_MFD => "모드필드 직경 MFD (µm): ",
        FIBER_RESULT => "소요 초점거리",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드(auto/ko/en, 취소하려면 엔터): ",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Laser Optics Toolbox ===",
        MAIN_MENU_SPECTRAL => "1) Wavelength/frequency sync converter",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit converter",
        MAIN_MENU_POWER => "3) Power conversion (dBm/mW/W)",
        MAIN_MENU_FIBER => "4) Fiber coupling focal length",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Try again.",
        SPECTRAL_HEADING => "\n-- Wavelength/frequency sync converter --",
        SPECTRAL_FIELDS_HINT => {
            "Fields: f(frequency) l(wavelength) k(wavenumber) df dl dk (deltas)"
        }
        SPECTRAL_ANCHOR_HINT => {
            "Enter on a delta field without a value makes it the anchor. Empty field=back."
        }
        SPECTRAL_PROMPT_FIELD => "Field to edit: ",
        SPECTRAL_PROMPT_VALUE => "Value (empty=just set anchor): ",
        SPECTRAL_PROMPT_UNIT => "Unit (empty=keep current): ",
        SPECTRAL_ANCHOR_SET => "Anchor changed: ",
        SPECTRAL_UNKNOWN_FIELD => "Unknown field.",
        UNIT_CONVERSION_HEADING => "\n-- Unit conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Frequency  2) Wavelength  3) Wavenumber",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Enter value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: THz, nm, 1/cm): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: GHz, µm, 1/m): ",
        UNIT_CONVERSION_RESULT => "Result",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported number.",
        POWER_HEADING => "\n-- Power conversion --",
        POWER_PROMPT_FIELD => "Field to edit (dbm/mw/w): ",
        POWER_PROMPT_VALUE => "Enter value: ",
        POWER_UNKNOWN_FIELD => "Unknown field.",
        FIBER_HEADING => "\n-- Fiber coupling focal length --",
        FIBER_PROMPT_WAVELENGTH => "Wavelength (nm): ",
        FIBER_PROMPT_SPOT => "Input beam diameter (mm): ",
        FIBER_PROMPT_MFD => "Mode-field diameter MFD (µm): ",
        FIBER_RESULT => "Required focal length",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en, Enter to cancel): ",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_INVALID => "Invalid input, keeping previous value.",
        _ => return None,
    };
    Some(s)
}
