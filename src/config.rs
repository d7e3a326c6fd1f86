use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::spectral::SpectralUnits;
use crate::units::*;

/// 스펙트럼 각 필드의 기본 표시 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub frequency: FrequencyUnit,
    pub wavelength: WavelengthUnit,
    pub wavenumber: WavenumberUnit,
    pub delta_frequency: FrequencyUnit,
    pub delta_wavelength: WavelengthUnit,
    pub delta_wavenumber: WavenumberUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            frequency: FrequencyUnit::Terahertz,
            wavelength: WavelengthUnit::Nanometer,
            wavenumber: WavenumberUnit::PerCentimeter,
            delta_frequency: FrequencyUnit::Gigahertz,
            delta_wavelength: WavelengthUnit::Nanometer,
            delta_wavenumber: WavenumberUnit::PerCentimeter,
        }
    }
}

impl DefaultUnits {
    /// 엔진 초기 상태에 쓸 단위 묶음으로 변환한다.
    pub fn spectral_units(&self) -> SpectralUnits {
        SpectralUnits {
            frequency: self.frequency,
            wavelength: self.wavelength,
            wavenumber: self.wavenumber,
            delta_frequency: self.delta_frequency,
            delta_wavelength: self.delta_wavelength,
            delta_wavenumber: self.delta_wavenumber,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_units: DefaultUnits,
    /// 언어 코드 (auto/ko/en 등)
    #[serde(default = "default_language")]
    pub language: String,
    /// 언어팩 디렉터리 (locales/ 외 추가 탐색 경로)
    #[serde(default)]
    pub language_pack_dir: Option<String>,
    /// GUI 창 투명도 (0.3~1.0)
    #[serde(default = "default_window_alpha")]
    pub window_alpha: f32,
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_window_alpha() -> f32 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_units: DefaultUnits::default(),
            language: default_language(),
            language_pack_dir: None,
            window_alpha: default_window_alpha(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
