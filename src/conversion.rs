use crate::format;
use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 입력 텍스트를 단위 계수로 SI 값으로 환산한다. 파싱 실패 시 None.
/// 빈 입력이나 숫자가 아닌 입력은 "미정의 필드"로 취급한다.
pub fn parse_si(raw: &str, si_factor: f64) -> Option<f64> {
    raw.trim().parse::<f64>().ok().map(|v| v * si_factor)
}

/// SI 값을 지정 단위의 표시 문자열로 만든다. None이면 빈 문자열.
/// 광학 필드 공통 유효 자릿수를 적용한다.
pub fn display_si(si_value: Option<f64>, si_factor: f64) -> String {
    match si_value {
        Some(v) => format::format_sig(v / si_factor, format::OPTICAL_SIG_DIGITS),
        None => String::new(),
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `THz`, `nm`, `1/cm` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Frequency => {
            let from = parse_frequency_unit(from_unit_str)?;
            let to = parse_frequency_unit(to_unit_str)?;
            Ok(convert_frequency(value, from, to))
        }
        QuantityKind::Wavelength => {
            let from = parse_wavelength_unit(from_unit_str)?;
            let to = parse_wavelength_unit(to_unit_str)?;
            Ok(convert_wavelength(value, from, to))
        }
        QuantityKind::Wavenumber => {
            let from = parse_wavenumber_unit(from_unit_str)?;
            let to = parse_wavenumber_unit(to_unit_str)?;
            Ok(convert_wavenumber(value, from, to))
        }
    }
}

pub fn parse_frequency_unit(s: &str) -> Result<FrequencyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "hz" | "hertz" => Ok(FrequencyUnit::Hertz),
        "mhz" => Ok(FrequencyUnit::Megahertz),
        "ghz" => Ok(FrequencyUnit::Gigahertz),
        "thz" => Ok(FrequencyUnit::Terahertz),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_wavelength_unit(s: &str) -> Result<WavelengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(WavelengthUnit::Meter),
        "mm" => Ok(WavelengthUnit::Millimeter),
        "µm" | "um" | "micron" => Ok(WavelengthUnit::Micrometer),
        "nm" => Ok(WavelengthUnit::Nanometer),
        "pm" => Ok(WavelengthUnit::Picometer),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_wavenumber_unit(s: &str) -> Result<WavenumberUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "1/m" | "m-1" => Ok(WavenumberUnit::PerMeter),
        "1/cm" | "cm-1" => Ok(WavenumberUnit::PerCentimeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
