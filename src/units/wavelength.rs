use serde::{Deserialize, Serialize};

/// 파장 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavelengthUnit {
    Meter,
    Millimeter,
    Micrometer,
    Nanometer,
    Picometer,
}

impl WavelengthUnit {
    pub const ALL: [WavelengthUnit; 5] = [
        WavelengthUnit::Meter,
        WavelengthUnit::Millimeter,
        WavelengthUnit::Micrometer,
        WavelengthUnit::Nanometer,
        WavelengthUnit::Picometer,
    ];

    /// m 기준 환산 계수.
    pub fn si_factor(self) -> f64 {
        match self {
            WavelengthUnit::Meter => 1.0,
            WavelengthUnit::Millimeter => 1e-3,
            WavelengthUnit::Micrometer => 1e-6,
            WavelengthUnit::Nanometer => 1e-9,
            WavelengthUnit::Picometer => 1e-12,
        }
    }

    /// 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            WavelengthUnit::Meter => "m",
            WavelengthUnit::Millimeter => "mm",
            WavelengthUnit::Micrometer => "µm",
            WavelengthUnit::Nanometer => "nm",
            WavelengthUnit::Picometer => "pm",
        }
    }
}

/// 파장을 다른 단위로 변환한다.
pub fn convert_wavelength(value: f64, from: WavelengthUnit, to: WavelengthUnit) -> f64 {
    value * from.si_factor() / to.si_factor()
}
