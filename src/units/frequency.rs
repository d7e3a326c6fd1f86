use serde::{Deserialize, Serialize};

/// 주파수 단위. 내부 기준은 Hz이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyUnit {
    Hertz,
    Megahertz,
    Gigahertz,
    Terahertz,
}

impl FrequencyUnit {
    pub const ALL: [FrequencyUnit; 4] = [
        FrequencyUnit::Hertz,
        FrequencyUnit::Megahertz,
        FrequencyUnit::Gigahertz,
        FrequencyUnit::Terahertz,
    ];

    /// Hz 기준 환산 계수.
    pub fn si_factor(self) -> f64 {
        match self {
            FrequencyUnit::Hertz => 1.0,
            FrequencyUnit::Megahertz => 1e6,
            FrequencyUnit::Gigahertz => 1e9,
            FrequencyUnit::Terahertz => 1e12,
        }
    }

    /// 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            FrequencyUnit::Hertz => "Hz",
            FrequencyUnit::Megahertz => "MHz",
            FrequencyUnit::Gigahertz => "GHz",
            FrequencyUnit::Terahertz => "THz",
        }
    }
}

/// 주파수를 다른 단위로 변환한다.
pub fn convert_frequency(value: f64, from: FrequencyUnit, to: FrequencyUnit) -> f64 {
    value * from.si_factor() / to.si_factor()
}
