use serde::{Deserialize, Serialize};

/// 파수 단위. 내부 기준은 1/m이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavenumberUnit {
    PerMeter,
    PerCentimeter,
}

impl WavenumberUnit {
    pub const ALL: [WavenumberUnit; 2] =
        [WavenumberUnit::PerMeter, WavenumberUnit::PerCentimeter];

    /// 1/m 기준 환산 계수. 1/cm = 100 (1/m).
    pub fn si_factor(self) -> f64 {
        match self {
            WavenumberUnit::PerMeter => 1.0,
            WavenumberUnit::PerCentimeter => 1e2,
        }
    }

    /// 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            WavenumberUnit::PerMeter => "1/m",
            WavenumberUnit::PerCentimeter => "1/cm",
        }
    }
}

/// 파수를 다른 단위로 변환한다.
pub fn convert_wavenumber(value: f64, from: WavenumberUnit, to: WavenumberUnit) -> f64 {
    value * from.si_factor() / to.si_factor()
}
