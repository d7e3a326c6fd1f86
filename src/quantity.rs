/// 진공 중 광속 (m/s). CODATA 정의값.
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Frequency,
    Wavelength,
    Wavenumber,
}
