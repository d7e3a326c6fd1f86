//! 단위 정의 및 변환 모듈 모음.

pub mod frequency;
pub mod wavelength;
pub mod wavenumber;

pub use frequency::{convert_frequency, FrequencyUnit};
pub use wavelength::{convert_wavelength, WavelengthUnit};
pub use wavenumber::{convert_wavenumber, WavenumberUnit};
