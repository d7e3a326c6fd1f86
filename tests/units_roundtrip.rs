//! 문자열 단위명 기반 일회성 변환기 테스트.

use laser_optics_toolbox::conversion::{convert, ConversionError};
use laser_optics_toolbox::quantity::QuantityKind;

fn assert_close(actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    let scale = expected.abs().max(1e-300);
    assert!(diff / scale < 1e-9, "expected {expected}, got {actual}");
}

#[test]
fn frequency_thz_to_ghz() {
    let v = convert(QuantityKind::Frequency, 1.5, "THz", "GHz").unwrap();
    assert_close(v, 1500.0);
}

#[test]
fn wavelength_nm_to_um_and_back() {
    let v = convert(QuantityKind::Wavelength, 1550.0, "nm", "µm").unwrap();
    assert_close(v, 1.55);
    // "um" 표기도 µm로 인정한다.
    let back = convert(QuantityKind::Wavelength, v, "um", "nm").unwrap();
    assert_close(back, 1550.0);
}

#[test]
fn wavenumber_per_cm_to_per_m() {
    let v = convert(QuantityKind::Wavenumber, 1.0, "1/cm", "1/m").unwrap();
    assert_close(v, 100.0);
    let v = convert(QuantityKind::Wavenumber, 250.0, "m-1", "cm-1").unwrap();
    assert_close(v, 2.5);
}

#[test]
fn unit_names_are_case_insensitive() {
    let v = convert(QuantityKind::Frequency, 2.0, "thz", "MHZ").unwrap();
    assert_close(v, 2_000_000.0);
}

#[test]
fn unknown_unit_is_an_error() {
    let err = convert(QuantityKind::Wavelength, 1.0, "ft", "nm");
    assert!(matches!(err, Err(ConversionError::UnknownUnit(_))));
}
