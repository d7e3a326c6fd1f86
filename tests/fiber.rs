//! 파이버 커플링 초점거리 계산 통합 테스트.

use laser_optics_toolbox::fiber::{
    compute_fiber_focal, focal_length_mm, FiberCalcError, FiberCouplingInput,
};
use laser_optics_toolbox::format;
use std::f64::consts::PI;

#[test]
fn standard_smf_case_1550nm() {
    // 1550 nm, 빔 직경 2 mm, MFD 9 µm
    let input = FiberCouplingInput {
        wavelength_nm: 1550.0,
        spot_diameter_mm: 2.0,
        mfd_um: 9.0,
    };
    let f_mm = focal_length_mm(&input).unwrap();
    let expected = (PI * 2e-3 * 9e-6) / (4.0 * 1550e-9) * 1e3;
    assert!((f_mm - expected).abs() < 1e-9);
    assert_eq!(
        format::format_fixed(f_mm, format::FOCAL_LENGTH_DECIMALS),
        "9.121"
    );
}

#[test]
fn text_inputs_are_trimmed_and_parsed() {
    let f_mm = compute_fiber_focal(" 1550 ", "2", "9").unwrap();
    assert!((f_mm - 9.121).abs() < 1e-3);
}

#[test]
fn non_numeric_input_is_invalid() {
    assert_eq!(
        compute_fiber_focal("abc", "2", "9"),
        Err(FiberCalcError::InvalidInput)
    );
    assert_eq!(
        compute_fiber_focal("1550", "", "9"),
        Err(FiberCalcError::InvalidInput)
    );
}

#[test]
fn zero_wavelength_is_rejected() {
    assert_eq!(
        compute_fiber_focal("0", "2", "9"),
        Err(FiberCalcError::DivideByZero)
    );
}
