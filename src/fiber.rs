//! 단일모드 파이버 커플링 초점거리 계산. f = (π·D·MFD) / (4·λ).

use std::f64::consts::PI;

/// 파이버 커플링 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiberCalcError {
    /// 숫자가 아닌 입력
    InvalidInput,
    /// 파장이 0
    DivideByZero,
}

impl std::fmt::Display for FiberCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FiberCalcError::InvalidInput => write!(f, "유효한 숫자를 입력하세요"),
            FiberCalcError::DivideByZero => write!(f, "파장은 0일 수 없습니다"),
        }
    }
}

impl std::error::Error for FiberCalcError {}

/// 파이버 커플링 계산 입력. 각 항목은 관례적인 표시 단위(nm, mm, µm)를 쓴다.
#[derive(Debug, Clone, Copy)]
pub struct FiberCouplingInput {
    /// 파장 (nm)
    pub wavelength_nm: f64,
    /// 입사 광속 직경 (mm)
    pub spot_diameter_mm: f64,
    /// 모드필드 직경 MFD (µm)
    pub mfd_um: f64,
}

/// 최적 커플링 초점거리(mm)를 계산한다.
pub fn focal_length_mm(input: &FiberCouplingInput) -> Result<f64, FiberCalcError> {
    let lambda_m = input.wavelength_nm * 1e-9;
    let d_m = input.spot_diameter_mm * 1e-3;
    let mfd_m = input.mfd_um * 1e-6;
    if lambda_m == 0.0 {
        return Err(FiberCalcError::DivideByZero);
    }
    let f_m = (PI * d_m * mfd_m) / (4.0 * lambda_m);
    Ok(f_m * 1e3)
}

/// 텍스트 입력 세 개를 받아 초점거리(mm)를 계산한다. 파싱 실패는 InvalidInput.
pub fn compute_fiber_focal(
    wavelength_nm: &str,
    spot_mm: &str,
    mfd_um: &str,
) -> Result<f64, FiberCalcError> {
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| FiberCalcError::InvalidInput)
    };
    let input = FiberCouplingInput {
        wavelength_nm: parse(wavelength_nm)?,
        spot_diameter_mm: parse(spot_mm)?,
        mfd_um: parse(mfd_um)?,
    };
    focal_length_mm(&input)
}
