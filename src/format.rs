//! 표시 정밀도 정책. 필드마다 자릿수가 다른 것은 의도된 UX이므로
//! 리터럴을 흩뿌리지 않고 여기에서 한 곳으로 관리한다.

/// 광학 필드(주파수/파장/파수)의 유효 자릿수.
pub const OPTICAL_SIG_DIGITS: usize = 10;

/// 파워 필드별 고정 정밀도 테이블.
#[derive(Debug, Clone, Copy)]
pub struct PowerPrecision {
    /// dBm 소수 자릿수
    pub dbm_decimals: usize,
    /// mW 유효 자릿수
    pub mw_sig_digits: usize,
    /// W 소수 자릿수
    pub w_decimals: usize,
}

pub const POWER_PRECISION: PowerPrecision = PowerPrecision {
    dbm_decimals: 4,
    mw_sig_digits: 6,
    w_decimals: 9,
};

/// 초점거리(mm) 소수 자릿수.
pub const FOCAL_LENGTH_DECIMALS: usize = 3;

/// 유효 자릿수 기반 일반 표기. C의 %g에 해당한다.
/// 지수가 [-4, sig) 범위를 벗어나면 지수 표기로 전환하고, 뒤쪽 0은 제거한다.
pub fn format_sig(value: f64, sig: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let sig = sig.max(1);
    let exp = value.abs().log10().floor() as i32;
    if exp < -4 || exp >= sig as i32 {
        let s = format!("{value:.prec$e}", prec = sig - 1);
        match s.split_once('e') {
            Some((mantissa, e)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{mantissa}e{e}")
            }
            None => s,
        }
    } else {
        let decimals = (sig as i32 - 1 - exp).max(0) as usize;
        let s = format!("{value:.decimals$}");
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            s
        }
    }
}

/// 고정 소수점 표기.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
