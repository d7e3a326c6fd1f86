//! dBm/mW/W 세 필드를 마지막 편집 기준으로 동기화하는 파워 변환기.

use crate::format::{self, POWER_PRECISION};

/// 파워 필드 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerField {
    Dbm,
    Milliwatt,
    Watt,
}

/// 파워 상태. 각 필드는 자기 표시 스케일(dBm, mW, W)로 보관한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerState {
    pub dbm: Option<f64>,
    pub milliwatt: Option<f64>,
    pub watt: Option<f64>,
}

/// 재계산 후 다시 그릴 필드의 표시 문자열. 의미는 SpectralDisplay와 같다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerDisplay {
    pub dbm: Option<String>,
    pub milliwatt: Option<String>,
    pub watt: Option<String>,
}

/// 파워 필드 편집을 반영한다.
///
/// 트리거에서 mW를 구한 뒤 나머지 둘을 유도한다. mW ≤ 0이면 로그 정의역을
/// 벗어나므로 dBm은 -100으로 클램프한다. 트리거 필드 자신의 텍스트는 건드리지
/// 않고, 나머지 둘만 필드별 고정 정밀도로 포맷한다.
pub fn recompute_power(
    state: &PowerState,
    trigger: PowerField,
    raw: &str,
) -> (PowerState, PowerDisplay) {
    let mut next = state.clone();
    let mut disp = PowerDisplay::default();

    let parsed = match raw.trim().parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            match trigger {
                PowerField::Dbm => disp.dbm = Some(String::new()),
                PowerField::Milliwatt => disp.milliwatt = Some(String::new()),
                PowerField::Watt => disp.watt = Some(String::new()),
            }
            return (next, disp);
        }
    };

    let mw = match trigger {
        PowerField::Dbm => {
            next.dbm = Some(parsed);
            10f64.powf(parsed / 10.0)
        }
        PowerField::Milliwatt => {
            next.milliwatt = Some(parsed);
            parsed
        }
        PowerField::Watt => {
            next.watt = Some(parsed);
            parsed * 1000.0
        }
    };

    if trigger != PowerField::Dbm {
        let dbm = if mw > 0.0 { 10.0 * mw.log10() } else { -100.0 };
        next.dbm = Some(dbm);
        disp.dbm = Some(format::format_fixed(dbm, POWER_PRECISION.dbm_decimals));
    }
    if trigger != PowerField::Milliwatt {
        next.milliwatt = Some(mw);
        disp.milliwatt = Some(format::format_sig(mw, POWER_PRECISION.mw_sig_digits));
    }
    if trigger != PowerField::Watt {
        let w = mw / 1000.0;
        next.watt = Some(w);
        disp.watt = Some(format::format_fixed(w, POWER_PRECISION.w_decimals));
    }

    (next, disp)
}
