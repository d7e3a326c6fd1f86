//! 중심 주파수/파장/파수와 선폭(Δ) 여섯 필드를 동기화하는 엔진.
//!
//! 편집된 필드 하나를 기준으로 물리적으로 종속된 나머지를 유도한다.
//! 절대값은 f = c/λ, k = 1/λ. Δ값은 정준 관계식 |Δf| = (c/λ²)|Δλ|,
//! |Δk| = |Δλ|/λ² 한 쌍만 사용한다. 앵커(마지막으로 편집된 Δ 필드)는
//! 중심 파장이 바뀌어도 값이 유지되고 나머지 Δ가 재계산된다.

use crate::conversion::{display_si, parse_si};
use crate::quantity::SPEED_OF_LIGHT_M_PER_S as C;
use crate::units::{FrequencyUnit, WavelengthUnit, WavenumberUnit};

/// 절대값 필드 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsoluteField {
    Frequency,
    Wavelength,
    Wavenumber,
}

/// Δ 필드 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaField {
    Frequency,
    Wavelength,
    Wavenumber,
}

/// 절대값 필드 편집 이벤트. 태그와 함께 현재 표시 단위를 나른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsoluteEdit {
    Frequency(FrequencyUnit),
    Wavelength(WavelengthUnit),
    Wavenumber(WavenumberUnit),
}

/// Δ 필드 편집 이벤트.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaEdit {
    Frequency(FrequencyUnit),
    Wavelength(WavelengthUnit),
    Wavenumber(WavenumberUnit),
}

/// 필드별 표시 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectralUnits {
    pub frequency: FrequencyUnit,
    pub wavelength: WavelengthUnit,
    pub wavenumber: WavenumberUnit,
    pub delta_frequency: FrequencyUnit,
    pub delta_wavelength: WavelengthUnit,
    pub delta_wavenumber: WavenumberUnit,
}

impl Default for SpectralUnits {
    fn default() -> Self {
        Self {
            frequency: FrequencyUnit::Terahertz,
            wavelength: WavelengthUnit::Nanometer,
            wavenumber: WavenumberUnit::PerCentimeter,
            delta_frequency: FrequencyUnit::Gigahertz,
            delta_wavelength: WavelengthUnit::Nanometer,
            delta_wavenumber: WavenumberUnit::PerCentimeter,
        }
    }
}

/// 스펙트럼 필드 상태. 값은 전부 SI 기준(Hz, m, 1/m)으로 보관한다.
/// None은 "미정의"로, 유도의 근거로 쓰지 않고 출력은 빈칸으로 둔다.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralState {
    pub frequency_hz: Option<f64>,
    pub wavelength_m: Option<f64>,
    pub wavenumber_per_m: Option<f64>,
    pub delta_frequency_hz: Option<f64>,
    pub delta_wavelength_m: Option<f64>,
    pub delta_wavenumber_per_m: Option<f64>,
    pub units: SpectralUnits,
    /// 마지막으로 편집(또는 포커스)된 Δ 필드. 절대값이 바뀔 때 이 필드가 앵커가 된다.
    pub last_delta_source: DeltaField,
}

impl Default for SpectralState {
    fn default() -> Self {
        Self::with_units(SpectralUnits::default())
    }
}

impl SpectralState {
    pub fn with_units(units: SpectralUnits) -> Self {
        Self {
            frequency_hz: None,
            wavelength_m: None,
            wavenumber_per_m: None,
            delta_frequency_hz: None,
            delta_wavelength_m: None,
            delta_wavenumber_per_m: None,
            units,
            last_delta_source: DeltaField::Wavelength,
        }
    }

    /// 여섯 필드 전부를 현재 표시 단위로 포맷한다. 화면 초기화용.
    pub fn display_all(&self) -> SpectralDisplay {
        SpectralDisplay {
            frequency: Some(display_si(self.frequency_hz, self.units.frequency.si_factor())),
            wavelength: Some(display_si(
                self.wavelength_m,
                self.units.wavelength.si_factor(),
            )),
            wavenumber: Some(display_si(
                self.wavenumber_per_m,
                self.units.wavenumber.si_factor(),
            )),
            delta_frequency: Some(display_si(
                self.delta_frequency_hz,
                self.units.delta_frequency.si_factor(),
            )),
            delta_wavelength: Some(display_si(
                self.delta_wavelength_m,
                self.units.delta_wavelength.si_factor(),
            )),
            delta_wavenumber: Some(display_si(
                self.delta_wavenumber_per_m,
                self.units.delta_wavenumber.si_factor(),
            )),
        }
    }
}

/// 재계산 결과로 다시 그려야 하는 필드의 표시 문자열.
/// None은 "그대로 둘 것"(트리거 필드는 자기 자신을 재포맷하지 않는다),
/// Some("")은 "빈칸으로 지울 것"을 뜻한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectralDisplay {
    pub frequency: Option<String>,
    pub wavelength: Option<String>,
    pub wavenumber: Option<String>,
    pub delta_frequency: Option<String>,
    pub delta_wavelength: Option<String>,
    pub delta_wavenumber: Option<String>,
}

/// 절대값 필드 편집을 반영한다.
///
/// 1) 입력을 SI로 환산하고, 0이거나 파싱 불가면 절대값 단계를 조용히 중단한다.
/// 2) 나머지 두 절대값을 유도해 각자의 표시 단위로 포맷한다.
/// 3) 파장이 정의되어 있으면 앵커 Δ를 고정한 채 나머지 Δ를 재계산한다.
pub fn recompute_absolute(
    state: &SpectralState,
    edit: AbsoluteEdit,
    raw: &str,
) -> (SpectralState, SpectralDisplay) {
    let mut next = state.clone();
    let mut disp = SpectralDisplay::default();

    let (field, si) = match edit {
        AbsoluteEdit::Frequency(u) => {
            next.units.frequency = u;
            (AbsoluteField::Frequency, parse_si(raw, u.si_factor()))
        }
        AbsoluteEdit::Wavelength(u) => {
            next.units.wavelength = u;
            (AbsoluteField::Wavelength, parse_si(raw, u.si_factor()))
        }
        AbsoluteEdit::Wavenumber(u) => {
            next.units.wavenumber = u;
            (AbsoluteField::Wavenumber, parse_si(raw, u.si_factor()))
        }
    };

    match si {
        None => {
            // 파싱 실패: 값은 그대로 두고 트리거 필드만 빈칸 처리
            set_absolute_display(&mut disp, field, String::new());
        }
        Some(v) if v == 0.0 => {
            // 0 입력은 나눗셈의 근거가 없으므로 절대값 단계 중단
        }
        Some(v) => {
            match field {
                AbsoluteField::Frequency => {
                    next.frequency_hz = Some(v);
                    let l = C / v;
                    next.wavelength_m = Some(l);
                    next.wavenumber_per_m = Some(1.0 / l);
                }
                AbsoluteField::Wavelength => {
                    next.wavelength_m = Some(v);
                    next.frequency_hz = Some(C / v);
                    next.wavenumber_per_m = Some(1.0 / v);
                }
                AbsoluteField::Wavenumber => {
                    next.wavenumber_per_m = Some(v);
                    let l = 1.0 / v;
                    next.wavelength_m = Some(l);
                    next.frequency_hz = Some(C / l);
                }
            }
            // 트리거 자신은 SI 왕복 재포맷을 하지 않는다 (라운딩 지터 방지)
            if field != AbsoluteField::Frequency {
                disp.frequency = Some(display_si(
                    next.frequency_hz,
                    next.units.frequency.si_factor(),
                ));
            }
            if field != AbsoluteField::Wavelength {
                disp.wavelength = Some(display_si(
                    next.wavelength_m,
                    next.units.wavelength.si_factor(),
                ));
            }
            if field != AbsoluteField::Wavenumber {
                disp.wavenumber = Some(display_si(
                    next.wavenumber_per_m,
                    next.units.wavenumber.si_factor(),
                ));
            }
        }
    }

    // 앵커 재계산: 새 파장 기준으로, 저장된 앵커 값을 고정한 채 나머지 Δ를 갱신
    let anchor = next.last_delta_source;
    derive_deltas(&mut next, &mut disp, anchor);

    (next, disp)
}

/// Δ 필드 편집을 반영한다.
///
/// 직접 편집은 항상 last_delta_source를 갱신한다. 파싱에 성공하면
/// 트리거 값 자체는 보관하고, 중심 파장이 정의된 경우에만 나머지 둘을 유도한다.
pub fn recompute_delta(
    state: &SpectralState,
    edit: DeltaEdit,
    raw: &str,
) -> (SpectralState, SpectralDisplay) {
    let mut next = state.clone();
    let mut disp = SpectralDisplay::default();

    let (field, si) = match edit {
        DeltaEdit::Frequency(u) => {
            next.units.delta_frequency = u;
            (DeltaField::Frequency, parse_si(raw, u.si_factor()))
        }
        DeltaEdit::Wavelength(u) => {
            next.units.delta_wavelength = u;
            (DeltaField::Wavelength, parse_si(raw, u.si_factor()))
        }
        DeltaEdit::Wavenumber(u) => {
            next.units.delta_wavenumber = u;
            (DeltaField::Wavenumber, parse_si(raw, u.si_factor()))
        }
    };

    next.last_delta_source = field;

    match si {
        None => {
            set_delta_display(&mut disp, field, String::new());
        }
        Some(v) => {
            // 트리거 값은 사용자 소유이므로 파장 유무와 무관하게 보관한다.
            // 파장이 아직 없으면 유도만 미뤄지고, 파장이 들어오는 순간
            // 앵커 재계산이 이 값을 기준으로 나머지를 채운다.
            match field {
                DeltaField::Frequency => next.delta_frequency_hz = Some(v),
                DeltaField::Wavelength => next.delta_wavelength_m = Some(v),
                DeltaField::Wavenumber => next.delta_wavenumber_per_m = Some(v),
            }
            derive_deltas(&mut next, &mut disp, field);
        }
    }

    (next, disp)
}

/// 포커스 이동만을 반영한다. 값 계산 없이 앵커 기억만 갱신한다.
pub fn set_delta_focus(state: &SpectralState, tag: DeltaField) -> SpectralState {
    let mut next = state.clone();
    next.last_delta_source = tag;
    next
}

/// 앵커 Δ와 중심 파장으로부터 나머지 두 Δ를 유도한다.
/// 파장 또는 앵커 값이 없거나 0이면 아무 것도 바꾸지 않는다.
fn derive_deltas(next: &mut SpectralState, disp: &mut SpectralDisplay, anchor: DeltaField) {
    let l = match next.wavelength_m {
        Some(l) if l != 0.0 => l,
        _ => return,
    };
    let anchor_si = match anchor {
        DeltaField::Frequency => next.delta_frequency_hz,
        DeltaField::Wavelength => next.delta_wavelength_m,
        DeltaField::Wavenumber => next.delta_wavenumber_per_m,
    };
    let anchor_si = match anchor_si {
        Some(v) if v != 0.0 => v,
        _ => return,
    };

    // 정준 관계식 한 쌍으로만 유도한다: 앵커를 Δλ로 환산한 뒤
    // Δf = (c/λ²)·Δλ, Δk = Δλ/λ².
    let l2 = l * l;
    let dl = match anchor {
        DeltaField::Frequency => anchor_si * l2 / C,
        DeltaField::Wavelength => anchor_si,
        DeltaField::Wavenumber => anchor_si * l2,
    };

    if anchor != DeltaField::Frequency {
        let df = C * dl / l2;
        next.delta_frequency_hz = Some(df);
        disp.delta_frequency = Some(display_si(
            Some(df),
            next.units.delta_frequency.si_factor(),
        ));
    }
    if anchor != DeltaField::Wavelength {
        next.delta_wavelength_m = Some(dl);
        disp.delta_wavelength = Some(display_si(
            Some(dl),
            next.units.delta_wavelength.si_factor(),
        ));
    }
    if anchor != DeltaField::Wavenumber {
        let dk = dl / l2;
        next.delta_wavenumber_per_m = Some(dk);
        disp.delta_wavenumber = Some(display_si(
            Some(dk),
            next.units.delta_wavenumber.si_factor(),
        ));
    }
}

fn set_absolute_display(disp: &mut SpectralDisplay, field: AbsoluteField, text: String) {
    match field {
        AbsoluteField::Frequency => disp.frequency = Some(text),
        AbsoluteField::Wavelength => disp.wavelength = Some(text),
        AbsoluteField::Wavenumber => disp.wavenumber = Some(text),
    }
}

fn set_delta_display(disp: &mut SpectralDisplay, field: DeltaField, text: String) {
    match field {
        DeltaField::Frequency => disp.delta_frequency = Some(text),
        DeltaField::Wavelength => disp.delta_wavelength = Some(text),
        DeltaField::Wavenumber => disp.delta_wavenumber = Some(text),
    }
}
