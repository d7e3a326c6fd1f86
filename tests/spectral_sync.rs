//! 스펙트럼 여섯 필드 동기화 엔진 통합 테스트.

use laser_optics_toolbox::conversion::display_si;
use laser_optics_toolbox::quantity::SPEED_OF_LIGHT_M_PER_S as C;
use laser_optics_toolbox::spectral::{
    recompute_absolute, recompute_delta, set_delta_focus, AbsoluteEdit, DeltaEdit, DeltaField,
    SpectralState,
};
use laser_optics_toolbox::units::{FrequencyUnit, WavelengthUnit, WavenumberUnit};

fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
    let diff = (actual - expected).abs();
    let scale = expected.abs().max(1e-300);
    assert!(
        diff / scale < rel_tol,
        "expected {expected}, got {actual} (rel err {})",
        diff / scale
    );
}

#[test]
fn wavelength_edit_derives_frequency_and_wavenumber() {
    let state = SpectralState::default();
    let (next, disp) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "532");

    assert_close(next.wavelength_m.unwrap(), 532e-9, 1e-12);
    assert_close(next.frequency_hz.unwrap(), C / 532e-9, 1e-12);
    assert_close(next.wavenumber_per_m.unwrap(), 1.0 / 532e-9, 1e-12);

    // 트리거 필드는 재포맷하지 않고, 나머지 둘만 표시 문자열을 받는다.
    assert_eq!(disp.wavelength, None);
    assert_eq!(disp.frequency, Some(display_si(next.frequency_hz, 1e12)));
    assert_eq!(disp.wavenumber, Some(display_si(next.wavenumber_per_m, 1e2)));
    // 532 nm 기준값: 약 563.52 THz, 약 18796.99 1/cm
    assert_eq!(disp.frequency.as_deref(), Some("563.5196579"));
    assert_eq!(disp.wavenumber.as_deref(), Some("18796.99248"));
}

#[test]
fn frequency_and_wavenumber_edits_are_consistent_with_wavelength() {
    let state = SpectralState::default();
    let (from_f, _) =
        recompute_absolute(&state, AbsoluteEdit::Frequency(FrequencyUnit::Terahertz), "563.5196579");
    assert_close(from_f.wavelength_m.unwrap(), 532e-9, 1e-9);

    let (from_k, _) = recompute_absolute(
        &state,
        AbsoluteEdit::Wavenumber(WavenumberUnit::PerCentimeter),
        "18796.99248",
    );
    assert_close(from_k.wavelength_m.unwrap(), 532e-9, 1e-9);
    assert_close(from_k.frequency_hz.unwrap(), C / 532e-9, 1e-9);
}

#[test]
fn delta_wavelength_edit_derives_both_other_deltas() {
    let state = SpectralState::default();
    let (state, _) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");
    let (next, disp) =
        recompute_delta(&state, DeltaEdit::Wavelength(WavelengthUnit::Nanometer), "1");

    let l = 1550e-9_f64;
    assert_close(next.delta_frequency_hz.unwrap(), C * 1e-9 / (l * l), 1e-12);
    assert_close(next.delta_wavenumber_per_m.unwrap(), 1e-9 / (l * l), 1e-12);
    assert_eq!(next.last_delta_source, DeltaField::Wavelength);

    // Δf ≈ 124.78 GHz, Δk ≈ 4.1623 1/cm
    assert_eq!(disp.delta_wavelength, None);
    assert_eq!(
        disp.delta_frequency,
        Some(display_si(next.delta_frequency_hz, 1e9))
    );
    assert_eq!(
        disp.delta_wavenumber,
        Some(display_si(next.delta_wavenumber_per_m, 1e2))
    );
}

#[test]
fn anchored_delta_survives_center_wavelength_change() {
    let state = SpectralState::default();
    let (state, _) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");
    let (state, _) =
        recompute_delta(&state, DeltaEdit::Frequency(FrequencyUnit::Gigahertz), "10");
    assert_eq!(state.last_delta_source, DeltaField::Frequency);

    let (next, disp) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1064");

    // 앵커 Δf는 그대로, 나머지 Δ는 새 파장 기준으로 재계산
    assert_close(next.delta_frequency_hz.unwrap(), 10e9, 1e-12);
    let l = 1064e-9_f64;
    let dl = 10e9 * l * l / C;
    assert_close(next.delta_wavelength_m.unwrap(), dl, 1e-12);
    assert_close(next.delta_wavenumber_per_m.unwrap(), dl / (l * l), 1e-12);
    assert_eq!(disp.delta_frequency, None);
    assert!(disp.delta_wavelength.is_some());
    assert!(disp.delta_wavenumber.is_some());
}

#[test]
fn focus_only_changes_anchor_without_recomputing() {
    let state = SpectralState::default();
    let (state, _) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");
    let (state, _) =
        recompute_delta(&state, DeltaEdit::Wavelength(WavelengthUnit::Nanometer), "1");
    let dk_before = state.delta_wavenumber_per_m.unwrap();

    let focused = set_delta_focus(&state, DeltaField::Wavenumber);
    assert_eq!(focused.last_delta_source, DeltaField::Wavenumber);
    assert_eq!(focused.delta_wavenumber_per_m, state.delta_wavenumber_per_m);

    // 이후 중심 파장을 바꾸면 Δk가 앵커로 고정된다.
    let (next, _) =
        recompute_absolute(&focused, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1064");
    assert_close(next.delta_wavenumber_per_m.unwrap(), dk_before, 1e-12);
    let l = 1064e-9_f64;
    let dl = dk_before * l * l;
    assert_close(next.delta_wavelength_m.unwrap(), dl, 1e-12);
    assert_close(next.delta_frequency_hz.unwrap(), C * dl / (l * l), 1e-12);
}

#[test]
fn repeated_identical_edit_is_idempotent() {
    let state = SpectralState::default();
    let (state, _) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");
    let (state, _) =
        recompute_delta(&state, DeltaEdit::Wavelength(WavelengthUnit::Nanometer), "1");

    let (again, disp1) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");
    let (third, disp2) =
        recompute_absolute(&again, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");

    assert_eq!(again, third);
    assert_eq!(disp1, disp2);
}

#[test]
fn unparseable_input_clears_trigger_and_keeps_values() {
    let state = SpectralState::default();
    let (state, _) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");
    let (next, disp) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "abc");

    assert_eq!(next.wavelength_m, state.wavelength_m);
    assert_eq!(next.frequency_hz, state.frequency_hz);
    assert_eq!(disp.wavelength, Some(String::new()));
    assert_eq!(disp.frequency, None);
    assert_eq!(disp.wavenumber, None);
}

#[test]
fn zero_input_aborts_silently() {
    let state = SpectralState::default();
    let (state, _) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");
    let (next, disp) =
        recompute_absolute(&state, AbsoluteEdit::Frequency(FrequencyUnit::Terahertz), "0");

    assert_eq!(next.frequency_hz, state.frequency_hz);
    assert_eq!(next.wavelength_m, state.wavelength_m);
    assert_eq!(disp.frequency, None);
    assert_eq!(disp.wavelength, None);
}

#[test]
fn delta_entered_before_wavelength_is_replayed_later() {
    // Δλ를 먼저 입력하면 유도는 미뤄지지만 값은 보관되고,
    // 파장이 들어오는 순간 앵커로 재생된다.
    let state = SpectralState::default();
    let (state, disp) =
        recompute_delta(&state, DeltaEdit::Wavelength(WavelengthUnit::Nanometer), "1");
    assert_close(state.delta_wavelength_m.unwrap(), 1e-9, 1e-12);
    assert_eq!(disp.delta_frequency, None);
    assert_eq!(disp.delta_wavenumber, None);

    let (next, disp) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");
    let l = 1550e-9_f64;
    assert_close(next.delta_frequency_hz.unwrap(), C * 1e-9 / (l * l), 1e-12);
    assert!(disp.delta_frequency.is_some());
    assert!(disp.delta_wavenumber.is_some());
}

#[test]
fn unit_change_rescales_display_not_value() {
    let state = SpectralState::default();
    let (state, _) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Nanometer), "1550");
    // 같은 텍스트를 µm 단위로 다시 커밋하면 SI 값이 1550 µm로 해석된다.
    let (next, _) =
        recompute_absolute(&state, AbsoluteEdit::Wavelength(WavelengthUnit::Micrometer), "1.55");
    assert_close(next.wavelength_m.unwrap(), 1.55e-6, 1e-12);
    assert_eq!(next.units.wavelength, WavelengthUnit::Micrometer);
    assert_close(next.frequency_hz.unwrap(), C / 1.55e-6, 1e-12);
}
