//! dBm/mW/W 파워 변환기 통합 테스트.

use laser_optics_toolbox::power::{recompute_power, PowerField, PowerState};

#[test]
fn dbm_zero_maps_to_one_milliwatt() {
    let state = PowerState::default();
    let (next, disp) = recompute_power(&state, PowerField::Dbm, "0");

    assert_eq!(next.dbm, Some(0.0));
    assert_eq!(next.milliwatt, Some(1.0));
    assert_eq!(next.watt, Some(0.001));
    // 트리거(dBm)는 재포맷하지 않는다.
    assert_eq!(disp.dbm, None);
    assert_eq!(disp.milliwatt.as_deref(), Some("1"));
    assert_eq!(disp.watt.as_deref(), Some("0.001000000"));
}

#[test]
fn dbm_ten_maps_to_ten_milliwatt() {
    let state = PowerState::default();
    let (_, disp) = recompute_power(&state, PowerField::Dbm, "10");
    assert_eq!(disp.milliwatt.as_deref(), Some("10"));
    assert_eq!(disp.watt.as_deref(), Some("0.010000000"));
}

#[test]
fn milliwatt_trigger_formats_dbm_with_four_decimals() {
    let state = PowerState::default();
    let (next, disp) = recompute_power(&state, PowerField::Milliwatt, "2");
    assert_eq!(next.milliwatt, Some(2.0));
    assert_eq!(disp.milliwatt, None);
    // 10·log10(2) = 3.0103
    assert_eq!(disp.dbm.as_deref(), Some("3.0103"));
    assert_eq!(disp.watt.as_deref(), Some("0.002000000"));
}

#[test]
fn nonpositive_milliwatt_clamps_dbm() {
    let state = PowerState::default();
    let (next, disp) = recompute_power(&state, PowerField::Milliwatt, "0");
    assert_eq!(next.dbm, Some(-100.0));
    assert_eq!(disp.dbm.as_deref(), Some("-100.0000"));
    assert_eq!(disp.watt.as_deref(), Some("0.000000000"));

    let (next, disp) = recompute_power(&state, PowerField::Milliwatt, "-5");
    assert_eq!(next.dbm, Some(-100.0));
    assert_eq!(disp.dbm.as_deref(), Some("-100.0000"));
}

#[test]
fn watt_trigger_scales_to_milliwatt() {
    let state = PowerState::default();
    let (next, disp) = recompute_power(&state, PowerField::Watt, "0.5");
    assert_eq!(next.watt, Some(0.5));
    assert_eq!(next.milliwatt, Some(500.0));
    assert_eq!(disp.watt, None);
    assert_eq!(disp.milliwatt.as_deref(), Some("500"));
    // 10·log10(500) = 26.9897
    assert_eq!(disp.dbm.as_deref(), Some("26.9897"));
}

#[test]
fn unparseable_input_clears_trigger_only() {
    let state = PowerState {
        dbm: Some(0.0),
        milliwatt: Some(1.0),
        watt: Some(0.001),
    };
    let (next, disp) = recompute_power(&state, PowerField::Watt, "x");
    assert_eq!(next, state);
    assert_eq!(disp.watt, Some(String::new()));
    assert_eq!(disp.dbm, None);
    assert_eq!(disp.milliwatt, None);
}
