use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::fiber;
use crate::format;
use crate::i18n::{keys, Translator};
use crate::power::{recompute_power, PowerField, PowerState};
use crate::quantity::QuantityKind;
use crate::spectral::{
    recompute_absolute, recompute_delta, set_delta_focus, AbsoluteEdit, DeltaEdit, DeltaField,
    SpectralState,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Spectral,
    UnitConversion,
    Power,
    FiberCoupling,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SPECTRAL));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_POWER));
    println!("{}", tr.t(keys::MAIN_MENU_FIBER));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Spectral),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Power),
            "4" => return Ok(MenuChoice::FiberCoupling),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 파장/주파수 연동 변환 메뉴를 처리한다.
///
/// 엔진 계약을 GUI와 동일하게 지킨다: 각 필드의 원문 텍스트를 들고 있다가
/// 엔진이 돌려준 표시 문자열만 덮어쓴다(트리거 필드는 재포맷하지 않는다).
pub fn handle_spectral(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SPECTRAL_HEADING));
    println!("{}", tr.t(keys::SPECTRAL_FIELDS_HINT));
    println!("{}", tr.t(keys::SPECTRAL_ANCHOR_HINT));

    let mut state = SpectralState::with_units(cfg.default_units.spectral_units());
    // 관례적인 초기값: 중심 파장 532 nm, Δλ = 1 nm
    let mut texts = SpectralTexts::default();
    let (s, d) = recompute_delta(
        &state,
        DeltaEdit::Wavelength(state.units.delta_wavelength),
        "1",
    );
    state = s;
    texts.delta_wavelength = "1".to_string();
    texts.apply(&d);
    let (s, d) = recompute_absolute(
        &state,
        AbsoluteEdit::Wavelength(state.units.wavelength),
        "532",
    );
    state = s;
    texts.wavelength = "532".to_string();
    texts.apply(&d);

    loop {
        print_spectral(&state, &texts);
        let field = read_line(tr.t(keys::SPECTRAL_PROMPT_FIELD))?;
        let field = field.trim().to_lowercase();
        if field.is_empty() {
            return Ok(());
        }

        let value = read_line(tr.t(keys::SPECTRAL_PROMPT_VALUE))?;
        let value = value.trim().to_string();

        // Δ 필드에 값 없이 엔터: 포커스 이동만 반영 (앵커 변경)
        if value.is_empty() {
            let tag = match field.as_str() {
                "df" => Some(DeltaField::Frequency),
                "dl" => Some(DeltaField::Wavelength),
                "dk" => Some(DeltaField::Wavenumber),
                _ => None,
            };
            match tag {
                Some(tag) => {
                    state = set_delta_focus(&state, tag);
                    println!("{}{field}", tr.t(keys::SPECTRAL_ANCHOR_SET));
                }
                None => println!("{}", tr.t(keys::SPECTRAL_UNKNOWN_FIELD)),
            }
            continue;
        }

        let unit = read_line(tr.t(keys::SPECTRAL_PROMPT_UNIT))?;
        let unit = unit.trim().to_string();

        let result = match field.as_str() {
            "f" => {
                let u = if unit.is_empty() {
                    Ok(state.units.frequency)
                } else {
                    conversion::parse_frequency_unit(&unit)
                };
                u.map(|u| {
                    texts.frequency = value.clone();
                    recompute_absolute(&state, AbsoluteEdit::Frequency(u), &value)
                })
            }
            "l" => {
                let u = if unit.is_empty() {
                    Ok(state.units.wavelength)
                } else {
                    conversion::parse_wavelength_unit(&unit)
                };
                u.map(|u| {
                    texts.wavelength = value.clone();
                    recompute_absolute(&state, AbsoluteEdit::Wavelength(u), &value)
                })
            }
            "k" => {
                let u = if unit.is_empty() {
                    Ok(state.units.wavenumber)
                } else {
                    conversion::parse_wavenumber_unit(&unit)
                };
                u.map(|u| {
                    texts.wavenumber = value.clone();
                    recompute_absolute(&state, AbsoluteEdit::Wavenumber(u), &value)
                })
            }
            "df" => {
                let u = if unit.is_empty() {
                    Ok(state.units.delta_frequency)
                } else {
                    conversion::parse_frequency_unit(&unit)
                };
                u.map(|u| {
                    texts.delta_frequency = value.clone();
                    recompute_delta(&state, DeltaEdit::Frequency(u), &value)
                })
            }
            "dl" => {
                let u = if unit.is_empty() {
                    Ok(state.units.delta_wavelength)
                } else {
                    conversion::parse_wavelength_unit(&unit)
                };
                u.map(|u| {
                    texts.delta_wavelength = value.clone();
                    recompute_delta(&state, DeltaEdit::Wavelength(u), &value)
                })
            }
            "dk" => {
                let u = if unit.is_empty() {
                    Ok(state.units.delta_wavenumber)
                } else {
                    conversion::parse_wavenumber_unit(&unit)
                };
                u.map(|u| {
                    texts.delta_wavenumber = value.clone();
                    recompute_delta(&state, DeltaEdit::Wavenumber(u), &value)
                })
            }
            _ => {
                println!("{}", tr.t(keys::SPECTRAL_UNKNOWN_FIELD));
                continue;
            }
        };

        match result {
            Ok((next, disp)) => {
                state = next;
                texts.apply(&disp);
            }
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
}

/// CLI가 들고 있는 필드 원문 텍스트. 엔진 표시 결과만 덮어쓴다.
#[derive(Debug, Clone, Default)]
struct SpectralTexts {
    frequency: String,
    wavelength: String,
    wavenumber: String,
    delta_frequency: String,
    delta_wavelength: String,
    delta_wavenumber: String,
}

impl SpectralTexts {
    fn apply(&mut self, disp: &crate::spectral::SpectralDisplay) {
        if let Some(s) = &disp.frequency {
            self.frequency = s.clone();
        }
        if let Some(s) = &disp.wavelength {
            self.wavelength = s.clone();
        }
        if let Some(s) = &disp.wavenumber {
            self.wavenumber = s.clone();
        }
        if let Some(s) = &disp.delta_frequency {
            self.delta_frequency = s.clone();
        }
        if let Some(s) = &disp.delta_wavelength {
            self.delta_wavelength = s.clone();
        }
        if let Some(s) = &disp.delta_wavenumber {
            self.delta_wavenumber = s.clone();
        }
    }
}

fn print_spectral(state: &SpectralState, texts: &SpectralTexts) {
    let anchor = |tag: DeltaField| {
        if state.last_delta_source == tag {
            "*"
        } else {
            " "
        }
    };
    println!();
    println!("  f  : {:>16} {}", texts.frequency, state.units.frequency.symbol());
    println!("  l  : {:>16} {}", texts.wavelength, state.units.wavelength.symbol());
    println!("  k  : {:>16} {}", texts.wavenumber, state.units.wavenumber.symbol());
    println!(
        "  df{}: {:>16} {}",
        anchor(DeltaField::Frequency),
        texts.delta_frequency,
        state.units.delta_frequency.symbol()
    );
    println!(
        "  dl{}: {:>16} {}",
        anchor(DeltaField::Wavelength),
        texts.delta_wavelength,
        state.units.delta_wavelength.symbol()
    );
    println!(
        "  dk{}: {:>16} {}",
        anchor(DeltaField::Wavenumber),
        texts.delta_wavenumber,
        state.units.delta_wavenumber.symbol()
    );
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        match sel.trim() {
            "1" => break QuantityKind::Frequency,
            "2" => break QuantityKind::Wavelength,
            "3" => break QuantityKind::Wavenumber,
            _ => println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED)),
        }
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{}: {} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        format::format_sig(result, format::OPTICAL_SIG_DIGITS),
        to_unit.trim()
    );
    Ok(())
}

/// 파워 변환 메뉴를 처리한다.
pub fn handle_power(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::POWER_HEADING));
    let mut state = PowerState::default();
    let mut texts = [String::new(), String::new(), String::new()];
    loop {
        println!();
        println!("  dbm: {:>16}", texts[0]);
        println!("  mw : {:>16}", texts[1]);
        println!("  w  : {:>16}", texts[2]);
        let field = read_line(tr.t(keys::POWER_PROMPT_FIELD))?;
        let trigger = match field.trim().to_lowercase().as_str() {
            "" => return Ok(()),
            "dbm" => PowerField::Dbm,
            "mw" => PowerField::Milliwatt,
            "w" => PowerField::Watt,
            _ => {
                println!("{}", tr.t(keys::POWER_UNKNOWN_FIELD));
                continue;
            }
        };
        let value = read_line(tr.t(keys::POWER_PROMPT_VALUE))?;
        let value = value.trim().to_string();
        match trigger {
            PowerField::Dbm => texts[0] = value.clone(),
            PowerField::Milliwatt => texts[1] = value.clone(),
            PowerField::Watt => texts[2] = value.clone(),
        }
        let (next, disp) = recompute_power(&state, trigger, &value);
        state = next;
        if let Some(s) = disp.dbm {
            texts[0] = s;
        }
        if let Some(s) = disp.milliwatt {
            texts[1] = s;
        }
        if let Some(s) = disp.watt {
            texts[2] = s;
        }
    }
}

/// 파이버 커플링 메뉴를 처리한다.
pub fn handle_fiber(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FIBER_HEADING));
    let wavelength = read_line(tr.t(keys::FIBER_PROMPT_WAVELENGTH))?;
    let spot = read_line(tr.t(keys::FIBER_PROMPT_SPOT))?;
    let mfd = read_line(tr.t(keys::FIBER_PROMPT_MFD))?;
    match fiber::compute_fiber_focal(&wavelength, &spot, &mfd) {
        Ok(f_mm) => println!(
            "{}: {} mm",
            tr.t(keys::FIBER_RESULT),
            format::format_fixed(f_mm, format::FOCAL_LENGTH_DECIMALS)
        ),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}: {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let sel = sel.trim().to_lowercase();
    if sel.is_empty() {
        return Ok(());
    }
    match sel.as_str() {
        "auto" | "ko" | "ko-kr" | "en" | "en-us" => {
            cfg.language = sel;
            println!("{}", tr.t(keys::SETTINGS_SAVED));
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
