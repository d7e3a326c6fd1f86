#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use laser_optics_toolbox::{
    config, fiber, format,
    i18n,
    power::{self, PowerField, PowerState},
    spectral::{self, AbsoluteEdit, AbsoluteField, DeltaEdit, DeltaField, SpectralState},
    units::{FrequencyUnit, WavelengthUnit, WavenumberUnit},
};
use rfd::FileDialog;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([760.0, 520.0])
        .with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Laser Optics Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글/특수기호(µ, Δ)를 표시하기 위해 CJK 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 폰트
/// 2) Windows/리눅스 시스템 폰트
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    let linux_candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    ];
    for cand in linux_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Spectral,
    Power,
    Fiber,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_pack_dir_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    // 스펙트럼 연동 변환
    spectral: SpectralState,
    f_text: String,
    l_text: String,
    k_text: String,
    df_text: String,
    dl_text: String,
    dk_text: String,
    f_unit: FrequencyUnit,
    l_unit: WavelengthUnit,
    k_unit: WavenumberUnit,
    df_unit: FrequencyUnit,
    dl_unit: WavelengthUnit,
    dk_unit: WavenumberUnit,
    // 파워 변환
    power: PowerState,
    dbm_text: String,
    mw_text: String,
    w_text: String,
    // 파이버 커플링
    fiber_wavelength: String,
    fiber_spot: String,
    fiber_mfd: String,
    fiber_result: Option<Result<f64, fiber::FiberCalcError>>,
    // 설정
    font_size: f32,
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    theme: ThemeChoice,
    custom_font_path: String,
    font_load_error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        eprintln!("GUI language resolved: {lang_code}");
        let lang_input = config.language.clone();
        let lang_pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        let units = config.default_units.spectral_units();
        let mut s = Self {
            config: config.clone(),
            tr,
            lang_input,
            lang_pack_dir_input,
            lang_save_status: None,
            tab: Tab::Spectral,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            spectral: SpectralState::with_units(units),
            f_text: String::new(),
            l_text: String::new(),
            k_text: String::new(),
            df_text: String::new(),
            dl_text: String::new(),
            dk_text: String::new(),
            f_unit: units.frequency,
            l_unit: units.wavelength,
            k_unit: units.wavenumber,
            df_unit: units.delta_frequency,
            dl_unit: units.delta_wavelength,
            dk_unit: units.delta_wavenumber,
            power: PowerState::default(),
            dbm_text: String::new(),
            mw_text: String::new(),
            w_text: String::new(),
            fiber_wavelength: String::new(),
            fiber_spot: String::new(),
            fiber_mfd: String::new(),
            fiber_result: None,
            font_size: 16.0,
            ui_scale: 1.0,
            always_on_top: false,
            show_settings_modal: false,
            show_help_modal: false,
            theme: ThemeChoice::System,
            custom_font_path: String::new(),
            font_load_error: None,
        };
        // 관례적인 초기값: Δλ = 1 nm, 중심 파장 532 nm — 초기 연동 계산까지 수행
        s.dl_text = "1".into();
        s.commit_delta(DeltaField::Wavelength);
        s.l_text = "532".into();
        s.commit_absolute(AbsoluteField::Wavelength);
        s
    }

    /// 엔진이 돌려준 표시 문자열을 텍스트 버퍼에 반영한다.
    /// None 필드(트리거 자신)는 건드리지 않는다.
    fn apply_spectral_display(&mut self, disp: &spectral::SpectralDisplay) {
        if let Some(s) = &disp.frequency {
            self.f_text = s.clone();
        }
        if let Some(s) = &disp.wavelength {
            self.l_text = s.clone();
        }
        if let Some(s) = &disp.wavenumber {
            self.k_text = s.clone();
        }
        if let Some(s) = &disp.delta_frequency {
            self.df_text = s.clone();
        }
        if let Some(s) = &disp.delta_wavelength {
            self.dl_text = s.clone();
        }
        if let Some(s) = &disp.delta_wavenumber {
            self.dk_text = s.clone();
        }
    }

    fn commit_absolute(&mut self, field: AbsoluteField) {
        let (edit, raw) = match field {
            AbsoluteField::Frequency => {
                (AbsoluteEdit::Frequency(self.f_unit), self.f_text.clone())
            }
            AbsoluteField::Wavelength => {
                (AbsoluteEdit::Wavelength(self.l_unit), self.l_text.clone())
            }
            AbsoluteField::Wavenumber => {
                (AbsoluteEdit::Wavenumber(self.k_unit), self.k_text.clone())
            }
        };
        let (next, disp) = spectral::recompute_absolute(&self.spectral, edit, &raw);
        self.spectral = next;
        self.apply_spectral_display(&disp);
    }

    fn commit_delta(&mut self, field: DeltaField) {
        let (edit, raw) = match field {
            DeltaField::Frequency => (DeltaEdit::Frequency(self.df_unit), self.df_text.clone()),
            DeltaField::Wavelength => (DeltaEdit::Wavelength(self.dl_unit), self.dl_text.clone()),
            DeltaField::Wavenumber => {
                (DeltaEdit::Wavenumber(self.dk_unit), self.dk_text.clone())
            }
        };
        let (next, disp) = spectral::recompute_delta(&self.spectral, edit, &raw);
        self.spectral = next;
        self.apply_spectral_display(&disp);
    }

    /// Δ 필드로 포커스가 들어오면 그 필드가 다음 연동의 앵커가 된다.
    fn focus_delta(&mut self, field: DeltaField) {
        self.spectral = spectral::set_delta_focus(&self.spectral, field);
    }

    fn commit_power(&mut self, field: PowerField) {
        let raw = match field {
            PowerField::Dbm => self.dbm_text.clone(),
            PowerField::Milliwatt => self.mw_text.clone(),
            PowerField::Watt => self.w_text.clone(),
        };
        let (next, disp) = power::recompute_power(&self.power, field, &raw);
        self.power = next;
        if let Some(s) = disp.dbm {
            self.dbm_text = s;
        }
        if let Some(s) = disp.milliwatt {
            self.mw_text = s;
        }
        if let Some(s) = disp.watt {
            self.w_text = s;
        }
    }

    fn run_fiber(&mut self) {
        self.fiber_result = Some(fiber::compute_fiber_focal(
            &self.fiber_wavelength,
            &self.fiber_spot,
            &self.fiber_mfd,
        ));
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Spectral, txt("gui.tab.spectral", "Wavelength Sync")),
            (Tab::Power, txt("gui.tab.power", "Power (dBm/mW/W)")),
            (Tab::Fiber, txt("gui.tab.fiber", "Fiber Coupling")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
        ui.add_space(12.0);
        if ui.button(txt("gui.nav.settings", "Settings")).clicked() {
            self.show_settings_modal = true;
        }
        if ui.button(txt("gui.nav.help", "Help")).clicked() {
            self.show_help_modal = true;
        }
    }

    fn ui_spectral(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.spectral.heading", "Wavelength / Frequency Sync"),
            &txt(
                "gui.spectral.tip",
                "Edit one field and press Enter; the others follow f = c/λ, k = 1/λ.",
            ),
        );
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(txt("gui.spectral.abs_label", "Center value (absolute)"));
            egui::Grid::new("abs_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    // 주파수
                    label_with_tip(
                        ui,
                        &txt("gui.spectral.row.frequency", "Frequency"),
                        &txt("gui.spectral.enter_tip", "Press Enter to apply"),
                    );
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.f_text)
                            .desired_width(140.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_absolute(AbsoluteField::Frequency);
                    }
                    let before = self.f_unit;
                    egui::ComboBox::from_id_source("f_unit")
                        .selected_text(self.f_unit.symbol())
                        .show_ui(ui, |ui| {
                            for u in FrequencyUnit::ALL {
                                ui.selectable_value(&mut self.f_unit, u, u.symbol());
                            }
                        });
                    if before != self.f_unit {
                        self.commit_absolute(AbsoluteField::Frequency);
                    }
                    ui.end_row();

                    // 파장
                    label_with_tip(
                        ui,
                        &txt("gui.spectral.row.wavelength", "Wavelength"),
                        &txt("gui.spectral.enter_tip", "Press Enter to apply"),
                    );
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.l_text)
                            .desired_width(140.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_absolute(AbsoluteField::Wavelength);
                    }
                    let before = self.l_unit;
                    egui::ComboBox::from_id_source("l_unit")
                        .selected_text(self.l_unit.symbol())
                        .show_ui(ui, |ui| {
                            for u in WavelengthUnit::ALL {
                                ui.selectable_value(&mut self.l_unit, u, u.symbol());
                            }
                        });
                    if before != self.l_unit {
                        self.commit_absolute(AbsoluteField::Wavelength);
                    }
                    ui.end_row();

                    // 파수
                    label_with_tip(
                        ui,
                        &txt("gui.spectral.row.wavenumber", "Wavenumber"),
                        &txt("gui.spectral.enter_tip", "Press Enter to apply"),
                    );
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.k_text)
                            .desired_width(140.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_absolute(AbsoluteField::Wavenumber);
                    }
                    let before = self.k_unit;
                    egui::ComboBox::from_id_source("k_unit")
                        .selected_text(self.k_unit.symbol())
                        .show_ui(ui, |ui| {
                            for u in WavenumberUnit::ALL {
                                ui.selectable_value(&mut self.k_unit, u, u.symbol());
                            }
                        });
                    if before != self.k_unit {
                        self.commit_absolute(AbsoluteField::Wavenumber);
                    }
                    ui.end_row();
                });
        });

        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(txt("gui.spectral.delta_label", "Linewidth / change (Δ)"));
                ui.small(txt(
                    "gui.spectral.anchor_tip",
                    "The last focused Δ field is held fixed when the center moves.",
                ));
            });
            egui::Grid::new("delta_grid")
                .num_columns(4)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    // Δ주파수
                    label_with_tip(
                        ui,
                        &txt("gui.spectral.row.delta_frequency", "Δ Frequency"),
                        &txt("gui.spectral.enter_tip", "Press Enter to apply"),
                    );
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.df_text)
                            .desired_width(140.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    if resp.gained_focus() {
                        self.focus_delta(DeltaField::Frequency);
                    }
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_delta(DeltaField::Frequency);
                    }
                    let before = self.df_unit;
                    egui::ComboBox::from_id_source("df_unit")
                        .selected_text(self.df_unit.symbol())
                        .show_ui(ui, |ui| {
                            for u in FrequencyUnit::ALL {
                                ui.selectable_value(&mut self.df_unit, u, u.symbol());
                            }
                        });
                    if before != self.df_unit {
                        self.focus_delta(DeltaField::Frequency);
                        self.commit_delta(DeltaField::Frequency);
                    }
                    ui.label(anchor_marker(
                        &txt("gui.spectral.anchor", "anchor"),
                        self.spectral.last_delta_source == DeltaField::Frequency,
                    ));
                    ui.end_row();

                    // Δ파장
                    label_with_tip(
                        ui,
                        &txt("gui.spectral.row.delta_wavelength", "Δ Wavelength"),
                        &txt("gui.spectral.enter_tip", "Press Enter to apply"),
                    );
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.dl_text)
                            .desired_width(140.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    if resp.gained_focus() {
                        self.focus_delta(DeltaField::Wavelength);
                    }
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_delta(DeltaField::Wavelength);
                    }
                    let before = self.dl_unit;
                    egui::ComboBox::from_id_source("dl_unit")
                        .selected_text(self.dl_unit.symbol())
                        .show_ui(ui, |ui| {
                            for u in WavelengthUnit::ALL {
                                ui.selectable_value(&mut self.dl_unit, u, u.symbol());
                            }
                        });
                    if before != self.dl_unit {
                        self.focus_delta(DeltaField::Wavelength);
                        self.commit_delta(DeltaField::Wavelength);
                    }
                    ui.label(anchor_marker(
                        &txt("gui.spectral.anchor", "anchor"),
                        self.spectral.last_delta_source == DeltaField::Wavelength,
                    ));
                    ui.end_row();

                    // Δ파수
                    label_with_tip(
                        ui,
                        &txt("gui.spectral.row.delta_wavenumber", "Δ Wavenumber"),
                        &txt("gui.spectral.enter_tip", "Press Enter to apply"),
                    );
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.dk_text)
                            .desired_width(140.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    if resp.gained_focus() {
                        self.focus_delta(DeltaField::Wavenumber);
                    }
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_delta(DeltaField::Wavenumber);
                    }
                    let before = self.dk_unit;
                    egui::ComboBox::from_id_source("dk_unit")
                        .selected_text(self.dk_unit.symbol())
                        .show_ui(ui, |ui| {
                            for u in WavenumberUnit::ALL {
                                ui.selectable_value(&mut self.dk_unit, u, u.symbol());
                            }
                        });
                    if before != self.dk_unit {
                        self.focus_delta(DeltaField::Wavenumber);
                        self.commit_delta(DeltaField::Wavenumber);
                    }
                    ui.label(anchor_marker(
                        &txt("gui.spectral.anchor", "anchor"),
                        self.spectral.last_delta_source == DeltaField::Wavenumber,
                    ));
                    ui.end_row();
                });
        });

        ui.add_space(8.0);
        ui.small(txt(
            "gui.spectral.note",
            "Changing the center wavelength keeps the anchored Δ value and recomputes the rest.",
        ));
    }

    fn ui_power(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.power.heading", "Power Conversion"),
            &txt(
                "gui.power.tip",
                "Enter any of dBm/mW/W and press Enter; the other two follow.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("power_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("dBm");
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.dbm_text)
                            .desired_width(160.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_power(PowerField::Dbm);
                    }
                    ui.end_row();

                    ui.label("mW");
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.mw_text)
                            .desired_width(160.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_power(PowerField::Milliwatt);
                    }
                    ui.end_row();

                    ui.label("W");
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.w_text)
                            .desired_width(160.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_power(PowerField::Watt);
                    }
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        ui.small(txt(
            "gui.power.note",
            "mW = 10^(dBm/10). 0 mW or below clamps dBm to -100.",
        ));
    }

    fn ui_fiber(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.fiber.heading", "Fiber Coupling Calculator"),
            &txt(
                "gui.fiber.tip",
                "Optimal coupling focal length from beam size and fiber MFD.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("fiber_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.fiber.wavelength", "Wavelength"));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.fiber_wavelength)
                            .desired_width(140.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    ui.label("nm");
                    ui.end_row();

                    ui.label(txt("gui.fiber.spot", "Input beam diameter"));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.fiber_spot)
                            .desired_width(140.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    ui.label("mm");
                    ui.end_row();

                    ui.label(txt("gui.fiber.mfd", "Mode-field diameter (MFD)"));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.fiber_mfd)
                            .desired_width(140.0)
                            .horizontal_align(egui::Align::RIGHT),
                    );
                    ui.label("µm");
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.fiber.run", "Compute focal length")).clicked() {
                self.run_fiber();
            }
            if let Some(result) = &self.fiber_result {
                match result {
                    Ok(f_mm) => {
                        ui.strong(format!(
                            "{}: {} mm",
                            txt("gui.fiber.result_prefix", "Required focal length"),
                            format::format_fixed(*f_mm, format::FOCAL_LENGTH_DECIMALS)
                        ));
                    }
                    Err(fiber::FiberCalcError::InvalidInput) => {
                        ui.colored_label(
                            egui::Color32::RED,
                            txt("gui.fiber.error_number", "Error: enter valid numbers"),
                        );
                    }
                    Err(fiber::FiberCalcError::DivideByZero) => {
                        ui.colored_label(
                            egui::Color32::RED,
                            txt("gui.fiber.error_zero", "Error: wavelength cannot be zero"),
                        );
                    }
                }
            }
        });
        ui.add_space(8.0);
        ui.small(txt(
            "gui.fiber.formula",
            "f = (π × D × MFD) / (4 × λ)",
        ));
    }

    fn ui_settings_window(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_settings_modal;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.settings.language", "Language (auto/ko/en)"));
                        ui.text_edit_singleline(&mut self.lang_input);
                        ui.end_row();

                        ui.label(txt("gui.settings.lang_pack_dir", "Language pack dir"));
                        ui.text_edit_singleline(&mut self.lang_pack_dir_input);
                        ui.end_row();

                        ui.label(txt("gui.settings.font_size", "Font size"));
                        ui.add(egui::Slider::new(&mut self.font_size, 10.0..=28.0));
                        ui.end_row();

                        ui.label(txt("gui.settings.ui_scale", "UI scale"));
                        ui.add(egui::Slider::new(&mut self.ui_scale, 0.7..=2.0));
                        ui.end_row();

                        ui.label(txt("gui.settings.window_alpha", "Window alpha"));
                        ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0));
                        ui.end_row();

                        ui.label(txt("gui.settings.always_on_top", "Always on top"));
                        if ui.checkbox(&mut self.always_on_top, "").changed() {
                            let level = if self.always_on_top {
                                egui::WindowLevel::AlwaysOnTop
                            } else {
                                egui::WindowLevel::Normal
                            };
                            ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
                        }
                        ui.end_row();

                        ui.label(txt("gui.settings.theme", "Theme"));
                        ui.horizontal(|ui| {
                            if ui
                                .selectable_value(&mut self.theme, ThemeChoice::System, "System")
                                .clicked()
                            {
                                ctx.set_visuals(egui::Visuals::default());
                            }
                            if ui
                                .selectable_value(&mut self.theme, ThemeChoice::Light, "Light")
                                .clicked()
                            {
                                ctx.set_visuals(egui::Visuals::light());
                            }
                            if ui
                                .selectable_value(&mut self.theme, ThemeChoice::Dark, "Dark")
                                .clicked()
                            {
                                ctx.set_visuals(egui::Visuals::dark());
                            }
                        });
                        ui.end_row();

                        ui.label(txt("gui.settings.custom_font", "Custom font"));
                        ui.horizontal(|ui| {
                            ui.text_edit_singleline(&mut self.custom_font_path);
                            if ui.button(txt("gui.settings.pick_font", "Browse…")).clicked() {
                                if let Some(path) = FileDialog::new()
                                    .add_filter("Font", &["ttf", "ttc", "otf"])
                                    .pick_file()
                                {
                                    self.custom_font_path = path.display().to_string();
                                }
                            }
                            if ui.button(txt("gui.settings.apply_font", "Apply")).clicked() {
                                match load_custom_font(ctx, &self.custom_font_path) {
                                    Ok(()) => self.font_load_error = None,
                                    Err(e) => self.font_load_error = Some(e),
                                }
                            }
                        });
                        ui.end_row();
                    });
                if let Some(err) = &self.font_load_error {
                    ui.colored_label(egui::Color32::RED, err);
                }
                ui.add_space(8.0);
                if ui.button(txt("gui.settings.save", "Save")).clicked() {
                    self.config.language = self.lang_input.trim().to_string();
                    self.config.language_pack_dir = if self.lang_pack_dir_input.trim().is_empty() {
                        None
                    } else {
                        Some(self.lang_pack_dir_input.trim().to_string())
                    };
                    self.config.window_alpha = self.window_alpha;
                    let lang_code =
                        i18n::resolve_language("auto", Some(self.config.language.as_str()));
                    self.tr = i18n::Translator::new_with_pack(
                        &lang_code,
                        self.config.language_pack_dir.as_deref(),
                    );
                    self.lang_save_status = match self.config.save() {
                        Ok(()) => Some(txt("gui.settings.saved", "Saved.")),
                        Err(e) => Some(format!("{e}")),
                    };
                }
                if let Some(status) = &self.lang_save_status {
                    ui.small(status);
                }
            });
        self.show_settings_modal = open;
    }

    fn ui_help_window(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_help_modal;
        egui::Window::new(txt("gui.help.title", "Formulas"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(txt(
                    "gui.help.body",
                    "f = c/λ, k = 1/λ\nΔf = (c/λ²)·Δλ, Δk = Δλ/λ²\nmW = 10^(dBm/10), W = mW/1000\nf = (π × D × MFD) / (4 × λ)",
                ));
            });
        self.show_help_modal = open;
    }
}

fn anchor_marker(label: &str, active: bool) -> egui::RichText {
    if active {
        egui::RichText::new(format!("◀ {label}")).strong()
    } else {
        egui::RichText::new("")
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = if *text_style == egui::TextStyle::Heading {
                self.font_size * 1.3
            } else {
                self.font_size
            };
        }
        ctx.set_style(style);
        ctx.set_pixels_per_point(self.ui_scale);

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(170.0)
            .show(ctx, |ui| self.ui_nav(ui));

        let fill = ctx.style().visuals.panel_fill;
        let alpha = (self.window_alpha * 255.0) as u8;
        let fill = egui::Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), alpha);
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(fill).inner_margin(12.0))
            .show(ctx, |ui| match self.tab {
                Tab::Spectral => self.ui_spectral(ui),
                Tab::Power => self.ui_power(ui),
                Tab::Fiber => self.ui_fiber(ui),
            });

        if self.show_settings_modal {
            self.ui_settings_window(ctx);
        }
        if self.show_help_modal {
            self.ui_help_window(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laser_optics_toolbox::conversion::display_si;
    use laser_optics_toolbox::quantity::SPEED_OF_LIGHT_M_PER_S as C;

    #[test]
    fn new_seeds_initial_sync_from_532nm() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.l_text, "532");
        assert_eq!(app.dl_text, "1");
        // 초기 연동이 f와 k를 채웠는지 확인
        let expected_f = display_si(Some(C / 532e-9), 1e12);
        assert_eq!(app.f_text, expected_f);
        let expected_k = display_si(Some(1.0 / 532e-9), 1e2);
        assert_eq!(app.k_text, expected_k);
        assert!(!app.df_text.is_empty());
        assert!(!app.dk_text.is_empty());
    }

    #[test]
    fn commit_power_syncs_other_fields() {
        let mut app = GuiApp::new(config::Config::default());
        app.dbm_text = "0".into();
        app.commit_power(PowerField::Dbm);
        assert_eq!(app.dbm_text, "0");
        assert_eq!(app.mw_text, "1");
        assert_eq!(app.w_text, "0.001000000");
    }

    #[test]
    fn focus_then_center_edit_keeps_delta_frequency() {
        let mut app = GuiApp::new(config::Config::default());
        app.df_text = "10".into();
        app.focus_delta(DeltaField::Frequency);
        app.commit_delta(DeltaField::Frequency);
        let df_before = app.spectral.delta_frequency_hz;
        app.l_text = "1550".into();
        app.commit_absolute(AbsoluteField::Wavelength);
        assert_eq!(app.spectral.delta_frequency_hz, df_before);
        assert_eq!(app.df_text, "10");
    }
}
