//! 핵심 변환 로직을 라이브러리로 분리하여 CLI 뿐 아니라 GUI에서도 같은 엔진을 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod fiber;
pub mod format;
pub mod i18n;
pub mod power;
pub mod quantity;
pub mod spectral;
pub mod ui_cli;
pub mod units;
