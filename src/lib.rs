//! 单位换算与标签查询逻辑独立成库,供 CLI 与前端展示层共用。

pub mod app;
pub mod config;
pub mod conversion;
pub mod format;
pub mod i18n;
pub mod labels;
pub mod quantity;
pub mod ui_cli;
pub mod units;
