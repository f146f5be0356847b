//! エクスポート機能

#[cfg(feature = "excel")]
pub mod excel_core;
