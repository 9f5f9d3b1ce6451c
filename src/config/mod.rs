// ==========================================
// 节拍排程核心 - 配置层
// ==========================================
// 职责: 节拍计算配置 (工作日历 / 缓冲阈值 / 消息语言)
// 存储: 由外部服务提供 JSON 或 key-value, 本核心不落库
// ==========================================

pub mod error;
pub mod takt_config;

// 重导出核心配置
pub use error::ConfigError;
pub use takt_config::{config_keys, TaktConfig, SUPPORTED_LOCALES};
