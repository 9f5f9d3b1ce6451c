// ==========================================
// 节拍排程核心 - 节拍计算配置
// ==========================================
// 来源: JSON 文件 / JSON 字符串 / key-value 覆写 (与 config_kv 表同键名)
// 缺省字段一律取默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use super::error::ConfigError;
use crate::engine::buffer::{DEFAULT_RECOMMENDED_BUFFER_DAYS, DEFAULT_SHORT_TAKT_THRESHOLD_DAYS};
use crate::engine::calendar::{WorkingCalendar, DEFAULT_WORKING_DAY_CODES};

/// 支持的消息语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

// ==========================================
// 配置键 (key-value 覆写)
// ==========================================
pub mod config_keys {
    pub const WORKING_DAYS: &str = "working_days"; // JSON 数组, 如 [1,2,3,4,5]
    pub const SHORT_TAKT_THRESHOLD_DAYS: &str = "short_takt_threshold_days";
    pub const RECOMMENDED_BUFFER_DAYS: &str = "recommended_buffer_days";
    pub const LOCALE: &str = "locale";
    pub const EMIT_BUFFER_CONSTRAINTS: &str = "emit_buffer_constraints";
}

// ==========================================
// TaktConfig - 节拍计算配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaktConfig {
    /// 工作日星期代码 (0=周日 ~ 6=周六)
    pub working_days: Vec<u8>,

    /// 节拍时间 <= 该值视为短节拍 (天)
    pub short_takt_threshold_days: u32,

    /// 短节拍下建议的相邻工种缓冲 (天)
    pub recommended_buffer_days: u32,

    /// 自动识别约束的消息语言
    pub locale: String,

    /// 缓冲告警是否也生成约束 (默认关闭)
    pub emit_buffer_constraints: bool,
}

impl Default for TaktConfig {
    fn default() -> Self {
        Self {
            working_days: DEFAULT_WORKING_DAY_CODES.to_vec(),
            short_takt_threshold_days: DEFAULT_SHORT_TAKT_THRESHOLD_DAYS,
            recommended_buffer_days: DEFAULT_RECOMMENDED_BUFFER_DAYS,
            locale: "zh-CN".to_string(),
            emit_buffer_constraints: false,
        }
    }
}

impl TaktConfig {
    /// 从 JSON 字符串加载并校验
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TaktConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载并校验
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "读取节拍配置文件");
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            working_days = ?config.working_days,
            locale = %config.locale,
            "节拍配置加载完成"
        );
        Ok(config)
    }

    /// 应用 key-value 覆写; 未知键记录告警后忽略
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Result<(), ConfigError> {
        for (key, value) in overrides {
            match key.as_str() {
                config_keys::WORKING_DAYS => {
                    self.working_days = serde_json::from_str(value)?;
                }
                config_keys::SHORT_TAKT_THRESHOLD_DAYS => {
                    self.short_takt_threshold_days = parse_value(key, value)?;
                }
                config_keys::RECOMMENDED_BUFFER_DAYS => {
                    self.recommended_buffer_days = parse_value(key, value)?;
                }
                config_keys::LOCALE => {
                    self.locale = value.trim().to_string();
                }
                config_keys::EMIT_BUFFER_CONSTRAINTS => {
                    self.emit_buffer_constraints = parse_value(key, value)?;
                }
                _ => {
                    warn!(key = %key, "未知配置键,忽略");
                }
            }
        }
        self.validate()
    }

    /// 校验配置
    ///
    /// # 验证规则
    /// 1. 工作日非空且代码在 0~6
    /// 2. 语言受支持
    pub fn validate(&self) -> Result<(), ConfigError> {
        WorkingCalendar::from_day_codes(&self.working_days).map_err(|e| ConfigError::Invalid {
            key: config_keys::WORKING_DAYS.to_string(),
            message: e.to_string(),
        })?;

        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::Invalid {
                key: config_keys::LOCALE.to_string(),
                message: format!("不支持的语言 {}，仅支持 {:?}", self.locale, SUPPORTED_LOCALES),
            });
        }

        Ok(())
    }

    /// 工作日历; 配置未校验时退回默认日历
    pub fn calendar(&self) -> WorkingCalendar {
        WorkingCalendar::from_day_codes(&self.working_days).unwrap_or_else(|e| {
            warn!(error = %e, "工作日配置无效,使用默认周一至周五");
            WorkingCalendar::default()
        })
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        message: format!("无法解析值 {}", value),
    })
}
