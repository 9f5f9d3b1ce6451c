// ==========================================
// 节拍排程核心 - 缓冲不足检测
// ==========================================
// 规则: takt <= 3 天时建议相邻工种间至少 1 天缓冲, 否则建议 0
// 只产出 Warning 级别
// ==========================================

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::domain::conflict::BufferWarning;
use crate::domain::plan::{TradeInfo, Wagon};
use crate::domain::types::WarningSeverity;

/// 短节拍阈值 (天)
pub const DEFAULT_SHORT_TAKT_THRESHOLD_DAYS: u32 = 3;
/// 短节拍下的建议缓冲 (天)
pub const DEFAULT_RECOMMENDED_BUFFER_DAYS: u32 = 1;

// ==========================================
// BufferWarningDetector - 缓冲检测器
// ==========================================
pub struct BufferWarningDetector {
    short_takt_threshold_days: u32,
    recommended_buffer_days: u32,
}

impl BufferWarningDetector {
    pub fn new() -> Self {
        Self::with_thresholds(
            DEFAULT_SHORT_TAKT_THRESHOLD_DAYS,
            DEFAULT_RECOMMENDED_BUFFER_DAYS,
        )
    }

    pub fn with_thresholds(short_takt_threshold_days: u32, recommended_buffer_days: u32) -> Self {
        Self {
            short_takt_threshold_days,
            recommended_buffer_days,
        }
    }

    /// 给定节拍时间下的建议缓冲 (天)
    pub fn recommended_buffer(&self, takt_time: u32) -> u32 {
        if takt_time <= self.short_takt_threshold_days {
            self.recommended_buffer_days
        } else {
            0
        }
    }

    /// 检测相邻车厢间缓冲不足
    ///
    /// # 参数
    /// - `wagons`: 车厢 (内部按 sequence 稳定排序)
    /// - `trades`: 工种目录, 仅用于显示名称; 缺失时退化为 trade_id
    /// - `takt_time`: 节拍时间
    pub fn detect_buffer_warnings(
        &self,
        wagons: &[Wagon],
        trades: &[TradeInfo],
        takt_time: u32,
    ) -> Vec<BufferWarning> {
        let recommended = self.recommended_buffer(takt_time);
        if recommended == 0 {
            debug!(takt_time = takt_time, "长节拍,无需检查缓冲");
            return Vec::new();
        }

        let names: HashMap<&str, &str> = trades
            .iter()
            .map(|t| (t.id.as_str(), t.name.as_str()))
            .collect();
        let display = |wagon: &Wagon| -> String {
            names
                .get(wagon.trade_id.as_str())
                .map(|n| n.to_string())
                .unwrap_or_else(|| wagon.trade_id.clone())
        };

        let mut sorted: Vec<&Wagon> = wagons.iter().collect();
        sorted.sort_by_key(|w| w.sequence);

        let warnings: Vec<BufferWarning> = sorted
            .windows(2)
            .filter(|pair| pair[0].buffer_after == 0)
            .map(|pair| {
                let warning = BufferWarning {
                    from_wagon_id: pair[0].id.clone(),
                    to_wagon_id: pair[1].id.clone(),
                    from_trade: display(pair[0]),
                    to_trade: display(pair[1]),
                    actual_buffer_days: pair[0].buffer_after,
                    recommended_buffer_days: recommended,
                    severity: WarningSeverity::Warning,
                };
                warn!(
                    from_trade = %warning.from_trade,
                    to_trade = %warning.to_trade,
                    takt_time = takt_time,
                    recommended_buffer_days = recommended,
                    "相邻工种间无缓冲"
                );
                warning
            })
            .collect();

        debug!(warnings = warnings.len(), "缓冲检测完成");
        warnings
    }
}

impl Default for BufferWarningDetector {
    fn default() -> Self {
        Self::new()
    }
}
