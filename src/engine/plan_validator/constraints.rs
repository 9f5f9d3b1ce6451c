use std::collections::HashMap;

use crate::domain::conflict::{
    AutoDetectedConstraint, BufferWarning, PredecessorViolation, TradeStackingConflict,
};
use crate::domain::plan::TradeInfo;
use crate::domain::types::{ConstraintCategory, ConstraintPriority, ConstraintSource};
use crate::engine::grid::TaktGrid;
use crate::i18n::t_in;

// ==========================================
// ConstraintSynthesizer - 自动识别约束合成
// ==========================================
// 把检测结果渲染成标题/描述/分类/优先级, 消息语言取自配置
pub struct ConstraintSynthesizer<'a> {
    locale: &'a str,
    zone_names: HashMap<&'a str, &'a str>,
    wagon_trade_names: HashMap<&'a str, &'a str>,
}

impl<'a> ConstraintSynthesizer<'a> {
    /// # 参数
    /// - `locale`: 消息语言
    /// - `grid`: 用于工作区名称与车厢 -> 工种映射
    /// - `trades`: 工种目录; 缺失时名称退化为 trade_id
    pub fn new(locale: &'a str, grid: &'a TaktGrid, trades: &'a [TradeInfo]) -> Self {
        let zone_names = grid
            .zones
            .iter()
            .map(|z| (z.id.as_str(), z.name.as_str()))
            .collect();

        let trade_names: HashMap<&str, &str> = trades
            .iter()
            .map(|t| (t.id.as_str(), t.name.as_str()))
            .collect();
        let wagon_trade_names = grid
            .wagons
            .iter()
            .map(|w| {
                let name = trade_names
                    .get(w.trade_id.as_str())
                    .copied()
                    .unwrap_or(w.trade_id.as_str());
                (w.id.as_str(), name)
            })
            .collect();

        Self {
            locale,
            zone_names,
            wagon_trade_names,
        }
    }

    fn zone_name<'b>(&self, zone_id: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.zone_names.get(zone_id).copied().unwrap_or(zone_id)
    }

    fn wagon_trade<'b>(&self, wagon_id: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.wagon_trade_names.get(wagon_id).copied().unwrap_or(wagon_id)
    }

    /// 工种叠加 -> space / critical
    pub fn from_stacking(&self, conflict: &TradeStackingConflict) -> AutoDetectedConstraint {
        let trade_a = self.wagon_trade(&conflict.wagon_1);
        let trade_b = self.wagon_trade(&conflict.wagon_2);
        let zone = self.zone_name(&conflict.zone_id);
        let overlap_start = conflict.overlap_start.to_string();
        let overlap_end = conflict.overlap_end.to_string();

        AutoDetectedConstraint {
            title: t_in(
                self.locale,
                "constraint.stacking.title",
                &[("trade_a", trade_a), ("trade_b", trade_b)],
            ),
            description: t_in(
                self.locale,
                "constraint.stacking.description",
                &[
                    ("trade_a", trade_a),
                    ("trade_b", trade_b),
                    ("zone", zone),
                    ("overlap_start", overlap_start.as_str()),
                    ("overlap_end", overlap_end.as_str()),
                ],
            ),
            category: ConstraintCategory::Space,
            priority: ConstraintPriority::Critical,
            source: ConstraintSource::AutoDetected,
            zone_id: Some(conflict.zone_id.clone()),
            wagon_ids: vec![conflict.wagon_1.clone(), conflict.wagon_2.clone()],
        }
    }

    /// 前置工序违反 -> predecessor / high
    pub fn from_predecessor(&self, violation: &PredecessorViolation) -> AutoDetectedConstraint {
        let zone = self.zone_name(&violation.zone_id);
        let start = violation.start_date.to_string();
        let predecessor_end = violation.predecessor_end_date.to_string();
        let overlap_days = violation.overlap_days.to_string();

        AutoDetectedConstraint {
            title: t_in(
                self.locale,
                "constraint.predecessor.title",
                &[
                    ("trade", violation.trade_name.as_str()),
                    ("predecessor", violation.predecessor_name.as_str()),
                ],
            ),
            description: t_in(
                self.locale,
                "constraint.predecessor.description",
                &[
                    ("trade", violation.trade_name.as_str()),
                    ("predecessor", violation.predecessor_name.as_str()),
                    ("zone", zone),
                    ("start", start.as_str()),
                    ("predecessor_end", predecessor_end.as_str()),
                    ("overlap_days", overlap_days.as_str()),
                ],
            ),
            category: ConstraintCategory::Predecessor,
            priority: ConstraintPriority::High,
            source: ConstraintSource::AutoDetected,
            zone_id: Some(violation.zone_id.clone()),
            wagon_ids: Vec::new(),
        }
    }

    /// 缓冲不足 -> schedule / medium (仅在配置开启时调用)
    pub fn from_buffer(&self, warning: &BufferWarning, takt_time: u32) -> AutoDetectedConstraint {
        let takt = takt_time.to_string();
        let recommended = warning.recommended_buffer_days.to_string();
        let actual = warning.actual_buffer_days.to_string();

        AutoDetectedConstraint {
            title: t_in(
                self.locale,
                "constraint.buffer.title",
                &[
                    ("from_trade", warning.from_trade.as_str()),
                    ("to_trade", warning.to_trade.as_str()),
                ],
            ),
            description: t_in(
                self.locale,
                "constraint.buffer.description",
                &[
                    ("from_trade", warning.from_trade.as_str()),
                    ("to_trade", warning.to_trade.as_str()),
                    ("takt_time", takt.as_str()),
                    ("recommended", recommended.as_str()),
                    ("actual", actual.as_str()),
                ],
            ),
            category: ConstraintCategory::Schedule,
            priority: ConstraintPriority::Medium,
            source: ConstraintSource::AutoDetected,
            zone_id: None,
            wagon_ids: vec![warning.from_wagon_id.clone(), warning.to_wagon_id.clone()],
        }
    }
}
