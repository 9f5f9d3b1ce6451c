// ==========================================
// 节拍排程核心 - 冲突检测结果模型
// ==========================================
// 工种叠加 / 前置工序违反 / 缓冲不足 / 自动识别约束
// 红线: 只检测、只报告, 不决定如何消解
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{
    ConstraintCategory, ConstraintPriority, ConstraintSource, SkipReason, WarningSeverity,
};

// ==========================================
// TradeStackingConflict - 工种叠加冲突
// ==========================================
// 同一工作区内两节不同车厢日期区间重叠
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStackingConflict {
    pub zone_id: String,
    pub wagon_1: String,
    pub wagon_2: String,
    pub period_1: u32,
    pub period_2: u32,
    pub overlap_start: NaiveDate,
    pub overlap_end: NaiveDate,
}

// ==========================================
// PredecessorViolation - 前置工序违反
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredecessorViolation {
    pub zone_id: String,
    pub trade_id: String,
    pub trade_code: String,
    pub trade_name: String,
    pub predecessor_code: String,
    pub predecessor_name: String,
    pub start_date: NaiveDate,            // 本工种开工日
    pub predecessor_end_date: NaiveDate,  // 前置工种完工日
    pub overlap_days: i64,
}

// ==========================================
// SkippedPredecessor - 被跳过的前置引用 (诊断输出)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPredecessor {
    pub trade_id: String,
    pub predecessor_code: Option<String>,
    pub reason: SkipReason,
}

// ==========================================
// BufferWarning - 缓冲不足告警
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferWarning {
    pub from_wagon_id: String,
    pub to_wagon_id: String,
    pub from_trade: String,        // 工种名称, 目录缺失时退化为 trade_id
    pub to_trade: String,
    pub actual_buffer_days: u32,
    pub recommended_buffer_days: u32,
    pub severity: WarningSeverity,
}

// ==========================================
// AutoDetectedConstraint - 自动识别约束
// ==========================================
// 供约束跟踪模块落库为普通约束记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoDetectedConstraint {
    pub title: String,
    pub description: String,
    pub category: ConstraintCategory,
    pub priority: ConstraintPriority,
    pub source: ConstraintSource,
    pub zone_id: Option<String>,
    pub wagon_ids: Vec<String>,
}

// ==========================================
// PlanWarnings - 单次计划评估的汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWarnings {
    pub trade_stacking: Vec<TradeStackingConflict>,
    pub predecessor_violations: Vec<PredecessorViolation>,
    pub buffer_warnings: Vec<BufferWarning>,
    pub auto_constraints: Vec<AutoDetectedConstraint>,
    #[serde(default)]
    pub skipped_predecessors: Vec<SkippedPredecessor>,
}

impl PlanWarnings {
    /// 无叠加、无前置违反、无缓冲告警
    pub fn is_clean(&self) -> bool {
        self.trade_stacking.is_empty()
            && self.predecessor_violations.is_empty()
            && self.buffer_warnings.is_empty()
    }

    /// 是否存在 critical 级约束
    pub fn has_critical(&self) -> bool {
        self.auto_constraints
            .iter()
            .any(|c| c.priority == ConstraintPriority::Critical)
    }

    pub fn total_findings(&self) -> usize {
        self.trade_stacking.len() + self.predecessor_violations.len() + self.buffer_warnings.len()
    }
}
