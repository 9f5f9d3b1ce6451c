// ==========================================
// 节拍排程核心 - 领域类型定义
// ==========================================
// 约束分类 / 优先级 / 来源 / 告警严重度 / 任务执行状态
// 序列化格式: kebab-case 或 snake_case (与约束跟踪模块一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 约束分类 (Constraint Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintCategory {
    Space,       // 工作面冲突 (工种叠加)
    Predecessor, // 前置工序未完成
    Schedule,    // 进度缓冲不足
}

impl fmt::Display for ConstraintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintCategory::Space => write!(f, "space"),
            ConstraintCategory::Predecessor => write!(f, "predecessor"),
            ConstraintCategory::Schedule => write!(f, "schedule"),
        }
    }
}

// ==========================================
// 约束优先级 (Constraint Priority)
// ==========================================
// 顺序: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ConstraintPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintPriority::Low => write!(f, "low"),
            ConstraintPriority::Medium => write!(f, "medium"),
            ConstraintPriority::High => write!(f, "high"),
            ConstraintPriority::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 约束来源 (Constraint Source)
// ==========================================
// 本核心只产出 auto-detected; Manual 由约束跟踪模块自行登记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintSource {
    AutoDetected,
    Manual,
}

impl fmt::Display for ConstraintSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintSource::AutoDetected => write!(f, "auto-detected"),
            ConstraintSource::Manual => write!(f, "manual"),
        }
    }
}

// ==========================================
// 告警严重度 (Warning Severity)
// ==========================================
// 当前缓冲检测只产出 Warning; Critical 预留给更细的启发式规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Warning,
    Critical,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningSeverity::Warning => write!(f, "warning"),
            WarningSeverity::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 任务执行状态 (Assignment Status)
// ==========================================
// 投影器只输出 Planned; 其余状态由调用方叠加实际进度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Delayed,
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentStatus::Planned => write!(f, "planned"),
            AssignmentStatus::InProgress => write!(f, "in_progress"),
            AssignmentStatus::Completed => write!(f, "completed"),
            AssignmentStatus::Delayed => write!(f, "delayed"),
        }
    }
}

// ==========================================
// 前置工序跳过原因 (Skip Reason)
// ==========================================
// 引用缺失不是错误,只作为数据质量诊断输出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    TradeNotInCatalogue,  // 车厢的工种不在工种目录中
    PredecessorNotInPlan, // 前置工种代码在本节拍列车中没有车厢
    DuplicateTradeCode,   // 同一工种代码对应多个车厢,只取第一个
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TradeNotInCatalogue => write!(f, "TRADE_NOT_IN_CATALOGUE"),
            SkipReason::PredecessorNotInPlan => write!(f, "PREDECESSOR_NOT_IN_PLAN"),
            SkipReason::DuplicateTradeCode => write!(f, "DUPLICATE_TRADE_CODE"),
        }
    }
}
