// ==========================================
// 节拍排程核心 - 领域模型层
// ==========================================
// 职责: 定义输入实体、计算结果与枚举类型
// 红线: 不含计算逻辑,不持有跨调用的可变状态
// ==========================================

pub mod conflict;
pub mod flowline;
pub mod plan;
pub mod types;

// 重导出核心类型
pub use conflict::{
    AutoDetectedConstraint, BufferWarning, PlanWarnings, PredecessorViolation,
    SkippedPredecessor, TradeStackingConflict,
};
pub use flowline::{AssignmentProgress, FlowlineData, FlowlineSegment, FlowlineWagon, FlowlineZone};
pub use plan::{Assignment, PlanSummary, TradeInfo, Wagon, WagonIdx, Zone, ZoneIdx};
pub use types::{
    AssignmentStatus, ConstraintCategory, ConstraintPriority, ConstraintSource, SkipReason,
    WarningSeverity,
};
