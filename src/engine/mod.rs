// ==========================================
// 节拍排程核心 - 引擎层
// ==========================================
// 职责: 节拍网格生成 + 冲突检测 + 流水线投影
// 红线: 纯计算, 不做 I/O, 同样输入必得同样输出
// ==========================================

pub mod buffer;
pub mod calendar;
pub mod error;
pub mod flowline;
pub mod grid;
pub mod plan_validator;
pub mod predecessor;
pub mod stacking;
pub mod summary;

// 重导出核心引擎
pub use buffer::BufferWarningDetector;
pub use calendar::{add_working_days, WorkingCalendar};
pub use error::{TaktError, TaktResult};
pub use flowline::FlowlineProjector;
pub use grid::{TaktGrid, TaktGridGenerator};
pub use plan_validator::{ConstraintSynthesizer, PlanValidator};
pub use predecessor::{PredecessorDetector, PredecessorReport};
pub use stacking::TradeStackingDetector;
pub use summary::PlanSummaryEngine;
