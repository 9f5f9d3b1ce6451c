// ==========================================
// 节拍排程核心 - 核心库
// ==========================================
// 职责: 工作区 x 车厢 -> 节拍网格 -> 冲突检测 -> 流水线数据
// 技术栈: Rust + chrono + serde
// 系统定位: 纯计算核心, 持久化与界面由宿主服务负责
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 网格与检测
pub mod engine;

// 配置层 - 节拍计算配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AssignmentStatus, ConstraintCategory, ConstraintPriority, ConstraintSource, SkipReason,
    WarningSeverity,
};

// 领域实体
pub use domain::{
    Assignment, AutoDetectedConstraint, BufferWarning, FlowlineData, PlanSummary, PlanWarnings,
    PredecessorViolation, TradeInfo, TradeStackingConflict, Wagon, Zone,
};

// 引擎
pub use engine::{
    BufferWarningDetector, FlowlineProjector, PlanSummaryEngine, PlanValidator,
    PredecessorDetector, TaktError, TaktGrid, TaktGridGenerator, TaktResult,
    TradeStackingDetector, WorkingCalendar,
};

// 配置
pub use config::{ConfigError, TaktConfig};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 名称
pub const APP_NAME: &str = "节拍排程核心";
