// ==========================================
// 节拍排程核心 - 计划校验引擎
// ==========================================
// 职责: 在同一网格上编排三类检测, 并合成自动识别约束
// 输入: 工作区 + 车厢 + 开工日 + 节拍时间 + 工种目录 + 工作日历
// 输出: PlanWarnings
// ==========================================
// 约束合成:
//   工种叠加     -> space / critical
//   前置工序违反 -> predecessor / high
//   缓冲不足     -> 默认不生成约束 (配置 emit_buffer_constraints 开启后为 schedule / medium)
// ==========================================

mod constraints;
mod core;


pub use self::constraints::ConstraintSynthesizer;
pub use self::core::PlanValidator;
