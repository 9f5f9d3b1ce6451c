// ==========================================
// 节拍排程核心 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 原则: 输入结构非法时快速失败, 不静默产出错误日期
// 引用缺失 (前置工种不在计划内) 不属于错误
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaktError {
    // ===== 日历错误 =====
    #[error("工作日历无效: {0}")]
    InvalidCalendar(String),

    #[error("星期代码无效: {0}（仅支持 0=周日 ~ 6=周六）")]
    InvalidWeekdayCode(u8),

    // ===== 输入校验错误 =====
    #[error("{entity} 顺序号无效 (id={id}): {sequence}，必须为正整数")]
    InvalidSequence {
        entity: &'static str,
        id: String,
        sequence: u32,
    },

    #[error("车厢工期无效 (wagon_id={wagon_id}): {duration_days} 天，必须至少 1 天")]
    InvalidDuration { wagon_id: String, duration_days: u32 },

    #[error("节拍时间无效: {0} 天，必须至少 1 天")]
    InvalidTaktTime(u32),

    // ===== 日期计算错误 =====
    #[error("日期计算溢出: 起始 {start} 之后 {days} 个工作日")]
    DateOverflow { start: String, days: u32 },
}

/// 引擎层结果类型
pub type TaktResult<T> = Result<T, TaktError>;
