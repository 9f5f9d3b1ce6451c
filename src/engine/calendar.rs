// ==========================================
// 节拍排程核心 - 工作日历
// ==========================================
// 职责: 按工作日推进日期, 跳过非工作星期
// 星期代码: 0=周日, 1=周一 ... 6=周六 (默认 1~5)
// 红线: 空工作日集合必须立即报错, 不得死循环
// ==========================================

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{TaktError, TaktResult};

/// 默认工作日: 周一 ~ 周五
pub const DEFAULT_WORKING_DAY_CODES: [u8; 5] = [1, 2, 3, 4, 5];

// ==========================================
// WorkingCalendar - 工作日历
// ==========================================
// 位掩码: 第 n 位对应 num_days_from_sunday() == n
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WorkingCalendar {
    mask: u8,
}

impl WorkingCalendar {
    /// 由星期集合构造
    ///
    /// # 返回
    /// - `Err(TaktError::InvalidCalendar)`: 集合为空
    pub fn new(working_days: &[Weekday]) -> TaktResult<Self> {
        let mask = working_days
            .iter()
            .fold(0u8, |acc, day| acc | (1 << day.num_days_from_sunday()));
        Self::from_mask(mask)
    }

    /// 由星期代码构造 (0=周日 ~ 6=周六)
    pub fn from_day_codes(codes: &[u8]) -> TaktResult<Self> {
        let mut mask = 0u8;
        for &code in codes {
            if code > 6 {
                warn!(code = code, "星期代码超出范围");
                return Err(TaktError::InvalidWeekdayCode(code));
            }
            mask |= 1 << code;
        }
        Self::from_mask(mask)
    }

    fn from_mask(mask: u8) -> TaktResult<Self> {
        if mask == 0 {
            warn!("工作日集合为空");
            return Err(TaktError::InvalidCalendar(
                "工作日集合不能为空".to_string(),
            ));
        }
        Ok(Self { mask })
    }

    #[inline]
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.mask & (1 << date.weekday().num_days_from_sunday()) != 0
    }

    /// 每周工作日数 (1 ~ 7)
    pub fn working_days_per_week(&self) -> u32 {
        self.mask.count_ones()
    }

    /// 工作日星期代码, 升序
    pub fn day_codes(&self) -> Vec<u8> {
        (0u8..7).filter(|code| self.mask & (1 << code) != 0).collect()
    }

    /// 从 `start` 起推进 `days` 个工作日
    ///
    /// # 规则
    /// - `days == 0` 原样返回 `start` (即使 start 本身不是工作日)
    /// - 逐日前进, 只有落在工作日上的日子才计数
    /// - 整周先整体跳过: 任意连续 7 天恰好包含 `working_days_per_week` 个工作日
    pub fn add_working_days(&self, start: NaiveDate, days: u32) -> TaktResult<NaiveDate> {
        if days == 0 {
            return Ok(start);
        }

        let overflow = || TaktError::DateOverflow {
            start: start.to_string(),
            days,
        };

        let per_week = self.working_days_per_week();
        let full_weeks = (days - 1) / per_week;
        let mut remaining = days - full_weeks * per_week;

        let mut current = start
            .checked_add_days(Days::new(u64::from(full_weeks) * 7))
            .ok_or_else(overflow)?;

        while remaining > 0 {
            current = current.succ_opt().ok_or_else(overflow)?;
            if self.is_working_day(current) {
                remaining -= 1;
            }
        }

        Ok(current)
    }
}

impl Default for WorkingCalendar {
    fn default() -> Self {
        // 1..=5: 周一 ~ 周五
        Self { mask: 0b0011_1110 }
    }
}

impl TryFrom<Vec<u8>> for WorkingCalendar {
    type Error = TaktError;

    fn try_from(codes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_day_codes(&codes)
    }
}

impl From<WorkingCalendar> for Vec<u8> {
    fn from(calendar: WorkingCalendar) -> Self {
        calendar.day_codes()
    }
}

/// 按给定星期集合推进工作日
pub fn add_working_days(
    start: NaiveDate,
    days: u32,
    working_days: &[Weekday],
) -> TaktResult<NaiveDate> {
    WorkingCalendar::new(working_days)?.add_working_days(start, days)
}
