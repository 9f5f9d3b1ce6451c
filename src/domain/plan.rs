// ==========================================
// 节拍排程核心 - 节拍计划领域模型
// ==========================================
// 工作区 (Zone) / 车厢 (Wagon) / 工种 (TradeInfo) / 节拍任务 (Assignment)
// ==========================================
// 红线: 输入在单次计算内不可变, 任务一经生成不再修改
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 索引句柄
// ==========================================
// 指向 TaktGrid 中按 sequence 排序后的位置, 仅在同一网格内有效

/// 工作区在网格中的位置 (0 起)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneIdx(pub usize);

/// 车厢在节拍列车中的位置 (0 起)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WagonIdx(pub usize);

// ==========================================
// Zone - 工作区
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub sequence: u32,             // 流水线位置 (1 起, 计划内唯一且连续)
    #[serde(default)]
    pub area_sqm: Option<f64>,     // 面积 (平方米)
}

impl Zone {
    pub fn new(id: impl Into<String>, name: impl Into<String>, sequence: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sequence,
            area_sqm: None,
        }
    }
}

// ==========================================
// Wagon - 车厢 (节拍列车中的一个工种槽位)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wagon {
    pub id: String,
    pub trade_id: String,          // 工种标识
    pub sequence: u32,             // 列车内顺序 (1 起), 即生产顺序
    pub duration_days: u32,        // 单个工作区的工作量 (工作日)
    #[serde(default)]
    pub buffer_after: u32,         // 尾随缓冲 (天), 下一节车厢须在其后开始
}

impl Wagon {
    pub fn new(
        id: impl Into<String>,
        trade_id: impl Into<String>,
        sequence: u32,
        duration_days: u32,
        buffer_after: u32,
    ) -> Self {
        Self {
            id: id.into(),
            trade_id: trade_id.into(),
            sequence,
            duration_days,
            buffer_after,
        }
    }
}

// ==========================================
// TradeInfo - 工种信息 (仅供检测器使用)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeInfo {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    /// 在同一工作区内必须先完工的工种代码
    #[serde(default)]
    pub predecessor_codes: Vec<String>,
}

// ==========================================
// Assignment - 节拍任务
// ==========================================
// "车厢 W 在第 period_number 个网格位置占用工作区 Z, 从 S 到 E"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub zone_id: String,
    pub wagon_id: String,
    pub zone_idx: ZoneIdx,
    pub wagon_idx: WagonIdx,
    pub period_number: u32,        // 天偏移 + 1
    pub planned_start: NaiveDate,
    pub planned_end: NaiveDate,    // 含当日, 恒 >= planned_start
}

impl Assignment {
    /// 闭区间日期重叠: 同一天一收一开也算重叠
    pub fn overlaps(&self, other: &Assignment) -> bool {
        self.planned_start <= other.planned_end && other.planned_start <= self.planned_end
    }

    /// 网格上的天偏移 (x 轴起点)
    #[inline]
    pub fn day_offset(&self) -> u32 {
        self.period_number.saturating_sub(1)
    }
}

// ==========================================
// PlanSummary - 计划统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_periods: u32,
    pub total_days: u32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub num_zones: usize,
    pub num_trades: usize,
    pub num_assignments: usize,
    pub completed_assignments: usize,
    pub in_progress_assignments: usize,
    pub planned_assignments: usize,
    pub delayed_assignments: usize,
    pub overall_progress_pct: f64,
}
