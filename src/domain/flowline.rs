// ==========================================
// 节拍排程核心 - 流水线图数据模型
// ==========================================
// 与渲染技术无关的纯数据结构: y = 工作区, x = 网格天偏移
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::AssignmentStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowlineZone {
    pub id: String,
    pub name: String,
    pub y_index: usize, // 按 sequence 排序后的位置
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowlineSegment {
    pub zone_id: String,
    pub zone_index: usize,
    pub x_start: u32,
    pub x_end: u32,
    pub y: usize,
    pub status: AssignmentStatus,
    pub progress: f64, // 0 ~ 100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowlineWagon {
    pub trade_id: String,
    pub wagon_id: String,
    pub segments: Vec<FlowlineSegment>,
}

/// 调用方叠加的实际执行进度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentProgress {
    pub zone_id: String,
    pub wagon_id: String,
    pub status: AssignmentStatus,
    #[serde(default)]
    pub progress_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowlineData {
    pub zones: Vec<FlowlineZone>,
    pub wagons: Vec<FlowlineWagon>,
    pub total_days: u32,
    pub takt_time: u32,
}

impl FlowlineData {
    /// 把实际进度叠加到对应的 (工作区, 车厢) 线段上
    ///
    /// # 返回
    /// 命中的线段数; 找不到线段的进度记录直接忽略
    pub fn apply_progress(&mut self, progress: &[AssignmentProgress]) -> usize {
        let mut applied = 0;

        for record in progress {
            let Some(wagon) = self.wagons.iter_mut().find(|w| w.wagon_id == record.wagon_id)
            else {
                debug!(wagon_id = %record.wagon_id, "进度记录对应的车厢不在流水线中,忽略");
                continue;
            };

            if let Some(segment) = wagon
                .segments
                .iter_mut()
                .find(|s| s.zone_id == record.zone_id)
            {
                segment.status = record.status;
                segment.progress = record.progress_pct.clamp(0.0, 100.0);
                applied += 1;
            }
        }

        applied
    }

    /// "今天" 在 x 轴上的位置 (自然日, 不早于 0)
    pub fn today_offset(start_date: NaiveDate, today: NaiveDate) -> i64 {
        (today - start_date).num_days().max(0)
    }
}
