// ==========================================
// 节拍排程核心 - 计划统计
// ==========================================
// 输入: 节拍网格 + 调用方提供的执行进度 (可为空)
// 输出: PlanSummary
// ==========================================

use std::collections::HashMap;
use tracing::info;

use super::grid::{TaktGrid, TaktGridGenerator};
use crate::domain::flowline::AssignmentProgress;
use crate::domain::plan::PlanSummary;
use crate::domain::types::AssignmentStatus;

pub struct PlanSummaryEngine {}

impl PlanSummaryEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 生成计划统计
    ///
    /// - total_days: 总跨度公式 (取最大车厢缓冲), 仅供展示
    /// - end_date: 实际最晚计划完工日
    /// - 无进度记录的任务计为 planned
    pub fn summarize(&self, grid: &TaktGrid, progress: &[AssignmentProgress]) -> PlanSummary {
        let total_days = TaktGridGenerator::calculate_total_periods(
            u32::try_from(grid.zones.len()).unwrap_or(u32::MAX),
            u32::try_from(grid.wagons.len()).unwrap_or(u32::MAX),
            grid.takt_time,
            grid.max_buffer_days(),
        );
        let total_periods = total_days.div_ceil(grid.takt_time.max(1));

        let status_by_key: HashMap<(&str, &str), AssignmentStatus> = progress
            .iter()
            .map(|p| ((p.zone_id.as_str(), p.wagon_id.as_str()), p.status))
            .collect();

        let (mut completed, mut in_progress, mut planned, mut delayed) = (0, 0, 0, 0);
        for assignment in &grid.assignments {
            let status = status_by_key
                .get(&(assignment.zone_id.as_str(), assignment.wagon_id.as_str()))
                .copied()
                .unwrap_or_default();
            match status {
                AssignmentStatus::Completed => completed += 1,
                AssignmentStatus::InProgress => in_progress += 1,
                AssignmentStatus::Planned => planned += 1,
                AssignmentStatus::Delayed => delayed += 1,
            }
        }

        let total = grid.assignments.len();
        let overall_progress_pct = if total > 0 {
            (completed as f64 / total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        info!(
            total_assignments = total,
            completed = completed,
            overall_progress_pct = overall_progress_pct,
            "计划统计完成"
        );

        PlanSummary {
            total_periods,
            total_days,
            start_date: grid.start_date,
            end_date: grid.end_date(),
            num_zones: grid.zones.len(),
            num_trades: grid.wagons.len(),
            num_assignments: total,
            completed_assignments: completed,
            in_progress_assignments: in_progress,
            planned_assignments: planned,
            delayed_assignments: delayed,
            overall_progress_pct,
        }
    }
}

impl Default for PlanSummaryEngine {
    fn default() -> Self {
        Self::new()
    }
}
