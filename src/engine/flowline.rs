// ==========================================
// 节拍排程核心 - 流水线图投影
// ==========================================
// 职责: 节拍任务 -> 与渲染无关的流水线数据
// x 轴: 网格天偏移, x_start = period_number - 1, x_end = x_start + duration_days
// y 轴: 工作区按 sequence 排序后的位置
// total_days 取实际线段的最大 x_end, 不用总跨度公式重算
// ==========================================

use std::collections::HashMap;
use tracing::{debug, warn};

use super::grid::TaktGrid;
use crate::domain::flowline::{FlowlineData, FlowlineSegment, FlowlineWagon, FlowlineZone};
use crate::domain::plan::{Assignment, Wagon, Zone};
use crate::domain::types::AssignmentStatus;

pub struct FlowlineProjector {}

impl FlowlineProjector {
    pub fn new() -> Self {
        Self {}
    }

    /// 从网格投影
    pub fn project_grid(&self, grid: &TaktGrid) -> FlowlineData {
        self.compute_flowline_data(&grid.zones, &grid.wagons, &grid.assignments, grid.takt_time)
    }

    /// 计算流水线数据
    ///
    /// 任务可来自持久化层 (不要求带有效索引), 按 zone_id / wagon_id 关联
    pub fn compute_flowline_data(
        &self,
        zones: &[Zone],
        wagons: &[Wagon],
        assignments: &[Assignment],
        takt_time: u32,
    ) -> FlowlineData {
        let mut sorted_zones: Vec<&Zone> = zones.iter().collect();
        sorted_zones.sort_by_key(|z| z.sequence);

        let flow_zones: Vec<FlowlineZone> = sorted_zones
            .iter()
            .enumerate()
            .map(|(i, z)| FlowlineZone {
                id: z.id.clone(),
                name: z.name.clone(),
                y_index: i,
            })
            .collect();

        let y_by_zone: HashMap<&str, usize> = sorted_zones
            .iter()
            .enumerate()
            .map(|(i, z)| (z.id.as_str(), i))
            .collect();

        let mut sorted_wagons: Vec<&Wagon> = wagons.iter().collect();
        sorted_wagons.sort_by_key(|w| w.sequence);

        let mut total_days = 0u32;
        let mut flow_wagons = Vec::with_capacity(sorted_wagons.len());

        for wagon in sorted_wagons {
            let mut wagon_assignments: Vec<&Assignment> = assignments
                .iter()
                .filter(|a| a.wagon_id == wagon.id)
                .collect();
            wagon_assignments.sort_by_key(|a| a.period_number);

            let mut segments = Vec::with_capacity(wagon_assignments.len());
            for assignment in wagon_assignments {
                let Some(&y) = y_by_zone.get(assignment.zone_id.as_str()) else {
                    warn!(zone_id = %assignment.zone_id, wagon_id = %wagon.id, "任务所在工作区不在流水线中,跳过");
                    continue;
                };

                let x_start = assignment.day_offset();
                let x_end = x_start.saturating_add(wagon.duration_days);
                total_days = total_days.max(x_end);

                segments.push(FlowlineSegment {
                    zone_id: assignment.zone_id.clone(),
                    zone_index: y,
                    x_start,
                    x_end,
                    y,
                    status: AssignmentStatus::Planned,
                    progress: 0.0,
                });
            }

            flow_wagons.push(FlowlineWagon {
                trade_id: wagon.trade_id.clone(),
                wagon_id: wagon.id.clone(),
                segments,
            });
        }

        debug!(
            zones = flow_zones.len(),
            wagons = flow_wagons.len(),
            total_days = total_days,
            "流水线数据计算完成"
        );

        FlowlineData {
            zones: flow_zones,
            wagons: flow_wagons,
            total_days,
            takt_time,
        }
    }
}

impl Default for FlowlineProjector {
    fn default() -> Self {
        Self::new()
    }
}
