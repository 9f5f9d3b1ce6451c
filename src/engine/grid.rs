// ==========================================
// 节拍排程核心 - 节拍网格生成引擎
// ==========================================
// 职责: 工作区 × 车厢 -> 带日期的节拍任务
// 输入: 工作区 + 车厢 + 开工日 + 节拍时间 + 工作日历
// 输出: TaktGrid (排序后的输入 + 全部任务)
// ==========================================
// 天偏移公式 (唯一口径, 网格/总跨度/流水线投影共用):
//   day_offset    = (zone.sequence - 1) * takt + i * takt + buffer_offset[i]
//   period_number = day_offset + 1
//   buffer_offset[0] = 0, buffer_offset[i] = buffer_offset[i-1] + wagons[i-1].buffer_after
// 缓冲以"天"计, 不以节拍周期计: buffer_after = 1 恒产生 1 天间隔
// ==========================================

use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

use super::calendar::WorkingCalendar;
use super::error::{TaktError, TaktResult};
use crate::domain::plan::{Assignment, Wagon, WagonIdx, Zone, ZoneIdx};

// ==========================================
// TaktGrid - 节拍网格
// ==========================================
// 持有按 sequence 排序后的工作区与车厢; 任务内的 ZoneIdx / WagonIdx 指向这里
// 任务按 "工作区优先" 顺序存放: index = zone_idx * wagon_count + wagon_idx
#[derive(Debug, Clone)]
pub struct TaktGrid {
    pub zones: Vec<Zone>,
    pub wagons: Vec<Wagon>,
    pub assignments: Vec<Assignment>,
    pub start_date: NaiveDate,
    pub takt_time: u32,
    pub calendar: WorkingCalendar,
}

impl TaktGrid {
    pub fn zone(&self, idx: ZoneIdx) -> Option<&Zone> {
        self.zones.get(idx.0)
    }

    pub fn wagon(&self, idx: WagonIdx) -> Option<&Wagon> {
        self.wagons.get(idx.0)
    }

    /// O(1) 定位某工作区某车厢的任务
    pub fn assignment_at(&self, zone: ZoneIdx, wagon: WagonIdx) -> Option<&Assignment> {
        if zone.0 >= self.zones.len() || wagon.0 >= self.wagons.len() {
            return None;
        }
        self.assignments.get(zone.0 * self.wagons.len() + wagon.0)
    }

    /// 同一工作区内的全部任务 (按车厢顺序)
    pub fn zone_assignments(&self, zone: ZoneIdx) -> &[Assignment] {
        let width = self.wagons.len();
        let start = zone.0 * width;
        if zone.0 >= self.zones.len() {
            return &[];
        }
        &self.assignments[start..start + width]
    }

    /// 最晚计划完工日; 空网格返回 None
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.assignments.iter().map(|a| a.planned_end).max()
    }

    /// 车厢中最大的尾随缓冲 (天)
    pub fn max_buffer_days(&self) -> u32 {
        self.wagons.iter().map(|w| w.buffer_after).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

// ==========================================
// TaktGridGenerator - 节拍网格生成引擎
// ==========================================
// 无状态引擎, 所有参数通过方法传入
pub struct TaktGridGenerator {}

impl TaktGridGenerator {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 输入校验
    // ==========================================

    /// 校验网格输入
    ///
    /// # 验证规则
    /// 1. 节拍时间至少 1 天
    /// 2. 工作区/车厢 sequence 必须为正
    /// 3. 车厢工期至少 1 天 (保证 planned_end >= planned_start)
    ///
    /// 重复 sequence 不报错 (保持输入顺序), 只记录告警
    pub fn validate_inputs(&self, zones: &[Zone], wagons: &[Wagon], takt_time: u32) -> TaktResult<()> {
        if takt_time == 0 {
            warn!(takt_time = takt_time, "节拍时间无效");
            return Err(TaktError::InvalidTaktTime(takt_time));
        }

        for zone in zones {
            if zone.sequence == 0 {
                warn!(zone_id = %zone.id, "工作区顺序号为 0");
                return Err(TaktError::InvalidSequence {
                    entity: "工作区",
                    id: zone.id.clone(),
                    sequence: zone.sequence,
                });
            }
        }

        for wagon in wagons {
            if wagon.sequence == 0 {
                warn!(wagon_id = %wagon.id, "车厢顺序号为 0");
                return Err(TaktError::InvalidSequence {
                    entity: "车厢",
                    id: wagon.id.clone(),
                    sequence: wagon.sequence,
                });
            }
            if wagon.duration_days == 0 {
                warn!(wagon_id = %wagon.id, "车厢工期为 0");
                return Err(TaktError::InvalidDuration {
                    wagon_id: wagon.id.clone(),
                    duration_days: wagon.duration_days,
                });
            }
        }

        warn_duplicate_sequences("工作区", zones.iter().map(|z| z.sequence));
        warn_duplicate_sequences("车厢", wagons.iter().map(|w| w.sequence));

        Ok(())
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成节拍网格
    ///
    /// # 参数
    /// - `zones`: 工作区 (任意顺序, 内部按 sequence 稳定排序)
    /// - `wagons`: 车厢 (任意顺序, 内部按 sequence 稳定排序)
    /// - `start_date`: 开工日
    /// - `takt_time`: 节拍时间 (天/周期)
    /// - `calendar`: 工作日历
    ///
    /// # 返回
    /// 每个 (工作区, 车厢) 恰好一个任务; 调用方不应依赖任务顺序做正确性判断
    #[instrument(skip(self, zones, wagons, calendar), fields(zones = zones.len(), wagons = wagons.len()))]
    pub fn generate_takt_grid(
        &self,
        zones: &[Zone],
        wagons: &[Wagon],
        start_date: NaiveDate,
        takt_time: u32,
        calendar: &WorkingCalendar,
    ) -> TaktResult<TaktGrid> {
        self.validate_inputs(zones, wagons, takt_time)?;

        // 1. 按 sequence 稳定排序
        let mut sorted_zones = zones.to_vec();
        sorted_zones.sort_by_key(|z| z.sequence);
        let mut sorted_wagons = wagons.to_vec();
        sorted_wagons.sort_by_key(|w| w.sequence);

        // 2. 累计缓冲偏移 (天)
        let buffer_offsets = Self::cumulative_buffer_offsets(&sorted_wagons);

        // 3. 逐对计算日期
        let mut assignments = Vec::with_capacity(sorted_zones.len() * sorted_wagons.len());
        for (zi, zone) in sorted_zones.iter().enumerate() {
            for (wi, wagon) in sorted_wagons.iter().enumerate() {
                let day_offset = Self::day_offset(zone.sequence, wi, buffer_offsets[wi], takt_time)
                    .ok_or_else(|| TaktError::DateOverflow {
                        start: start_date.to_string(),
                        days: u32::MAX,
                    })?;

                let planned_start = calendar.add_working_days(start_date, day_offset)?;
                let planned_end =
                    calendar.add_working_days(planned_start, wagon.duration_days - 1)?;

                assignments.push(Assignment {
                    zone_id: zone.id.clone(),
                    wagon_id: wagon.id.clone(),
                    zone_idx: ZoneIdx(zi),
                    wagon_idx: WagonIdx(wi),
                    period_number: day_offset + 1,
                    planned_start,
                    planned_end,
                });
            }
        }

        info!(
            assignments = assignments.len(),
            takt_time = takt_time,
            start_date = %start_date,
            "节拍网格生成完成"
        );

        Ok(TaktGrid {
            zones: sorted_zones,
            wagons: sorted_wagons,
            assignments,
            start_date,
            takt_time,
            calendar: *calendar,
        })
    }

    /// 累计缓冲偏移: offsets[0] = 0, offsets[i] = offsets[i-1] + wagons[i-1].buffer_after
    ///
    /// `wagons` 须已按 sequence 排序; 结果单调不减
    pub fn cumulative_buffer_offsets(wagons: &[Wagon]) -> Vec<u32> {
        let mut offsets = Vec::with_capacity(wagons.len());
        let mut acc = 0u32;
        for (i, wagon) in wagons.iter().enumerate() {
            offsets.push(acc);
            if i + 1 < wagons.len() {
                acc = acc.saturating_add(wagon.buffer_after);
            }
        }
        offsets
    }

    fn day_offset(zone_sequence: u32, wagon_index: usize, buffer_offset: u32, takt_time: u32) -> Option<u32> {
        let zone_part = u64::from(zone_sequence - 1) * u64::from(takt_time);
        let wagon_part = (wagon_index as u64) * u64::from(takt_time);
        u32::try_from(zone_part + wagon_part + u64::from(buffer_offset)).ok()
    }

    // ==========================================
    // 总跨度 / 完工日
    // ==========================================

    /// 网格总跨度 (天), 仅用于展示与缩放
    ///
    /// (zones + trades - 1) * takt + (trades - 1) * buffer
    ///
    /// 与天偏移公式同口径: 最后一节车厢在最后一个工作区的开工偏移再加一个节拍
    /// 溢出时饱和到 u32::MAX
    pub fn calculate_total_periods(
        num_zones: u32,
        num_trades: u32,
        takt_time: u32,
        buffer_size: u32,
    ) -> u32 {
        if num_zones == 0 || num_trades == 0 {
            return 0;
        }
        let span = num_zones
            .saturating_add(num_trades - 1)
            .saturating_mul(takt_time);
        span.saturating_add((num_trades - 1).saturating_mul(buffer_size))
    }

    /// 计划完工日 = 开工日之后 total_days 个工作日
    pub fn calculate_end_date(
        start_date: NaiveDate,
        total_days: u32,
        calendar: &WorkingCalendar,
    ) -> TaktResult<NaiveDate> {
        let end = calendar.add_working_days(start_date, total_days)?;
        debug!(start_date = %start_date, total_days = total_days, end_date = %end, "计划完工日计算完成");
        Ok(end)
    }
}

impl Default for TaktGridGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn warn_duplicate_sequences(entity: &str, sequences: impl Iterator<Item = u32>) {
    let mut seen = HashSet::new();
    for sequence in sequences {
        if !seen.insert(sequence) {
            warn!(entity = entity, sequence = sequence, "顺序号重复,按输入顺序处理");
        }
    }
}
