// ==========================================
// 节拍排程核心 - 工种叠加检测
// ==========================================
// 职责: 同一工作区内不同车厢的日期区间重叠检测
// 规则: 闭区间重叠 a1.start <= a2.end && a2.start <= a1.end
//       一方完工当天另一方开工同样视为冲突 (工作面无交接间隙)
// 复杂度: 每个工作区 O(k²), k = 车厢数
// ==========================================

use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use crate::domain::conflict::TradeStackingConflict;
use crate::domain::plan::Assignment;

// ==========================================
// TradeStackingDetector - 工种叠加检测器
// ==========================================
pub struct TradeStackingDetector {}

impl TradeStackingDetector {
    pub fn new() -> Self {
        Self {}
    }

    /// 检测工种叠加
    ///
    /// # 参数
    /// - `assignments`: 节拍任务 (顺序不限, 按 zone_id 分桶; 可来自持久化层, 不依赖索引句柄)
    ///
    /// # 返回
    /// 每个无序冲突对只报告一次
    #[instrument(skip(self, assignments), fields(count = assignments.len()))]
    pub fn detect_trade_stacking(&self, assignments: &[Assignment]) -> Vec<TradeStackingConflict> {
        // 1. 按 zone_id 分桶 (桶按首次出现排序, 桶内保持输入顺序)
        let mut bucket_by_zone: HashMap<&str, usize> = HashMap::new();
        let mut buckets: Vec<Vec<&Assignment>> = Vec::new();
        for assignment in assignments {
            let slot = *bucket_by_zone
                .entry(assignment.zone_id.as_str())
                .or_insert_with(|| {
                    buckets.push(Vec::new());
                    buckets.len() - 1
                });
            buckets[slot].push(assignment);
        }

        // 2. 桶内两两比较
        let mut conflicts = Vec::new();
        for bucket in &buckets {
            for (i, a1) in bucket.iter().enumerate() {
                for a2 in &bucket[i + 1..] {
                    if a1.wagon_id == a2.wagon_id || !a1.overlaps(a2) {
                        continue;
                    }

                    let conflict = TradeStackingConflict {
                        zone_id: a1.zone_id.clone(),
                        wagon_1: a1.wagon_id.clone(),
                        wagon_2: a2.wagon_id.clone(),
                        period_1: a1.period_number,
                        period_2: a2.period_number,
                        overlap_start: a1.planned_start.max(a2.planned_start),
                        overlap_end: a1.planned_end.min(a2.planned_end),
                    };

                    warn!(
                        zone_id = %conflict.zone_id,
                        wagon_1 = %conflict.wagon_1,
                        wagon_2 = %conflict.wagon_2,
                        overlap_start = %conflict.overlap_start,
                        overlap_end = %conflict.overlap_end,
                        "检测到工种叠加"
                    );
                    conflicts.push(conflict);
                }
            }
        }

        debug!(conflicts = conflicts.len(), "工种叠加检测完成");
        conflicts
    }
}

impl Default for TradeStackingDetector {
    fn default() -> Self {
        Self::new()
    }
}
