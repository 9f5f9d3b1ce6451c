// ==========================================
// 节拍排程核心 - 前置工序违反检测
// ==========================================
// 职责: 同一工作区内, 工种在其前置工种完工前开工
// 规则: start < predecessor_end 即违反 (同日交接不算)
//       overlap_days = ceil((predecessor_end - start) / 1 天)
// 引用缺失: 前置代码在本节拍列车中无车厢 -> 跳过, 记入诊断
// 多个前置工种可在同一工作区产生多条违反, 不去重
// ==========================================

use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

use super::grid::TaktGrid;
use crate::domain::conflict::{PredecessorViolation, SkippedPredecessor};
use crate::domain::plan::{TradeInfo, WagonIdx, ZoneIdx};
use crate::domain::types::SkipReason;

// ==========================================
// PredecessorReport - 检测结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PredecessorReport {
    pub violations: Vec<PredecessorViolation>,
    pub skipped: Vec<SkippedPredecessor>,
}

/// 已解析的前置关系: 车厢 -> 前置车厢
struct PredecessorLink {
    wagon: WagonIdx,
    trade: usize,
    predecessor_wagon: WagonIdx,
    predecessor_trade: usize,
    predecessor_code: String,
}

// ==========================================
// PredecessorDetector - 前置工序检测器
// ==========================================
pub struct PredecessorDetector {}

impl PredecessorDetector {
    pub fn new() -> Self {
        Self {}
    }

    /// 检测前置工序违反
    ///
    /// # 参数
    /// - `grid`: 节拍网格 (含排序后的工作区、车厢与任务)
    /// - `trades`: 工种目录, 显式传入
    ///
    /// # 返回
    /// 违反列表 + 被跳过的引用
    #[instrument(skip(self, grid, trades), fields(assignments = grid.assignments.len(), trades = trades.len()))]
    pub fn detect_predecessor_violations(
        &self,
        grid: &TaktGrid,
        trades: &[TradeInfo],
    ) -> PredecessorReport {
        let mut report = PredecessorReport::default();

        // 1. 车厢 -> 工种 (索引数组)
        let trade_by_id: HashMap<&str, usize> = trades
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();

        let mut wagon_trade: Vec<Option<usize>> = Vec::with_capacity(grid.wagons.len());
        for wagon in &grid.wagons {
            let trade = trade_by_id.get(wagon.trade_id.as_str()).copied();
            if trade.is_none() {
                debug!(wagon_id = %wagon.id, trade_id = %wagon.trade_id, "车厢工种不在目录中,跳过");
                report.skipped.push(SkippedPredecessor {
                    trade_id: wagon.trade_id.clone(),
                    predecessor_code: None,
                    reason: SkipReason::TradeNotInCatalogue,
                });
            }
            wagon_trade.push(trade);
        }

        // 2. 工种代码 -> 车厢 (每个工种在计划中应只出现一次)
        let mut wagon_by_code: HashMap<&str, WagonIdx> = HashMap::new();
        for (wi, trade) in wagon_trade.iter().enumerate() {
            let Some(trade) = trade else { continue };
            let code = trades[*trade].code.as_str();
            if wagon_by_code.contains_key(code) {
                warn!(trade_code = %code, wagon_id = %grid.wagons[wi].id, "工种在计划中重复出现,只取第一节车厢");
                report.skipped.push(SkippedPredecessor {
                    trade_id: trades[*trade].id.clone(),
                    predecessor_code: None,
                    reason: SkipReason::DuplicateTradeCode,
                });
                continue;
            }
            wagon_by_code.insert(code, WagonIdx(wi));
        }

        // 3. 解析前置关系 (每对只解析一次, 与工作区无关)
        let mut links = Vec::new();
        for (wi, trade) in wagon_trade.iter().enumerate() {
            let Some(trade) = *trade else { continue };
            for code in &trades[trade].predecessor_codes {
                match wagon_by_code.get(code.as_str()) {
                    Some(&predecessor_wagon) => {
                        if let Some(predecessor_trade) = wagon_trade[predecessor_wagon.0] {
                            links.push(PredecessorLink {
                                wagon: WagonIdx(wi),
                                trade,
                                predecessor_wagon,
                                predecessor_trade,
                                predecessor_code: code.clone(),
                            });
                        }
                    }
                    None => {
                        debug!(
                            trade_code = %trades[trade].code,
                            predecessor_code = %code,
                            "前置工种不在本节拍列车中,跳过"
                        );
                        report.skipped.push(SkippedPredecessor {
                            trade_id: trades[trade].id.clone(),
                            predecessor_code: Some(code.clone()),
                            reason: SkipReason::PredecessorNotInPlan,
                        });
                    }
                }
            }
        }

        // 4. 逐工作区比较
        for zi in 0..grid.zones.len() {
            let zone = ZoneIdx(zi);
            for link in &links {
                let (Some(assignment), Some(predecessor)) = (
                    grid.assignment_at(zone, link.wagon),
                    grid.assignment_at(zone, link.predecessor_wagon),
                ) else {
                    continue;
                };

                if assignment.planned_start >= predecessor.planned_end {
                    continue;
                }

                let trade = &trades[link.trade];
                let predecessor_trade = &trades[link.predecessor_trade];
                let overlap_days = (predecessor.planned_end - assignment.planned_start).num_days();

                warn!(
                    zone_id = %assignment.zone_id,
                    trade_code = %trade.code,
                    predecessor_code = %link.predecessor_code,
                    overlap_days = overlap_days,
                    "检测到前置工序违反"
                );

                report.violations.push(PredecessorViolation {
                    zone_id: assignment.zone_id.clone(),
                    trade_id: trade.id.clone(),
                    trade_code: trade.code.clone(),
                    trade_name: trade.name.clone(),
                    predecessor_code: link.predecessor_code.clone(),
                    predecessor_name: predecessor_trade.name.clone(),
                    start_date: assignment.planned_start,
                    predecessor_end_date: predecessor.planned_end,
                    overlap_days,
                });
            }
        }

        info!(
            violations = report.violations.len(),
            skipped = report.skipped.len(),
            "前置工序检测完成"
        );

        report
    }
}

impl Default for PredecessorDetector {
    fn default() -> Self {
        Self::new()
    }
}
