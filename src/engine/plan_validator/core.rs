use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use super::constraints::ConstraintSynthesizer;
use crate::config::TaktConfig;
use crate::domain::conflict::PlanWarnings;
use crate::domain::plan::{TradeInfo, Wagon, Zone};
use crate::engine::buffer::BufferWarningDetector;
use crate::engine::calendar::WorkingCalendar;
use crate::engine::error::TaktResult;
use crate::engine::grid::{TaktGrid, TaktGridGenerator};
use crate::engine::predecessor::PredecessorDetector;
use crate::engine::stacking::TradeStackingDetector;

// ==========================================
// PlanValidator - 计划校验引擎
// ==========================================
// 无状态: 仅持有配置, 每次校验从输入重新计算
pub struct PlanValidator {
    config: TaktConfig,
}

impl PlanValidator {
    pub fn new(config: TaktConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TaktConfig {
        &self.config
    }

    /// 生成网格并运行全部检测
    ///
    /// # 参数
    /// - `zones` / `wagons`: 任意顺序, 内部按 sequence 排序
    /// - `start_date`: 开工日
    /// - `takt_time`: 节拍时间 (天)
    /// - `trades`: 工种目录
    /// - `calendar`: 工作日历; 优先于配置中的 working_days
    ///
    /// # 返回
    /// - `Err`: 输入非法 (节拍/序号/工期) 或日期溢出
    /// - `Ok(PlanWarnings)`: 无工作区时仅可能出现缓冲告警
    #[instrument(skip_all, fields(zones = zones.len(), wagons = wagons.len(), takt_time = takt_time))]
    pub fn validate_plan(
        &self,
        zones: &[Zone],
        wagons: &[Wagon],
        start_date: NaiveDate,
        takt_time: u32,
        trades: &[TradeInfo],
        calendar: &WorkingCalendar,
    ) -> TaktResult<PlanWarnings> {
        let grid = TaktGridGenerator::new().generate_takt_grid(
            zones, wagons, start_date, takt_time, calendar,
        )?;
        Ok(self.validate_grid(&grid, trades))
    }

    /// 使用配置中的工作日历生成网格并校验
    pub fn validate_plan_with_config_calendar(
        &self,
        zones: &[Zone],
        wagons: &[Wagon],
        start_date: NaiveDate,
        takt_time: u32,
        trades: &[TradeInfo],
    ) -> TaktResult<PlanWarnings> {
        let calendar = self.config.calendar();
        self.validate_plan(zones, wagons, start_date, takt_time, trades, &calendar)
    }

    /// 在已生成的网格上运行全部检测
    ///
    /// 三类检测共用同一网格, 日期口径一致
    pub fn validate_grid(&self, grid: &TaktGrid, trades: &[TradeInfo]) -> PlanWarnings {
        // 缓冲检测只依赖车厢与节拍, 工作区为空时照常执行
        if grid.is_empty() {
            debug!(wagons = grid.wagons.len(), "网格无任务,仅检测缓冲");
        }

        // 1. 工种叠加
        let trade_stacking = TradeStackingDetector::new().detect_trade_stacking(&grid.assignments);

        // 2. 前置工序
        let predecessor_report = PredecessorDetector::new().detect_predecessor_violations(grid, trades);

        // 3. 缓冲
        let buffer_detector = BufferWarningDetector::with_thresholds(
            self.config.short_takt_threshold_days,
            self.config.recommended_buffer_days,
        );
        let buffer_warnings =
            buffer_detector.detect_buffer_warnings(&grid.wagons, trades, grid.takt_time);

        // 4. 约束合成
        let synthesizer = ConstraintSynthesizer::new(&self.config.locale, grid, trades);
        let mut auto_constraints: Vec<_> = trade_stacking
            .iter()
            .map(|c| synthesizer.from_stacking(c))
            .collect();
        auto_constraints.extend(
            predecessor_report
                .violations
                .iter()
                .map(|v| synthesizer.from_predecessor(v)),
        );
        if self.config.emit_buffer_constraints {
            auto_constraints.extend(
                buffer_warnings
                    .iter()
                    .map(|w| synthesizer.from_buffer(w, grid.takt_time)),
            );
        }

        let warnings = PlanWarnings {
            trade_stacking,
            predecessor_violations: predecessor_report.violations,
            buffer_warnings,
            auto_constraints,
            skipped_predecessors: predecessor_report.skipped,
        };

        if warnings.has_critical() {
            warn!(
                stacking = warnings.trade_stacking.len(),
                predecessor = warnings.predecessor_violations.len(),
                "计划存在严重冲突"
            );
        }
        info!(
            stacking = warnings.trade_stacking.len(),
            predecessor = warnings.predecessor_violations.len(),
            buffer = warnings.buffer_warnings.len(),
            constraints = warnings.auto_constraints.len(),
            skipped = warnings.skipped_predecessors.len(),
            "计划校验完成"
        );

        warnings
    }
}

impl Default for PlanValidator {
    fn default() -> Self {
        Self::new(TaktConfig::default())
    }
}
