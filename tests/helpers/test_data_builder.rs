// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use takt_core::domain::plan::{TradeInfo, Wagon, Zone};

/// 2024-01-01 (周一)
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// Zone 构建器
// ==========================================

pub struct ZoneBuilder {
    id: String,
    name: Option<String>,
    sequence: u32,
    area_sqm: Option<f64>,
}

impl ZoneBuilder {
    pub fn new(id: &str, sequence: u32) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            sequence,
            area_sqm: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn area(mut self, area_sqm: f64) -> Self {
        self.area_sqm = Some(area_sqm);
        self
    }

    pub fn build(self) -> Zone {
        Zone {
            name: self.name.unwrap_or_else(|| format!("{}层", self.sequence)),
            id: self.id,
            sequence: self.sequence,
            area_sqm: self.area_sqm,
        }
    }
}

/// 按序号 1..=count 生成工作区 Z1, Z2, ...
pub fn zones(count: u32) -> Vec<Zone> {
    (1..=count)
        .map(|i| ZoneBuilder::new(&format!("Z{}", i), i).build())
        .collect()
}

// ==========================================
// Wagon 构建器
// ==========================================

pub struct WagonBuilder {
    id: String,
    trade_id: String,
    sequence: u32,
    duration_days: u32,
    buffer_after: u32,
}

impl WagonBuilder {
    pub fn new(id: &str, trade_id: &str, sequence: u32) -> Self {
        Self {
            id: id.to_string(),
            trade_id: trade_id.to_string(),
            sequence,
            duration_days: 1,
            buffer_after: 0,
        }
    }

    pub fn duration(mut self, days: u32) -> Self {
        self.duration_days = days;
        self
    }

    pub fn buffer_after(mut self, days: u32) -> Self {
        self.buffer_after = days;
        self
    }

    pub fn build(self) -> Wagon {
        Wagon::new(
            self.id,
            self.trade_id,
            self.sequence,
            self.duration_days,
            self.buffer_after,
        )
    }
}

// ==========================================
// TradeInfo 构建器
// ==========================================

pub struct TradeBuilder {
    id: String,
    code: String,
    name: String,
    sort_order: i32,
    predecessor_codes: Vec<String>,
}

impl TradeBuilder {
    pub fn new(id: &str, code: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            sort_order: 0,
            predecessor_codes: Vec::new(),
        }
    }

    pub fn sort_order(mut self, order: i32) -> Self {
        self.sort_order = order;
        self
    }

    pub fn after(mut self, code: &str) -> Self {
        self.predecessor_codes.push(code.to_string());
        self
    }

    pub fn build(self) -> TradeInfo {
        TradeInfo {
            id: self.id,
            code: self.code,
            name: self.name,
            sort_order: self.sort_order,
            predecessor_codes: self.predecessor_codes,
        }
    }
}

/// 典型室内装修工序: 砌筑 -> 水电 -> 抹灰 -> 涂料
pub fn interior_trades() -> Vec<TradeInfo> {
    vec![
        TradeBuilder::new("t-mas", "MAS", "Masonry").sort_order(1).build(),
        TradeBuilder::new("t-mep", "MEP", "MEP rough-in")
            .sort_order(2)
            .after("MAS")
            .build(),
        TradeBuilder::new("t-pla", "PLA", "Plaster")
            .sort_order(3)
            .after("MEP")
            .build(),
        TradeBuilder::new("t-pai", "PAI", "Paint")
            .sort_order(4)
            .after("PLA")
            .build(),
    ]
}

/// 与 interior_trades 对应的车厢, 工期均为 duration
pub fn interior_wagons(duration: u32, buffer_after: u32) -> Vec<Wagon> {
    ["t-mas", "t-mep", "t-pla", "t-pai"]
        .iter()
        .enumerate()
        .map(|(i, trade)| {
            WagonBuilder::new(&format!("W{}", i + 1), trade, i as u32 + 1)
                .duration(duration)
                .buffer_after(buffer_after)
                .build()
        })
        .collect()
}
