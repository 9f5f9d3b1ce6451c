// ==========================================
// 节拍网格生成集成测试
// ==========================================
// 职责: 验证工作日历 + 网格生成器的日期口径
// 场景: 标准装修列车 (4 工种) 穿过多层工作区
// ==========================================

mod helpers;

use chrono::Weekday;
use helpers::test_data_builder::*;
use std::collections::HashSet;
use takt_core::domain::plan::{WagonIdx, ZoneIdx};
use takt_core::engine::calendar::add_working_days;
use takt_core::engine::{TaktError, TaktGridGenerator, WorkingCalendar};

fn working_days_between(
    calendar: &WorkingCalendar,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| calendar.is_working_day(*d))
        .count() as u32
}

// ==========================================
// 网格形状
// ==========================================

#[test]
fn test_grid_has_one_assignment_per_zone_and_wagon() {
    let grid = TaktGridGenerator::new()
        .generate_takt_grid(
            &zones(3),
            &interior_wagons(2, 0),
            monday(),
            2,
            &WorkingCalendar::default(),
        )
        .unwrap();

    assert_eq!(grid.assignments.len(), 12);
    let pairs: HashSet<(&str, &str)> = grid
        .assignments
        .iter()
        .map(|a| (a.zone_id.as_str(), a.wagon_id.as_str()))
        .collect();
    assert_eq!(pairs.len(), 12);

    let a = grid.assignment_at(ZoneIdx(1), WagonIdx(0)).unwrap();
    assert_eq!(a.zone_id, "Z2");
    assert_eq!(a.wagon_id, "W1");
    assert_eq!(grid.zone_assignments(ZoneIdx(2)).len(), 4);
}

#[test]
fn test_input_order_does_not_change_dates() {
    let calendar = WorkingCalendar::default();
    let generator = TaktGridGenerator::new();

    let mut reversed_zones = zones(3);
    reversed_zones.reverse();
    let mut reversed_wagons = interior_wagons(3, 1);
    reversed_wagons.reverse();

    let sorted = generator
        .generate_takt_grid(&zones(3), &interior_wagons(3, 1), monday(), 3, &calendar)
        .unwrap();
    let shuffled = generator
        .generate_takt_grid(&reversed_zones, &reversed_wagons, monday(), 3, &calendar)
        .unwrap();

    assert_eq!(sorted.assignments, shuffled.assignments);
}

// ==========================================
// 日期性质
// ==========================================

#[test]
fn test_dates_fall_on_working_days_and_span_duration() {
    let calendar = WorkingCalendar::default();
    let wagons = interior_wagons(4, 1);
    let grid = TaktGridGenerator::new()
        .generate_takt_grid(&zones(4), &wagons, monday(), 3, &calendar)
        .unwrap();

    for a in &grid.assignments {
        assert!(calendar.is_working_day(a.planned_start), "{:?}", a);
        assert!(calendar.is_working_day(a.planned_end), "{:?}", a);
        assert!(a.planned_end >= a.planned_start);
        assert_eq!(working_days_between(&calendar, a.planned_start, a.planned_end), 4);
    }
}

#[test]
fn test_each_wagon_moves_forward_through_zones() {
    let grid = TaktGridGenerator::new()
        .generate_takt_grid(
            &zones(5),
            &interior_wagons(5, 0),
            monday(),
            5,
            &WorkingCalendar::default(),
        )
        .unwrap();

    for wi in 0..grid.wagons.len() {
        let starts: Vec<_> = (0..grid.zones.len())
            .map(|zi| {
                grid.assignment_at(ZoneIdx(zi), WagonIdx(wi))
                    .unwrap()
                    .planned_start
            })
            .collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    // takt == duration: W1 在 Z2 恰好一周后开工
    let w1_z2 = grid.assignment_at(ZoneIdx(1), WagonIdx(0)).unwrap();
    assert_eq!(w1_z2.planned_start, date(2024, 1, 8));
    assert_eq!(w1_z2.planned_end, date(2024, 1, 12));
    assert_eq!(grid.end_date(), Some(date(2024, 2, 23)));
}

#[test]
fn test_buffer_after_shifts_following_wagons() {
    let wagons = vec![
        WagonBuilder::new("W1", "t-mas", 1).buffer_after(2).build(),
        WagonBuilder::new("W2", "t-mep", 2).build(),
    ];
    let grid = TaktGridGenerator::new()
        .generate_takt_grid(&zones(1), &wagons, monday(), 1, &WorkingCalendar::default())
        .unwrap();

    let w2 = grid.assignment_at(ZoneIdx(0), WagonIdx(1)).unwrap();
    assert_eq!(w2.period_number, 4);
    assert_eq!(w2.planned_start, date(2024, 1, 4));
    assert_eq!(
        TaktGridGenerator::cumulative_buffer_offsets(&grid.wagons),
        vec![0, 2]
    );
}

#[test]
fn test_six_day_calendar_works_saturdays() {
    let friday = date(2024, 1, 5);
    let wagons = vec![WagonBuilder::new("W1", "t-mas", 1).duration(2).build()];

    let five_day = TaktGridGenerator::new()
        .generate_takt_grid(&zones(1), &wagons, friday, 1, &WorkingCalendar::default())
        .unwrap();
    assert_eq!(five_day.assignments[0].planned_end, date(2024, 1, 8));

    let six_day_calendar = WorkingCalendar::from_day_codes(&[1, 2, 3, 4, 5, 6]).unwrap();
    let six_day = TaktGridGenerator::new()
        .generate_takt_grid(&zones(1), &wagons, friday, 1, &six_day_calendar)
        .unwrap();
    assert_eq!(six_day.assignments[0].planned_end, date(2024, 1, 6));
}

#[test]
fn test_add_working_days_free_function() {
    let weekdays = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];
    let friday = date(2024, 1, 5);
    assert_eq!(add_working_days(friday, 0, &weekdays).unwrap(), friday);
    assert_eq!(add_working_days(friday, 1, &weekdays).unwrap(), date(2024, 1, 8));
    assert_eq!(add_working_days(monday(), 10, &weekdays).unwrap(), date(2024, 1, 15));
    assert!(matches!(
        add_working_days(friday, 1, &[]),
        Err(TaktError::InvalidCalendar(_))
    ));
}

// ==========================================
// 总跨度 / 完工日
// ==========================================

#[test]
fn test_total_periods_and_end_date() {
    assert_eq!(TaktGridGenerator::calculate_total_periods(3, 4, 2, 1), 15);
    assert_eq!(TaktGridGenerator::calculate_total_periods(1, 1, 5, 0), 5);
    assert_eq!(TaktGridGenerator::calculate_total_periods(0, 4, 2, 1), 0);
    assert_eq!(TaktGridGenerator::calculate_total_periods(3, 0, 2, 1), 0);

    let end =
        TaktGridGenerator::calculate_end_date(monday(), 10, &WorkingCalendar::default()).unwrap();
    assert_eq!(end, date(2024, 1, 15));
}

// ==========================================
// 非法输入
// ==========================================

#[test]
fn test_invalid_inputs_fail_fast() {
    let generator = TaktGridGenerator::new();
    let calendar = WorkingCalendar::default();

    let bad_zone = vec![ZoneBuilder::new("Z0", 0).build()];
    assert!(matches!(
        generator.generate_takt_grid(&bad_zone, &interior_wagons(1, 0), monday(), 1, &calendar),
        Err(TaktError::InvalidSequence { .. })
    ));

    let bad_wagon = vec![WagonBuilder::new("W1", "t-mas", 1).duration(0).build()];
    assert!(matches!(
        generator.generate_takt_grid(&zones(1), &bad_wagon, monday(), 1, &calendar),
        Err(TaktError::InvalidDuration { .. })
    ));

    assert_eq!(
        WorkingCalendar::from_day_codes(&[1, 7]).unwrap_err(),
        TaktError::InvalidWeekdayCode(7)
    );
    assert!(matches!(
        WorkingCalendar::from_day_codes(&[]),
        Err(TaktError::InvalidCalendar(_))
    ));
}

#[test]
fn test_empty_inputs_give_empty_grid() {
    let grid = TaktGridGenerator::new()
        .generate_takt_grid(&[], &interior_wagons(2, 0), monday(), 2, &WorkingCalendar::default())
        .unwrap();
    assert!(grid.is_empty());
    assert_eq!(grid.end_date(), None);
}
