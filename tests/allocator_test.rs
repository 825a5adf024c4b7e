// ==========================================
// WorkingTimeAllocator 引擎集成测试
// ==========================================
// 测试目标: 验证工作分钟分配逻辑
// 覆盖范围: 单窗口命中、跨班次停顿、占用段避让、零时长、视野失败
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use workorder_reflow::domain::timeline::TimeSlot;
use workorder_reflow::domain::work_center::Shift;
use workorder_reflow::engine::{ReflowError, ShiftCalendar, WorkingTimeAllocator};

/// 构造 UTC 时刻 (分钟精度)
fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// 周一至周五 08:00-17:00 的班次日历
fn weekday_calendar() -> ShiftCalendar {
    let shifts: Vec<Shift> = (1..=5)
        .map(|d| Shift {
            day_of_week: d,
            start_hour: 8,
            end_hour: 17,
        })
        .collect();
    ShiftCalendar::new(&shifts)
}

#[test]
fn test_allocate_fits_in_single_window() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();

    // 2026-03-02 是周一; 360 分钟在一个班次内完成
    let span = allocator
        .allocate(ts(2026, 3, 2, 8, 0), 360, &calendar, &[], 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 2, 8, 0), "应从班次起点开工");
    assert_eq!(span.end, ts(2026, 3, 2, 14, 0), "360 分钟应于 14:00 完成");
}

#[test]
fn test_allocate_clamps_to_shift_start() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();

    // 游标早于班次: 收拢到 08:00 开工
    let span = allocator
        .allocate(ts(2026, 3, 2, 5, 30), 60, &calendar, &[], 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 2, 8, 0));
    assert_eq!(span.end, ts(2026, 3, 2, 9, 0));
}

#[test]
fn test_allocate_spans_shift_boundary() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();

    // 16:00 起 120 分钟: 当日 60 分钟 + 次日 08:00 起 60 分钟
    let span = allocator
        .allocate(ts(2026, 3, 2, 16, 0), 120, &calendar, &[], 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 2, 16, 0));
    assert_eq!(span.end, ts(2026, 3, 3, 9, 0), "跨班次停顿应计入跨度");
}

#[test]
fn test_allocate_spans_weekend() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();

    // 2026-03-06 是周五; 16:00 起 120 分钟跨周末, 下周一 09:00 完成
    let span = allocator
        .allocate(ts(2026, 3, 6, 16, 0), 120, &calendar, &[], 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 6, 16, 0));
    assert_eq!(span.end, ts(2026, 3, 9, 9, 0));
}

#[test]
fn test_allocate_pauses_over_block() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();
    let blocked = vec![TimeSlot::new(ts(2026, 3, 2, 10, 0), ts(2026, 3, 2, 13, 0))];

    // 09:30 起 180 分钟: 09:30-10:00 工作 30 分钟, 停顿至 13:00, 再工作 150 分钟
    let span = allocator
        .allocate(ts(2026, 3, 2, 9, 30), 180, &calendar, &blocked, 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 2, 9, 30));
    assert_eq!(span.end, ts(2026, 3, 2, 15, 30), "停顿不消耗工作分钟");
}

#[test]
fn test_allocate_start_pushed_out_of_block() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();
    let blocked = vec![TimeSlot::new(ts(2026, 3, 2, 8, 0), ts(2026, 3, 2, 9, 30))];

    // 游标落在占用段内: 开工点推到段尾
    let span = allocator
        .allocate(ts(2026, 3, 2, 8, 30), 60, &calendar, &blocked, 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 2, 9, 30));
    assert_eq!(span.end, ts(2026, 3, 2, 10, 30));
}

#[test]
fn test_allocate_block_at_shift_start() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();
    // 占用段压住班次起点
    let blocked = vec![TimeSlot::new(ts(2026, 3, 2, 7, 0), ts(2026, 3, 2, 10, 0))];

    let span = allocator
        .allocate(ts(2026, 3, 2, 6, 0), 60, &calendar, &blocked, 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 2, 10, 0), "收拢到班次起点后仍须越障");
    assert_eq!(span.end, ts(2026, 3, 2, 11, 0));
}

#[test]
fn test_allocate_completion_at_block_start_keeps_end() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();
    let blocked = vec![TimeSlot::new(ts(2026, 3, 2, 10, 0), ts(2026, 3, 2, 12, 0))];

    // 最后一个工作分钟恰在占用段起点完成: 终点保持 10:00, 不被推到段尾
    let span = allocator
        .allocate(ts(2026, 3, 2, 8, 0), 120, &calendar, &blocked, 14)
        .unwrap();

    assert_eq!(span.end, ts(2026, 3, 2, 10, 0));
}

#[test]
fn test_allocate_zero_duration_returns_pushed_cursor() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();
    let blocked = vec![TimeSlot::new(ts(2026, 3, 2, 8, 0), ts(2026, 3, 2, 9, 0))];

    // 零时长: 起止同为越障后的游标, 不进入寻位循环
    let span = allocator
        .allocate(ts(2026, 3, 2, 8, 30), 0, &calendar, &blocked, 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 2, 9, 0));
    assert_eq!(span.end, ts(2026, 3, 2, 9, 0));
}

#[test]
fn test_allocate_zero_duration_outside_blocks_unchanged() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();

    // 零时长且不在占用段内: 原样返回, 即使落在班次之外
    let span = allocator
        .allocate(ts(2026, 3, 1, 6, 0), 0, &calendar, &[], 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 1, 6, 0));
    assert_eq!(span.end, ts(2026, 3, 1, 6, 0));
}

#[test]
fn test_allocate_no_shifts_fails_in_horizon() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = ShiftCalendar::new(&[]);

    let err = allocator
        .allocate(ts(2026, 3, 2, 8, 0), 60, &calendar, &[], 14)
        .unwrap_err();

    assert!(matches!(err, ReflowError::NoShiftWindowInHorizon { .. }));
}

#[test]
fn test_allocate_overlapping_blocks_chain() {
    let allocator = WorkingTimeAllocator::new();
    let calendar = weekday_calendar();
    // 重叠的占用段 (检修窗口与钉住的检修工单允许重叠)
    let blocked = vec![
        TimeSlot::new(ts(2026, 3, 2, 9, 0), ts(2026, 3, 2, 11, 0)),
        TimeSlot::new(ts(2026, 3, 2, 10, 0), ts(2026, 3, 2, 12, 0)),
    ];

    let span = allocator
        .allocate(ts(2026, 3, 2, 9, 30), 60, &calendar, &blocked, 14)
        .unwrap();

    assert_eq!(span.start, ts(2026, 3, 2, 12, 0), "应穿过整条重叠链");
    assert_eq!(span.end, ts(2026, 3, 2, 13, 0));
}
