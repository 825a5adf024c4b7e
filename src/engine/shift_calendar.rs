// ==========================================
// 工单排程重排引擎 - 班次日历
// ==========================================
// 职责: 将周班次表落到具体日历日, 解析游标之后的下一个可用班次窗口
// 红线: 星期索引以周日为 0 (weekday mod 7)
// ==========================================

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::domain::timeline::TimeSlot;
use crate::domain::work_center::Shift;
use crate::engine::error::ReflowError;

// ==========================================
// ShiftCalendar - 班次日历
// ==========================================
pub struct ShiftCalendar {
    shifts: Vec<Shift>, // 周班次表 (输入顺序)
}

impl ShiftCalendar {
    /// 由工作中心的周班次表构建日历
    pub fn new(shifts: &[Shift]) -> Self {
        Self {
            shifts: shifts.to_vec(),
        }
    }

    /// 某日历日的班次窗口（按起点升序）
    ///
    /// # 参数
    /// - `day`: 日历日 (UTC)
    ///
    /// # 返回
    /// 该日所有班次实例化后的时间段; 该日无班次时为空
    pub fn windows_for_day(&self, day: NaiveDate) -> Vec<TimeSlot> {
        // 周日=0 .. 周六=6
        let day_index = day.weekday().num_days_from_sunday() as u8;
        let midnight = day.and_time(NaiveTime::MIN).and_utc();

        let mut windows: Vec<TimeSlot> = self
            .shifts
            .iter()
            .filter(|s| s.day_of_week == day_index)
            .map(|s| {
                // end_hour=24 时终点为次日零点
                TimeSlot::new(
                    midnight + Duration::hours(s.start_hour as i64),
                    midnight + Duration::hours(s.end_hour as i64),
                )
            })
            .collect();
        windows.sort_by_key(|w| w.start);
        windows
    }

    /// 解析游标之后的下一个可用班次窗口
    ///
    /// # 参数
    /// - `cursor`: 游标时刻
    /// - `horizon_days`: 搜索视野（天）
    ///
    /// # 返回
    /// - 游标当日: 首个终点晚于游标的班次, 窗口起点收拢为 max(游标, 班次起点)
    /// - 其后各日: 首个有班次的日子里最早的完整班次窗口
    /// - 视野内连续无命中: `NoShiftWindowInHorizon`
    pub fn next_window(
        &self,
        cursor: DateTime<Utc>,
        horizon_days: i64,
    ) -> Result<TimeSlot, ReflowError> {
        let cursor_day = cursor.date_naive();

        for offset in 0..horizon_days {
            let day = cursor_day + Duration::days(offset);
            let windows = self.windows_for_day(day);

            if offset == 0 {
                // 当日: 找首个尚未结束的班次
                for w in windows {
                    if w.end > cursor {
                        return Ok(TimeSlot::new(w.start.max(cursor), w.end));
                    }
                }
            } else if let Some(first) = windows.into_iter().next() {
                return Ok(first);
            }
        }

        tracing::debug!(
            cursor = %cursor,
            horizon_days = horizon_days,
            "班次窗口搜索越过视野上限"
        );
        Err(ReflowError::NoShiftWindowInHorizon {
            cursor,
            horizon_days,
        })
    }
}
