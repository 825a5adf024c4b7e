// ==========================================
// 工单排程重排引擎 - 工作分钟分配器
// ==========================================
// 职责: 在班次窗口并集减去占用段的可用时间里消耗指定工作分钟
// 输入: 起始游标 + 所需分钟 + 班次日历 + 占用段集合 (已按起点排序)
// 输出: 单一跨度 [start, end) —— 跨度内部可能包含停顿
// 红线: start 为首个实际开工时刻, end 为最后一个工作分钟完成的时刻
// ==========================================

use chrono::{DateTime, Duration, Utc};
use tracing::instrument;

use crate::domain::timeline::{push_out_of_blocked, TimeSlot};
use crate::engine::error::ReflowError;
use crate::engine::shift_calendar::ShiftCalendar;

// ==========================================
// AllocatedSpan - 分配结果跨度
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatedSpan {
    pub start: DateTime<Utc>, // 首个开工时刻
    pub end: DateTime<Utc>,   // 最后一个工作分钟完成的时刻
}

// ==========================================
// WorkingTimeAllocator - 工作分钟分配器
// ==========================================
pub struct WorkingTimeAllocator {
    // 无状态引擎，不需要注入依赖
}

impl WorkingTimeAllocator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 从游标起分配指定数量的工作分钟
    ///
    /// 规则：
    /// 1) 工作分钟只能在班次窗口内、且避开占用段消耗
    /// 2) 跨班次/跨占用段时工作停顿, 跨度照常拉长
    /// 3) 所需分钟为 0 时不进入寻位循环, 起止同为越障后的游标
    ///
    /// # 参数
    /// - `start`: 起始游标 (不早于此时刻开工)
    /// - `duration_minutes`: 所需工作分钟
    /// - `calendar`: 班次日历
    /// - `blocked`: 占用段集合 (须已按起点升序)
    /// - `horizon_days`: 班次窗口搜索视野（天）
    ///
    /// # 返回
    /// - `Ok(AllocatedSpan)`: 分配结果
    /// - `Err(NoShiftWindowInHorizon)`: 视野内无可用班次
    #[instrument(skip(self, calendar, blocked), fields(blocked_count = blocked.len()))]
    pub fn allocate(
        &self,
        start: DateTime<Utc>,
        duration_minutes: i64,
        calendar: &ShiftCalendar,
        blocked: &[TimeSlot],
        horizon_days: i64,
    ) -> Result<AllocatedSpan, ReflowError> {
        let mut cursor = push_out_of_blocked(start, blocked);
        let mut remaining = duration_minutes;
        let mut scheduled_start: Option<DateTime<Utc>> = None;
        let mut scheduled_end = cursor;

        while remaining > 0 {
            // 解析下一个班次窗口
            let window = calendar.next_window(cursor, horizon_days)?;

            // 游标收拢到窗口起点, 越障后再收拢一次
            if cursor < window.start {
                cursor = window.start;
            }
            cursor = push_out_of_blocked(cursor, blocked);
            if cursor < window.start {
                cursor = window.start;
            }

            // 窗口已耗尽: 越过终点重新找窗口
            if cursor >= window.end {
                cursor = window.end + Duration::minutes(1);
                continue;
            }

            if scheduled_start.is_none() {
                scheduled_start = Some(cursor);
            }

            // 游标之后最早落入本窗口的占用段决定本段可用区间
            let next_block = blocked
                .iter()
                .find(|b| b.end > cursor && b.start < window.end);
            let free_end = match next_block {
                Some(b) if b.start > cursor => window.end.min(b.start),
                _ => window.end,
            };

            // 可用区间为空: 占用段压住游标时跳到段尾, 否则越过本窗口
            if free_end <= cursor {
                match next_block {
                    Some(b) if b.start <= cursor => cursor = b.end,
                    _ => cursor = window.end + Duration::minutes(1),
                }
                continue;
            }

            let free = (free_end - cursor).num_minutes();
            if free <= 0 {
                cursor = free_end;
                continue;
            }

            // 消耗本段可用分钟
            let used = remaining.min(free);
            remaining -= used;
            cursor = cursor + Duration::minutes(used);
            scheduled_end = cursor;
            // 为下一轮寻位预先越障; 已完成分钟的终点不随之移动
            cursor = push_out_of_blocked(cursor, blocked);
        }

        Ok(AllocatedSpan {
            start: scheduled_start.unwrap_or(scheduled_end),
            end: scheduled_end,
        })
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for WorkingTimeAllocator {
    fn default() -> Self {
        Self::new()
    }
}
