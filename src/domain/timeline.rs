// ==========================================
// 工单排程重排引擎 - 时间轴原语
// ==========================================
// 职责: 半开区间 [start, end) 及其谓词、排序、越障
// 红线: 全部时间运算以整分钟进行,不做浮点日期差
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// TimeSlot - 时间段
// ==========================================
// 半开区间 [start, end): 含起点,不含终点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,   // 起点 (含)
    pub end: DateTime<Utc>,     // 终点 (不含)
    pub reason: Option<String>, // 占用原因 (可选, 用于可解释性)
}

impl TimeSlot {
    /// 创建时间段
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            reason: None,
        }
    }

    /// 创建带占用原因的时间段
    pub fn with_reason(start: DateTime<Utc>, end: DateTime<Utc>, reason: impl Into<String>) -> Self {
        Self {
            start,
            end,
            reason: Some(reason.into()),
        }
    }

    /// 时间段长度（分钟）
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// 判断时刻是否落在本时间段内
    #[inline]
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t < self.end
    }

    /// 判断两个时间段是否重叠（严格半开判定）
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// 按起点升序排序（原地，起点相同时次序不保证）
pub fn sort_by_start(slots: &mut [TimeSlot]) {
    slots.sort_by_key(|s| s.start);
}

/// 将时刻推出所有包含它的占用段
///
/// # 参数
/// - `t`: 待检查的时刻
/// - `blocked`: 占用段集合（须已按起点升序）
///
/// # 返回
/// 不落在任何占用段内的最早时刻。对已排序的集合单次正向扫描即可：
/// 游标每次被推到包含它的占用段终点，后续占用段起点不早于当前段，
/// 因此重叠链也能在一趟扫描内走完。
pub fn push_out_of_blocked(t: DateTime<Utc>, blocked: &[TimeSlot]) -> DateTime<Utc> {
    let mut cursor = t;
    for slot in blocked {
        if slot.contains(cursor) {
            cursor = slot.end;
        }
    }
    cursor
}
