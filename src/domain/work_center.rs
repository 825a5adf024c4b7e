// ==========================================
// 工单排程重排引擎 - 工作中心领域模型
// ==========================================
// 红线: 工作中心为只读输入,引擎不修改
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::timeline::TimeSlot;
use crate::domain::types::DocType;

// ==========================================
// Shift - 周班次
// ==========================================
// 单个班次不跨午夜; 同一天可声明多个班次
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub day_of_week: u8, // 星期 (0=周日 .. 6=周六)
    pub start_hour: u8,  // 开始小时 (0-23)
    pub end_hour: u8,    // 结束小时 (1-24, 须大于 start_hour)
}

// ==========================================
// MaintenanceWindow - 检修窗口
// ==========================================
// 约束: 同一工作中心的检修窗口两两不重叠 (输入保证, 不再校验)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceWindow {
    pub start_date: DateTime<Utc>, // 起点 (UTC, 含)
    pub end_date: DateTime<Utc>,   // 终点 (UTC, 不含)
    pub reason: Option<String>,    // 检修原因 (可选)
}

impl MaintenanceWindow {
    /// 转为时间轴占用段
    pub fn to_slot(&self) -> TimeSlot {
        TimeSlot {
            start: self.start_date,
            end: self.end_date,
            reason: self.reason.clone(),
        }
    }
}

// ==========================================
// WorkCenterData - 工作中心数据载荷
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCenterData {
    pub name: String, // 工作中心名称

    // 周班次表 (按输入顺序保留)
    #[serde(default)]
    pub shifts: Vec<Shift>,

    // 检修窗口列表
    #[serde(default)]
    pub maintenance_windows: Vec<MaintenanceWindow>,
}

// ==========================================
// WorkCenter - 工作中心文档
// ==========================================
// 容量约束: 同一时刻最多承载一个工单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCenter {
    pub doc_id: String,    // 文档ID
    pub doc_type: DocType, // 固定为 workCenter
    pub data: WorkCenterData,
}
