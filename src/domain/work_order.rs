// ==========================================
// 工单排程重排引擎 - 工单领域模型
// ==========================================
// 红线: 检修工单不可移动, 输入起止即输出起止
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::timeline::TimeSlot;
use crate::domain::types::DocType;

// ==========================================
// WorkOrderData - 工单数据载荷
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderData {
    pub work_order_number: String,             // 工单号 (展示用)
    pub manufacturing_order_id: Option<String>, // 制造订单标签 (透传, 引擎不消费)
    pub work_center_id: String,                // 所属工作中心ID
    pub start_date: DateTime<Utc>,             // 计划开始 (UTC)
    pub end_date: DateTime<Utc>,               // 计划结束 (UTC, 不含)
    pub duration_minutes: i64,                 // 作业时长 (工作分钟, >= 0)

    // 准备时长 (工作分钟, 计入总时长)
    #[serde(default)]
    pub setup_time_minutes: Option<i64>,

    // 检修工单标志: 不可移动, 并占用其工作中心容量
    #[serde(default)]
    pub is_maintenance: bool,

    // 依赖的工单ID (可跨工作中心)
    #[serde(default)]
    pub depends_on_work_order_ids: Vec<String>,
}

impl WorkOrderData {
    /// 总工作时长（分钟）= 作业时长 + 准备时长
    pub fn total_minutes(&self) -> i64 {
        self.duration_minutes + self.setup_time_minutes.unwrap_or(0)
    }
}

// ==========================================
// WorkOrder - 工单文档
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub doc_id: String,    // 文档ID
    pub doc_type: DocType, // 固定为 workOrder
    pub data: WorkOrderData,
}

impl WorkOrder {
    /// 当前排程区间对应的时间轴占用段
    pub fn to_slot(&self) -> TimeSlot {
        TimeSlot::with_reason(
            self.data.start_date,
            self.data.end_date,
            self.data.work_order_number.clone(),
        )
    }
}
