// ==========================================
// 工单排程重排引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、时间轴原语
// 红线: 不含引擎逻辑,不含排程规则
// ==========================================

pub mod timeline;
pub mod types;
pub mod work_center;
pub mod work_order;

// 重导出核心类型
pub use timeline::{push_out_of_blocked, sort_by_start, TimeSlot};
pub use types::DocType;
pub use work_center::{MaintenanceWindow, Shift, WorkCenter, WorkCenterData};
pub use work_order::{WorkOrder, WorkOrderData};
