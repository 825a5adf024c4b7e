// ==========================================
// 工单排程重排引擎 - 核心库
// ==========================================
// 技术栈: Rust + chrono + serde
// 系统定位: 确定性重排引擎 (无优化目标, 按拓扑序贪心落位)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排程规则
pub mod engine;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::DocType;

// 领域实体
pub use domain::{
    MaintenanceWindow, Shift, TimeSlot, WorkCenter, WorkCenterData, WorkOrder, WorkOrderData,
};

// 引擎
pub use engine::{
    AllocatedSpan, DependencySorter, ReflowConfig, ReflowEngine, ReflowError, ReflowInput,
    ReflowMetrics, ReflowResult, ScheduleChange, ScheduleValidator, ShiftCalendar,
    ValidationViolation, WorkingTimeAllocator,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工单排程重排引擎";
