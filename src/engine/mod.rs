// ==========================================
// 工单排程重排引擎 - 引擎层
// ==========================================
// 职责: 实现排程规则引擎
// 红线: 单线程同步执行, 无全局状态, 相同输入产出相同结果
// ==========================================

pub mod allocator;
pub mod error;
pub mod reflow;
pub mod shift_calendar;
pub mod topo;
pub mod validator;

// 重导出核心引擎
pub use allocator::{AllocatedSpan, WorkingTimeAllocator};
pub use error::ReflowError;
pub use reflow::{
    ReflowConfig, ReflowEngine, ReflowInput, ReflowMetrics, ReflowResult, ScheduleChange,
    CHANGE_REASON,
};
pub use shift_calendar::ShiftCalendar;
pub use topo::DependencySorter;
pub use validator::{ScheduleValidator, ValidationViolation};
