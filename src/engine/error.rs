// ==========================================
// 工单排程重排引擎 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有错误在首个检测点抛出, 不产出部分结果
// ==========================================

use chrono::{DateTime, Utc};
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum ReflowError {
    // ===== 依赖图错误 =====
    #[error("未知依赖: 工单 {work_order_id} 依赖的 {dependency_id} 不在输入集合中")]
    UnknownDependency {
        work_order_id: String,
        dependency_id: String,
    },

    #[error("依赖关系成环: 拓扑排序无法排空 (已输出 {emitted}/{total})")]
    CyclicDependency { emitted: usize, total: usize },

    // ===== 排程错误 =====
    #[error("未知工作中心: 工单 {work_order_id} 引用的 {work_center_id} 不在输入集合中")]
    UnknownWorkCenter {
        work_order_id: String,
        work_center_id: String,
    },

    #[error("搜索视野内无可用班次窗口: 自 {cursor} 起 {horizon_days} 天内未命中任何班次")]
    NoShiftWindowInHorizon {
        cursor: DateTime<Utc>,
        horizon_days: i64,
    },

    // ===== 内部一致性错误 =====
    #[error("内部顺序违规: 处理工单 {work_order_id} 时其父工单 {parent_id} 尚未落位")]
    InternalOrderingViolation {
        work_order_id: String,
        parent_id: String,
    },
}
