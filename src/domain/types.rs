// ==========================================
// 工单排程重排引擎 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 文档类型 (Doc Type)
// ==========================================
// 序列化格式: camelCase (与输入文档信封一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocType {
    WorkCenter, // 工作中心
    WorkOrder,  // 工单
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocType::WorkCenter => write!(f, "workCenter"),
            DocType::WorkOrder => write!(f, "workOrder"),
        }
    }
}
