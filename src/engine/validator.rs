// ==========================================
// 工单排程重排引擎 - 排程结果校验器
// ==========================================
// 职责: 重排结果的事后约束校验
// 注: 单跨度表示允许跨度内部包住停顿, 检修校验因此只看起止边界
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::work_center::WorkCenter;
use crate::domain::work_order::WorkOrder;

// ==========================================
// ValidationViolation - 校验违规项
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationViolation {
    pub violation_type: String, // 违规类型
    pub work_order_id: String,  // 相关工单ID
    pub reason: String,         // 违规说明
}

// ==========================================
// ScheduleValidator - 排程结果校验器
// ==========================================
pub struct ScheduleValidator {
    // 无状态引擎，不需要注入依赖
}

impl ScheduleValidator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 校验同一工作中心的工单两两不重叠
    ///
    /// 按中心分组, 组内按开始时刻排序后只需检查相邻对。
    ///
    /// # 参数
    /// - `orders`: 重排后的工单集合
    ///
    /// # 返回
    /// 违规项列表 (空表示通过); 分组次序跟随工单首次出现的中心次序
    pub fn validate_no_work_center_overlaps(
        &self,
        orders: &[WorkOrder],
    ) -> Vec<ValidationViolation> {
        // 中心按首次出现次序收集, 保证违规输出可复现
        let mut center_order: Vec<&str> = Vec::new();
        let mut by_center: HashMap<&str, Vec<&WorkOrder>> = HashMap::new();
        for order in orders {
            let center_id = order.data.work_center_id.as_str();
            if !by_center.contains_key(center_id) {
                center_order.push(center_id);
            }
            by_center.entry(center_id).or_default().push(order);
        }

        let mut violations = Vec::new();
        for center_id in center_order {
            let Some(group) = by_center.get_mut(center_id) else {
                continue;
            };
            group.sort_by_key(|o| o.data.start_date);

            for pair in group.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a.to_slot().overlaps(&b.to_slot()) {
                    violations.push(ValidationViolation {
                        violation_type: "WORK_CENTER_OVERLAP".to_string(),
                        work_order_id: b.doc_id.clone(),
                        reason: format!(
                            "工作中心 {} 上工单 {} 与 {} 区间重叠",
                            center_id, a.doc_id, b.doc_id
                        ),
                    });
                }
            }
        }
        violations
    }

    /// 校验非检修工单的起止均避开其中心的检修窗口
    ///
    /// 判定: start ∉ [m.start, m.end) 且 end ∉ (m.start, m.end]。
    /// 跨度内部允许包住整个检修窗口 (视为停顿)。
    ///
    /// # 参数
    /// - `orders`: 重排后的工单集合
    /// - `centers`: 工作中心集合
    ///
    /// # 返回
    /// 违规项列表 (空表示通过)
    pub fn validate_maintenance_respected(
        &self,
        orders: &[WorkOrder],
        centers: &[WorkCenter],
    ) -> Vec<ValidationViolation> {
        let center_by_id: HashMap<&str, &WorkCenter> =
            centers.iter().map(|c| (c.doc_id.as_str(), c)).collect();

        let mut violations = Vec::new();
        for order in orders.iter().filter(|o| !o.data.is_maintenance) {
            let Some(center) = center_by_id.get(order.data.work_center_id.as_str()) else {
                continue;
            };
            for window in &center.data.maintenance_windows {
                let start = order.data.start_date;
                let end = order.data.end_date;

                if start >= window.start_date && start < window.end_date {
                    violations.push(ValidationViolation {
                        violation_type: "MAINTENANCE_START_CONFLICT".to_string(),
                        work_order_id: order.doc_id.clone(),
                        reason: format!(
                            "工单 {} 的开始时刻落在检修窗口 [{}, {}) 内",
                            order.doc_id, window.start_date, window.end_date
                        ),
                    });
                }
                if end > window.start_date && end <= window.end_date {
                    violations.push(ValidationViolation {
                        violation_type: "MAINTENANCE_END_CONFLICT".to_string(),
                        work_order_id: order.doc_id.clone(),
                        reason: format!(
                            "工单 {} 的结束时刻落在检修窗口 ({}, {}] 内",
                            order.doc_id, window.start_date, window.end_date
                        ),
                    });
                }
            }
        }
        violations
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ScheduleValidator {
    fn default() -> Self {
        Self::new()
    }
}
