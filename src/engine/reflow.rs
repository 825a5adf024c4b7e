// ==========================================
// 工单排程重排引擎 - 重排驱动器
// ==========================================
// 职责: 单趟重排主流程
// 输入: 工作中心 + 工单 (含依赖) 的文档集合
// 输出: 重排后的工单 + 变更记录 + 汇总指标
// 红线: 检修工单不可移动; 已落位工单成为同中心后续工单的占用段
// 红线: 调用方输入只读, 工单先深拷贝再改写
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::instrument;

use crate::domain::timeline::{sort_by_start, TimeSlot};
use crate::domain::work_center::WorkCenter;
use crate::domain::work_order::WorkOrder;
use crate::engine::allocator::WorkingTimeAllocator;
use crate::engine::error::ReflowError;
use crate::engine::shift_calendar::ShiftCalendar;
use crate::engine::topo::DependencySorter;

// 变更记录的固定原因
pub const CHANGE_REASON: &str = "CONSTRAINT_REFLOW";

// 结果说明的固定文案
const EXPLANATION: &str = "已按班次日历、检修窗口与工单依赖关系重新计算工单起止时间";

// ==========================================
// ReflowInput - 重排输入
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflowInput {
    pub work_centers: Vec<WorkCenter>, // 工作中心文档
    pub work_orders: Vec<WorkOrder>,   // 工单文档

    // 制造订单 (仅透传标签, 引擎不消费)
    #[serde(default)]
    pub manufacturing_orders: Vec<serde_json::Value>,
}

// ==========================================
// ScheduleChange - 变更记录
// ==========================================
// 仅记录起点或终点发生移动的工单
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleChange {
    pub work_order_id: String,       // 工单ID
    pub work_order_number: String,   // 工单号
    pub reason: String,              // 固定原因
    pub old_start: DateTime<Utc>,    // 原开始
    pub new_start: DateTime<Utc>,    // 新开始
    pub old_end: DateTime<Utc>,      // 原结束
    pub new_end: DateTime<Utc>,      // 新结束
    pub delta_minutes: i64,          // 结束时刻位移 (分钟, 提前为负)
}

// ==========================================
// ReflowMetrics - 汇总指标
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflowMetrics {
    pub moved_count: usize,        // 移动的工单数
    pub total_delay_minutes: i64,  // 总推迟分钟 (仅累计正位移)
}

// ==========================================
// ReflowResult - 重排结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflowResult {
    pub updated_work_orders: Vec<WorkOrder>, // 重排后的工单 (拓扑顺序)
    pub changes: Vec<ScheduleChange>,        // 变更记录 (落位顺序)
    pub explanation: String,                 // 固定说明文案
    pub metrics: ReflowMetrics,              // 汇总指标
}

// ==========================================
// ReflowConfig - 重排配置
// ==========================================
#[derive(Debug, Clone)]
pub struct ReflowConfig {
    pub shift_search_horizon_days: i64, // 班次搜索视野: 14天
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            shift_search_horizon_days: 14,
        }
    }
}

// ==========================================
// ReflowEngine - 重排驱动器
// ==========================================
pub struct ReflowEngine {
    allocator: WorkingTimeAllocator,
    sorter: DependencySorter,
    config: ReflowConfig,
}

impl ReflowEngine {
    /// 以默认配置创建引擎
    pub fn new() -> Self {
        Self::with_config(ReflowConfig::default())
    }

    /// 以指定配置创建引擎
    pub fn with_config(config: ReflowConfig) -> Self {
        Self {
            allocator: WorkingTimeAllocator::new(),
            sorter: DependencySorter::new(),
            config,
        }
    }

    /// 执行重排 (单趟, 同步, 无部分结果)
    ///
    /// 主流程：
    /// 1) 工作中心建索引, 工单深拷贝
    /// 2) 依赖拓扑排序
    /// 3) 以检修窗口播种各中心占用集
    /// 4) 钉住检修工单 (其区间成为占用段, 本身不再移动)
    /// 5) 按拓扑序逐一分配工作分钟并写回
    /// 6) 汇总变更记录与指标
    ///
    /// # 参数
    /// - `input`: 重排输入 (只读, 内部深拷贝工单)
    ///
    /// # 返回
    /// - `Ok(ReflowResult)`: 重排结果
    /// - `Err(ReflowError)`: 首个检测点的失败
    #[instrument(skip(self, input), fields(
        work_centers = input.work_centers.len(),
        work_orders = input.work_orders.len()
    ))]
    pub fn execute_reflow(&self, input: &ReflowInput) -> Result<ReflowResult, ReflowError> {
        // ===== Step 1: 建索引与深拷贝 =====
        let mut orders: Vec<WorkOrder> = input.work_orders.to_vec();
        let index_of: HashMap<&str, usize> = input
            .work_orders
            .iter()
            .enumerate()
            .map(|(i, o)| (o.doc_id.as_str(), i))
            .collect();

        // ===== Step 2: 拓扑排序 =====
        let topo_ids = self.sorter.sort(&input.work_orders)?;

        // ===== Step 3: 检修窗口播种占用集, 同步构建班次日历 =====
        let mut center_blocked: HashMap<String, Vec<TimeSlot>> = HashMap::new();
        let mut center_calendar: HashMap<String, ShiftCalendar> = HashMap::new();
        for wc in &input.work_centers {
            let mut blocked: Vec<TimeSlot> = wc
                .data
                .maintenance_windows
                .iter()
                .map(|m| m.to_slot())
                .collect();
            sort_by_start(&mut blocked);
            center_blocked.insert(wc.doc_id.clone(), blocked);
            center_calendar.insert(wc.doc_id.clone(), ShiftCalendar::new(&wc.data.shifts));
        }

        // ===== Step 4: 钉住检修工单 =====
        // 检修工单与既有检修窗口允许重叠, 不做去重
        for order in input.work_orders.iter().filter(|o| o.data.is_maintenance) {
            let blocked = center_blocked
                .get_mut(order.data.work_center_id.as_str())
                .ok_or_else(|| ReflowError::UnknownWorkCenter {
                    work_order_id: order.doc_id.clone(),
                    work_center_id: order.data.work_center_id.clone(),
                })?;
            blocked.push(order.to_slot());
            sort_by_start(blocked);
            tracing::debug!(
                work_order_id = %order.doc_id,
                work_center_id = %order.data.work_center_id,
                "检修工单已钉住"
            );
        }

        // ===== Step 5: 按拓扑序逐一落位 =====
        let mut scheduled: HashSet<String> = HashSet::new();
        let mut changes: Vec<ScheduleChange> = Vec::new();

        for id in &topo_ids {
            let idx = index_of[id.as_str()];
            let work_center_id = orders[idx].data.work_center_id.clone();

            let Some(blocked) = center_blocked.get_mut(work_center_id.as_str()) else {
                return Err(ReflowError::UnknownWorkCenter {
                    work_order_id: id.clone(),
                    work_center_id,
                });
            };

            // 检修工单保持原区间, 不产生变更记录
            if orders[idx].data.is_maintenance {
                scheduled.insert(id.clone());
                continue;
            }

            // earliest = max(原开始, 各父工单最晚结束)
            let mut earliest = orders[idx].data.start_date;
            for parent_id in orders[idx].data.depends_on_work_order_ids.clone() {
                if !scheduled.contains(&parent_id) {
                    return Err(ReflowError::InternalOrderingViolation {
                        work_order_id: id.clone(),
                        parent_id,
                    });
                }
                let parent_end = orders[index_of[parent_id.as_str()]].data.end_date;
                if parent_end > earliest {
                    earliest = parent_end;
                }
            }

            let total_minutes = orders[idx].data.total_minutes();
            let calendar = &center_calendar[work_center_id.as_str()];
            let span = self.allocator.allocate(
                earliest,
                total_minutes,
                calendar,
                blocked,
                self.config.shift_search_horizon_days,
            )?;

            // 写回深拷贝, 并把新区间计入本中心占用集
            let old_start = orders[idx].data.start_date;
            let old_end = orders[idx].data.end_date;
            orders[idx].data.start_date = span.start;
            orders[idx].data.end_date = span.end;
            blocked.push(TimeSlot::with_reason(
                span.start,
                span.end,
                orders[idx].data.work_order_number.clone(),
            ));
            sort_by_start(blocked);

            if span.start != old_start || span.end != old_end {
                changes.push(ScheduleChange {
                    work_order_id: id.clone(),
                    work_order_number: orders[idx].data.work_order_number.clone(),
                    reason: CHANGE_REASON.to_string(),
                    old_start,
                    new_start: span.start,
                    old_end,
                    new_end: span.end,
                    delta_minutes: (span.end - old_end).num_minutes(),
                });
            }
            scheduled.insert(id.clone());
        }

        // ===== Step 6: 汇总 =====
        let updated_work_orders: Vec<WorkOrder> = topo_ids
            .iter()
            .map(|id| orders[index_of[id.as_str()]].clone())
            .collect();
        let moved_count = changes.len();
        let total_delay_minutes: i64 = changes.iter().map(|c| c.delta_minutes.max(0)).sum();

        tracing::info!(
            moved_count = moved_count,
            total_delay_minutes = total_delay_minutes,
            "重排完成"
        );

        Ok(ReflowResult {
            updated_work_orders,
            changes,
            explanation: EXPLANATION.to_string(),
            metrics: ReflowMetrics {
                moved_count,
                total_delay_minutes,
            },
        })
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ReflowEngine {
    fn default() -> Self {
        Self::new()
    }
}
