// ==========================================
// 工单排程重排引擎 - 依赖拓扑排序器
// ==========================================
// 职责: Kahn 算法线性化工单依赖 DAG
// 红线: 迭代一律按输入顺序, 保证排序结果与排程并列次序可复现
// ==========================================

use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::work_order::WorkOrder;
use crate::engine::error::ReflowError;

// ==========================================
// DependencySorter - 依赖拓扑排序器
// ==========================================
pub struct DependencySorter {
    // 无状态引擎，不需要注入依赖
}

impl DependencySorter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 计算工单的拓扑顺序 (父在前, 子在后)
    ///
    /// 边方向: 对每个 parent ∈ dependsOn(child), 有 parent → child。
    /// 零入度队列按输入顺序入队 (FIFO), 并列情况的输出由此确定。
    ///
    /// # 参数
    /// - `orders`: 工单列表 (输入顺序)
    ///
    /// # 返回
    /// - `Ok(Vec<String>)`: 拓扑顺序的工单ID
    /// - `Err(UnknownDependency)`: 依赖指向不存在的工单
    /// - `Err(CyclicDependency)`: 依赖图存在环
    pub fn sort(&self, orders: &[WorkOrder]) -> Result<Vec<String>, ReflowError> {
        let ids: Vec<&str> = orders.iter().map(|o| o.doc_id.as_str()).collect();
        let id_set: HashSet<&str> = ids.iter().copied().collect();

        // 入度表与邻接表 (parent -> children, 输入顺序)
        let mut in_degree: HashMap<&str, usize> = ids.iter().map(|id| (*id, 0)).collect();
        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();

        for order in orders {
            for dep in &order.data.depends_on_work_order_ids {
                if !id_set.contains(dep.as_str()) {
                    return Err(ReflowError::UnknownDependency {
                        work_order_id: order.doc_id.clone(),
                        dependency_id: dep.clone(),
                    });
                }
                *in_degree.entry(order.doc_id.as_str()).or_insert(0) += 1;
                children
                    .entry(dep.as_str())
                    .or_default()
                    .push(order.doc_id.as_str());
            }
        }

        // 零入度节点按输入顺序入队
        let mut queue: VecDeque<&str> = ids
            .iter()
            .copied()
            .filter(|id| in_degree.get(id).copied().unwrap_or(0) == 0)
            .collect();

        let mut sorted: Vec<String> = Vec::with_capacity(orders.len());
        while let Some(id) = queue.pop_front() {
            sorted.push(id.to_string());
            if let Some(kids) = children.get(id) {
                for &kid in kids {
                    if let Some(degree) = in_degree.get_mut(kid) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(kid);
                        }
                    }
                }
            }
        }

        if sorted.len() < orders.len() {
            return Err(ReflowError::CyclicDependency {
                emitted: sorted.len(),
                total: orders.len(),
            });
        }

        tracing::debug!(total = sorted.len(), "依赖拓扑排序完成");
        Ok(sorted)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for DependencySorter {
    fn default() -> Self {
        Self::new()
    }
}
