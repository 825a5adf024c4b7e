// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use workorder_reflow::domain::types::DocType;
use workorder_reflow::domain::work_center::{MaintenanceWindow, Shift, WorkCenter, WorkCenterData};
use workorder_reflow::domain::work_order::{WorkOrder, WorkOrderData};
use workorder_reflow::engine::ReflowInput;

/// 构造 UTC 时刻 (分钟精度)
pub fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

// ==========================================
// WorkCenter 构建器
// ==========================================

pub struct WorkCenterBuilder {
    doc_id: String,
    name: String,
    shifts: Vec<Shift>,
    maintenance_windows: Vec<MaintenanceWindow>,
}

impl WorkCenterBuilder {
    pub fn new(doc_id: &str) -> Self {
        Self {
            doc_id: doc_id.to_string(),
            name: format!("中心-{}", doc_id),
            shifts: Vec::new(),
            maintenance_windows: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn shift(mut self, day_of_week: u8, start_hour: u8, end_hour: u8) -> Self {
        self.shifts.push(Shift {
            day_of_week,
            start_hour,
            end_hour,
        });
        self
    }

    /// 周一至周五的标准班次
    pub fn weekday_shifts(mut self, start_hour: u8, end_hour: u8) -> Self {
        for day_of_week in 1..=5 {
            self.shifts.push(Shift {
                day_of_week,
                start_hour,
                end_hour,
            });
        }
        self
    }

    pub fn maintenance_window(
        mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        reason: &str,
    ) -> Self {
        self.maintenance_windows.push(MaintenanceWindow {
            start_date: start,
            end_date: end,
            reason: Some(reason.to_string()),
        });
        self
    }

    pub fn build(self) -> WorkCenter {
        WorkCenter {
            doc_id: self.doc_id,
            doc_type: DocType::WorkCenter,
            data: WorkCenterData {
                name: self.name,
                shifts: self.shifts,
                maintenance_windows: self.maintenance_windows,
            },
        }
    }
}

// ==========================================
// WorkOrder 构建器
// ==========================================

pub struct WorkOrderBuilder {
    doc_id: String,
    work_order_number: String,
    work_center_id: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    duration_minutes: i64,
    setup_time_minutes: Option<i64>,
    is_maintenance: bool,
    depends_on: Vec<String>,
}

impl WorkOrderBuilder {
    pub fn new(doc_id: &str, work_center_id: &str) -> Self {
        Self {
            doc_id: doc_id.to_string(),
            work_order_number: format!("WO-{}", doc_id),
            work_center_id: work_center_id.to_string(),
            start_date: ts(2026, 3, 2, 8, 0),
            end_date: ts(2026, 3, 2, 10, 0),
            duration_minutes: 120,
            setup_time_minutes: None,
            is_maintenance: false,
            depends_on: Vec::new(),
        }
    }

    pub fn span(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn duration(mut self, minutes: i64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn setup(mut self, minutes: i64) -> Self {
        self.setup_time_minutes = Some(minutes);
        self
    }

    pub fn maintenance(mut self) -> Self {
        self.is_maintenance = true;
        self
    }

    pub fn depends_on(mut self, ids: &[&str]) -> Self {
        self.depends_on = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> WorkOrder {
        WorkOrder {
            doc_id: self.doc_id,
            doc_type: DocType::WorkOrder,
            data: WorkOrderData {
                work_order_number: self.work_order_number,
                manufacturing_order_id: Some("MO-001".to_string()),
                work_center_id: self.work_center_id,
                start_date: self.start_date,
                end_date: self.end_date,
                duration_minutes: self.duration_minutes,
                setup_time_minutes: self.setup_time_minutes,
                is_maintenance: self.is_maintenance,
                depends_on_work_order_ids: self.depends_on,
            },
        }
    }
}

/// 组装重排输入
pub fn reflow_input(centers: Vec<WorkCenter>, orders: Vec<WorkOrder>) -> ReflowInput {
    ReflowInput {
        work_centers: centers,
        work_orders: orders,
        manufacturing_orders: Vec::new(),
    }
}
