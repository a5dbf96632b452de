// ==========================================
// 机队维修预测排产系统 - 工时容量领域模型
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 3. Capacity Calendar
// 红线: 单槽已用工时不得超过预算
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// CapacitySlot - 单基地单日工时槽
// ==========================================
// 生命周期: 运行开始时按 (基地 × 日期) 全量建空,
//           分配阶段单调递增 used,之后只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacitySlot {
    pub base: String,                // 基地代码
    pub date: NaiveDate,             // 日历日期
    pub capacity_labor_hours: f64,   // 当日工时预算
    pub used_labor_hours: f64,       // 已用工时 (只增不减)
}

// ==========================================
// Trait: LaborCapacity
// ==========================================
// 用途: Greedy Allocator 容量门控接口
pub trait LaborCapacity {
    /// 剩余可分配工时
    fn remaining_labor_hours(&self) -> f64;

    /// 是否还有可分配工时
    fn has_remaining(&self) -> bool;

    /// 利用率百分比 (预算为 0 时按 0 处理)
    fn utilization_pct(&self) -> f64;
}

impl LaborCapacity for CapacitySlot {
    fn remaining_labor_hours(&self) -> f64 {
        (self.capacity_labor_hours - self.used_labor_hours).max(0.0)
    }

    fn has_remaining(&self) -> bool {
        self.remaining_labor_hours() > 0.0
    }

    fn utilization_pct(&self) -> f64 {
        if self.capacity_labor_hours <= 0.0 {
            return 0.0;
        }
        self.used_labor_hours / self.capacity_labor_hours * 100.0
    }
}

impl CapacitySlot {
    /// 向槽内分配工时,返回实际分配量
    ///
    /// 实际分配量 = min(剩余工时, 请求工时),保证 used 不超预算
    pub fn allocate(&mut self, requested_hours: f64) -> f64 {
        let take = self.remaining_labor_hours().min(requested_hours).max(0.0);
        self.used_labor_hours += take;
        take
    }
}

// ==========================================
// CapacityCalendar - 工时日历 (键控存储)
// ==========================================
// 用途: 显式可变状态,由调用方传入分配器并取回,
//       禁止任何全局共享,保证单次运行隔离
#[derive(Debug, Clone, Default)]
pub struct CapacityCalendar {
    slots: Vec<CapacitySlot>,
    index: HashMap<(String, NaiveDate), usize>,
}

impl CapacityCalendar {
    /// 构造空日历
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个工时槽
    ///
    /// 相同 (基地, 日期) 重复插入时保留先到的槽
    pub fn push(&mut self, slot: CapacitySlot) {
        let key = (slot.base.clone(), slot.date);
        if self.index.contains_key(&key) {
            return;
        }
        self.index.insert(key, self.slots.len());
        self.slots.push(slot);
    }

    /// 按 (基地, 日期) 取槽 (可变)
    pub fn slot_mut(&mut self, base: &str, date: NaiveDate) -> Option<&mut CapacitySlot> {
        let idx = *self.index.get(&(base.to_string(), date))?;
        self.slots.get_mut(idx)
    }

    /// 按 (基地, 日期) 取槽 (只读)
    pub fn slot(&self, base: &str, date: NaiveDate) -> Option<&CapacitySlot> {
        let idx = *self.index.get(&(base.to_string(), date))?;
        self.slots.get(idx)
    }

    /// 全部槽 (插入序: 基地升序,日期升序)
    pub fn slots(&self) -> &[CapacitySlot] {
        &self.slots
    }

    /// 槽数量
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// 是否为空日历
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
