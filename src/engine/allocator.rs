// ==========================================
// 机队维修预测排产系统 - 贪心分配引擎
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 5. Greedy Allocator
// 红线: 工时约束优先于任务优先级;单槽已用不得超预算
// ==========================================
// 职责: 按紧急度排序,在施工窗口内逐日消耗基地工时
// 输入: 预测条目列表 + 工时日历 (可变,调用方传入并取回)
// 输出: 排产结果列表;单次确定性遍历,无回溯,无重试
// ==========================================

use crate::domain::capacity::{CapacityCalendar, LaborCapacity};
use crate::domain::forecast::ForecastEntry;
use crate::domain::plan::AllocationResult;
use chrono::Duration;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// "完整分配" 判定容差,吸收浮点累加误差
pub const FULL_ALLOCATION_EPSILON: f64 = 1e-9;

// ==========================================
// GreedyAllocator - 贪心分配引擎
// ==========================================
pub struct GreedyAllocator {
    // 无状态引擎,不需要注入依赖
}

impl Default for GreedyAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyAllocator {
    pub fn new() -> Self {
        Self {}
    }

    /// 贪心分配 (单次遍历)
    ///
    /// 排序策略 (决定稀缺下的结果,必须严格复现):
    /// 1) 到期日升序
    /// 2) 严重度 rank 升序 (High=0 < Medium < Low < Unknown)
    /// 3) 所需工时降序 —— 大任务先排,容量碎片化后更难塞下
    ///
    /// 单条分配流程:
    /// 1) 窗口 = [due - window_days, due],按天粒度
    /// 2) 从最早一天起顺序扫描,对 (基地, 当日) 槽取
    ///    min(槽剩余, 尚缺工时),累计入已分配
    /// 3) 累计达到所需 (容差内) 即停止扫描
    /// 4) 达标 → scheduled,排程日期 = 最后贡献分配的那天;
    ///    扫完仍不足 → 未排上,保留部分分配,排程日期置空
    ///
    /// 槽的消耗对同一轮后续条目立即可见 (容量共享竞争),
    /// 这是稀缺风险的唯一来源
    #[instrument(skip(self, entries, calendar), fields(
        entry_count = entries.len(),
        slot_count = calendar.len()
    ))]
    pub fn allocate(
        &self,
        mut entries: Vec<ForecastEntry>,
        calendar: &mut CapacityCalendar,
    ) -> Vec<AllocationResult> {
        entries.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then(a.criticality.rank().cmp(&b.criticality.rank()))
                .then(
                    b.labor_hours
                        .partial_cmp(&a.labor_hours)
                        .unwrap_or(Ordering::Equal),
                )
        });

        let mut results = Vec::with_capacity(entries.len());
        for entry in entries {
            results.push(self.allocate_entry(entry, calendar));
        }

        let scheduled = results.iter().filter(|r| r.scheduled).count();
        debug!(
            total = results.len(),
            scheduled = scheduled,
            unscheduled = results.len() - scheduled,
            "贪心分配完成"
        );
        results
    }

    /// 单条目窗口内分配
    fn allocate_entry(
        &self,
        entry: ForecastEntry,
        calendar: &mut CapacityCalendar,
    ) -> AllocationResult {
        let labor_needed = entry.labor_hours;
        let mut allocated = 0.0_f64;
        let mut last_allocation_date = None;

        let mut date = entry.window_start();
        while date <= entry.due_date {
            if let Some(slot) = calendar.slot_mut(&entry.base, date) {
                if slot.has_remaining() {
                    let take = slot.allocate(labor_needed - allocated);
                    if take > 0.0 {
                        allocated += take;
                        last_allocation_date = Some(date);
                    }
                }
            }
            if allocated >= labor_needed - FULL_ALLOCATION_EPSILON {
                break;
            }
            date += Duration::days(1);
        }

        let fully_allocated = allocated >= labor_needed - FULL_ALLOCATION_EPSILON;
        let base = entry.base.clone();
        AllocationResult {
            forecast: entry,
            scheduled: fully_allocated,
            // 排程日期 = 最后贡献分配的那天;未排上时置空
            scheduled_date: if fully_allocated {
                last_allocation_date
            } else {
                None
            },
            scheduled_base: base,
            allocated_labor_hours: allocated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capacity::CapacitySlot;
    use crate::domain::types::Criticality;
    use chrono::NaiveDate;

    fn entry(
        task_id: &str,
        criticality: Criticality,
        labor_hours: f64,
        window_days: i64,
        due: NaiveDate,
    ) -> ForecastEntry {
        ForecastEntry {
            aircraft_id: "B-1001".to_string(),
            fleet_type: "A320".to_string(),
            base: "PVG".to_string(),
            task_id: task_id.to_string(),
            task_name: format!("{} 检查", task_id),
            criticality,
            labor_hours,
            interval_days: 60,
            window_days,
            due_date: due,
        }
    }

    fn calendar(base: &str, start: NaiveDate, days: i64, capacity: f64) -> CapacityCalendar {
        let mut cal = CapacityCalendar::new();
        let mut d = start;
        while d <= start + Duration::days(days) {
            cal.push(CapacitySlot {
                base: base.to_string(),
                date: d,
                capacity_labor_hours: capacity,
                used_labor_hours: 0.0,
            });
            d += Duration::days(1);
        }
        cal
    }

    #[test]
    fn test_sort_policy_due_then_rank_then_hours_desc() {
        let allocator = GreedyAllocator::new();
        let due = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let later = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap();
        let entries = vec![
            entry("SMALL-HIGH", Criticality::High, 10.0, 0, due),
            entry("LATER", Criticality::High, 99.0, 0, later),
            entry("BIG-HIGH", Criticality::High, 50.0, 0, due),
            entry("LOW", Criticality::Low, 80.0, 0, due),
        ];
        let mut cal = calendar("PVG", due, 2, 1000.0);

        let results = allocator.allocate(entries, &mut cal);

        let order: Vec<&str> = results
            .iter()
            .map(|r| r.forecast.task_id.as_str())
            .collect();
        assert_eq!(order, vec!["BIG-HIGH", "SMALL-HIGH", "LOW", "LATER"]);
    }

    #[test]
    fn test_single_day_full_allocation() {
        let allocator = GreedyAllocator::new();
        let due = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut cal = calendar("PVG", due, 0, 160.0);

        let results = allocator.allocate(
            vec![entry("A-CHK", Criticality::High, 100.0, 0, due)],
            &mut cal,
        );

        assert!(results[0].scheduled);
        assert_eq!(results[0].scheduled_date, Some(due));
        assert_eq!(results[0].allocated_labor_hours, 100.0);
        assert_eq!(cal.slot("PVG", due).unwrap().used_labor_hours, 100.0);
    }

    #[test]
    fn test_allocation_spans_window_scheduled_date_is_last_day() {
        let allocator = GreedyAllocator::new();
        let due = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let start = due - Duration::days(2);
        let mut cal = calendar("PVG", start, 2, 40.0);

        // 100 工时,窗口 3 天 × 40 → 前两天吃满,第三天取 20
        let results = allocator.allocate(
            vec![entry("C-CHK", Criticality::High, 100.0, 2, due)],
            &mut cal,
        );

        let r = &results[0];
        assert!(r.scheduled);
        assert_eq!(r.allocated_labor_hours, 100.0);
        assert_eq!(r.scheduled_date, Some(due));
        assert_eq!(cal.slot("PVG", start).unwrap().used_labor_hours, 40.0);
        assert_eq!(cal.slot("PVG", due).unwrap().used_labor_hours, 20.0);
    }

    #[test]
    fn test_insufficient_capacity_partial_retained_no_date() {
        let allocator = GreedyAllocator::new();
        let due = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut cal = calendar("PVG", due, 0, 10.0);

        let results = allocator.allocate(
            vec![entry("HMV", Criticality::High, 100.0, 0, due)],
            &mut cal,
        );

        let r = &results[0];
        assert!(!r.scheduled);
        assert_eq!(r.scheduled_date, None);
        // 部分分配保留
        assert_eq!(r.allocated_labor_hours, 10.0);
        assert_eq!(cal.slot("PVG", due).unwrap().used_labor_hours, 10.0);
    }

    #[test]
    fn test_contention_first_sorted_wins() {
        let allocator = GreedyAllocator::new();
        let due = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut cal = calendar("PVG", due, 0, 100.0);

        let results = allocator.allocate(
            vec![
                entry("LOW", Criticality::Low, 80.0, 0, due),
                entry("HIGH", Criticality::High, 80.0, 0, due),
            ],
            &mut cal,
        );

        let high = results
            .iter()
            .find(|r| r.forecast.task_id == "HIGH")
            .unwrap();
        let low = results
            .iter()
            .find(|r| r.forecast.task_id == "LOW")
            .unwrap();

        // 高严重度先占,低严重度只剩 20
        assert!(high.scheduled);
        assert_eq!(high.allocated_labor_hours, 80.0);
        assert!(!low.scheduled);
        assert_eq!(low.allocated_labor_hours, 20.0);
        // 槽总消耗不超预算
        assert_eq!(cal.slot("PVG", due).unwrap().used_labor_hours, 100.0);
    }

    #[test]
    fn test_missing_base_slots_yield_zero_allocation() {
        let allocator = GreedyAllocator::new();
        let due = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        // 日历只覆盖 SZX,条目基地是 PVG
        let mut cal = calendar("SZX", due, 0, 160.0);

        let results = allocator.allocate(
            vec![entry("A-CHK", Criticality::High, 50.0, 3, due)],
            &mut cal,
        );

        assert!(!results[0].scheduled);
        assert_eq!(results[0].allocated_labor_hours, 0.0);
        assert_eq!(results[0].scheduled_date, None);
    }

    #[test]
    fn test_used_never_exceeds_budget_under_pressure() {
        let allocator = GreedyAllocator::new();
        let due = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let start = due - Duration::days(3);
        let mut cal = calendar("PVG", start, 3, 50.0);

        let entries: Vec<ForecastEntry> = (0..10)
            .map(|i| entry(&format!("T{}", i), Criticality::Medium, 70.0, 3, due))
            .collect();
        let results = allocator.allocate(entries, &mut cal);

        for slot in cal.slots() {
            assert!(slot.used_labor_hours <= slot.capacity_labor_hours + 1e-9);
        }
        for r in &results {
            assert!(r.allocated_labor_hours >= 0.0);
            assert!(r.allocated_labor_hours <= r.forecast.labor_hours + 1e-9);
        }
    }
}
