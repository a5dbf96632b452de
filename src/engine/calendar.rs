// ==========================================
// 机队维修预测排产系统 - 工时日历生成引擎
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 3. Capacity Calendar Builder
// ==========================================
// 职责: 按 (基地 × 视野内每一天) 建空工时槽
// 无错误分支: 空基地列表产出空日历
// ==========================================

use crate::domain::capacity::{CapacityCalendar, CapacitySlot};
use chrono::{Duration, NaiveDate};
use tracing::{debug, instrument};

// ==========================================
// CapacityCalendarBuilder - 工时日历生成引擎
// ==========================================
pub struct CapacityCalendarBuilder {
    // 无状态引擎,不需要注入依赖
}

impl Default for CapacityCalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CapacityCalendarBuilder {
    pub fn new() -> Self {
        Self {}
    }

    /// 生成工时日历
    ///
    /// 覆盖范围: start ..= start + horizon_days (两端含),
    /// 每基地每日一个槽,预算固定,已用工时置零
    ///
    /// # 参数
    /// - `bases`: 基地代码列表 (应已去重排序,见 `distinct_bases`)
    /// - `start_date`: 起始日
    /// - `horizon_days`: 覆盖天数
    /// - `labor_hours_per_day`: 单基地单日工时预算
    #[instrument(skip(self, bases), fields(
        base_count = bases.len(),
        start_date = %start_date,
        horizon_days = horizon_days
    ))]
    pub fn build(
        &self,
        bases: &[String],
        start_date: NaiveDate,
        horizon_days: i64,
        labor_hours_per_day: f64,
    ) -> CapacityCalendar {
        let end_date = start_date + Duration::days(horizon_days);
        let mut calendar = CapacityCalendar::new();

        for base in bases {
            let mut date = start_date;
            while date <= end_date {
                calendar.push(CapacitySlot {
                    base: base.clone(),
                    date,
                    capacity_labor_hours: labor_hours_per_day,
                    used_labor_hours: 0.0,
                });
                date += Duration::days(1);
            }
        }

        debug!(slot_count = calendar.len(), "工时日历生成完成");
        calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_slot_per_base_per_day_inclusive() {
        let builder = CapacityCalendarBuilder::new();
        let bases = vec!["PVG".to_string(), "SZX".to_string()];
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let calendar = builder.build(&bases, start, 7, 160.0);

        // 7 天视野 → 两端含共 8 天
        assert_eq!(calendar.len(), 2 * 8);
        let end = start + Duration::days(7);
        assert!(calendar.slot("PVG", start).is_some());
        assert!(calendar.slot("SZX", end).is_some());
        assert!(calendar.slot("PVG", end + Duration::days(1)).is_none());
    }

    #[test]
    fn test_slots_initialized_empty() {
        let builder = CapacityCalendarBuilder::new();
        let bases = vec!["PVG".to_string()];
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let calendar = builder.build(&bases, start, 3, 80.0);

        for slot in calendar.slots() {
            assert_eq!(slot.capacity_labor_hours, 80.0);
            assert_eq!(slot.used_labor_hours, 0.0);
        }
    }

    #[test]
    fn test_empty_base_list_yields_empty_calendar() {
        let builder = CapacityCalendarBuilder::new();
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(builder.build(&[], start, 120, 160.0).is_empty());
    }
}
