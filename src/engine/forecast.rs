// ==========================================
// 机队维修预测排产系统 - 预测生成引擎
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 2. Forecast Builder
// ==========================================
// 职责: 按 (飞机 × 适用任务卡) 推导视野内到期的预测条目
// 输入: 机队主数据 + 任务卡主数据 + 预测配置
// 输出: 按 (到期日, 严重度 rank) 升序的预测条目列表
// ==========================================

use crate::config::ForecastConfig;
use crate::domain::fleet::Aircraft;
use crate::domain::forecast::ForecastEntry;
use crate::domain::task::TaskDefinition;
use chrono::{Duration, NaiveDate};
use tracing::{debug, instrument};

// ==========================================
// ForecastBuilder - 预测生成引擎
// ==========================================
pub struct ForecastBuilder {
    // 无状态引擎,不需要注入依赖
}

impl Default for ForecastBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastBuilder {
    pub fn new() -> Self {
        Self {}
    }

    /// 生成预测条目
    ///
    /// 规则:
    /// 1) 仅机型匹配的 (飞机, 任务卡) 组合产生条目
    /// 2) 种子模式下 last_done 由 (飞机序号, 任务序号) 确定性推导,
    ///    把到期日摊开到视野各处 —— 防聚集策略,非近似
    /// 3) due = last_done + interval,超出视野终点的条目丢弃
    /// 4) 早于起始日的条目 (积压) 保留,交由分配器与风险分类器暴露
    ///
    /// # 参数
    /// - `fleet`: 机队主数据
    /// - `tasks`: 任务卡主数据
    /// - `cfg`: 预测配置
    ///
    /// # 返回
    /// 按 (到期日升序, 严重度 rank 升序) 排好的条目列表,
    /// 参考表为空时返回空列表,不报错
    #[instrument(skip(self, fleet, tasks), fields(
        fleet_count = fleet.len(),
        task_count = tasks.len(),
        start_date = %cfg.start_date,
        horizon_days = cfg.horizon_days
    ))]
    pub fn build(
        &self,
        fleet: &[Aircraft],
        tasks: &[TaskDefinition],
        cfg: &ForecastConfig,
    ) -> Vec<ForecastEntry> {
        let horizon_end = cfg.horizon_end();
        let mut entries = Vec::new();

        for (ac_idx, aircraft) in fleet.iter().enumerate() {
            for (task_idx, task) in tasks.iter().enumerate() {
                if !task.applies_to(aircraft) {
                    continue;
                }

                let last_done = if cfg.seed_history {
                    seed_last_done(cfg.start_date, task.interval_days, ac_idx, task_idx)
                } else {
                    cfg.start_date
                };
                let due_date = last_done + Duration::days(task.interval_days);

                // 超出视野终点的不纳入本轮计划;早于起始日的积压保留
                if due_date > horizon_end {
                    continue;
                }

                entries.push(ForecastEntry {
                    aircraft_id: aircraft.aircraft_id.clone(),
                    fleet_type: aircraft.fleet_type.clone(),
                    base: aircraft.base.clone(),
                    task_id: task.task_id.clone(),
                    task_name: task.task_name.clone(),
                    criticality: task.criticality,
                    labor_hours: task.labor_hours,
                    interval_days: task.interval_days,
                    window_days: task.window_days,
                    due_date,
                });
            }
        }

        // 到期日升序,同日按严重度 rank 升序 (显式 rank,不比标签文本)
        entries.sort_by_key(|e| (e.due_date, e.criticality.rank()));

        debug!(entry_count = entries.len(), "预测条目生成完成");
        entries
    }
}

/// 种子 last_done 推导
///
/// offset = (飞机序号 × 7 + 任务序号 × 3) mod max(2, interval)
/// last_done = start - max(1, interval - offset)
/// 使各飞机同一任务的到期日错开,避免全部压在视野第一天
fn seed_last_done(
    start_date: NaiveDate,
    interval_days: i64,
    aircraft_idx: usize,
    task_idx: usize,
) -> NaiveDate {
    let offset = ((aircraft_idx as i64) * 7 + (task_idx as i64) * 3) % interval_days.max(2);
    start_date - Duration::days((interval_days - offset).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Criticality;

    fn aircraft(id: &str, fleet_type: &str, base: &str) -> Aircraft {
        Aircraft {
            aircraft_id: id.to_string(),
            fleet_type: fleet_type.to_string(),
            base: base.to_string(),
            in_service_date: NaiveDate::from_ymd_opt(2018, 6, 1).unwrap(),
        }
    }

    fn task(id: &str, fleet_type: &str, criticality: Criticality, interval: i64) -> TaskDefinition {
        TaskDefinition {
            task_id: id.to_string(),
            task_name: format!("{} 检查", id),
            fleet_type: fleet_type.to_string(),
            criticality,
            labor_hours: 40.0,
            interval_days: interval,
            window_days: 7,
        }
    }

    fn cfg(start: NaiveDate, horizon: i64) -> ForecastConfig {
        ForecastConfig {
            start_date: start,
            horizon_days: horizon,
            seed_history: true,
        }
    }

    #[test]
    fn test_seed_last_done_is_deterministic_and_spread() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let a = seed_last_done(start, 60, 0, 0);
        let b = seed_last_done(start, 60, 1, 0);
        let c = seed_last_done(start, 60, 0, 0);

        // 同一输入必须复现同一结果
        assert_eq!(a, c);
        // 不同飞机的 last_done 错开
        assert_ne!(a, b);
        // last_done 必在起始日之前
        assert!(a < start);
    }

    #[test]
    fn test_fleet_type_filter() {
        let builder = ForecastBuilder::new();
        let fleet = vec![aircraft("B-1001", "A320", "PVG")];
        let tasks = vec![
            task("A-CHK", "A320", Criticality::High, 30),
            task("B-CHK", "B737", Criticality::High, 30),
        ];
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let entries = builder.build(&fleet, &tasks, &cfg(start, 120));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].task_id, "A-CHK");
    }

    #[test]
    fn test_horizon_cutoff_discards_far_future() {
        let builder = ForecastBuilder::new();
        let fleet = vec![aircraft("B-1001", "A320", "PVG")];
        // seed_history=false: due = start + 200,超出 120 天视野
        let tasks = vec![task("HMV", "A320", Criticality::Medium, 200)];
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let config = ForecastConfig {
            start_date: start,
            horizon_days: 120,
            seed_history: false,
        };

        let entries = builder.build(&fleet, &tasks, &config);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_seeded_due_dates_spread_across_aircraft() {
        let builder = ForecastBuilder::new();
        let fleet = vec![
            aircraft("B-1001", "A320", "PVG"),
            aircraft("B-1002", "A320", "PVG"),
        ];
        let tasks = vec![task("A-CHK", "A320", Criticality::High, 5)];
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let entries = builder.build(&fleet, &tasks, &cfg(start, 120));

        assert_eq!(entries.len(), 2);
        // interval=5: 飞机1 offset = 7 % 5 = 2 → last_done = start-3, due = start+2
        // 飞机0 due = start
        assert!(entries.iter().any(|e| e.due_date == start));
        assert!(entries
            .iter()
            .any(|e| e.due_date == start + Duration::days(2)));
    }

    #[test]
    fn test_ordering_due_then_criticality_rank() {
        let builder = ForecastBuilder::new();
        let fleet = vec![aircraft("B-1001", "A320", "PVG")];
        // seed_history=false: 两任务同为 due = start + 30
        let tasks = vec![
            task("LOW", "A320", Criticality::Low, 30),
            task("HIGH", "A320", Criticality::High, 30),
        ];
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let config = ForecastConfig {
            start_date: start,
            horizon_days: 120,
            seed_history: false,
        };

        let entries = builder.build(&fleet, &tasks, &config);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].task_id, "HIGH");
        assert_eq!(entries[1].task_id, "LOW");
    }

    #[test]
    fn test_empty_reference_tables() {
        let builder = ForecastBuilder::new();
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(builder.build(&[], &[], &cfg(start, 120)).is_empty());
    }
}
