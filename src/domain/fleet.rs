// ==========================================
// 机队维修预测排产系统 - 机队领域模型
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 1.1 机队主数据
// ==========================================
// 用途: 只读参考数据,每次运行加载一次
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Aircraft - 飞机主数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub aircraft_id: String,        // 飞机注册号
    pub fleet_type: String,         // 机型 (决定适用任务卡)
    pub base: String,               // 驻场基地 (工时在此消耗)
    pub in_service_date: NaiveDate, // 投入运营日期
}

/// 提取机队中出现的基地集合 (去重,升序)
///
/// # 返回
/// 排序后的基地代码列表,空机队返回空列表
pub fn distinct_bases(fleet: &[Aircraft]) -> Vec<String> {
    let mut bases: Vec<String> = fleet.iter().map(|ac| ac.base.clone()).collect();
    bases.sort();
    bases.dedup();
    bases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aircraft(id: &str, base: &str) -> Aircraft {
        Aircraft {
            aircraft_id: id.to_string(),
            fleet_type: "A320".to_string(),
            base: base.to_string(),
            in_service_date: NaiveDate::from_ymd_opt(2018, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_distinct_bases_sorted_dedup() {
        let fleet = vec![
            aircraft("B-1003", "SZX"),
            aircraft("B-1001", "PVG"),
            aircraft("B-1002", "PVG"),
        ];
        assert_eq!(distinct_bases(&fleet), vec!["PVG", "SZX"]);
    }

    #[test]
    fn test_distinct_bases_empty_fleet() {
        assert!(distinct_bases(&[]).is_empty());
    }
}
