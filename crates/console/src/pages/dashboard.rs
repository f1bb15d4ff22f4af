//! Dashboard page: summary charts rendered from aggregate counts.

use domain::models::DashboardData;
use gateway::ApiGateway;

use crate::notify::{Banner, BannerKind};

pub const CATEGORY_COLUMNS: &[&str] = &["Category", "Requests"];
pub const COMPARISON_COLUMNS: &[&str] = &["Role", "Estimated Man-hours", "Actual Man-hours"];

pub const NO_DASHBOARD_DATA: &str = "No dashboard data available.";

pub struct DashboardPage {
    gateway: ApiGateway,
    pub data: Option<DashboardData>,
    pub error_box: Banner,
}

impl DashboardPage {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            gateway,
            data: None,
            error_box: Banner::new(),
        }
    }

    pub async fn load(&mut self) -> bool {
        match self.gateway.dashboard_data().await {
            Ok(data) => {
                self.data = Some(data);
                true
            }
            Err(err) => {
                self.error_box.show(
                    format!("Failed to load dashboard data. {err}"),
                    BannerKind::Error,
                );
                false
            }
        }
    }

    /// One row per category for the requests-by-category chart.
    pub fn category_rows(&self) -> Vec<Vec<String>> {
        self.data
            .as_ref()
            .map(|d| {
                d.requests_by_category
                    .iter()
                    .map(|c| vec![c.category.clone(), c.count.to_string()])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// One row per role for the estimated-vs-actual comparison chart.
    pub fn comparison_rows(&self) -> Vec<Vec<String>> {
        self.data
            .as_ref()
            .map(|d| {
                d.man_hours_comparison
                    .iter()
                    .map(|r| {
                        vec![
                            r.role.to_string(),
                            r.estimated.to_string(),
                            r.actual.to_string(),
                        ]
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::{CategoryCount, Role, RoleHours};

    #[test]
    fn test_chart_rows_from_data() {
        let gateway = ApiGateway::new(
            url::Url::parse("http://127.0.0.1:5000").unwrap(),
            std::time::Duration::from_secs(5),
        )
        .unwrap();
        let mut page = DashboardPage::new(gateway);
        page.data = Some(DashboardData {
            requests_by_category: vec![CategoryCount {
                category: "Bug".to_string(),
                count: 9,
            }],
            man_hours_comparison: vec![RoleHours {
                role: Role::Developer,
                estimated: 120,
                actual: 96,
            }],
        });

        assert_eq!(page.category_rows(), vec![vec!["Bug".to_string(), "9".to_string()]]);
        assert_eq!(
            page.comparison_rows(),
            vec![vec![
                "Developer".to_string(),
                "120".to_string(),
                "96".to_string()
            ]]
        );
    }

    #[test]
    fn test_chart_rows_empty_before_load() {
        let gateway = ApiGateway::new(
            url::Url::parse("http://127.0.0.1:5000").unwrap(),
            std::time::Duration::from_secs(5),
        )
        .unwrap();
        let page = DashboardPage::new(gateway);
        assert!(page.category_rows().is_empty());
        assert!(page.comparison_rows().is_empty());
    }
}
