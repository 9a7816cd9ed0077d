//! Seed data loader
//!
//! Fills an empty directory from a JSON array of employees with fixed ids. Managers
//! list their direct reports by id, as in the API payloads.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::AppResult;
use crate::gateway::EmployeeGateway;
use crate::model::NewEmployee;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedEmployee {
    pub employee_id: String,
    #[serde(flatten)]
    pub details: NewEmployee,
}

/// Load `path` into the gateway unless it already holds employees.
///
/// Returns the number of employees inserted.
pub async fn load_seed_file(gateway: &dyn EmployeeGateway, path: &Path) -> AppResult<usize> {
    let content = tokio::fs::read_to_string(path).await?;
    let seed: Vec<SeedEmployee> = serde_json::from_str(&content)?;

    info!("Loading {} seed employees from {}", seed.len(), path.display());
    load_seed(gateway, seed).await
}

pub async fn load_seed(gateway: &dyn EmployeeGateway, seed: Vec<SeedEmployee>) -> AppResult<usize> {
    if gateway.count_employees().await? > 0 {
        info!("Directory already populated, skipping seed");
        return Ok(0);
    }

    let ordered = reports_first(seed);
    for entry in &ordered {
        let employee = entry.details.to_employee(entry.employee_id.clone(), None);
        gateway
            .insert_employee(&employee, &entry.details.report_ids())
            .await?;
    }
    gateway.commit().await?;

    info!("Seeded {} employees", ordered.len());
    Ok(ordered.len())
}

/// Order entries so that every direct report precedes its manager.
fn reports_first(seed: Vec<SeedEmployee>) -> Vec<SeedEmployee> {
    let ids: Vec<String> = seed.iter().map(|e| e.employee_id.clone()).collect();
    let mut by_id: HashMap<String, SeedEmployee> = seed
        .into_iter()
        .map(|e| (e.employee_id.clone(), e))
        .collect();

    let mut ordered = Vec::with_capacity(by_id.len());
    let mut seen: HashSet<String> = HashSet::new();

    for root in ids {
        // (id, children pushed)
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                if let Some(entry) = by_id.remove(&id) {
                    ordered.push(entry);
                }
                continue;
            }
            if !seen.insert(id.clone()) {
                continue;
            }

            stack.push((id.clone(), true));
            if let Some(entry) = by_id.get(&id) {
                for report in entry.details.report_ids() {
                    stack.push((report, false));
                }
            }
        }
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MemoryGateway;

    const SEED: &str = r#"[
        {
            "employeeId": "16a596ae-edd3-4847-99fe-c4518e82c86f",
            "firstName": "John",
            "lastName": "Lennon",
            "position": "Development Manager",
            "department": "Engineering",
            "directReports": [
                { "employeeId": "b7839309-3348-463b-a7e3-5de1c168beb3" },
                { "employeeId": "03aa1462-ffa9-4978-901b-7c001562cf6f" }
            ]
        },
        {
            "employeeId": "b7839309-3348-463b-a7e3-5de1c168beb3",
            "firstName": "Paul",
            "lastName": "McCartney",
            "position": "Developer I",
            "department": "Engineering"
        },
        {
            "employeeId": "03aa1462-ffa9-4978-901b-7c001562cf6f",
            "firstName": "Ringo",
            "lastName": "Starr",
            "position": "Developer V",
            "department": "Engineering",
            "directReports": [
                { "employeeId": "62c1084e-6e34-4630-93fd-9153afb65309" }
            ]
        },
        {
            "employeeId": "62c1084e-6e34-4630-93fd-9153afb65309",
            "firstName": "Pete",
            "lastName": "Best",
            "position": "Developer II",
            "department": "Engineering"
        }
    ]"#;

    #[test]
    fn test_reports_precede_managers() {
        let seed: Vec<SeedEmployee> = serde_json::from_str(SEED).unwrap();
        let ordered = reports_first(seed);
        let position = |id: &str| ordered.iter().position(|e| e.employee_id == id).unwrap();

        assert_eq!(ordered.len(), 4);
        assert!(position("62c1084e-6e34-4630-93fd-9153afb65309") < position("03aa1462-ffa9-4978-901b-7c001562cf6f"));
        assert!(position("03aa1462-ffa9-4978-901b-7c001562cf6f") < position("16a596ae-edd3-4847-99fe-c4518e82c86f"));
        assert!(position("b7839309-3348-463b-a7e3-5de1c168beb3") < position("16a596ae-edd3-4847-99fe-c4518e82c86f"));
    }

    #[tokio::test]
    async fn test_seed_links_hierarchy() {
        let gateway = MemoryGateway::new();
        let seed: Vec<SeedEmployee> = serde_json::from_str(SEED).unwrap();

        let inserted = load_seed(&gateway, seed).await.unwrap();
        assert_eq!(inserted, 4);

        let john = gateway
            .get_by_id_with_reports("16a596ae-edd3-4847-99fe-c4518e82c86f")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(john.direct_reports.len(), 2);

        let pete = gateway
            .get_by_id("62c1084e-6e34-4630-93fd-9153afb65309")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            pete.manager_id.as_deref(),
            Some("03aa1462-ffa9-4978-901b-7c001562cf6f")
        );
    }

    #[tokio::test]
    async fn test_seed_skipped_when_populated() {
        let gateway = MemoryGateway::new();
        let seed: Vec<SeedEmployee> = serde_json::from_str(SEED).unwrap();
        load_seed(&gateway, seed.clone()).await.unwrap();

        let again = load_seed(&gateway, seed).await.unwrap();
        assert_eq!(again, 0);
        assert_eq!(gateway.count_employees().await.unwrap(), 4);
    }
}
