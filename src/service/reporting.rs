use std::collections::HashSet;

use tracing::{debug, instrument, warn};

use super::DirectoryService;
use crate::error::AppResult;
use crate::model::{Employee, ReportingStructure};

impl DirectoryService {
    /// Count every direct and indirect report below `employee`.
    ///
    /// Each visited node is re-fetched with its immediate reports and contributes the
    /// size of that list. The walk uses an explicit stack, so deep hierarchies do not
    /// grow the call stack. The hierarchy is expected to be a tree; a node reached a
    /// second time is not expanded again.
    #[instrument(skip(self, employee), fields(employee_id = %employee.employee_id))]
    pub async fn get_reporting_structure(
        &self,
        employee: Employee,
    ) -> AppResult<ReportingStructure> {
        let mut number_of_reports: u64 = 0;
        let mut visited: HashSet<String> = HashSet::new();
        let mut stack = vec![employee.employee_id.clone()];

        while let Some(id) = stack.pop() {
            if !visited.insert(id.clone()) {
                warn!("Employee {} reached twice, hierarchy is not a tree", id);
                continue;
            }

            // Vanished between levels, nothing below it to count
            let Some(node) = self.gateway.get_by_id_with_reports(&id).await? else {
                continue;
            };

            number_of_reports += node.direct_reports.len() as u64;
            stack.extend(node.direct_reports.into_iter().map(|r| r.employee_id));
        }

        debug!("Employee has {} reports", number_of_reports);

        Ok(ReportingStructure {
            employee,
            number_of_reports,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::service::tests::{new_employee, service};

    #[tokio::test]
    async fn test_leaf_has_no_reports() {
        let (service, _) = service();
        let paul = service
            .create(new_employee("Paul", "McCartney", &[]))
            .await
            .unwrap();

        let structure = service.get_reporting_structure(paul.clone()).await.unwrap();
        assert_eq!(structure.number_of_reports, 0);
        assert_eq!(structure.employee, paul);
    }

    #[tokio::test]
    async fn test_counts_indirect_reports() {
        let (service, _) = service();
        let r3 = service.create(new_employee("R", "3", &[])).await.unwrap();
        let r2 = service.create(new_employee("R", "2", &[])).await.unwrap();
        let r1 = service.create(new_employee("R", "1", &[&r3])).await.unwrap();
        let root = service
            .create(new_employee("Root", "Boss", &[&r1, &r2]))
            .await
            .unwrap();

        let structure = service.get_reporting_structure(root).await.unwrap();
        assert_eq!(structure.number_of_reports, 3);

        let structure = service.get_reporting_structure(r1).await.unwrap();
        assert_eq!(structure.number_of_reports, 1);
    }

    #[tokio::test]
    async fn test_beatles_hierarchy() {
        let (service, _) = service();
        let pete = service.create(new_employee("Pete", "Best", &[])).await.unwrap();
        let george = service
            .create(new_employee("George", "Harrison", &[]))
            .await
            .unwrap();
        let ringo = service
            .create(new_employee("Ringo", "Starr", &[&pete, &george]))
            .await
            .unwrap();
        let paul = service
            .create(new_employee("Paul", "McCartney", &[]))
            .await
            .unwrap();
        let john = service
            .create(new_employee("John", "Lennon", &[&paul, &ringo]))
            .await
            .unwrap();

        let structure = service.get_reporting_structure(john).await.unwrap();
        assert_eq!(structure.number_of_reports, 4);
        assert_eq!(structure.employee.first_name, "John");
    }

    #[tokio::test]
    async fn test_repeated_queries_agree() {
        let (service, _) = service();
        let report = service.create(new_employee("A", "A", &[])).await.unwrap();
        let boss = service
            .create(new_employee("B", "B", &[&report]))
            .await
            .unwrap();

        let first = service.get_reporting_structure(boss.clone()).await.unwrap();
        let second = service.get_reporting_structure(boss).await.unwrap();
        assert_eq!(first.number_of_reports, 1);
        assert_eq!(first.number_of_reports, second.number_of_reports);
    }

    #[tokio::test]
    async fn test_cycle_terminates() {
        let (service, _) = service();
        let a = service.create(new_employee("A", "A", &[])).await.unwrap();
        let b = service.create(new_employee("B", "B", &[&a])).await.unwrap();

        // A now manages its own manager
        let a = service.get_by_id(&a.employee_id).await.unwrap();
        let a = service
            .replace(&a, Some(new_employee("A", "A", &[&b])))
            .await
            .unwrap()
            .unwrap();

        let structure = service.get_reporting_structure(a).await.unwrap();
        assert_eq!(structure.number_of_reports, 2);
    }

    #[tokio::test]
    async fn test_deep_chain() {
        let (service, _) = service();
        let mut below = service.create(new_employee("E", "0", &[])).await.unwrap();
        for depth in 1..=200 {
            below = service
                .create(new_employee("E", &depth.to_string(), &[&below]))
                .await
                .unwrap();
        }

        let structure = service.get_reporting_structure(below).await.unwrap();
        assert_eq!(structure.number_of_reports, 200);
    }
}
