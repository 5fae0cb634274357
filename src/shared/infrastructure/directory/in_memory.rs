use crate::shared::infrastructure::directory::{
    Employee, EmployeeDirectory, ScheduleLookup, ShiftSchedule,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDirectory {
    employees: RwLock<HashMap<String, Employee>>,
    shifts: RwLock<Vec<ShiftSchedule>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn upsert_employee(&self, employee: Employee) {
        self.employees
            .write()
            .await
            .insert(employee.id.clone(), employee);
    }

    pub async fn add_shift(&self, shift: ShiftSchedule) {
        self.shifts.write().await.push(shift);
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryDirectory {
    async fn get_employee(&self, employee_id: &str) -> anyhow::Result<Option<Employee>> {
        Ok(self.employees.read().await.get(employee_id).cloned())
    }

    async fn list_employees(&self, organization_id: Option<&str>) -> anyhow::Result<Vec<Employee>> {
        let employees = self.employees.read().await;
        let mut matching: Vec<Employee> = employees
            .values()
            .filter(|e| organization_id.is_none_or(|org| e.organization_id == org))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matching)
    }
}

#[async_trait]
impl ScheduleLookup for InMemoryDirectory {
    async fn shifts_on(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Vec<ShiftSchedule>> {
        let shifts = self.shifts.read().await;
        Ok(shifts
            .iter()
            .filter(|s| s.employee_id == employee_id && s.date == date)
            .cloned()
            .collect())
    }
}
