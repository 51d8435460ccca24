//! Staff members: employees and the managers they report to.

use serde::Deserialize;
use std::rc::Rc;

/// Capability set shared by every staff member.
pub trait Staff {
    fn id(&self) -> u32;

    fn name(&self) -> &str;

    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Employee {
    pub id: u32,

    #[serde(alias = "empName")]
    pub name: String,

    pub department: String,
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
        }
    }
}

impl Staff for Employee {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        format!(
            "{} is an employee works in the {} department.",
            self.name, self.department
        )
    }
}

/// A manager shares its employees with the registry; employees outlive
/// any single manager and may appear under several of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    pub id: u32,
    pub name: String,
    pub employees: Vec<Rc<Employee>>,
}

impl Manager {
    pub fn new(id: u32, name: impl Into<String>, employees: Vec<Rc<Employee>>) -> Self {
        Self {
            id,
            name: name.into(),
            employees,
        }
    }

    pub fn team_size(&self) -> usize {
        self.employees.len()
    }

    /// "Tarek manages aziz, Bilel, Chedli."
    pub fn manage(&self) -> String {
        if self.employees.is_empty() {
            return format!("{} manages nobody.", self.name);
        }
        let names: Vec<&str> = self.employees.iter().map(|e| e.name.as_str()).collect();
        format!("{} manages {}.", self.name, names.join(", "))
    }
}

impl Staff for Manager {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        format!(
            "{} is a manager and he has {} employees.",
            self.name,
            self.team_size()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn team() -> Vec<Rc<Employee>> {
        vec![
            Rc::new(Employee::new(1, "aziz", "Sys Operation")),
            Rc::new(Employee::new(2, "Bilel", "Medical")),
            Rc::new(Employee::new(3, "Chedli", "Development")),
        ]
    }

    #[test]
    fn employee_description_names_department() {
        let bilel = Employee::new(2, "Bilel", "Medical");
        assert_eq!(
            bilel.describe(),
            "Bilel is an employee works in the Medical department."
        );
    }

    #[test]
    fn manager_description_counts_team() {
        let tarek = Manager::new(4, "Tarek", team());
        assert_eq!(tarek.describe(), "Tarek is a manager and he has 3 employees.");
        assert_eq!(tarek.manage(), "Tarek manages aziz, Bilel, Chedli.");
    }

    #[test]
    fn manager_without_team_manages_nobody() {
        let solo = Manager::new(9, "Sami", Vec::new());
        assert_eq!(solo.describe(), "Sami is a manager and he has 0 employees.");
        assert_eq!(solo.manage(), "Sami manages nobody.");
    }

    #[test]
    fn employees_are_shared_not_copied() {
        let employees = team();
        let a = Manager::new(4, "Tarek", employees.clone());
        let b = Manager::new(5, "Ghofran", employees[..1].to_vec());
        assert!(Rc::ptr_eq(&a.employees[0], &b.employees[0]));
        assert_eq!(Rc::strong_count(&employees[0]), 3);
    }

    #[test]
    fn legacy_employee_field_name_is_accepted() {
        let emp: Employee = serde_json::from_str(
            r#"{ "id": 1, "empName": "aziz", "department": "Sys Operation" }"#,
        )
        .unwrap();
        assert_eq!(emp, Employee::new(1, "aziz", "Sys Operation"));
    }
}
