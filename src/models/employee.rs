//! Employee model and related types.
//!
//! This module defines the Employee struct and the enums describing
//! an employee's status and gender.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment status of an employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed.
    #[default]
    Active,
    /// On the books but not currently working.
    Inactive,
    /// Employment has ended.
    Terminated,
}

/// Gender as recorded on the employee file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    #[serde(rename = "M")]
    Male,
    /// Female.
    #[serde(rename = "F")]
    Female,
    /// Other.
    #[serde(rename = "O")]
    Other,
}

/// An employee and their current assignment.
///
/// `department`, `job_title` and `manager` are optional references that are
/// cleared when the referenced row is deleted. Managers form a forest: the
/// chain of `manager` links never leads back to the employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier (0 until inserted).
    #[serde(default)]
    pub id: u64,
    /// Unique business key (e.g. "EMP-0042").
    pub employee_id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Date of birth, if known.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Gender, if recorded.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Current department.
    #[serde(default)]
    pub department: Option<u64>,
    /// Current job title.
    #[serde(default)]
    pub job_title: Option<u64>,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Current salary.
    pub salary: Decimal,
    /// Employment status.
    #[serde(default)]
    pub status: EmployeeStatus,
    /// The employee's manager.
    #[serde(default)]
    pub manager: Option<u64>,
    /// When the row was created.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    /// Optimistic-concurrency version, bumped by the store on every update.
    #[serde(default)]
    pub version: u64,
}

impl Employee {
    /// Returns "first last".
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_records::models::{Employee, EmployeeStatus};
    /// use chrono::{NaiveDate, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     employee_id: "EMP-001".to_string(),
    ///     first_name: "Ada".to_string(),
    ///     last_name: "Lovelace".to_string(),
    ///     email: "ada@example.com".to_string(),
    ///     phone: String::new(),
    ///     address: String::new(),
    ///     date_of_birth: None,
    ///     gender: None,
    ///     department: None,
    ///     job_title: None,
    ///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
    ///     salary: Decimal::new(9000000, 2),
    ///     status: EmployeeStatus::Active,
    ///     manager: None,
    ///     created_at: Utc::now(),
    ///     updated_at: Utc::now(),
    ///     version: 0,
    /// };
    /// assert_eq!(employee.full_name(), "Ada Lovelace");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee is currently active.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
