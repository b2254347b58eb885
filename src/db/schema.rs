//! SQL DDL for the staff store and the catalogue of loadable tables.
//! SQLite-first design; dates are ISO-8601 TEXT so they order lexically.

use std::fmt;

/// SQLite schema with:
/// - `INTEGER PRIMARY KEY` ids taken verbatim from the CSV snapshots
/// - declared (not enforced) foreign keys between employees, dependents,
///   salary history, projects and resources
/// - CHECK constraints closing `projects.status` and `resources.resource_type`
/// - dates must be plain `YYYY-MM-DD` and amounts must be numeric, so a
///   malformed snapshot row fails the load instead of the reports
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    employee_id INTEGER PRIMARY KEY,
    employee_name TEXT NOT NULL,
    role_id INTEGER,
    department_id INTEGER,
    FOREIGN KEY (role_id) REFERENCES roles (role_id),
    FOREIGN KEY (department_id) REFERENCES departments (department_id)
);

CREATE TABLE IF NOT EXISTS roles (
    role_id INTEGER PRIMARY KEY,
    role_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS departments (
    department_id INTEGER PRIMARY KEY,
    department_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS dependents (
    dependent_id INTEGER PRIMARY KEY,
    employee_id INTEGER,
    dependent_name TEXT NOT NULL,
    birth_date TEXT NOT NULL CHECK (date(birth_date) = birth_date),
    gender TEXT NOT NULL,
    FOREIGN KEY (employee_id) REFERENCES employees (employee_id)
);

CREATE TABLE IF NOT EXISTS salary_history (
    history_id INTEGER PRIMARY KEY,
    employee_id INTEGER,
    salary REAL NOT NULL CHECK (typeof(salary) IN ('real', 'integer')),
    effective_date TEXT NOT NULL CHECK (date(effective_date) = effective_date),
    FOREIGN KEY (employee_id) REFERENCES employees (employee_id)
);

CREATE TABLE IF NOT EXISTS projects (
    project_id INTEGER PRIMARY KEY,
    project_name TEXT NOT NULL,
    description TEXT,
    start_date TEXT CHECK (start_date IS NULL OR date(start_date) = start_date),
    completion_date TEXT CHECK (completion_date IS NULL OR date(completion_date) = completion_date),
    responsible_employee_id INTEGER,
    cost REAL CHECK (typeof(cost) IN ('real', 'integer', 'null')),
    status TEXT CHECK (status IN ('Planning', 'In-Execution', 'Completed', 'Cancelled')),
    FOREIGN KEY (responsible_employee_id) REFERENCES employees (employee_id)
);

CREATE TABLE IF NOT EXISTS resources (
    resource_id INTEGER PRIMARY KEY,
    project_id INTEGER NOT NULL,
    resource_description TEXT,
    resource_type TEXT NOT NULL CHECK (resource_type IN ('Financial', 'Material', 'Human')),
    quantity_used REAL CHECK (typeof(quantity_used) IN ('real', 'integer', 'null')),
    usage_date TEXT CHECK (usage_date IS NULL OR date(usage_date) = usage_date),
    FOREIGN KEY (project_id) REFERENCES projects (project_id)
);
"#;

/// The seven tables populated from CSV snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Roles,
    Departments,
    Dependents,
    Employees,
    SalaryHistory,
    Projects,
    Resources,
}

impl Table {
    /// Order in which the ingestion job loads the snapshots.
    pub const LOAD_ORDER: [Table; 7] = [
        Table::Roles,
        Table::Departments,
        Table::Dependents,
        Table::Employees,
        Table::SalaryHistory,
        Table::Projects,
        Table::Resources,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Roles => "roles",
            Table::Departments => "departments",
            Table::Dependents => "dependents",
            Table::Employees => "employees",
            Table::SalaryHistory => "salary_history",
            Table::Projects => "projects",
            Table::Resources => "resources",
        }
    }

    /// File name of the snapshot inside the CSV directory.
    pub fn csv_file(self) -> &'static str {
        match self {
            Table::Roles => "roles.csv",
            Table::Departments => "departments.csv",
            Table::Dependents => "dependents.csv",
            Table::Employees => "employees.csv",
            Table::SalaryHistory => "salary_history.csv",
            Table::Projects => "projects.csv",
            Table::Resources => "resources.csv",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Roles => &["role_id", "role_name"],
            Table::Departments => &["department_id", "department_name"],
            Table::Dependents => &[
                "dependent_id",
                "employee_id",
                "dependent_name",
                "birth_date",
                "gender",
            ],
            Table::Employees => &["employee_id", "employee_name", "role_id", "department_id"],
            Table::SalaryHistory => &["history_id", "employee_id", "salary", "effective_date"],
            Table::Projects => &[
                "project_id",
                "project_name",
                "description",
                "start_date",
                "completion_date",
                "responsible_employee_id",
                "cost",
                "status",
            ],
            Table::Resources => &[
                "resource_id",
                "project_id",
                "resource_description",
                "resource_type",
                "quantity_used",
                "usage_date",
            ],
        }
    }

    pub fn has_column(self, column: &str) -> bool {
        self.columns().iter().any(|c| *c == column)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
