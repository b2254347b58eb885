use crate::db::models::{ProjectStatus, ResourceType};
use crate::db::sqlite::{SqlitePool, Storage};
use crate::error::ReportError;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Latest salary row per employee. Ties on the effective date resolve to the
/// highest `history_id`.
const CURRENT_SALARY_CTE: &str = r#"
current_salary AS (
    SELECT employee_id, salary, effective_date
    FROM (
        SELECT
            employee_id,
            salary,
            effective_date,
            ROW_NUMBER() OVER (
                PARTITION BY employee_id
                ORDER BY effective_date DESC, history_id DESC
            ) AS rn
        FROM salary_history
    )
    WHERE rn = 1
)"#;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CurrentSalary {
    pub employee_id: i64,
    pub salary: f64,
    pub effective_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DepartmentSalary {
    pub department: String,
    pub average_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ResourceUsage {
    pub resource: Option<String>,
    pub total_quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DepartmentCost {
    pub department: String,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ProjectInExecution {
    pub project_name: String,
    pub cost: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub responsible: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ProjectDependents {
    pub project: String,
    pub total_dependents: i64,
}

/// The fixed analytical queries over a loaded store.
#[derive(Clone)]
pub struct Reports {
    pool: SqlitePool,
}

impl Reports {
    pub fn new(storage: &Storage) -> Self {
        Self {
            pool: storage.pool().clone(),
        }
    }

    /// One row per employee with salary history: the row with the latest date.
    pub async fn current_salaries(&self) -> Result<Vec<CurrentSalary>, ReportError> {
        let sql = format!(
            "WITH {CURRENT_SALARY_CTE}
            SELECT employee_id, salary, effective_date
            FROM current_salary
            ORDER BY employee_id"
        );
        let rows = sqlx::query_as::<_, CurrentSalary>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Average current salary per department, over employees responsible for
    /// at least one completed project. Each employee counts once.
    pub async fn average_salary_by_department(
        &self,
    ) -> Result<Vec<DepartmentSalary>, ReportError> {
        let sql = format!(
            "WITH {CURRENT_SALARY_CTE}
            SELECT
                d.department_name AS department,
                AVG(cs.salary) AS average_salary
            FROM employees e
            JOIN departments d ON d.department_id = e.department_id
            JOIN current_salary cs ON cs.employee_id = e.employee_id
            WHERE EXISTS (
                SELECT 1 FROM projects p
                WHERE p.responsible_employee_id = e.employee_id
                  AND p.status = ?
            )
            GROUP BY d.department_id, d.department_name
            ORDER BY d.department_name"
        );
        let rows = sqlx::query_as::<_, DepartmentSalary>(&sql)
            .bind(ProjectStatus::Completed.as_str())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// The three material resources with the largest summed usage.
    pub async fn top_material_resources(&self) -> Result<Vec<ResourceUsage>, ReportError> {
        let rows = sqlx::query_as::<_, ResourceUsage>(
            r#"
            SELECT
                r.resource_description AS resource,
                TOTAL(r.quantity_used) AS total_quantity
            FROM resources r
            WHERE r.resource_type = ?
            GROUP BY r.resource_description
            ORDER BY total_quantity DESC, resource ASC
            LIMIT 3
            "#,
        )
        .bind(ResourceType::Material.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Summed cost of completed projects per department of the responsible employee.
    pub async fn cost_by_department(&self) -> Result<Vec<DepartmentCost>, ReportError> {
        let rows = sqlx::query_as::<_, DepartmentCost>(
            r#"
            SELECT
                d.department_name AS department,
                TOTAL(p.cost) AS total_cost
            FROM departments d
            JOIN employees e ON e.department_id = d.department_id
            JOIN projects p ON p.responsible_employee_id = e.employee_id
            WHERE p.status = ?
            GROUP BY d.department_id, d.department_name
            ORDER BY total_cost DESC
            "#,
        )
        .bind(ProjectStatus::Completed.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn projects_in_execution(&self) -> Result<Vec<ProjectInExecution>, ReportError> {
        let rows = sqlx::query_as::<_, ProjectInExecution>(
            r#"
            SELECT
                p.project_name,
                p.cost,
                p.start_date,
                p.completion_date,
                e.employee_name AS responsible
            FROM projects p
            JOIN employees e ON e.employee_id = p.responsible_employee_id
            WHERE p.status = ?
            ORDER BY p.project_id
            "#,
        )
        .bind(ProjectStatus::InExecution.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Project whose responsible employee has the most dependents.
    /// Projects led by employees without dependents count as zero.
    pub async fn most_dependents_project(
        &self,
    ) -> Result<Option<ProjectDependents>, ReportError> {
        let row = sqlx::query_as::<_, ProjectDependents>(
            r#"
            SELECT
                p.project_name AS project,
                COUNT(dp.dependent_id) AS total_dependents
            FROM projects p
            JOIN employees e ON e.employee_id = p.responsible_employee_id
            LEFT JOIN dependents dp ON dp.employee_id = e.employee_id
            GROUP BY p.project_id, p.project_name
            ORDER BY total_dependents DESC, p.project_id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
