use crate::error::ReportError;
use crate::service::reports::{
    DepartmentCost, DepartmentSalary, ProjectDependents, ProjectInExecution, ResourceUsage,
    Reports,
};
use std::io::{self, Write};
use tabled::{builder::Builder, settings::Style};
use tracing::error;

/// Rows that can be laid out as a text table.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn or_blank<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl TableRow for DepartmentSalary {
    const HEADERS: &'static [&'static str] = &["DEPARTMENT", "AVERAGE_SALARY"];

    fn cells(&self) -> Vec<String> {
        vec![self.department.clone(), money(self.average_salary)]
    }
}

impl TableRow for ResourceUsage {
    const HEADERS: &'static [&'static str] = &["RESOURCE", "TOTAL_QUANTITY"];

    fn cells(&self) -> Vec<String> {
        vec![or_blank(self.resource.as_ref()), self.total_quantity.to_string()]
    }
}

impl TableRow for DepartmentCost {
    const HEADERS: &'static [&'static str] = &["DEPARTMENT", "TOTAL_COST"];

    fn cells(&self) -> Vec<String> {
        vec![self.department.clone(), money(self.total_cost)]
    }
}

impl TableRow for ProjectInExecution {
    const HEADERS: &'static [&'static str] = &[
        "PROJECT_NAME",
        "COST",
        "START_DATE",
        "COMPLETION_DATE",
        "RESPONSIBLE",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.project_name.clone(),
            self.cost.map(money).unwrap_or_default(),
            or_blank(self.start_date),
            or_blank(self.completion_date),
            self.responsible.clone(),
        ]
    }
}

impl TableRow for ProjectDependents {
    const HEADERS: &'static [&'static str] = &["PROJECT", "TOTAL_DEPENDENTS"];

    fn cells(&self) -> Vec<String> {
        vec![self.project.clone(), self.total_dependents.to_string()]
    }
}

/// Render rows under their headers. An empty result still shows the header.
pub fn render<R: TableRow>(rows: &[R]) -> String {
    let mut builder = Builder::default();
    builder.push_record(R::HEADERS.iter().copied());
    for row in rows {
        builder.push_record(row.cells());
    }
    builder.build().with(Style::modern()).to_string()
}

/// The five fixed reports, in the order the job prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    AverageSalaryByDepartment,
    TopMaterialResources,
    CostByDepartment,
    ProjectsInExecution,
    MostDependentsProject,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::AverageSalaryByDepartment,
        ReportKind::TopMaterialResources,
        ReportKind::CostByDepartment,
        ReportKind::ProjectsInExecution,
        ReportKind::MostDependentsProject,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::AverageSalaryByDepartment => {
                "Average current salary of employees responsible for completed projects, by department"
            }
            ReportKind::TopMaterialResources => "Three most used material resources",
            ReportKind::CostByDepartment => "Total cost of completed projects, by department",
            ReportKind::ProjectsInExecution => "Projects in execution",
            ReportKind::MostDependentsProject => {
                "Project whose responsible employee has the most dependents"
            }
        }
    }

    /// Run the query and render its table.
    pub async fn run(self, reports: &Reports) -> Result<String, ReportError> {
        let table = match self {
            ReportKind::AverageSalaryByDepartment => {
                render(&reports.average_salary_by_department().await?)
            }
            ReportKind::TopMaterialResources => render(&reports.top_material_resources().await?),
            ReportKind::CostByDepartment => render(&reports.cost_by_department().await?),
            ReportKind::ProjectsInExecution => render(&reports.projects_in_execution().await?),
            ReportKind::MostDependentsProject => {
                let top: Vec<_> = reports.most_dependents_project().await?.into_iter().collect();
                render(&top)
            }
        };
        Ok(table)
    }
}

/// Write one report (heading plus table) to `out`.
///
/// A failing query is logged and nothing is written for it.
pub async fn print_report<W: Write>(
    reports: &Reports,
    kind: ReportKind,
    out: &mut W,
) -> io::Result<()> {
    match kind.run(reports).await {
        Ok(table) => {
            writeln!(out, "\n-> {}:\n", kind.title())?;
            writeln!(out, "{table}")
        }
        Err(e) => {
            error!(report = ?kind, error = %e, "failed to run query");
            Ok(())
        }
    }
}

/// Write all five reports in their fixed order.
pub async fn print_all<W: Write>(reports: &Reports, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n ···························· QUERIES ····························")?;
    for kind in ReportKind::ALL {
        print_report(reports, kind, out).await?;
    }
    Ok(())
}
