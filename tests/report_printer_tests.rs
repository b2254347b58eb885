mod common;

use common::Fixture;
use staff_reports::db::Table;
use staff_reports::service::report_printer::{ReportKind, print_all, print_report, render};
use staff_reports::service::reports::{DepartmentCost, Reports};

#[test]
fn render_lays_out_headers_and_rows() {
    let rows = vec![
        DepartmentCost {
            department: "Engineering".to_string(),
            total_cost: 1500.0,
        },
        DepartmentCost {
            department: "Finance".to_string(),
            total_cost: 42.5,
        },
    ];
    let table = render(&rows);

    assert!(table.contains("DEPARTMENT"));
    assert!(table.contains("TOTAL_COST"));
    assert!(table.contains("Engineering"));
    assert!(table.contains("1500.00"));
    assert!(table.contains("42.50"));
}

#[test]
fn render_of_empty_result_keeps_headers() {
    let table = render::<DepartmentCost>(&[]);
    assert!(table.contains("DEPARTMENT"));
}

#[tokio::test]
async fn print_report_writes_title_and_table() {
    let fx = Fixture::new().await;
    fx.load(
        Table::Resources,
        "resource_id,project_id,resource_description,resource_type,quantity_used,usage_date\n\
         1,1,Cement,Material,10,2024-01-01\n",
    )
    .await;

    let reports = Reports::new(&fx.storage);
    let mut out = Vec::new();
    print_report(&reports, ReportKind::TopMaterialResources, &mut out)
        .await
        .expect("write failed");

    let text = String::from_utf8(out).expect("output was not utf-8");
    assert!(text.contains(ReportKind::TopMaterialResources.title()));
    assert!(text.contains("Cement"));
}

#[tokio::test]
async fn failing_query_produces_no_output_and_later_reports_still_run() {
    let fx = Fixture::new().await;
    sqlx::query("DROP TABLE salary_history")
        .execute(fx.storage.pool())
        .await
        .expect("drop failed");

    let reports = Reports::new(&fx.storage);
    let mut out = Vec::new();
    print_all(&reports, &mut out).await.expect("write failed");

    let text = String::from_utf8(out).expect("output was not utf-8");
    assert!(!text.contains(ReportKind::AverageSalaryByDepartment.title()));
    for kind in &ReportKind::ALL[1..] {
        assert!(text.contains(kind.title()), "missing {kind:?}");
    }
}
