use figment::providers::Serialized;
use staff_reports::Config;
use std::path::PathBuf;

#[test]
fn defaults_point_at_local_store_and_artifacts() {
    let cfg: Config = Config::figment()
        .extract()
        .expect("default config must extract");

    assert_eq!(cfg.basic.database_url, "sqlite:staff.db");
    assert_eq!(cfg.ingest.csv_dir, PathBuf::from("csv"));
    assert_eq!(
        cfg.api.artifacts.top_resources,
        PathBuf::from("top_material_resources.json")
    );
}

#[test]
fn layered_values_override_defaults() {
    let cfg: Config = Config::figment()
        .merge(Serialized::default("api.listen_addr", "127.0.0.1:9000"))
        .merge(Serialized::default(
            "api.artifacts.department_cost",
            "/srv/reports/cost.json",
        ))
        .extract()
        .expect("config must extract");

    assert_eq!(cfg.api.listen_addr, "127.0.0.1:9000");
    assert_eq!(
        cfg.api.artifacts.department_cost,
        PathBuf::from("/srv/reports/cost.json")
    );
    assert_eq!(
        cfg.api.artifacts.average_salary,
        PathBuf::from("average_salary_by_department.json")
    );
}
