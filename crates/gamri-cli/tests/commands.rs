//! Runs the `gamri` binary against a throwaway project directory.

use std::path::Path;

use assert_cmd::Command;
use assert_cmd::assert::Assert;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

const CASES_SQL: &str = r#"
CREATE TABLE cases (
    "회사명" TEXT,
    "결정 연도" TEXT,
    "관련계정과목" TEXT,
    "위반유형" TEXT,
    "지적사항요약" TEXT
);
INSERT INTO cases VALUES ('가나', '2021년', '재고자산', '과대계상', '재고 실사 누락');
INSERT INTO cases VALUES ('다라', '2022', '매출', '횡령', '대표이사 자금유용');
INSERT INTO cases VALUES ('마바', '2020', '재고자산', '과대계상', '저가법 미적용');
INSERT INTO cases VALUES ('사아', '2019', '이연법인세자산', '과소계상', '회수가능성 검토 누락');
INSERT INTO cases VALUES ('자차', NULL, '현금', NULL, NULL);
"#;

const INVENTORY: &str = "📦 재고자산 (Inventory)";

async fn project_with_cases() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let db = libsql::Builder::new_local(dir.path().join("audit_database.db"))
        .build()
        .await
        .unwrap();
    db.connect().unwrap().execute_batch(CASES_SQL).await.unwrap();
    dir
}

#[allow(deprecated)]
fn gamri(project: &Path, args: &[&str]) -> Assert {
    let mut command = Command::cargo_bin("gamri").expect("binary");
    for (key, _) in std::env::vars().filter(|(key, _)| key.starts_with("GAMRI_")) {
        command.env_remove(key);
    }
    command
        .current_dir(project)
        .env("XDG_CONFIG_HOME", project)
        .env("HOME", project)
        .arg("--project")
        .arg(project)
        .args(args)
        .assert()
}

fn json(assert: Assert) -> Value {
    let output = assert.success().get_output().clone();
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[tokio::test]
async fn overview_reports_headline_figures() {
    let project = project_with_cases().await;
    let overview = json(gamri(project.path(), &["overview"]));

    assert_eq!(overview["total_cases"], 4);
    assert_eq!(overview["top_category"], INVENTORY);
    assert_eq!(overview["top_violation"], "과대계상");
    assert_eq!(overview["taxonomy_version"], "fine-v2");
    assert_eq!(overview["years"][0]["year"], "2019");
}

#[tokio::test]
async fn search_lists_most_recent_first_and_honors_top() {
    let project = project_with_cases().await;
    let response = json(gamri(project.path(), &["search", "누락", "--top", "1"]));

    assert_eq!(response["total_results"], 2);
    let results = response["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["label"], format!("[{INVENTORY}] 가나 - 재고자산"));
    assert_eq!(results[0]["decision_year"], "2021");
}

#[tokio::test]
async fn show_returns_selected_case() {
    let project = project_with_cases().await;
    let label = "[🚨 횡령·부정 (Fraud)] 다라 - 매출";
    let case = json(gamri(project.path(), &["show", label]));
    assert_eq!(case["summary"], "대표이사 자금유용");
}

#[tokio::test]
async fn show_picks_among_search_hits_when_labels_repeat() {
    let project = project_with_cases().await;
    let db = libsql::Builder::new_local(project.path().join("audit_database.db"))
        .build()
        .await
        .unwrap();
    db.connect()
        .unwrap()
        .execute(
            "INSERT INTO cases VALUES ('가나', '2018', '재고자산', '과대계상', '창고 재고 은닉')",
            (),
        )
        .await
        .unwrap();
    drop(db);

    let label = format!("[{INVENTORY}] 가나 - 재고자산");
    let first = json(gamri(project.path(), &["show", label.as_str()]));
    assert_eq!(first["summary"], "재고 실사 누락");

    let found = json(gamri(project.path(), &["show", label.as_str(), "--keyword", "은닉"]));
    assert_eq!(found["summary"], "창고 재고 은닉");
    assert_eq!(found["decision_year"], "2018");

    gamri(project.path(), &["show", label.as_str(), "--keyword", "횡령"])
        .failure()
        .stderr(predicate::str::contains(label.as_str()));
}

#[tokio::test]
async fn profile_and_trend_for_one_category() {
    let project = project_with_cases().await;
    let profile = json(gamri(project.path(), &["profile", INVENTORY]));
    assert_eq!(profile["total_cases"], 2);
    assert_eq!(profile["top_violations"][0]["label"], "과대계상");

    let trend = json(gamri(project.path(), &["trend", "--category", INVENTORY]));
    assert_eq!(trend.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_category_lists_known_labels() {
    let project = project_with_cases().await;
    gamri(project.path(), &["profile", "없는 분류"])
        .failure()
        .stderr(predicate::str::contains("gamri error: Unknown category: 없는 분류"))
        .stderr(predicate::str::contains(INVENTORY));
}

#[tokio::test]
async fn report_dry_run_prints_prompt() {
    let project = project_with_cases().await;
    let report = json(gamri(project.path(), &["report", INVENTORY, "--dry-run"]));

    assert_eq!(report["kind"], "guide");
    assert_eq!(report["case_count"], 2);
    assert_eq!(report["text"], Value::Null);
    let prompt = report["prompt"].as_str().unwrap();
    assert!(prompt.contains("총 2건. 최빈 유형: 과대계상"));
    assert!(prompt.contains("- [2021] 가나 (과대계상): 재고 실사 누락\n- [2020] 마바"));
}

#[tokio::test]
async fn report_without_api_key_is_an_error() {
    let project = project_with_cases().await;
    gamri(project.path(), &["report", INVENTORY])
        .failure()
        .stderr(predicate::str::contains("not configured"));
}

#[tokio::test]
async fn ask_dry_run_uses_keyword_subset() {
    let project = project_with_cases().await;
    let report = json(gamri(
        project.path(),
        &["ask", "주요 위험은?", "--keyword", "횡령", "--dry-run"],
    ));
    assert_eq!(report["kind"], "question");
    assert_eq!(report["case_count"], 1);
}

#[test]
fn missing_store_is_no_data_but_activity_works() {
    let project = tempfile::tempdir().unwrap();

    gamri(project.path(), &["overview"])
        .failure()
        .stderr(predicate::str::contains("no case data"));
    assert!(!project.path().join("audit_database.db").exists());

    let summary = json(gamri(project.path(), &["activity"]));
    assert_eq!(summary["visits"], 2);
    assert_eq!(summary["failed_writes"], 0);
}

#[tokio::test]
async fn activity_counts_actions_but_not_taxonomy() {
    let project = project_with_cases().await;
    json(gamri(project.path(), &["overview"]));
    json(gamri(project.path(), &["search", "재고"]));
    json(gamri(project.path(), &["taxonomy"]));

    let summary = json(gamri(project.path(), &["activity"]));
    assert_eq!(summary["visits"], 3);
    let actions = summary["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 3);
    assert!(actions.iter().all(|entry| entry["count"] == 1));
    assert!(project.path().join(".gamri").join("activity.db").exists());
}

#[test]
fn taxonomy_schema_is_json_schema() {
    let project = tempfile::tempdir().unwrap();
    let schema = json(gamri(project.path(), &["taxonomy", "--schema"]));
    assert!(schema["properties"]["groups"].is_object());
}

#[tokio::test]
async fn coarse_preset_from_project_config() {
    let project = project_with_cases().await;
    let config_dir = project.path().join(".gamri");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[taxonomy]\npreset = \"coarse\"\n\n[store]\nyear_order = \"ascending\"\n",
    )
    .unwrap();

    let response = json(gamri(project.path(), &["search"]));
    let years: Vec<&str> = response["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|case| case["decision_year"].as_str().unwrap())
        .collect();
    assert_eq!(years, vec!["2019", "2020", "2021", "2022"]);

    let overview = json(gamri(project.path(), &["overview"]));
    assert_eq!(overview["taxonomy_version"], "coarse-v1");
}
