#[cfg(test)]
mod integration_tests {
    use crate::handlers::reports::REPORT_FAILED_MESSAGE;
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{
        mock_row, setup_test_app_with, setup_test_server, transaction_log,
    };
    use axum::http::{StatusCode, header};
    use axum_test::TestServer;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Statement, Transaction};
    use std::sync::Arc;
    use serde_json::Value;

    fn project_expense_rows() -> Vec<crate::test_utils::test_utils::MockRow> {
        vec![
            mock_row(&[
                ("project_name", "Köprü Onarımı".into()),
                ("total_expense", 1247500.5f64.into()),
                ("expense_count", 5i64.into()),
            ]),
            mock_row(&[
                ("project_name", "Tünel, Etap \"B\"".into()),
                ("total_expense", 655000.0f64.into()),
                ("expense_count", 4i64.into()),
            ]),
        ]
    }

    #[tokio::test]
    async fn test_health_check() {
        let (server, _db) = setup_test_server(vec![]);

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
    }

    #[tokio::test]
    async fn test_list_reports() {
        let (server, _db) = setup_test_server(vec![]);

        let response = server.get("/api/v1/reports").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let reports = body["data"].as_array().unwrap();
        assert_eq!(reports.len(), 15);
        let monthly = reports
            .iter()
            .find(|r| r["id"] == "monthly-attendance")
            .unwrap();
        assert_eq!(monthly["kind"], "procedure");
        assert_eq!(monthly["parameters"][1]["max"], 12);
    }

    #[tokio::test]
    async fn test_project_expenses_report() {
        let (server, _db) = setup_test_server(vec![project_expense_rows()]);

        let response = server.get("/api/v1/reports/project-expenses").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["row_count"], 2);
        assert_eq!(body["report"]["id"], "project-expenses");

        let data = body["data"].as_array().unwrap();
        assert_eq!(data[0]["project_name"], "Köprü Onarımı");
        assert!(data[0]["total_expense"].is_number());
        assert_eq!(data[0]["total_expense"].as_f64(), Some(1247500.5));

        let query = body["query"].as_str().unwrap();
        assert!(query.contains("JOIN"));
        assert!(query.contains("GROUP BY"));
    }

    #[tokio::test]
    async fn test_legacy_route_serves_the_same_report() {
        let (server, _db) = setup_test_server(vec![project_expense_rows()]);

        let response = server.get("/reports/project-expenses").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_procedure_report_binds_typed_parameters() {
        let rows = vec![mock_row(&[
            ("employee_name", "Ayşe Demir".into()),
            ("month_name", "December 2025".into()),
            ("days_present", 20i64.into()),
        ])];
        let (server, db) = setup_test_server(vec![rows]);

        let response = server.get("/api/v1/reports/monthly-attendance/2025/12").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["parameters"], serde_json::json!([2025, 12]));
        assert_eq!(
            body["query"],
            "SELECT * FROM sp_monthly_attendance_report($1, $2)"
        );

        assert_eq!(
            transaction_log(server, db),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                "SELECT * FROM sp_monthly_attendance_report($1, $2)",
                [2025i32.into(), 12i32.into()],
            )]
        );
    }

    #[tokio::test]
    async fn test_view_report_returns_definition() {
        let (server, db) = setup_test_server(vec![vec![]]);

        let response = server.get("/api/v1/reports/project-cost-analysis").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["row_count"], 0);
        assert_eq!(body["data"], serde_json::json!([]));
        assert!(
            body["query"]
                .as_str()
                .unwrap()
                .starts_with("CREATE OR REPLACE VIEW vw_project_cost_summary")
        );
        assert_eq!(
            transaction_log(server, db),
            vec![Transaction::one(Statement::from_string(
                DatabaseBackend::Postgres,
                "SELECT * FROM vw_project_cost_summary",
            ))]
        );
    }

    #[tokio::test]
    async fn test_unknown_report_is_not_found() {
        let (server, db) = setup_test_server(vec![]);

        for path in [
            "/api/v1/reports/drop-everything",
            "/api/v1/reports/project-expenses/2025",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            let body: Value = response.json();
            assert_eq!(body["code"], "REPORT_NOT_FOUND");
            assert_eq!(body["success"], false);
        }
        // Nothing reached the database
        assert!(transaction_log(server, db).is_empty());
    }

    #[tokio::test]
    async fn test_invalid_parameters_are_rejected() {
        let (server, db) = setup_test_server(vec![]);

        for path in [
            "/api/v1/reports/monthly-attendance/2025/13",
            "/api/v1/reports/monthly-attendance/2025",
            "/api/v1/reports/monthly-attendance/2025/dec",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(body["code"], "INVALID_PARAMETERS");
        }
        assert!(transaction_log(server, db).is_empty());
    }

    #[tokio::test]
    async fn test_database_failure_returns_generic_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "password authentication failed for user \"report\"".to_string(),
            )])
            .into_connection();
        let server = TestServer::new(setup_test_app_with(Arc::new(db), 10)).unwrap();

        let response = server.get("/api/v1/reports/budget-alerts").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["code"], "REPORT_FAILED");
        assert_eq!(body["error"], REPORT_FAILED_MESSAGE);
        assert!(!response.text().contains("password"));
    }

    #[tokio::test]
    async fn test_csv_export() {
        let (server, _db) = setup_test_server(vec![project_expense_rows()]);

        let response = server
            .get("/api/v1/reports/project-expenses")
            .add_query_param("format", "csv")
            .await;

        response.assert_status(StatusCode::OK);
        let content_type = response.header(header::CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().starts_with("text/csv"));
        let disposition = response.header(header::CONTENT_DISPOSITION);
        let disposition = disposition.to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"project-expenses_"));
        assert!(disposition.ends_with(".csv\""));

        let csv = response.text();
        let lines: Vec<&str> = csv.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 3);
        // Mock rows come back with sorted columns
        assert_eq!(lines[0], "expense_count,project_name,total_expense");
        assert_eq!(lines[2], "4,\"Tünel, Etap \"\"B\"\"\",655000");
    }

    #[tokio::test]
    async fn test_report_audit_keeps_recent_executions() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([project_expense_rows(), project_expense_rows()])
            .into_connection();
        let server = TestServer::new(setup_test_app_with(Arc::new(db), 2)).unwrap();

        server.get("/api/v1/reports/project-expenses").await;
        server.get("/api/v1/reports/no-such-report").await;
        server.get("/api/v1/reports/project-expenses").await;

        let response = server.get("/api/v1/report-audit").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        let entries = body["data"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["report_path"], "no-such-report");
        assert_eq!(entries[0]["outcome"], "REPORT_NOT_FOUND");
        assert_eq!(entries[1]["report_path"], "project-expenses");
        assert_eq!(entries[1]["outcome"], "OK");
        assert_eq!(entries[1]["row_count"], 2);
        assert_eq!(entries[1]["kind"], "query");
    }
}
