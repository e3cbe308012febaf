//! Integration tests for the refresh loop
//!
//! A wiremock server plays the list source, the probe targets and the relay.

mod support;

use std::sync::Arc;
use std::time::Duration;
use support::{closed_address, create_test_config, CollectingReporter};
use url_runner::runner::{IterationOutcome, Runner};
use url_runner::RunnerError;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_list(mock_server: &MockServer, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path("/list.txt"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(mock_server)
        .await;
}

fn create_runner(mock_server: &MockServer, reporter: &Arc<CollectingReporter>) -> Runner {
    let config = create_test_config(
        &format!("{}/list.txt", mock_server.uri()),
        &format!("{}/relay", mock_server.uri()),
    );
    Runner::new(&config, reporter.clone()).expect("Failed to create runner")
}

#[tokio::test]
async fn test_full_iteration() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_list(
        &mock_server,
        200,
        format!(
            "{base}/json\r\n{base}/blocked\n\n   {base}/html   \n",
            base = base
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":1}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blocked"))
        .respond_with(ResponseTemplate::new(200).set_body_string("captcha"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex("^/relay/.*/blocked$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"via":"relay"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex("^/relay/.*/html$"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reporter = Arc::new(CollectingReporter::default());
    let runner = create_runner(&mock_server, &reporter);

    let outcome = runner.run_iteration().await.expect("iteration failed");

    let summary = match outcome {
        IterationOutcome::Completed(summary) => summary,
        IterationOutcome::EmptyList => panic!("list should not be empty"),
    };

    assert_eq!(summary.url_count, 3);
    assert_eq!(summary.counts.direct_ok, 1);
    assert_eq!(summary.counts.proxy_ok, 1);
    assert_eq!(summary.counts.failed, 1);
    assert_eq!(summary.workers, 4);

    assert_eq!(reporter.probes().len(), 3);
    assert_eq!(reporter.pass_count(), 1);
    assert_eq!(reporter.empty_list_count(), 0);
}

#[tokio::test]
async fn test_empty_list_skips_pool() {
    let mock_server = MockServer::start().await;

    mount_list(&mock_server, 200, String::new()).await;

    Mock::given(method("GET"))
        .and(path_regex("^/relay/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let reporter = Arc::new(CollectingReporter::default());
    let runner = create_runner(&mock_server, &reporter);

    let outcome = runner.run_iteration().await.expect("iteration failed");

    assert!(matches!(outcome, IterationOutcome::EmptyList));
    assert_eq!(reporter.empty_list_count(), 1);
    assert_eq!(reporter.pass_count(), 0);
    assert!(reporter.probes().is_empty());
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_lines_only_is_empty() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, 200, "\r\n  \n\t\n".to_string()).await;

    let reporter = Arc::new(CollectingReporter::default());
    let runner = create_runner(&mock_server, &reporter);

    let outcome = runner.run_iteration().await.unwrap();
    assert!(matches!(outcome, IterationOutcome::EmptyList));
}

#[tokio::test]
async fn test_list_body_used_regardless_of_status() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_list(&mock_server, 404, format!("{}/json\n", base)).await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reporter = Arc::new(CollectingReporter::default());
    let runner = create_runner(&mock_server, &reporter);

    let urls = runner.fetch_list().await.unwrap();
    assert_eq!(urls, vec![format!("{}/json", base)]);

    let outcome = runner.run_iteration().await.unwrap();
    assert!(matches!(outcome, IterationOutcome::Completed(_)));
}

#[tokio::test]
async fn test_unreachable_source_is_iteration_error() {
    let source = format!("{}/list.txt", closed_address());
    let config = create_test_config(&source, "http://127.0.0.1:9");

    let reporter = Arc::new(CollectingReporter::default());
    let runner = Runner::new(&config, reporter.clone()).unwrap();

    let result = runner.run_iteration().await;

    match result {
        Err(RunnerError::ListSource { url, .. }) => assert_eq!(url, source),
        other => panic!("expected ListSource error, got {:?}", other),
    }
    assert!(reporter.probes().is_empty());
}

#[tokio::test]
async fn test_loop_refetches_after_empty_list() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, 200, String::new()).await;

    let reporter = Arc::new(CollectingReporter::default());
    let runner = create_runner(&mock_server, &reporter);

    let result = tokio::time::timeout(Duration::from_millis(500), runner.run()).await;

    assert!(result.is_err(), "run() must never return");
    assert!(reporter.empty_list_count() >= 2);
    assert_eq!(reporter.pass_count(), 0);
}

#[tokio::test]
async fn test_loop_survives_iteration_errors() {
    let source = format!("{}/list.txt", closed_address());
    let config = create_test_config(&source, "http://127.0.0.1:9");

    let reporter = Arc::new(CollectingReporter::default());
    let runner = Runner::new(&config, reporter.clone()).unwrap();

    let result = tokio::time::timeout(Duration::from_millis(500), runner.run()).await;

    assert!(result.is_err(), "run() must never return");
    assert!(reporter.error_count() >= 2);
}

#[tokio::test]
async fn test_loop_runs_consecutive_passes() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    mount_list(&mock_server, 200, format!("{}/json", base)).await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let reporter = Arc::new(CollectingReporter::default());
    let runner = create_runner(&mock_server, &reporter);

    let _ = tokio::time::timeout(Duration::from_millis(500), runner.run()).await;

    assert!(reporter.pass_count() >= 2);
    assert!(reporter
        .probes()
        .iter()
        .all(|r| r.url == format!("{}/json", base)));
}
