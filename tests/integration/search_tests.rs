//! Integration tests for the search pipeline
//!
//! These tests use wiremock to create mock HTTP servers and run real queries
//! end-to-end through the HTTP fetcher.

use std::time::{Duration, Instant};
use sumi_scout::config::{load_config, Config, SearchConfig};
use sumi_scout::search::{build_coordinator, Coordinator, SourceList};
use sumi_scout::state::SourceState;
use sumi_scout::ValidationError;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a short fetch timeout
fn create_test_config(fetch_timeout_ms: u64) -> Config {
    Config {
        search: SearchConfig {
            max_concurrent_fetches: 10,
            fetch_timeout_ms,
            max_results: 20,
        },
        ..Config::default()
    }
}

fn html_page(title: &str, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!(
            "<html><head><title>{}</title></head><body>{}</body></html>",
            title, body
        ))
        .insert_header("content-type", "text/html")
}

fn source(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).expect("Failed to build source URL")
}

fn coordinator(config: &Config, sources: Vec<Url>) -> Coordinator {
    Coordinator::from_config(config, SourceList::new(sources)).expect("Failed to build coordinator")
}

#[tokio::test]
async fn test_timeout_match_and_no_match_sources() {
    let mock_server = MockServer::start().await;

    // Source A answers long after the fetch timeout
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html_page("A", "quick quick quick").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    // Source B mentions the query once
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html_page("Page B", "the quick brown fox"))
        .mount(&mock_server)
        .await;

    // Source C never mentions it
    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(html_page("Page C", "nothing relevant"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(300);
    let coordinator = coordinator(
        &config,
        vec![
            source(&mock_server, "/a"),
            source(&mock_server, "/b"),
            source(&mock_server, "/c"),
        ],
    );

    let report = coordinator
        .run_query("quick")
        .await
        .expect("Search should succeed");

    assert_eq!(report.results.len(), 1);
    let only = &report.results.as_slice()[0];
    assert_eq!(only.title(), "Page B");
    assert_eq!(only.url(), source(&mock_server, "/b").as_str());
    assert_eq!(only.relevance(), 1);
    assert_eq!(only.snippet(), "Page Bthe quick brown fox");

    assert_eq!(report.statistics.count(SourceState::Timeout), 1);
    assert_eq!(report.statistics.count(SourceState::Matched), 1);
    assert_eq!(report.statistics.count(SourceState::NoMatch), 1);
}

#[tokio::test]
async fn test_short_query_sends_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_page("Any", "a a a"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(1000);
    let coordinator = coordinator(
        &config,
        vec![source(&mock_server, "/one"), source(&mock_server, "/two")],
    );

    for query in ["a", " a ", "", "   "] {
        let result = coordinator.search(query).await;
        assert!(matches!(
            result,
            Err(ValidationError::QueryTooShort { .. })
        ));
    }

    let received = mock_server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "No fetch may happen for a rejected query");
}

#[tokio::test]
async fn test_unreachable_source_does_not_affect_others() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(html_page("Alive", "rust and more rust"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(1000);
    let coordinator = coordinator(
        &config,
        vec![
            // Nothing listens on port 9
            Url::parse("http://127.0.0.1:9/").unwrap(),
            source(&mock_server, "/ok"),
        ],
    );

    let results = coordinator.search("rust").await.expect("Search should succeed");
    assert_eq!(results.len(), 1);
    assert_eq!(results.as_slice()[0].title(), "Alive");
    assert_eq!(results.as_slice()[0].relevance(), 2);
}

#[tokio::test]
async fn test_error_statuses_excluded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("rust not found"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("rust exploded"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fine"))
        .respond_with(html_page("Fine", "rust"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(1000);
    let coordinator = coordinator(
        &config,
        vec![
            source(&mock_server, "/missing"),
            source(&mock_server, "/broken"),
            source(&mock_server, "/fine"),
        ],
    );

    let report = coordinator.run_query("rust").await.unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results.as_slice()[0].title(), "Fine");
    assert_eq!(report.statistics.count(SourceState::HttpError), 2);
}

#[tokio::test]
async fn test_all_sources_failing_returns_empty_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = create_test_config(1000);
    let coordinator = coordinator(
        &config,
        vec![source(&mock_server, "/x"), source(&mock_server, "/y")],
    );

    let results = coordinator.search("anything").await.expect("Total failure is not an error");
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_script_and_style_content_never_matches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hidden"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(
                    r#"<html><head><style>.needle { display: none; }</style></head>
                    <body><p>visible text</p><script>var needle = 1;</script></body></html>"#,
                )
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(1000);
    let coordinator = coordinator(&config, vec![source(&mock_server, "/hidden")]);

    let report = coordinator.run_query("needle").await.unwrap();
    assert!(report.results.is_empty());
    assert_eq!(report.statistics.count(SourceState::NoMatch), 1);
}

#[tokio::test]
async fn test_ranking_is_stable_and_capped() {
    let mock_server = MockServer::start().await;

    // 25 matching sources: every fifth one mentions the query three times,
    // the rest once
    let mut sources = Vec::new();
    for i in 0..25 {
        let route = format!("/page{}", i);
        let body = if i % 5 == 0 { "fox fox fox" } else { "one fox" };
        Mock::given(method("GET"))
            .and(path(route.as_str()))
            .respond_with(
                html_page(&format!("Page {}", i), body)
                    // Earlier sources answer later
                    .set_delay(Duration::from_millis(((25 - i) * 4) as u64)),
            )
            .mount(&mock_server)
            .await;
        sources.push(source(&mock_server, &route));
    }

    let config = create_test_config(2000);
    let coordinator = coordinator(&config, sources);

    let results = coordinator.search("FOX").await.unwrap();
    assert_eq!(results.len(), 20);

    let titles: Vec<&str> = results.iter().map(|r| r.title()).collect();
    assert_eq!(
        &titles[..6],
        &["Page 0", "Page 5", "Page 10", "Page 15", "Page 20", "Page 1"]
    );
    assert_eq!(titles[19], "Page 18");

    for pair in results.as_slice().windows(2) {
        assert!(pair[0].relevance() >= pair[1].relevance());
    }
}

#[tokio::test]
async fn test_latency_bounded_by_slowest_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_page("Slow", "slow page").set_delay(Duration::from_millis(400)))
        .mount(&mock_server)
        .await;

    let sources: Vec<Url> = (0..10)
        .map(|i| source(&mock_server, &format!("/slow{}", i)))
        .collect();

    let config = create_test_config(3000);
    let coordinator = coordinator(&config, sources);

    let started = Instant::now();
    let results = coordinator.search("slow").await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(results.len(), 10);
    // Sequential fetching would take at least 4 seconds
    assert!(elapsed < Duration::from_secs(3), "took {:?}", elapsed);
}

#[tokio::test]
async fn test_browser_user_agent_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header(
            "user-agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
        ))
        .respond_with(html_page("Browser only", "welcome human"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(1000);
    let coordinator = coordinator(&config, vec![source(&mock_server, "/ua")]);

    let results = coordinator.search("welcome").await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_declared_charset_used_for_decoding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latin1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"<html><head><title>Menu</title></head><body>caf\xE9 au lait</body></html>".to_vec(),
            "text/html; charset=iso-8859-1",
        ))
        .mount(&mock_server)
        .await;

    let config = create_test_config(1000);
    let coordinator = coordinator(&config, vec![source(&mock_server, "/latin1")]);

    let report = coordinator.run_query("café").await.unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.statistics.count(SourceState::Matched), 1);

    let result = report.results.iter().next().unwrap();
    assert_eq!(result.relevance(), 1);
    assert!(result.snippet().contains("café au lait"));
}

#[tokio::test]
async fn test_long_title_truncated() {
    let mock_server = MockServer::start().await;
    let long_title = "Long ".repeat(40);

    Mock::given(method("GET"))
        .and(path("/long"))
        .respond_with(html_page(&long_title, "match here"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(1000);
    let coordinator = coordinator(&config, vec![source(&mock_server, "/long")]);

    let results = coordinator.search("match").await.unwrap();
    let title = results.as_slice()[0].title();
    assert_eq!(title.chars().count(), 100);
    assert_eq!(title, &long_title.trim()[..100]);
}

#[tokio::test]
async fn test_end_to_end_from_config_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs"))
        .respond_with(html_page("Docs", "Tokio tokio TOKIO"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blog"))
        .respond_with(html_page("Blog", "a post about tokio"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("websites.txt"),
        format!(
            "{}/blog\n\nnot-a-url\n{}/docs\n",
            mock_server.uri(),
            mock_server.uri()
        ),
    )
    .unwrap();

    let config_path = dir.path().join("scout.toml");
    std::fs::write(
        &config_path,
        r#"
[search]
max-concurrent-fetches = 2
fetch-timeout-ms = 2000

[sources]
list-path = "websites.txt"
"#,
    )
    .unwrap();

    let config = load_config(&config_path).expect("Failed to load config");
    let coordinator = build_coordinator(&config).expect("Failed to build coordinator");

    assert_eq!(coordinator.status().source_count, 2);

    let results = coordinator.search("tokio").await.unwrap();
    let titles: Vec<&str> = results.iter().map(|r| r.title()).collect();
    assert_eq!(titles, vec!["Docs", "Blog"]);
    assert_eq!(results.as_slice()[0].relevance(), 3);
}

#[tokio::test]
async fn test_missing_source_list_yields_no_sources() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("scout.toml");
    std::fs::write(&config_path, "[sources]\nlist-path = \"absent.txt\"\n").unwrap();

    let config = load_config(&config_path).expect("Missing list is not a config error");
    let coordinator = build_coordinator(&config).unwrap();

    assert_eq!(coordinator.status().source_count, 0);
    assert!(coordinator.search("anything").await.unwrap().is_empty());
}
