//! Integration tests for the Facebook lookup and `FacebookTool::execute`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use opse_core::{Profile, ProfileCollection, Tool, ToolRegistry};
use opse_facebook::{
    list_accounts, FacebookClient, FacebookError, FacebookTool, LookupOptions, LookupResult,
};

const JANE_DOE_PATH: &str = "/public/Jane%20Doe";

/// Builds a client against the mock server: 5-second timeout, no retries.
fn test_client(base_url: &str) -> FacebookClient {
    FacebookClient::new(base_url, 5, "opse-test/0.1", 0, 0)
        .expect("failed to build test FacebookClient")
}

fn test_tool(base_url: &str, strict: bool) -> FacebookTool {
    FacebookTool::new(test_client(base_url), LookupOptions { strict })
}

fn anchor(name: &str, slug: &str) -> String {
    format!(
        r#"<a title="{name}" class="_2ial" aria-label="{name}" aria-hidden="true" tabindex="-1" role="presentation" href="https://www.facebook.com/{slug}"><img class="_1glk _6phc img" src="https://scontent.xx.fbcdn.net/v/t1.0-1/p72x72/{slug}_n.jpg?_nc_cat=1&oh=ff" width="72" height="72" alt="{name}" /></a>"#
    )
}

fn results_page(anchors: &[String]) -> String {
    format!(
        "<html><body><div id=\"BrowseResultsContainer\">{}</div></body></html>",
        anchors.concat()
    )
}

async fn mount_page(server: &MockServer, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(JANE_DOE_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// list_accounts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_accounts_returns_every_hit_when_not_strict() {
    let server = MockServer::start().await;
    let body = results_page(&[
        anchor("Jane Doe", "jane.doe"),
        anchor("Jane Doe", "jane.doe.42"),
        anchor("Janet Doering", "janet.doering"),
    ]);
    mount_page(&server, 200, body).await;

    let client = test_client(&server.uri());
    let result = list_accounts(&client, "Jane", "Doe", LookupOptions::default()).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let result = result.unwrap();
    assert_eq!(result.candidates.len(), 3);
    assert_eq!(result.raw_matches, 3);
    for candidate in &result.candidates {
        assert!(!candidate.fullname.is_empty());
        assert!(!candidate.url.is_empty());
        assert!(!candidate.image.is_empty());
    }
    assert_eq!(result.candidates[1].url, "https://www.facebook.com/jane.doe.42");
}

#[tokio::test]
async fn list_accounts_strict_keeps_only_exact_names() {
    let server = MockServer::start().await;
    let body = results_page(&[
        anchor("JANE DOE", "jane.doe"),
        anchor("Doe Jane", "doe.jane"),
        anchor("Janet Doering", "janet.doering"),
    ]);
    mount_page(&server, 200, body).await;

    let client = test_client(&server.uri());
    let result = list_accounts(&client, "Jane", "Doe", LookupOptions { strict: true })
        .await
        .unwrap();

    assert_eq!(result.raw_matches, 3);
    let names: Vec<_> = result
        .candidates
        .iter()
        .map(|c| c.fullname.as_str())
        .collect();
    assert_eq!(names, ["JANE DOE", "Doe Jane"]);
}

#[tokio::test]
async fn list_accounts_login_wall_returns_empty_ok() {
    let server = MockServer::start().await;
    let body = "<html><body><div>Debes iniciar sesión para continuar.</div></body></html>";
    mount_page(&server, 200, body.to_owned()).await;

    let client = test_client(&server.uri());
    let result = list_accounts(&client, "Jane", "Doe", LookupOptions::default()).await;

    let result = result.expect("login wall must not be reported as a failure");
    assert!(result.candidates.is_empty());
    assert!(result.login_walled);
}

#[tokio::test]
async fn list_accounts_zero_matches_returns_empty_ok() {
    let server = MockServer::start().await;
    mount_page(&server, 200, results_page(&[])).await;

    let client = test_client(&server.uri());
    let result = list_accounts(&client, "Jane", "Doe", LookupOptions { strict: true })
        .await
        .unwrap();

    assert_eq!(result, LookupResult::default());
}

#[tokio::test]
async fn list_accounts_not_found_page_returns_empty_ok() {
    let server = MockServer::start().await;
    mount_page(&server, 404, "<html>Not found</html>".to_owned()).await;

    let client = test_client(&server.uri());
    let result = list_accounts(&client, "Jane", "Doe", LookupOptions::default())
        .await
        .unwrap();

    assert!(result.candidates.is_empty());
    assert!(!result.login_walled);
}

#[tokio::test]
async fn list_accounts_is_idempotent() {
    let server = MockServer::start().await;
    let body = results_page(&[anchor("Jane Doe", "jane.doe"), anchor("Doe Jane", "doe.jane")]);
    mount_page(&server, 200, body).await;

    let client = test_client(&server.uri());
    let first = list_accounts(&client, "Jane", "Doe", LookupOptions::default())
        .await
        .unwrap();
    let second = list_accounts(&client, "Jane", "Doe", LookupOptions::default())
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.candidates.len(), 2);
}

#[tokio::test]
async fn list_accounts_percent_encodes_names_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public/Zo%C3%A9%20M%C3%BCller"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page(&[anchor("Zoé Müller", "zoe.muller")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = list_accounts(&client, "Zoé", "Müller", LookupOptions { strict: true })
        .await
        .unwrap();

    assert_eq!(result.candidates.len(), 1);
    assert_eq!(result.candidates[0].fullname, "Zoé Müller");
}

#[tokio::test]
async fn list_accounts_transport_failure_is_err() {
    // Nothing listens on port 1.
    let client = test_client("http://127.0.0.1:1");
    let result = list_accounts(&client, "Jane", "Doe", LookupOptions::default()).await;

    assert!(
        matches!(result, Err(FacebookError::Http(_))),
        "expected FacebookError::Http, got: {result:?}"
    );
}

#[tokio::test]
async fn list_accounts_server_error_is_err_after_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JANE_DOE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let client = FacebookClient::new(&server.uri(), 5, "opse-test/0.1", 1, 0).unwrap();
    let result = list_accounts(&client, "Jane", "Doe", LookupOptions::default()).await;

    match result {
        Err(FacebookError::UnexpectedStatus { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected FacebookError::UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn list_accounts_retries_once_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JANE_DOE_PATH))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_page(&server, 200, results_page(&[anchor("Jane Doe", "jane.doe")])).await;

    let client = FacebookClient::new(&server.uri(), 5, "opse-test/0.1", 1, 0).unwrap();
    let result = list_accounts(&client, "Jane", "Doe", LookupOptions::default())
        .await
        .unwrap();

    assert_eq!(result.candidates.len(), 1);
}

// ---------------------------------------------------------------------------
// FacebookTool::execute
// ---------------------------------------------------------------------------

#[tokio::test]
async fn execute_appends_one_cloned_profile_per_hit() {
    let server = MockServer::start().await;
    let body = results_page(&[anchor("Jane Doe", "jane.doe"), anchor("Jane Doe", "jane.doe.7")]);
    mount_page(&server, 200, body).await;

    let tool = test_tool(&server.uri(), false);
    let default_profile = Profile::new("Jane", "Doe");
    let mut profiles = ProfileCollection::new();
    tool.execute(&default_profile, &mut profiles).await;

    assert_eq!(profiles.len(), 2);
    let urls: Vec<_> = profiles
        .iter()
        .map(|p| {
            assert_eq!(p.firstname(), Some("Jane"));
            assert_eq!(p.lastname(), Some("Doe"));
            assert_eq!(p.accounts().len(), 1, "each clone holds exactly one account");
            let account = &p.accounts()[0];
            assert_eq!(account.service(), "facebook");
            assert_eq!(account.username(), "Jane Doe");
            account.url().to_owned()
        })
        .collect();
    assert_eq!(
        urls,
        [
            "https://www.facebook.com/jane.doe",
            "https://www.facebook.com/jane.doe.7"
        ]
    );

    let json = profiles.iter().next().unwrap().accounts()[0].to_json();
    assert_eq!(
        json["image_url"],
        "https://scontent.xx.fbcdn.net/v/t1.0-1/p72x72/jane.doe_n.jpg?_nc_cat=1&oh=ff"
    );

    assert!(
        default_profile.accounts().is_empty(),
        "default profile must not be mutated"
    );
}

#[tokio::test]
async fn execute_appends_nothing_on_transport_failure() {
    let tool = test_tool("http://127.0.0.1:1", false);
    let mut profiles = ProfileCollection::new();
    tool.execute(&Profile::new("Jane", "Doe"), &mut profiles).await;

    assert!(profiles.is_empty());
}

#[tokio::test]
async fn execute_appends_nothing_on_login_wall() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        200,
        "<html>You must log in to continue.</html>".to_owned(),
    )
    .await;

    let tool = test_tool(&server.uri(), false);
    let mut profiles = ProfileCollection::new();
    tool.execute(&Profile::new("Jane", "Doe"), &mut profiles).await;

    assert!(profiles.is_empty());
}

#[tokio::test]
async fn execute_skips_request_without_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tool = test_tool(&server.uri(), false);
    let mut profile = Profile::default();
    profile.set_firstname("Jane");
    let mut profiles = ProfileCollection::new();
    tool.execute(&profile, &mut profiles).await;

    assert!(profiles.is_empty());
}

#[tokio::test]
async fn registry_runs_facebook_tool_for_named_profile() {
    let server = MockServer::start().await;
    let body = results_page(&[anchor("Jane Doe", "jane.doe"), anchor("Someone Else", "some.one")]);
    mount_page(&server, 200, body).await;

    let mut registry = ToolRegistry::new();
    registry.register(Box::new(test_tool(&server.uri(), true)));

    let profiles = registry.run(&Profile::new("Jane", "Doe")).await;

    assert_eq!(profiles.len(), 1);
}
