use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(deprecated)]
fn stagehand_cmd() -> Command {
    let mut cmd = Command::cargo_bin("stagehand").unwrap();
    // Isolate from any real pipeline environment.
    cmd.env_remove("CREDENTIALS_SECUREFILEPATH")
        .env_remove("BUILD_ARTIFACTSTAGINGDIRECTORY")
        .env_remove("SYSTEM_ARTIFACTSDIRECTORY");
    cmd
}

fn write_credentials(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("creds.json");
    fs::write(&path, r#"{"username": "u", "password": "p"}"#).unwrap();
    path
}

#[test]
fn test_no_arguments_fails() {
    stagehand_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_version_fails() {
    stagehand_cmd()
        .arg("adal")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_project_fails() {
    stagehand_cmd()
        .args(["broker", "1.2.3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown project 'broker'"));
}

#[test]
fn test_missing_credentials_var_fails() {
    stagehand_cmd()
        .args(["adal", "1.2.3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CREDENTIALS_SECUREFILEPATH"));
}

#[test]
fn test_unreadable_credentials_file_fails() {
    let tmp = TempDir::new().unwrap();

    stagehand_cmd()
        .args(["adal", "1.2.3"])
        .env(
            "CREDENTIALS_SECUREFILEPATH",
            tmp.path().join("absent.json"),
        )
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_malformed_credentials_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("creds.json");
    fs::write(&path, "{\"username\": \"u\"").unwrap();

    stagehand_cmd()
        .args(["msal", "4.0.0"])
        .env("CREDENTIALS_SECUREFILEPATH", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed credentials file"));
}

#[test]
fn test_missing_artifact_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let creds = write_credentials(&tmp);

    stagehand_cmd()
        .args(["common", "0.1.0"])
        .env("CREDENTIALS_SECUREFILEPATH", &creds)
        .assert()
        .failure()
        .stderr(predicate::str::contains("artifact directory not set"));
}

const START_RESPONSE: &str = "<promoteRequest><data>\
    <stagedRepositoryId>comadal-1042</stagedRepositoryId>\
    </data></promoteRequest>";

fn write_artifacts(dir: &TempDir, names: &[&str]) -> std::path::PathBuf {
    let artifacts = dir.path().join("artifacts");
    fs::create_dir(&artifacts).unwrap();
    for name in names {
        fs::write(artifacts.join(name), name.as_bytes()).unwrap();
    }
    artifacts
}

#[tokio::test]
async fn test_failed_upload_aborts_the_batch() {
    let server = MockServer::start().await;

    // Exactly one staging session per run.
    Mock::given(method("POST"))
        .and(path("/staging/profiles/38f4f6ab9c09e2/start"))
        .respond_with(ResponseTemplate::new(201).set_body_string(START_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let deploy_base = "/staging/deployByRepositoryId/comadal-1042/com/microsoft/aad/adal/1.2.3";
    Mock::given(method("POST"))
        .and(path(format!("{deploy_base}/a.jar")))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{deploy_base}/b.jar")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    // Uploads are name-ordered, so c.jar follows the failure and must
    // never be attempted.
    Mock::given(method("POST"))
        .and(path(format!("{deploy_base}/c.jar")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let tmp = TempDir::new().unwrap();
    let creds = write_credentials(&tmp);
    let artifacts = write_artifacts(&tmp, &["a.jar", "b.jar", "c.jar"]);

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        stagehand_cmd()
            .args(["adal", "1.2.3", "--nexus-url", &uri])
            .env("CREDENTIALS_SECUREFILEPATH", &creds)
            .env("BUILD_ARTIFACTSTAGINGDIRECTORY", &artifacts)
            .assert()
            .failure()
            .stderr(predicate::str::contains("HTTP 500"));
    })
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3, "one start and two deploys, nothing after the failure");
}

#[tokio::test]
async fn test_failed_session_start_makes_no_uploads() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = TempDir::new().unwrap();
    let creds = write_credentials(&tmp);
    let artifacts = write_artifacts(&tmp, &["artifact.jar"]);

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        stagehand_cmd()
            .args(["adal", "1.2.3", "--nexus-url", &uri])
            .env("CREDENTIALS_SECUREFILEPATH", &creds)
            .env("BUILD_ARTIFACTSTAGINGDIRECTORY", &artifacts)
            .assert()
            .failure()
            .stderr(predicate::str::contains("HTTP 401"));
    })
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "no deploys after a failed session start");
}

#[test]
fn test_artifact_directory_must_exist() {
    let tmp = TempDir::new().unwrap();
    let creds = write_credentials(&tmp);

    stagehand_cmd()
        .args(["common4j", "0.1.0"])
        .env("CREDENTIALS_SECUREFILEPATH", &creds)
        .env("BUILD_ARTIFACTSTAGINGDIRECTORY", tmp.path().join("gone"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}
