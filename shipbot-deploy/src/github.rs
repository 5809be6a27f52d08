//! Remote repository management via the GitHub REST API.
//!
//! [`RepoHost`] is the injectable seam between the pipeline and the real
//! network: production uses [`GitHubClient`], tests use a local bare-repo
//! host. The create call is idempotent — a 422 whose body says the
//! repository already exists counts as success.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use shipbot_core::types::RepoName;

use crate::error::DeployError;

/// Default API base URL.
pub const GITHUB_API: &str = "https://api.github.com";

/// Parameters for creating a remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub name: RepoName,
    pub private: bool,
    pub description: String,
}

/// Outcome of an idempotent repository create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The endpoint returned 201.
    Created,
    /// The endpoint returned 422 with an "already exists" body.
    AlreadyExists,
}

/// A host that can create repositories and hand out clone URLs.
pub trait RepoHost {
    /// Create the remote repository or verify it already exists.
    fn ensure_repo(&self, spec: &RepoSpec) -> Result<CreateOutcome, DeployError>;

    /// Clone/push URL for the named repository.
    fn clone_url(&self, name: &RepoName) -> String;
}

/// GitHub client using Basic auth (account + personal access token).
pub struct GitHubClient {
    account: String,
    token: String,
    api_base: String,
    agent: ureq::Agent,
}

impl GitHubClient {
    pub fn new(account: &str, token: &str) -> Self {
        Self::with_api_base(account, token, GITHUB_API)
    }

    /// Override the API base URL (local test servers).
    pub fn with_api_base(account: &str, token: &str, api_base: &str) -> Self {
        GitHubClient {
            account: account.to_string(),
            token: token.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
            agent: ureq::agent(),
        }
    }

    fn auth_header(&self) -> String {
        let raw = format!("{}:{}", self.account, self.token);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl RepoHost for GitHubClient {
    fn ensure_repo(&self, spec: &RepoSpec) -> Result<CreateOutcome, DeployError> {
        let url = format!("{}/user/repos", self.api_base);
        let result = self
            .agent
            .post(&url)
            .set("Authorization", &self.auth_header())
            .set("User-Agent", "shipbot")
            .send_json(ureq::json!({
                "name": spec.name.0,
                "private": spec.private,
                "description": spec.description,
                "auto_init": false,
                "has_issues": true,
                "has_projects": false,
            }));

        match result {
            Ok(resp) => {
                let status = resp.status();
                let body = resp.into_string().unwrap_or_default();
                interpret_create_response(status, &body)
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                interpret_create_response(status, &body)
            }
            Err(e) => Err(DeployError::Http(Box::new(e))),
        }
    }

    fn clone_url(&self, name: &RepoName) -> String {
        format!("https://github.com/{}/{}.git", self.account, name)
    }
}

/// Pure decision step for the create response.
///
/// 201 is success; 422 whose body mentions an existing repository is the
/// idempotent-create case; anything else is fatal and carries status + body.
pub fn interpret_create_response(status: u16, body: &str) -> Result<CreateOutcome, DeployError> {
    match status {
        201 => Ok(CreateOutcome::Created),
        422 if body.to_lowercase().contains("already exists") => Ok(CreateOutcome::AlreadyExists),
        _ => Err(DeployError::RemoteCreate {
            status,
            body: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_on_201() {
        let outcome = interpret_create_response(201, r#"{"id": 1}"#).expect("ok");
        assert_eq!(outcome, CreateOutcome::Created);
    }

    #[test]
    fn repeated_create_is_idempotent() {
        let body = r#"{"message":"Validation Failed","errors":[{"message":"name already exists on this account"}]}"#;
        let first = interpret_create_response(201, "{}").expect("ok");
        let second = interpret_create_response(422, body).expect("ok");
        assert_eq!(first, CreateOutcome::Created);
        assert_eq!(second, CreateOutcome::AlreadyExists);
    }

    #[test]
    fn already_exists_match_is_case_insensitive() {
        let outcome =
            interpret_create_response(422, "Name ALREADY EXISTS on this account").expect("ok");
        assert_eq!(outcome, CreateOutcome::AlreadyExists);
    }

    #[test]
    fn other_422_bodies_are_fatal() {
        let err = interpret_create_response(422, "name too long").expect_err("fatal");
        match err {
            DeployError::RemoteCreate { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "name too long");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unauthorized_is_fatal_with_status() {
        let err = interpret_create_response(401, "Bad credentials").expect_err("fatal");
        assert!(matches!(err, DeployError::RemoteCreate { status: 401, .. }));
    }

    #[test]
    fn clone_url_follows_github_convention() {
        let client = GitHubClient::new("octocat", "ghp_token");
        assert_eq!(
            client.clone_url(&RepoName::from("my-repo")),
            "https://github.com/octocat/my-repo.git"
        );
    }
}
