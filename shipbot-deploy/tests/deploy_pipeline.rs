//! End-to-end deployment tests against a local bare-repo host.
//!
//! [`BareRemote`] stands in for the GitHub API: `ensure_repo` creates a bare
//! repository on disk (idempotently), and `clone_url` hands out its path.
//! Tests skip when `git` is not installed; the interpreter-backed syntax
//! checks additionally guard on `python3`/`node`.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use shipbot_core::types::RepoName;
use shipbot_deploy::{
    deploy, update_existing_file, CommitOutcome, CreateOutcome, DeployError, DeployRequest,
    RepoHost, RepoSpec, PRIMARY_BRANCH,
};
use shipbot_tools::{run_tool, Formatter};

// ---------------------------------------------------------------------------
// Local host
// ---------------------------------------------------------------------------

struct BareRemote {
    root: PathBuf,
}

impl BareRemote {
    fn new(root: &Path) -> Self {
        BareRemote {
            root: root.to_path_buf(),
        }
    }

    fn repo_dir(&self, name: &RepoName) -> PathBuf {
        self.root.join(format!("{name}.git"))
    }
}

impl RepoHost for BareRemote {
    fn ensure_repo(&self, spec: &RepoSpec) -> Result<CreateOutcome, DeployError> {
        let dir = self.repo_dir(&spec.name);
        if dir.exists() {
            return Ok(CreateOutcome::AlreadyExists);
        }
        std::fs::create_dir_all(&dir).expect("mkdir bare remote");
        let out = run_tool("git", &["init", "--bare"], Some(&dir)).expect("spawn git");
        assert!(out.ok, "git init --bare failed: {}", out.combined());
        Ok(CreateOutcome::Created)
    }

    fn clone_url(&self, name: &RepoName) -> String {
        self.repo_dir(name).display().to_string()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn tool_ok(program: &str, args: &[&str]) -> bool {
    run_tool(program, args, None).map(|o| o.ok).unwrap_or(false)
}

fn git_available() -> bool {
    tool_ok("git", &["--version"])
}

fn set_git_identity() {
    std::env::set_var("GIT_AUTHOR_NAME", "shipbot-test");
    std::env::set_var("GIT_AUTHOR_EMAIL", "shipbot@example.com");
    std::env::set_var("GIT_COMMITTER_NAME", "shipbot-test");
    std::env::set_var("GIT_COMMITTER_EMAIL", "shipbot@example.com");
}

fn remote_files(remote: &Path) -> Vec<String> {
    let out = run_tool(
        "git",
        &["ls-tree", "-r", "--name-only", PRIMARY_BRANCH],
        Some(remote),
    )
    .expect("spawn git");
    assert!(out.ok, "ls-tree failed: {}", out.combined());
    let mut files: Vec<String> = out.stdout.lines().map(str::to_string).collect();
    files.sort();
    files
}

fn remote_commit_count(remote: &Path) -> usize {
    let out = run_tool(
        "git",
        &["rev-list", "--count", PRIMARY_BRANCH],
        Some(remote),
    )
    .expect("spawn git");
    assert!(out.ok, "rev-list failed: {}", out.combined());
    out.stdout.trim().parse().expect("count")
}

// ---------------------------------------------------------------------------
// deploy
// ---------------------------------------------------------------------------

#[test]
fn deploy_publishes_classified_files_and_scaffolds_in_one_commit() {
    if !git_available() {
        return;
    }
    set_git_identity();
    let workspace = TempDir::new().expect("tempdir");
    let remotes = TempDir::new().expect("tempdir");
    let host = BareRemote::new(remotes.path());

    // CSS and plain-text blocks keep this test independent of which
    // interpreters are installed.
    let raw = "```css\nbody { color: red; }\n```\n```\nrelease notes\n```";
    let req = DeployRequest::new("demo", raw);

    let report = deploy(
        &host,
        "octocat",
        workspace.path(),
        &Formatter::passthrough(),
        &req,
    )
    .expect("deploy");

    assert_eq!(
        report.code_files,
        vec![
            PathBuf::from("static/style_1.css"),
            PathBuf::from("misc/file_2.txt"),
        ]
    );
    assert_eq!(report.scaffold_files.len(), 3);
    assert!(!report.conflict_detected);
    assert!(matches!(report.commit, CommitOutcome::Pushed { .. }));

    let remote = host.repo_dir(&RepoName::from("demo"));
    assert_eq!(remote_commit_count(&remote), 1);
    assert_eq!(
        remote_files(&remote),
        vec![
            ".gitignore".to_string(),
            "LICENSE".to_string(),
            "README.md".to_string(),
            "misc/file_2.txt".to_string(),
            "static/style_1.css".to_string(),
        ]
    );
}

#[test]
fn deploy_python_and_javascript_blocks_end_to_end() {
    if !git_available() || !tool_ok("python3", &["--version"]) || !tool_ok("node", &["--version"])
    {
        return;
    }
    set_git_identity();
    let workspace = TempDir::new().expect("tempdir");
    let remotes = TempDir::new().expect("tempdir");
    let host = BareRemote::new(remotes.path());

    let raw = "```python\nimport os\nprint(os.name)\n```\n```javascript\nconsole.log(1)\n```";
    let req = DeployRequest::new("demo", raw);

    deploy(
        &host,
        "octocat",
        workspace.path(),
        &Formatter::passthrough(),
        &req,
    )
    .expect("deploy");

    let remote = host.repo_dir(&RepoName::from("demo"));
    let files = remote_files(&remote);
    assert!(files.contains(&"src/module_1.py".to_string()));
    assert!(files.contains(&"static/script_2.js".to_string()));
    assert_eq!(files.len(), 5);
    assert_eq!(remote_commit_count(&remote), 1);
}

#[test]
fn redeploying_identical_content_is_a_benign_noop() {
    if !git_available() {
        return;
    }
    set_git_identity();
    let workspace = TempDir::new().expect("tempdir");
    let remotes = TempDir::new().expect("tempdir");
    let host = BareRemote::new(remotes.path());

    let raw = "```\nrelease notes\n```";
    let req = DeployRequest::new("demo", raw);
    let fmt = Formatter::passthrough();

    let first = deploy(&host, "octocat", workspace.path(), &fmt, &req).expect("first");
    assert!(matches!(first.commit, CommitOutcome::Pushed { .. }));

    let second = deploy(&host, "octocat", workspace.path(), &fmt, &req).expect("second");
    assert_eq!(second.commit, CommitOutcome::NothingToCommit);
    assert!(second.scaffold_files.is_empty(), "scaffolds already existed");

    let remote = host.repo_dir(&RepoName::from("demo"));
    assert_eq!(remote_commit_count(&remote), 1);
}

#[test]
fn deploy_without_code_blocks_fails_fast() {
    if !git_available() {
        return;
    }
    let workspace = TempDir::new().expect("tempdir");
    let remotes = TempDir::new().expect("tempdir");
    let host = BareRemote::new(remotes.path());

    let req = DeployRequest::new("demo", "prose without any fences");
    let err = deploy(
        &host,
        "octocat",
        workspace.path(),
        &Formatter::passthrough(),
        &req,
    )
    .expect_err("no content");
    assert!(matches!(err, DeployError::NoContent));
}

#[test]
fn syntax_failure_aborts_before_anything_is_published() {
    if !git_available() || !tool_ok("python3", &["--version"]) {
        return;
    }
    set_git_identity();
    let workspace = TempDir::new().expect("tempdir");
    let remotes = TempDir::new().expect("tempdir");
    let host = BareRemote::new(remotes.path());

    let raw = "```python\ndef broken(:\n```";
    let req = DeployRequest::new("demo", raw);
    let err = deploy(
        &host,
        "octocat",
        workspace.path(),
        &Formatter::passthrough(),
        &req,
    )
    .expect_err("syntax");
    assert!(matches!(err, DeployError::Syntax { .. }));

    // The file stayed on disk, but the remote never received a commit.
    let workdir = workspace.path().join("demo");
    assert!(workdir.join("src/module_1.py").exists());
    let remote = host.repo_dir(&RepoName::from("demo"));
    let rev = run_tool(
        "git",
        &["rev-list", "--count", PRIMARY_BRANCH],
        Some(&remote),
    )
    .expect("spawn git");
    assert!(!rev.ok, "remote must have no commits");
}

// ---------------------------------------------------------------------------
// update_existing_file
// ---------------------------------------------------------------------------

#[test]
fn update_existing_file_pushes_a_fixed_message() {
    if !git_available() {
        return;
    }
    set_git_identity();
    let workspace = TempDir::new().expect("tempdir");
    let remotes = TempDir::new().expect("tempdir");
    let host = BareRemote::new(remotes.path());

    let req = DeployRequest::new("demo", "```\nrelease notes\n```");
    deploy(
        &host,
        "octocat",
        workspace.path(),
        &Formatter::passthrough(),
        &req,
    )
    .expect("deploy");

    let report = update_existing_file(
        &host,
        workspace.path(),
        &RepoName::from("demo"),
        Path::new("misc/file_1.txt"),
        "updated notes",
        &Formatter::passthrough(),
    )
    .expect("update");
    assert_eq!(
        report.commit,
        CommitOutcome::Pushed {
            message: "Update file_1.txt".to_string()
        }
    );

    let remote = host.repo_dir(&RepoName::from("demo"));
    assert_eq!(remote_commit_count(&remote), 2);
    let subject = run_tool(
        "git",
        &["log", "-1", "--format=%s", PRIMARY_BRANCH],
        Some(&remote),
    )
    .expect("spawn git");
    assert_eq!(subject.stdout.trim(), "Update file_1.txt");
}

#[test]
fn update_with_invalid_content_aborts() {
    if !git_available() || !tool_ok("python3", &["--version"]) {
        return;
    }
    set_git_identity();
    let workspace = TempDir::new().expect("tempdir");
    let remotes = TempDir::new().expect("tempdir");
    let host = BareRemote::new(remotes.path());

    let req = DeployRequest::new("demo", "```\nrelease notes\n```");
    deploy(
        &host,
        "octocat",
        workspace.path(),
        &Formatter::passthrough(),
        &req,
    )
    .expect("deploy");

    let err = update_existing_file(
        &host,
        workspace.path(),
        &RepoName::from("demo"),
        Path::new("src/module_1.py"),
        "def broken(:",
        &Formatter::passthrough(),
    )
    .expect_err("syntax");
    assert!(matches!(err, DeployError::Syntax { .. }));

    let remote = host.repo_dir(&RepoName::from("demo"));
    assert_eq!(remote_commit_count(&remote), 1, "bad update must not push");
}
