// tests/resolver_test.rs
use chrono::{TimeZone, Utc};
use git2::Oid;
use scope_tag::analyzer::DecorationConfig;
use scope_tag::diagnostics::SkipEvent;
use scope_tag::domain::{PreReleaseSpec, VersionBump};
use scope_tag::git::{CommitInfo, MockRepository};
use scope_tag::{Outcome, ScopeResolver, ScopeTagError};

const HEAD: u8 = 0xAA;

fn oid(byte: u8) -> Oid {
    Oid::from_bytes(&[byte; 20]).unwrap()
}

/// Build a repository whose `main` head carries `message`, with each tag on its own commit.
fn setup_repo(message: &str, tags: &[&str]) -> MockRepository {
    let mut repo = MockRepository::new();
    for (i, tag) in tags.iter().enumerate() {
        let info = CommitInfo::new(oid(i as u8 + 1), format!("release {}", tag), "Test User");
        repo.add_tag(*tag, info.oid);
        repo.add_commit(info);
    }
    repo.add_commit(CommitInfo::new(oid(HEAD), message, "Test User"));
    repo.set_branch_head("main", oid(HEAD));
    repo
}

fn svc_tags() -> Vec<&'static str> {
    vec!["svc-v1.0.0", "svc-v1.1.0", "svc-v2.0.0-rc.1"]
}

fn new_version(repo: &MockRepository, resolver: &ScopeResolver) -> String {
    resolver
        .resolve(repo, "main")
        .expect("resolution should succeed")
        .new_version()
        .expect("a version should be planned")
        .to_string()
}

#[test]
fn test_current_version_skips_prerelease() {
    let repo = setup_repo("fix(svc): patch bug", &svc_tags());
    let resolution = ScopeResolver::default().resolve(&repo, "main").unwrap();

    let plan = resolution.plan().expect("plan");
    assert_eq!(plan.current_version.to_string(), "1.1.0");
    assert_eq!(plan.current_tag, "svc-v1.1.0");
    assert_eq!(plan.current_commit.oid, oid(2));
    assert!(resolution.skipped.contains(&SkipEvent::PrereleaseSkipped {
        tag: "svc-v2.0.0-rc.1".to_string(),
        version: "2.0.0-rc.1".to_string(),
    }));
}

#[test]
fn test_breaking_change_bumps_major() {
    let repo = setup_repo("feat(svc)!: redo api", &svc_tags());
    assert_eq!(new_version(&repo, &ScopeResolver::default()), "2.0.0");
}

#[test]
fn test_feature_bumps_minor() {
    let repo = setup_repo("feat(svc): add x", &svc_tags());
    assert_eq!(new_version(&repo, &ScopeResolver::default()), "1.2.0");
}

#[test]
fn test_fix_bumps_patch() {
    let repo = setup_repo("fix(svc): patch bug", &svc_tags());
    let resolution = ScopeResolver::default().resolve(&repo, "main").unwrap();
    let plan = resolution.plan().unwrap();
    assert_eq!(plan.bump, VersionBump::Patch);
    assert_eq!(plan.new_version.to_string(), "1.1.1");
    assert_eq!(plan.new_tag_name(), "svc-v1.1.1");
}

#[test]
fn test_commit_without_scope_is_noop() {
    let repo = setup_repo("chore: cleanup", &svc_tags());
    let resolution = ScopeResolver::default().resolve(&repo, "main").unwrap();

    assert_eq!(resolution.outcome, Outcome::NoScope);
    assert_eq!(resolution.commit.r#type, "chore");
    assert_eq!(resolution.head.oid, oid(HEAD));
}

#[test]
fn test_breaking_without_parens_is_noop() {
    let repo = setup_repo("feat!: drop legacy api", &svc_tags());
    let resolution = ScopeResolver::default().resolve(&repo, "main").unwrap();
    assert_eq!(resolution.outcome, Outcome::NoScope);
}

#[test]
fn test_build_metadata_decoration() {
    let repo = setup_repo("fix(svc): patch bug", &svc_tags());
    let resolver = ScopeResolver::new(DecorationConfig {
        build_metadata: Some("ci.42".to_string()),
        ..Default::default()
    });
    assert_eq!(new_version(&repo, &resolver), "1.1.1+ci.42");
}

#[test]
fn test_invalid_build_metadata_fails() {
    let repo = setup_repo("fix(svc): patch bug", &svc_tags());
    let resolver = ScopeResolver::new(DecorationConfig {
        build_metadata: Some("ci/42".to_string()),
        ..Default::default()
    });
    let err = resolver.resolve(&repo, "main").unwrap_err();
    assert!(matches!(err, ScopeTagError::Decoration { .. }), "{}", err);
}

#[test]
fn test_invalid_timestamp_layout_fails_as_decoration() {
    let repo = setup_repo("fix(svc): patch bug", &svc_tags());
    let resolver = ScopeResolver::new(DecorationConfig {
        pre_release: PreReleaseSpec::new(None, Some("%".to_string())),
        ..Default::default()
    });
    let err = resolver.resolve(&repo, "main").unwrap_err();
    assert!(matches!(err, ScopeTagError::Decoration { .. }), "{}", err);
}

#[test]
fn test_bump_overflow_is_an_error() {
    let repo = setup_repo("feat(svc)!: x", &["svc-v18446744073709551615.0.0"]);
    let err = ScopeResolver::default().resolve(&repo, "main").unwrap_err();
    assert!(matches!(err, ScopeTagError::Version(_)), "{}", err);

    let repo = setup_repo("fix(svc): x", &["svc-v18446744073709551615.0.0"]);
    assert_eq!(
        new_version(&repo, &ScopeResolver::default()),
        "18446744073709551615.0.1"
    );
}

#[test]
fn test_prerelease_decoration_with_fixed_clock() {
    let repo = setup_repo("feat(svc): add x", &svc_tags());
    let resolver = ScopeResolver::new(DecorationConfig {
        pre_release: PreReleaseSpec::new(Some("rc".to_string()), Some("datetime".to_string())),
        build_metadata: Some("sha.abc".to_string()),
    })
    .with_clock(|| Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap());

    assert_eq!(new_version(&repo, &resolver), "1.2.0-rc.20240102150405+sha.abc");
}

#[test]
fn test_only_prerelease_tags_fail() {
    let repo = setup_repo("fix(svc): patch bug", &["svc-v1.0.0-alpha", "svc-v1.0.0-rc.2"]);
    let err = ScopeResolver::default().resolve(&repo, "main").unwrap_err();
    assert!(matches!(err, ScopeTagError::NoStableVersion { ref scope } if scope == "svc"));
    assert!(err.to_string().contains("svc"));
}

#[test]
fn test_scope_without_tags_fails() {
    let repo = setup_repo("fix(billing): rounding", &svc_tags());
    assert!(matches!(
        ScopeResolver::default().resolve(&repo, "main"),
        Err(ScopeTagError::NoStableVersion { .. })
    ));
}

#[test]
fn test_malformed_and_foreign_tags_are_ignored() {
    let repo = setup_repo(
        "fix(svc): patch bug",
        &[
            "svc-v1.0.0",
            "latest",
            "v9.0.0",
            "svc-vnext",
            "svc-v1.2.3.4",
            "svc-v1.0.0-",
            "api-v5.0.0",
            "svc-core-v7.0.0",
        ],
    );
    let resolution = ScopeResolver::default().resolve(&repo, "main").unwrap();
    let plan = resolution.plan().unwrap();

    assert_eq!(plan.current_tag, "svc-v1.0.0");
    assert_eq!(plan.new_version.to_string(), "1.0.1");
    assert!(resolution.skipped.contains(&SkipEvent::ScopeMismatch {
        tag: "svc-core-v7.0.0".to_string(),
        tag_scope: "svc-core".to_string(),
    }));
    assert!(resolution
        .skipped
        .iter()
        .any(|e| matches!(e, SkipEvent::UnparsableVersion { tag, .. } if tag == "svc-v1.2.3.4")));
}

#[test]
fn test_greedy_scope_prefix() {
    let repo = setup_repo("feat(svc-core): add x", &["svc-core-v7.0.0", "svc-v1.0.0"]);
    let resolution = ScopeResolver::default().resolve(&repo, "main").unwrap();
    let plan = resolution.plan().unwrap();
    assert_eq!(plan.scope, "svc-core");
    assert_eq!(plan.new_tag_name(), "svc-core-v7.1.0");
}

#[test]
fn test_short_version_tags_are_accepted() {
    let repo = setup_repo("fix(svc): patch bug", &["svc-1.4"]);
    assert_eq!(new_version(&repo, &ScopeResolver::default()), "1.4.1");
}

#[test]
fn test_tag_listing_failure_is_fatal() {
    let mut repo = setup_repo("fix(svc): patch bug", &svc_tags());
    repo.fail_tag_listing();
    assert!(matches!(
        ScopeResolver::default().resolve(&repo, "main"),
        Err(ScopeTagError::TagList(_))
    ));
}

#[test]
fn test_dangling_scope_tag_is_fatal() {
    let mut repo = setup_repo("fix(svc): patch bug", &svc_tags());
    repo.add_tag("svc-v3.0.0", oid(0x55));
    assert!(matches!(
        ScopeResolver::default().resolve(&repo, "main"),
        Err(ScopeTagError::TagCommit { .. })
    ));
}

#[test]
fn test_resolution_is_idempotent() {
    let repo = setup_repo(
        "feat(svc): add x",
        &["svc-v1.0.0", "svc-v1.1.0", "svc-1.1.0", "svc-v1.1.0+build.9", "svc-v2.0.0-rc.1"],
    );
    let resolver = ScopeResolver::default();

    let first = resolver.resolve(&repo, "main").unwrap();
    let second = resolver.resolve(&repo, "main").unwrap();

    let first_plan = first.plan().unwrap();
    let second_plan = second.plan().unwrap();
    assert_eq!(first_plan, second_plan);
    assert_eq!(first_plan.current_tag, "svc-1.1.0");
    assert_eq!(first_plan.new_version.to_string(), "1.2.0");
}
