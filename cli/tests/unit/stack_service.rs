//! Unit tests for the stack lifecycle operations.
//!
//! The orchestrator is wired to recording fakes so every test asserts on the
//! exact `LifecycleOptions` the compose engine would have received.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use stackctl::application::services::stack::StackOrchestrator;
use stackctl::domain::{
    AppConfig, LifecycleOptions, ServiceSelector, StackError, StackOptions, StackSettings,
};

use crate::helpers::names;
use crate::mocks::{EngineCall, FixedLocations, RecordingCompose, StaticConfig};

type Orchestrator = StackOrchestrator<FixedLocations, RecordingCompose, StaticConfig>;

fn root() -> PathBuf {
    PathBuf::from("/home/dev/.stackctl")
}

fn orchestrator(compose: &RecordingCompose) -> Orchestrator {
    StackOrchestrator::new(
        StackSettings::default(),
        FixedLocations(Some(root())),
        compose.clone(),
        StaticConfig(Some(AppConfig::default())),
    )
}

fn request(services: &[&str]) -> StackOptions {
    StackOptions {
        services: names(services),
        stack_version: "8.1.0".to_string(),
        daemon_mode: false,
    }
}

fn single_call(compose: &RecordingCompose) -> EngineCall {
    let calls = compose.calls();
    assert_eq!(calls.len(), 1, "expected exactly one engine call: {calls:?}");
    calls.into_iter().next().expect("one call")
}

fn stack_error(err: &anyhow::Error) -> &StackError {
    err.downcast_ref::<StackError>()
        .unwrap_or_else(|| panic!("expected a StackError in chain: {err:#}"))
}

// ── build ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn build_expands_requested_services_with_ready_sidecars() {
    let compose = RecordingCompose::default();
    orchestrator(&compose)
        .build(&request(&["kibana", "package-registry"]))
        .await
        .expect("build");

    let call = single_call(&compose);
    assert_eq!(call.verb, "build");
    assert_eq!(
        call.opts,
        LifecycleOptions {
            services: names(&[
                "kibana",
                "kibana_is_ready",
                "package-registry",
                "package-registry_is_ready"
            ]),
            ..LifecycleOptions::default()
        }
    );
}

#[tokio::test]
async fn build_with_orchestrator_service_selects_all() {
    let compose = RecordingCompose::default();
    orchestrator(&compose)
        .build(&request(&["kibana", "elastic-agent"]))
        .await
        .expect("build");

    assert!(single_call(&compose).opts.services.is_empty());
}

#[tokio::test]
async fn build_does_not_read_configuration() {
    let compose = RecordingCompose::default();
    let stack = StackOrchestrator::new(
        StackSettings::default(),
        FixedLocations(Some(root())),
        compose.clone(),
        StaticConfig(None),
    );
    stack.build(&request(&[])).await.expect("build");
    assert!(single_call(&compose).opts.env.is_empty());
}

#[tokio::test]
async fn project_is_opened_with_settings_name_and_definition() {
    let compose = RecordingCompose::default();
    orchestrator(&compose)
        .build(&request(&[]))
        .await
        .expect("build");

    assert_eq!(
        compose.opened(),
        vec![(
            "elastic-package-stack".to_string(),
            root().join("stack").join("snapshot.yml")
        )]
    );
}

// ── pull ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn pull_injects_image_refs_for_requested_version() {
    let compose = RecordingCompose::default();
    orchestrator(&compose)
        .pull(&request(&["elasticsearch"]))
        .await
        .expect("pull");

    let call = single_call(&compose);
    assert_eq!(call.verb, "pull");
    assert_eq!(
        call.opts.services,
        names(&["elasticsearch", "elasticsearch_is_ready"])
    );
    assert_eq!(
        call.opts.env.get("ELASTICSEARCH_IMAGE_REF").map(String::as_str),
        Some("docker.elastic.co/elasticsearch/elasticsearch:8.1.0")
    );
    assert_eq!(
        call.opts.env.get("KIBANA_IMAGE_REF").map(String::as_str),
        Some("docker.elastic.co/kibana/kibana:8.1.0")
    );
    assert_eq!(
        call.opts.env.get("ELASTIC_AGENT_IMAGE_REF").map(String::as_str),
        Some("docker.elastic.co/beats/elastic-agent:8.1.0")
    );
    assert!(call.opts.extra_args.is_empty());
}

#[tokio::test]
async fn pull_fails_when_configuration_cannot_be_read() {
    let compose = RecordingCompose::default();
    let stack = StackOrchestrator::new(
        StackSettings::default(),
        FixedLocations(Some(root())),
        compose.clone(),
        StaticConfig(None),
    );
    let err = stack.pull(&request(&[])).await.expect_err("pull");

    assert_eq!(stack_error(&err), &StackError::ReadConfig);
    assert!(format!("{err:#}").contains("cannot parse config.yml"), "got: {err:#}");
    assert!(compose.calls().is_empty(), "engine must not run");
}

#[tokio::test]
async fn pull_fails_for_blank_stack_version() {
    let compose = RecordingCompose::default();
    let mut options = request(&[]);
    options.stack_version = String::new();
    let err = orchestrator(&compose)
        .pull(&options)
        .await
        .expect_err("pull");

    assert_eq!(stack_error(&err), &StackError::ReadConfig);
    assert!(compose.calls().is_empty());
}

// ── up ────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn up_in_daemon_mode_passes_detach_flag() {
    let compose = RecordingCompose::default();
    let mut options = request(&["kibana"]);
    options.daemon_mode = true;
    orchestrator(&compose).up(&options).await.expect("up");

    let call = single_call(&compose);
    assert_eq!(call.verb, "up");
    assert_eq!(call.opts.extra_args, names(&["-d"]));
    assert_eq!(call.opts.services, names(&["kibana", "kibana_is_ready"]));
    assert_eq!(call.opts.env.len(), 3);
}

#[tokio::test]
async fn up_in_foreground_has_no_extra_args() {
    let compose = RecordingCompose::default();
    orchestrator(&compose)
        .up(&request(&[]))
        .await
        .expect("up");

    let call = single_call(&compose);
    assert!(call.opts.extra_args.is_empty());
    assert!(call.opts.services.is_empty());
}

#[tokio::test]
async fn up_engine_failure_is_wrapped_with_operation() {
    let compose = RecordingCompose {
        fail_verb: Some("up"),
        ..RecordingCompose::default()
    };
    let err = orchestrator(&compose)
        .up(&request(&[]))
        .await
        .expect_err("up");

    assert_eq!(stack_error(&err), &StackError::Engine { operation: "up" });
    let chain = format!("{err:#}");
    assert!(chain.starts_with("running docker compose up failed"), "got: {chain}");
    assert!(chain.contains("exited with exit status: 1"), "got: {chain}");
}

// ── down ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn down_never_restricts_units() {
    let compose = RecordingCompose::default();
    orchestrator(&compose).down().await.expect("down");

    let call = single_call(&compose);
    assert_eq!(call.verb, "down");
    assert_eq!(call.opts, LifecycleOptions::default());
}

// ── logs / dump ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn logs_request_exactly_one_service_without_sidecar() {
    let compose = RecordingCompose {
        logs_output: b"log line for ".to_vec(),
        ..RecordingCompose::default()
    };
    let out = orchestrator(&compose).logs("kibana").await.expect("logs");

    assert_eq!(out, b"log line for kibana");
    let call = single_call(&compose);
    assert_eq!(call.verb, "logs");
    assert_eq!(call.opts.services, names(&["kibana"]));
}

#[tokio::test]
async fn logs_of_orchestrator_service_are_not_escalated() {
    let compose = RecordingCompose::default();
    orchestrator(&compose)
        .logs("elastic-agent")
        .await
        .expect("logs");
    assert_eq!(single_call(&compose).opts.services, names(&["elastic-agent"]));
}

#[tokio::test]
async fn dump_collects_logs_of_every_known_service_in_order() {
    let compose = RecordingCompose::default();
    let dumps = orchestrator(&compose).dump().await.expect("dump");

    let services: Vec<&str> = dumps.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(
        services,
        vec!["elasticsearch", "kibana", "package-registry", "elastic-agent"]
    );
    assert_eq!(dumps[1].1, b"kibana");
    assert!(compose.calls().iter().all(|c| c.verb == "logs"));
}

#[tokio::test]
async fn dump_stops_at_first_failure() {
    let compose = RecordingCompose {
        fail_verb: Some("logs"),
        ..RecordingCompose::default()
    };
    let err = orchestrator(&compose).dump().await.expect_err("dump");

    assert!(
        err.to_string().contains("dumping logs of elasticsearch failed"),
        "got: {err:#}"
    );
    assert_eq!(compose.calls().len(), 1);
}

// ── failures before the engine ───────────────────────────────────────────────

#[tokio::test]
async fn location_failure_is_reported_before_opening_project() {
    let compose = RecordingCompose::default();
    let stack = StackOrchestrator::new(
        StackSettings::default(),
        FixedLocations(None),
        compose.clone(),
        StaticConfig(Some(AppConfig::default())),
    );

    for err in [
        stack.build(&request(&[])).await.expect_err("build"),
        stack.down().await.expect_err("down"),
        stack.logs("kibana").await.expect_err("logs"),
    ] {
        assert_eq!(stack_error(&err), &StackError::LocateStack);
    }
    assert!(compose.opened().is_empty());
    assert!(compose.calls().is_empty());
}

#[tokio::test]
async fn project_failure_names_definition_path() {
    let compose = RecordingCompose {
        fail_open: true,
        ..RecordingCompose::default()
    };
    let err = orchestrator(&compose)
        .up(&request(&[]))
        .await
        .expect_err("up");

    assert_eq!(
        stack_error(&err),
        &StackError::CreateProject {
            path: root().join("stack").join("snapshot.yml")
        }
    );
    assert!(compose.calls().is_empty());
}

// ── settings ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn custom_settings_replace_fixed_names() {
    let compose = RecordingCompose::default();
    let settings = StackSettings {
        project_name: "test-stack".to_string(),
        definition_file: "compose.yml".to_string(),
        selector: ServiceSelector::new("fleet-server", "-ready"),
        dump_services: names(&["fleet-server"]),
    };
    let stack = StackOrchestrator::new(
        settings,
        FixedLocations(Some(root())),
        compose.clone(),
        StaticConfig(Some(AppConfig::default())),
    );

    stack.build(&request(&["kibana"])).await.expect("build");
    stack.build(&request(&["fleet-server"])).await.expect("build");

    let calls = compose.calls();
    assert_eq!(calls[0].opts.services, names(&["kibana", "kibana-ready"]));
    assert!(calls[1].opts.services.is_empty());
    assert_eq!(
        compose.opened()[0],
        ("test-stack".to_string(), root().join("stack").join("compose.yml"))
    );
}
