//! Static reference tables rendered alongside the stage explorer:
//! environment progression, DORA metrics, and the toolchain catalog.
//! All fixtures, no runtime state.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub name: String,
    pub purpose: String,
    /// What has to happen before an artifact is promoted into this environment.
    pub promotion_gate: String,
}

pub fn environments() -> Vec<Environment> {
    let rows = [
        (
            "development",
            "Fast feedback for the author; disposable and frequently broken.",
            "Every commit deploys automatically.",
        ),
        (
            "integration",
            "Changes from all contributors meet for the first time.",
            "Merge to the main branch with a green build and test run.",
        ),
        (
            "staging",
            "Production-parity rehearsal: same topology, sanitized data.",
            "A release candidate that passed quality and packaging.",
        ),
        (
            "production",
            "The environment users actually touch.",
            "Approved release, rolled out progressively with rollback ready.",
        ),
    ];
    rows.iter()
        .map(|(name, purpose, gate)| Environment {
            name: name.to_string(),
            purpose: purpose.to_string(),
            promotion_gate: gate.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// DoraMetric
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoraMetric {
    pub name: String,
    pub measures: String,
    pub elite_target: String,
}

pub fn dora_metrics() -> Vec<DoraMetric> {
    let rows = [
        (
            "Deployment frequency",
            "How often the organization releases to production.",
            "On demand, multiple times per day",
        ),
        (
            "Lead time for changes",
            "Time from commit to that commit running in production.",
            "Less than one day",
        ),
        (
            "Change failure rate",
            "Share of production deployments that cause a degradation.",
            "0–15%",
        ),
        (
            "Failed deployment recovery time",
            "Time to restore service after a deployment causes a failure.",
            "Less than one hour",
        ),
    ];
    rows.iter()
        .map(|(name, measures, target)| DoraMetric {
            name: name.to_string(),
            measures: measures.to_string(),
            elite_target: target.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// ToolCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
    pub category: String,
    pub tools: Vec<String>,
}

pub fn tool_categories() -> Vec<ToolCategory> {
    let rows: [(&str, &[&str]); 6] = [
        (
            "CI servers",
            &["Jenkins", "GitHub Actions", "GitLab CI", "CircleCI", "Buildkite"],
        ),
        (
            "Artifact registries",
            &["Artifactory", "Nexus", "Harbor", "Amazon ECR"],
        ),
        (
            "Containers & orchestration",
            &["Docker", "Podman", "Kubernetes", "Nomad"],
        ),
        (
            "Deployment & GitOps",
            &["Argo CD", "Flux", "Spinnaker", "Octopus Deploy"],
        ),
        (
            "Infrastructure as code",
            &["Terraform", "Pulumi", "Ansible", "CloudFormation"],
        ),
        (
            "Observability",
            &["Prometheus", "Grafana", "Datadog", "New Relic", "OpenTelemetry"],
        ),
    ];
    rows.iter()
        .map(|(category, tools)| ToolCategory {
            category: category.to_string(),
            tools: tools.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
