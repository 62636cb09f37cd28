use crate::error::{ExplorerError, Result};
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// CatalogFile
// ---------------------------------------------------------------------------

/// On-disk representation of a stage catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default = "default_version")]
    pub version: u32,
    pub stages: Vec<Stage>,
}

fn default_version() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// StageCatalog
// ---------------------------------------------------------------------------

/// A validated, ordered, immutable set of pipeline stages.
///
/// Construction is the only place stage invariants are checked: the list
/// must be non-empty and ids must be unique. Everything downstream can
/// treat the catalog as well-formed.
#[derive(Debug, Clone)]
pub struct StageCatalog {
    stages: Vec<Stage>,
}

impl StageCatalog {
    pub fn new(stages: Vec<Stage>) -> Result<Self> {
        if stages.is_empty() {
            return Err(ExplorerError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for stage in &stages {
            if !seen.insert(stage.id) {
                return Err(ExplorerError::DuplicateStage(stage.id));
            }
        }
        Ok(Self { stages })
    }

    /// Load and validate a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExplorerError::CatalogNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_yaml::from_str(&data)?;
        Self::new(file.stages)
    }

    /// Serialize the catalog to catalog-file YAML.
    pub fn to_yaml(&self) -> Result<String> {
        let file = CatalogFile {
            version: 1,
            stages: self.stages.clone(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn get(&self, id: u32) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    // -----------------------------------------------------------------------
    // Builtin catalog
    // -----------------------------------------------------------------------

    /// The embedded seven-stage reference pipeline.
    pub fn builtin() -> Self {
        let stages = vec![
            Stage::new(
                1,
                "Source",
                "Every change enters the pipeline as a commit to version control.",
                "Version control is the single source of truth: application code, \
                 pipeline definitions, and infrastructure declarations all live in \
                 the repository. A push or merge event triggers the pipeline, so \
                 every downstream stage can be traced back to an exact commit. \
                 Small, frequently integrated branches keep this stage cheap.",
                &["Git", "GitHub", "GitLab", "Bitbucket"],
            ),
            Stage::new(
                2,
                "Build",
                "Sources are compiled into versioned, reproducible artifacts.",
                "The build stage turns a commit into something runnable exactly \
                 once. Dependencies are resolved from lockfiles, compilation runs \
                 in a clean environment, and the output is stamped with the commit \
                 it came from. A failed build stops the pipeline before anything \
                 else spends time on the change.",
                &["Cargo", "Gradle", "Maven", "npm", "Make"],
            ),
            Stage::new(
                3,
                "Test",
                "Automated suites verify behavior before a human ever looks.",
                "Unit tests run on every commit; integration tests exercise the \
                 built artifact against real collaborators (databases, queues) in \
                 throwaway environments. The suite is the gate: a red test fails \
                 the pipeline, and flaky tests are treated as defects in their own \
                 right because they erode trust in the gate.",
                &["JUnit", "pytest", "Jest", "cargo test", "Testcontainers"],
            ),
            Stage::new(
                4,
                "Quality",
                "Static analysis and security scanning inspect what tests cannot.",
                "Linters and static analyzers catch defect patterns without \
                 executing code; dependency audits and container scans flag known \
                 vulnerabilities; secret detection keeps credentials out of \
                 history. Findings above the configured severity threshold fail \
                 the stage rather than accumulating as warnings nobody reads.",
                &["SonarQube", "ESLint", "Trivy", "Snyk", "gitleaks"],
            ),
            Stage::new(
                5,
                "Package",
                "Validated builds are sealed into immutable, registry-hosted artifacts.",
                "The artifact that passed testing is packaged — typically as a \
                 container image — tagged with the commit and a semantic version, \
                 and pushed to a registry. From here on, nothing is rebuilt: every \
                 environment runs the same bytes, which is what makes a later \
                 rollback trustworthy.",
                &["Docker", "Buildah", "Artifactory", "Nexus", "Harbor"],
            ),
            Stage::new(
                6,
                "Deploy",
                "The packaged artifact is promoted through environments to production.",
                "Deployment applies the packaged artifact to an environment, \
                 starting with development and ending with production. Progressive \
                 strategies — blue/green, canary, rolling — limit the blast radius \
                 of a bad release, and declarative tooling keeps the running state \
                 reconciled with what the repository says should be running.",
                &["Argo CD", "Flux", "Helm", "Terraform", "Spinnaker"],
            ),
            Stage::new(
                7,
                "Monitor",
                "Production telemetry closes the loop back to the next commit.",
                "Metrics, logs, and traces show whether the release actually \
                 behaves. Alerts page a human when service objectives are at risk, \
                 and deployment markers correlate regressions with the release \
                 that introduced them. What monitoring finds becomes the next \
                 change entering the Source stage.",
                &["Prometheus", "Grafana", "Datadog", "OpenTelemetry", "PagerDuty"],
            ),
        ];
        // Builtin content is fixed; construction cannot fail.
        Self { stages }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
