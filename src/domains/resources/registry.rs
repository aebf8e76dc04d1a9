//! Resource catalog - the static table every registration is driven from.
//!
//! One record per documentation resource. The service registers these in
//! order at startup, and the `list_resources` tool derives its grouped
//! catalog from the same table, so listing and lookup can never drift.

/// URI scheme all resources live under.
pub const URI_SCHEME: &str = "gridiron://";

/// Declared media type of every resource payload in this catalog.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// Static descriptor for one documentation resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSpec {
    /// Stable caller-visible identifier, including the scheme.
    pub uri: &'static str,

    /// Human-readable label.
    pub title: &'static str,

    /// One-line description.
    pub description: &'static str,

    /// Document store key backing this resource.
    pub doc_file: &'static str,
}

impl ResourceSpec {
    /// Category of this resource, derived from the first URI path segment
    /// (`gridiron://project/overview` -> `project`, `gridiron://roadmap` ->
    /// `roadmap`). Used to group the `list_resources` tool payload.
    pub fn category(&self) -> &'static str {
        let path = self.uri.strip_prefix(URI_SCHEME).unwrap_or(self.uri);
        match path.split_once('/') {
            Some((category, _)) => category,
            None => path,
        }
    }
}

/// All resources served by this process, in registration order.
pub const CATALOG: &[ResourceSpec] = &[
    // --- Project documentation ---
    ResourceSpec {
        uri: "gridiron://project/overview",
        title: "Project Overview",
        description: "Vision, repos, tech stack",
        doc_file: "project-overview.md",
    },
    ResourceSpec {
        uri: "gridiron://project/repos",
        title: "Repository Map",
        description: "All repos and their purposes",
        doc_file: "repository-map.md",
    },
    ResourceSpec {
        uri: "gridiron://project/architecture",
        title: "System Architecture",
        description: "How components interact",
        doc_file: "architecture.md",
    },
    // --- Coding guidelines ---
    ResourceSpec {
        uri: "gridiron://guidelines/csharp",
        title: "C# Guidelines",
        description: "Backend API patterns",
        doc_file: "guidelines-csharp.md",
    },
    ResourceSpec {
        uri: "gridiron://guidelines/typescript",
        title: "TypeScript/React Guidelines",
        description: "Frontend patterns",
        doc_file: "guidelines-typescript.md",
    },
    ResourceSpec {
        uri: "gridiron://guidelines/testing",
        title: "Testing Guidelines",
        description: "All repos",
        doc_file: "guidelines-testing.md",
    },
    ResourceSpec {
        uri: "gridiron://guidelines/git",
        title: "Git Workflow",
        description: "Branching, commits, PRs",
        doc_file: "guidelines-git.md",
    },
    ResourceSpec {
        uri: "gridiron://guidelines/architecture-principles",
        title: "Architecture Principles",
        description: "Repository pattern, data access rules",
        doc_file: "architecture-principles.md",
    },
    // --- Simulation engine ---
    ResourceSpec {
        uri: "gridiron://engine/philosophy",
        title: "Simulation Philosophy",
        description: "Outcome-first approach",
        doc_file: "engine-philosophy.md",
    },
    ResourceSpec {
        uri: "gridiron://engine/statistical-targets",
        title: "Statistical Targets",
        description: "NFL statistics to match",
        doc_file: "statistical-targets.md",
    },
    ResourceSpec {
        uri: "gridiron://engine/attribute-mappings",
        title: "Attribute Mappings",
        description: "Player attributes to probabilities",
        doc_file: "attribute-mappings.md",
    },
    // --- Frontend design ---
    ResourceSpec {
        uri: "gridiron://frontend/design-system",
        title: "Frontend Design System",
        description: "Colors, typography, components",
        doc_file: "frontend-design.md",
    },
    // --- Agent personas ---
    ResourceSpec {
        uri: "gridiron://agents/dev",
        title: "Dev Agent",
        description: "Development persona",
        doc_file: "agent-dev.md",
    },
    ResourceSpec {
        uri: "gridiron://agents/plan",
        title: "Plan Agent",
        description: "Planning persona",
        doc_file: "agent-plan.md",
    },
    ResourceSpec {
        uri: "gridiron://agents/qa",
        title: "QA Agent",
        description: "QA/testing persona",
        doc_file: "agent-qa.md",
    },
    ResourceSpec {
        uri: "gridiron://agents/review",
        title: "Review Agent",
        description: "Code review persona",
        doc_file: "agent-review.md",
    },
    ResourceSpec {
        uri: "gridiron://agents/requirements",
        title: "Requirements Agent",
        description: "Requirements refinement persona",
        doc_file: "agent-requirements.md",
    },
    // --- Roadmap ---
    ResourceSpec {
        uri: "gridiron://roadmap",
        title: "Roadmap",
        description: "Project milestones",
        doc_file: "roadmap.md",
    },
];
