//! Page content model.
//!
//! Everything the showcase page renders is pre-computed data in
//! [`PageContent`]: the static sections are inert, and the interactive
//! sections (console snippets, metric counters) read their inputs from
//! here. Content is immutable once loaded.
//!
//! A built-in default page ships in the binary; an alternate page can be
//! loaded from a TOML file (`vitrine --content page.toml`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One named block of example text shown in the command console.
///
/// `body` keeps its embedded line breaks; the copy action writes it to the
/// clipboard verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    /// Tab label, e.g. "Installation".
    pub title: String,
    /// Content-type tag shown in the console chrome ("bash", "rust", ...).
    /// Cosmetic only; classification does not branch on it.
    pub dialect: String,
    /// Raw multi-line text.
    pub body: String,
}

impl Snippet {
    /// Lines of the body in display order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }
}

/// One animated metric display.
#[derive(Debug, Clone, Deserialize)]
pub struct Metric {
    /// Value the counter animates up to.
    pub target: u64,
    /// Suffix rendered after the number ("%", " min", "+").
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// A static before/after row in the comparison table.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub baseline: f64,
    pub optimized: f64,
    pub unit: String,
}

/// A static feature card.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// A static value/label pair (social proof, console quick stats).
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// One numbered step in the getting-started section.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub command: String,
}

/// A footer link group.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkGroup {
    pub title: String,
    pub links: Vec<String>,
}

/// The hero section.
#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub tagline: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// The whole page, top to bottom.
///
/// Section order here is display order; the console and metrics sections
/// are the only ones with runtime state attached.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub announcement: String,
    pub hero: Hero,
    pub social_proof: Vec<Stat>,
    pub features_heading: String,
    pub features: Vec<Feature>,
    pub capabilities: Vec<Feature>,
    pub console_heading: String,
    pub console_subheading: String,
    pub snippets: Vec<Snippet>,
    pub quick_stats: Vec<Stat>,
    pub metrics_heading: String,
    pub metrics_subheading: String,
    pub metrics: Vec<Metric>,
    pub comparison: Vec<ComparisonRow>,
    pub steps_heading: String,
    pub steps: Vec<Step>,
    pub footer: Vec<LinkGroup>,
    pub footer_note: String,
}

impl PageContent {
    /// Loads a page from a TOML file.
    ///
    /// Missing sections fall back to their defaults, so a content file only
    /// needs to override what it cares about.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content from {}", path.display()))?;
        let page: PageContent = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse content from {}", path.display()))?;
        page.validate()?;
        tracing::debug!(path = %path.display(), snippets = page.snippets.len(), "loaded content");
        Ok(page)
    }

    /// Rejects content the interactive sections cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.snippets.is_empty() {
            anyhow::bail!("content has no console snippets; at least one is required");
        }
        if self.metrics.is_empty() {
            anyhow::bail!("content has no metrics; at least one is required");
        }
        Ok(())
    }
}

impl Default for PageContent {
    fn default() -> Self {
        default_page()
    }
}

/// The built-in showcase page for modkit, a modular application framework.
fn default_page() -> PageContent {
    PageContent {
        announcement: "modkit 0.4 is out: hot module reload and a reworked registry".to_string(),
        hero: Hero {
            headline: "Build modular Rust services".to_string(),
            tagline: "modkit scaffolds, wires and ships self-contained modules \
                      so large applications stay small on the inside."
                .to_string(),
            actions: vec!["Get Started".to_string(), "Read the Book".to_string()],
        },
        social_proof: vec![
            Stat {
                value: "1000+".to_string(),
                label: "Active developers".to_string(),
            },
            Stat {
                value: "4.9/5".to_string(),
                label: "Rating".to_string(),
            },
            Stat {
                value: "40%".to_string(),
                label: "Faster development".to_string(),
            },
        ],
        features_heading: "Why modules".to_string(),
        features: vec![
            Feature {
                title: "Modular architecture".to_string(),
                description: "Every module owns its routes, services and migrations".to_string(),
            },
            Feature {
                title: "Developer experience".to_string(),
                description: "One command from empty directory to running module".to_string(),
            },
            Feature {
                title: "Performance".to_string(),
                description: "Registry resolution happens at startup, not per request".to_string(),
            },
            Feature {
                title: "Production ready".to_string(),
                description: "Health checks, graceful shutdown and config layering built in"
                    .to_string(),
            },
        ],
        capabilities: vec![
            Feature {
                title: "Code generation".to_string(),
                description: "Scaffolding with the project's own conventions".to_string(),
            },
            Feature {
                title: "Schema migrations".to_string(),
                description: "Versioned, per-module, reversible".to_string(),
            },
            Feature {
                title: "Config management".to_string(),
                description: "Environment-specific layering".to_string(),
            },
        ],
        console_heading: "Get started in minutes".to_string(),
        console_subheading: "Three commands from an empty directory to a wired module".to_string(),
        snippets: default_snippets(),
        quick_stats: vec![
            Stat {
                value: "3 min".to_string(),
                label: "Setup time".to_string(),
            },
            Stat {
                value: "20+".to_string(),
                label: "Generator commands".to_string(),
            },
            Stat {
                value: "100%".to_string(),
                label: "Type safe".to_string(),
            },
        ],
        metrics_heading: "Built for speed".to_string(),
        metrics_subheading: "Measured against the same service split by hand".to_string(),
        metrics: vec![
            Metric {
                target: 37,
                suffix: "%".to_string(),
                label: "Faster cold start".to_string(),
                description: "Modules register once at startup".to_string(),
            },
            Metric {
                target: 29,
                suffix: "%".to_string(),
                label: "Lower resident memory".to_string(),
                description: "Unused modules stay unloaded".to_string(),
            },
            Metric {
                target: 70,
                suffix: "%".to_string(),
                label: "Faster route registration".to_string(),
                description: "Routes resolve through a prebuilt table".to_string(),
            },
            Metric {
                target: 58,
                suffix: "%".to_string(),
                label: "Faster asset bundling".to_string(),
                description: "Per-module bundles build in parallel".to_string(),
            },
        ],
        comparison: vec![
            ComparisonRow {
                label: "Service boot time".to_string(),
                baseline: 2.4,
                optimized: 1.5,
                unit: "s".to_string(),
            },
            ComparisonRow {
                label: "Resident memory".to_string(),
                baseline: 85.0,
                optimized: 60.0,
                unit: "MB".to_string(),
            },
            ComparisonRow {
                label: "Route registration".to_string(),
                baseline: 180.0,
                optimized: 54.0,
                unit: "ms".to_string(),
            },
            ComparisonRow {
                label: "Asset bundling".to_string(),
                baseline: 3.2,
                optimized: 1.3,
                unit: "s".to_string(),
            },
        ],
        steps_heading: "From zero to shipped".to_string(),
        steps: vec![
            Step {
                title: "Install the CLI".to_string(),
                description: "One binary, no runtime dependencies".to_string(),
                command: "cargo install modkit-cli".to_string(),
            },
            Step {
                title: "Create your first module".to_string(),
                description: "Scaffolds the module crate and wires it into the registry"
                    .to_string(),
                command: "modkit new user-management".to_string(),
            },
            Step {
                title: "Generate components".to_string(),
                description: "Services, handlers and migrations from one command".to_string(),
                command: "modkit generate service users".to_string(),
            },
            Step {
                title: "Ship it".to_string(),
                description: "Build a release bundle with health checks included".to_string(),
                command: "modkit build --release".to_string(),
            },
        ],
        footer: vec![
            LinkGroup {
                title: "Docs".to_string(),
                links: vec![
                    "Guide".to_string(),
                    "API reference".to_string(),
                    "Examples".to_string(),
                ],
            },
            LinkGroup {
                title: "Community".to_string(),
                links: vec![
                    "GitHub".to_string(),
                    "Discussions".to_string(),
                    "Chat".to_string(),
                ],
            },
            LinkGroup {
                title: "Project".to_string(),
                links: vec![
                    "Changelog".to_string(),
                    "Roadmap".to_string(),
                    "License".to_string(),
                ],
            },
        ],
        footer_note: "modkit is MIT licensed and built in the open".to_string(),
    }
}

fn default_snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            title: "Installation".to_string(),
            dialect: "bash".to_string(),
            body: "# Install the modkit CLI\n\
                   cargo install modkit-cli\n\
                   \n\
                   # Scaffold the workspace manifest\n\
                   modkit init\n\
                   \n\
                   # Verify the toolchain\n\
                   modkit doctor"
                .to_string(),
        },
        Snippet {
            title: "Create Module".to_string(),
            dialect: "bash".to_string(),
            body: "# Generate a new module\n\
                   modkit new user-management\n\
                   \n\
                   # Add a service with request handlers\n\
                   modkit generate service users --handlers\n\
                   \n\
                   # Wire the module into the registry\n\
                   modkit link user-management"
                .to_string(),
        },
        Snippet {
            title: "Module Structure".to_string(),
            dialect: "rust".to_string(),
            body: "// modules/user_management/src/lib.rs\n\
                   \n\
                   use modkit::prelude::*;\n\
                   use modkit::registry::Registry;\n\
                   \n\
                   pub struct UserManagement;\n\
                   \n\
                   impl Module for UserManagement {\n    \
                       fn register(&self, registry: &mut Registry) {\n        \
                           registry.service::<UserService>();\n    \
                       }\n\
                   }"
                .to_string(),
        },
    ]
}
