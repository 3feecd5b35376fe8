//! Tool registry and sequential orchestration.

use crate::profile::{Profile, ProfileCollection};
use crate::tool::Tool;

/// Central registry of all available tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(tool);
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Tools that are active and have every mandatory input available on
    /// `profile`.
    pub fn runnable<'a>(&'a self, profile: &'a Profile) -> impl Iterator<Item = &'a dyn Tool> {
        self.tools
            .iter()
            .map(|t| t.as_ref())
            .filter(move |tool| is_runnable(*tool, profile))
    }

    /// Runs every runnable tool to completion, one after another, and
    /// returns the profiles they appended.
    pub async fn run(&self, default_profile: &Profile) -> ProfileCollection {
        let mut profiles = ProfileCollection::new();

        for tool in self.runnable(default_profile) {
            let before = profiles.len();
            tracing::debug!(tool = tool.name(), "running tool");
            tool.execute(default_profile, &mut profiles).await;
            tracing::info!(
                tool = tool.name(),
                appended = profiles.len() - before,
                "tool finished"
            );
        }

        profiles
    }
}

fn is_runnable(tool: &dyn Tool, profile: &Profile) -> bool {
    let caps = tool.capabilities();
    if !caps.config.active {
        tracing::debug!(tool = tool.name(), "skipping inactive tool");
        return false;
    }

    let missing = caps.missing_inputs(profile);
    if !missing.is_empty() {
        tracing::debug!(
            tool = tool.name(),
            missing = ?missing,
            "skipping tool: mandatory inputs not available"
        );
        return false;
    }

    true
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
