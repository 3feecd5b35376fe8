use async_trait::async_trait;

use crate::datatypes::{DataTypeInput, DataTypeOutput};
use crate::profile::{Profile, ProfileCollection};

/// Static tool settings consulted before any run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolConfig {
    pub active: bool,
}

/// What a tool needs and what it can produce.
///
/// The registry uses this to decide whether a tool can run against a given
/// profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub config: ToolConfig,
    /// Input kinds paired with `true` when mandatory.
    pub inputs: Vec<(DataTypeInput, bool)>,
    pub outputs: Vec<DataTypeOutput>,
}

impl Capabilities {
    pub fn mandatory_inputs(&self) -> impl Iterator<Item = DataTypeInput> + '_ {
        self.inputs
            .iter()
            .filter(|(_, mandatory)| *mandatory)
            .map(|(input, _)| *input)
    }

    /// Mandatory inputs the profile does not carry.
    #[must_use]
    pub fn missing_inputs(&self, profile: &Profile) -> Vec<DataTypeInput> {
        self.mandatory_inputs()
            .filter(|input| !profile.has_input(*input))
            .collect()
    }
}

/// A discovery plugin.
///
/// `execute` is best-effort: failures are logged by the tool and never
/// surface to the caller, so one broken source cannot block the others.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn capabilities(&self) -> Capabilities;

    /// Reads identity data from `default_profile` and appends any newly
    /// discovered profiles to `profiles`. `default_profile` is never mutated.
    async fn execute(&self, default_profile: &Profile, profiles: &mut ProfileCollection);
}
