use std::sync::Arc;

use async_trait::async_trait;

use opse_core::{
    Account, AppConfig, Capabilities, DataTypeInput, DataTypeOutput, Profile, ProfileCollection,
    Tool, ToolConfig,
};

use crate::account::FacebookAccount;
use crate::client::FacebookClient;
use crate::error::FacebookError;
use crate::lookup::{list_accounts, LookupOptions, LookupResult};

/// Finds Facebook accounts for a first/last name pair.
///
/// Each hit becomes its own profile: several people can share a name, so
/// hits are never merged into the default profile.
pub struct FacebookTool {
    client: FacebookClient,
    options: LookupOptions,
}

impl FacebookTool {
    #[must_use]
    pub fn new(client: FacebookClient, options: LookupOptions) -> Self {
        Self { client, options }
    }

    /// # Errors
    ///
    /// Returns [`FacebookError`] if the HTTP client cannot be built from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, FacebookError> {
        let client = FacebookClient::from_config(config)?;
        Ok(Self::new(
            client,
            LookupOptions {
                strict: config.strict,
            },
        ))
    }

    #[must_use]
    pub fn options(&self) -> LookupOptions {
        self.options
    }

    /// Runs the lookup with this tool's options.
    ///
    /// # Errors
    ///
    /// See [`list_accounts`].
    pub async fn list_accounts(
        &self,
        firstname: &str,
        lastname: &str,
    ) -> Result<LookupResult, FacebookError> {
        list_accounts(&self.client, firstname, lastname, self.options).await
    }
}

#[async_trait]
impl Tool for FacebookTool {
    fn name(&self) -> &'static str {
        "facebook"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            config: ToolConfig { active: true },
            inputs: vec![
                (DataTypeInput::FirstName, true),
                (DataTypeInput::LastName, true),
            ],
            outputs: vec![DataTypeOutput::Account],
        }
    }

    async fn execute(&self, default_profile: &Profile, profiles: &mut ProfileCollection) {
        let (Some(firstname), Some(lastname)) =
            (default_profile.firstname(), default_profile.lastname())
        else {
            tracing::warn!("Facebook lookup needs both a first and a last name");
            return;
        };

        // Already logged by the lookup.
        let Ok(result) = self.list_accounts(firstname, lastname).await else {
            return;
        };

        for candidate in result.candidates {
            let account: Arc<dyn Account> = Arc::new(FacebookAccount::from(candidate));
            let mut profile = default_profile.clone();
            profile.set_accounts(vec![account]);
            profiles.append(profile);
        }
    }
}
