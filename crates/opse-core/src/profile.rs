//! Identity profiles and the collection tools append to.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::account::Account;
use crate::datatypes::DataTypeInput;

/// Aggregate record for one real-world identity candidate.
///
/// `Clone` yields an independent profile: the account list is copied, the
/// immutable account values themselves are shared.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    firstname: Option<String>,
    lastname: Option<String>,
    accounts: Vec<Arc<dyn Account>>,
}

impl Profile {
    #[must_use]
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            accounts: Vec::new(),
        }
    }

    #[must_use]
    pub fn firstname(&self) -> Option<&str> {
        self.firstname.as_deref()
    }

    #[must_use]
    pub fn lastname(&self) -> Option<&str> {
        self.lastname.as_deref()
    }

    pub fn set_firstname(&mut self, firstname: impl Into<String>) {
        self.firstname = Some(firstname.into());
    }

    pub fn set_lastname(&mut self, lastname: impl Into<String>) {
        self.lastname = Some(lastname.into());
    }

    #[must_use]
    pub fn accounts(&self) -> &[Arc<dyn Account>] {
        &self.accounts
    }

    /// Replaces the account list wholesale.
    pub fn set_accounts(&mut self, accounts: Vec<Arc<dyn Account>>) {
        self.accounts = accounts;
    }

    pub fn add_account(&mut self, account: Arc<dyn Account>) {
        self.accounts.push(account);
    }

    /// Whether the profile carries a non-blank value for `input`.
    #[must_use]
    pub fn has_input(&self, input: DataTypeInput) -> bool {
        let value = match input {
            DataTypeInput::FirstName => self.firstname(),
            DataTypeInput::LastName => self.lastname(),
        };
        value.is_some_and(|v| !v.trim().is_empty())
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "firstname": self.firstname,
            "lastname": self.lastname,
            "accounts": self.accounts.iter().map(|a| a.to_json()).collect::<Vec<_>>(),
        })
    }
}

/// Ordered, append-only set of profiles produced by tool runs.
#[derive(Debug, Clone, Default)]
pub struct ProfileCollection {
    profiles: Vec<Profile>,
}

impl ProfileCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.profiles.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Profile> {
        self.profiles
    }
}

impl Extend<Profile> for ProfileCollection {
    fn extend<I: IntoIterator<Item = Profile>>(&mut self, iter: I) {
        self.profiles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ProfileCollection {
    type Item = &'a Profile;
    type IntoIter = std::slice::Iter<'a, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
