//! Facebook people-search tool for opse.

pub mod account;
pub mod client;
pub mod error;
pub mod lookup;
pub mod parse;
mod retry;
pub mod tool;

pub use account::FacebookAccount;
pub use client::{FacebookClient, SearchPage};
pub use error::FacebookError;
pub use lookup::{list_accounts, LookupOptions, LookupResult};
pub use parse::Candidate;
pub use tool::FacebookTool;
