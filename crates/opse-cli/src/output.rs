//! Rendering of discovered profiles for the terminal.

use std::fmt::Write as _;

use opse_core::ProfileCollection;

pub(crate) fn render_json(profiles: &ProfileCollection) -> serde_json::Result<String> {
    let values: Vec<_> = profiles.iter().map(opse_core::Profile::to_json).collect();
    serde_json::to_string_pretty(&values)
}

pub(crate) fn render_text(profiles: &ProfileCollection) -> String {
    if profiles.is_empty() {
        return "No profiles found.".to_owned();
    }

    let mut out = String::new();
    for (i, profile) in profiles.iter().enumerate() {
        let name = [profile.firstname(), profile.lastname()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "Profile #{}: {name}", i + 1);
        for account in profile.accounts() {
            let _ = writeln!(
                out,
                "  [{}] {} <{}>",
                account.service(),
                account.username(),
                account.url()
            );
        }
    }
    out.trim_end().to_owned()
}
