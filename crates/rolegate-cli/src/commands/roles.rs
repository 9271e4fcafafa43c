//! `rolegate roles`: list the known roles.

use std::io::Write;

use anyhow::Result;
use rolegate_core::Role;
use strum::IntoEnumIterator;

pub fn run(mut output: impl Write) -> Result<()> {
    for role in Role::iter() {
        let access = if role.is_document_only() {
            "document-only"
        } else {
            "unrestricted"
        };
        writeln!(
            output,
            "{:<18} {:<26} {}",
            role.to_string(),
            role.namespaced_invocation(),
            access
        )?;
    }
    Ok(())
}
