//! Command preview rendering.
//!
//! The preview is display-only: nothing here executes `step-ca`.

/// Values of the four generate-form fields at one moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub key_name: String,
    pub key_type: String,
    pub duration: String,
    pub duration_unit: String,
}

/// Render the `step-ca` command line for a form snapshot.
///
/// Values are substituted verbatim. The key name is wrapped in double quotes
/// but not escaped, so embedded quotes pass straight through.
pub fn render_preview(form: &FormSnapshot) -> String {
    format!(
        "step-ca command --key-name \"{}\" --key-type {} --duration {}{}",
        form.key_name, form.key_type, form.duration, form.duration_unit
    )
}

/// Command that renews a certificate for `duration_secs` more seconds.
pub fn render_renew_preview(cert_id: &str, duration_secs: u64) -> String {
    format!(
        "step-ca renew {id}.crt {id}.key --force --expires-in {duration_secs}s",
        id = cert_id
    )
}

pub fn render_revoke_preview(cert_id: &str) -> String {
    format!("step-ca revoke {}.crt", cert_id)
}
