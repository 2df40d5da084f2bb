use crate::models::{AppointmentRecord, VerificationResult};
use crate::utils::{escape_html, format_appointment_date};

pub const PLACEHOLDER: &str = "N/A";
pub const DEPARTMENT_PLACEHOLDER: &str = "General";

/// Renders the fragment for one verification state. The three trees are
/// disjoint: each carries its own `data-state` marker.
pub fn render_state(state: &VerificationResult, login_url: &str) -> String {
    match state {
        VerificationResult::Pending => render_loading(),
        VerificationResult::Failed { reason } => render_failed(reason, login_url),
        VerificationResult::Verified { record } => render_verified(record),
    }
}

pub fn render_loading() -> String {
    "            <div class=\"col-md-6 text-center\" data-state=\"pending\">
                <div class=\"spinner-border text-primary\" role=\"status\"></div>
                <p class=\"mt-3 text-muted\">Verifying appointment...</p>
            </div>"
        .to_string()
}

pub fn render_failed(reason: &str, login_url: &str) -> String {
    format!(
        "            <div class=\"col-md-6\" data-state=\"failed\">
                <div class=\"card border-danger shadow-sm\">
                    <div class=\"card-body text-center\">
                        <h4 class=\"card-title text-danger\">Verification Failed</h4>
                        <p class=\"card-text\">{reason}</p>
                        <a class=\"btn btn-primary\" href=\"{login}\">Go to Login</a>
                    </div>
                </div>
            </div>",
        reason = escape_html(reason),
        login = escape_html(login_url),
    )
}

pub fn render_verified(record: &AppointmentRecord) -> String {
    let date = record
        .date
        .as_deref()
        .map(format_appointment_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let rows = [
        ("Appointment ID", or_placeholder(&record.appointment_id, PLACEHOLDER)),
        ("Date", date),
        ("Time", or_placeholder(&record.time, PLACEHOLDER)),
        ("Patient Name", or_placeholder(&record.patient_name, PLACEHOLDER)),
        ("Patient ID", or_placeholder(&record.patient_pid, PLACEHOLDER)),
        ("Doctor", or_placeholder(&record.doctor_name, PLACEHOLDER)),
        ("Department", or_placeholder(&record.department, DEPARTMENT_PLACEHOLDER)),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            "                            <tr><th scope=\"row\">{}</th><td>{}</td></tr>",
            label,
            escape_html(value)
        )
    })
    .collect::<Vec<_>>()
    .join("\n");

    format!(
        "            <div class=\"col-md-8\" data-state=\"verified\">
                <div class=\"card border-success shadow-sm\">
                    <div class=\"card-header bg-success text-white d-flex justify-content-between align-items-center\">
                        <h4 class=\"mb-0\">Appointment Verified</h4>
                        <span class=\"badge {badge_class}\" data-status=\"{status}\">{badge_label}</span>
                    </div>
                    <div class=\"card-body\">
                        <table class=\"table table-borderless mb-0\">
{rows}
                        </table>
                    </div>
                </div>
            </div>",
        badge_class = record.status.badge_class(),
        status = record.status,
        badge_label = record.status.label(),
        rows = rows,
    )
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    value.clone().unwrap_or_else(|| placeholder.to_string())
}
