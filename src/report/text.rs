//! Console rendering of disaster reports

use colored::Colorize;

use crate::extract::DisasterType;
use crate::report::DisasterReport;

const BANNER_WIDTH: usize = 60;

/// Render one report in the banner-delimited console layout
pub fn render(report: &DisasterReport) -> String {
    let banner = "=".repeat(BANNER_WIDTH);

    let type_label = match report.disaster_type {
        DisasterType::Flood => report.disaster_type.to_string().cyan().bold(),
        DisasterType::Unknown => report.disaster_type.to_string().yellow(),
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", banner));
    out.push_str(&format!("{} {}\n", "Article:".bold(), report.article));
    out.push_str(&format!("{}\n", banner));
    out.push_str(&format!("{} {}\n", "Disaster Type:".bold(), type_label));
    out.push('\n');
    out.push_str(&format!("{} {}\n", "Event Date:".bold(), report.event_date));
    out.push('\n');
    out.push_str(&format!("{}\n", "Locations:".bold()));
    out.push_str(&format!(
        "  Districts: {}\n",
        display_list(&report.locations.districts)
    ));
    out.push_str(&format!(
        "  Upazilas:  {}\n",
        display_list(&report.locations.upazilas)
    ));
    out.push_str(&format!(
        "  Uncertain: {}\n",
        display_list(&report.locations.uncertain)
    ));
    out.push('\n');
    out.push_str(&format!("{}\n", "Casualties & Impact:".bold()));
    out.push_str(&format!(
        "  Deaths:   {}\n",
        report.casualties.deaths_display()
    ));
    out.push_str(&format!(
        "  Injured:  {}\n",
        report.casualties.injured_display()
    ));
    out.push_str(&format!(
        "  Affected: {}\n",
        report.casualties.affected_display()
    ));
    out.push_str(&format!("{}\n", banner));

    out
}

fn display_list(values: &[String]) -> String {
    if values.is_empty() {
        "none detected".to_string()
    } else {
        values.join(", ")
    }
}
