//! Criteria listing command implementation.

use anyhow::{Result, bail};
use std::fmt::Write as _;
use warren_score::registry::{self, CriterionCategory, CriterionInfo};
use warren_traits::Verdict;

/// List the scoring criteria and verdict bands.
///
/// `name` shows a single criterion by name or alias; `category` keeps the
/// categories whose name contains the filter.
pub(crate) fn list_criteria(name: Option<String>, category: Option<String>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Buffett's Principles                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let text = match name {
        Some(name) => render_one(&name)?,
        None => render(category.as_deref()),
    };
    print!("{text}");
    Ok(())
}

/// Writing to a String cannot fail.
fn line(out: &mut String, text: &str) {
    let _ = writeln!(out, "{text}");
}

fn render_info(out: &mut String, info: &CriterionInfo) {
    line(out, &format!("{}:", info.name));
    line(out, &"-".repeat(60));
    line(out, &format!("  {}", info.category.description()));
    line(out, &format!("  Metric: {}", info.metric));
    line(out, &format!("  Rule:   {}", info.rule));
    line(out, "");
}

fn render_one(name: &str) -> Result<String> {
    let key = name.trim().to_lowercase();
    let Some(info) = registry::create_criterion(&key)
        .and_then(|criterion| registry::get_criterion_info(criterion.name()))
    else {
        bail!("Unknown criterion '{name}'. Run `uncle-warren criteria` for the full list.");
    };

    let mut out = String::new();
    render_info(&mut out, &info);
    Ok(out)
}

fn render(category: Option<&str>) -> String {
    let mut out = String::new();

    for cat in CriterionCategory::ALL {
        if let Some(filter) = category
            && !cat.name().to_lowercase().contains(&filter.to_lowercase())
        {
            continue;
        }
        for info in registry::criteria_by_category(&cat) {
            render_info(&mut out, &info);
        }
    }
    if out.is_empty() {
        line(&mut out, "No criteria match that category.");
        line(&mut out, "");
    }

    line(&mut out, "Verdicts:");
    line(
        &mut out,
        &format!(
            "  {:<24} score >= {}",
            Verdict::StrongCandidate.label(),
            Verdict::STRONG_CANDIDATE_MIN
        ),
    );
    line(
        &mut out,
        &format!(
            "  {:<24} score >= {}",
            Verdict::WorthWatching.label(),
            Verdict::WORTH_WATCHING_MIN
        ),
    );
    line(
        &mut out,
        &format!(
            "  {:<24} score <  {}",
            Verdict::DoesNotMeetCriteria.label(),
            Verdict::WORTH_WATCHING_MIN
        ),
    );
    line(&mut out, "");

    out
}
