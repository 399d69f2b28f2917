use crate::model::RunReport;
use crate::run::PlannedDay;
use anyhow::Result;
use console::style;

pub fn output_json(report: &RunReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn output_summary(report: &RunReport) -> Result<()> {
    println!("{}", style("Contribution Sync").bold());
    println!("{}", "─".repeat(50));
    println!("Repository:          {}", report.repository_path);
    println!("Range:               {} .. {}", report.from, report.to);
    println!("Total contributions: {}", report.total_contributions);
    println!("Days processed:      {}", report.days.len());
    println!("Commits made:        {}", style(report.commits_made()).green());

    if !report.warnings.is_empty() {
        println!("\n{}", style("Unparsable dates").bold());
        for w in &report.warnings {
            println!(
                "  entry {:>4} {:?} replayed on placeholder date: {}",
                w.index, w.raw, w.reason
            );
        }
    }

    let failed = report.failed_days();
    if failed == 0 {
        return Ok(());
    }

    println!("\nDays failed:         {}", style(failed).red());
    println!("\n{}", style("Failures").bold());
    for day in report.days.iter().filter(|d| d.is_failed()) {
        println!(
            "  {} {:>3}/{:<3} {}",
            day.date,
            day.committed,
            day.requested,
            day.error.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

pub fn output_plan(plan: &[PlannedDay]) -> Result<()> {
    if plan.is_empty() {
        println!("No days with contributions");
        return Ok(());
    }

    let total: usize = plan.iter().map(|d| d.slots.len()).sum();
    println!("{}", style("Planned Commits").bold());
    println!("{}", "─".repeat(50));
    for day in plan {
        let times: Vec<String> = day.slots.iter().map(|t| t.format("%H:%M:%S").to_string()).collect();
        println!("{} {:>3}  {}", day.date, style(day.slots.len()).green(), times.join(" "));
    }
    println!("\n{} commits over {} days", total, plan.len());
    Ok(())
}
