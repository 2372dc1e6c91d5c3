//! Plain-text report rendering.

use std::fmt::Write;

use crate::models::{DailyReport, MonthlyReport};

/// Renders report models into documents.
///
/// Implementations only lay out the pre-formatted strings in the models.
pub trait ReportFormatter {
    /// Renders a daily report.
    fn render_daily(&self, report: &DailyReport) -> String;

    /// Renders a monthly report.
    fn render_monthly(&self, report: &MonthlyReport) -> String;
}

/// Renders reports as fixed-width text tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("| {} |\n", padded.join(" | "))
}

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = format!(
        "+{}+\n",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&line(headers.iter().copied(), &widths));
    out.push_str(&rule);
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str), &widths));
    }
    out.push_str(&rule);
    out
}

impl ReportFormatter for TextFormatter {
    fn render_daily(&self, report: &DailyReport) -> String {
        let rows: Vec<Vec<String>> = report
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.staff.clone(),
                    r.status_label.clone(),
                    r.entry_time.clone(),
                    r.exit_time.clone(),
                    r.hours_display.clone(),
                    r.points_display.clone(),
                    r.remarks.clone(),
                ]
            })
            .collect();

        let s = &report.summary;
        let summary = vec![
            vec!["Staff Present".to_string(), s.staff_present.clone()],
            vec!["Total Duty Hours".to_string(), s.total_hours_display.clone()],
            vec!["Total Points Earned".to_string(), s.total_points_display.clone()],
            vec![
                "Average Hours per Person".to_string(),
                s.average_hours_display.clone(),
            ],
        ];

        let mut out = String::new();
        let _ = writeln!(out, "{}\n", report.title);
        out.push_str(&table(
            &[
                "Staff Member",
                "Status",
                "Entry Time",
                "Exit Time",
                "Duty Hours",
                "Points",
                "Remarks",
            ],
            &rows,
        ));
        out.push('\n');
        out.push_str(&table(&["Summary", "Values"], &summary));
        out
    }

    fn render_monthly(&self, report: &MonthlyReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", report.title);

        let _ = writeln!(out, "Monthly Performance Summary");
        let summary: Vec<Vec<String>> = report
            .summary
            .iter()
            .map(|r| {
                vec![
                    r.staff.clone(),
                    r.stats.present_days.to_string(),
                    r.total_hours_display.clone(),
                    r.average_hours_display.clone(),
                    r.total_points_display.clone(),
                    r.grade_label.clone(),
                ]
            })
            .collect();
        out.push_str(&table(
            &[
                "Staff Member",
                "Present Days",
                "Total Hours",
                "Avg Hours/Day",
                "Total Points",
                "Grade",
            ],
            &summary,
        ));

        let _ = writeln!(out, "\nDetailed Daily Records");
        for breakdown in &report.breakdowns {
            let _ = writeln!(out, "\n{}", breakdown.staff);
            let days: Vec<Vec<String>> = breakdown
                .days
                .iter()
                .map(|d| {
                    vec![
                        d.date_display.clone(),
                        d.status_label.clone(),
                        d.entry_time.clone(),
                        d.exit_time.clone(),
                        d.hours_display.clone(),
                        d.points_display.clone(),
                        d.remarks.clone(),
                    ]
                })
                .collect();
            out.push_str(&table(
                &["Date", "Status", "Entry", "Exit", "Hours", "Points", "Remarks"],
                &days,
            ));
        }

        let _ = writeln!(out, "\nPoints System Explanation");
        let legend: Vec<Vec<String>> = report
            .legend
            .iter()
            .map(|e| vec![e.activity.clone(), e.points_display.clone()])
            .collect();
        out.push_str(&table(&["Activity", "Points"], &legend));
        out
    }
}
