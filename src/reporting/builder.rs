//! Builds daily and monthly report models from stored records.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::{MonthlyAggregator, RestDayRule, working_days};
use crate::config::{AttendanceConfig, PointsTable};
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, AttendanceStatus, BreakdownRow, DailyReport, DailyRow, DailySummary,
    LegendEntry, MonthlyReport, MonthlySummaryRow, StaffBreakdown,
};
use crate::store::RecordMap;

use super::display::{
    breakdown_status_label, daily_status_label, hours_cell, one_place, signed, truncate,
};

const DAILY_REMARKS_WIDTH: usize = 30;
const BREAKDOWN_REMARKS_WIDTH: usize = 15;

fn time_cell(time: &Option<String>) -> String {
    time.clone().unwrap_or_else(|| "-".to_string())
}

/// Builds the report for one day.
///
/// Every roster member gets a row; `records` may contain other dates and
/// staff. Absent staff's points enter the day's total under the same
/// policy the monthly fold uses.
pub fn build_daily_report(
    date: NaiveDate,
    config: &AttendanceConfig,
    records: &RecordMap,
) -> DailyReport {
    let roster = &config.roster().staff;
    let count_absences = config.monthly().count_absence_penalty;

    let mut present_count = 0u32;
    let mut total_hours = Decimal::ZERO;
    let mut total_points = 0i64;

    let rows = roster
        .iter()
        .map(|staff| {
            let record = records.get(&(staff.clone(), date));
            if let Some(r) = record {
                if r.status.is_attended() {
                    present_count += 1;
                    total_hours += r.duty_hours;
                    total_points += r.points;
                } else if count_absences {
                    total_points += r.points;
                }
            }
            daily_row(staff, record)
        })
        .collect();

    let mean_hours = if present_count > 0 {
        total_hours / Decimal::from(present_count)
    } else {
        Decimal::ZERO
    };

    let summary = DailySummary {
        present_count,
        roster_size: roster.len() as u32,
        staff_present: format!("{}/{}", present_count, roster.len()),
        total_hours,
        total_hours_display: format!("{} hours", one_place(total_hours)),
        total_points,
        total_points_display: signed(total_points),
        average_hours: mean_hours.round_dp(2),
        average_hours_display: if present_count > 0 {
            format!("{}h", one_place(mean_hours))
        } else {
            "0h".to_string()
        },
    };

    DailyReport {
        date,
        title: format!("Daily Attendance Report - {}", date.format("%B %d, %Y")),
        rows,
        summary,
    }
}

fn daily_row(staff: &str, record: Option<&AttendanceRecord>) -> DailyRow {
    match record {
        Some(r) => DailyRow {
            staff: staff.to_string(),
            status: Some(r.status),
            status_label: daily_status_label(Some(r.status)).to_string(),
            entry_time: time_cell(&r.entry_time),
            exit_time: time_cell(&r.exit_time),
            duty_hours: r.duty_hours,
            hours_display: hours_cell(r.duty_hours, "h"),
            points: r.points,
            points_display: signed(r.points),
            remarks: truncate(&r.remarks, DAILY_REMARKS_WIDTH),
        },
        None => DailyRow {
            staff: staff.to_string(),
            status: None,
            status_label: daily_status_label(None).to_string(),
            entry_time: "-".to_string(),
            exit_time: "-".to_string(),
            duty_hours: Decimal::ZERO,
            hours_display: "-".to_string(),
            points: 0,
            points_display: signed(0),
            remarks: String::new(),
        },
    }
}

/// Builds the report for one month.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidMonth`] if `month` is not 1-12.
pub fn build_monthly_report<R: RestDayRule + ?Sized>(
    year: i32,
    month: u32,
    config: &AttendanceConfig,
    rest_days: &R,
    records: &RecordMap,
) -> EngineResult<MonthlyReport> {
    let days = working_days(year, month, rest_days)?;
    let roster = &config.roster().staff;

    let summary = MonthlyAggregator::from_config(config)
        .aggregate_roster(roster, records, &days)
        .into_iter()
        .map(|(staff, stats)| MonthlySummaryRow {
            staff,
            total_hours_display: format!("{}h", one_place(stats.total_hours)),
            average_hours_display: format!("{}h", one_place(stats.average_hours)),
            total_points_display: signed(stats.total_points),
            grade_label: stats.performance_grade.label().to_string(),
            stats,
        })
        .collect();

    let breakdowns = roster
        .iter()
        .map(|staff| StaffBreakdown {
            staff: staff.clone(),
            days: days
                .iter()
                .map(|date| breakdown_row(*date, records.get(&(staff.clone(), *date))))
                .collect(),
        })
        .collect();

    let title_month = days
        .first()
        .copied()
        .or_else(|| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default();

    Ok(MonthlyReport {
        year,
        month,
        title: format!("Monthly Attendance Report - {} {}", title_month, year),
        working_days: days,
        summary,
        breakdowns,
        legend: legend(config.points()),
    })
}

fn breakdown_row(date: NaiveDate, record: Option<&AttendanceRecord>) -> BreakdownRow {
    let status: Option<AttendanceStatus> = record.map(|r| r.status);
    BreakdownRow {
        date,
        date_display: date.format("%d-%m").to_string(),
        status_label: breakdown_status_label(status).to_string(),
        entry_time: record.map_or_else(|| "-".to_string(), |r| time_cell(&r.entry_time)),
        exit_time: record.map_or_else(|| "-".to_string(), |r| time_cell(&r.exit_time)),
        hours_display: hours_cell(record.map_or(Decimal::ZERO, |r| r.duty_hours), ""),
        points_display: signed(record.map_or(0, |r| r.points)),
        remarks: record
            .map(|r| truncate(&r.remarks, BREAKDOWN_REMARKS_WIDTH))
            .unwrap_or_default(),
    }
}

/// Renders the points table as a legend.
///
/// # Example
///
/// ```
/// use attendance_points::config::PointsTable;
/// use attendance_points::reporting::legend;
///
/// let entries = legend(&PointsTable::default());
/// assert_eq!(entries[0].activity, "Full Day (7.5+ hours)");
/// assert_eq!(entries[0].points_display, "+10");
/// ```
pub fn legend(points: &PointsTable) -> Vec<LegendEntry> {
    let full = points.full_day_threshold.normalize();
    let half = points.half_day_threshold.normalize();
    let entry = |activity: String, value: i64| LegendEntry {
        activity,
        points_display: signed(value),
    };

    vec![
        entry(format!("Full Day ({}+ hours)", full), points.full_day_points),
        entry(
            format!("Half Day ({} to under {} hours)", half, full),
            points.half_day_points,
        ),
        entry(
            format!("Early Arrival (by {})", points.early_cutoff.format("%H:%M")),
            points.early_arrival_points,
        ),
        entry(
            format!("Late Arrival (after {})", points.late_cutoff.format("%H:%M")),
            points.late_arrival_points,
        ),
        entry(
            "Overtime (per whole hour)".to_string(),
            points.overtime_points_per_hour,
        ),
        entry("Field Work/Warehouse".to_string(), points.field_work_bonus),
        entry("Absent".to_string(), points.absent_penalty),
        entry(
            "Perfect Monthly Attendance".to_string(),
            points.perfect_attendance_bonus,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{FixedRestDay, ScoringEngine, build_record};
    use crate::models::PerformanceGrade;
    use chrono::Weekday;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn insert(
        records: &mut RecordMap,
        staff: &str,
        date: &str,
        status: AttendanceStatus,
        times: Option<(&str, &str)>,
        remarks: Option<&str>,
    ) {
        let record = build_record(
            &ScoringEngine::default(),
            staff,
            make_date(date),
            status,
            times.map(|t| t.0),
            times.map(|t| t.1),
            remarks,
        );
        records.insert(record.key(), record);
    }

    fn monday_records() -> RecordMap {
        let mut records = RecordMap::new();
        insert(
            &mut records,
            "Alice Morgan",
            "2026-03-02",
            AttendanceStatus::Present,
            Some(("09:45", "18:00")),
            Some("Stayed late to close the quarterly stock count"),
        );
        insert(
            &mut records,
            "Bilal Ahmed",
            "2026-03-02",
            AttendanceStatus::FieldWork,
            None,
            None,
        );
        insert(
            &mut records,
            "Chen Wei",
            "2026-03-02",
            AttendanceStatus::Absent,
            None,
            None,
        );
        records
    }

    #[test]
    fn test_daily_report_rows_follow_roster() {
        let config = AttendanceConfig::default();
        let report = build_daily_report(make_date("2026-03-02"), &config, &monday_records());

        assert_eq!(report.title, "Daily Attendance Report - March 02, 2026");
        let staff: Vec<_> = report.rows.iter().map(|r| r.staff.as_str()).collect();
        assert_eq!(staff, config.roster().staff);

        let alice = &report.rows[0];
        assert_eq!(alice.status_label, "Office");
        assert_eq!(alice.entry_time, "09:45");
        assert_eq!(alice.hours_display, "8.3h");
        assert_eq!(alice.points_display, "+12");
        assert_eq!(alice.remarks, "Stayed late to close the quart...");

        let bilal = &report.rows[1];
        assert_eq!(bilal.status_label, "Field/Warehouse");
        assert_eq!(bilal.entry_time, "-");
        assert_eq!(bilal.hours_display, "7.5h");

        let chen = &report.rows[2];
        assert_eq!(chen.status_label, "Absent");
        assert_eq!(chen.hours_display, "-");
        assert_eq!(chen.points_display, "-5");

        let dana = &report.rows[3];
        assert_eq!(dana.status, None);
        assert_eq!(dana.status_label, "Not Recorded");
        assert_eq!(dana.points_display, "0");
    }

    #[test]
    fn test_daily_summary() {
        let config = AttendanceConfig::default();
        let report = build_daily_report(make_date("2026-03-02"), &config, &monday_records());
        let s = &report.summary;

        assert_eq!(s.staff_present, "2/4");
        assert_eq!(s.total_hours, Decimal::new(1575, 2));
        assert_eq!(s.total_hours_display, "15.8 hours");
        // 12 + 10 - 5
        assert_eq!(s.total_points, 17);
        assert_eq!(s.total_points_display, "+17");
        assert_eq!(s.average_hours_display, "7.9h");
    }

    #[test]
    fn test_daily_average_rounds_once() {
        let config = AttendanceConfig::default();
        let date = make_date("2026-03-03");
        let mut records = RecordMap::new();
        for (staff, hours) in [
            ("Alice Morgan", 785),
            ("Bilal Ahmed", 785),
            ("Chen Wei", 784),
        ] {
            let record = AttendanceRecord {
                staff: staff.to_string(),
                date,
                status: AttendanceStatus::Present,
                entry_time: Some("09:00".to_string()),
                exit_time: None,
                duty_hours: Decimal::new(hours, 2),
                remarks: String::new(),
                points: 12,
            };
            records.insert(record.key(), record);
        }

        let summary = build_daily_report(date, &config, &records).summary;

        // 23.54 / 3 = 7.8466...
        assert_eq!(summary.average_hours, Decimal::new(785, 2));
        assert_eq!(summary.average_hours_display, "7.8h");
    }

    #[test]
    fn test_empty_day_summary() {
        let config = AttendanceConfig::default();
        let report = build_daily_report(make_date("2026-03-03"), &config, &monday_records());
        assert_eq!(report.summary.staff_present, "0/4");
        assert_eq!(report.summary.total_points_display, "0");
        assert_eq!(report.summary.average_hours_display, "0h");
    }

    #[test]
    fn test_monthly_report_structure() {
        let config = AttendanceConfig::default();
        let report = build_monthly_report(
            2026,
            3,
            &config,
            &FixedRestDay(Weekday::Sun),
            &monday_records(),
        )
        .unwrap();

        assert_eq!(report.title, "Monthly Attendance Report - March 2026");
        assert_eq!(report.working_days.len(), 26);
        assert_eq!(report.summary.len(), 4);
        assert_eq!(report.breakdowns.len(), 4);
        assert!(report.breakdowns.iter().all(|b| b.days.len() == 26));
        assert_eq!(report.legend.len(), 8);

        let alice = &report.summary[0];
        assert_eq!(alice.stats.total_points, 12);
        assert_eq!(alice.total_points_display, "+12");
        assert_eq!(alice.total_hours_display, "8.3h");
        assert_eq!(alice.grade_label, "Poor");

        let dana = &report.summary[3];
        assert_eq!(dana.stats.performance_grade, PerformanceGrade::NotApplicable);
        assert_eq!(dana.grade_label, "Not Applicable");

        let first_day = &report.breakdowns[0].days[0];
        assert_eq!(first_day.date_display, "02-03");
        assert_eq!(first_day.status_label, "Office");
        assert_eq!(first_day.hours_display, "8.3");
        assert_eq!(first_day.remarks, "Stayed late to ...");

        let unrecorded = &report.breakdowns[3].days[0];
        assert_eq!(unrecorded.status_label, "-");
        assert_eq!(unrecorded.hours_display, "-");
    }

    #[test]
    fn test_monthly_report_invalid_month() {
        let result = build_monthly_report(
            2026,
            0,
            &AttendanceConfig::default(),
            &FixedRestDay(Weekday::Sun),
            &RecordMap::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_legend_reflects_configuration() {
        let points = PointsTable {
            late_arrival_points: -3,
            ..PointsTable::default()
        };
        let entries = legend(&points);
        let late = entries
            .iter()
            .find(|e| e.activity.starts_with("Late Arrival"))
            .unwrap();
        assert_eq!(late.activity, "Late Arrival (after 10:30)");
        assert_eq!(late.points_display, "-3");
        assert_eq!(entries[1].activity, "Half Day (4 to under 7.5 hours)");
    }
}
