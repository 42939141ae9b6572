//! # Traffic Analyzer
//!
//! Derives staffing recommendations from the shape of customer traffic
//! across a trailing multi-day window.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    analyze_traffic(history, ...)                        │
//! │                                                                         │
//! │  history ──► window filter ──► (day, hour) counts                       │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │              per-hour average over DAYS OBSERVED IN THAT HOUR           │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │              classify vs busiest hour (≥70% high, ≥40% medium)         │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │              collapse contiguous same-level runs ──► staffing           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Denominator Choice
//! An hour's average divides by the number of days that actually had traffic
//! in that hour, not the number of days in the window. A snack bar closed on
//! Mondays should not see every hour's average dragged down by one seventh.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, Timelike, Weekday};

use crate::types::{PeakHour, StaffRecommendation, TrafficAnalysis, TrafficLevel, Transaction};
use crate::{CLOSE_HOUR, OPEN_HOUR, OPERATING_HOURS};

/// Share of the busiest hour's average above which an hour is `High`.
const HIGH_THRESHOLD: f64 = 0.7;
/// Share of the busiest hour's average above which an hour is `Medium`.
const MEDIUM_THRESHOLD: f64 = 0.4;

/// Per-(day, hour) accumulator.
#[derive(Clone, Copy, Default)]
struct HourTally {
    customers: u32,
    revenue_cents: i64,
}

/// Analyzes traffic over `[reference − window_days, reference]`.
///
/// An empty window yields all-zero averages with every hour classified
/// `Low`; the zero-max case is special-cased so no 0/0 comparison occurs.
pub fn analyze_traffic(
    history: &[Transaction],
    window_days: u64,
    reference: NaiveDate,
) -> TrafficAnalysis {
    let window_start = reference - Days::new(window_days);

    let recent: Vec<&Transaction> = history
        .iter()
        .filter(|t| {
            let date = t.created_at.date_naive();
            date >= window_start && date <= reference
        })
        .collect();

    // Group by calendar day, then by hour within the operating window
    let mut day_hour: HashMap<NaiveDate, [HourTally; OPERATING_HOURS]> = HashMap::new();

    for t in &recent {
        let hour = t.created_at.hour();
        let Some(idx) = hour_index(hour) else {
            continue;
        };
        let tallies = day_hour
            .entry(t.created_at.date_naive())
            .or_insert([HourTally::default(); OPERATING_HOURS]);
        tallies[idx].customers += 1;
        tallies[idx].revenue_cents += t.total_cents;
    }

    // Average each hour over the days that observed it
    let mut averages = [0.0_f64; OPERATING_HOURS];
    let mut revenue_averages = [0.0_f64; OPERATING_HOURS];

    for idx in 0..OPERATING_HOURS {
        let mut customers = 0_u32;
        let mut revenue = 0_i64;
        let mut days_observed = 0_u32;

        for tallies in day_hour.values() {
            if tallies[idx].customers > 0 {
                customers += tallies[idx].customers;
                revenue += tallies[idx].revenue_cents;
                days_observed += 1;
            }
        }

        if days_observed > 0 {
            averages[idx] = customers as f64 / days_observed as f64;
            revenue_averages[idx] = revenue as f64 / days_observed as f64;
        }
    }

    let max_average = averages.iter().copied().fold(0.0_f64, f64::max);

    let peak_hours: Vec<PeakHour> = (0..OPERATING_HOURS)
        .map(|idx| PeakHour {
            hour: OPEN_HOUR + idx as u32,
            average_customers: averages[idx],
            average_revenue_cents: revenue_averages[idx],
            level: classify(averages[idx], max_average),
        })
        .collect();

    let recommendations = staff_recommendations(&peak_hours);
    let (busiest_day, quietest_day) = weekday_extremes(&recent);

    TrafficAnalysis {
        average_customers_per_hour: averages.iter().sum::<f64>() / OPERATING_HOURS as f64,
        peak_hours,
        recommendations,
        busiest_day,
        quietest_day,
    }
}

/// Maps an hour-of-day onto the operating-window index, if inside it.
fn hour_index(hour: u32) -> Option<usize> {
    if (OPEN_HOUR..=CLOSE_HOUR).contains(&hour) {
        Some((hour - OPEN_HOUR) as usize)
    } else {
        None
    }
}

/// Classifies one hour's average against the busiest hour's average.
///
/// `max == 0` means the whole window was empty; every hour is `Low` by
/// definition rather than the result of a 0/0 comparison.
fn classify(average: f64, max: f64) -> TrafficLevel {
    if max == 0.0 {
        TrafficLevel::Low
    } else if average >= max * HIGH_THRESHOLD {
        TrafficLevel::High
    } else if average >= max * MEDIUM_THRESHOLD {
        TrafficLevel::Medium
    } else {
        TrafficLevel::Low
    }
}

/// Collapses the hour sequence into maximal contiguous same-level runs.
///
/// Each run becomes one recommendation spanning `[first, last + 1)`.
fn staff_recommendations(peak_hours: &[PeakHour]) -> Vec<StaffRecommendation> {
    let mut recommendations = Vec::new();
    let mut run: Option<(u32, TrafficLevel)> = None;

    for ph in peak_hours {
        match run {
            Some((_, level)) if level == ph.level => {}
            Some((start, level)) => {
                recommendations.push(recommendation(start, ph.hour, level));
                run = Some((ph.hour, ph.level));
            }
            None => run = Some((ph.hour, ph.level)),
        }
    }

    if let Some((start, level)) = run {
        recommendations.push(recommendation(start, CLOSE_HOUR + 1, level));
    }

    recommendations
}

fn recommendation(start: u32, end: u32, level: TrafficLevel) -> StaffRecommendation {
    StaffRecommendation {
        time_slot: format!("{:02}:00 - {:02}:00", start, end),
        start_hour: start,
        end_hour: end,
        recommended_staff: level.recommended_staff(),
        traffic_level: level,
        reason: level.reason().to_string(),
    }
}

/// Busiest and quietest weekday by summed transaction count.
///
/// Accumulation preserves first-encounter order and the comparisons are
/// strict, so ties keep the first weekday encountered in the history.
fn weekday_extremes(transactions: &[&Transaction]) -> (String, String) {
    let mut totals: Vec<(Weekday, u32)> = Vec::new();

    for t in transactions {
        let weekday = t.created_at.weekday();
        match totals.iter_mut().find(|(w, _)| *w == weekday) {
            Some((_, count)) => *count += 1,
            None => totals.push((weekday, 1)),
        }
    }

    let mut busiest = "N/A".to_string();
    let mut quietest = "N/A".to_string();
    let mut max = 0_u32;
    let mut min = u32::MAX;

    for &(weekday, count) in &totals {
        if count > max {
            max = count;
            busiest = weekday_name(weekday).to_string();
        }
        if count < min {
            min = count;
            quietest = weekday_name(weekday).to_string();
        }
    }

    (busiest, quietest)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
