//! Performance benchmarks for the categorization engine.
//!
//! Targets:
//! - Range totals over a 14-day period: < 50μs mean
//! - Week overtime allocation: < 50μs mean
//! - Holiday rules for a region-year: < 100μs mean
//! - Full /calculate round-trip: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tower::ServiceExt;

use timecard_engine::api::{AppState, create_router};
use timecard_engine::calculation::{calculate_range_totals, compute_week_overtime};
use timecard_engine::calendar::HolidayCalendar;
use timecard_engine::calendar::rules::stat_holidays;
use timecard_engine::config::ConfigLoader;
use timecard_engine::models::{DateRange, Region, TimeEntry};
use timecard_engine::policy::OvertimePolicy;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/timecard").expect("Failed to load config")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds `count` entries cycling over a 14-day period with mixed codes.
fn build_entries(count: usize) -> Vec<TimeEntry> {
    let codes = ["REG", "REG", "REG", "N", "OT", "VAC", "OC"];
    (0..count)
        .map(|i| {
            let day = date(2025, 6, 1) + chrono::Days::new((i % 14) as u64);
            TimeEntry::new(
                day,
                "Site 14",
                codes[i % codes.len()],
                Decimal::from(8),
            )
        })
        .collect()
}

fn bench_range_totals(c: &mut Criterion) {
    let loader = load_config();
    let codes = loader.config().codes();
    let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 14));

    let mut group = c.benchmark_group("range_totals");
    for count in [14, 100, 1000] {
        let entries = build_entries(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| calculate_range_totals(black_box(entries), range, codes));
        });
    }
    group.finish();
}

fn bench_week_overtime(c: &mut Criterion) {
    let loader = load_config();
    let codes = loader.config().codes();
    let policy = OvertimePolicy {
        daily_regular_cap: Some(Decimal::from(8)),
        daily_ot_cap: Some(Decimal::from(12)),
        daily_dt_cap: Some(Decimal::from(12)),
        weekly_regular_cap: Some(Decimal::from(40)),
        daily_ot_reporting_cap: None,
    };
    let entries = build_entries(14);

    c.bench_function("week_overtime", |b| {
        b.iter(|| {
            compute_week_overtime(
                black_box(&entries),
                date(2025, 6, 1),
                &policy,
                codes,
            )
        });
    });
}

fn bench_holiday_rules(c: &mut Criterion) {
    let region = Region::new("CA", "BC");
    c.bench_function("stat_holidays_year", |b| {
        b.iter(|| stat_holidays(black_box(2025), &region));
    });
}

fn bench_calculate_endpoint(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");

    let request_body = serde_json::json!({
        "region": {"country": "CA", "subdivision": "BC"},
        "period": {"number": 12, "start_date": "2025-06-01", "end_date": "2025-06-14"},
        "entries": (0..14).map(|i| serde_json::json!({
            "date": format!("2025-06-{:02}", i + 1),
            "job": "Site 14",
            "code": "REG",
            "hours": "8"
        })).collect::<Vec<_>>()
    });

    c.bench_function("calculate_endpoint_14_entries", |b| {
        b.to_async(&runtime).iter(|| {
            let loader = load_config();
            let state = AppState::new(loader.config().clone(), HolidayCalendar::local_only());
            let router = create_router(state);
            let body = request_body.to_string();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        });
    });
}

criterion_group!(
    benches,
    bench_range_totals,
    bench_week_overtime,
    bench_holiday_rules,
    bench_calculate_endpoint
);
criterion_main!(benches);
