//! Benchmarks for the booking wizard and dashboard filters
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use salon_booking::booking::{BookingWizard, CompositePolicy, ClosedWeekdays, BlockedDates};
use salon_booking::catalog::{BookingReceipt, ContactFields, TimeSlot};
use salon_booking::dashboard::{CustomerFeedback, DashboardFilter, StaffPerformance};
use std::sync::Arc;

fn create_slots(count: usize) -> Vec<TimeSlot> {
    (0..count)
        .map(|i| TimeSlot::new(format!("{:02}:{:02}", 9 + i / 4, (i % 4) * 15), i % 3 != 0))
        .collect()
}

fn bench_wizard(c: &mut Criterion) {
    let mut group = c.benchmark_group("wizard");
    let date = NaiveDate::from_ymd_opt(2030, 6, 4).unwrap();
    let slots = create_slots(32);

    group.bench_function("full_pass", |b| {
        b.iter(|| {
            let mut wizard = BookingWizard::new();
            wizard.select_service("svc-1");
            wizard.next_step().unwrap();
            wizard.select_staff("st-1");
            wizard.next_step().unwrap();
            let query = wizard.select_date(date).unwrap().unwrap();
            wizard.apply_slots(query.generation, slots.clone());
            wizard.select_time("09:15").unwrap();
            wizard.next_step().unwrap();
            let request = wizard.prepare_submission(ContactFields::new()).unwrap();
            black_box(request.form_fields());
            wizard.complete(BookingReceipt {
                booking_id: "b-1".to_string(),
            })
        })
    });

    let policy = CompositePolicy::new()
        .with(ClosedWeekdays::weekends())
        .with(BlockedDates::new((1..=28).map(|d| NaiveDate::from_ymd_opt(2030, 2, d).unwrap())));
    let wizard = BookingWizard::with_policy(Arc::new(policy));
    let days: Vec<NaiveDate> = date.iter_days().take(365).collect();

    group.throughput(Throughput::Elements(days.len() as u64));
    group.bench_function("date_policy_year", |b| {
        b.iter(|| {
            days.iter()
                .filter(|d| wizard.is_date_selectable(black_box(**d)))
                .count()
        })
    });

    group.finish();
}

fn bench_dashboard_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_filter");

    let staff: Vec<StaffPerformance> = (0..1000)
        .map(|i| StaffPerformance {
            name: format!("Stylist {}", i),
            role: if i % 2 == 0 { "Colorist" } else { "Barber" }.to_string(),
            avatar: String::new(),
            performance: (i % 100) as f64,
        })
        .collect();
    let feedback: Vec<CustomerFeedback> = (0..1000)
        .map(|i| CustomerFeedback {
            rating: (i % 5 + 1) as u8,
            date: "2030-06-04".to_string(),
            comment: format!("Great cut number {}", i),
            customer: format!("Customer {}", i),
        })
        .collect();

    let filter = DashboardFilter::new().search("colorist");
    group.throughput(Throughput::Elements(staff.len() as u64));
    group.bench_function("staff_search_1000", |b| {
        b.iter(|| filter.staff(black_box(&staff)).len())
    });

    let filter = DashboardFilter::new().search("great").min_rating(4);
    group.throughput(Throughput::Elements(feedback.len() as u64));
    group.bench_function("feedback_rating_1000", |b| {
        b.iter(|| filter.feedback(black_box(&feedback)).len())
    });

    group.finish();
}

criterion_group!(benches, bench_wizard, bench_dashboard_filter);
criterion_main!(benches);
