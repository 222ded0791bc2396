//! Performance benchmarks for the employee records core.
//!
//! Covers the pure attendance computation, recording attendance through the
//! in-memory store, and the promotion transaction.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{NaiveDate, NaiveTime, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use employee_records::calculation::{AttendanceRules, PromotionInput, compute_attendance};
use employee_records::models::{AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus};
use employee_records::records::{AttendanceEntry, promote_employee, save_attendance};
use employee_records::store::{EntityStore, InMemoryStore, UnitOfWork, Write};

fn make_record(clock_in: (u32, u32), clock_out: (u32, u32), break_minutes: u32) -> AttendanceRecord {
    AttendanceRecord {
        id: 1,
        employee: 1,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        clock_in: NaiveTime::from_hms_opt(clock_in.0, clock_in.1, 0),
        clock_out: NaiveTime::from_hms_opt(clock_out.0, clock_out.1, 0),
        break_minutes,
        hours_worked: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
        status: AttendanceStatus::Present,
        notes: String::new(),
        created_at: Utc::now(),
        version: 0,
    }
}

fn make_employee(n: u64) -> Employee {
    Employee {
        id: 0,
        employee_id: format!("EMP-{:05}", n),
        first_name: "Bench".to_string(),
        last_name: n.to_string(),
        email: format!("bench{}@example.com", n),
        phone: String::new(),
        address: String::new(),
        date_of_birth: None,
        gender: None,
        department: None,
        job_title: None,
        hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        salary: Decimal::new(5000000, 2),
        status: EmployeeStatus::Active,
        manager: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        version: 0,
    }
}

fn bench_compute_attendance(c: &mut Criterion) {
    let rules = AttendanceRules::default();
    let day = make_record((9, 0), (17, 30), 30);
    let overnight = make_record((22, 0), (6, 0), 30);
    let overtime = make_record((8, 0), (19, 0), 60);

    let mut group = c.benchmark_group("compute_attendance");
    group.bench_function("same_day", |b| {
        b.iter(|| compute_attendance(black_box(&day), black_box(&rules)))
    });
    group.bench_function("overnight", |b| {
        b.iter(|| compute_attendance(black_box(&overnight), black_box(&rules)))
    });
    group.bench_function("overtime", |b| {
        b.iter(|| compute_attendance(black_box(&overtime), black_box(&rules)))
    });
    group.finish();
}

fn bench_save_attendance(c: &mut Criterion) {
    let rules = AttendanceRules::default();
    let mut group = c.benchmark_group("save_attendance");

    for days in [30u32, 365] {
        group.throughput(Throughput::Elements(u64::from(days)));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| {
                let store = InMemoryStore::new();
                store
                    .commit(UnitOfWork::new().with(Write::InsertEmployee(make_employee(1))))
                    .unwrap();
                let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                for day in start.iter_days().take(days as usize) {
                    let entry = AttendanceEntry {
                        employee: 1,
                        date: day,
                        clock_in: NaiveTime::from_hms_opt(9, 0, 0),
                        clock_out: NaiveTime::from_hms_opt(18, 15, 0),
                        break_minutes: 45,
                        status: None,
                        notes: String::new(),
                    };
                    save_attendance(&store, entry, &rules, Utc::now()).unwrap();
                }
                black_box(store.attendance_for_employee(1).len())
            })
        });
    }
    group.finish();
}

fn bench_promote_employee(c: &mut Criterion) {
    c.bench_function("promote_employee", |b| {
        b.iter_batched(
            || {
                let store = InMemoryStore::new();
                let setup = UnitOfWork::new()
                    .with(Write::InsertDepartment(employee_records::models::Department {
                        id: 0,
                        name: "Engineering".to_string(),
                        description: String::new(),
                        created_at: Utc::now(),
                    }))
                    .with(Write::InsertJobTitle(employee_records::models::JobTitle {
                        id: 0,
                        title: "Engineer".to_string(),
                        department: 1,
                        base_salary: Decimal::new(6000000, 2),
                        created_at: Utc::now(),
                    }))
                    .with(Write::InsertEmployee(make_employee(1)));
                store.commit(setup).unwrap();
                store
            },
            |store| {
                let input = PromotionInput {
                    employee: 1,
                    new_job_title: 1,
                    new_department: 1,
                    new_salary: Decimal::new(6500000, 2),
                    promotion_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                    reason: "Benchmark".to_string(),
                    approved_by: None,
                };
                promote_employee(&store, black_box(&input), Utc::now()).unwrap()
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_compute_attendance,
    bench_save_attendance,
    bench_promote_employee
);
criterion_main!(benches);
