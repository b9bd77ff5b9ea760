//! Benchmarks for credential matching and results derivation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use eagle_results::dataset::{Dataset, ExamDescriptor, Student};
use eagle_results::login::{authenticate, Credentials};
use eagle_results::results::{GradeTier, ResultsView};

const GRADES: [&str; 7] = ["A+", "A", "A-", "B+", "C", "D", "F"];

fn create_test_students(count: usize) -> Vec<Student> {
    (0..count)
        .map(|i| {
            let percentage = (i % 101) as f64;
            Student::new(
                i as i64,
                format!("Student Number {}", i),
                format!("pw{}", i),
                percentage,
                percentage,
                GRADES[i % GRADES.len()],
            )
        })
        .collect()
}

fn bench_authenticate(c: &mut Criterion) {
    let mut group = c.benchmark_group("authenticate");

    for size in [100, 1000, 10000] {
        let students = create_test_students(size);

        group.throughput(Throughput::Elements(size as u64));

        // Last student: a full scan with a lowercase comparison per entry
        let last = size - 1;
        let hit = Credentials::new(format!("STUDENT NUMBER {}", last), format!("pw{}", last));
        group.bench_function(format!("match_last_{}", size), |b| {
            b.iter(|| authenticate(black_box(&students), black_box(&hit)).is_ok())
        });

        let miss = Credentials::new("Nobody Here", "nope");
        group.bench_function(format!("miss_{}", size), |b| {
            b.iter(|| authenticate(black_box(&students), black_box(&miss)).is_err())
        });
    }

    group.finish();
}

fn bench_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("results");

    group.bench_function("resolve_tier", |b| {
        b.iter(|| {
            for grade in GRADES {
                black_box(GradeTier::resolve(black_box(grade)));
            }
        })
    });

    let dataset = Dataset::new(
        ExamDescriptor {
            title: "Final".to_string(),
            total_marks: 100.0,
            pass_percentage: 50.0,
            model_answer_url: "/model.pdf".to_string(),
            notes: vec!["Appeals close on Friday".to_string()],
        },
        create_test_students(1000),
    );

    group.bench_function("build_view", |b| {
        b.iter(|| {
            let student = dataset.find_student(black_box(999)).unwrap();
            ResultsView::build(student, &dataset.exam)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_authenticate, bench_results);
criterion_main!(benches);
