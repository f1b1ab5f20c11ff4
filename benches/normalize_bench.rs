use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ngphonenumber::{PhoneNumberFormat, PHONE_NUMBER_UTIL};

/// A mix of input shapes so the numbers are not dominated by one branch of
/// the classifier.
fn setup_inputs() -> Vec<&'static str> {
    vec![
        "08031234567",
        "0803 123 4567",
        "(0805) 123-4567",
        "+234 803 123 4567",
        "2348091234567",
        "8031234567",
        "07025123456",
        // Invalid inputs exercise the failure paths.
        "123",
        "0803123456",
    ]
}

fn normalize_benchmark(c: &mut Criterion) {
    let inputs = setup_inputs();

    let mut group = c.benchmark_group("Normalization");

    group.bench_function("normalize()", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = PHONE_NUMBER_UTIL.normalize(black_box(input), PhoneNumberFormat::E164);
            }
        })
    });

    group.bench_function("detect_provider()", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = PHONE_NUMBER_UTIL.detect_provider(black_box(input));
            }
        })
    });

    group.bench_function("get_info() cached", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = PHONE_NUMBER_UTIL.get_info(black_box(input));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, normalize_benchmark);
criterion_main!(benches);
