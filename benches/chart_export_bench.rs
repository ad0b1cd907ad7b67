use chartjs_rs::api::{Axis, AxisTicks, AxisType, Chart, ChartData, ChartType, DataSet, Options, Scales};
use chartjs_rs::core::{Color, RealDataPoint, ToJsonObject};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn build_chart(points_per_dataset: usize, dataset_count: usize) -> Chart {
    let mut data = ChartData::new();
    for series in 0..dataset_count {
        let points: Vec<RealDataPoint> = (0..points_per_dataset)
            .map(|i| {
                let x = i as f64;
                RealDataPoint::new(x, (x * 0.01 + series as f64).sin() * 100.0)
            })
            .collect();
        data.push_dataset(
            DataSet::new()
                .with_label(format!("series-{series}"))
                .with_border_color(Color::standard(series))
                .with_points(&points),
        );
    }

    let scales = Scales::new()
        .with_x_axis(Axis::new(AxisType::Linear))
        .with_y_axis(Axis::default().with_ticks(AxisTicks::new(-100.0, 100.0, 20.0)));
    Chart::new(ChartType::Scatter)
        .with_options(Options::new().with_scales(&scales))
        .with_data(data)
}

fn bench_color_parse(c: &mut Criterion) {
    c.bench_function("color_from_hex", |b| {
        b.iter(|| Color::from_hex(black_box("2F6192")))
    });
}

fn bench_chart_export_10k(c: &mut Criterion) {
    let chart = build_chart(10_000, 1);

    c.bench_function("chart_export_object_10k", |b| {
        b.iter(|| black_box(&chart).to_object())
    });
}

fn bench_chart_json_text_4x10k(c: &mut Criterion) {
    let chart = build_chart(10_000, 4);

    c.bench_function("chart_export_json_4x10k", |b| {
        b.iter(|| black_box(&chart).to_json_string().expect("serialize chart"))
    });
}

criterion_group!(
    benches,
    bench_color_parse,
    bench_chart_export_10k,
    bench_chart_json_text_4x10k
);
criterion_main!(benches);
