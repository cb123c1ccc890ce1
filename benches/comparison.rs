use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: well-conditioned (diagonally dominant) and rank-deficient inputs
// ---------------------------------------------------------------------------

fn dominant(i: usize, j: usize, n: usize) -> f64 {
    ((i + 1) * 10 + j + 1) as f64 + if i == j { 10.0 * n as f64 } else { 0.0 }
}

/// a_ij = (i+1)(j+1) + (i+j) mod 3, rank at most 4 at any size.
fn low_rank(i: usize, j: usize) -> f64 {
    ((i + 1) * (j + 1)) as f64 + (i + j) as f64 % 3.0
}

// ---------------------------------------------------------------------------
// Determinant
// ---------------------------------------------------------------------------

fn det_dyn(c: &mut Criterion, n: usize) {
    let mut g = c.benchmark_group(format!("det_{n}x{n}"));

    g.bench_function("mtrx", |b| {
        let a = mtrx::Matrix::from_fn(n, n, |i, j| dominant(i, j, n)).unwrap();
        b.iter(|| std::hint::black_box(&a).det())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::DMatrix::from_fn(n, n, |i, j| dominant(i, j, n));
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.finish();
}

fn det_4x4(c: &mut Criterion) {
    det_dyn(c, 4);
}

fn det_10x10(c: &mut Criterion) {
    det_dyn(c, 10);
}

fn det_50x50(c: &mut Criterion) {
    det_dyn(c, 50);
}

// ---------------------------------------------------------------------------
// Rank (row echelon vs nalgebra's SVD-based rank)
// ---------------------------------------------------------------------------

fn rank_dyn(c: &mut Criterion, m: usize, n: usize) {
    let mut g = c.benchmark_group(format!("rank_{m}x{n}"));

    g.bench_function("mtrx", |b| {
        let a = mtrx::Matrix::from_fn(m, n, low_rank).unwrap();
        b.iter(|| std::hint::black_box(&a).rank())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::DMatrix::from_fn(m, n, low_rank);
        b.iter(|| std::hint::black_box(&a).rank(1e-10))
    });

    g.finish();
}

fn rank_6x6(c: &mut Criterion) {
    rank_dyn(c, 6, 6);
}

fn rank_20x30(c: &mut Criterion) {
    rank_dyn(c, 20, 30);
}

// ---------------------------------------------------------------------------

criterion_group!(benches, det_4x4, det_10x10, det_50x50, rank_6x6, rank_20x30);
criterion_main!(benches);
