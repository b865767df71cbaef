use archmage::SimdToken;
use criterion::{BenchmarkGroup, Criterion, Throughput, measurement::WallTime};

// === SIMD tier detection ===

fn probe<T: SimdToken>() -> &'static str {
    if T::summon().is_some() {
        "available"
    } else {
        "not available"
    }
}

fn print_simd_info() {
    eprintln!("=== SIMD Tier Detection ===");
    #[cfg(target_arch = "x86_64")]
    {
        eprintln!(
            "  AVX2+FMA (x86-64-v3):    {}",
            probe::<archmage::X64V3Token>()
        );
    }
    #[cfg(target_arch = "aarch64")]
    {
        eprintln!(
            "  Arm64-v2:                {}",
            probe::<archmage::Arm64V2Token>()
        );
    }
    #[cfg(target_arch = "wasm32")]
    {
        eprintln!(
            "  WASM SIMD128:            {}",
            probe::<archmage::Wasm128Token>()
        );
    }
    eprintln!("  Scalar:                  always available");
    eprintln!("===========================");
}

fn disable_all_simd() {
    let _ = archmage::dangerously_disable_tokens_except_wasm(true);
}

fn enable_all_simd() {
    let _ = archmage::dangerously_disable_tokens_except_wasm(false);
}

// === Naive baselines ===

/// Floating-point luma per pixel, the textbook formulation.
fn naive_argb_float(buf: &mut [u32]) {
    for px in buf.iter_mut() {
        let a = *px & 0xFF00_0000;
        let r = ((*px >> 16) & 0xFF) as f32;
        let g = ((*px >> 8) & 0xFF) as f32;
        let b = (*px & 0xFF) as f32;
        let y = (0.299 * r + 0.587 * g + 0.114 * b).round() as u32;
        *px = a | (y << 16) | (y << 8) | y;
    }
}

fn naive_bgra_float(buf: &mut [u8]) {
    for px in buf.chunks_exact_mut(4) {
        let y = (0.299 * px[2] as f32 + 0.587 * px[1] as f32 + 0.114 * px[0] as f32).round() as u8;
        px[0] = y;
        px[1] = y;
        px[2] = y;
    }
}

// === Benchmark helpers ===

const W: usize = 1920;
const H: usize = 1080;

fn make_argb() -> Vec<u32> {
    (0..(W * H) as u32)
        .map(|i| i.wrapping_mul(0x9E37_79B9))
        .collect()
}

fn bench_words(
    group: &mut BenchmarkGroup<WallTime>,
    gris_fn: fn(&mut [u32]),
    naive_fn: fn(&mut [u32]),
    buf: &[u32],
) {
    group.bench_function("gris", |b| {
        let mut v = buf.to_vec();
        b.iter(|| gris_fn(&mut v));
    });

    disable_all_simd();
    group.bench_function("gris_scalar", |b| {
        let mut v = buf.to_vec();
        b.iter(|| gris_fn(&mut v));
    });
    enable_all_simd();

    group.bench_function("naive_float", |b| {
        let mut v = buf.to_vec();
        b.iter(|| naive_fn(&mut v));
    });
}

// === Benchmark groups ===

fn bench_argb_inplace(c: &mut Criterion) {
    let mut group = c.benchmark_group("argb_inplace");
    group.throughput(Throughput::Bytes((W * H * 4) as u64));
    let buf = make_argb();
    bench_words(
        &mut group,
        gris::grayscale_argb_inplace,
        naive_argb_float,
        &buf,
    );

    #[cfg(feature = "rayon")]
    group.bench_function("gris_rayon", |b| {
        let mut v = buf.clone();
        b.iter(|| gris::par::grayscale_argb_inplace(&mut v));
    });

    group.finish();
}

fn bench_bgra_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bgra_bytes_inplace");
    let n = W * H * 4;
    group.throughput(Throughput::Bytes(n as u64));
    let buf: Vec<u8> = (0..n).map(|i| (i % 251) as u8).collect();

    group.bench_function("gris", |b| {
        let mut v = buf.clone();
        b.iter(|| gris::grayscale_bgra_inplace(&mut v).unwrap());
    });

    disable_all_simd();
    group.bench_function("gris_scalar", |b| {
        let mut v = buf.clone();
        b.iter(|| gris::grayscale_bgra_inplace(&mut v).unwrap());
    });
    enable_all_simd();

    group.bench_function("naive_float", |b| {
        let mut v = buf.clone();
        b.iter(|| naive_bgra_float(&mut v));
    });
    group.finish();
}

fn bench_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("argb_strided");
    let stride = W + 64;
    group.throughput(Throughput::Bytes((W * H * 4) as u64));
    let buf: Vec<u32> = (0..(stride * H) as u32)
        .map(|i| i.wrapping_mul(0x9E37_79B9))
        .collect();

    group.bench_function("gris", |b| {
        let mut v = buf.clone();
        b.iter(|| gris::grayscale_argb_inplace_strided(&mut v, W, H, stride).unwrap());
    });

    #[cfg(feature = "rayon")]
    group.bench_function("gris_rayon", |b| {
        let mut v = buf.clone();
        b.iter(|| gris::par::grayscale_argb_inplace_strided(&mut v, W, H, stride).unwrap());
    });

    group.finish();
}

// === Custom main for tier detection before criterion runs ===

fn main() {
    print_simd_info();

    let mut criterion = Criterion::default().configure_from_args();
    bench_argb_inplace(&mut criterion);
    bench_bgra_bytes(&mut criterion);
    bench_strided(&mut criterion);
    criterion.final_summary();
}
