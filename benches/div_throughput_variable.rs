use criterion::black_box;
use criterion::criterion_group;
use criterion::Criterion;

const ITER: usize = 10000;
const OFFSET: u64 = 0x9f1668016f482246;
const MULTIPLIER: u64 = 0xf6ee9cc7a7f7d033;

// One divisor per plan strategy, so the dispatch can't be predicted.
const DIVISORS: [u64; 6] = [1, 2, 3, 7, 1000003, (1 << 63) + 1];
const SIGNED_DIVISORS: [i64; 6] = [1, -1, -8, 7, -1000003, i64::MIN];

fn generate(i: usize) -> u64 {
    (i as u64).wrapping_mul(MULTIPLIER).wrapping_add(OFFSET)
}

fn generate_div_indices(n: usize, count: usize) -> Vec<usize> {
    use rand::distributions::Distribution;
    use rand::SeedableRng;

    let range = rand::distributions::Uniform::<usize>::new(0, count);
    let mut rand: rand_chacha::ChaChaRng = SeedableRng::seed_from_u64(1);

    (0..n).map(|_| range.sample(&mut rand)).collect()
}

fn hardware_u64_div(c: &mut Criterion) {
    let inputs: Vec<u64> = (0..ITER).map(generate).collect();
    let divisors: Vec<u64> = generate_div_indices(ITER, DIVISORS.len())
        .iter()
        .map(|i| DIVISORS[*i])
        .collect();

    c.bench_function("hardware_u64_div", move |b| {
        b.iter(|| {
            let mut sum: u64 = 0;
            for (i, div) in black_box(&inputs).iter().zip(black_box(&divisors)) {
                sum = sum.wrapping_add(i / div);
            }

            black_box(sum)
        })
    });
}

fn magicdiv_u64_div(c: &mut Criterion) {
    use magicdiv::U64Divisor;

    let inputs: Vec<u64> = (0..ITER).map(generate).collect();
    let plans: Vec<_> = DIVISORS
        .iter()
        .map(|i| U64Divisor::new(*i).unwrap())
        .collect();
    let divisors: Vec<&U64Divisor> = generate_div_indices(ITER, DIVISORS.len())
        .iter()
        .map(|i| &plans[*i])
        .collect();

    c.bench_function("magicdiv_u64_div", move |b| {
        b.iter(|| {
            let mut sum: u64 = 0;
            for (i, div) in black_box(&inputs).iter().zip(black_box(&divisors)) {
                sum = sum.wrapping_add(div.divide(*i));
            }

            black_box(sum)
        })
    });
}

fn magicdiv_u64_div_rem(c: &mut Criterion) {
    use magicdiv::U64Divisor;

    let inputs: Vec<u64> = (0..ITER).map(generate).collect();
    let plans: Vec<_> = DIVISORS
        .iter()
        .map(|i| U64Divisor::new(*i).unwrap())
        .collect();
    let divisors: Vec<&U64Divisor> = generate_div_indices(ITER, DIVISORS.len())
        .iter()
        .map(|i| &plans[*i])
        .collect();

    c.bench_function("magicdiv_u64_div_rem", move |b| {
        b.iter(|| {
            let mut sum: u64 = 0;
            for (i, div) in black_box(&inputs).iter().zip(black_box(&divisors)) {
                let (q, r) = div.div_rem(*i);
                sum = sum.wrapping_add(q ^ r);
            }

            black_box(sum)
        })
    });
}

fn strength_reduce_u64_div(c: &mut Criterion) {
    use strength_reduce::StrengthReducedU64;

    let inputs: Vec<u64> = (0..ITER).map(generate).collect();
    let reciprocals: Vec<_> = DIVISORS
        .iter()
        .map(|i| StrengthReducedU64::new(*i))
        .collect();
    let divisors: Vec<&StrengthReducedU64> = generate_div_indices(ITER, DIVISORS.len())
        .iter()
        .map(|i| &reciprocals[*i])
        .collect();

    c.bench_function("strength_reduce_u64_div", move |b| {
        b.iter(|| {
            let mut sum: u64 = 0;
            for (i, div) in black_box(&inputs).iter().zip(black_box(&divisors)) {
                sum = sum.wrapping_add(*i / **div);
            }

            black_box(sum)
        })
    });
}

fn fast_divide_u64_div(c: &mut Criterion) {
    use fastdivide::DividerU64;

    let inputs: Vec<u64> = (0..ITER).map(generate).collect();
    let reciprocals: Vec<_> = DIVISORS.iter().map(|i| DividerU64::divide_by(*i)).collect();
    let divisors: Vec<&DividerU64> = generate_div_indices(ITER, DIVISORS.len())
        .iter()
        .map(|i| &reciprocals[*i])
        .collect();

    c.bench_function("fast_divide_u64_div", move |b| {
        b.iter(|| {
            let mut sum: u64 = 0;
            for (i, div) in black_box(&inputs).iter().zip(black_box(&divisors)) {
                sum = sum.wrapping_add(div.divide(*i));
            }

            black_box(sum)
        })
    });
}

fn hardware_i64_div(c: &mut Criterion) {
    let inputs: Vec<i64> = (0..ITER).map(|i| generate(i) as i64).collect();
    let divisors: Vec<i64> = generate_div_indices(ITER, SIGNED_DIVISORS.len())
        .iter()
        .map(|i| SIGNED_DIVISORS[*i])
        .collect();

    c.bench_function("hardware_i64_div", move |b| {
        b.iter(|| {
            let mut sum: i64 = 0;
            for (i, div) in black_box(&inputs).iter().zip(black_box(&divisors)) {
                sum = sum.wrapping_add(i.wrapping_div(*div));
            }

            black_box(sum)
        })
    });
}

fn magicdiv_i64_div(c: &mut Criterion) {
    use magicdiv::I64Divisor;

    let inputs: Vec<i64> = (0..ITER).map(|i| generate(i) as i64).collect();
    let plans: Vec<_> = SIGNED_DIVISORS
        .iter()
        .map(|i| I64Divisor::new(*i).unwrap())
        .collect();
    let divisors: Vec<&I64Divisor> = generate_div_indices(ITER, SIGNED_DIVISORS.len())
        .iter()
        .map(|i| &plans[*i])
        .collect();

    c.bench_function("magicdiv_i64_div", move |b| {
        b.iter(|| {
            let mut sum: i64 = 0;
            for (i, div) in black_box(&inputs).iter().zip(black_box(&divisors)) {
                sum = sum.wrapping_add(div.divide(*i));
            }

            black_box(sum)
        })
    });
}

criterion_group!(
    u64_div_variable,
    hardware_u64_div,
    magicdiv_u64_div,
    magicdiv_u64_div_rem,
    strength_reduce_u64_div,
    fast_divide_u64_div
);

criterion_group!(i64_div_variable, hardware_i64_div, magicdiv_i64_div);

criterion::criterion_main!(u64_div_variable, i64_div_variable);
