use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ms_strand::BaseVec;
use ms_strand::Strand;
use ms_strand::complement;

pub fn joins(c: &mut Criterion) {
    let mut group = c.benchmark_group("Join");
    let mut rng = StdRng::seed_from_u64(1);

    let edge = BaseVec::random(40, &mut rng);
    let a = Strand::single(edge.clone()).unwrap();
    let b = Strand::single(complement(&edge[10..30])).unwrap();
    let noise = Strand::single(BaseVec::random(20, &mut rng)).unwrap();

    group.bench_function("Anneal two complementary single strands.", |bench| {
        bench.iter(|| a.try_join(&b));
    });

    group.bench_function("Scan two incompatible single strands.", |bench| {
        bench.iter(|| a.try_join(&noise));
    });

    let double = a.try_join(&b).unwrap();
    group.bench_function("Try all ligation geometries.", |bench| {
        bench.iter(|| double.try_join(&double));
    });
}

criterion_group!(benches, joins);
criterion_main!(benches);
