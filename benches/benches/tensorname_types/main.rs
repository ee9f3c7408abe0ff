mod names;

use criterion::criterion_main;

criterion_main!(names::benches);
