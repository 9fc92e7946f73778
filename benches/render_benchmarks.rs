#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tagscope::{sample::sample_page, Container, Element, Render, RenderConfig, Scoped};

fn wide_list(items: usize) -> Container {
    Container::new("ul")
        .attr("class", ["list", "list-unstyled"])
        .build(|ul| {
            for i in 0..items {
                *ul += Element::new("li")
                    .attr("data_index", i.to_string())
                    .text(format!("item {}", i))
                    .build(|_| Ok(()))?;
            }
            Ok(())
        })
        .unwrap()
}

fn deep_tree(depth: usize) -> Container {
    let mut node = Container::new("div");
    node += "leaf";
    node.render().unwrap();

    for _ in 0..depth {
        let mut parent = Container::new("div");
        parent += node;
        parent.render().unwrap();
        node = parent;
    }
    node
}

fn bench_wide_render(c: &mut Criterion) {
    let mut list = wide_list(1_000);

    c.bench_function("render_wide_list", |b| {
        b.iter(|| {
            black_box(&mut list).render().unwrap();
        })
    });
}

fn bench_deep_render(c: &mut Criterion) {
    let mut tree = deep_tree(64);

    c.bench_function("render_deep_tree", |b| {
        b.iter(|| {
            black_box(&mut tree).render().unwrap();
        })
    });
}

fn bench_sample_page(c: &mut Criterion) {
    let path = std::env::temp_dir().join("tagscope_bench_sample.html");

    c.bench_function("build_sample_page", |b| {
        b.iter(|| sample_page(Some(black_box(path.clone())), RenderConfig::default()).unwrap())
    });

    let _ = std::fs::remove_file(path);
}

criterion_group!(benches, bench_wide_render, bench_deep_render, bench_sample_page);
criterion_main!(benches);
