//! Renders and searches every built-in profile.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use threatmodel::{
    render,
    search::{search, Matcher, Scope},
    Registry, Section,
};

fn render_all(c: &mut Criterion) {
    let registry = Registry::builtin().unwrap();
    c.bench_function("render all profiles", |b| {
        b.iter(|| {
            for profile in registry.iter() {
                black_box(render(profile, Section::Full).to_string());
            }
        });
    });
}

fn search_all(c: &mut Criterion) {
    let registry = Registry::builtin().unwrap();
    let matcher = Matcher::substring("proof", true);
    let scope = Scope::default();
    c.bench_function("search all profiles", |b| {
        b.iter(|| black_box(search(&registry, &matcher, &scope).unwrap()));
    });
}

criterion_group!(benches, render_all, search_all);
criterion_main!(benches);
