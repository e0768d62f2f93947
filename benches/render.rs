//! Rendering benchmarks for fluent-html
//!
//! Measures tree construction and serialization for wide tables, deeply
//! nested trees and escape-heavy text.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fluent_html::prelude::*;

fn table(rows: usize) -> Result<Element> {
	let mut body = create_element("tbody");
	for row in 0..rows {
		let mut tr = create_element("tr");
		tr.add_class("row")?;
		if row % 2 == 0 {
			tr.add_class("even")?;
		}
		tr.append([
			create_element("td").child(row.to_string())?,
			create_element("td").child(format!("<name {row}> & co"))?,
			create_element("td").child(create_element("input").attr("checked", row % 3 == 0)?)?,
		])?;
		body.add_child(tr)?;
	}
	create_element("table").attr("class", "data striped")?.child(body)
}

fn nested(depth: usize) -> Result<Element> {
	let mut el = create_element("span").child("leaf")?;
	for level in 0..depth {
		el = create_element("div").attr("data-level", level.to_string())?.child(el)?;
	}
	Ok(el)
}

/// Benchmark building and rendering tables of increasing size
fn benchmark_table_rendering(c: &mut Criterion) {
	let mut group = c.benchmark_group("table");
	for rows in [10, 100, 1000] {
		group.bench_with_input(BenchmarkId::new("build", rows), &rows, |b, &rows| {
			b.iter(|| black_box(table(rows).unwrap()));
		});

		let tree = table(rows).unwrap();
		group.bench_with_input(BenchmarkId::new("render", rows), &tree, |b, tree| {
			b.iter(|| black_box(tree.render().unwrap()));
		});
	}
	group.finish();
}

/// Benchmark rendering deeply nested trees
fn benchmark_nested_rendering(c: &mut Criterion) {
	let tree = nested(256).unwrap();
	c.bench_function("nested_render_256", |b| {
		b.iter(|| black_box(tree.render().unwrap()));
	});
}

/// Benchmark escaping text with and without special characters
fn benchmark_escaping(c: &mut Criterion) {
	let plain = "plain text without anything to escape ".repeat(32);
	let special = "<a href=\"x\">'Tom' & \"Jerry\"</a> ".repeat(32);

	c.bench_function("escape_plain", |b| {
		b.iter(|| black_box(fluent_html::escape_html(black_box(&plain))));
	});

	c.bench_function("escape_special", |b| {
		b.iter(|| black_box(fluent_html::escape_html(black_box(&special))));
	});
}

criterion_group!(
	benches,
	benchmark_table_rendering,
	benchmark_nested_rendering,
	benchmark_escaping
);

criterion_main!(benches);
