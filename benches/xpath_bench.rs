//! Benchmarks for path generation over generated document trees.

#![allow(clippy::expect_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xpath_locator::{get_xpath, get_xpath_with_options, Document, NodeId, XPathOptions};

// ---------------------------------------------------------------------------
// Document generators
// ---------------------------------------------------------------------------

/// Builds an HTML-shaped page with `sections` `<div>` blocks under `<body>`,
/// each holding a paragraph, a list of three items, and a link. Returns the
/// document and the last text node in document order.
fn make_page(sections: usize) -> (Document, NodeId) {
    let mut doc = Document::new();
    let doctype = doc.create_doctype("html");
    let html = doc.create_element("html");
    let body = doc.create_element("body");
    doc.append_child(doc.root(), doctype).expect("link doctype");
    doc.append_child(doc.root(), html).expect("link html");
    doc.append_child(html, body).expect("link body");

    let mut last_text = body;
    for i in 0..sections {
        let div = doc.create_element("div");
        doc.set_attribute(div, "class", "section");
        doc.append_child(body, div).expect("link div");

        let p = doc.create_element("p");
        let text = doc.create_text(format!("Paragraph {i}"));
        doc.append_child(div, p).expect("link p");
        doc.append_child(p, text).expect("link text");

        let ul = doc.create_element("ul");
        doc.append_child(div, ul).expect("link ul");
        for item in ["A", "B", "C"] {
            let li = doc.create_element("li");
            let label = doc.create_text(format!("Item {item}"));
            doc.append_child(ul, li).expect("link li");
            doc.append_child(li, label).expect("link label");
            last_text = label;
        }

        let comment = doc.create_comment("end of section");
        doc.append_child(div, comment).expect("link comment");
    }
    (doc, last_text)
}

/// Builds a single chain of `depth` nested `<div>` elements and returns the
/// innermost one.
fn make_nested(depth: usize) -> (Document, NodeId) {
    let mut doc = Document::new();
    let mut parent = doc.root();
    for _ in 0..depth {
        let div = doc.create_element("div");
        doc.append_child(parent, div).expect("link div");
        parent = div;
    }
    (doc, parent)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_xpath_last_node_small(c: &mut Criterion) {
    let (doc, target) = make_page(10);
    c.bench_function("xpath_last_node_small", |b| {
        b.iter(|| get_xpath(black_box(&doc), black_box(target)));
    });
}

fn bench_xpath_last_node_large(c: &mut Criterion) {
    let (doc, target) = make_page(1000);
    c.bench_function("xpath_last_node_large", |b| {
        b.iter(|| get_xpath(black_box(&doc), black_box(target)));
    });
}

fn bench_xpath_deeply_nested(c: &mut Criterion) {
    let (doc, target) = make_nested(500);
    let opts = XPathOptions::default().ignore_id(true);
    c.bench_function("xpath_deeply_nested", |b| {
        b.iter(|| get_xpath_with_options(black_box(&doc), black_box(target), &opts));
    });
}

fn bench_xpath_not_found(c: &mut Criterion) {
    let (mut doc, _) = make_page(1000);
    let orphan = doc.create_element("div");
    c.bench_function("xpath_not_found", |b| {
        b.iter(|| get_xpath(black_box(&doc), black_box(orphan)));
    });
}

criterion_group!(
    xpath,
    bench_xpath_last_node_small,
    bench_xpath_last_node_large,
    bench_xpath_deeply_nested,
    bench_xpath_not_found,
);

criterion_main!(xpath);
