//! Rule engine throughput benchmark.
//!
//! Measures whole-document conversion latency for growing documents and the
//! per-line cost of the rule table using Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sel2pw_core::engine::{Dialect, Engine, RuleTable};

const TEST_METHOD: &str = r#"    @Test
    public void testLogin() {
        driver.get("https://example.com/login");
        driver.findElement(By.id("username")).sendKeys("admin");
        driver.findElement(By.name("password")).sendKeys("secret");
        driver.findElement(By.xpath("//button[@type='submit']")).click();
        Assert.assertEquals("Dashboard", driver.getTitle());
        System.out.println("Logged in: " + driver.getCurrentUrl());
    }
"#;

fn document(methods: usize) -> String {
    let mut doc = String::from(
        "package com.example;\n\nimport org.openqa.selenium.By;\n\npublic class LoginTest {\n",
    );
    for _ in 0..methods {
        doc.push_str(TEST_METHOD);
    }
    doc.push_str("}\n");
    doc
}

fn bench_convert_document(c: &mut Criterion) {
    let engine = Engine::standard().unwrap();

    let mut group = c.benchmark_group("convert_document");
    for &methods in &[1usize, 10, 100] {
        let doc = document(methods);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(methods), &doc, |b, d| {
            b.iter(|| engine.convert(black_box(d), Dialect::Module))
        });
    }
    group.finish();
}

fn bench_rule_table_line(c: &mut Criterion) {
    let table = RuleTable::standard().unwrap();
    let lines = [
        ("unmatched", "        int total = a + b;"),
        (
            "locator_action",
            r#"        driver.findElement(By.id("username")).sendKeys("admin");"#,
        ),
        (
            "assertion",
            r#"        Assert.assertEquals("Dashboard", driver.findElement(By.id("h1")).getText());"#,
        ),
    ];

    let mut group = c.benchmark_group("rule_table_line");
    for (name, line) in lines {
        group.bench_with_input(BenchmarkId::from_parameter(name), &line, |b, l| {
            b.iter(|| table.apply(black_box(l)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convert_document, bench_rule_table_line);
criterion_main!(benches);
