//! Whole-document conversion tests for the rule engine.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sel2pw_core::engine::postprocess::ACTIONS;
use sel2pw_core::engine::{
    convert, Dialect, RuleTable, SourceLine, MODULE_HEADER, REQUIRE_HEADER, WRAPPER_OPEN,
};

const LOGIN_TEST: &str = r#"package com.example;

import org.openqa.selenium.By;
import org.openqa.selenium.WebDriver;
import org.junit.Test;

public class LoginTest {
    WebDriver driver;

    @Test
    public void testLogin() {
        driver.get("https://example.com/login");
        driver.findElement(By.id("username")).sendKeys("admin");
        driver.findElement(By.name("password")).sendKeys("secret");
        driver.findElement(By.cssSelector("button[type='submit']")).click();
        String title = driver.getTitle();
        Assert.assertEquals("Dashboard", title);
        driver.quit();
    }
}"#;

const MAIN_PROGRAM: &str = r#"import org.openqa.selenium.WebDriver;
import org.openqa.selenium.chrome.ChromeDriver;

public class Smoke {
    public static void main(String[] args) {
        WebDriver driver = new ChromeDriver();
        driver.get("https://example.com");
        System.out.println("Title: " + driver.getTitle());
        driver.close();
    }
}"#;

const SNIPPET: &str = r#"driver.get("https://example.com");
driver.findElement(By.xpath("//a[text()='More']")).click();"#;

#[test]
fn test_junit_class_conversion() {
    let expected = r#"import { test, expect } from '@playwright/test';

// Package: com.example

// Import: org.openqa.selenium.By
// Import: org.openqa.selenium.WebDriver
// Import: org.junit.Test

// Java Class: LoginTest
    // WebDriver Instance: driver

    test("Converted Test", async ({ page }) => {
    async function testLogin(page) {
        await page.goto("https://example.com/login");
        await page.locator('#' + "username").fill("admin");
        await page.locator('[name=' + "password" + ']').fill("secret");
        await page.locator("button[type='submit']").click();
        let title = await page.title();
        expect(title).toBe("Dashboard");
        // driver.quit() - Playwright handles cleanup
    }
});"#;
    assert_eq!(convert(LOGIN_TEST, Dialect::Module), expected);
}

#[test]
fn test_main_program_conversion() {
    let expected = r#"import { test, expect } from '@playwright/test';

// Import: org.openqa.selenium.WebDriver
// Import: org.openqa.selenium.chrome.ChromeDriver

// Java Class: Smoke
    test("Main Execution Thread", async ({ page }) => {
        // driver initialized by Playwright
        await page.goto("https://example.com");
        await console.log("Title: " + await page.title());
        await page.close();
    });"#;
    assert_eq!(convert(MAIN_PROGRAM, Dialect::Module), expected);
}

#[test]
fn test_snippet_is_wrapped_in_require_dialect() {
    let expected = r#"const { test, expect } = require('@playwright/test');

test('Automated Conversion', async ({ page }) => {
await page.goto("https://example.com");
await page.locator("//a[text()='More']").click();
});"#;
    assert_eq!(convert(SNIPPET, Dialect::Require), expected);
}

#[test]
fn test_wrapper_brace_removed_exactly_once() {
    let out = convert(LOGIN_TEST, Dialect::Module);
    let input_braces = LOGIN_TEST.lines().filter(|l| l.trim() == "}").count();
    let output_braces = out.lines().filter(|l| l.trim() == "}").count();
    assert_eq!(input_braces, 2);
    assert_eq!(output_braces, 1);
}

#[test]
fn test_wrapper_synthesized_only_without_construct() {
    assert_eq!(convert(SNIPPET, Dialect::Module).matches(WRAPPER_OPEN).count(), 1);
    assert_eq!(convert(LOGIN_TEST, Dialect::Module).matches(WRAPPER_OPEN).count(), 0);
    assert_eq!(convert(MAIN_PROGRAM, Dialect::Module).matches(WRAPPER_OPEN).count(), 0);
}

#[test]
fn test_test_calls_in_plain_code_still_get_wrapped() {
    let predicate = "if (isValid.test(value)) {\n    driver.get(url);\n}";
    let out = convert(predicate, Dialect::Module);
    assert_eq!(out.matches(WRAPPER_OPEN).count(), 1);
    assert_eq!(convert(&out, Dialect::Module), out);

    let printed = r#"System.out.println("running test(1)");"#;
    let expected = r#"import { test, expect } from '@playwright/test';

test('Automated Conversion', async ({ page }) => {
console.log("running test(1)");
});"#;
    assert_eq!(convert(printed, Dialect::Module), expected);
}

#[test]
fn test_dialect_headers() {
    assert!(convert(SNIPPET, Dialect::Module).starts_with(MODULE_HEADER));
    assert!(convert(SNIPPET, Dialect::Require).starts_with(REQUIRE_HEADER));
    assert_eq!(Dialect::Module.artifact_name(), "converted_test.ts");
    assert_eq!(Dialect::Require.artifact_name(), "converted_test.js");
}

#[test]
fn test_reconversion_is_stable() {
    for (doc, dialect) in [
        (LOGIN_TEST, Dialect::Module),
        (MAIN_PROGRAM, Dialect::Module),
        (SNIPPET, Dialect::Require),
    ] {
        let once = convert(doc, dialect);
        assert_eq!(convert(&once, dialect), once);
    }
}

#[test]
fn test_hooks_enter_body() {
    let doc = "public class T {\n    @BeforeMethod\n    public void setUp() {\n        driver.get(base);\n    }\n}";
    let out = convert(doc, Dialect::Module);
    assert!(out.contains("    test.beforeEach(async ({ page }) => {\n"));
    assert!(out.contains("        await page.goto(base);\n    }\n"));
    assert!(!out.contains(WRAPPER_OPEN));
}

fn statement() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "",
        r#"driver.get("https://example.com");"#,
        r#"    driver.findElement(By.id("go")).click();"#,
        r#"driver.findElement(By.name("q")).sendKeys("rust");"#,
        "\tdriver.findElement(By.className(\"row\")).getText();",
        r#"System.out.println("Title: " + driver.getTitle());"#,
        r#"Assert.assertEquals("Home", driver.getTitle());"#,
        "assertTrue(driver.findElement(By.id(\"logo\")).isDisplayed());",
        r#"String name = "admin";"#,
        "Thread.sleep(250);",
        "driver.quit();",
        "WebDriver driver = new ChromeDriver();",
        "x = y + 1;",
        "@Test",
        "    @BeforeMethod",
    ])
}

fn is_declaration(content: &str) -> bool {
    ["const ", "let ", "var "].iter().any(|kw| content.starts_with(kw))
}

proptest! {
    #[test]
    fn prop_unmatched_lines_unchanged(line in "[xyz0-9 =+;]{0,40}") {
        let table = RuleTable::standard().unwrap();
        prop_assert_eq!(table.apply(&line), line);
    }

    #[test]
    fn prop_reconversion_is_stable(lines in prop::collection::vec(statement(), 0..12)) {
        let doc = lines.join("\n");
        for dialect in [Dialect::Module, Dialect::Require] {
            let once = convert(&doc, dialect);
            prop_assert_eq!(convert(&once, dialect), once);
        }
    }

    #[test]
    fn prop_actions_awaited_exactly_once(lines in prop::collection::vec(statement(), 0..12)) {
        let out = convert(&lines.join("\n"), Dialect::Module);
        for text in out.lines() {
            let line = SourceLine::new(text);
            let content = line.content();
            if line.is_comment() || is_declaration(content) {
                continue;
            }
            if ACTIONS.iter().any(|a| content.contains(a)) {
                prop_assert!(content.starts_with("await "), "not awaited: {}", text);
                prop_assert!(!content.starts_with("await await"), "doubled: {}", text);
            }
        }
    }
}
