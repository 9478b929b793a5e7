//! Built-in Selenium/Java → Playwright mappings.
//!
//! Order matters: each rule sees the output of the ones above it. Actions and
//! page reads run before assertions so that assertion arguments are already
//! translated when they get swapped.

use super::rules::RuleSpec;

pub const STANDARD_RULES: &[RuleSpec] = &[
    // Boilerplate
    RuleSpec::pattern("package", r"\bpackage\s+([\w.]+)\s*;", "// Package: ${1}"),
    RuleSpec::pattern(
        "import",
        r"\bimport\s+((?:static\s+)?[\w.]+(?:\.\*)?)\s*;",
        "// Import: ${1}",
    ),
    RuleSpec::pattern(
        "class",
        r"\bpublic\s+(?:(?:final|abstract)\s+)*class\s+(\w+)[^{]*\{",
        "// Java Class: ${1}",
    ),
    RuleSpec::pattern(
        "main",
        r"\bpublic\s+static\s+void\s+main\s*\(\s*String[^)]*\)[^{]*\{",
        r#"test("Main Execution Thread", async ({ page }) => {"#,
    )
    .opening(),
    // Driver lifecycle
    RuleSpec::pattern(
        "driver-init",
        r"\bWebDriver\s+(\w+)\s*=\s*new\s+\w+\s*\([^)]*\)\s*;",
        "// ${1} initialized by Playwright",
    ),
    // Navigation
    RuleSpec::call("navigate-to", r"\bdriver\.navigate\(\)\.to\b", "await page.goto(${*})"),
    RuleSpec::pattern("navigate-back", r"\bdriver\.navigate\(\)\.back\(\)", "await page.goBack()"),
    RuleSpec::pattern(
        "navigate-forward",
        r"\bdriver\.navigate\(\)\.forward\(\)",
        "await page.goForward()",
    ),
    RuleSpec::pattern(
        "navigate-refresh",
        r"\bdriver\.navigate\(\)\.refresh\(\)",
        "await page.reload()",
    ),
    RuleSpec::call("navigate", r"\bdriver\.get\b", "await page.goto(${*})"),
    // Locators
    RuleSpec::call_closed(
        "by-id",
        r"\bdriver\.findElements?\(\s*By\.id\b",
        "page.locator('#' + ${1})",
    ),
    RuleSpec::call_closed(
        "by-name",
        r"\bdriver\.findElements?\(\s*By\.name\b",
        "page.locator('[name=' + ${1} + ']')",
    ),
    RuleSpec::call_closed(
        "by-xpath",
        r"\bdriver\.findElements?\(\s*By\.xpath\b",
        "page.locator(${1})",
    ),
    RuleSpec::call_closed(
        "by-css",
        r"\bdriver\.findElements?\(\s*By\.cssSelector\b",
        "page.locator(${1})",
    ),
    RuleSpec::call_closed(
        "by-class",
        r"\bdriver\.findElements?\(\s*By\.className\b",
        "page.locator('.' + ${1})",
    ),
    RuleSpec::call_closed(
        "by-link-text",
        r"\bdriver\.findElements?\(\s*By\.linkText\b",
        "page.locator('text=' + ${1})",
    ),
    RuleSpec::call_closed(
        "by-tag",
        r"\bdriver\.findElements?\(\s*By\.tagName\b",
        "page.locator(${1})",
    ),
    // Page-level reads
    RuleSpec::pattern("title", r"\bdriver\.getTitle\(\)", "await page.title()"),
    RuleSpec::pattern("current-url", r"\bdriver\.getCurrentUrl\(\)", "page.url()"),
    RuleSpec::call("println", r"\bSystem\.out\.print(?:ln)?\b", "console.log(${*})"),
    RuleSpec::pattern(
        "quit",
        r"\bdriver\.quit\(\)",
        "// driver.quit() - Playwright handles cleanup",
    ),
    RuleSpec::pattern("close", r"\bdriver\.close\(\)", "await page.close()"),
    RuleSpec::call("sleep", r"\bThread\.sleep\b", "await page.waitForTimeout(${*})"),
    // Element actions
    RuleSpec::call("send-keys", r"\.sendKeys\b", ".fill(${*})"),
    RuleSpec::pattern("click", r"\.click\(\)", ".click()"),
    RuleSpec::pattern("clear", r"\.clear\(\)", r#".fill("")"#),
    RuleSpec::pattern("get-text", r"\.getText\(\)", ".innerText()"),
    RuleSpec::call("get-attribute", r"\.getAttribute\b", ".getAttribute(${*})"),
    RuleSpec::pattern("is-displayed", r"\.isDisplayed\(\)", ".isVisible()"),
    // Assertions: (expected, actual) becomes expect(actual).toBe(expected);
    // trailing arguments ride along as the expectation message.
    RuleSpec::call(
        "assert-equals",
        r"\b(?:Assert\.)?assertEquals\b",
        "expect(${2}${3..}).toBe(${1})",
    ),
    RuleSpec::call(
        "assert-true",
        r"\b(?:Assert\.)?assertTrue\b",
        "expect(${1}${2..}).toBeTruthy()",
    ),
    RuleSpec::call(
        "assert-false",
        r"\b(?:Assert\.)?assertFalse\b",
        "expect(${1}${2..}).toBeFalsy()",
    ),
    // Declarations
    RuleSpec::pattern("string-decl", r"\bString\s+", "let "),
    RuleSpec::pattern("int-decl", r"\bint\s+", "let "),
    RuleSpec::pattern("boolean-decl", r"\bboolean\s+", "let "),
    // Annotations and methods
    RuleSpec::pattern(
        "test",
        r"@Test\b(?:\s*\([^)]*\))?",
        r#"test("Converted Test", async ({ page }) => {"#,
    )
    .opening(),
    RuleSpec::pattern(
        "before-each",
        r"@(?:BeforeMethod|BeforeEach|Before)\b",
        "test.beforeEach(async ({ page }) => {",
    )
    .opening(),
    RuleSpec::pattern(
        "after-each",
        r"@(?:AfterMethod|AfterEach|After)\b",
        "test.afterEach(async ({ page }) => {",
    )
    .opening(),
    RuleSpec::pattern(
        "before-all",
        r"@(?:BeforeClass|BeforeAll)\b",
        "test.beforeAll(async ({ page }) => {",
    )
    .opening(),
    RuleSpec::pattern(
        "after-all",
        r"@(?:AfterClass|AfterAll)\b",
        "test.afterAll(async ({ page }) => {",
    )
    .opening(),
    RuleSpec::pattern(
        "void-method",
        r"\bpublic\s+void\s+(\w+)\s*\(\s*\)[^{]*\{",
        "async function ${1}(page) {",
    ),
    RuleSpec::pattern("driver-field", r"\bWebDriver\s+(.*?);", "// WebDriver Instance: ${1}"),
    RuleSpec::pattern("element-decl", r"\bWebElement\s+(\w+)\s*=\s*", "const ${1} = "),
];
