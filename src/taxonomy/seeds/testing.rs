//! Testing practice.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["unit-testing", "jest", "vitest", "mocha", "pytest", "testing"],
        keywords: &["unit test", "jest", "vitest", "mocha"],
        stack_pool: &["Vitest", "Jest", "Mocha", "bun:test"],
        ..seed("unit-testing", "Unit Testing Dev", "\u{2705}", "#4CAF50")
    },
    CategorySeed {
        topics: &["e2e-testing", "playwright", "cypress", "selenium", "puppeteer"],
        keywords: &["e2e test", "playwright", "cypress", "selenium"],
        stack_pool: &["Playwright", "Cypress", "Selenium"],
        ..seed("e2e-testing", "E2E Testing Dev", "\u{1F9EA}", "#00BCD4")
    },
    CategorySeed {
        topics: &["load-testing", "k6", "gatling", "jmeter", "stress-testing"],
        keywords: &["load test", "k6", "gatling", "stress test"],
        stack_pool: &["k6", "Gatling", "Locust", "Artillery"],
        ..seed("load-testing", "Load Testing Dev", "\u{1F4C8}", "#FF5722")
    },
    CategorySeed {
        topics: &["fuzzing", "fuzz-testing", "afl", "libfuzzer", "honggfuzz"],
        keywords: &["fuzzing", "fuzz test", "afl"],
        stack_pool: &["AFL++", "libFuzzer", "cargo-fuzz"],
        ..seed("fuzzing", "Fuzz Tester", "\u{1F41B}", "#9C27B0")
    },
    CategorySeed {
        topics: &["tdd", "test-driven-development", "bdd"],
        keywords: &["tdd", "test-driven", "bdd"],
        stack_pool: &["TDD", "BDD", "Red-Green-Refactor"],
        ..seed("tdd", "TDD Practitioner", "\u{1F501}", "#2196F3")
    },
    CategorySeed {
        topics: &["property-testing", "quickcheck", "hypothesis", "proptest"],
        keywords: &["property test", "quickcheck", "hypothesis"],
        stack_pool: &["QuickCheck", "Hypothesis", "Proptest", "fast-check"],
        ..seed("property-testing", "Property Tester", "\u{1F3B2}", "#795548")
    },
];
