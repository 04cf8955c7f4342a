/*
 *  Copyright 2025-2026 Adjutant Contributors
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Keyword classifier.
//!
//! Maps free text to a (complexity, priority, opinion) assessment through
//! two ordered decision tables. This is deliberately a decision table, not
//! free-form NLP: the first matching rule wins, matching is case-insensitive
//! substring search, and rule order is part of the contract.
//!
//! Pure and deterministic; no state, no side effects.

use serde::{Deserialize, Serialize};

/// Estimated implementation complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifier output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub complexity: Complexity,
    pub priority: Priority,
    pub opinion: &'static str,
}

/// Opinion attached when no complexity rule matches.
pub const DEFAULT_OPINION: &str =
    "Standard development task - manageable with current stack and expertise.";

/// Complexity rules, evaluated top to bottom; first match wins.
const COMPLEXITY_RULES: &[(&[&str], Complexity, &str)] = &[
    (
        &["ai", "ml", "machine learning", "neural", "model"],
        Complexity::High,
        "This involves AI/ML - complex implementation requiring expertise and compute resources.",
    ),
    (
        &["automation", "bot", "script", "cron", "monitor"],
        Complexity::Low,
        "Automation task - straightforward to implement with existing tools and scripts.",
    ),
    (
        &["integration", "api", "webhook", "discord", "slack"],
        Complexity::Medium,
        "Integration work - need to handle auth, rate limits, and error handling.",
    ),
    (
        &["ui", "frontend", "design", "css", "react"],
        Complexity::Medium,
        "Frontend work - requires attention to UX, responsive design, and browser compatibility.",
    ),
];

/// Priority rules, independent of the complexity table.
const PRIORITY_RULES: &[(&[&str], Priority)] = &[
    (
        &["urgent", "critical", "asap", "security", "bug", "broken"],
        Priority::High,
    ),
    (
        &["revenue", "money", "income", "business", "automation"],
        Priority::Medium,
    ),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Classifies free text into a complexity/priority/opinion triple.
pub fn classify(text: &str) -> Assessment {
    let lowered = text.to_lowercase();

    let (complexity, opinion) = COMPLEXITY_RULES
        .iter()
        .find(|(keywords, _, _)| contains_any(&lowered, keywords))
        .map(|(_, complexity, opinion)| (*complexity, *opinion))
        .unwrap_or((Complexity::Low, DEFAULT_OPINION));

    let priority = PRIORITY_RULES
        .iter()
        .find(|(keywords, _)| contains_any(&lowered, keywords))
        .map(|(_, priority)| *priority)
        .unwrap_or(Priority::Low);

    Assessment {
        complexity,
        priority,
        opinion,
    }
}
