use crate::domain::model::CalculatorEntry;
use crate::domain::ports::FormSource;
use std::collections::HashSet;
use std::fmt::Write;

/// How much of a calculator listing has a form in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub total: usize,
    pub found: usize,
    pub missing: Vec<CalculatorEntry>,
    /// Catalog ids that the listing does not mention.
    pub unlisted: Vec<&'static str>,
}

impl CoverageReport {
    pub fn build(source: &dyn FormSource, entries: &[CalculatorEntry]) -> Self {
        let mut found = 0;
        let mut missing = Vec::new();
        for entry in entries {
            if source.contains(&entry.id) {
                found += 1;
            } else {
                missing.push(entry.clone());
            }
        }

        let listed: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        let unlisted = source
            .ids()
            .into_iter()
            .filter(|id| !listed.contains(id))
            .collect();

        tracing::debug!(
            total = entries.len(),
            found,
            missing = missing.len(),
            "coverage computed"
        );

        Self {
            total: entries.len(),
            found,
            missing,
            unlisted,
        }
    }

    /// 空清單視為 100%
    pub fn coverage_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.found as f64 / self.total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Human-readable summary; at most `max_missing` missing entries are listed.
    pub fn summary(&self, max_missing: usize) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();

        // write! 到 String 不會失敗
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "CALCULATOR FORMS VERIFICATION");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out);
        let _ = writeln!(out, "Total Calculators: {}", self.total);
        let _ = writeln!(out, "Forms Implemented: {}", self.found);
        let _ = writeln!(out, "Missing Forms: {}", self.missing.len());
        let _ = writeln!(out, "Coverage: {:.1}%", self.coverage_percent());
        let _ = writeln!(out);

        if self.is_complete() {
            let _ = writeln!(out, "✅ All calculator forms implemented!");
        } else {
            let _ = writeln!(out, "❌ Missing Calculator Forms:");
            for entry in self.missing.iter().take(max_missing) {
                let _ = writeln!(out, "  - {} ({})", entry.id, entry.name);
            }
            if self.missing.len() > max_missing {
                let _ = writeln!(out, "  ... and {} more", self.missing.len() - max_missing);
            }
        }

        if !self.unlisted.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Forms not in listing: {}", self.unlisted.join(", "));
        }

        let _ = writeln!(out, "{}", rule);
        out
    }
}
