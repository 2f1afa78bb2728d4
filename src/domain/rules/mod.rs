pub mod usage;

use crate::domain::entities::alert::Alert;
use crate::domain::entities::sample::Sample;
use crate::domain::value_objects::metric::Metric;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// A deterministic rule that evaluates a sample and produces at most one alert.
/// Rules are pure functions: sample + thresholds in, alert out. No I/O.
pub trait Rule: Send + Sync {
    /// Returns the unique name of this rule
    fn name(&self) -> &'static str;

    /// Evaluates the rule against a sample using the given thresholds
    fn evaluate(&self, sample: &Sample, thresholds: &ThresholdSet) -> Option<Alert>;
}

/// Usage rules for CPU, memory and disk, in that order
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    Metric::ALL
        .into_iter()
        .map(|metric| Box::new(usage::UsageRule::new(metric)) as Box<dyn Rule>)
        .collect()
}

/// Engine that runs a collection of rules against samples
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Runs every rule, returning alerts in rule order.
    #[must_use]
    pub fn analyze(&self, sample: &Sample, thresholds: &ThresholdSet) -> Vec<Alert> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(sample, thresholds))
            .collect()
    }

    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}
