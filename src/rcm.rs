//! RCM strategy selection.
//!
//! A pure decision table mapping failure predictability, asset criticality,
//! and failure cost to a maintenance strategy, with context-sensitive
//! recommendations appended from the free-text inputs.

use serde::{Deserialize, Serialize};

/// Criticality of the asset to the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCriticality {
    High,
    Medium,
    Low,
}

/// Inputs to the RCM strategy decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcmParameters {
    /// Criticality of the asset.
    pub criticality: AssetCriticality,
    /// Whether the dominant failure modes give detectable warning.
    pub is_predictable: bool,
    /// Cost of a single failure event, ≥ 0.
    pub cost_of_failure: f64,
    /// Free-text failure mode descriptions.
    pub failure_modes: Vec<String>,
    /// Free-text failure consequence descriptions.
    pub failure_consequences: Vec<String>,
    /// Free-text description of current maintenance practices.
    pub current_practices: String,
}

/// Maintenance strategies the decision table can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RcmStrategy {
    PredictiveMaintenance,
    PreventiveMaintenance,
    ConditionBasedMaintenance,
    Redesign,
    RunToFailure,
}

impl std::fmt::Display for RcmStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RcmStrategy::PredictiveMaintenance => "Predictive Maintenance",
            RcmStrategy::PreventiveMaintenance => "Preventive Maintenance",
            RcmStrategy::ConditionBasedMaintenance => "Condition-Based Maintenance",
            RcmStrategy::Redesign => "Redesign",
            RcmStrategy::RunToFailure => "Run-to-Failure",
        };
        f.write_str(name)
    }
}

/// Result of an RCM strategy decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcmRecommendation {
    /// Selected strategy.
    pub strategy: RcmStrategy,
    /// Appended recommendations, in the order the triggers are checked
    /// (practices, then failure modes, then consequences).
    pub recommendations: Vec<String>,
    /// Echo of the criticality input.
    pub criticality: AssetCriticality,
    /// Echo of the predictability input.
    pub is_predictable: bool,
    /// Echo of the failure cost input.
    pub cost_of_failure: f64,
}

/// Failure cost above which predictable failures justify scheduled PM.
const PREDICTABLE_PM_COST_THRESHOLD: f64 = 5000.0;

/// Failure cost above which unpredictable failures justify scheduled PM.
const UNPREDICTABLE_PM_COST_THRESHOLD: f64 = 3000.0;

/// Selects a maintenance strategy for an asset.
///
/// The decision table, first match per predictability arm:
///
/// | predictable | criticality | cost of failure | strategy |
/// |---|---|---|---|
/// | yes | High | any | Predictive Maintenance |
/// | yes | other | > 5000 | Preventive Maintenance |
/// | yes | other | ≤ 5000 | Condition-Based Maintenance |
/// | no | High | any | Redesign |
/// | no | other | > 3000 | Preventive Maintenance |
/// | no | other | ≤ 3000 | Run-to-Failure |
///
/// Recommendations are appended (never branch-replacing) when the
/// free-text inputs match (case-insensitive substring): current practices
/// mentioning "reactive" or "run to fail", any failure mode mentioning
/// "wear", any consequence mentioning "safety".
///
/// # Examples
///
/// ```
/// use rcm_analytics::rcm::{determine_strategy, AssetCriticality, RcmParameters, RcmStrategy};
///
/// let rec = determine_strategy(&RcmParameters {
///     criticality: AssetCriticality::High,
///     is_predictable: true,
///     cost_of_failure: 5000.0,
///     failure_modes: vec![],
///     failure_consequences: vec![],
///     current_practices: String::new(),
/// });
/// assert_eq!(rec.strategy, RcmStrategy::PredictiveMaintenance);
/// ```
pub fn determine_strategy(params: &RcmParameters) -> RcmRecommendation {
    let strategy = if params.is_predictable {
        if params.criticality == AssetCriticality::High {
            RcmStrategy::PredictiveMaintenance
        } else if params.cost_of_failure > PREDICTABLE_PM_COST_THRESHOLD {
            RcmStrategy::PreventiveMaintenance
        } else {
            RcmStrategy::ConditionBasedMaintenance
        }
    } else if params.criticality == AssetCriticality::High {
        RcmStrategy::Redesign
    } else if params.cost_of_failure > UNPREDICTABLE_PM_COST_THRESHOLD {
        RcmStrategy::PreventiveMaintenance
    } else {
        RcmStrategy::RunToFailure
    };

    let mut recommendations = Vec::new();

    let practices = params.current_practices.to_lowercase();
    if practices.contains("reactive") || practices.contains("run to fail") {
        recommendations.push(
            "Current practices are reactive; transition to the selected proactive \
             strategy incrementally, starting with the highest-criticality failure modes."
                .to_string(),
        );
    }

    if params
        .failure_modes
        .iter()
        .any(|m| m.to_lowercase().contains("wear"))
    {
        recommendations.push(
            "Wear-driven failure modes respond well to condition monitoring \
             (vibration, oil analysis, thermography) to catch degradation early."
                .to_string(),
        );
    }

    if params
        .failure_consequences
        .iter()
        .any(|c| c.to_lowercase().contains("safety"))
    {
        recommendations.push(
            "Safety consequences identified: verify protective devices and include \
             this asset in the formal risk assessment regardless of strategy."
                .to_string(),
        );
    }

    RcmRecommendation {
        strategy,
        recommendations,
        criticality: params.criticality,
        is_predictable: params.is_predictable,
        cost_of_failure: params.cost_of_failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        criticality: AssetCriticality,
        is_predictable: bool,
        cost_of_failure: f64,
    ) -> RcmParameters {
        RcmParameters {
            criticality,
            is_predictable,
            cost_of_failure,
            failure_modes: vec![],
            failure_consequences: vec![],
            current_practices: String::new(),
        }
    }

    #[test]
    fn test_predictable_high_criticality() {
        let rec = determine_strategy(&params(AssetCriticality::High, true, 5000.0));
        assert_eq!(rec.strategy, RcmStrategy::PredictiveMaintenance);
    }

    #[test]
    fn test_predictable_expensive_failures() {
        let rec = determine_strategy(&params(AssetCriticality::Medium, true, 5001.0));
        assert_eq!(rec.strategy, RcmStrategy::PreventiveMaintenance);
        // Exactly at the threshold falls through to condition-based
        let rec = determine_strategy(&params(AssetCriticality::Medium, true, 5000.0));
        assert_eq!(rec.strategy, RcmStrategy::ConditionBasedMaintenance);
    }

    #[test]
    fn test_unpredictable_high_criticality_means_redesign() {
        let rec = determine_strategy(&params(AssetCriticality::High, false, 100.0));
        assert_eq!(rec.strategy, RcmStrategy::Redesign);
    }

    #[test]
    fn test_unpredictable_cheap_failures_run_to_failure() {
        let rec = determine_strategy(&params(AssetCriticality::Low, false, 500.0));
        assert_eq!(rec.strategy, RcmStrategy::RunToFailure);
        let rec = determine_strategy(&params(AssetCriticality::Medium, false, 3001.0));
        assert_eq!(rec.strategy, RcmStrategy::PreventiveMaintenance);
    }

    #[test]
    fn test_recommendations_appended_not_replacing() {
        let mut p = params(AssetCriticality::Low, false, 500.0);
        p.current_practices = "Mostly REACTIVE fixes after breakdown".to_string();
        p.failure_modes = vec!["Bearing Wear".to_string(), "seal leak".to_string()];
        p.failure_consequences = vec!["Operator SAFETY risk".to_string()];

        let rec = determine_strategy(&p);
        // Strategy unchanged by the free-text triggers
        assert_eq!(rec.strategy, RcmStrategy::RunToFailure);
        assert_eq!(rec.recommendations.len(), 3);
        assert!(rec.recommendations[0].contains("reactive"));
        assert!(rec.recommendations[1].contains("Wear") || rec.recommendations[1].contains("wear"));
        assert!(rec.recommendations[2].contains("Safety") || rec.recommendations[2].contains("safety"));
    }

    #[test]
    fn test_run_to_fail_phrase_triggers() {
        let mut p = params(AssetCriticality::Medium, true, 100.0);
        p.current_practices = "We just Run To Fail on these".to_string();
        let rec = determine_strategy(&p);
        assert_eq!(rec.recommendations.len(), 1);
    }

    #[test]
    fn test_inputs_echoed() {
        let rec = determine_strategy(&params(AssetCriticality::Medium, true, 1234.0));
        assert_eq!(rec.criticality, AssetCriticality::Medium);
        assert!(rec.is_predictable);
        assert!((rec.cost_of_failure - 1234.0).abs() < 1e-12);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(
            RcmStrategy::ConditionBasedMaintenance.to_string(),
            "Condition-Based Maintenance"
        );
        assert_eq!(RcmStrategy::RunToFailure.to_string(), "Run-to-Failure");
    }
}
