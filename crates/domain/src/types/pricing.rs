//! Global pricing rules applied on top of hardware prices

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Installation, labour and add-on rates shared by every quotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PricingRules {
    /// Currency per kW of system size
    pub base_installation_rate: f64,
    pub labour_cost_per_day: f64,
    pub scaffolding_cost_per_meter: f64,
    pub bird_net_cost_per_panel: f64,
}

/// Names a single field of [`PricingRules`] for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub enum PricingRule {
    BaseInstallationRate,
    LabourCostPerDay,
    ScaffoldingCostPerMeter,
    BirdNetCostPerPanel,
}

impl PricingRule {
    /// Every rule, in settings-form order
    pub const ALL: [Self; 4] = [
        Self::BaseInstallationRate,
        Self::LabourCostPerDay,
        Self::ScaffoldingCostPerMeter,
        Self::BirdNetCostPerPanel,
    ];
}

impl PricingRules {
    /// Current value of one rule
    pub fn get(&self, rule: PricingRule) -> f64 {
        match rule {
            PricingRule::BaseInstallationRate => self.base_installation_rate,
            PricingRule::LabourCostPerDay => self.labour_cost_per_day,
            PricingRule::ScaffoldingCostPerMeter => self.scaffolding_cost_per_meter,
            PricingRule::BirdNetCostPerPanel => self.bird_net_cost_per_panel,
        }
    }

    /// Returns a copy with one rule replaced.
    pub fn with(mut self, rule: PricingRule, value: f64) -> Self {
        match rule {
            PricingRule::BaseInstallationRate => self.base_installation_rate = value,
            PricingRule::LabourCostPerDay => self.labour_cost_per_day = value,
            PricingRule::ScaffoldingCostPerMeter => self.scaffolding_cost_per_meter = value,
            PricingRule::BirdNetCostPerPanel => self.bird_net_cost_per_panel = value,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_replaces_only_the_named_rule() {
        let rules = PricingRules {
            base_installation_rate: 5000.0,
            labour_cost_per_day: 1500.0,
            scaffolding_cost_per_meter: 800.0,
            bird_net_cost_per_panel: 350.0,
        };

        let updated = rules.with(PricingRule::LabourCostPerDay, 1800.0);

        assert_eq!(updated.get(PricingRule::LabourCostPerDay), 1800.0);
        for rule in PricingRule::ALL.into_iter().filter(|r| *r != PricingRule::LabourCostPerDay) {
            assert_eq!(updated.get(rule), rules.get(rule));
        }
    }
}
