use crate::model::{
    aggregate::{EmitterProfile, ExpectedFootprint, PersonaStatistics},
    assessment::{Assessment, Evaluation, InterventionOutcome, Variant},
    impact::ImpactMetric,
};
use std::fmt::{self, Display, Formatter};
use umia_core::model::session::Session;

/// plain-text analysis of an assessment, printed by the `run` command.
pub struct Report<'a> {
    pub session: &'a Session,
    pub assessment: &'a Assessment,
}

impl<'a> Report<'a> {
    pub fn new(session: &'a Session, assessment: &'a Assessment) -> Report<'a> {
        Report {
            session,
            assessment,
        }
    }

    fn write_footprint(&self, f: &mut Formatter<'_>, footprint: &ExpectedFootprint) -> fmt::Result {
        for metric in ImpactMetric::ALL {
            writeln!(
                f,
                "  {:<9} {:>14.1} {} per day, {:>16.1} {} per year",
                metric.to_string(),
                footprint.daily.get(metric),
                metric.group_unit(),
                footprint.annual.get(metric),
                metric.group_unit()
            )?;
        }
        Ok(())
    }

    fn write_evaluation(
        &self,
        f: &mut Formatter<'_>,
        variant: &Variant,
        evaluation: &Evaluation,
    ) -> fmt::Result {
        let session = self.session;
        writeln!(f, "scenario totals, CO2e per day:")?;
        for (scenario, total) in session.scenarios.iter().zip(&evaluation.scenario_totals) {
            writeln!(
                f,
                "  {:<12} {:>10.1} t CO2e  ({} likely)",
                variant.scenario_label(scenario.id),
                total.co2e,
                scenario.likelihood
            )?;
        }
        let Some(statistics) = &evaluation.statistics else {
            return Ok(());
        };
        let range = &statistics.scenarios;
        writeln!(
            f,
            "weighted by likelihood, the highest emitting scenario is {} with {:.0} t CO2e per day, the lowest is {} with {:.0} t CO2e per day, a difference of {:.0} t CO2e",
            session.scenario_name(range.highest.scenario),
            range.highest.co2e,
            session.scenario_name(range.lowest.scenario),
            range.lowest.co2e,
            range.difference
        )?;
        self.write_personas(f, "individual", "kg CO2e", &statistics.individual)?;
        self.write_personas(f, "population group", "t CO2e", &statistics.group)
    }

    fn write_personas(
        &self,
        f: &mut Formatter<'_>,
        basis: &str,
        unit: &str,
        stats: &PersonaStatistics,
    ) -> fmt::Result {
        let session = self.session;
        writeln!(
            f,
            "on a {basis} basis {} has the highest mean footprint with {:.2} {unit} per day, {} the lowest with {:.2} {unit}",
            session.persona_name(stats.highest_mean.persona),
            stats.highest_mean.co2e,
            session.persona_name(stats.lowest_mean.persona),
            stats.lowest_mean.co2e
        )?;
        self.write_max_emitter(f, unit, &stats.max_emitter)?;
        let min = &stats.min_emitter;
        writeln!(
            f,
            "  {} emits between {:.2} {unit} in {} and {:.2} {unit} in {}, a range of {:.2} {unit}",
            session.persona_name(min.persona),
            min.min_co2e,
            session.scenario_name(min.min_scenario),
            min.max_co2e,
            session.scenario_name(min.max_scenario),
            min.range()
        )
    }

    fn write_max_emitter(
        &self,
        f: &mut Formatter<'_>,
        unit: &str,
        max: &EmitterProfile,
    ) -> fmt::Result {
        let session = self.session;
        let persona = session.persona_name(max.persona);
        match max.ratio {
            Some(ratio) => writeln!(
                f,
                "  {persona} emits {ratio:.1} times more in {} ({:.2} {unit}) than in {} ({:.2} {unit})",
                session.scenario_name(max.max_scenario),
                max.max_co2e,
                session.scenario_name(max.min_scenario),
                max.min_co2e
            ),
            None => writeln!(
                f,
                "  {persona} emits up to {:.2} {unit} in {} and nothing in {}",
                max.max_co2e,
                session.scenario_name(max.max_scenario),
                session.scenario_name(max.min_scenario)
            ),
        }
    }

    fn write_intervention(&self, f: &mut Formatter<'_>, outcome: &InterventionOutcome) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "with intervention {}:", outcome.variant)?;
        for comparison in outcome.comparison.metrics.iter() {
            let unit = comparison.metric.group_unit();
            let change = match comparison.change_percent() {
                Some(percent) => format!("{percent:+.1}%"),
                None => String::from("n/a"),
            };
            writeln!(
                f,
                "  {:<9} {:>14.1} {unit} per day against {:.1} {unit} at baseline ({change}), {:.1} {unit} per year",
                comparison.metric.to_string(),
                comparison.intervention_daily,
                comparison.baseline_daily,
                comparison.intervention_annual
            )?;
        }
        if !outcome.clamped.is_empty() {
            let clamped = outcome.clamped.len();
            writeln!(f, "  {clamped} ratings were clamped to the rating scale")?;
        }
        self.write_evaluation(f, &outcome.variant, &outcome.evaluation)
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let session = self.session;
        let assessment = self.assessment;
        writeln!(
            f,
            "urban mobility impact assessment: {} scenarios, {} personas, population {}",
            session.scenarios.len(),
            session.personas.len(),
            session.population
        )?;
        writeln!(f)?;
        writeln!(f, "expected footprint:")?;
        self.write_footprint(f, &assessment.baseline.footprint)?;
        self.write_evaluation(f, &Variant::Baseline, &assessment.baseline)?;
        for outcome in assessment.interventions.iter() {
            self.write_intervention(f, outcome)?;
        }
        if !assessment.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "warnings:")?;
            for warning in assessment.warnings.iter() {
                writeln!(f, "  {warning}")?;
            }
        }
        Ok(())
    }
}
