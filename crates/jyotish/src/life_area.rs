//! Named varga combinations used for themed readings.

use crate::error::Result;
use crate::vedic::VargaLabel;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the formatted chart in a prompt template.
pub const CHART_DATA_PLACEHOLDER: &str = "{{chart_data}}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeAreaSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated varga labels, first one is the base chart
    pub varga_combination: String,
    #[serde(default)]
    pub prompt_template: String,
}

impl LifeAreaSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        varga_combination: impl Into<String>,
        prompt_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            varga_combination: varga_combination.into(),
            prompt_template: prompt_template.into(),
        }
    }

    /// Parsed combination; any unknown label rejects the whole spec.
    pub fn labels(&self) -> Result<Vec<VargaLabel>> {
        VargaLabel::parse_list(&self.varga_combination)
    }

    pub fn render_prompt(&self, chart_text: &str) -> String {
        self.prompt_template.replace(CHART_DATA_PLACEHOLDER, chart_text)
    }
}

const HEALTH_PROMPT: &str = "Give a thorough health reading of this Vedic chart.
Use the primary chart (D1), the disease chart (D6) and the ancestral chart (D12).
Cover:
1. General constitution and innate health tendencies
2. Weak points and susceptibility to illness
3. Hereditary health patterns
4. Prevention and ways to strengthen health

Chart data:
{{chart_data}}";

const FINANCES_PROMPT: &str = "Give a thorough financial reading of this Vedic chart.
Use the primary chart (D1), the wealth chart (D2) and the gains chart (D11).
Cover:
1. Natural tendencies to accumulate wealth
2. Best sources of income
3. Financial challenges and how to meet them
4. Investment approaches that suit the chart
5. Periods of prosperity and of difficulty

Chart data:
{{chart_data}}";

const RELATIONSHIPS_PROMPT: &str = "Give a thorough relationship reading of this Vedic chart.
Use the primary chart (D1), the marriage chart (D9) and the children chart (D7).
Cover:
1. Natural tendencies in partnership
2. Quality and character of a potential marriage
3. Compatibility with a partner
4. Relations with children and parenting potential
5. Relationship challenges and how to meet them

Chart data:
{{chart_data}}";

const CAREER_PROMPT: &str = "Give a thorough career reading of this Vedic chart.
Use the primary chart (D1), the career chart (D10) and the gains chart (D11).
Cover:
1. Natural professional talents
2. Best career paths and fields
3. Relations with superiors and colleagues
4. Potential for success and social standing
5. Periods favouring professional growth

Chart data:
{{chart_data}}";

const TALENTS_PROMPT: &str = "Give a thorough reading of talents and creativity in this Vedic chart.
Use the primary chart (D1), the creativity chart (D5) and the spiritual chart (D9).
Cover:
1. Innate talents and abilities
2. Creative and artistic potential
3. Path of personal and spiritual growth
4. Making the most of natural gifts
5. Karmic influences from past lives

Chart data:
{{chart_data}}";

/// The five built-in areas.
pub fn default_life_areas() -> Vec<LifeAreaSpec> {
    vec![
        LifeAreaSpec::new(
            "Health",
            "Health, illness and ancestral karma",
            "D1,D6,D12",
            HEALTH_PROMPT,
        ),
        LifeAreaSpec::new(
            "Finances",
            "Finances, wealth and gains",
            "D1,D2,D11",
            FINANCES_PROMPT,
        ),
        LifeAreaSpec::new(
            "Relationships",
            "Relationships, marriage and children",
            "D1,D9,D7",
            RELATIONSHIPS_PROMPT,
        ),
        LifeAreaSpec::new(
            "Career",
            "Career, professional success and income",
            "D1,D10,D11",
            CAREER_PROMPT,
        ),
        LifeAreaSpec::new(
            "Talents",
            "Talents, creativity and spiritual growth",
            "D1,D5,D9",
            TALENTS_PROMPT,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let areas = default_life_areas();
        assert_eq!(areas.len(), 5);
        for area in &areas {
            let labels = area.labels().unwrap();
            assert_eq!(labels[0], VargaLabel::D1);
            assert_eq!(labels.len(), 3);
            assert!(area.prompt_template.contains(CHART_DATA_PLACEHOLDER));
        }
        assert_eq!(
            areas[2].labels().unwrap(),
            vec![VargaLabel(1), VargaLabel(9), VargaLabel(7)]
        );
    }

    #[test]
    fn test_unknown_label_is_invalid_input() {
        let area = LifeAreaSpec::new("Odd", "", "D1,D27", "");
        assert!(area.labels().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_render_prompt() {
        let area = LifeAreaSpec::new("Test", "", "D1", "Read:\n{{chart_data}}\nEnd");
        assert_eq!(area.render_prompt("SUN"), "Read:\nSUN\nEnd");
    }
}
