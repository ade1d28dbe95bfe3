use serde::Deserialize;
use serde::Serialize;

/// Competition listing as returned by the sports-data provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionResponse {
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub current_season: Option<Season>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: i64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current_matchday: Option<i32>,
    #[serde(default)]
    pub winner: Option<Team>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default)]
    pub club_colors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Competition as served to clients (`{"id", "nome", "temporada"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedCompetition {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "temporada")]
    pub season: String,
}

impl From<&Competition> for FormattedCompetition {
    fn from(competition: &Competition) -> Self {
        let season = competition
            .current_season
            .as_ref()
            .map(|season| season_year(&season.start_date))
            .unwrap_or_default();

        Self {
            id: format!("campeonato_{:03}", competition.id),
            name: competition.name.clone(),
            season,
        }
    }
}

/// Format every competition in upstream order.
pub fn format_competitions(response: &CompetitionResponse) -> Vec<FormattedCompetition> {
    response
        .competitions
        .iter()
        .map(FormattedCompetition::from)
        .collect()
}

// "2024-08-16" -> "2024"
fn season_year(start_date: &str) -> String {
    start_date
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string()
}
