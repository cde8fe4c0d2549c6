//! League lookup.
//!
//! [`LeagueResolver`] is the seam for swapping the static table below for a
//! search- or API-backed source without touching the ingest engine.

/// Resolves the leagues known for a sport.
pub trait LeagueResolver: Send + Sync {
  /// Leagues for `sport_name`, in a stable order. Unknown names yield an
  /// empty vector.
  fn leagues_for(&self, sport_name: &str) -> Vec<String>;
}

const TABLE: &[(&str, &[&str])] = &[
  ("Football (Soccer)", &[
    "Premier League",
    "La Liga",
    "Serie A",
    "Bundesliga",
    "Major League Soccer",
  ]),
  ("Basketball", &[
    "National Basketball Association (NBA)",
    "EuroLeague",
    "NBL (Australia)",
  ]),
  ("Cricket", &[
    "Indian Premier League (IPL)",
    "The Ashes",
    "Big Bash League",
  ]),
  ("American Football", &["National Football League (NFL)"]),
  ("Ice Hockey", &[
    "National Hockey League (NHL)",
    "Kontinental Hockey League (KHL)",
  ]),
  ("Baseball", &[
    "Major League Baseball (MLB)",
    "Nippon Professional Baseball (NPB)",
  ]),
  // A racing series rather than a league.
  ("Formula 1", &["Formula 1 World Championship"]),
];

/// Hand-curated sport → leagues table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLeagues;

impl LeagueResolver for StaticLeagues {
  fn leagues_for(&self, sport_name: &str) -> Vec<String> {
    let leagues: Vec<String> = TABLE
      .iter()
      .find(|(sport, _)| *sport == sport_name)
      .map(|(_, leagues)| leagues.iter().map(|l| (*l).to_owned()).collect())
      .unwrap_or_default();

    if !leagues.is_empty() {
      tracing::debug!("found {} leagues for {sport_name:?}", leagues.len());
    }
    leagues
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn basketball_has_three_leagues_in_order() {
    assert_eq!(StaticLeagues.leagues_for("Basketball"), vec![
      "National Basketball Association (NBA)",
      "EuroLeague",
      "NBL (Australia)",
    ]);
  }

  #[test]
  fn unknown_sport_has_no_leagues() {
    assert!(StaticLeagues.leagues_for("Curling").is_empty());
  }

  #[test]
  fn lookup_is_exact_match() {
    assert!(StaticLeagues.leagues_for("basketball").is_empty());
    assert!(StaticLeagues.leagues_for("Basketball ").is_empty());
    assert_eq!(StaticLeagues.leagues_for("Formula 1").len(), 1);
  }
}
