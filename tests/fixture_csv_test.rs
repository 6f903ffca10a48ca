use f1_dashboard::core::{ResultStore, RowSource, Storage};
use f1_dashboard::{Dashboard, EntityKind, LocalStorage, MemoryStore, Metric, RankingView, Season};

async fn fixture_dashboard() -> Dashboard<MemoryStore> {
    let storage = LocalStorage::new(env!("CARGO_MANIFEST_DIR").to_string());
    let standings = storage.read_file("fixtures/standings_2021.csv").await.unwrap();
    let results = storage.read_file("fixtures/results_2021.csv").await.unwrap();
    Dashboard::new(MemoryStore::from_fixtures(EntityKind::Driver, &standings, &results).unwrap())
}

#[tokio::test]
async fn test_fixture_standings() {
    let standings = fixture_dashboard()
        .await
        .aggregate_standings(Season::new(2021), EntityKind::Driver)
        .await
        .unwrap();

    assert_eq!(standings.len(), 6);
    assert_eq!(standings[0].entity, "Valtteri Bottas");
    assert_eq!(standings[0].team.as_deref(), Some("Mercedes"));
    assert_eq!(standings[0].points, 90.0);
    assert_eq!(standings[5].entity, "Charles Leclerc");
}

#[tokio::test]
async fn test_fixture_evolution_and_view() {
    let evolution = fixture_dashboard()
        .await
        .extract_evolution(Season::new(2021), EntityKind::Driver)
        .await
        .unwrap();

    assert_eq!(evolution.len(), 30);
    assert_eq!(evolution[0].round, 1);
    assert_eq!(evolution[0].rank, 1);
    assert_eq!(evolution[0].entity, "Valtteri Bottas");

    let round_two: Vec<&str> = evolution
        .iter()
        .filter(|p| p.round == 2)
        .map(|p| p.entity.as_str())
        .collect();
    assert_eq!(round_two[0], "Valtteri Bottas");
    assert_eq!(round_two[1], "Lando Norris");

    let view = RankingView::new(&evolution);
    assert_eq!(view.round_bounds(), Some((1, 5)));
    assert_eq!(view.default_highlight(), Some(2));
    assert_eq!(view.entities().len(), 6);
    assert_eq!(view.filter(&["Lando Norris"]).len(), 5);
}

#[tokio::test]
async fn test_fixture_performance() {
    let performance = fixture_dashboard()
        .await
        .summarize_performance(Season::new(2021), EntityKind::Driver)
        .await
        .unwrap();

    assert_eq!(performance.len(), 24);

    let hamilton: Vec<(Metric, u32)> = performance
        .iter()
        .filter(|c| c.entity == "Lewis Hamilton")
        .map(|c| (c.metric, c.count))
        .collect();
    assert_eq!(hamilton.len(), 4);
    assert!(hamilton.contains(&(Metric::Dnfs, 1)));
    assert!(hamilton.contains(&(Metric::PointsFinishes, 4)));

    let wins: u32 = performance
        .iter()
        .filter(|c| c.metric == Metric::Wins)
        .map(|c| c.count)
        .sum();
    assert_eq!(wins, 5);
}

#[tokio::test]
async fn test_fixture_ranks_follow_cumulative_points() {
    let dashboard = fixture_dashboard().await;
    let rows = dashboard
        .store()
        .fetch_rows(RowSource::Standings, EntityKind::Driver, Season::new(2021))
        .await
        .unwrap();

    for round in 1..=5 {
        let mut in_round: Vec<_> = rows.iter().filter(|r| r.round == round).collect();
        in_round.sort_by_key(|r| r.rank);

        assert_eq!(in_round.len(), 6, "round {}", round);
        assert!(
            in_round.windows(2).all(|w| w[0].points >= w[1].points),
            "round {} ranks out of points order",
            round
        );
    }
}
