use anyhow::Result;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;
use stratagem::players::*;
use stratagem::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("write module");
    path
}

/// Payoffs of the prisoner's dilemma, (mine, theirs).
fn payoff(mine: Action, theirs: Action) -> (Score, Score) {
    match (mine, theirs) {
        (Action::Cooperate, Action::Cooperate) => (3, 3),
        (Action::Cooperate, Action::Defect) => (0, 5),
        (Action::Defect, Action::Cooperate) => (5, 0),
        (Action::Defect, Action::Defect) => (1, 1),
    }
}

/// Minimal stand-in for the host engine: one game of `rounds` rounds.
fn play(
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    rounds: usize,
) -> Result<(History, History)> {
    a.reset();
    b.reset();
    let mut ha = History::default();
    let mut hb = History::default();
    for _ in 0..rounds {
        let x = a.decide(&ha, &hb)?;
        let y = b.decide(&hb, &ha)?;
        let (px, py) = payoff(x, y);
        ha.push(x, px);
        hb.push(y, py);
    }
    Ok((ha, hb))
}

#[test]
fn scenario_three_classes_and_aggressive_ranks() -> Result<()> {
    stratagem::log(log::LevelFilter::Debug);
    let dir = tempfile::tempdir()?;
    let path = write(
        dir.path(),
        "M.json",
        r#"{
            "members": [
                { "name": "Aggressive_1", "extends": "Defector", "attitude": "aggressive" },
                { "name": "Aggressive_2", "extends": "Grudger", "attitude": "aggressive" },
                { "name": "Cooperative_1", "extends": "Cooperator", "attitude": "cooperative" }
            ],
            "ranks": { "aggressive": ["Aggressive_2", "Aggressive_1"] }
        }"#,
    );
    let module = load(&path)?;
    let found = discover(&module, &Catalog::default());
    assert_eq!(
        found.names().collect::<Vec<_>>(),
        vec!["Aggressive_1", "Aggressive_2", "Cooperative_1"]
    );
    let half = Window::new(0.0, 0.5)?;
    assert_eq!(module.ranks().table(Attitude::Aggressive)?.len(), 2);
    assert_eq!(half.slice(2), 0..1);
    // the other two tables are required once a partial window is asked for
    assert!(matches!(
        filter(&found, module.ranks(), half),
        Err(Error::MissingRankTable { .. })
    ));
    let ranks = module
        .ranks()
        .clone()
        .with(Attitude::Cooperative, ["Cooperative_1", "Cooperative_2"])
        .with(Attitude::Neutral, ["Neutral_1", "Neutral_2"]);
    let mut kept = filter(&found, &ranks, half)?;
    assert_eq!(kept.names().collect::<Vec<_>>(), vec!["Aggressive_2", "Cooperative_1"]);
    assert!(matches!(
        build(&kept, "", &Dice::seeded(0)),
        Err(Error::EmptyPool {
            attitude: Attitude::Neutral,
            ..
        })
    ));
    kept.register(Descriptor::new("Neutral_1", Some(Attitude::Neutral), |_| {
        Box::new(TitForTat)
    }));
    let ensembles = build(&kept, "", &Dice::seeded(0))?;
    let pool = ensembles.aggressive.pool();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.candidates()[0].name(), "Aggressive_2");
    let mut composite = ensembles.aggressive.spawn();
    let mut opponent = TitForTat;
    for _ in 0..10 {
        play(&mut composite, &mut opponent, 5)?;
        assert_eq!(composite.bound(), Some("Aggressive_2"));
    }
    Ok(())
}

#[test]
fn fixture_discovers_every_strategy_but_helpers() -> Result<()> {
    let module = load(fixture("generations"))?;
    assert_eq!(module.key(), "generations");
    let found = discover(&module, &Catalog::default());
    assert_eq!(found.len(), 12);
    assert!(!found.contains("Scorekeeper"));
    assert!(!found.contains(BASE));
    assert_eq!(
        found.unclassified().map(Descriptor::name).collect::<Vec<_>>(),
        vec!["TitForTat"]
    );
    assert_eq!(
        found.get("Aggressive_3").and_then(Descriptor::attitude),
        Some(Attitude::Aggressive)
    );
    assert_eq!(
        found.get("Neutral_1_v2").and_then(Descriptor::attitude),
        Some(Attitude::Neutral)
    );
    Ok(())
}

#[test]
fn setup_filters_then_builds() -> Result<()> {
    let config = Config {
        module: fixture("generations"),
        top: 0.0,
        bottom: 0.5,
        seed: Some(7),
        ..Config::default()
    };
    let ensembles = setup(&config)?;
    let names = |attitude: Attitude| {
        ensembles
            .get(attitude)
            .pool()
            .candidates()
            .iter()
            .map(|d| d.name().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(Attitude::Aggressive), vec!["Aggressive_1_v2", "Aggressive_2"]);
    assert_eq!(names(Attitude::Cooperative), vec!["Cooperative_1_v2"]);
    assert_eq!(names(Attitude::Neutral), vec!["Neutral_1_v2", "Neutral_2"]);
    Ok(())
}

#[test]
fn setup_suffix_selects_a_generation() -> Result<()> {
    let config = Config {
        module: fixture("generations.json"),
        suffix: "_v2".into(),
        seed: Some(1),
        ..Config::default()
    };
    let ensembles = setup(&config)?;
    for ensemble in ensembles.iter() {
        assert_eq!(ensemble.pool().len(), 1);
        assert!(ensemble.name().ends_with("_v2"));
    }
    Ok(())
}

#[test]
fn setup_prefers_external_ranks() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let ranks = write(
        dir.path(),
        "ranks.json",
        r#"{
            "aggressive": ["Aggressive_1", "Aggressive_2"],
            "cooperative": ["Cooperative_2", "Cooperative_1"],
            "neutral": ["Neutral_3", "Neutral_1"]
        }"#,
    );
    let config = Config {
        module: fixture("generations"),
        ranks: Some(ranks),
        bottom: 0.5,
        seed: Some(3),
        ..Config::default()
    };
    let ensembles = setup(&config)?;
    assert_eq!(ensembles.aggressive.pool().candidates()[0].name(), "Aggressive_1");
    assert_eq!(ensembles.cooperative.pool().candidates()[0].name(), "Cooperative_2");
    assert_eq!(ensembles.neutral.pool().candidates()[0].name(), "Neutral_3");
    Ok(())
}

#[test]
fn setup_failures_abort_with_diagnostics() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = Config {
        module: dir.path().join("absent"),
        ..Config::default()
    };
    assert!(matches!(setup(&missing), Err(Error::ModuleNotFound { .. })));

    let blank = Config::from_vars(|key: &str| (key == "STRATAGEM_MODULE").then(String::new))?;
    assert!(matches!(setup(&blank), Err(Error::ModuleNotFound { .. })));

    write(dir.path(), "hollow.json", r#"{ "members": [{ "name": "Helper" }] }"#);
    let hollow = Config {
        module: dir.path().join("hollow"),
        ..Config::default()
    };
    match setup(&hollow) {
        Err(Error::EmptyDiscovery { key }) => assert_eq!(key, "hollow"),
        other => panic!("unexpected: {:?}", other.map(|e| e.to_string())),
    }

    let inverted = Config {
        module: fixture("generations"),
        top: 0.9,
        bottom: 0.1,
        ..Config::default()
    };
    assert!(matches!(setup(&inverted), Err(Error::InvalidWindow { .. })));
    Ok(())
}

#[test]
fn seeded_runs_replay_bindings() -> Result<()> {
    let run = |seed: u64| -> Result<Vec<String>> {
        let config = Config {
            module: fixture("generations"),
            seed: Some(seed),
            ..Config::default()
        };
        let ensembles = setup(&config)?;
        let mut composite = ensembles.neutral.spawn();
        let mut opponent = Grudger::default();
        let mut bound = Vec::new();
        for _ in 0..20 {
            play(&mut composite, &mut opponent, 6)?;
            bound.push(composite.bound().unwrap_or_default().to_string());
        }
        Ok(bound)
    };
    assert_eq!(run(99)?, run(99)?);
    let variety = (0..6)
        .map(run)
        .collect::<Result<BTreeSet<_>>>()?;
    assert!(variety.len() > 1);
    Ok(())
}

#[test]
fn composites_substitute_for_concrete_strategies() -> Result<()> {
    let config = Config {
        module: fixture("generations"),
        seed: Some(5),
        ..Config::default()
    };
    let ensembles = setup(&config)?;
    let mut roster = ensembles.registry();
    roster.register(Descriptor::new("TitForTat", None, |_| Box::new(TitForTat)));
    let dice = Dice::seeded(5);
    let entrants = roster.iter().collect::<Vec<_>>();
    for a in &entrants {
        for b in &entrants {
            let mut x = a.spawn(&dice);
            let mut y = b.spawn(&dice);
            let (hx, hy) = play(x.as_mut(), y.as_mut(), 10)?;
            assert_eq!(hx.rounds(), 10);
            assert_eq!(hy.rounds(), 10);
        }
    }
    Ok(())
}

#[test]
fn parallel_games_share_one_pool() -> Result<()> {
    let config = Config {
        module: fixture("generations"),
        seed: Some(11),
        ..Config::default()
    };
    let ensembles = setup(&config)?;
    let ensemble = &ensembles.aggressive;
    let pool = ensemble
        .pool()
        .candidates()
        .iter()
        .map(|d| d.name().to_string())
        .collect::<BTreeSet<_>>();
    let bound = (0..64)
        .into_par_iter()
        .map(|_| -> Result<String> {
            let mut composite = ensemble.spawn();
            let ref them = History::default();
            let mut me = History::default();
            composite.decide(&me, them)?;
            let first = composite.bound().unwrap_or_default().to_string();
            for _ in 0..5 {
                let action = composite.decide(&me, them)?;
                me.push(action, 0);
                assert_eq!(composite.bound(), Some(first.as_str()));
            }
            Ok(first)
        })
        .collect::<Result<Vec<_>>>()?;
    assert!(bound.iter().all(|name| pool.contains(name)));
    Ok(())
}
