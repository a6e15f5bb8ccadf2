use std::collections::HashSet;

use swiss_tournament::config::TournamentSettings;
use swiss_tournament::database::{self, PlayerId};
use swiss_tournament::errors::TournamentError;
use swiss_tournament::services::{SwissTournament, TournamentRegistry};
use swiss_tournament::standings::{ScoringRule, StandingsRow};

fn registry_with(settings: TournamentSettings) -> TournamentRegistry {
    let pool = database::create_memory_pool().unwrap();
    TournamentRegistry::new(pool, settings).unwrap()
}

fn setup() -> (TournamentRegistry, SwissTournament) {
    let registry = registry_with(TournamentSettings::default());
    let tournament = registry.default_scope().unwrap();
    (registry, tournament)
}

fn register_all(tournament: &SwissTournament, names: &[&str]) -> Vec<PlayerId> {
    names
        .iter()
        .map(|name| tournament.register_player(name).unwrap().id)
        .collect()
}

fn row_for(standings: &[StandingsRow], id: PlayerId) -> &StandingsRow {
    standings.iter().find(|r| r.player_id == id).unwrap()
}

#[test]
fn test_fresh_players_have_zero_records() {
    let (_registry, tournament) = setup();
    assert_eq!(tournament.count_players().unwrap(), 0);
    assert!(tournament.player_standings().unwrap().is_empty());

    register_all(&tournament, &["Alice", "Bob", "Carol", "Dave"]);

    assert_eq!(tournament.count_players().unwrap(), 4);
    let standings = tournament.player_standings().unwrap();
    assert_eq!(standings.len(), 4);
    assert!(standings.iter().all(|r| r.wins == 0 && r.matches == 0));
}

#[test]
fn test_reported_matches_update_standings() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["Alice", "Bob", "Carol", "Dave"]);
    let (alice, bob, carol, dave) = (ids[0], ids[1], ids[2], ids[3]);

    tournament.report_match(alice, bob, false).unwrap();
    tournament.report_match(carol, dave, false).unwrap();

    let standings = tournament.player_standings().unwrap();
    for winner in [alice, carol] {
        let row = row_for(&standings, winner);
        assert_eq!((row.wins, row.matches), (1, 1));
    }
    for loser in [bob, dave] {
        let row = row_for(&standings, loser);
        assert_eq!((row.wins, row.matches), (0, 1));
    }

    let top: HashSet<_> = standings[..2].iter().map(|r| r.player_id).collect();
    assert_eq!(top, HashSet::from([alice, carol]));
}

#[test]
fn test_single_match_moves_counts_by_one() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["A", "B", "C", "D"]);
    tournament.report_match(ids[2], ids[3], false).unwrap();
    let before = tournament.player_standings().unwrap();

    tournament.report_match(ids[0], ids[1], false).unwrap();
    let after = tournament.player_standings().unwrap();

    let (w0, w1) = (row_for(&before, ids[0]), row_for(&after, ids[0]));
    assert_eq!(w1.wins, w0.wins + 1);
    assert_eq!(w1.matches, w0.matches + 1);

    let (l0, l1) = (row_for(&before, ids[1]), row_for(&after, ids[1]));
    assert_eq!(l1.wins, l0.wins);
    assert_eq!(l1.matches, l0.matches + 1);
}

#[test]
fn test_standings_reads_are_repeatable() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["A", "B", "C", "D", "E", "F"]);
    tournament.report_match(ids[5], ids[0], false).unwrap();
    tournament.report_match(ids[3], ids[4], false).unwrap();

    assert_eq!(
        tournament.player_standings().unwrap(),
        tournament.player_standings().unwrap()
    );
}

#[test]
fn test_pairings_follow_standings_order() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["Alice", "Bob", "Carol", "Dave"]);
    tournament.report_match(ids[0], ids[1], false).unwrap();
    tournament.report_match(ids[2], ids[3], false).unwrap();

    let pairings = tournament.swiss_pairings().unwrap();
    assert_eq!(pairings.len(), 2);
    // ties resolve by id, so the winners meet and the losers meet
    assert_eq!(pairings[0].as_tuple(), (ids[0], "Alice", ids[2], "Carol"));
    assert_eq!(pairings[1].as_tuple(), (ids[1], "Bob", ids[3], "Dave"));

    let standings = tournament.player_standings().unwrap();
    let paired: HashSet<_> = pairings.iter().flat_map(|p| [p.id1, p.id2]).collect();
    let ranked: HashSet<_> = standings.iter().map(|r| r.player_id).collect();
    assert_eq!(paired, ranked);
}

#[test]
fn test_pairings_are_reproducible() {
    let (_registry, tournament) = setup();
    register_all(&tournament, &["A", "B", "C", "D", "E", "F", "G", "H"]);
    assert_eq!(
        tournament.swiss_pairings().unwrap(),
        tournament.swiss_pairings().unwrap()
    );
}

#[test]
fn test_delete_matches_keeps_players() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["Alice", "Bob", "Carol", "Dave"]);
    tournament.report_match(ids[0], ids[1], false).unwrap();
    tournament.report_match(ids[2], ids[3], false).unwrap();

    assert_eq!(tournament.delete_matches().unwrap(), 2);

    assert_eq!(tournament.count_players().unwrap(), 4);
    assert!(tournament.matches().unwrap().is_empty());
    let standings = tournament.player_standings().unwrap();
    assert!(standings.iter().all(|r| r.wins == 0 && r.matches == 0));
}

#[test]
fn test_delete_players_removes_their_matches() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["Alice", "Bob"]);
    tournament.report_match(ids[0], ids[1], false).unwrap();

    assert_eq!(tournament.delete_players().unwrap(), 2);
    assert_eq!(tournament.count_players().unwrap(), 0);
    assert!(tournament.matches().unwrap().is_empty());
}

#[test]
fn test_unknown_player_match_rejected() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["Alice", "Bob"]);

    let result = tournament.report_match(999, ids[0], false);
    assert!(matches!(
        result,
        Err(TournamentError::InvalidMatch { winner: 999, .. })
    ));
    assert!(tournament.matches().unwrap().is_empty());
}

#[test]
fn test_self_match_rejected() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["Alice"]);

    assert!(matches!(
        tournament.report_match(ids[0], ids[0], false),
        Err(TournamentError::InvalidMatch { .. })
    ));
    assert!(tournament.matches().unwrap().is_empty());
}

#[test]
fn test_odd_player_count_rejected() {
    let (_registry, tournament) = setup();
    register_all(&tournament, &["Alice", "Bob", "Carol"]);

    assert!(matches!(
        tournament.swiss_pairings(),
        Err(TournamentError::OddPlayerCount(3))
    ));
}

#[test]
fn test_player_ids_are_never_reused() {
    let (_registry, tournament) = setup();
    let first = register_all(&tournament, &["Alice", "Bob"]);
    tournament.delete_players().unwrap();
    let second = register_all(&tournament, &["Alice", "Bob"]);

    assert!(second.iter().all(|id| !first.contains(id)));
}

#[test]
fn test_duplicate_names_allowed() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["Sam", "Sam"]);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(tournament.count_players().unwrap(), 2);
}

#[test]
fn test_registered_names_are_sanitized() {
    let (_registry, tournament) = setup();
    let player = tournament.register_player("<b>Eve</b>\u{0}").unwrap();
    assert_eq!(player.name, "&lt;b&gt;Eve&lt;/b&gt;");

    assert!(matches!(
        tournament.register_player("   "),
        Err(TournamentError::InvalidInput(_))
    ));
    assert_eq!(tournament.count_players().unwrap(), 1);
}

#[test]
fn test_draw_credits_both_players_under_legacy_rule() {
    let (_registry, tournament) = setup();
    let ids = register_all(&tournament, &["Alice", "Bob", "Carol", "Dave"]);
    tournament.report_match(ids[0], ids[1], true).unwrap();
    tournament.report_match(ids[2], ids[3], false).unwrap();

    let standings = tournament.player_standings().unwrap();
    for id in [ids[0], ids[1]] {
        let row = row_for(&standings, id);
        assert_eq!((row.wins, row.draws, row.matches), (0, 1, 1));
        assert_eq!(row.points, 1.0);
    }

    let ranked: Vec<_> = standings.iter().map(|r| r.player_id).collect();
    assert_eq!(ranked, vec![ids[0], ids[1], ids[2], ids[3]]);
    assert_eq!(tournament.matches().unwrap().len(), 2);
}

#[test]
fn test_draw_is_half_point_under_half_point_rule() {
    let registry = registry_with(TournamentSettings {
        scoring: ScoringRule::HalfPoint,
        ..TournamentSettings::default()
    });
    let tournament = registry.default_scope().unwrap();
    let ids = register_all(&tournament, &["Alice", "Bob", "Carol", "Dave"]);
    tournament.report_match(ids[0], ids[1], true).unwrap();
    tournament.report_match(ids[3], ids[2], false).unwrap();

    let standings = tournament.player_standings().unwrap();
    let ranked: Vec<_> = standings.iter().map(|r| r.player_id).collect();
    assert_eq!(ranked, vec![ids[3], ids[0], ids[1], ids[2]]);
    assert_eq!(row_for(&standings, ids[0]).points, 0.5);
}

#[test]
fn test_tournaments_do_not_interfere() {
    let (registry, default_scope) = setup();
    let spring = registry.create_tournament("Spring Open").unwrap();
    let spring_scope = registry.scope(spring.id).unwrap();

    let default_ids = register_all(&default_scope, &["Alice", "Bob"]);
    let spring_ids = register_all(&spring_scope, &["Carol", "Dave", "Erin", "Frank"]);

    assert_eq!(default_scope.count_players().unwrap(), 2);
    assert_eq!(spring_scope.count_players().unwrap(), 4);

    // a player from another tournament is unknown here
    assert!(matches!(
        spring_scope.report_match(spring_ids[0], default_ids[0], false),
        Err(TournamentError::InvalidMatch { .. })
    ));

    spring_scope.report_match(spring_ids[0], spring_ids[1], false).unwrap();
    assert!(default_scope.matches().unwrap().is_empty());
    assert_eq!(spring_scope.swiss_pairings().unwrap().len(), 2);
    assert_eq!(default_scope.swiss_pairings().unwrap().len(), 1);

    spring_scope.delete_matches().unwrap();
    spring_scope.delete_players().unwrap();
    assert_eq!(default_scope.count_players().unwrap(), 2);
}

#[test]
fn test_delete_tournaments_cascades_and_reseeds_default() {
    let (registry, default_scope) = setup();
    let cup = registry.create_tournament("Cup").unwrap();
    let cup_scope = registry.scope(cup.id).unwrap();
    register_all(&default_scope, &["Alice", "Bob"]);
    let cup_ids = register_all(&cup_scope, &["Carol", "Dave"]);
    cup_scope.report_match(cup_ids[0], cup_ids[1], false).unwrap();

    assert_eq!(registry.delete_tournaments().unwrap(), 2);

    let remaining = registry.list_tournaments().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, database::DEFAULT_TOURNAMENT_ID);
    assert_eq!(default_scope.count_players().unwrap(), 0);
    assert!(matches!(
        registry.scope(cup.id),
        Err(TournamentError::UnknownTournament(_))
    ));
}

#[test]
fn test_unknown_tournament_cannot_be_opened() {
    let (registry, _tournament) = setup();
    assert!(matches!(
        registry.scope(42),
        Err(TournamentError::UnknownTournament(42))
    ));
    assert!(registry.find_tournament(42).unwrap().is_none());
}

#[test]
fn test_reset_clears_everything() {
    let (registry, tournament) = setup();
    register_all(&tournament, &["Alice", "Bob"]);

    registry.reset().unwrap();

    assert_eq!(tournament.count_players().unwrap(), 0);
    assert_eq!(registry.list_tournaments().unwrap().len(), 1);
}

#[test]
fn test_file_database_shared_across_threads() {
    let path = std::env::temp_dir().join(format!(
        "swiss_tournament_threads_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let pool = database::create_pool(path.to_str().unwrap()).unwrap();
    let registry = TournamentRegistry::new(pool, TournamentSettings::default()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let scope = registry.default_scope().unwrap();
            std::thread::spawn(move || {
                (0..5)
                    .map(|i| scope.register_player(&format!("T{t} P{i}")).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: Vec<PlayerId> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    let unique: HashSet<_> = ids.iter().copied().collect();

    assert_eq!(ids.len(), 20);
    assert_eq!(unique.len(), 20);
    assert_eq!(registry.default_scope().unwrap().count_players().unwrap(), 20);

    drop(registry);
    let _ = std::fs::remove_file(&path);
}
