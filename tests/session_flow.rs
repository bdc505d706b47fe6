use carrom_meta::consts::{COIN_COUNT, NO_BEST_SCORE};
use carrom_meta::persistence::{BEST_SCORE_KEY, KeyValueStore, LEADERBOARD_KEY, MemoryStore, Records};
use carrom_meta::platform::{PointerInput, command_for_key};
use carrom_meta::sim::{Board, Command, GameEvent, GamePhase, RenderFrame, Session, apply, tick};
use glam::Vec2;

/// Tick until the shot settles, collecting events
fn settle(session: &mut Session) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..5_000 {
        events.extend(tick(session));
        if session.phase() != GamePhase::Shooting {
            return events;
        }
    }
    panic!("shot never settled");
}

/// Fire a gentle shot sideways, then drop the next coin into a pocket so
/// every shot pockets exactly one coin.
fn shot_that_pockets_one(session: &mut Session) -> Vec<GameEvent> {
    let taken = apply(session, Command::Shoot { aim: Vec2::new(15.0, 0.0) });
    assert!(matches!(taken, Some(GameEvent::ShotTaken { .. })));

    let pocket = session.board.pockets[0].center;
    let coin = session
        .coins
        .iter_mut()
        .find(|c| c.active)
        .expect("a coin left to pocket");
    coin.pos = pocket + Vec2::new(4.0, 4.0);
    coin.vel = Vec2::ZERO;

    settle(session)
}

fn play_to_the_end(session: &mut Session, store: &mut MemoryStore, records: &mut Records) -> u32 {
    let mut ended = None;
    while session.phase() != GamePhase::GameOver {
        for event in shot_that_pockets_one(session) {
            if let GameEvent::SessionEnded { final_score } = event {
                ended = Some(final_score);
            }
            records.handle_event(&event, store, "2026-10-19T09:30:00.000Z");
        }
    }
    ended.expect("session end announced")
}

#[test]
fn test_full_session_records_best() {
    let mut store = MemoryStore::new();
    let mut records = Records::load(&store);
    let mut session = Session::new(Board::default(), records.best_score);
    assert_eq!(session.coins_remaining(), COIN_COUNT);

    let final_score = play_to_the_end(&mut session, &mut store, &mut records);

    assert_eq!(final_score, COIN_COUNT as u32);
    assert!(session.game_over);
    assert!(!session.running);
    assert_eq!(session.best_score, 13);
    assert_eq!(store.get_item(BEST_SCORE_KEY).as_deref(), Some("13"));
    let history = store.get_item(LEADERBOARD_KEY).unwrap();
    assert!(history.contains(r#""score":13"#));
}

#[test]
fn test_worse_game_keeps_previous_best() {
    let mut store = MemoryStore::new();
    store.set_item(BEST_SCORE_KEY, "9").unwrap();
    let mut records = Records::load(&store);
    let mut session = Session::new(Board::default(), records.best_score);

    // Waste two shots before clearing the board
    for _ in 0..2 {
        apply(&mut session, Command::Shoot { aim: Vec2::new(-15.0, 0.0) });
        settle(&mut session);
    }
    let final_score = play_to_the_end(&mut session, &mut store, &mut records);

    assert_eq!(final_score, 15);
    assert_eq!(session.best_score, 9);
    assert_eq!(Records::load(&store).best(), Some(9));
    assert_eq!(Records::load(&store).history.top_score(), Some(15));
}

#[test]
fn test_restart_after_game_over_via_key() {
    let mut store = MemoryStore::new();
    let mut records = Records::default();
    let mut session = Session::new(Board::default(), NO_BEST_SCORE);
    play_to_the_end(&mut session, &mut store, &mut records);
    assert_eq!(session.phase(), GamePhase::GameOver);

    let restart = command_for_key("R").unwrap();
    apply(&mut session, restart);

    assert_eq!(session.shots, 0);
    assert!(!session.game_over);
    assert!(session.running);
    assert_eq!(session.coins_remaining(), COIN_COUNT);
    assert_eq!(session.phase(), GamePhase::Aiming);
    assert_eq!(session.best(), Some(13));
}

#[test]
fn test_pause_key_freezes_mid_shot() {
    let mut session = Session::new(Board::default(), NO_BEST_SCORE);
    apply(&mut session, Command::Shoot { aim: Vec2::new(40.0, 120.0) });
    for _ in 0..3 {
        tick(&mut session);
    }

    apply(&mut session, command_for_key("p").unwrap());
    let frozen = RenderFrame::capture(&session, false);
    let striker_vel = session.striker.vel;
    for _ in 0..60 {
        tick(&mut session);
        assert_eq!(RenderFrame::capture(&session, false), frozen);
    }
    assert_eq!(session.striker.vel, striker_vel);

    // Shots are ignored while paused
    assert_eq!(apply(&mut session, Command::Shoot { aim: Vec2::new(0.0, 50.0) }), None);
    assert_eq!(session.shots, 1);

    apply(&mut session, command_for_key("P").unwrap());
    assert_eq!(session.phase(), GamePhase::Shooting);
}

#[test]
fn test_pointer_drives_a_shot() {
    let mut session = Session::new(Board::default(), NO_BEST_SCORE);
    let mut pointer = PointerInput::new();
    let home = session.board.striker_home;

    // Slide to the right, then pull back below the striker
    apply(&mut session, pointer.on_move(Vec2::new(560.0, 300.0)));
    tick(&mut session);
    assert_eq!(session.striker.pos, Vec2::new(560.0, home.y));

    pointer.on_down();
    apply(&mut session, pointer.on_move(Vec2::new(560.0, home.y + 80.0)));
    let frame = RenderFrame::capture(&session, pointer.down);
    assert!(frame.aim_guide.is_some());

    let event = apply(&mut session, pointer.on_up());
    assert_eq!(event, Some(GameEvent::ShotTaken { shots: 1 }));
    assert!(session.striker.vel.y < 0.0);
    assert_eq!(session.striker.vel.x, 0.0);

    // A second release mid-flight does nothing
    assert_eq!(apply(&mut session, pointer.on_up()), None);

    let events = settle(&mut session);
    assert!(events.contains(&GameEvent::ShotSettled));
    assert_eq!(session.striker.pos.y, home.y);
}

#[test]
fn test_sessions_are_independent() {
    let mut a = Session::new(Board::default(), NO_BEST_SCORE);
    let b = Session::new(Board::default(), NO_BEST_SCORE);
    apply(&mut a, Command::Shoot { aim: Vec2::new(0.0, 100.0) });
    tick(&mut a);
    assert_eq!(a.shots, 1);
    assert_eq!(b.shots, 0);
    assert_eq!(b.striker.pos, b.board.striker_home);
}
