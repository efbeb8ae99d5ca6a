//! Crate-level tests for `math_challenge`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Bounds | 10,000 draws per (type, tier) stay inside the documented operand ranges |
//! | Exactness | Division has no remainder; percentages equal `round(p/100*n, 2)` |
//! | Determinism | Same seed -> identical problem sequence |
//! | Selection | Multi-type sessions draw every selected type and nothing else |
//! | Scenarios | End-to-end bitter-end, speed-challenge and fixed-source runs |
//! | View | JSON projection of a live session |

use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};

use crate::challenge_engine::{
    helpers::{format_answer, round2, FixedSource},
    session::{CHALLENGE_COMPLETE, GAME_OVER},
    view,
};
use crate::{
    create_session, generate, generate_from, AnswerOutcome, ChallengeType, Difficulty, Mode,
    Phase, Problem, Session, SessionConfig,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const DRAWS: usize = 10_000;

fn in_range(v: u32, lo: u32, hi: u32) -> bool {
    (lo..=hi).contains(&v)
}

/// Check operands against the range table for the problem's own type and tier.
fn assert_within_bounds(p: &Problem) {
    let ops = p.operands();
    let ok = match (p.challenge_type, p.difficulty) {
        (ChallengeType::Add, d) => {
            let (lo, hi) = match d {
                Difficulty::Easy => (1, 10),
                Difficulty::Intermediate => (10, 100),
                Difficulty::Advanced => (100, 1000),
            };
            ops.len() == 2 && in_range(ops[0], lo, hi) && in_range(ops[1], lo, hi)
        }
        (ChallengeType::Subtract, Difficulty::Easy) => {
            in_range(ops[0], 5, 20) && in_range(ops[1], 1, ops[0] - 1)
        }
        (ChallengeType::Subtract, Difficulty::Intermediate) => {
            in_range(ops[0], 50, 100) && in_range(ops[1], 10, ops[0] - 10)
        }
        (ChallengeType::Subtract, Difficulty::Advanced) => {
            in_range(ops[0], 100, 1000) && in_range(ops[1], 50, ops[0] - 50)
        }
        (ChallengeType::Multiply, d) => {
            let (lo, hi) = match d {
                Difficulty::Easy => (1, 10),
                Difficulty::Intermediate => (2, 20),
                Difficulty::Advanced => (10, 50),
            };
            in_range(ops[0], lo, hi) && in_range(ops[1], lo, hi)
        }
        (ChallengeType::Divide, d) => {
            let ((b_lo, b_hi), (k_lo, k_hi)) = match d {
                Difficulty::Easy => ((1, 10), (1, 10)),
                Difficulty::Intermediate => ((2, 20), (5, 20)),
                Difficulty::Advanced => ((5, 50), (10, 50)),
            };
            in_range(ops[0], b_lo, b_hi) && in_range(ops[1], k_lo, k_hi)
        }
        (ChallengeType::Simplify, Difficulty::Easy) => ops.iter().all(|&v| in_range(v, 1, 10)),
        (ChallengeType::Simplify, Difficulty::Intermediate) => {
            in_range(ops[0], 1, 20) && in_range(ops[1], 1, 20) && in_range(ops[2], 1, 10)
        }
        (ChallengeType::Simplify, Difficulty::Advanced) => {
            in_range(ops[0], 10, 50) && in_range(ops[1], 2, 10) && in_range(ops[2], 2, 10)
        }
        (ChallengeType::Percentage, Difficulty::Easy) => {
            [10, 20, 25, 50, 75].contains(&ops[0]) && ops[1] % 10 == 0 && in_range(ops[1], 10, 100)
        }
        (ChallengeType::Percentage, Difficulty::Intermediate) => {
            in_range(ops[0], 1, 99) && in_range(ops[1], 10, 200)
        }
        (ChallengeType::Percentage, Difficulty::Advanced) => {
            in_range(ops[0], 1, 150) && in_range(ops[1], 100, 1000)
        }
    };
    assert!(ok, "operands {ops:?} out of bounds for {:?} {:?} ({})", p.challenge_type, p.difficulty, p.display_text);
}

// ── generator properties ─────────────────────────────────────────────────────

#[test]
fn every_type_and_tier_stays_within_bounds() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for t in ChallengeType::ALL {
        for d in Difficulty::ALL {
            for _ in 0..DRAWS {
                let p = generate(t, d, &mut rng);
                assert_eq!(p.challenge_type, t);
                assert_eq!(p.difficulty, d);
                assert_within_bounds(&p);
            }
        }
    }
}

#[test]
fn division_is_always_exact() {
    let mut rng = StdRng::seed_from_u64(17);
    for d in Difficulty::ALL {
        for _ in 0..DRAWS {
            let p = generate(ChallengeType::Divide, d, &mut rng);
            let (divisor, quotient) = (p.operands()[0], p.operands()[1]);
            let dividend = divisor * quotient;
            assert_eq!(dividend % divisor, 0);
            assert_eq!(p.correct_answer.fract(), 0.0);
            assert_eq!(p.correct_answer, f64::from(dividend / divisor));
            assert_eq!(p.display_text, format!("{dividend} ÷ {divisor}"));
        }
    }
}

#[test]
fn percentage_answers_are_rounded_products() {
    let mut rng = StdRng::seed_from_u64(99);
    for d in Difficulty::ALL {
        for _ in 0..DRAWS {
            let p = generate(ChallengeType::Percentage, d, &mut rng);
            let (percent, number) = (p.operands()[0], p.operands()[1]);
            assert_eq!(p.correct_answer, round2(f64::from(percent) / 100.0 * f64::from(number)));
        }
    }
}

#[test]
fn non_percentage_answers_are_whole_numbers() {
    let mut rng = StdRng::seed_from_u64(5);
    for t in ChallengeType::ALL.into_iter().filter(|t| *t != ChallengeType::Percentage) {
        for d in Difficulty::ALL {
            for _ in 0..500 {
                let p = generate(t, d, &mut rng);
                assert_eq!(p.correct_answer.fract(), 0.0, "{t:?} {d:?} gave {}", p.correct_answer);
                assert!(p.correct_answer >= 0.0);
            }
        }
    }
}

#[test]
fn percentage_spec_scenario_with_fixed_source() {
    // friendly percent slot 3 (50%), k = 4 -> 40
    let mut src = FixedSource::new(&[0.7, 0.35]);
    let p = generate(ChallengeType::Percentage, Difficulty::Easy, &mut src);
    assert_eq!(p.operands(), &[50, 40]);
    assert_eq!(p.correct_answer, 20.0);
}

#[test]
fn same_seed_produces_identical_problems() {
    let draw = |seed: u64| -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .map(|_| generate_from(&ChallengeType::ALL, Difficulty::Intermediate, &mut rng).display_text)
            .collect()
    };
    assert_eq!(draw(12345), draw(12345));
    assert_ne!(draw(12345), draw(54321));
}

#[test]
fn selection_draws_every_selected_type_only() {
    let selected = [ChallengeType::Add, ChallengeType::Percentage, ChallengeType::Simplify];
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = HashSet::new();
    for _ in 0..1_000 {
        seen.insert(generate_from(&selected, Difficulty::Easy, &mut rng).challenge_type);
    }
    assert_eq!(seen, selected.into_iter().collect::<HashSet<_>>());
}

// ── session scenarios ────────────────────────────────────────────────────────

#[test]
fn bitter_end_wrong_first_answer() {
    let mut s = create_session(Mode::BitterEnd, &[ChallengeType::Add], Difficulty::Easy).unwrap();
    s.start();
    let p = s.current_problem().unwrap().clone();
    assert_eq!(p.challenge_type, ChallengeType::Add);
    assert!(p.operands().iter().all(|&v| (1..=10).contains(&v)));

    assert!(matches!(s.submit_answer("999"), AnswerOutcome::Incorrect { .. }));
    assert_eq!(s.phase(), Phase::Ended);
    assert_eq!(s.incorrect_count(), 1);
    assert_eq!(s.score(), 0);
    assert_eq!(s.end_message(), Some(GAME_OVER));
}

#[test]
fn speed_challenge_twenty_correct_answers() {
    let mut s = create_session(Mode::SpeedChallenge, &[ChallengeType::Multiply], Difficulty::Advanced).unwrap();
    s.start();
    for _ in 0..20 {
        let expected = s.current_problem().unwrap().correct_answer;
        assert_eq!(s.submit_answer(&format_answer(expected)), AnswerOutcome::Correct);
    }
    assert_eq!(s.phase(), Phase::Ended);
    assert_eq!(s.score(), 20);
    assert_eq!(s.question_index(), 20);
    assert_eq!(s.end_message(), Some(CHALLENGE_COMPLETE));
    assert_eq!(s.submit_answer("1"), AnswerOutcome::Ignored);
}

#[test]
fn score_never_exceeds_questions_served() {
    for seed in [1u64, 42, 999, 0xDEAD_BEEF, 7] {
        let mut s = Session::from_config(
            SessionConfig::new(Mode::OneMinute, ChallengeType::ALL)
                .with_difficulty(Difficulty::Advanced)
                .with_seed(seed),
        )
        .unwrap();
        s.start();
        let mut step = 0u32;
        while s.phase() == Phase::Running {
            match step % 4 {
                0 => { s.submit_answer("oops"); }
                1 => s.tick(),
                _ => {
                    let expected = s.current_problem().unwrap().correct_answer;
                    s.submit_answer(&format_answer(expected));
                }
            }
            step += 1;
            assert!(s.score() + s.incorrect_count() <= s.question_index());
            assert_eq!(s.current_problem().is_some(), s.phase() == Phase::Running);
        }
        // one tick every four steps; the 60th tick lands on step 237
        assert_eq!(step, 238);
        assert_eq!(s.end_message(), Some("Time's up!"));
        assert_eq!(s.score() + s.incorrect_count(), 237 - 59);
    }
}

#[test]
fn seeded_sessions_replay_the_same_problems() {
    let run = || {
        let mut s = Session::from_config(
            SessionConfig::new(Mode::SpeedChallenge, [ChallengeType::Divide, ChallengeType::Subtract])
                .with_seed(2024),
        )
        .unwrap();
        s.start();
        let mut texts = Vec::new();
        while s.phase() == Phase::Running {
            texts.push(s.current_problem_text().unwrap().to_string());
            s.submit_answer("0");
        }
        texts
    };
    let first = run();
    assert_eq!(first.len(), 20);
    assert_eq!(first, run());
}

#[test]
fn injected_source_drives_the_session() {
    let config = SessionConfig::new(Mode::BitterEnd, [ChallengeType::Percentage]);
    // type pick, then percent slot and k for each question
    let src = FixedSource::new(&[0.0, 0.7, 0.35]);
    let mut s = Session::with_source(config, src).unwrap();
    s.start();
    assert_eq!(s.current_problem_text(), Some("50% of 40"));
    assert_eq!(s.submit_answer("20"), AnswerOutcome::Correct);
    assert_eq!(s.current_problem_text(), Some("50% of 40"));
    assert_eq!(s.submit_answer("20.01"), AnswerOutcome::Incorrect { expected: 20.0 });
    assert_eq!(s.phase(), Phase::Ended);
}

// ── view ─────────────────────────────────────────────────────────────────────

#[test]
fn view_json_tracks_a_live_session() {
    let mut s = Session::from_config(SessionConfig::new(Mode::OneMinute, [ChallengeType::Add]).with_seed(8)).unwrap();
    assert_eq!(view::to_view_json(&s.snapshot())["display"], "");

    s.start();
    let v = view::to_view_json(&s.snapshot());
    assert_eq!(v["clock"], "1:00");
    assert_eq!(v["display"], s.current_problem_text().unwrap());

    for _ in 0..60 {
        s.tick();
    }
    let v = view::to_view_json(&s.snapshot());
    assert_eq!(v["display"], "Time's up!");

    let summary = view::summary_json(&s.summary().unwrap());
    assert_eq!(summary["time"], "1:00");
    assert_eq!(summary["accuracy"], "0%");
    assert_eq!(summary["title"], "Time's up!");
}

#[test]
fn snapshot_serializes_with_wire_names() {
    let mut s = Session::from_config(SessionConfig::new(Mode::SpeedChallenge, [ChallengeType::Add]).with_seed(1)).unwrap();
    s.start();
    let json = serde_json::to_value(s.snapshot()).unwrap();
    assert_eq!(json["mode"], "speed-challenge");
    assert_eq!(json["phase"], "running");
    assert_eq!(json["difficulty"], "easy");
}

#[test]
fn enums_parse_from_wire_names() {
    assert_eq!("bitter-end".parse::<Mode>().unwrap(), Mode::BitterEnd);
    assert_eq!("percentage".parse::<ChallengeType>().unwrap(), ChallengeType::Percentage);
    assert_eq!("intermediate".parse::<Difficulty>().unwrap(), Difficulty::Intermediate);
    assert!("hard".parse::<Difficulty>().is_err());
    assert!("sudden-death".parse::<Mode>().is_err());
}
