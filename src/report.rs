use serde_json::{json, Value};

use crate::game_engine::{models::GuessRecord, round::RoundState};

/// One accepted guess as a JSON object.
fn guess_entry(n: usize, record: &GuessRecord) -> Value {
    json!({
        "n": n,
        "guess": record.guess.to_string(),
        "exact": record.feedback.exact,
        "present": record.feedback.present,
        "hint": record.feedback.hint(),
    })
}

/// Build a JSON summary of a round: parameters, secret, status and every
/// accepted guess with its feedback.
///
/// The secret is included, so only report rounds that are over or that the
/// player cannot see.
pub fn round_report(round: &RoundState) -> Value {
    let guesses: Vec<Value> = round
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| guess_entry(i + 1, record))
        .collect();

    json!({
        "config": round.config(),
        "secret": round.secret().to_string(),
        "status": round.status(),
        "guesses_used": round.guesses_used(),
        "guess_limit": round.guess_limit(),
        "guesses": guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::models::{GameConfig, Secret};

    #[test]
    fn report_lists_guesses_in_order() {
        let secret = Secret::new(vec![2, 2, 4, 4]);
        let mut round = RoundState::new(GameConfig::default(), secret).unwrap();
        round.submit("1111").unwrap();
        round.submit("2222").unwrap();
        round.submit("2244").unwrap();

        let report = round_report(&round);
        assert_eq!(report["secret"], "2244");
        assert_eq!(report["status"], "Won");
        assert_eq!(report["guesses_used"], 3);
        assert_eq!(report["config"]["scoring"], "Literal");
        let guesses = report["guesses"].as_array().unwrap();
        assert_eq!(guesses.len(), 3);
        assert_eq!(guesses[1]["guess"], "2222");
        assert_eq!(guesses[1]["hint"], "++--");
        assert_eq!(guesses[2]["exact"], 4);
    }
}
