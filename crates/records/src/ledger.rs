use super::*;
use std::collections::VecDeque;

/// Sole owner and writer of a session's tally and history.
///
/// History is most-recent-first and unbounded. The tally and the history are
/// tracked independently: resetting the score keeps every record, and a
/// record with an undetermined outcome enters history without being counted.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Ledger {
    tally: Tally,
    history: VecDeque<Record>,
}

impl Ledger {
    /// Appends a completed round to the front of history and counts it.
    pub fn record(&mut self, record: Record) {
        log::debug!("[ledger] recording {}", record);
        self.tally.add(record.outcome());
        self.history.push_front(record);
    }
    /// Zeroes the score. History is untouched.
    pub fn reset_tally(&mut self) {
        log::debug!("[ledger] resetting tally {}", self.tally);
        self.tally.reset();
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    /// Records, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &Record> {
        self.history.iter()
    }
    /// Record at `index` in most-recent-first order.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.history.get(index)
    }
    pub fn latest(&self) -> Option<&Record> {
        self.history.front()
    }
    pub fn len(&self) -> usize {
        self.history.len()
    }
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_gameplay::*;

    const R: Gesture = Gesture::Rock;
    const P: Gesture = Gesture::Paper;
    const S: Gesture = Gesture::Scissors;

    fn played(ledger: &mut Ledger, rounds: &[(Gesture, Gesture)]) {
        for (i, (p, c)) in rounds.iter().enumerate() {
            ledger.record(Record::new(i as u64 + 1, Some(*p), Some(*c)));
        }
    }

    #[test]
    fn empty_ledger() {
        let ledger = Ledger::default();
        assert!(ledger.is_empty());
        assert!(ledger.latest().is_none());
        assert_eq!(*ledger.tally(), Tally::default());
    }
    #[test]
    fn win_lose_tie_win() {
        let mut ledger = Ledger::default();
        played(&mut ledger, &[(R, S), (R, P), (P, P), (S, P)]);
        assert_eq!(*ledger.tally(), Tally::new(2, 1, 1));
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.get(0).map(Record::round), Some(4));
        assert_eq!(ledger.latest().map(Record::outcome), Some(Some(Outcome::Win)));
        assert_eq!(ledger.get(3).map(Record::round), Some(1));
    }
    #[test]
    fn history_is_most_recent_first() {
        let mut ledger = Ledger::default();
        played(&mut ledger, &[(R, R), (P, P), (S, S)]);
        let rounds = ledger.history().map(Record::round).collect::<Vec<_>>();
        assert_eq!(rounds, vec![3, 2, 1]);
    }
    #[test]
    fn reset_tally_keeps_history() {
        let mut ledger = Ledger::default();
        played(&mut ledger, &[(R, S), (P, S)]);
        ledger.reset_tally();
        assert_eq!(*ledger.tally(), Tally::default());
        assert_eq!(ledger.len(), 2);
    }
    #[test]
    fn undetermined_enters_history_uncounted() {
        let mut ledger = Ledger::default();
        ledger.record(Record::new(1, None, Some(R)));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.tally().total(), 0);
        let determined = ledger.history().filter(|r| r.is_determined()).count();
        assert_eq!(determined as u32, ledger.tally().total());
    }
    #[test]
    fn tally_matches_determined_records() {
        let mut ledger = Ledger::default();
        played(&mut ledger, &[(R, S), (S, R), (P, P)]);
        ledger.record(Record::new(4, None, Some(P)));
        let determined = ledger.history().filter(|r| r.is_determined()).count();
        assert_eq!(determined as u32, ledger.tally().total());
        assert_eq!(ledger.len(), 4);
    }
    #[test]
    fn serializes_tally_and_history() {
        let mut ledger = Ledger::default();
        played(&mut ledger, &[(R, S)]);
        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(json["tally"]["wins"], 1);
        assert_eq!(json["history"].as_array().map(Vec::len), Some(1));
    }
}
