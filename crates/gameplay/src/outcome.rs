use super::*;

/// Result of a round from the player's point of view.
///
/// Undetermined rounds (either gesture absent) are `Option<Outcome>::None`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Winner rule over the determined 3×3 space.
    pub fn between(player: Gesture, computer: Gesture) -> Self {
        if player == computer {
            Self::Tie
        } else if player.beats(&computer) {
            Self::Win
        } else {
            Self::Lose
        }
    }
    /// The same round seen from the other side of the table.
    pub fn mirror(&self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Tie => Self::Tie,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Tie => "tie",
        }
    }
    /// Headline shown when a round settles.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Win => "You Win! 🎉",
            Self::Lose => "Computer Wins! 🤖",
            Self::Tie => "It's a Tie! 🤝",
        }
    }
    /// Line shown under the headline.
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Win => "Great job!",
            Self::Lose => "Better luck next time!",
            Self::Tie => "Good game!",
        }
    }
}

/// Winner rule over possibly-absent gestures.
///
/// Total over the 4×4 input space: any absent side yields `None`, and an
/// undetermined round is never coerced into a tie.
pub fn resolve(player: Option<Gesture>, computer: Option<Gesture>) -> Option<Outcome> {
    match (player, computer) {
        (Some(p), Some(c)) => Some(Outcome::between(p, c)),
        _ => None,
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Gesture = Gesture::Rock;
    const P: Gesture = Gesture::Paper;
    const S: Gesture = Gesture::Scissors;

    #[test]
    fn winning_pairs() {
        assert_eq!(Outcome::between(R, S), Outcome::Win);
        assert_eq!(Outcome::between(P, R), Outcome::Win);
        assert_eq!(Outcome::between(S, P), Outcome::Win);
        assert_eq!(Outcome::between(S, R), Outcome::Lose);
        assert_eq!(Outcome::between(R, P), Outcome::Lose);
        assert_eq!(Outcome::between(P, S), Outcome::Lose);
    }
    #[test]
    fn tie_iff_equal() {
        for a in Gesture::all() {
            for b in Gesture::all() {
                let tied = Outcome::between(a, b) == Outcome::Tie;
                assert_eq!(tied, a == b, "{} vs {}", a, b);
            }
        }
    }
    #[test]
    fn swapping_sides_mirrors_outcome() {
        for a in Gesture::all() {
            for b in Gesture::all() {
                assert_eq!(Outcome::between(a, b), Outcome::between(b, a).mirror());
            }
        }
    }
    #[test]
    fn absent_is_undetermined() {
        let sides = [None, Some(R), Some(P), Some(S)];
        for x in sides {
            assert_eq!(resolve(None, x), None);
            assert_eq!(resolve(x, None), None);
        }
    }
    #[test]
    fn resolve_agrees_with_between() {
        for a in Gesture::all() {
            for b in Gesture::all() {
                assert_eq!(resolve(Some(a), Some(b)), Some(Outcome::between(a, b)));
            }
        }
    }
    #[test]
    fn mirror_is_involution() {
        for o in [Outcome::Win, Outcome::Lose, Outcome::Tie] {
            assert_eq!(o.mirror().mirror(), o);
        }
    }
    #[test]
    fn every_outcome_has_a_tagline() {
        assert_eq!(Outcome::Win.tagline(), "Great job!");
        assert_eq!(Outcome::Lose.tagline(), "Better luck next time!");
        assert_eq!(Outcome::Tie.tagline(), "Good game!");
    }
}
