use crate::game::types::{Choice, Outcome};

/// Cyclic dominance: rock breaks scissors, scissors cut paper, paper covers rock.
pub fn determine_winner(first: Choice, second: Choice) -> Outcome {
    if first == second {
        Outcome::Draw
    } else if first.beats() == second {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Choice::{Paper, Rock, Scissors};

    #[test]
    fn test_equal_choices_draw() {
        for choice in Choice::ALL {
            assert_eq!(determine_winner(choice, choice), Outcome::Draw);
        }
    }

    #[test]
    fn test_first_player_wins() {
        for (a, b) in [(Rock, Scissors), (Scissors, Paper), (Paper, Rock)] {
            assert_eq!(determine_winner(a, b), Outcome::Win, "{a} vs {b}");
        }
    }

    #[test]
    fn test_first_player_loses() {
        for (a, b) in [(Scissors, Rock), (Paper, Scissors), (Rock, Paper)] {
            assert_eq!(determine_winner(a, b), Outcome::Lose, "{a} vs {b}");
        }
    }
}
