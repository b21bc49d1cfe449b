//! Hit sampling over a resolved outcome

use battle_core::{CombatOutcome, HitRoll};
use rand::Rng;
use serde::Serialize;

/// Tally of many sampled hits
#[derive(Debug, Clone, Default, Serialize)]
pub struct HitSimulation {
    pub rounds: u32,
    pub dodge_count: u32,
    pub crit_count: u32,
    pub total_damage: u64,
    pub min_hit: Option<u32>,
    pub max_hit: Option<u32>,
}

impl HitSimulation {
    /// Roll `rounds` hits of the same outcome
    pub fn run(outcome: &CombatOutcome, rounds: u32, rng: &mut impl Rng) -> Self {
        let mut result = HitSimulation {
            rounds,
            ..Default::default()
        };

        for _ in 0..rounds {
            let roll = outcome.roll(rng);
            match roll {
                HitRoll::Dodged => {
                    result.dodge_count += 1;
                    continue;
                }
                HitRoll::Critical(_) => result.crit_count += 1,
                HitRoll::Normal(_) => {}
            }

            let damage = roll.damage();
            result.total_damage += u64::from(damage);
            result.min_hit = Some(result.min_hit.map_or(damage, |m| m.min(damage)));
            result.max_hit = Some(result.max_hit.map_or(damage, |m| m.max(damage)));
        }

        result
    }

    pub fn hit_count(&self) -> u32 {
        self.rounds - self.dodge_count
    }

    /// Observed dodge frequency in percent
    pub fn dodge_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.dodge_count as f64 / self.rounds as f64 * 100.0
    }

    /// Observed critical frequency among landed hits, in percent
    pub fn crit_rate(&self) -> f64 {
        let hits = self.hit_count();
        if hits == 0 {
            return 0.0;
        }
        self.crit_count as f64 / hits as f64 * 100.0
    }

    /// Mean damage per attack, dodges included
    pub fn avg_damage(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.total_damage as f64 / self.rounds as f64
    }

    pub fn summary(&self) -> String {
        let spread = match (self.min_hit, self.max_hit) {
            (Some(min), Some(max)) => format!("hits {min}-{max}"),
            _ => "no hits landed".to_string(),
        };
        format!(
            "{} rounds: dodged {:.2}%, crit {:.2}%, avg {:.1} per attack, {}",
            self.rounds,
            self.dodge_rate(),
            self.crit_rate(),
            self.avg_damage(),
            spread
        )
    }
}
