use crate::club::Team;
use crate::common::{SquadError, SquadResult};
use serde::{Deserialize, Serialize};

const BASE_SEASON_BUDGET: i64 = 10_000_000;
const BASE_TICKET_PRICE: i64 = 30;
const WEEKS_PER_SEASON: i64 = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CupProgress {
    None,
    Quarter,
    Semi,
    Final,
    Winner,
}

impl CupProgress {
    pub fn bonus(&self) -> i64 {
        match self {
            CupProgress::Winner => 5_000_000,
            CupProgress::Final => 3_000_000,
            CupProgress::Semi => 1_500_000,
            CupProgress::Quarter => 500_000,
            CupProgress::None => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonBudget {
    pub budget: i64,
    /// Weekly.
    pub wage_budget: i64,
}

/// Read-only money queries over a team.
pub struct FinancialManager<'t> {
    team: &'t Team,
}

impl<'t> FinancialManager<'t> {
    pub fn new(team: &'t Team) -> Self {
        FinancialManager { team }
    }

    pub fn can_afford_transfer(&self, fee: i64, wages: i64) -> bool {
        self.check_transfer(fee, wages).is_ok()
    }

    pub fn check_transfer(&self, fee: i64, wages: i64) -> SquadResult<()> {
        if fee > self.team.budget {
            return Err(SquadError::BudgetExceeded {
                fee,
                budget: self.team.budget,
            });
        }

        let remaining = self.wage_budget_remaining();
        if wages > remaining {
            return Err(SquadError::WageBudgetExceeded { wages, remaining });
        }

        Ok(())
    }

    pub fn total_wages(&self) -> i64 {
        self.team.players.get_week_salary()
    }

    pub fn wage_budget_remaining(&self) -> i64 {
        self.team.wage_budget - self.total_wages()
    }

    /// Gate receipts plus ancillary income for a home fixture. Away games earn nothing.
    pub fn match_revenue(&self, attendance: u32, is_home: bool) -> i64 {
        if !is_home {
            return 0;
        }

        let capacity = self.team.stadium.capacity;
        let utilization = if capacity > 0 {
            attendance as f64 / capacity as f64
        } else {
            0.0
        };

        let mut ticket_price = BASE_TICKET_PRICE;
        if utilization > 0.9 {
            ticket_price = (ticket_price as f64 * 1.2) as i64;
        }

        let revenue = ticket_price * attendance as i64;

        (revenue as f64 * 1.3) as i64
    }

    pub fn season_budget(league_position: u8, cup_progress: CupProgress) -> SeasonBudget {
        let mut budget = BASE_SEASON_BUDGET;

        match league_position {
            1..=3 => budget *= 3,
            4..=6 => budget *= 2,
            7..=10 => budget = (budget as f64 * 1.5) as i64,
            _ => {}
        }

        budget += cup_progress.bonus();

        SeasonBudget {
            budget,
            wage_budget: budget / WEEKS_PER_SEASON,
        }
    }
}
