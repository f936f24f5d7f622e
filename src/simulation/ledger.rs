//! Money and statistics for one workday
//!
//! The ledger tracks the shop's balance together with how the day went,
//! so the engine can report a summary once the queue is empty.

/// Running balance and day statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// Current balance, may go negative
    pub money: i64,

    /// Clients taken from the queue
    pub clients_served: usize,

    /// Clients whose cars left fully repaired
    pub clients_repaired: usize,

    /// Clients the operator turned away
    pub clients_refused: usize,

    /// Parts moved from storage into cars
    pub parts_installed: usize,

    /// Money earned from repairs
    pub total_income: i64,

    /// Money lost to refusal penalties
    pub total_penalties: i64,
}

impl Ledger {
    pub fn new(starting_money: i64) -> Self {
        Self {
            money: starting_money,
            clients_served: 0,
            clients_repaired: 0,
            clients_refused: 0,
            parts_installed: 0,
            total_income: 0,
            total_penalties: 0,
        }
    }

    /// Add money from a repair
    ///
    /// Balances saturate instead of wrapping.
    pub fn earn(&mut self, amount: i64) {
        self.money = self.money.saturating_add(amount);
        self.total_income = self.total_income.saturating_add(amount);
    }

    /// Debit a refusal penalty and count the refused client
    pub fn charge_penalty(&mut self, penalty: i64) {
        self.money = self.money.saturating_sub(penalty);
        self.total_penalties = self.total_penalties.saturating_add(penalty);
        self.clients_refused += 1;
    }

    pub fn record_client(&mut self) {
        self.clients_served += 1;
    }

    pub fn record_install(&mut self) {
        self.parts_installed += 1;
    }

    pub fn record_repaired(&mut self) {
        self.clients_repaired += 1;
    }

    /// Net change since the start of the day
    pub fn net_result(&self) -> i64 {
        self.total_income.saturating_sub(self.total_penalties)
    }

    pub fn summary(&self) -> String {
        format!(
            "Money: ${} | Clients: {} (repaired {}, refused {}) | Parts installed: {} | Income: ${} | Penalties: ${} | Net: ${}",
            self.money,
            self.clients_served,
            self.clients_repaired,
            self.clients_refused,
            self.parts_installed,
            self.total_income,
            self.total_penalties,
            self.net_result()
        )
    }
}
