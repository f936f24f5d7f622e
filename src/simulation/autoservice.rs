//! The repair shop engine
//!
//! Cars are taken from the queue one at a time. For each car the operator
//! picks slots to repair until the car is whole or the client is refused.
//! The engine only applies decisions; reading input and drawing the screen
//! is left to an [`Operator`].

use anyhow::{bail, ensure, Context, Result};
use log::{debug, info};
use std::collections::{BTreeMap, VecDeque};

use super::car::Car;
use super::config::{PenaltyPolicy, ShopConfig};
use super::ledger::Ledger;
use super::storage::Storage;
use super::types::{Decision, Part, TurnEvent, TurnStatus};

/// Supplies decisions for the engine and is told what happened
pub trait Operator {
    /// Pick what to do next with the car shown in `view`
    fn choose(&mut self, view: &ServiceView) -> Result<Decision>;

    fn report(&mut self, event: &TurnEvent) -> Result<()>;

    /// Called once after the last client
    fn finish(&mut self, ledger: &Ledger) -> Result<()>;
}

/// Everything the operator needs to see before deciding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceView {
    /// 1-based number of the current client
    pub client_number: usize,
    pub money: i64,
    pub clients_waiting: usize,
    pub storage_count: usize,
    pub storage_stock: BTreeMap<String, usize>,
    pub parts: Vec<Part>,
    /// Penalty that refusing right now would cost
    pub penalty: i64,
}

/// Result of applying one decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub event: TurnEvent,
    pub status: TurnStatus,
}

/// Penalty for refusing a client
///
/// `max_broken` is the broken count when the turn started, `current_broken`
/// the count right now. Saturates at `i64::MAX` for huge fixed penalties.
pub fn refusal_penalty(
    policy: PenaltyPolicy,
    fixed_penalty: i64,
    max_broken: usize,
    current_broken: usize,
    repair_began: bool,
) -> i64 {
    if max_broken == 0 {
        return 0;
    }

    let remainder = current_broken % max_broken;
    if remainder != 0 {
        return fixed_penalty.saturating_mul(remainder as i64);
    }

    match policy {
        PenaltyPolicy::Flat => fixed_penalty,
        PenaltyPolicy::RepairAware if repair_began => {
            fixed_penalty.saturating_mul(current_broken as i64)
        }
        PenaltyPolicy::RepairAware => fixed_penalty,
    }
}

/// The car at the counter
#[derive(Debug, Clone)]
struct ServiceTicket {
    client_number: usize,
    car: Car,
    /// Broken count when the turn started
    max_broken_parts: usize,
    repair_began: bool,
}

/// Shop state for one workday
#[derive(Debug)]
pub struct AutoService {
    ledger: Ledger,
    storage: Storage,
    cars_queue: VecDeque<Car>,
    current: Option<ServiceTicket>,
    fixed_penalty: i64,
    repair_surcharge: i64,
    penalty_policy: PenaltyPolicy,
}

impl AutoService {
    pub fn new(config: &ShopConfig, storage: Storage, cars_queue: VecDeque<Car>) -> Self {
        Self {
            ledger: Ledger::new(config.starting_money),
            storage,
            cars_queue,
            current: None,
            fixed_penalty: config.fixed_penalty,
            repair_surcharge: config.repair_surcharge,
            penalty_policy: config.penalty_policy,
        }
    }

    pub fn money(&self) -> i64 {
        self.ledger.money
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn clients_waiting(&self) -> usize {
        self.cars_queue.len()
    }

    /// The car being serviced, if any
    pub fn current_car(&self) -> Option<&Car> {
        self.current.as_ref().map(|ticket| &ticket.car)
    }

    /// Penalty for refusing the current client right now
    pub fn current_penalty(&self) -> Option<i64> {
        self.current.as_ref().map(|ticket| self.penalty_for(ticket))
    }

    fn penalty_for(&self, ticket: &ServiceTicket) -> i64 {
        refusal_penalty(
            self.penalty_policy,
            self.fixed_penalty,
            ticket.max_broken_parts,
            ticket.car.broken_parts_count(),
            ticket.repair_began,
        )
    }

    /// Take the next car from the queue
    ///
    /// Returns `None` once the queue is empty. A car with nothing broken is
    /// resolved on the spot.
    pub fn start_next_turn(&mut self) -> Option<TurnStatus> {
        let car = self.cars_queue.pop_front()?;
        self.ledger.record_client();
        let client_number = self.ledger.clients_served;
        let max_broken_parts = car.broken_parts_count();

        if max_broken_parts == 0 {
            debug!("Client {} has nothing broken", client_number);
            self.current = None;
            self.ledger.record_repaired();
            return Some(TurnStatus::Resolved);
        }

        debug!(
            "Client {} arrived with {} broken parts",
            client_number, max_broken_parts
        );
        self.current = Some(ServiceTicket {
            client_number,
            car,
            max_broken_parts,
            repair_began: false,
        });
        Some(TurnStatus::Servicing)
    }

    pub fn view(&self) -> Option<ServiceView> {
        let ticket = self.current.as_ref()?;
        Some(ServiceView {
            client_number: ticket.client_number,
            money: self.ledger.money,
            clients_waiting: self.cars_queue.len(),
            storage_count: self.storage.parts_count(),
            storage_stock: self.storage.stock_by_name(),
            parts: ticket.car.parts(),
            penalty: self.penalty_for(ticket),
        })
    }

    /// Apply one operator decision to the current car
    pub fn apply(&mut self, decision: Decision) -> Result<TurnOutcome> {
        let ticket = self
            .current
            .as_ref()
            .context("No client is being serviced")?;

        match decision {
            Decision::Refuse => {
                let penalty = self.penalty_for(ticket);
                info!(
                    "Client {} refused with {} broken parts, penalty {}",
                    ticket.client_number,
                    ticket.car.broken_parts_count(),
                    penalty
                );
                self.ledger.charge_penalty(penalty);
                self.current = None;
                Ok(TurnOutcome {
                    event: TurnEvent::Refused { penalty },
                    status: TurnStatus::Refused,
                })
            }
            Decision::Repair(slot) => self.repair(slot),
        }
    }

    fn repair(&mut self, slot: usize) -> Result<TurnOutcome> {
        let repair_surcharge = self.repair_surcharge;
        let Some(ticket) = self.current.as_mut() else {
            bail!("No client is being serviced");
        };
        ensure!(
            slot >= 1 && slot <= ticket.car.slot_count(),
            "Slot {} is out of range 1..={}",
            slot,
            ticket.car.slot_count()
        );

        let index = slot - 1;
        ticket.repair_began = true;
        let part_name = ticket
            .car
            .part(index)
            .context("Slot disappeared from car")?
            .name()
            .to_string();

        let Some(part) = self.storage.try_get_part(&part_name) else {
            debug!("No {} in storage", part_name);
            return Ok(TurnOutcome {
                event: TurnEvent::PartMissing { slot, part_name },
                status: TurnStatus::Servicing,
            });
        };

        let broken_before = ticket.car.broken_parts_count();
        let price = part.price();
        ticket.car.set_new_part(index, part);
        let broken_after = ticket.car.broken_parts_count();
        self.ledger.record_install();

        let income = if broken_after < broken_before {
            price.saturating_add(repair_surcharge)
        } else {
            0
        };
        self.ledger.earn(income);
        debug!(
            "Installed {} in slot {} of client {}, income {}",
            part_name, slot, ticket.client_number, income
        );

        if broken_after == 0 {
            info!("Client {} fully repaired", ticket.client_number);
            self.ledger.record_repaired();
            self.current = None;
            return Ok(TurnOutcome {
                event: TurnEvent::Resolved {
                    slot,
                    part_name,
                    income,
                },
                status: TurnStatus::Resolved,
            });
        }

        Ok(TurnOutcome {
            event: TurnEvent::Installed {
                slot,
                part_name,
                income,
            },
            status: TurnStatus::Servicing,
        })
    }

    /// Service every queued client and return the final ledger
    pub fn run<O: Operator>(&mut self, operator: &mut O) -> Result<Ledger> {
        while let Some(mut status) = self.start_next_turn() {
            while status == TurnStatus::Servicing {
                let view = self.view().context("Servicing without a current car")?;
                let decision = operator.choose(&view)?;
                let outcome = self.apply(decision)?;
                operator.report(&outcome.event)?;
                status = outcome.status;
            }
        }

        self.log_summary();
        operator.finish(&self.ledger)?;
        Ok(self.ledger.clone())
    }

    fn log_summary(&self) {
        info!("=== WORKDAY COMPLETE ===");
        info!("Clients served: {}", self.ledger.clients_served);
        info!("Clients repaired: {}", self.ledger.clients_repaired);
        info!("Clients refused: {}", self.ledger.clients_refused);
        info!("Parts installed: {}", self.ledger.parts_installed);
        info!("Parts left in storage: {}", self.storage.parts_count());
        info!("Total income: {}", self.ledger.total_income);
        info!("Total penalties: {}", self.ledger.total_penalties);
        info!("Net result: {}", self.ledger.net_result());
        info!("Final money: {}", self.ledger.money);
    }
}
