// src/model/queues.rs

/// A quantity travelling through one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lot {
    pub quantity: u64,
    pub days_remaining: usize,
}

/// The lots currently held by one stage. Lots leave by remaining time,
/// not by insertion order.
#[derive(Debug, Clone, Default)]
pub struct StageQueue {
    lots: Vec<Lot>,
}

impl StageQueue {
    pub fn new() -> Self {
        Self { lots: Vec::new() }
    }

    /// Items enter the stage. Empty lots are never stored.
    pub fn push(&mut self, quantity: u64, lead_time: usize) {
        if quantity > 0 {
            self.lots.push(Lot {
                quantity,
                days_remaining: lead_time,
            });
        }
    }

    /// Advances every lot by one day and drains the ones that finished.
    ///
    /// Returns the summed quantity that left the stage today.
    pub fn advance(&mut self) -> u64 {
        let (finished, in_flight): (Vec<Lot>, Vec<Lot>) = self
            .lots
            .iter()
            .map(|lot| Lot {
                quantity: lot.quantity,
                days_remaining: lot.days_remaining.saturating_sub(1),
            })
            .partition(|lot| lot.days_remaining == 0);

        self.lots = in_flight;
        finished.iter().map(|lot| lot.quantity).sum()
    }

    /// Work in progress: everything still inside the stage.
    pub fn wip(&self) -> u64 {
        self.lots.iter().map(|lot| lot.quantity).sum()
    }

    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }
}
