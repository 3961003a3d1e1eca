// src/model/pipeline.rs

use crate::model::queues::StageQueue;
use crate::simulation::config::SimulationConfig;

/// Fab -> Assembly -> Transport -> Warehouse.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub fab: StageQueue,
    pub assembly: StageQueue,
    pub transport: StageQueue,

    lead_time_fab: usize,
    lead_time_assembly: usize,
    lead_time_transport: usize,
}

impl Pipeline {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            fab: StageQueue::new(),
            assembly: StageQueue::new(),
            transport: StageQueue::new(),
            lead_time_fab: config.lead_time_fab,
            lead_time_assembly: config.lead_time_assembly,
            lead_time_transport: config.lead_time_transport,
        }
    }

    /// Moves goods one day closer to the warehouse.
    ///
    /// Stages are advanced downstream first so output handed to the next
    /// stage is not advanced again on the same day. Returns the quantity
    /// delivered to the warehouse.
    pub fn advance(&mut self) -> u64 {
        // Transport -> Warehouse
        let arriving = self.transport.advance();

        // Assembly -> Transport
        let assembled = self.assembly.advance();
        self.transport.push(assembled, self.lead_time_transport);

        // Fab -> Assembly
        let fabricated = self.fab.advance();
        self.assembly.push(fabricated, self.lead_time_assembly);

        arriving
    }

    /// Starts a new production order in the fab.
    pub fn start_production(&mut self, quantity: u32) {
        self.fab.push(u64::from(quantity), self.lead_time_fab);
    }

    /// Everything ordered but not yet in the warehouse.
    pub fn total_wip(&self) -> u64 {
        self.fab.wip() + self.assembly.wip() + self.transport.wip()
    }
}
