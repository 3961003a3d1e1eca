// src/model/warehouse.rs

/// Finished-goods stock facing the customer.
///
/// Quantities on hand are `u64`: deliveries accumulate over the horizon and
/// can exceed any single `u32` order.
#[derive(Debug, Clone)]
pub struct Warehouse {
    pub stock: u64,
    pub backorders: u64, // Unmet demand carried to the next day
}

impl Warehouse {
    pub fn new(initial_inventory: u32) -> Self {
        Self {
            stock: u64::from(initial_inventory),
            backorders: 0,
        }
    }

    /// Goods arriving from transport.
    pub fn receive_shipment(&mut self, quantity: u64) {
        self.stock = self.stock.saturating_add(quantity);
    }

    /// Serves today's demand, backorders first.
    ///
    /// Returns the quantity handed to customers.
    pub fn fulfill(&mut self, demand: u32) -> u64 {
        // Total obligation = today's demand + old backorders
        let total_needed = u64::from(demand).saturating_add(self.backorders);

        if self.stock >= total_needed {
            self.stock -= total_needed;
            self.backorders = 0;
            total_needed
        } else {
            // Short: ship everything, carry the rest.
            let shipped = self.stock;
            self.backorders = total_needed - shipped;
            self.stock = 0;
            shipped
        }
    }

    pub fn is_stocked_out(&self) -> bool {
        self.backorders > 0
    }

    /// Cost of today's ending state.
    pub fn current_cost(&self, holding_cost: f64, backorder_cost: f64) -> f64 {
        (self.stock as f64 * holding_cost) + (self.backorders as f64 * backorder_cost)
    }
}
