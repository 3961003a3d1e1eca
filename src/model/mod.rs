pub mod disruption;
pub mod pipeline;
pub mod queues;
pub mod warehouse;
