//! Quotation pricing and outbound proposal hooks

pub mod calculator;
pub mod ports;

pub use calculator::calculate;
pub use ports::{DocumentExporter, ProposalChannel, ProposalSender};
