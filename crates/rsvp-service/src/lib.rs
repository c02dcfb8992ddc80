//! # rsvp-service
//!
//! Application layer containing the RSVP submission workflow, the guest roster
//! aggregator, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CheckInOutcome, RosterService, RosterSession, RsvpService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
