//! # Domain Module
//!
//! Business logic for the mtnsyr daily-balance tracker.
//!
//! ## Module Organization
//!
//! - **ledger_service**: The balance ledger store — in-memory dataset,
//!   mutation operations, totals derivation, slot persistence
//! - **export_service**: Export/import orchestration over the file
//!   transfer collaborator
//! - **seed**: Fixed defaults a fresh store is seeded with
//!
//! ## Core Concepts
//!
//! - **Opening balance**: starting credit amount per credit type
//! - **Sales entry**: per-employee record of credit/cash sold
//! - **Remaining balance**: opening balance minus total sales
//! - **Transaction**: logged historical credit/cash movement

pub mod export_service;
pub mod ledger_service;
pub mod seed;

pub use export_service::ExportService;
pub use ledger_service::LedgerService;
