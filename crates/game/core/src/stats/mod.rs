//! Stat system boundary.
//!
//! Base stats, equipment bonuses and damage formulas belong to the combat
//! resolver. This module exposes the status layer's contribution only.

pub mod modifiers;

pub use modifiers::StatusModifiers;
