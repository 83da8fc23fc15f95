//! Student field conventions.

/// Guardian value used when an adult student answers for themselves.
///
/// Stored as plain text alongside parent names; the field is free text and
/// this constant only captures the convention the practice uses.
pub const SELF_GUARDIAN: &str = "Responsável próprio";
