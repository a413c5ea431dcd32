//! Audit stamping.
//!
//! Every insert and update on `customer` and `accounts` goes through
//! [`Auditable`] with an explicit [`AuditContext`]; nothing is read from
//! process-wide state.

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Who is performing the write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditContext {
    pub actor: String,
}

impl AuditContext {
    pub fn new(actor: impl Into<String>) -> Self {
        Self { actor: actor.into() }
    }

    pub fn from_config(cfg: &configs::AuditConfig) -> Self {
        Self::new(cfg.actor.clone())
    }
}

impl Default for AuditContext {
    fn default() -> Self {
        Self::new(configs::DEFAULT_AUDIT_ACTOR)
    }
}

/// Pre-save hook implemented by active models carrying audit columns.
pub trait Auditable {
    fn stamp_created(&mut self, ctx: &AuditContext);
    fn stamp_updated(&mut self, ctx: &AuditContext);
}

pub(crate) fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}
