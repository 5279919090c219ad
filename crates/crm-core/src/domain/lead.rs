// ============================================================================
// CRM Core - Lead Entity
// File: crates/crm-core/src/domain/lead.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text;

/// Lead lifecycle enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(LeadStatus::New),
            "contacted" => Some(LeadStatus::Contacted),
            "qualified" => Some(LeadStatus::Qualified),
            "converted" => Some(LeadStatus::Converted),
            "lost" => Some(LeadStatus::Lost),
            _ => None,
        }
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

/// Key used to detect an existing lead for the same tenant. Phone digits win
/// when present and valid; lowercase email is the secondary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupKey {
    Phone(String),
    Email(String),
}

impl DedupKey {
    pub fn value(&self) -> &str {
        match self {
            DedupKey::Phone(v) => v,
            DedupKey::Email(v) => v,
        }
    }
}

/// Lead entity
///
/// Within a tenant, at most one non-deleted lead may share the same
/// normalized phone number. Soft-delete and archival are external concerns;
/// this core never physically deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub tenant_id: Uuid,

    pub name: Option<String>,

    /// Digits-only normalized phone.
    pub phone: Option<String>,
    /// Set when the inbound phone had a digit count outside {10, 11}. The
    /// lead is still captured; losing a lead is worse than a bad number.
    pub phone_invalid: bool,

    pub email: Option<String>,

    /// Intake channel tag (e.g. "chatbot", "debug-tool").
    pub origin: String,
    pub status: LeadStatus,

    pub assigned_employee_id: Option<Uuid>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    /// Phone rendered for display, `(DD) DDDDD-DDDD` style.
    pub fn display_phone(&self) -> Option<String> {
        self.phone.as_deref().map(text::format_phone_display)
    }

    /// Dedup key for this lead: valid phone digits first, lowercase email as
    /// fallback, `None` when neither is usable (such leads always create).
    pub fn dedup_key(&self) -> Option<DedupKey> {
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.is_empty()) {
            if !self.phone_invalid {
                return Some(DedupKey::Phone(phone.to_string()));
            }
        }
        self.email
            .as_deref()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .map(DedupKey::Email)
    }

    /// Merges a candidate into this record: every non-null/non-empty field on
    /// the candidate overwrites, everything else is preserved. `id`,
    /// `tenant_id`, and `created_at` are never touched. Status is merged by
    /// the intake service, which knows whether the payload carried one
    /// explicitly.
    pub fn merge_from(&mut self, candidate: &Lead, now: DateTime<Utc>) {
        merge_field(&mut self.name, &candidate.name);
        if candidate.phone.as_deref().is_some_and(|p| !p.is_empty()) {
            self.phone = candidate.phone.clone();
            self.phone_invalid = candidate.phone_invalid;
        }
        merge_field(&mut self.email, &candidate.email);
        merge_field(&mut self.notes, &candidate.notes);
        if !candidate.origin.is_empty() {
            self.origin = candidate.origin.clone();
        }
        if candidate.assigned_employee_id.is_some() {
            self.assigned_employee_id = candidate.assigned_employee_id;
        }
        self.updated_at = now;
    }
}

fn merge_field(target: &mut Option<String>, source: &Option<String>) {
    if let Some(value) = source.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        *target = Some(value.to_string());
    }
}

/// A lead joined with its assigned employee's display name, produced at the
/// persistence boundary instead of by application-side lookups.
#[derive(Debug, Clone, Serialize)]
pub struct LeadWithAssignee {
    #[serde(flatten)]
    pub lead: Lead,
    pub assigned_employee_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_shared::types::new_id;

    fn lead(phone: Option<&str>, email: Option<&str>) -> Lead {
        Lead {
            id: new_id(),
            tenant_id: new_id(),
            name: Some("Maria Silva".to_string()),
            phone: phone.map(String::from),
            phone_invalid: false,
            email: email.map(String::from),
            origin: "chatbot".to_string(),
            status: LeadStatus::New,
            assigned_employee_id: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_dedup_key_prefers_phone() {
        let l = lead(Some("61999998888"), Some("Maria@Email.com"));
        assert_eq!(l.dedup_key(), Some(DedupKey::Phone("61999998888".to_string())));
    }

    #[test]
    fn test_dedup_key_falls_back_to_lowercase_email() {
        let l = lead(None, Some("Maria@Email.com"));
        assert_eq!(l.dedup_key(), Some(DedupKey::Email("maria@email.com".to_string())));
    }

    #[test]
    fn test_invalid_phone_yields_email_key() {
        let mut l = lead(Some("123"), Some("a@b.com"));
        l.phone_invalid = true;
        assert_eq!(l.dedup_key(), Some(DedupKey::Email("a@b.com".to_string())));
    }

    #[test]
    fn test_no_dedup_key_without_phone_or_email() {
        assert_eq!(lead(None, None).dedup_key(), None);
    }

    #[test]
    fn test_merge_preserves_untouched_fields() {
        let mut existing = lead(Some("61999998888"), None);
        let original_id = existing.id;
        let original_created = existing.created_at;

        let mut candidate = lead(Some("61999998888"), Some("a@b.com"));
        candidate.name = None;
        candidate.notes = Some("ligou duas vezes".to_string());

        existing.merge_from(&candidate, Utc::now());

        assert_eq!(existing.id, original_id);
        assert_eq!(existing.created_at, original_created);
        assert_eq!(existing.name.as_deref(), Some("Maria Silva"));
        assert_eq!(existing.email.as_deref(), Some("a@b.com"));
        assert_eq!(existing.notes.as_deref(), Some("ligou duas vezes"));
    }

    #[test]
    fn test_merge_ignores_empty_strings() {
        let mut existing = lead(Some("61999998888"), Some("a@b.com"));
        let mut candidate = lead(Some("61999998888"), Some("  "));
        candidate.name = Some(String::new());

        existing.merge_from(&candidate, Utc::now());

        assert_eq!(existing.name.as_deref(), Some("Maria Silva"));
        assert_eq!(existing.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_display_phone() {
        let l = lead(Some("61999998888"), None);
        assert_eq!(l.display_phone().as_deref(), Some("(61) 99999-8888"));
    }

    #[test]
    fn test_status_round_trip() {
        for s in [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Converted,
            LeadStatus::Lost,
        ] {
            assert_eq!(LeadStatus::from_str(s.as_str()), Some(s));
        }
        assert_eq!(LeadStatus::from_str("archived"), None);
    }
}
