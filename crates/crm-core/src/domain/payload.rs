//! Inbound lead payload
//!
//! JSON shape delivered by the chatbot webhook. Field names stay in the
//! business language on the wire and map 1:1 onto [`Lead`](super::Lead)
//! attributes.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::LeadStatus;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LeadPayload {
    // absent and null both mean "no tenant scope"; the builder turns that
    // into the pipeline's only hard rejection
    #[serde(rename = "empresa_id", default)]
    pub tenant_id: Option<Uuid>,

    #[serde(rename = "nome", default)]
    #[validate(length(max = 120))]
    pub name: Option<String>,

    #[serde(rename = "telefone", default)]
    #[validate(length(max = 40))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: Option<String>,

    #[serde(rename = "origem")]
    #[validate(length(min = 1, max = 40))]
    pub origin: String,

    #[serde(default)]
    pub status: Option<LeadStatus>,

    /// Free-text chat message; used to derive a name when `nome` is absent
    /// and the text passes the name-likeness heuristic.
    #[serde(rename = "mensagem", default)]
    #[validate(length(max = 2000))]
    pub message: Option<String>,

    #[serde(rename = "observacoes", default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_business_field_names() {
        let payload: LeadPayload = serde_json::from_str(
            r#"{
                "empresa_id": "550e8400-e29b-41d4-a716-446655440000",
                "nome": "Maria Silva",
                "telefone": "(61) 99999-8888",
                "origem": "chatbot",
                "mensagem": "quero um orçamento"
            }"#,
        )
        .unwrap();

        assert!(payload.tenant_id.is_some());
        assert_eq!(payload.name.as_deref(), Some("Maria Silva"));
        assert_eq!(payload.phone.as_deref(), Some("(61) 99999-8888"));
        assert_eq!(payload.origin, "chatbot");
        assert_eq!(payload.message.as_deref(), Some("quero um orçamento"));
        assert!(payload.status.is_none());
    }

    #[test]
    fn test_status_deserializes_lowercase() {
        let payload: LeadPayload = serde_json::from_str(
            r#"{"empresa_id": null, "origem": "debug-tool", "status": "qualified"}"#,
        )
        .unwrap();
        assert_eq!(payload.status, Some(LeadStatus::Qualified));
    }
}
