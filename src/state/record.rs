//! The application record: every answer the prospect gives

use super::fields::FieldId;
use serde::Serialize;

/// All prospect-supplied answers, collected across the three form steps.
///
/// Every field is a plain string; selection fields hold one of their
/// enumerated options verbatim. The serialized form is the flat JSON
/// object the collector endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub employees: String,
    pub revenue: String,
    pub challenge: String,
    pub urgency: String,
}

impl ApplicationRecord {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Role => &self.role,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::CompanyName => &self.company_name,
            FieldId::Employees => &self.employees,
            FieldId::Revenue => &self.revenue,
            FieldId::Challenge => &self.challenge,
            FieldId::Urgency => &self.urgency,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Name => self.name = value,
            FieldId::Role => self.role = value,
            FieldId::Email => self.email = value,
            FieldId::Phone => self.phone = value,
            FieldId::CompanyName => self.company_name = value,
            FieldId::Employees => self.employees = value,
            FieldId::Revenue => self.revenue = value,
            FieldId::Challenge => self.challenge = value,
            FieldId::Urgency => self.urgency = value,
        }
    }

    /// A field counts as filled when its value is non-empty; no trimming
    /// or format checks beyond that.
    pub fn is_filled(&self, field: FieldId) -> bool {
        !self.get(field).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_empty() {
        let record = ApplicationRecord::default();
        for field in [
            FieldId::Name,
            FieldId::Role,
            FieldId::Email,
            FieldId::Phone,
            FieldId::CompanyName,
            FieldId::Employees,
            FieldId::Revenue,
            FieldId::Challenge,
            FieldId::Urgency,
        ] {
            assert_eq!(record.get(field), "");
            assert!(!record.is_filled(field));
        }
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut record = ApplicationRecord::default();
        record.set(FieldId::CompanyName, "JS Solutions".to_string());
        assert_eq!(record.get(FieldId::CompanyName), "JS Solutions");
        assert!(record.is_filled(FieldId::CompanyName));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        // Presence is length-based only; a lone space is a filled field.
        let mut record = ApplicationRecord::default();
        record.set(FieldId::Name, " ".to_string());
        assert!(record.is_filled(FieldId::Name));
    }

    #[test]
    fn test_serializes_with_camel_case_wire_keys() {
        let mut record = ApplicationRecord::default();
        record.set(FieldId::Name, "Jane".to_string());
        record.set(FieldId::CompanyName, "JS Solutions".to_string());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "Jane");
        assert_eq!(value["companyName"], "JS Solutions");
        // Flat object, one key per field
        assert_eq!(value.as_object().unwrap().len(), 9);
    }
}
