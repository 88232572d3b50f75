//! Field identifiers and input domains for the application form

/// Ordered option list for the role selection field
pub const ROLE_OPTIONS: [&str; 4] = ["Owner / Partner", "CEO / Director", "Manager", "Other"];

/// Ordered option list for the employee-count band, smallest first
pub const EMPLOYEE_OPTIONS: [&str; 5] = ["1 - 5", "6 - 10", "11 - 30", "31 - 50", "More than 50"];

/// Ordered option list for the monthly revenue band, lowest first
pub const REVENUE_OPTIONS: [&str; 5] = [
    "Up to R$ 50k",
    "R$ 50k to R$ 100k",
    "R$ 100k to R$ 300k",
    "R$ 300k to R$ 500k",
    "Above R$ 500k",
];

/// Ordered option list for the urgency band
pub const URGENCY_OPTIONS: [&str; 4] = [
    "Immediate: this needed solving yesterday",
    "High: within the next 30 days",
    "Medium: planning for next quarter",
    "Low: just researching",
];

/// Identifies a single field of the application record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Role,
    Email,
    Phone,
    CompanyName,
    Employees,
    Revenue,
    Challenge,
    Urgency,
}

/// How a field is edited: free text, multi-line text, or one of a fixed
/// option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Select(&'static [&'static str]),
}

impl FieldId {
    /// Label shown next to the input and in validation messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Role => "Role",
            Self::Email => "Email",
            Self::Phone => "WhatsApp/Phone",
            Self::CompanyName => "Company Name",
            Self::Employees => "Number of Employees",
            Self::Revenue => "Revenue",
            Self::Challenge => "Challenge",
            Self::Urgency => "Urgency",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Name | Self::Email | Self::Phone | Self::CompanyName => FieldKind::Text,
            Self::Challenge => FieldKind::Multiline,
            Self::Role => FieldKind::Select(&ROLE_OPTIONS),
            Self::Employees => FieldKind::Select(&EMPLOYEE_OPTIONS),
            Self::Revenue => FieldKind::Select(&REVENUE_OPTIONS),
            Self::Urgency => FieldKind::Select(&URGENCY_OPTIONS),
        }
    }

    /// Hint shown while a text field is empty
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("e.g. Jane Smith"),
            Self::Email => Some("you@company.com"),
            Self::Phone => Some("(11) 99999-9999"),
            Self::CompanyName => Some("e.g. JS Solutions Ltd"),
            Self::Challenge => Some(
                "e.g. I can't step away from day-to-day operations, my team doesn't deliver \
                 without me, sales have stalled...",
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(FieldId::Name.label(), "Full Name");
        assert_eq!(FieldId::Phone.label(), "WhatsApp/Phone");
        assert_eq!(FieldId::Employees.label(), "Number of Employees");
        assert_eq!(FieldId::Revenue.label(), "Revenue");
        assert_eq!(FieldId::Urgency.label(), "Urgency");
    }

    #[test]
    fn test_selection_fields_carry_their_option_domains() {
        assert_eq!(FieldId::Role.kind(), FieldKind::Select(&ROLE_OPTIONS));
        assert_eq!(
            FieldId::Employees.kind(),
            FieldKind::Select(&EMPLOYEE_OPTIONS)
        );
        assert_eq!(FieldId::Revenue.kind(), FieldKind::Select(&REVENUE_OPTIONS));
        assert_eq!(FieldId::Urgency.kind(), FieldKind::Select(&URGENCY_OPTIONS));
    }

    #[test]
    fn test_challenge_is_multiline() {
        assert_eq!(FieldId::Challenge.kind(), FieldKind::Multiline);
    }

    #[test]
    fn test_band_lists_have_five_ordered_options() {
        assert_eq!(EMPLOYEE_OPTIONS.len(), 5);
        assert_eq!(REVENUE_OPTIONS.len(), 5);
        assert_eq!(EMPLOYEE_OPTIONS[0], "1 - 5");
        assert_eq!(REVENUE_OPTIONS[0], "Up to R$ 50k");
    }
}
