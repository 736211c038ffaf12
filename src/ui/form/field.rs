use crate::record::UserRecord;

/// Inputs of the update form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Id,
    Fullname,
    Phone,
    Email,
    Nationality,
    LastBooking,
    Nights,
    Books,
    Roles,
}

impl FieldKey {
    pub const ALL: [FieldKey; 9] = [
        FieldKey::Id,
        FieldKey::Fullname,
        FieldKey::Phone,
        FieldKey::Email,
        FieldKey::Nationality,
        FieldKey::LastBooking,
        FieldKey::Nights,
        FieldKey::Books,
        FieldKey::Roles,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Id => "User ID",
            FieldKey::Fullname => "Full name",
            FieldKey::Phone => "Phone",
            FieldKey::Email => "Email",
            FieldKey::Nationality => "Nationality",
            FieldKey::LastBooking => "Last booking",
            FieldKey::Nights => "Nights booked",
            FieldKey::Books => "Bookings",
            FieldKey::Roles => "Role",
        }
    }

    /// Name of the field in the wire format.
    pub fn name(self) -> &'static str {
        match self {
            FieldKey::Id => "id",
            FieldKey::Fullname => "fullname",
            FieldKey::Phone => "phone",
            FieldKey::Email => "email",
            FieldKey::Nationality => "nationality",
            FieldKey::LastBooking => "last_booking",
            FieldKey::Nights => "nights",
            FieldKey::Books => "books",
            FieldKey::Roles => "roles",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn read_only(self) -> bool {
        matches!(self, FieldKey::Id)
    }

    pub fn get(self, record: &UserRecord) -> &str {
        match self {
            FieldKey::Id => &record.id,
            FieldKey::Fullname => &record.fullname,
            FieldKey::Phone => &record.phone,
            FieldKey::Email => &record.email,
            FieldKey::Nationality => &record.nationality,
            FieldKey::LastBooking => &record.last_booking,
            FieldKey::Nights => &record.nights,
            FieldKey::Books => &record.books,
            FieldKey::Roles => &record.roles,
        }
    }

    /// Writes `value` into `record`. The identifier is never written.
    pub fn set(self, record: &mut UserRecord, value: String) {
        match self {
            FieldKey::Id => {}
            FieldKey::Fullname => record.fullname = value,
            FieldKey::Phone => record.phone = value,
            FieldKey::Email => record.email = value,
            FieldKey::Nationality => record.nationality = value,
            FieldKey::LastBooking => record.last_booking = value,
            FieldKey::Nights => record.nights = value,
            FieldKey::Books => record.books = value,
            FieldKey::Roles => record.roles = value,
        }
    }
}

/// One text input bound to a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: FieldKey,
    pub value: String,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        self.key.label()
    }

    pub fn read_only(&self) -> bool {
        self.key.read_only()
    }
}

/// All inputs pre-filled from `record`.
pub fn fields_from_record(record: &UserRecord) -> Vec<FormField> {
    FieldKey::ALL
        .into_iter()
        .map(|key| FormField {
            key,
            value: key.get(record).to_string(),
        })
        .collect()
}

/// First input left empty, if any. Every input is required.
pub fn first_missing(fields: &[FormField]) -> Option<usize> {
    fields.iter().position(|field| field.value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for key in FieldKey::ALL {
            assert_eq!(FieldKey::from_name(key.name()), Some(key));
        }
        assert_eq!(FieldKey::from_name("update_at"), None);
    }

    #[test]
    fn test_set_ignores_identifier() {
        let mut record = UserRecord {
            id: "u1".to_string(),
            ..Default::default()
        };
        FieldKey::Id.set(&mut record, "other".to_string());
        FieldKey::Phone.set(&mut record, "0901".to_string());
        assert_eq!(record.id, "u1");
        assert_eq!(record.phone, "0901");
    }

    #[test]
    fn test_only_identifier_is_read_only() {
        let read_only: Vec<_> = FieldKey::ALL.into_iter().filter(|k| k.read_only()).collect();
        assert_eq!(read_only, vec![FieldKey::Id]);
    }
}
