use serde::Deserialize;

/// Create/update payload. On update, absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReservationPayload {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub artist_name: Option<String>,
    pub event_name: Option<String>,
    pub photo_url: Option<String>,
    pub is_validated: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fields_are_all_optional() {
        let payload: ReservationPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.last_name.is_none());
        assert!(payload.is_validated.is_none());
    }

    #[test]
    fn payload_accepts_full_record() {
        let body = r#"{
            "last_name": "Martin",
            "first_name": "Lea",
            "artist_name": "The Gig",
            "event_name": "Summer Fest",
            "photo_url": "https://img.example/1.jpg",
            "is_validated": true
        }"#;
        let payload: ReservationPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.artist_name.as_deref(), Some("The Gig"));
        assert_eq!(payload.is_validated, Some(true));
    }
}
