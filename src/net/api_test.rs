use behavior::{ContactFields, Field};

use super::*;

fn payload() -> ContactPayload {
    let mut fields = ContactFields::default();
    fields.set(Field::Name, "A".to_owned());
    fields.set(Field::Email, "a@b.com".to_owned());
    fields.set(Field::Subject, "S".to_owned());
    fields.set(Field::Message, "M".to_owned());
    ContactPayload::from_fields(&fields).unwrap()
}

// =============================================================
// classify_status
// =============================================================

#[test]
fn success_statuses_are_delivered() {
    for status in [200, 201, 202, 204, 299] {
        assert_eq!(classify_status(status), Ok(()), "{status}");
    }
}

#[test]
fn other_statuses_are_rejected_with_their_code() {
    for status in [0, 199, 301, 400, 422, 500, 503] {
        assert_eq!(classify_status(status), Err(SubmitFailure::Rejected { status }), "{status}");
    }
}

// =============================================================
// Native delivery
// =============================================================

#[test]
fn http_delivery_keeps_endpoint_and_timeout() {
    let delivery = HttpDelivery::new("/api/contact", Duration::from_secs(3));
    assert_eq!(delivery.endpoint(), "/api/contact");
    assert_eq!(delivery.timeout(), Duration::from_secs(3));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_delivery_reports_unavailable() {
    let delivery = HttpDelivery::new("/api/contact", Duration::from_secs(3));
    let outcome = futures::executor::block_on(delivery.deliver(payload()));
    assert_eq!(outcome, Err(SubmitFailure::Unavailable));
}
