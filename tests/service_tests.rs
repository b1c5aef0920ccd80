use portal_core::{
    core::{
        errors::PortalError,
        services::{MovementService, ProfileService, PurchaseService},
    },
    domain::{Movement, Profile, Purchase},
    storage::JsonStore,
};
use rust_decimal::Decimal;
use tempfile::{tempdir, TempDir};

fn store_in_temp_dir() -> (JsonStore, TempDir) {
    let temp = tempdir().expect("temp dir");
    (JsonStore::new(temp.path().join("data")), temp)
}

fn purchase_service() -> (PurchaseService, TempDir) {
    let (store, temp) = store_in_temp_dir();
    (PurchaseService::new(store), temp)
}

fn movement_service() -> (MovementService, TempDir) {
    let (store, temp) = store_in_temp_dir();
    (MovementService::new(store), temp)
}

fn profile_service() -> (ProfileService, TempDir) {
    let (store, temp) = store_in_temp_dir();
    (ProfileService::new(store), temp)
}

fn purchase(id: &str, status: &str) -> Purchase {
    Purchase::new(id, Decimal::new(19975, 2), status)
}

fn movement(detail: &str) -> Movement {
    Movement::new("05/06/2025", detail, "-1.250,50")
}

fn profile(name: &str) -> Profile {
    Profile {
        person_type: "individual".into(),
        name: name.into(),
        surname: "Pereyra".into(),
        email: format!("{}@example.com", name.to_ascii_lowercase()),
        tax_id: "20-11222333-4".into(),
        national_id: "11222333".into(),
        phone1: "+54 11 5555-0001".into(),
        ..Profile::default()
    }
}

#[test]
fn created_purchase_is_fetchable_under_any_letter_case() {
    let (service, _guard) = purchase_service();
    let created = service.create(purchase("Ord-42", "pending")).expect("create");

    for id in ["Ord-42", "ord-42", "ORD-42"] {
        let fetched = service.get(id).expect("get");
        assert_eq!(fetched, created, "lookup via `{id}` must return the record");
    }
}

#[test]
fn duplicate_ids_differing_only_in_case_conflict() {
    let (service, _guard) = purchase_service();
    service.create(purchase("Ord-42", "pending")).expect("first create");

    let err = service
        .create(purchase("ORD-42", "shipped"))
        .expect_err("case-insensitive duplicate must fail");
    assert!(
        matches!(err, PortalError::PurchaseExists(_)),
        "unexpected error: {err:?}"
    );
    assert_eq!(
        service.list(None).expect("list").len(),
        1,
        "conflicting create must not grow the collection"
    );
}

#[test]
fn deleted_purchase_is_gone() {
    let (service, _guard) = purchase_service();
    service.create(purchase("Ord-1", "pending")).expect("create");

    service.delete("ORD-1").expect("delete");

    let err = service.get("Ord-1").expect_err("get after delete must fail");
    assert!(matches!(err, PortalError::PurchaseNotFound(_)));
    let err = service.delete("Ord-1").expect_err("second delete must fail");
    assert!(matches!(err, PortalError::PurchaseNotFound(_)));
}

#[test]
fn update_targets_missing_ids_with_not_found() {
    let (service, _guard) = purchase_service();

    let err = service
        .update("ghost", purchase("ghost", "pending"))
        .expect_err("update of missing id must fail");
    assert!(matches!(err, PortalError::PurchaseNotFound(ref id) if id == "ghost"));
}

#[test]
fn status_filter_is_case_insensitive_and_preserves_order() {
    let (service, _guard) = purchase_service();
    for (id, status) in [
        ("a", "Shipped"),
        ("b", "pending"),
        ("c", "SHIPPED"),
        ("d", "delivered"),
    ] {
        service.create(purchase(id, status)).expect("create");
    }

    let shipped = service.list(Some("shipped")).expect("filtered list");
    let ids: Vec<&str> = shipped.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"], "exact case-insensitive matches, in order");

    let blank = service.list(Some("   ")).expect("blank filter");
    assert_eq!(blank.len(), 4, "blank filter means no filter");
}

#[test]
fn movement_indexing_succeeds_within_bounds_only() {
    let (service, _guard) = movement_service();
    for detail in ["one", "two", "three"] {
        service.create(movement(detail)).expect("create");
    }

    for index in 0..3 {
        assert!(service.get(index).is_ok(), "index {index} is in range");
    }
    for index in [-1, 3] {
        let err = service.get(index).expect_err("out of range");
        assert!(matches!(err, PortalError::MovementOutOfRange(i) if i == index));
    }
}

#[test]
fn appended_movement_lands_at_tail_index() {
    let (service, _guard) = movement_service();
    service.create(movement("first")).expect("create");

    let (created, index) = service.create(movement("second")).expect("create");
    assert_eq!(index, 1, "returned index is len - 1 after the append");
    assert_eq!(service.get(index as i64).expect("read back"), created);
}

#[test]
fn deleting_a_movement_shifts_later_indices_down() {
    let (service, _guard) = movement_service();
    for detail in ["keep-0", "drop", "keep-1", "keep-2"] {
        service.create(movement(detail)).expect("create");
    }

    service.delete(1).expect("delete");

    let remaining: Vec<String> = service
        .list()
        .expect("list")
        .into_iter()
        .map(|m| m.detail)
        .collect();
    assert_eq!(
        remaining,
        ["keep-0", "keep-1", "keep-2"],
        "relative order of survivors is preserved"
    );
    let err = service.get(3).expect_err("old tail index is out of range now");
    assert!(matches!(err, PortalError::MovementOutOfRange(3)));
}

#[test]
fn profile_lifecycle_tracks_file_existence() {
    let (service, _guard) = profile_service();

    let err = service.get().expect_err("get before any write");
    assert!(matches!(err, PortalError::ProfileNotSet));

    let written = profile("Carla");
    service.upsert(written.clone()).expect("upsert");
    assert_eq!(service.get().expect("get"), written);

    let err = service
        .create(profile("Other"))
        .expect_err("create over an existing profile");
    assert!(matches!(err, PortalError::ProfileExists));

    service.delete().expect("delete");
    let err = service.delete().expect_err("delete after delete");
    assert!(matches!(err, PortalError::ProfileNotSet));
}

#[test]
fn collections_share_a_data_dir_without_interfering() {
    let (store, _guard) = store_in_temp_dir();
    let purchases = PurchaseService::new(store.clone());
    let movements = MovementService::new(store);

    purchases.create(purchase("Ord-1", "pending")).expect("create purchase");
    movements.create(movement("deposit")).expect("create movement");

    assert_eq!(purchases.list(None).expect("purchases").len(), 1);
    assert_eq!(movements.list().expect("movements").len(), 1);
}
