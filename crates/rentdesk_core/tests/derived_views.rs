use chrono::NaiveDate;
use rentdesk_core::views::{monthly_trend, recent_activity, scoped_rooms, scoped_tenants, RecentEntry};
use rentdesk_core::{
    DomainStore, Employee, Expense, Occupancy, Payment, Performer, Permissions, Role, RoleKind,
    Room, RoomDetails, RoomStatus, Tenant,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn employee_with(permissions: Permissions) -> Employee {
    let mut employee = Employee::new("sara", "Sara K");
    employee.role = Role::Employee(permissions);
    employee
}

#[test]
fn march_trend_bucket_sums_paid_records() {
    let mut store = DomainStore::new();

    store.add_room(Room::new("101"), Performer::Admin).unwrap();
    let mut occupied = Room::new("102");
    occupied.status = RoomStatus::Occupied;
    occupied.details = Some(RoomDetails::Occupancy(Occupancy {
        start_date: Some(date(2024, 1, 1)),
        end_date: Some(date(2024, 6, 1)),
        open_ended: false,
    }));
    store.add_room(occupied, Performer::Admin).unwrap();

    store.add_payment(
        Payment::new("Omar", "102", 1500.0, date(2024, 3, 15)),
        Performer::Admin,
    );
    store.add_expense(
        Expense::new("Plumbing", 300.0, date(2024, 3, 10)),
        Performer::Admin,
    );

    let buckets = monthly_trend(store.payments(), store.expenses(), date(2024, 3, 31));
    assert_eq!(buckets.len(), 6);

    let march = buckets
        .iter()
        .find(|b| b.year == 2024 && b.month == 3)
        .unwrap();
    assert_eq!(march.income, 1500.0);
    assert_eq!(march.expenses, 300.0);
    assert_eq!(march.label, "Mar");

    let february = buckets
        .iter()
        .find(|b| b.year == 2024 && b.month == 2)
        .unwrap();
    assert_eq!(february.income, 0.0);
    assert_eq!(february.expenses, 0.0);
}

#[test]
fn trend_ignores_pending_and_unpaid_records() {
    let mut store = DomainStore::new();
    let mut pending = Payment::new("Omar", "101", 900.0, date(2024, 3, 5));
    pending.status = rentdesk_core::PaymentStatus::Pending;
    store.add_payment(pending, Performer::Admin);

    let mut unpaid = Expense::new("Repairs", 200.0, date(2024, 3, 6));
    unpaid.status = rentdesk_core::ExpenseStatus::Unpaid;
    store.add_expense(unpaid, Performer::Admin);

    let buckets = monthly_trend(store.payments(), store.expenses(), date(2024, 3, 31));
    let march = buckets
        .iter()
        .find(|b| b.year == 2024 && b.month == 3)
        .unwrap();
    assert_eq!(march.income, 0.0);
    assert_eq!(march.expenses, 0.0);
}

#[test]
fn admin_sees_all_rooms() {
    let mut store = DomainStore::new();
    store.add_room(Room::new("101"), Performer::Admin).unwrap();
    store.add_room(Room::new("102"), Performer::Admin).unwrap();

    let visible = scoped_rooms(store.rooms(), Some(RoleKind::Admin), None);
    assert_eq!(visible.len(), 2);
}

#[test]
fn employee_without_view_sees_nothing_despite_assignments() {
    let mut store = DomainStore::new();
    let id = store.add_room(Room::new("101"), Performer::Admin).unwrap();

    let mut permissions = Permissions::view_only();
    permissions.rooms.view = false;
    let mut employee = employee_with(permissions);
    employee.assigned_room_ids = vec![id];

    let visible = scoped_rooms(store.rooms(), Some(RoleKind::Employee), Some(&employee));
    assert!(visible.is_empty());
}

#[test]
fn employee_with_view_sees_only_assigned_rooms() {
    let mut store = DomainStore::new();
    let assigned = store.add_room(Room::new("101"), Performer::Admin).unwrap();
    store.add_room(Room::new("102"), Performer::Admin).unwrap();

    let mut employee = employee_with(Permissions::view_only());
    employee.assigned_room_ids = vec![assigned];

    let visible = scoped_rooms(store.rooms(), Some(RoleKind::Employee), Some(&employee));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, assigned);
}

#[test]
fn view_permission_without_assignments_yields_empty_list() {
    let mut store = DomainStore::new();
    store.add_room(Room::new("101"), Performer::Admin).unwrap();

    let employee = employee_with(Permissions::view_only());
    let visible = scoped_rooms(store.rooms(), Some(RoleKind::Employee), Some(&employee));
    assert!(visible.is_empty());
}

#[test]
fn unauthenticated_viewer_sees_no_rooms() {
    let mut store = DomainStore::new();
    store.add_room(Room::new("101"), Performer::System).unwrap();

    assert!(scoped_rooms(store.rooms(), None, None).is_empty());
    assert!(scoped_rooms(store.rooms(), Some(RoleKind::Employee), None).is_empty());
}

#[test]
fn tenant_list_respects_view_flag() {
    let mut store = DomainStore::new();
    store.add_tenant(Tenant::new("Omar", "101"), Performer::Admin);

    let with_view = employee_with(Permissions::view_only());
    assert_eq!(
        scoped_tenants(store.tenants(), Some(RoleKind::Employee), Some(&with_view)).len(),
        1
    );

    let mut no_view = Permissions::view_only();
    no_view.tenants.view = false;
    let without_view = employee_with(no_view);
    assert!(
        scoped_tenants(store.tenants(), Some(RoleKind::Employee), Some(&without_view)).is_empty()
    );

    assert_eq!(
        scoped_tenants(store.tenants(), Some(RoleKind::Admin), None).len(),
        1
    );
}

#[test]
fn recent_activity_keeps_five_newest_across_both_ledgers() {
    let mut store = DomainStore::new();
    for day in 1..=4 {
        store.add_payment(
            Payment::new("Omar", "101", 100.0 * day as f64, date(2024, 3, day)),
            Performer::Admin,
        );
    }
    for day in 5..=7 {
        store.add_expense(
            Expense::new("Supplies", 10.0 * day as f64, date(2024, 3, day)),
            Performer::Admin,
        );
    }

    let feed = recent_activity(store.payments(), store.expenses());
    assert_eq!(feed.len(), 5);

    // Newest first: the three expenses, then the two latest payments.
    assert!(matches!(feed[0], RecentEntry::Expense(e) if e.amount == 70.0));
    assert!(matches!(feed[1], RecentEntry::Expense(e) if e.amount == 60.0));
    assert!(matches!(feed[2], RecentEntry::Expense(e) if e.amount == 50.0));
    assert!(matches!(feed[3], RecentEntry::Payment(p) if p.amount == 400.0));
    assert!(matches!(feed[4], RecentEntry::Payment(p) if p.amount == 300.0));

    let ids: Vec<_> = feed.iter().map(RecentEntry::id).collect();
    let mut sorted = ids.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}
