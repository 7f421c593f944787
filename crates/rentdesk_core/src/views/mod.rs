//! Derived views: pure, stateless transforms over store snapshots.
//!
//! # Responsibility
//! - Compute role-scoped lists, trend buckets, month groupings, and the
//!   recent-activity feed from current collections.
//!
//! # Invariants
//! - No function here holds state or mutates its inputs; every result is
//!   recomputed from the snapshot passed in.
//! - An unauthenticated viewer sees empty scoped lists.

use crate::model::employee::{Employee, RoleKind};
use crate::model::expense::{Expense, ExpenseStatus};
use crate::model::payment::{Payment, PaymentStatus};
use crate::model::permissions::{Action, Module};
use crate::model::room::Room;
use crate::model::tenant::Tenant;
use crate::model::EntityId;
use crate::store::Stats;
use chrono::{Datelike, NaiveDate};

/// Room list scoped to the viewer.
///
/// Admin sees everything. An employee sees the intersection of existing
/// rooms and their allow-list, and only when the module `view` flag is
/// granted; without it (or without a resolvable employee record) the list
/// is empty. No session means no list.
pub fn scoped_rooms<'a>(
    rooms: &'a [Room],
    role: Option<RoleKind>,
    employee: Option<&Employee>,
) -> Vec<&'a Room> {
    match role {
        Some(RoleKind::Admin) => rooms.iter().collect(),
        Some(RoleKind::Employee) => match employee {
            Some(employee) if employee.role.allows(Module::Rooms, Action::View) => rooms
                .iter()
                .filter(|room| employee.is_room_accessible(room.id))
                .collect(),
            _ => Vec::new(),
        },
        None => Vec::new(),
    }
}

/// Tenant list scoped to the viewer: all tenants for Admin or an employee
/// with the `view` flag, empty otherwise.
pub fn scoped_tenants<'a>(
    tenants: &'a [Tenant],
    role: Option<RoleKind>,
    employee: Option<&Employee>,
) -> Vec<&'a Tenant> {
    match role {
        Some(RoleKind::Admin) => tenants.iter().collect(),
        Some(RoleKind::Employee) => match employee {
            Some(employee) if employee.role.allows(Module::Tenants, Action::View) => {
                tenants.iter().collect()
            }
            _ => Vec::new(),
        },
        None => Vec::new(),
    }
}

/// One calendar-month bucket in the six-month trend window.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBucket {
    /// Short month label ("Jan").
    pub label: String,
    pub year: i32,
    pub month: u32,
    /// Sum of Paid payments dated inside this month.
    pub income: f64,
    /// Sum of Paid expenses dated inside this month.
    pub expenses: f64,
}

/// Six trailing calendar months ending at `today`'s month, oldest first.
pub fn monthly_trend(payments: &[Payment], expenses: &[Expense], today: NaiveDate) -> Vec<TrendBucket> {
    (0..6)
        .rev()
        .map(|back| {
            let (year, month) = months_back(today, back);
            let income = payments
                .iter()
                .filter(|p| {
                    p.status == PaymentStatus::Paid
                        && p.date.year() == year
                        && p.date.month() == month
                })
                .map(|p| p.amount)
                .sum();
            let month_expenses = expenses
                .iter()
                .filter(|e| {
                    e.status == ExpenseStatus::Paid
                        && e.date.year() == year
                        && e.date.month() == month
                })
                .map(|e| e.amount)
                .sum();

            TrendBucket {
                label: month_label(year, month, "%b"),
                year,
                month,
                income,
                expenses: month_expenses,
            }
        })
        .collect()
}

/// Expenses of one calendar month, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    /// Long month label ("March 2024").
    pub label: String,
    pub entries: Vec<&'a Expense>,
}

/// Groups expenses by calendar month, groups ordered most recent first and
/// entries inside each group sorted by date descending.
pub fn expenses_by_month(expenses: &[Expense]) -> Vec<MonthGroup<'_>> {
    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut groups: Vec<MonthGroup<'_>> = Vec::new();
    let mut last_key = None;
    for expense in sorted {
        let key = (expense.date.year(), expense.date.month());
        if last_key != Some(key) {
            groups.push(MonthGroup {
                label: month_label(key.0, key.1, "%B %Y"),
                entries: Vec::new(),
            });
            last_key = Some(key);
        }
        if let Some(group) = groups.last_mut() {
            group.entries.push(expense);
        }
    }
    groups
}

/// One record in the recent-activity feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecentEntry<'a> {
    Payment(&'a Payment),
    Expense(&'a Expense),
}

impl RecentEntry<'_> {
    pub fn id(&self) -> EntityId {
        match self {
            Self::Payment(p) => p.id,
            Self::Expense(e) => e.id,
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            Self::Payment(p) => p.amount,
            Self::Expense(e) => e.amount,
        }
    }
}

/// The five most recent payment and expense records combined, newest
/// first. Ids are creation-ordered, so descending id equals recency.
pub fn recent_activity<'a>(payments: &'a [Payment], expenses: &'a [Expense]) -> Vec<RecentEntry<'a>> {
    let mut entries: Vec<RecentEntry<'a>> = payments
        .iter()
        .map(RecentEntry::Payment)
        .chain(expenses.iter().map(RecentEntry::Expense))
        .collect();
    entries.sort_by(|a, b| b.id().cmp(&a.id()));
    entries.truncate(5);
    entries
}

/// One slice of the income/expense distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSlice {
    pub label: &'static str,
    pub amount: f64,
}

/// Income vs expense totals with zero slices omitted.
pub fn income_expense_split(stats: &Stats) -> Vec<SplitSlice> {
    [
        SplitSlice {
            label: "Income",
            amount: stats.total_income,
        },
        SplitSlice {
            label: "Expenses",
            amount: stats.total_expenses,
        },
    ]
    .into_iter()
    .filter(|slice| slice.amount > 0.0)
    .collect()
}

/// Calendar month `back` months before `today`.
fn months_back(today: NaiveDate, back: u32) -> (i32, u32) {
    let total = today.year() * 12 + today.month0() as i32 - back as i32;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

fn month_label(year: i32, month: u32, format: &str) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format(format).to_string())
        .unwrap_or_default()
}
