//! Property-based tests for list filtering and sorting.
//!
//! Uses proptest to verify:
//! 1. Filtering never invents rows: the result is a subsequence of the input.
//! 2. Search is case-insensitive: a term and its uppercase twin agree.
//! 3. Records with missing sort keys keep their relative order.
//! 4. Toggling the sort direction twice restores the original ordering.

use proptest::prelude::*;

use opsdeck::lists::{
    SortConfig, SortDirection, UserFilter, UserSortKey, filter_users, sort_users,
};
use opsdeck_model::{User, UserRole, UserStatus};

// --- Arbitrary implementations for record types ---

/// Strategy for generating arbitrary roles.
fn arb_role() -> impl Strategy<Value = UserRole> {
    prop_oneof![
        Just(UserRole::Admin),
        Just(UserRole::Editor),
        Just(UserRole::Viewer),
        Just(UserRole::User),
    ]
}

/// Strategy for generating arbitrary statuses.
fn arb_status() -> impl Strategy<Value = UserStatus> {
    prop_oneof![
        Just(UserStatus::Active),
        Just(UserStatus::Inactive),
        Just(UserStatus::Suspended),
        Just(UserStatus::Pending),
    ]
}

/// Strategy for generating arbitrary users.
///
/// Names may be empty so the missing-sort-key path gets exercised; ids are
/// unique decimal strings assigned positionally by [`arb_users`].
fn arb_user(id: usize) -> impl Strategy<Value = User> {
    (
        "[a-zA-Z ]{0,12}",
        "[a-z0-9.]{1,10}",
        arb_role(),
        arb_status(),
        "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    )
        .prop_map(move |(name, local, role, status, join_date)| User {
            id: id.to_string(),
            name,
            email: format!("{local}@example.com"),
            role,
            status,
            avatar: String::new(),
            last_active: String::new(),
            join_date,
            phone: None,
            department: None,
        })
}

/// Strategy for a list of up to 16 users with unique ids.
fn arb_users() -> impl Strategy<Value = Vec<User>> {
    (0usize..16)
        .prop_flat_map(|len| (1..=len).map(arb_user).collect::<Vec<_>>())
}

/// Strategy for an arbitrary filter configuration.
fn arb_filter() -> impl Strategy<Value = UserFilter> {
    (
        "[a-zA-Z]{0,6}",
        prop::option::of(arb_role()),
        prop::option::of(arb_status()),
    )
        .prop_map(|(search, role, status)| UserFilter {
            search,
            role,
            status,
        })
}

// --- Properties ---

proptest! {
    /// Filtering selects a subsequence: every output row is an input row,
    /// and input order is preserved.
    #[test]
    fn filter_result_is_a_subsequence(users in arb_users(), filter in arb_filter()) {
        let visible = filter_users(&users, &filter);
        let mut cursor = 0;
        for row in visible {
            let position = users[cursor..]
                .iter()
                .position(|u| u.id == row.id)
                .map(|offset| cursor + offset);
            prop_assert!(position.is_some(), "row {} out of order or invented", row.id);
            cursor = position.unwrap_or(0) + 1;
        }
    }

    /// Upper-casing the search term never changes the result.
    #[test]
    fn search_is_case_insensitive(users in arb_users(), term in "[a-zA-Z]{0,6}") {
        let lower = UserFilter { search: term.to_lowercase(), ..Default::default() };
        let upper = UserFilter { search: term.to_uppercase(), ..Default::default() };
        let lower_ids: Vec<&str> = filter_users(&users, &lower).iter().map(|u| u.id.as_str()).collect();
        let upper_ids: Vec<&str> = filter_users(&users, &upper).iter().map(|u| u.id.as_str()).collect();
        prop_assert_eq!(lower_ids, upper_ids);
    }

    /// Rows whose sort key is empty keep their relative order under any
    /// sort configuration.
    #[test]
    fn empty_keys_keep_relative_order(users in arb_users(), descending in any::<bool>()) {
        let config = SortConfig {
            key: UserSortKey::Name,
            direction: if descending { SortDirection::Descending } else { SortDirection::Ascending },
        };
        let mut rows: Vec<&User> = users.iter().collect();
        sort_users(&mut rows, config);

        let blank_ids: Vec<&str> = rows
            .iter()
            .filter(|u| u.name.is_empty())
            .map(|u| u.id.as_str())
            .collect();
        let expected: Vec<&str> = users
            .iter()
            .filter(|u| u.name.is_empty())
            .map(|u| u.id.as_str())
            .collect();
        prop_assert_eq!(blank_ids, expected);
    }

    /// Sorting is a permutation: no rows appear or disappear.
    #[test]
    fn sorting_preserves_the_row_set(users in arb_users()) {
        let mut rows: Vec<&User> = users.iter().collect();
        sort_users(&mut rows, SortConfig {
            key: UserSortKey::Email,
            direction: SortDirection::Ascending,
        });
        let mut sorted_ids: Vec<&str> = rows.iter().map(|u| u.id.as_str()).collect();
        sorted_ids.sort_unstable();
        let mut original_ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        original_ids.sort_unstable();
        prop_assert_eq!(sorted_ids, original_ids);
    }

    /// When every key is present and distinct, toggling the direction twice
    /// and re-sorting reproduces the ascending order exactly.
    #[test]
    fn double_toggle_is_identity_on_distinct_keys(users in arb_users()) {
        // Emails are unique per row here only if locals differ; dedupe first.
        let mut seen = std::collections::HashSet::new();
        let distinct: Vec<&User> = users.iter().filter(|u| seen.insert(u.email.clone())).collect();

        let direction = SortDirection::Ascending;
        let config = SortConfig { key: UserSortKey::Email, direction };

        let mut once: Vec<&User> = distinct.clone();
        sort_users(&mut once, config);

        let toggled_back = SortConfig { key: config.key, direction: direction.toggled().toggled() };
        let mut twice: Vec<&User> = distinct;
        sort_users(&mut twice, toggled_back);

        let once_ids: Vec<&str> = once.iter().map(|u| u.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|u| u.id.as_str()).collect();
        prop_assert_eq!(once_ids, twice_ids);
    }
}
