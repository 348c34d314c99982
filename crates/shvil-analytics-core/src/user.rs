// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User identity types, including the guest fallback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Email address carried by every guest identity.
pub const GUEST_EMAIL: &str = "guest@shvil.app";

/// Display name carried by every guest identity.
pub const GUEST_DISPLAY_NAME: &str = "Guest";

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
	#[must_use]
	pub fn new() -> Self {
		Self(Uuid::new_v4())
	}

	#[must_use]
	pub fn as_uuid(&self) -> &Uuid {
		&self.0
	}
}

impl Default for UserId {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::str::FromStr for UserId {
	type Err = uuid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(Uuid::parse_str(s)?))
	}
}

/// A Shvil user or guest identity.
///
/// Identities are immutable once constructed: there are no mutation
/// operations, and a new auth session replaces the value wholesale. The
/// guest factory produces a fixed-shape identity with a fresh id on every
/// call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: UserId,
	pub email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
	pub created_at: DateTime<Utc>,
	pub is_guest: bool,
}

impl User {
	/// Creates an authenticated identity with a fresh id and now-timestamp.
	///
	/// The email is taken as-is; format validation is the caller's concern.
	pub fn new(email: impl Into<String>) -> Self {
		Self {
			id: UserId::new(),
			email: email.into(),
			display_name: None,
			created_at: Utc::now(),
			is_guest: false,
		}
	}

	/// Creates the guest fallback identity.
	///
	/// Every call yields a fresh id and timestamp; the email and display
	/// name are fixed. No uniqueness bookkeeping across calls.
	pub fn guest() -> Self {
		Self {
			id: UserId::new(),
			email: GUEST_EMAIL.to_string(),
			display_name: Some(GUEST_DISPLAY_NAME.to_string()),
			created_at: Utc::now(),
			is_guest: true,
		}
	}

	/// Overrides the generated id (builder pattern).
	#[must_use]
	pub fn with_id(mut self, id: UserId) -> Self {
		self.id = id;
		self
	}

	/// Sets the display name (builder pattern).
	#[must_use]
	pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
		self.display_name = Some(display_name.into());
		self
	}

	/// Overrides the creation timestamp (builder pattern).
	#[must_use]
	pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
		self.created_at = created_at;
		self
	}

	/// The display name when present, else the email.
	#[must_use]
	pub fn display_name_or_email(&self) -> &str {
		self.display_name.as_deref().unwrap_or(&self.email)
	}

	/// Whether this identity belongs to an authenticated (non-guest) user.
	#[must_use]
	pub fn is_authenticated(&self) -> bool {
		!self.is_guest
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_new_user_is_authenticated() {
		let user = User::new("noa@example.com");
		assert_eq!(user.email, "noa@example.com");
		assert!(user.display_name.is_none());
		assert!(!user.is_guest);
		assert!(user.is_authenticated());
	}

	#[test]
	fn test_guest_has_fixed_shape() {
		let guest = User::guest();
		assert_eq!(guest.email, GUEST_EMAIL);
		assert_eq!(guest.display_name.as_deref(), Some(GUEST_DISPLAY_NAME));
		assert!(guest.is_guest);
		assert!(!guest.is_authenticated());
	}

	#[test]
	fn test_guest_ids_are_distinct() {
		let a = User::guest();
		let b = User::guest();
		assert_ne!(a.id, b.id);
	}

	#[test]
	fn test_display_name_or_email_prefers_display_name() {
		let user = User::new("noa@example.com").with_display_name("Noa");
		assert_eq!(user.display_name_or_email(), "Noa");
	}

	#[test]
	fn test_display_name_or_email_falls_back_to_email() {
		let user = User::new("noa@example.com");
		assert_eq!(user.display_name_or_email(), "noa@example.com");
	}

	#[test]
	fn test_builder_overrides() {
		let id = UserId::new();
		let created_at = "2025-06-01T08:30:00Z".parse().unwrap();
		let user = User::new("noa@example.com")
			.with_id(id)
			.with_created_at(created_at);
		assert_eq!(user.id, id);
		assert_eq!(user.created_at, created_at);
	}

	#[test]
	fn test_wire_field_names_are_camel_case() {
		let user = User::new("noa@example.com").with_display_name("Noa");
		let json = serde_json::to_value(&user).unwrap();
		assert!(json.get("displayName").is_some());
		assert!(json.get("createdAt").is_some());
		assert!(json.get("isGuest").is_some());
		assert!(json.get("display_name").is_none());
	}

	#[test]
	fn test_absent_display_name_is_omitted() {
		let user = User::new("noa@example.com");
		let json = serde_json::to_value(&user).unwrap();
		assert!(json.get("displayName").is_none());
	}

	proptest! {
		#[test]
		fn user_id_roundtrip(uuid_bytes in any::<[u8; 16]>()) {
			let id = UserId(Uuid::from_bytes(uuid_bytes));
			let s = id.to_string();
			let parsed: UserId = s.parse().unwrap();
			prop_assert_eq!(id, parsed);
		}

		#[test]
		fn is_authenticated_negates_is_guest(guest in proptest::bool::ANY) {
			let user = if guest {
				User::guest()
			} else {
				User::new("someone@example.com")
			};
			prop_assert_eq!(user.is_authenticated(), !user.is_guest);
		}

		#[test]
		fn display_name_wins_when_present(
			email in "[a-z]{1,10}@[a-z]{1,10}\\.com",
			name in "[A-Za-z ]{1,20}",
		) {
			let user = User::new(email.clone()).with_display_name(name.clone());
			prop_assert_eq!(user.display_name_or_email(), name);

			let bare = User::new(email.clone());
			prop_assert_eq!(bare.display_name_or_email(), email);
		}
	}
}
