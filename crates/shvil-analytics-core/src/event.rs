// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Raw application events and the persisted event-log record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::properties::{Properties, PropertyValue};
use crate::session::SessionId;
use crate::supabase::PLATFORM;
use crate::user::UserId;

/// An application-internal record of "something happened".
///
/// Property values keep their declared kinds here; they are coerced to
/// text only when the event is normalized for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
	pub name: String,
	pub properties: Properties,
	pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
	/// Creates an event named `name`, stamped with the current time.
	///
	/// Any name is accepted, including empty; no validation is performed.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			properties: Properties::new(),
			timestamp: Utc::now(),
		}
	}

	/// Adds a single property (builder pattern).
	#[must_use]
	pub fn with_property(
		mut self,
		key: impl Into<String>,
		value: impl Into<PropertyValue>,
	) -> Self {
		self.properties = self.properties.insert(key, value);
		self
	}

	/// Replaces the property map (builder pattern).
	#[must_use]
	pub fn with_properties(mut self, properties: Properties) -> Self {
		self.properties = properties;
		self
	}

	/// Overrides the event timestamp (builder pattern).
	#[must_use]
	pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
		self.timestamp = timestamp;
		self
	}
}

/// Unique identifier for a logged event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
	#[must_use]
	pub fn new() -> Self {
		Self(Uuid::new_v4())
	}

	#[must_use]
	pub fn as_uuid(&self) -> &Uuid {
		&self.0
	}
}

impl Default for EventId {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Display for EventId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::str::FromStr for EventId {
	type Err = uuid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(Uuid::parse_str(s)?))
	}
}

/// A persisted event-log record with string-valued properties.
///
/// Sibling of [`crate::SupabaseAnalyticsEvent`]: both views share the same
/// field vocabulary and are constructed independently from a raw event.
/// The user reference is by id only and carries no lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
	pub id: EventId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<UserId>,
	pub event_name: String,
	pub properties: BTreeMap<String, String>,
	pub timestamp: DateTime<Utc>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub session_id: Option<SessionId>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub app_version: Option<String>,
	pub platform: String,
}

impl Event {
	/// Creates a record named `event_name` with a fresh id, a
	/// now-timestamp, and the fixed platform tag.
	///
	/// Any name is accepted, including empty; no validation is performed
	/// on the name or the properties.
	pub fn new(event_name: impl Into<String>) -> Self {
		Self {
			id: EventId::new(),
			user_id: None,
			event_name: event_name.into(),
			properties: BTreeMap::new(),
			timestamp: Utc::now(),
			session_id: None,
			app_version: None,
			platform: PLATFORM.to_string(),
		}
	}

	/// Attributes the record to a user (builder pattern).
	#[must_use]
	pub fn with_user(mut self, user_id: UserId) -> Self {
		self.user_id = Some(user_id);
		self
	}

	/// Replaces the string-valued property map (builder pattern).
	#[must_use]
	pub fn with_properties(mut self, properties: BTreeMap<String, String>) -> Self {
		self.properties = properties;
		self
	}

	/// Overrides the event timestamp (builder pattern).
	#[must_use]
	pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
		self.timestamp = timestamp;
		self
	}

	/// Stamps the session this record belongs to (builder pattern).
	#[must_use]
	pub fn with_session(mut self, session_id: SessionId) -> Self {
		self.session_id = Some(session_id);
		self
	}

	/// Sets the app version (builder pattern).
	#[must_use]
	pub fn with_app_version(mut self, app_version: impl Into<String>) -> Self {
		self.app_version = Some(app_version.into());
		self
	}
}
