// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The canonical, wire-ready analytics event for the Supabase event store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// Platform tag stamped on every outgoing event.
///
/// Fixed for the client build this core ships in; never parameterized.
pub const PLATFORM: &str = "iOS";

/// A normalized analytics event, ready to hand to the transport.
///
/// Every property value has already been coerced to text, with exactly one
/// entry per raw-event key. Field names and optionality are part of the
/// backend contract and must not change: absent optionals are omitted from
/// the encoded object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupabaseAnalyticsEvent {
	pub event_name: String,
	pub properties: BTreeMap<String, String>,
	pub timestamp: DateTime<Utc>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub session_id: Option<SessionId>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub app_version: Option<String>,
	pub platform: String,
}
