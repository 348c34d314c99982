// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event normalization into the canonical wire form.

use std::sync::Arc;

use shvil_analytics_core::{AnalyticsEvent, SessionId, SupabaseAnalyticsEvent, PLATFORM};
use tracing::debug;

use crate::metadata::AppMetadata;

/// Maps raw application events into canonical, string-valued events.
///
/// Normalization is total and synchronous: every property value renders as
/// some text and the key set is preserved exactly. The only external read
/// is the app-metadata lookup, performed fresh on every call. Safe to
/// share across tasks; nothing is cached or mutated.
pub struct Normalizer {
	metadata: Arc<dyn AppMetadata>,
}

impl Normalizer {
	/// Creates a normalizer backed by the given app-metadata collaborator.
	pub fn new(metadata: Arc<dyn AppMetadata>) -> Self {
		Self { metadata }
	}

	/// Normalizes `event`, stamping the caller's session id.
	///
	/// The session id comes from the caller, never from the event. The
	/// platform tag is always [`PLATFORM`]. Any user reference stays with
	/// the caller; the canonical form does not carry one.
	#[must_use]
	pub fn normalize(
		&self,
		event: &AnalyticsEvent,
		session_id: Option<&SessionId>,
	) -> SupabaseAnalyticsEvent {
		let properties = event.properties.coerce();
		debug!(
			event_name = %event.name,
			property_count = properties.len(),
			"Normalized analytics event"
		);

		SupabaseAnalyticsEvent {
			event_name: event.name.clone(),
			properties,
			timestamp: event.timestamp,
			session_id: session_id.cloned(),
			app_version: self.metadata.current_app_version(),
			platform: PLATFORM.to_string(),
		}
	}
}
